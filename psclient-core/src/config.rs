//! Where the client finds its external resources.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root of the dex site entity links point into.
    pub dex_root: String,
    /// Prefix for sprites and other static resources.
    pub resource_prefix: String,
    /// Endpoint login-server actions are posted to.
    pub login_server: String,
    /// Host path of the public user profile pages.
    pub users_route: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            dex_root: "//dex.pokemonshowdown.com/".to_string(),
            resource_prefix: "//play.pokemonshowdown.com/".to_string(),
            login_server: "https://play.pokemonshowdown.com/api/".to_string(),
            users_route: "pokemonshowdown.com/users".to_string(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn trainer_sprite(&self, name: &str) -> String {
        format!("{}sprites/trainers/{name}.png", self.resource_prefix)
    }

    #[must_use]
    pub fn custom_trainer_sprite(&self, name: &str) -> String {
        format!("{}sprites/trainers-custom/{name}.png", self.resource_prefix)
    }

    #[must_use]
    pub fn profile_url(&self, userid: &str) -> String {
        format!("//{}/{userid}", self.users_route)
    }

    /// Link target of a dex entry; `path` is `section/id`.
    #[must_use]
    pub fn dex_url(&self, path: &str) -> String {
        format!("{}{path}", self.dex_root)
    }

    #[must_use]
    pub fn type_sprite(&self, name: &str) -> String {
        format!("{}sprites/types/{name}.png", self.resource_prefix)
    }

    #[must_use]
    pub fn category_sprite(&self, name: &str) -> String {
        format!("{}sprites/categories/{name}.png", self.resource_prefix)
    }

    /// Inline style showing species `num` from the 12-wide icon sheet.
    #[must_use]
    pub fn pokemon_icon_style(&self, num: i32) -> String {
        let index = num.max(0);
        format!(
            "background:transparent url({}sprites/pokemonicons-sheet.png) no-repeat scroll -{}px -{}px",
            self.resource_prefix,
            (index % 12) * 40,
            (index / 12) * 30
        )
    }

    /// Inline style showing item sprite `num` from the 16-wide item sheet.
    #[must_use]
    pub fn item_icon_style(&self, num: u32) -> String {
        format!(
            "background:transparent url({}sprites/itemicons-sheet.png) no-repeat scroll -{}px -{}px",
            self.resource_prefix,
            (num % 16) * 24,
            (num / 16) * 24
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_sheets_are_indexed_by_number() {
        let config = ClientConfig::default();
        assert!(config.pokemon_icon_style(25).ends_with("-40px -60px"));
        assert!(config.item_icon_style(17).ends_with("-24px -24px"));
        assert!(config.pokemon_icon_style(-1).ends_with("-0px -0px"));
    }

    #[test]
    fn urls_join_roots() {
        let config = ClientConfig::default();
        assert_eq!(
            config.dex_url("pokemon/pikachu"),
            "//dex.pokemonshowdown.com/pokemon/pikachu"
        );
        assert_eq!(config.profile_url("zarel"), "//pokemonshowdown.com/users/zarel");
    }
}
