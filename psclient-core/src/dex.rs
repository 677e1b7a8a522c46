//! Game data consumed by the search-results renderer.
//!
//! The dex itself is owned by the host; this module only describes the shape
//! of the entries and the derived numbers the result rows display.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Oldest generation in which special attack and special defense are split.
pub const SPECIAL_SPLIT_GEN: u8 = 2;
/// Generations before this one cap displayed PP.
pub const PP_CAP_UNTIL_GEN: u8 = 3;
/// Maximum PP shown for generations before [`PP_CAP_UNTIL_GEN`].
pub const OLD_GEN_PP_CAP: u16 = 61;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl BaseStats {
    /// Base stat total as shown for `generation`; gen 1 has a single special stat.
    #[must_use]
    pub const fn total(&self, generation: u8) -> u16 {
        let sum = self.hp + self.atk + self.def + self.spa + self.spd + self.spe;
        if generation < SPECIAL_SPLIT_GEN {
            sum - self.spd
        } else {
            sum
        }
    }
}

/// Ability slots keyed the way the data files key them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abilities {
    #[serde(rename = "0", default)]
    pub primary: String,
    #[serde(rename = "1", default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(rename = "H", default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<String>,
    #[serde(rename = "S", default, skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub num: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forme: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub abilities: Abilities,
    #[serde(default)]
    pub base_stats: BaseStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default)]
    pub unreleased_hidden: bool,
}

impl Species {
    /// Offset of the `-Forme` suffix, if the species is an alternate forme.
    #[must_use]
    pub fn tag_start(&self) -> Option<usize> {
        let forme = self.forme.as_deref().filter(|forme| !forme.is_empty())?;
        let name_len = self.name.chars().count();
        let forme_len = forme.chars().count();
        name_len.checked_sub(forme_len + 1).filter(|&start| start > 0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    #[default]
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Special => "Special",
            Self::Status => "Status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum RawAccuracy {
    Flag(bool),
    Percent(u8),
}

/// Move accuracy; `true` in the data means the move never misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAccuracy", into = "RawAccuracy")]
pub enum Accuracy {
    AlwaysHits,
    Percent(u8),
}

impl Default for Accuracy {
    fn default() -> Self {
        Self::Percent(100)
    }
}

impl From<RawAccuracy> for Accuracy {
    fn from(raw: RawAccuracy) -> Self {
        match raw {
            RawAccuracy::Flag(true) => Self::AlwaysHits,
            RawAccuracy::Flag(false) => Self::Percent(0),
            RawAccuracy::Percent(value) => Self::Percent(value),
        }
    }
}

impl From<Accuracy> for RawAccuracy {
    fn from(accuracy: Accuracy) -> Self {
        match accuracy {
            Accuracy::AlwaysHits => Self::Flag(true),
            Accuracy::Percent(value) => Self::Percent(value),
        }
    }
}

impl Accuracy {
    /// `85%`, or an em dash for moves that skip the accuracy check.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Percent(value) if value > 0 => format!("{value}%"),
            _ => "\u{2014}".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub move_type: String,
    #[serde(default)]
    pub category: MoveCategory,
    #[serde(default)]
    pub base_power: u16,
    #[serde(default)]
    pub accuracy: Accuracy,
    #[serde(default)]
    pub pp: u8,
    #[serde(rename = "noPPBoosts", default)]
    pub no_pp_boosts: bool,
    #[serde(default)]
    pub short_desc: String,
}

impl Move {
    /// Offset of the type suffix on `Hidden Power <Type>`.
    #[must_use]
    pub fn tag_start(&self) -> Option<usize> {
        self.name.starts_with("Hidden Power").then_some(12)
    }

    /// PP with all PP Ups applied, capped the way old generations cap it.
    ///
    /// Integer arithmetic: exact for base PP 1 and multiples of 5, which is
    /// all real move data has. Any other base rounds down (3 shows as 4).
    #[must_use]
    pub fn display_pp(&self, generation: u8) -> u16 {
        let base = u16::from(self.pp);
        let pp = if self.pp == 1 || self.no_pp_boosts {
            base
        } else {
            base * 8 / 5
        };
        if generation < PP_CAP_UNTIL_GEN {
            pp.min(OLD_GEN_PP_CAP)
        } else {
            pp
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub spritenum: u32,
    #[serde(default)]
    pub short_desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub short_desc: String,
}

/// Read access to the host's game data.
pub trait DexLookup {
    /// Generation the data describes.
    fn generation(&self) -> u8;
    fn species(&self, id: &str) -> Option<&Species>;
    fn move_entry(&self, id: &str) -> Option<&Move>;
    fn item(&self, id: &str) -> Option<&Item>;
    fn ability(&self, id: &str) -> Option<&Ability>;

    /// Display title for a dex article, when the host knows one.
    fn article_title(&self, _id: &str) -> Option<&str> {
        None
    }

    /// Sprite name for a numbered trainer avatar.
    fn avatar_name(&self, _number: &str) -> Option<&str> {
        None
    }
}

/// In-memory dex loaded from the JSON data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dex {
    #[serde(rename = "gen")]
    pub generation: u8,
    #[serde(default)]
    pub species: HashMap<String, Species>,
    #[serde(default)]
    pub moves: HashMap<String, Move>,
    #[serde(default)]
    pub items: HashMap<String, Item>,
    #[serde(default)]
    pub abilities: HashMap<String, Ability>,
    #[serde(default)]
    pub article_titles: HashMap<String, String>,
    #[serde(default)]
    pub avatar_names: HashMap<String, String>,
}

impl Default for Dex {
    fn default() -> Self {
        Self::empty(9)
    }
}

impl Dex {
    #[must_use]
    pub fn empty(generation: u8) -> Self {
        Self {
            generation,
            species: HashMap::new(),
            moves: HashMap::new(),
            items: HashMap::new(),
            abilities: HashMap::new(),
            article_titles: HashMap::new(),
            avatar_names: HashMap::new(),
        }
    }

    /// Parse a dex from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a dex.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_species(mut self, species: Species) -> Self {
        self.species.insert(species.id.clone(), species);
        self
    }

    #[must_use]
    pub fn with_move(mut self, entry: Move) -> Self {
        self.moves.insert(entry.id.clone(), entry);
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.id.clone(), item);
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.insert(ability.id.clone(), ability);
        self
    }
}

impl DexLookup for Dex {
    fn generation(&self) -> u8 {
        self.generation
    }

    fn species(&self, id: &str) -> Option<&Species> {
        self.species.get(id)
    }

    fn move_entry(&self, id: &str) -> Option<&Move> {
        self.moves.get(id)
    }

    fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    fn ability(&self, id: &str) -> Option<&Ability> {
        self.abilities.get(id)
    }

    fn article_title(&self, id: &str) -> Option<&str> {
        self.article_titles.get(id).map(String::as_str)
    }

    fn avatar_name(&self, number: &str) -> Option<&str> {
        self.avatar_names.get(number).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_stats(value: u16) -> BaseStats {
        BaseStats {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    fn move_with_pp(pp: u8) -> Move {
        Move {
            id: "tackle".into(),
            name: "Tackle".into(),
            pp,
            ..Move::default()
        }
    }

    #[test]
    fn stat_total_drops_special_defense_in_gen_one() {
        assert_eq!(flat_stats(1).total(1), 5);
        assert_eq!(flat_stats(1).total(2), 6);
        assert_eq!(flat_stats(1).total(6), 6);
    }

    #[test]
    fn pp_is_boosted_and_capped_in_old_gens() {
        assert_eq!(move_with_pp(20).display_pp(3), 32);
        assert_eq!(move_with_pp(20).display_pp(2), 32);
        assert_eq!(move_with_pp(40).display_pp(2), 61);
        assert_eq!(move_with_pp(40).display_pp(9), 64);
    }

    #[test]
    fn odd_base_pp_rounds_down() {
        assert_eq!(move_with_pp(3).display_pp(9), 4);
        assert_eq!(move_with_pp(5).display_pp(9), 8);
    }

    #[test]
    fn pp_without_boosts_is_unchanged() {
        assert_eq!(move_with_pp(1).display_pp(9), 1);
        let mut sketch = move_with_pp(5);
        sketch.no_pp_boosts = true;
        assert_eq!(sketch.display_pp(9), 5);
    }

    #[test]
    fn forme_tag_points_at_separator() {
        let species = Species {
            id: "deoxysattack".into(),
            name: "Deoxys-Attack".into(),
            forme: Some("Attack".into()),
            ..Species::default()
        };
        assert_eq!(species.tag_start(), Some(6));

        let base = Species {
            id: "deoxys".into(),
            name: "Deoxys".into(),
            ..Species::default()
        };
        assert_eq!(base.tag_start(), None);
    }

    #[test]
    fn hidden_power_has_type_tag() {
        let hp = Move {
            name: "Hidden Power Fire".into(),
            ..Move::default()
        };
        assert_eq!(hp.tag_start(), Some(12));
        assert_eq!(move_with_pp(35).tag_start(), None);
    }

    #[test]
    fn accuracy_parses_flag_and_percent() {
        let json = r#"{"gen":9,"moves":{
            "swift":{"id":"swift","name":"Swift","type":"Normal","category":"Special","basePower":60,"accuracy":true,"pp":20},
            "thunder":{"id":"thunder","name":"Thunder","type":"Electric","category":"Special","basePower":110,"accuracy":70,"pp":10}
        }}"#;
        let dex = Dex::from_json(json).unwrap();
        let swift = dex.move_entry("swift").unwrap();
        assert_eq!(swift.accuracy, Accuracy::AlwaysHits);
        assert_eq!(swift.accuracy.label(), "\u{2014}");
        let thunder = dex.move_entry("thunder").unwrap();
        assert_eq!(thunder.accuracy.label(), "70%");
        assert_eq!(thunder.category, MoveCategory::Special);
    }

    #[test]
    fn species_json_uses_ability_slots() {
        let json = r#"{"gen":9,"species":{"landorus":{
            "id":"landorus","name":"Landorus","num":645,"types":["Ground","Flying"],
            "abilities":{"0":"Sand Force","H":"Sheer Force"},
            "baseStats":{"hp":89,"atk":125,"def":90,"spa":115,"spd":80,"spe":101}
        }}}"#;
        let dex = Dex::from_json(json).unwrap();
        let landorus = dex.species("landorus").unwrap();
        assert_eq!(landorus.abilities.primary, "Sand Force");
        assert_eq!(landorus.abilities.hidden.as_deref(), Some("Sheer Force"));
        assert_eq!(landorus.base_stats.total(9), 600);
    }
}
