//! Avatar picker and avatar URL resolution.

use crate::config::ClientConfig;
use crate::dex::DexLookup;
use crate::id::to_id;

pub const AVATAR_COUNT: u32 = 293;
const RETIRED_AVATARS: [u32; 2] = [162, 168];
const SHEET_COLUMNS: u32 = 16;
const CELL_SIZE: u32 = 80;

/// Avatar numbers offered by the picker, in order.
pub fn selectable_avatars() -> impl Iterator<Item = u32> {
    (1..=AVATAR_COUNT).filter(|n| !RETIRED_AVATARS.contains(n))
}

/// CSS `background-position` of avatar `n` on the sprite sheet.
#[must_use]
pub fn sprite_offset(n: u32) -> String {
    let index = n.saturating_sub(1);
    format!(
        "-{}px -{}px",
        (index % SHEET_COLUMNS) * CELL_SIZE + 1,
        (index / SHEET_COLUMNS) * CELL_SIZE + 1
    )
}

/// The avatar value to store and the command announcing it.
#[must_use]
pub fn choose_avatar(n: u32, dex: &dyn DexLookup) -> (String, String) {
    let number = n.to_string();
    let avatar = dex.avatar_name(&number).unwrap_or(&number).to_string();
    let command = format!("/avatar {avatar}");
    (avatar, command)
}

/// Sprite URL for an avatar number, name, or `#custom` avatar.
#[must_use]
pub fn resolve_avatar(avatar: &str, dex: &dyn DexLookup, config: &ClientConfig) -> String {
    let avatar = dex.avatar_name(avatar).unwrap_or(avatar);
    if let Some(custom) = avatar.strip_prefix('#') {
        return config.custom_trainer_sprite(&to_id(custom));
    }
    let name: String = avatar
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    config.trainer_sprite(if name.is_empty() { "unknown" } else { &name })
}
