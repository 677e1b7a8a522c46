//! Forfeit and replace-player popups.

use crate::rooms::BattleInfo;
use crate::session::Session;
use thiserror::Error;

pub const FORFEIT_COMMAND: &str = "/forfeit";

/// Only unrated battles can hand a side to someone else.
#[must_use]
pub const fn can_replace_player(battle: &BattleInfo) -> bool {
    !battle.rated
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplaceError {
    #[error("Enter player's name")]
    MissingName,
    #[error("Cannot replace player, battle has already ended.")]
    BattleEnded,
}

impl ReplaceError {
    /// Line added to the battle log.
    #[must_use]
    pub fn log_line(&self) -> String {
        format!("|error|{self}")
    }
}

/// Commands handing the viewer's side of `battle` to `new_player`.
///
/// # Errors
///
/// Returns an error when the name is blank or the battle is over.
pub fn replace_player_commands(
    new_player: &str,
    battle: &BattleInfo,
    session: &Session,
) -> Result<[String; 2], ReplaceError> {
    if new_player.is_empty() {
        return Err(ReplaceError::MissingName);
    }
    if battle.ended {
        return Err(ReplaceError::BattleEnded);
    }
    let slot = if battle.p1.as_deref() == Some(session.userid.as_str()) {
        "p1"
    } else {
        "p2"
    };
    Ok([
        "/leavebattle".to_string(),
        format!("/addplayer {new_player}, {slot}"),
    ])
}
