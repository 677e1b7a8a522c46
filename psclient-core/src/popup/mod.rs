//! Popup routing and the state each popup owns.

pub mod avatars;
pub mod backgrounds;
pub mod battle;
pub mod forms;
pub mod login;
pub mod moderation;
pub mod options;
pub mod user;

use crate::session::LoginState;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A popup addressed by its routing string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PopupRoute {
    /// `user-<name>`
    User(String),
    /// `viewuser-<name>`: profile without the interaction buttons.
    ViewUser(String),
    /// `users`: profile with a lookup form.
    Users,
    /// `useroptions-<user>-<room>`
    UserOptions { user: String, room: String },
    Volume,
    Options,
    Login,
    Avatars,
    ChangePassword,
    Register,
    ForfeitBattle,
    ReplacePlayer,
    ChangeBackground,
    ChatFormatting,
    ConfirmLeaveRoom,
    /// `popup-<id>`: a plain alert.
    Alert(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no popup is registered for {0:?}")]
    Unknown(String),
}

impl FromStr for PopupRoute {
    type Err = RouteError;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        let fixed = match route {
            "users" => Some(Self::Users),
            "volume" => Some(Self::Volume),
            "options" => Some(Self::Options),
            "login" => Some(Self::Login),
            "avatars" => Some(Self::Avatars),
            "changepassword" => Some(Self::ChangePassword),
            "register" => Some(Self::Register),
            "forfeitbattle" => Some(Self::ForfeitBattle),
            "replaceplayer" => Some(Self::ReplacePlayer),
            "changebackground" => Some(Self::ChangeBackground),
            "chatformatting" => Some(Self::ChatFormatting),
            "confirmleaveroom" => Some(Self::ConfirmLeaveRoom),
            _ => None,
        };
        if let Some(fixed) = fixed {
            return Ok(fixed);
        }
        if let Some(rest) = route.strip_prefix("useroptions-") {
            let (user, room) = rest.split_once('-').unwrap_or((rest, ""));
            return Ok(Self::UserOptions {
                user: user.to_string(),
                room: room.to_string(),
            });
        }
        if let Some(rest) = route.strip_prefix("viewuser-") {
            return Ok(Self::ViewUser(first_segment(rest)));
        }
        if let Some(rest) = route.strip_prefix("user-") {
            return Ok(Self::User(first_segment(rest)));
        }
        if let Some(id) = route.strip_prefix("popup-") {
            return Ok(Self::Alert(id.to_string()));
        }
        Err(RouteError::Unknown(route.to_string()))
    }
}

fn first_segment(rest: &str) -> String {
    rest.split('-').next().unwrap_or_default().to_string()
}

impl fmt::Display for PopupRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(name) => write!(f, "user-{name}"),
            Self::ViewUser(name) => write!(f, "viewuser-{name}"),
            Self::Users => f.write_str("users"),
            Self::UserOptions { user, room } => write!(f, "useroptions-{user}-{room}"),
            Self::Volume => f.write_str("volume"),
            Self::Options => f.write_str("options"),
            Self::Login => f.write_str("login"),
            Self::Avatars => f.write_str("avatars"),
            Self::ChangePassword => f.write_str("changepassword"),
            Self::Register => f.write_str("register"),
            Self::ForfeitBattle => f.write_str("forfeitbattle"),
            Self::ReplacePlayer => f.write_str("replaceplayer"),
            Self::ChangeBackground => f.write_str("changebackground"),
            Self::ChatFormatting => f.write_str("chatformatting"),
            Self::ConfirmLeaveRoom => f.write_str("confirmleaveroom"),
            Self::Alert(id) => write!(f, "popup-{id}"),
        }
    }
}

impl PopupRoute {
    /// Popups that never appear in the address bar.
    #[must_use]
    pub const fn has_url(&self) -> bool {
        !matches!(
            self,
            Self::UserOptions { .. }
                | Self::ChangePassword
                | Self::Register
                | Self::ForfeitBattle
                | Self::ReplacePlayer
                | Self::ChangeBackground
                | Self::ChatFormatting
                | Self::ConfirmLeaveRoom
                | Self::Alert(_)
        )
    }

    /// Width the popup wrapper is given, when fixed.
    #[must_use]
    pub const fn width(&self) -> Option<u32> {
        match self {
            Self::UserOptions { .. } | Self::Login | Self::ChangePassword | Self::Register => {
                Some(280)
            }
            Self::Avatars => Some(1210),
            Self::ForfeitBattle
            | Self::ReplacePlayer
            | Self::ChangeBackground
            | Self::ChatFormatting
            | Self::ConfirmLeaveRoom
            | Self::Alert(_) => Some(480),
            _ => None,
        }
    }

    /// Semimodal popups dim the rest of the client.
    #[must_use]
    pub const fn is_semimodal(&self) -> bool {
        !matches!(
            self,
            Self::User(_)
                | Self::ViewUser(_)
                | Self::Users
                | Self::UserOptions { .. }
                | Self::Volume
                | Self::Options
        )
    }
}

/// Optional arguments a popup is opened with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupArgs {
    /// Full username, overriding the id in the route.
    pub username: Option<String>,
    /// Room the popup was opened from.
    pub parent_room: Option<String>,
    pub message: Option<String>,
    pub ok_label: Option<String>,
    pub login_state: Option<LoginState>,
}

impl PopupArgs {
    #[must_use]
    pub fn from_room(room: &str) -> Self {
        Self {
            parent_room: Some(room.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn alert(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ok_label(&self) -> &str {
        self.ok_label.as_deref().unwrap_or("OK")
    }
}

/// Command closing `room` after the leave confirmation.
#[must_use]
pub fn close_room_command(room: &str) -> String {
    format!("/close {room}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_routes_parse() {
        assert_eq!("volume".parse(), Ok(PopupRoute::Volume));
        assert_eq!("confirmleaveroom".parse(), Ok(PopupRoute::ConfirmLeaveRoom));
    }

    #[test]
    fn prefixed_routes_carry_their_argument() {
        assert_eq!("user-zarel".parse(), Ok(PopupRoute::User("zarel".into())));
        assert_eq!(
            "viewuser-zarel".parse(),
            Ok(PopupRoute::ViewUser("zarel".into()))
        );
        assert_eq!(
            "popup-42".parse::<PopupRoute>().map(|r| r.to_string()),
            Ok("popup-42".to_string())
        );
    }

    #[test]
    fn user_options_keep_dashed_room_ids() {
        assert_eq!(
            "useroptions-bob-groupchat-alice-fun".parse(),
            Ok(PopupRoute::UserOptions {
                user: "bob".into(),
                room: "groupchat-alice-fun".into()
            })
        );
        assert_eq!(
            "useroptions-bob-".parse(),
            Ok(PopupRoute::UserOptions {
                user: "bob".into(),
                room: String::new()
            })
        );
    }

    #[test]
    fn unknown_routes_are_errors() {
        assert_eq!(
            "roomtablist".parse::<PopupRoute>(),
            Err(RouteError::Unknown("roomtablist".into()))
        );
    }

    #[test]
    fn alert_defaults_to_ok() {
        assert_eq!(PopupArgs::alert("hi").ok_label(), "OK");
        assert!(!PopupRoute::Register.has_url());
        assert_eq!(PopupRoute::Avatars.width(), Some(1210));
    }
}
