//! User options popup: ignore, report, friend requests and moderation.

use crate::rooms::RoomDirectory;

const MUTE_RANKS: [char; 4] = ['%', '@', '#', '~'];
const BAN_RANKS: [char; 3] = ['@', '#', '~'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModAction {
    Mute,
    Ban,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunishmentLength {
    SevenMinutes,
    OneHour,
    TwoDays,
    OneWeek,
}

impl PunishmentLength {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SevenMinutes => "7 minutes",
            Self::OneHour => "1 hour",
            Self::TwoDays => "2 days",
            Self::OneWeek => "1 week",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub action: ModAction,
    pub length: PunishmentLength,
    pub reason: String,
}

impl PendingAction {
    /// The moderation command for `user`.
    ///
    /// The space after the name is always sent; the reason follows a comma.
    #[must_use]
    pub fn command(&self, user: &str) -> String {
        let base = match (self.action, self.length) {
            (ModAction::Mute, PunishmentLength::OneHour) => "/hourmute ",
            (ModAction::Mute, _) => "/mute ",
            (ModAction::Ban, PunishmentLength::OneWeek) => "/weekban ",
            (ModAction::Ban, _) => "/ban ",
        };
        let reason = if self.reason.is_empty() {
            String::new()
        } else {
            format!(",{}", self.reason)
        };
        format!("{base}{user} {reason}")
    }

    #[must_use]
    pub fn confirm_text(&self, user: &str, room_title: &str) -> String {
        let action = match self.action {
            ModAction::Mute => "Mute",
            ModAction::Ban => "Ban",
        };
        format!(
            "{action} {user} from {room_title} for {}?",
            self.length.label()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModerationState {
    #[default]
    Idle,
    ShowingMuteInput,
    ShowingBanInput,
    Confirming(PendingAction),
}

impl ModerationState {
    #[must_use]
    pub fn show_mute(self) -> Self {
        match self {
            Self::Confirming(_) => self,
            _ => Self::ShowingMuteInput,
        }
    }

    #[must_use]
    pub fn show_ban(self) -> Self {
        match self {
            Self::Confirming(_) => self,
            _ => Self::ShowingBanInput,
        }
    }

    #[must_use]
    pub fn cancel(self) -> Self {
        Self::Idle
    }

    /// `long` picks one hour instead of seven minutes.
    #[must_use]
    pub fn submit_mute(self, reason: &str, long: bool) -> Self {
        match self {
            Self::ShowingMuteInput => Self::Confirming(PendingAction {
                action: ModAction::Mute,
                length: if long {
                    PunishmentLength::OneHour
                } else {
                    PunishmentLength::SevenMinutes
                },
                reason: reason.to_string(),
            }),
            other => other,
        }
    }

    /// `long` picks one week instead of two days.
    #[must_use]
    pub fn submit_ban(self, reason: &str, long: bool) -> Self {
        match self {
            Self::ShowingBanInput => Self::Confirming(PendingAction {
                action: ModAction::Ban,
                length: if long {
                    PunishmentLength::OneWeek
                } else {
                    PunishmentLength::TwoDays
                },
                reason: reason.to_string(),
            }),
            other => other,
        }
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&PendingAction> {
        match self {
            Self::Confirming(pending) => Some(pending),
            _ => None,
        }
    }

    /// Whether the mute control (button or input) is on screen.
    #[must_use]
    pub const fn shows_mute_control(&self, permissions: Permissions) -> bool {
        permissions.can_mute && matches!(self, Self::Idle | Self::ShowingMuteInput)
    }

    #[must_use]
    pub const fn shows_ban_control(&self, permissions: Permissions) -> bool {
        permissions.can_ban && matches!(self, Self::Idle | Self::ShowingBanInput)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissions {
    pub can_mute: bool,
    pub can_ban: bool,
}

impl Permissions {
    /// The viewer's powers in `room`, which must be an open chat room.
    #[must_use]
    pub fn in_room(rooms: &RoomDirectory, room: &str, viewer: &str) -> Self {
        let rank = rooms.chat(room).and_then(|room| room.rank_of(viewer));
        rank.map_or_else(Self::default, |rank| Self {
            can_mute: MUTE_RANKS.contains(&rank),
            can_ban: BAN_RANKS.contains(&rank),
        })
    }

    #[must_use]
    pub const fn any(self) -> bool {
        self.can_mute || self.can_ban
    }
}

#[must_use]
pub fn ignore_command(user: &str) -> String {
    format!("/ignore {user}")
}

#[must_use]
pub fn friend_command(user: &str) -> String {
    format!("/friend add {user}")
}

#[must_use]
pub fn report_route(user: &str) -> String {
    format!("view-help-request-report-user-{user}")
}
