//! Options popup state.

use crate::prefs::status_command;
use crate::session::Session;

/// The status message editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusEditor {
    #[default]
    Closed,
    Editing,
    /// Shown as a disabled "Status Updated" button.
    Updated,
}

impl StatusEditor {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Editing,
            Self::Editing => Self::Closed,
            Self::Updated => Self::Updated,
        }
    }

    /// Submit the editor; returns the new state and the command to send.
    #[must_use]
    pub fn submit(self, text: &str) -> (Self, String) {
        (Self::Updated, status_command(text))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountButton {
    ChangePassword,
    Register,
}

/// Guests get no account button at all.
#[must_use]
pub fn account_button(session: &Session) -> Option<AccountButton> {
    session.named.then(|| {
        if session.is_registered() {
            AccountButton::ChangePassword
        } else {
            AccountButton::Register
        }
    })
}
