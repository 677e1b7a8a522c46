//! Login popup.

use crate::session::{LoginState, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    /// A login is in flight.
    LoggingIn,
    /// The name is registered and needs its password.
    Password,
    /// The name is registered through an external provider.
    External,
    ChooseName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub username: String,
    pub username_locked: bool,
    pub error: Option<String>,
    /// Named users are told that renames are public.
    pub show_rename_notice: bool,
    pub step: LoginStep,
    /// The server claimed the name belongs to someone else.
    pub offer_other_name: bool,
}

/// Lay out the login popup.
///
/// `typed` is the username box's current value, `None` before first render.
#[must_use]
pub fn login_view(session: &Session, state: Option<&LoginState>, typed: Option<&str>) -> LoginView {
    let claimed = state.and_then(|state| state.name.as_deref());
    let username = session
        .logging_in
        .as_deref()
        .or(claimed)
        .or(typed)
        .map_or_else(
            || {
                if session.named {
                    session.name.clone()
                } else {
                    String::new()
                }
            },
            str::to_string,
        );
    let step = if session.logging_in.is_some() {
        LoginStep::LoggingIn
    } else if state.is_some_and(|state| state.needs_password) {
        LoginStep::Password
    } else if state.is_some_and(|state| state.needs_google) {
        LoginStep::External
    } else {
        LoginStep::ChooseName
    };
    LoginView {
        username,
        username_locked: session.logging_in.is_some() || claimed.is_some(),
        error: state.and_then(|state| state.error.clone()),
        show_rename_notice: session.named && state.is_none(),
        step,
        offer_other_name: claimed.is_some(),
    }
}

/// Name change requested by submitting the popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    ChangeName(String),
    ChangeNameWithPassword { name: String, password: String },
}

impl LoginView {
    /// `password` is the password box's value when that box is shown.
    #[must_use]
    pub fn submit(&self, password: Option<String>) -> LoginAction {
        match password {
            Some(password) if self.step == LoginStep::Password => {
                LoginAction::ChangeNameWithPassword {
                    name: self.username.clone(),
                    password,
                }
            }
            _ => LoginAction::ChangeName(self.username.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_starts_blank() {
        let view = login_view(&Session::guest("Guest 12"), None, None);
        assert_eq!(view.username, "");
        assert_eq!(view.step, LoginStep::ChooseName);
        assert!(!view.show_rename_notice);
        assert_eq!(view.submit(None), LoginAction::ChangeName(String::new()));
    }

    #[test]
    fn named_user_sees_current_name_and_notice() {
        let view = login_view(&Session::named("Red"), None, None);
        assert_eq!(view.username, "Red");
        assert!(view.show_rename_notice);
        let typed = login_view(&Session::named("Red"), None, Some("Gold"));
        assert_eq!(typed.username, "Gold");
    }

    #[test]
    fn password_step_locks_the_name() {
        let state = LoginState {
            name: Some("Zarel".into()),
            error: Some("Wrong password.".into()),
            needs_password: true,
            needs_google: false,
        };
        let view = login_view(&Session::guest("Guest 1"), Some(&state), Some("typed"));
        assert_eq!(view.username, "Zarel");
        assert!(view.username_locked);
        assert!(view.offer_other_name);
        assert_eq!(view.step, LoginStep::Password);
        assert_eq!(view.error.as_deref(), Some("Wrong password."));
        assert_eq!(
            view.submit(Some("hunter2".into())),
            LoginAction::ChangeNameWithPassword {
                name: "Zarel".into(),
                password: "hunter2".into()
            }
        );
    }

    #[test]
    fn in_flight_login_wins() {
        let mut session = Session::guest("Guest 1");
        session.logging_in = Some("Blue".into());
        let view = login_view(&session, None, None);
        assert_eq!(view.step, LoginStep::LoggingIn);
        assert_eq!(view.username, "Blue");
        assert!(view.username_locked);
    }

    #[test]
    fn external_provider_step() {
        let state = LoginState {
            name: Some("Zarel".into()),
            needs_google: true,
            ..LoginState::default()
        };
        let view = login_view(&Session::guest("Guest 1"), Some(&state), None);
        assert_eq!(view.step, LoginStep::External);
    }
}
