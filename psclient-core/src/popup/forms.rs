//! Change-password and registration forms.

use crate::connection::{LoginRequest, LoginResponse};
use crate::error::ClientError;
use crate::session::Session;
use thiserror::Error;

pub const PASSWORD_CHANGED: &str = "Your password was successfully changed!";
pub const REGISTERED: &str = "You have been successfully registered.";

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

fn check_passwords(fields: [&str; 3]) -> Result<(), FormError> {
    if fields.iter().any(|field| field.is_empty()) {
        return Err(FormError::MissingFields);
    }
    if fields[1] != fields[2] {
        return Err(FormError::PasswordMismatch);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub old_password: String,
    pub password: String,
    pub confirm: String,
}

impl ChangePasswordForm {
    /// # Errors
    ///
    /// Returns an error when a field is blank or the new passwords differ.
    pub fn request(&self) -> Result<LoginRequest, FormError> {
        check_passwords([&self.old_password, &self.password, &self.confirm])?;
        Ok(LoginRequest::new("changepassword")
            .param("oldpassword", &self.old_password)
            .param("password", &self.password)
            .param("cpassword", &self.confirm))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub captcha: String,
    pub password: String,
    pub confirm: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns an error when a field is blank or the passwords differ.
    pub fn request(&self, session: &Session) -> Result<LoginRequest, FormError> {
        check_passwords([&self.captcha, &self.password, &self.confirm])?;
        Ok(LoginRequest::new("register")
            .param("captcha", &self.captcha)
            .param("password", &self.password)
            .param("cpassword", &self.confirm)
            .param("username", &session.name)
            .param("challstr", &session.challstr))
    }
}

/// What a form does once the login server answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Shown in the form's inline error slot.
    Error(String),
    PasswordChanged,
    Registered {
        name: String,
        assertion: Option<String>,
    },
    /// Nothing to report; the error slot stays clear.
    Silent,
}

#[must_use]
pub fn change_password_outcome(result: Result<LoginResponse, ClientError>) -> FormOutcome {
    match result {
        Ok(response) => response
            .actionerror
            .map_or(FormOutcome::PasswordChanged, FormOutcome::Error),
        Err(err) => {
            log::warn!("password change failed: {err}");
            FormOutcome::Error(err.user_message())
        }
    }
}

#[must_use]
pub fn register_outcome(result: Result<LoginResponse, ClientError>) -> FormOutcome {
    match result {
        Ok(response) => {
            if let Some(name) = response.logged_in_name() {
                FormOutcome::Registered {
                    name: name.to_string(),
                    assertion: response.assertion.clone(),
                }
            } else {
                response
                    .actionerror
                    .map_or(FormOutcome::Silent, FormOutcome::Error)
            }
        }
        Err(err) => {
            log::warn!("registration failed: {err}");
            FormOutcome::Error(err.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(old: &str, new: &str, confirm: &str) -> ChangePasswordForm {
        ChangePasswordForm {
            old_password: old.into(),
            password: new.into(),
            confirm: confirm.into(),
        }
    }

    #[test]
    fn blank_fields_are_rejected_first() {
        assert_eq!(change("", "a", "b").request(), Err(FormError::MissingFields));
        assert_eq!(
            FormError::MissingFields.to_string(),
            "All fields are required"
        );
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let err = change("old", "a", "b").request().unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn valid_change_builds_request() {
        let request = change("old", "new", "new").request().unwrap();
        assert_eq!(request.action, "changepassword");
        assert_eq!(request.params["oldpassword"], "old");
        assert_eq!(request.params["cpassword"], "new");
    }

    #[test]
    fn register_sends_identity() {
        let mut session = Session::named("Red");
        session.challstr = "4|abc".into();
        let form = RegisterForm {
            captcha: "pikachu".into(),
            password: "pw".into(),
            confirm: "pw".into(),
        };
        let request = form.request(&session).unwrap();
        assert_eq!(request.params["username"], "Red");
        assert_eq!(request.params["challstr"], "4|abc");
    }

    #[test]
    fn remote_errors_share_the_inline_slot() {
        let response = LoginResponse::parse(r#"]{"actionerror":"Wrong password."}"#).unwrap();
        assert_eq!(
            change_password_outcome(Ok(response)),
            FormOutcome::Error("Wrong password.".into())
        );
        assert_eq!(
            change_password_outcome(Err(ClientError::Transport("offline".into()))),
            FormOutcome::Error("offline".into())
        );
        assert_eq!(
            change_password_outcome(Ok(LoginResponse::default())),
            FormOutcome::PasswordChanged
        );
    }

    #[test]
    fn registration_success_wins() {
        let response = LoginResponse::parse(
            r#"{"curuser":{"loggedin":true,"username":"Red"},"assertion":"xyz"}"#,
        )
        .unwrap();
        assert_eq!(
            register_outcome(Ok(response)),
            FormOutcome::Registered {
                name: "Red".into(),
                assertion: Some("xyz".into())
            }
        );
        assert_eq!(register_outcome(Ok(LoginResponse::default())), FormOutcome::Silent);
    }
}
