//! The signed-in user as the popups see it.

use crate::id::to_id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub name: String,
    pub userid: String,
}

impl RegisteredUser {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            userid: to_id(name),
        }
    }
}

/// Outcome of the last login attempt, shown by the login popup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginState {
    /// Name the server asked credentials for; locks the username field.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub needs_password: bool,
    #[serde(default)]
    pub needs_google: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub userid: String,
    /// False while the user still has a guest name.
    pub named: bool,
    pub registered: Option<RegisteredUser>,
    pub avatar: String,
    /// Name of a login currently in flight.
    pub logging_in: Option<String>,
    pub challstr: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::guest("")
    }
}

impl Session {
    #[must_use]
    pub fn guest(name: &str) -> Self {
        Self {
            name: name.to_string(),
            userid: to_id(name),
            named: false,
            registered: None,
            avatar: "1".to_string(),
            logging_in: None,
            challstr: String::new(),
        }
    }

    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            named: true,
            ..Self::guest(name)
        }
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registered
            .as_ref()
            .is_some_and(|registered| registered.userid == self.userid)
    }

    #[must_use]
    pub fn is_self(&self, userid: &str) -> bool {
        !self.userid.is_empty() && self.userid == userid
    }

    /// Record a successful registration; returns the rename command when the
    /// server handed back an assertion.
    pub fn register(&mut self, name: &str, assertion: Option<&str>) -> Option<String> {
        self.registered = Some(RegisteredUser::new(name));
        assertion.map(|assertion| format!("/trn {name},0,{assertion}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_matches_current_userid() {
        let mut session = Session::named("Red");
        assert!(!session.is_registered());
        assert_eq!(
            session.register("Red", Some("tok")).as_deref(),
            Some("/trn Red,0,tok")
        );
        assert!(session.is_registered());
        assert_eq!(session.register("Red", None), None);
    }

    #[test]
    fn guests_are_never_self_for_empty_ids() {
        let session = Session::guest("");
        assert!(!session.is_self(""));
        assert!(Session::named("Blue").is_self("blue"));
    }
}
