//! Outbound seams: the server connection and the login server.

use crate::error::ClientError;
use async_trait::async_trait;
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Line-oriented connection to the game server.
pub trait Connection {
    /// Send one raw protocol line.
    fn send_raw(&self, line: &str);

    /// Send `text` as if typed into `room`.
    fn send_to(&self, room: &str, text: &str) {
        self.send_raw(&format!("{room}|{text}"));
    }

    /// Send `text` outside any room.
    fn send_global(&self, text: &str) {
        self.send_to("", text);
    }
}

/// Connection that records lines instead of sending them.
#[derive(Debug, Default)]
pub struct OutboxConnection {
    sent: RefCell<Vec<String>>,
}

impl OutboxConnection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every line sent so far.
    pub fn drain(&self) -> Vec<String> {
        self.sent.take()
    }

    #[must_use]
    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl Connection for OutboxConnection {
    fn send_raw(&self, line: &str) {
        log::debug!("outbox: {line}");
        self.sent.borrow_mut().push(line.to_string());
    }
}

/// An action posted to the login server with its form parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub action: String,
    pub params: BTreeMap<String, String>,
}

impl LoginRequest {
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            params: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub loggedin: bool,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub actionerror: Option<String>,
    #[serde(default)]
    pub curuser: Option<CurrentUser>,
    #[serde(default)]
    pub assertion: Option<String>,
}

impl LoginResponse {
    /// Parse a response body, which the server prefixes with `]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a JSON object.
    pub fn parse(body: &str) -> Result<Self, ClientError> {
        let json = body.strip_prefix(']').unwrap_or(body);
        Ok(serde_json::from_str(json)?)
    }

    /// The name the server now considers logged in, if any.
    #[must_use]
    pub fn logged_in_name(&self) -> Option<&str> {
        self.curuser
            .as_ref()
            .filter(|user| user.loggedin)
            .map(|user| user.username.as_str())
    }
}

#[async_trait(?Send)]
pub trait LoginServer {
    /// # Errors
    ///
    /// Returns an error when the request fails or the response is malformed.
    async fn query(&self, request: LoginRequest) -> Result<LoginResponse, ClientError>;
}
