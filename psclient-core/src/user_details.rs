//! `userdetails` query responses.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserRoomEntry {
    #[serde(rename = "isPrivate", default)]
    pub is_private: bool,
    /// Ranked names of the battle's sides.
    #[serde(default)]
    pub p1: Option<String>,
    #[serde(default)]
    pub p2: Option<String>,
}

/// Where the user is; the server sends `false` for offline users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserRooms {
    #[default]
    Unknown,
    Offline,
    /// Keyed by room id, possibly prefixed with the user's rank there.
    Online(BTreeMap<String, UserRoomEntry>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRooms {
    Map(BTreeMap<String, UserRoomEntry>),
    Flag(bool),
}

fn deserialize_rooms<'de, D: Deserializer<'de>>(deserializer: D) -> Result<UserRooms, D::Error> {
    Ok(match Option::<RawRooms>::deserialize(deserializer)? {
        Some(RawRooms::Map(rooms)) => UserRooms::Online(rooms),
        Some(RawRooms::Flag(false)) => UserRooms::Offline,
        Some(RawRooms::Flag(true)) | None => UserRooms::Unknown,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAvatar {
    Text(String),
    Number(u64),
}

fn deserialize_avatar<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(
        Option::<RawAvatar>::deserialize(deserializer)?.and_then(|avatar| match avatar {
            RawAvatar::Text(text) if text.is_empty() => None,
            RawAvatar::Text(text) => Some(text),
            RawAvatar::Number(number) => Some(number.to_string()),
        }),
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserDetails {
    pub userid: String,
    #[serde(default)]
    pub name: String,
    /// Missing for offline users, whose real name the server does not know.
    #[serde(default, deserialize_with = "deserialize_avatar")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub customgroup: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_rooms")]
    pub rooms: UserRooms,
}

impl UserDetails {
    /// Parse the JSON payload of a `|queryresponse|userdetails|` line.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a user details object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// `(away, message)` split from the status; `!` marks away.
    #[must_use]
    pub fn status(&self) -> Option<(bool, &str)> {
        self.status
            .as_deref()
            .filter(|status| !status.is_empty())
            .map(|status| match status.strip_prefix('!') {
                Some(message) => (true, message),
                None => (false, status),
            })
    }
}
