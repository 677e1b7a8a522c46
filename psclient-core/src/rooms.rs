//! Rooms the client currently has open.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleInfo {
    pub rated: bool,
    pub ended: bool,
    /// Userids of the two sides, when known.
    pub p1: Option<String>,
    pub p2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomKind {
    /// Chat room with each present user's ranked name, keyed by userid.
    Chat { users: HashMap<String, String> },
    Battle(BattleInfo),
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInfo {
    pub id: String,
    pub title: String,
    pub kind: RoomKind,
}

impl RoomInfo {
    #[must_use]
    pub fn chat(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind: RoomKind::Chat {
                users: HashMap::new(),
            },
        }
    }

    #[must_use]
    pub fn battle(id: &str, battle: BattleInfo) -> Self {
        Self {
            id: id.to_string(),
            title: id.to_string(),
            kind: RoomKind::Battle(battle),
        }
    }

    /// Add a user with their rank symbol prefixed to the name.
    #[must_use]
    pub fn with_user(mut self, userid: &str, ranked_name: &str) -> Self {
        if let RoomKind::Chat { users } = &mut self.kind {
            users.insert(userid.to_string(), ranked_name.to_string());
        }
        self
    }

    /// Rank symbol of `userid` in this chat room.
    #[must_use]
    pub fn rank_of(&self, userid: &str) -> Option<char> {
        match &self.kind {
            RoomKind::Chat { users } => users.get(userid).and_then(|name| name.chars().next()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn battle_info(&self) -> Option<&BattleInfo> {
        match &self.kind {
            RoomKind::Battle(battle) => Some(battle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomDirectory {
    rooms: BTreeMap<String, RoomInfo>,
}

impl RoomDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_room(mut self, room: RoomInfo) -> Self {
        self.insert(room);
        self
    }

    pub fn insert(&mut self, room: RoomInfo) {
        self.rooms.insert(room.id.clone(), room);
    }

    pub fn remove(&mut self, id: &str) -> Option<RoomInfo> {
        self.rooms.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RoomInfo> {
        self.rooms.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    /// The room only when it is a chat room.
    #[must_use]
    pub fn chat(&self, id: &str) -> Option<&RoomInfo> {
        self.get(id)
            .filter(|room| matches!(room.kind, RoomKind::Chat { .. }))
    }
}
