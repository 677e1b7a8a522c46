//! Server rank symbols and their display groups.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    Leadership,
    Staff,
    Normal,
    Punishment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: Option<String>,
    pub group_type: GroupType,
    pub order: u16,
}

impl Group {
    fn new(name: Option<&str>, group_type: GroupType, order: u16) -> Self {
        Self {
            name: name.map(str::to_string),
            group_type,
            order,
        }
    }

    #[must_use]
    pub fn is_punishment(&self) -> bool {
        self.group_type == GroupType::Punishment
    }
}

static DEFAULT_GROUPS: Lazy<HashMap<char, Group>> = Lazy::new(|| {
    use GroupType::{Leadership, Normal, Punishment, Staff};
    HashMap::from([
        ('~', Group::new(Some("Administrator (~)"), Leadership, 101)),
        ('#', Group::new(Some("Room Owner (#)"), Leadership, 102)),
        ('&', Group::new(Some("Administrator (&)"), Leadership, 103)),
        ('\u{2605}', Group::new(Some("Host (\u{2605})"), Staff, 104)),
        ('@', Group::new(Some("Moderator (@)"), Staff, 105)),
        ('%', Group::new(Some("Driver (%)"), Staff, 106)),
        ('*', Group::new(Some("Bot (*)"), Normal, 109)),
        ('\u{2606}', Group::new(Some("Player (\u{2606})"), Normal, 110)),
        ('+', Group::new(Some("Voice (+)"), Normal, 200)),
        (' ', Group::new(None, Normal, 201)),
        ('!', Group::new(Some("Muted"), Punishment, 301)),
        ('\u{2716}', Group::new(Some("Namelocked"), Punishment, 302)),
        ('\u{203d}', Group::new(Some("Locked"), Punishment, 303)),
    ])
});

/// Group table announced by the server, falling back to the built-in one.
#[derive(Debug, Clone, Default)]
pub struct ServerGroups {
    overrides: HashMap<char, Group>,
}

impl ServerGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: char, group: Group) {
        self.overrides.insert(symbol, group);
    }

    /// Group for the first character of a ranked name or a bare symbol.
    #[must_use]
    pub fn get(&self, ranked: &str) -> Group {
        let symbol = ranked.chars().next().unwrap_or(' ');
        self.overrides
            .get(&symbol)
            .or_else(|| DEFAULT_GROUPS.get(&symbol))
            .cloned()
            .unwrap_or_else(|| Group::new(None, GroupType::Normal, 108))
    }
}
