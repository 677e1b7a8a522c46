//! Search rows and the query collaborator that produces them.

use crate::dex::Species;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Only this many rows are rendered per query.
pub const MAX_VISIBLE_ROWS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Pokemon,
    Move,
    Item,
    Ability,
    Type,
    Category,
    #[serde(rename = "egggroup")]
    EggGroup,
    Tier,
    Article,
    Header,
    Html,
    #[serde(rename = "sortpokemon")]
    SortPokemon,
    #[serde(rename = "sortmove")]
    SortMove,
}

impl ResultKind {
    pub const ALL: [Self; 13] = [
        Self::Pokemon,
        Self::Move,
        Self::Item,
        Self::Ability,
        Self::Type,
        Self::Category,
        Self::EggGroup,
        Self::Tier,
        Self::Article,
        Self::Header,
        Self::Html,
        Self::SortPokemon,
        Self::SortMove,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Move => "move",
            Self::Item => "item",
            Self::Ability => "ability",
            Self::Type => "type",
            Self::Category => "category",
            Self::EggGroup => "egggroup",
            Self::Tier => "tier",
            Self::Article => "article",
            Self::Header => "header",
            Self::Html => "html",
            Self::SortPokemon => "sortpokemon",
            Self::SortMove => "sortmove",
        }
    }

    #[must_use]
    pub fn from_wire(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == kind)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row kind as received; unknown kinds are kept so they can be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Known(ResultKind),
    Unknown(String),
}

impl From<&str> for RowKind {
    fn from(kind: &str) -> Self {
        ResultKind::from_wire(kind).map_or_else(|| Self::Unknown(kind.to_string()), Self::Known)
    }
}

/// One `(kind, id, matchStart?, matchEnd?)` tuple from the search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRow {
    pub kind: RowKind,
    pub id: String,
    pub match_start: usize,
    /// `0` when the row was not a text match.
    pub match_end: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowParseError {
    #[error("search row must be an array, got {0}")]
    NotAnArray(String),
    #[error("search row needs a kind and an id")]
    TooShort,
    #[error("search row field {0} has the wrong type")]
    BadField(usize),
}

impl SearchRow {
    #[must_use]
    pub fn new(kind: ResultKind, id: impl Into<String>) -> Self {
        Self {
            kind: RowKind::Known(kind),
            id: id.into(),
            match_start: 0,
            match_end: 0,
        }
    }

    #[must_use]
    pub const fn with_match(mut self, start: usize, end: usize) -> Self {
        self.match_start = start;
        self.match_end = end;
        self
    }

    /// Parse a row such as `["pokemon", "pikachu", 0, 4]`.
    ///
    /// The match range is only read when both offsets are present.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an array of at least two strings
    /// followed by optional non-negative integers.
    pub fn from_value(value: &Value) -> Result<Self, RowParseError> {
        let Value::Array(fields) = value else {
            return Err(RowParseError::NotAnArray(value.to_string()));
        };
        if fields.len() < 2 {
            return Err(RowParseError::TooShort);
        }
        let kind = fields[0].as_str().ok_or(RowParseError::BadField(0))?;
        let id = fields[1].as_str().ok_or(RowParseError::BadField(1))?;
        let mut row = Self {
            kind: RowKind::from(kind),
            id: id.to_string(),
            match_start: 0,
            match_end: 0,
        };
        if fields.len() > 3 {
            row.match_start = offset_field(&fields[2], 2)?;
            row.match_end = offset_field(&fields[3], 3)?;
        }
        Ok(row)
    }

    /// Parse a JSON array of rows, skipping and logging malformed entries.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a JSON array.
    pub fn parse_list(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        Ok(values
            .iter()
            .filter_map(|value| match Self::from_value(value) {
                Ok(row) => Some(row),
                Err(err) => {
                    log::warn!("dropping search row: {err}");
                    None
                }
            })
            .collect())
    }
}

fn offset_field(value: &Value, index: usize) -> Result<usize, RowParseError> {
    value
        .as_u64()
        .and_then(|offset| usize::try_from(offset).ok())
        .ok_or(RowParseError::BadField(index))
}

/// Column a result list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Name,
    Type,
    Ability,
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Bst,
    Category,
    Power,
    Accuracy,
    Pp,
}

impl SortColumn {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Ability => "ability",
            Self::Hp => "hp",
            Self::Atk => "atk",
            Self::Def => "def",
            Self::Spa => "spa",
            Self::Spd => "spd",
            Self::Spe => "spe",
            Self::Bst => "bst",
            Self::Category => "category",
            Self::Power => "power",
            Self::Accuracy => "accuracy",
            Self::Pp => "pp",
        }
    }
}

/// An active search filter such as `type:Fire`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub kind: String,
    pub name: String,
}

impl Filter {
    #[must_use]
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Value the filter's remove button carries.
    #[must_use]
    pub fn value(&self) -> String {
        format!("{}:{}", self.kind, self.name)
    }
}

/// Read access to the current search.
pub trait SearchQuery {
    fn query(&self) -> &str;
    fn results(&self) -> &[SearchRow];
    fn sort_column(&self) -> Option<SortColumn>;
    /// Label of the leading species column when a sort is active.
    fn first_pokemon_column(&self) -> &str;
    fn filters(&self) -> &[Filter];
    /// Why rows of `kind` do not satisfy the active filters.
    fn filter_label(&self, kind: ResultKind) -> Option<String>;
    /// Why `id` is illegal in the active format.
    fn illegal_label(&self, id: &str) -> Option<String>;
    fn tier(&self, species: &Species) -> String;
}

/// A search already evaluated by the host, held as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub query: String,
    pub results: Vec<SearchRow>,
    pub sort_column: Option<SortColumn>,
    pub first_pokemon_column: String,
    pub filters: Vec<Filter>,
    pub filter_labels: HashMap<ResultKind, String>,
    pub illegal_labels: HashMap<String, String>,
    pub tiers: HashMap<String, String>,
}

impl SearchQuery for SearchSnapshot {
    fn query(&self) -> &str {
        &self.query
    }

    fn results(&self) -> &[SearchRow] {
        &self.results
    }

    fn sort_column(&self) -> Option<SortColumn> {
        self.sort_column
    }

    fn first_pokemon_column(&self) -> &str {
        &self.first_pokemon_column
    }

    fn filters(&self) -> &[Filter] {
        &self.filters
    }

    fn filter_label(&self, kind: ResultKind) -> Option<String> {
        self.filter_labels.get(&kind).cloned()
    }

    fn illegal_label(&self, id: &str) -> Option<String> {
        self.illegal_labels.get(id).cloned()
    }

    fn tier(&self, species: &Species) -> String {
        self.tiers
            .get(&species.id)
            .cloned()
            .or_else(|| species.tier.clone())
            .unwrap_or_default()
    }
}
