//! Search-result rows and popup state for a battle simulator client.
//!
//! Everything here is platform-agnostic; the web crate renders it.

pub mod config;
pub mod connection;
pub mod dex;
pub mod error;
pub mod groups;
pub mod highlight;
pub mod html;
pub mod id;
pub mod names;
pub mod popup;
pub mod prefs;
pub mod rooms;
pub mod rows;
pub mod search;
pub mod session;
pub mod user_details;

pub use config::ClientConfig;
pub use connection::{Connection, LoginRequest, LoginResponse, LoginServer, OutboxConnection};
pub use dex::{Dex, DexLookup};
pub use error::ClientError;
pub use highlight::{DisplayName, Segment, highlight};
pub use popup::{PopupArgs, PopupRoute, RouteError};
pub use prefs::Preferences;
pub use rows::{RowDispatcher, RowView};
pub use search::{ResultKind, SearchQuery, SearchRow, SearchSnapshot};
pub use session::{LoginState, Session};
