//! Client state handed to every popup.

use psclient_core::groups::ServerGroups;
use psclient_core::popup::login::LoginAction;
use psclient_core::prefs::BackgroundSetting;
use psclient_core::rooms::RoomDirectory;
use psclient_core::user_details::UserDetails;
use psclient_core::{
    ClientConfig, Connection, DexLookup, LoginServer, PopupArgs, Preferences, Session,
};
use std::collections::HashMap;
use std::rc::Rc;
use yew::Callback;

/// Requests a popup makes of the host beyond sending commands.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    Open { route: String, args: PopupArgs },
    /// Close the popup that emitted the event.
    Close,
    LeaveRoom(String),
    /// Add a line to a room's log without sending it.
    RoomLog { room: String, line: String },
    PrefsChanged(Preferences),
    SessionChanged(Session),
    Login(LoginAction),
    SetBackground(BackgroundSetting),
    Alert(String),
}

#[derive(Clone)]
pub struct ClientContext {
    pub dex: Rc<dyn DexLookup>,
    pub connection: Rc<dyn Connection>,
    pub login_server: Rc<dyn LoginServer>,
    pub session: Rc<Session>,
    pub prefs: Rc<Preferences>,
    pub groups: Rc<ServerGroups>,
    pub rooms: Rc<RoomDirectory>,
    pub user_details: Rc<HashMap<String, UserDetails>>,
    pub config: Rc<ClientConfig>,
    pub on_event: Callback<ClientEvent>,
}

impl PartialEq for ClientContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dex, &other.dex)
            && Rc::ptr_eq(&self.connection, &other.connection)
            && Rc::ptr_eq(&self.login_server, &other.login_server)
            && Rc::ptr_eq(&self.session, &other.session)
            && Rc::ptr_eq(&self.prefs, &other.prefs)
            && Rc::ptr_eq(&self.groups, &other.groups)
            && Rc::ptr_eq(&self.rooms, &other.rooms)
            && Rc::ptr_eq(&self.user_details, &other.user_details)
            && Rc::ptr_eq(&self.config, &other.config)
            && self.on_event == other.on_event
    }
}

impl ClientContext {
    pub fn emit(&self, event: ClientEvent) {
        self.on_event.emit(event);
    }

    pub fn close(&self) {
        self.emit(ClientEvent::Close);
    }

    pub fn open(&self, route: &str, args: PopupArgs) {
        self.emit(ClientEvent::Open {
            route: route.to_string(),
            args,
        });
    }

    /// Send a command outside any room.
    pub fn send(&self, text: &str) {
        self.connection.send_global(text);
    }

    /// Send to `room` when it is open, otherwise outside any room.
    pub fn send_in(&self, room: Option<&str>, text: &str) {
        match room.filter(|room| self.rooms.contains(room)) {
            Some(room) => self.connection.send_to(room, text),
            None => self.send(text),
        }
    }

    /// Send to `room` only when it is an open chat room. Returns whether
    /// anything was sent.
    pub fn send_to_chat(&self, room: &str, text: &str) -> bool {
        if self.rooms.chat(room).is_none() {
            log::debug!("dropping {text:?}: {room} is not an open chat room");
            return false;
        }
        self.connection.send_to(room, text);
        true
    }

    /// Apply a preference change, announcing it to the host and the server.
    pub fn update_prefs(&self, change: impl FnOnce(&mut Preferences) -> Option<String>) {
        let mut prefs = (*self.prefs).clone();
        let command = change(&mut prefs);
        if let Some(command) = command {
            self.send(&command);
        }
        self.emit(ClientEvent::PrefsChanged(prefs));
    }

    #[must_use]
    pub fn details(&self, userid: &str) -> Option<&UserDetails> {
        self.user_details.get(userid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use psclient_core::rooms::{BattleInfo, RoomInfo};
    use psclient_core::{ClientError, Dex, LoginRequest, LoginResponse, OutboxConnection};

    struct OfflineLoginServer;

    #[async_trait(?Send)]
    impl LoginServer for OfflineLoginServer {
        async fn query(&self, _request: LoginRequest) -> Result<LoginResponse, ClientError> {
            Err(ClientError::Transport("offline".into()))
        }
    }

    fn ctx(outbox: &Rc<OutboxConnection>) -> ClientContext {
        let rooms = RoomDirectory::new()
            .with_room(RoomInfo::chat("lobby", "Lobby"))
            .with_room(RoomInfo::battle(
                "battle-gen9ou-1",
                BattleInfo {
                    rated: false,
                    ended: false,
                    p1: None,
                    p2: None,
                },
            ));
        let connection: Rc<dyn Connection> = outbox.clone();
        ClientContext {
            dex: Rc::new(Dex::empty(9)),
            connection,
            login_server: Rc::new(OfflineLoginServer),
            session: Rc::new(Session::named("Blue")),
            prefs: Rc::new(Preferences::default()),
            groups: Rc::new(ServerGroups::new()),
            rooms: Rc::new(rooms),
            user_details: Rc::new(HashMap::new()),
            config: Rc::new(ClientConfig::default()),
            on_event: Callback::noop(),
        }
    }

    #[test]
    fn chat_commands_reach_open_chat_rooms_only() {
        let outbox = Rc::new(OutboxConnection::new());
        let ctx = ctx(&outbox);

        assert!(ctx.send_to_chat("lobby", "/ignore bob"));
        assert!(!ctx.send_to_chat("battle-gen9ou-1", "/ignore bob"));
        assert!(!ctx.send_to_chat("help", "/friend add bob"));
        assert_eq!(outbox.drain(), vec!["lobby|/ignore bob".to_string()]);
    }

    #[test]
    fn send_in_falls_back_outside_any_room() {
        let outbox = Rc::new(OutboxConnection::new());
        let ctx = ctx(&outbox);

        ctx.send_in(Some("battle-gen9ou-1"), "/forfeit");
        ctx.send_in(Some("help"), "/forfeit");
        assert_eq!(
            outbox.drain(),
            vec!["battle-gen9ou-1|/forfeit".to_string(), "|/forfeit".to_string()]
        );
    }
}
