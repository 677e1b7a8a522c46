use super::*;
use async_trait::async_trait;
use futures::executor::block_on;
use psclient_core::groups::ServerGroups;
use psclient_core::rooms::{BattleInfo, RoomDirectory, RoomInfo};
use psclient_core::session::RegisteredUser;
use psclient_core::user_details::UserDetails;
use psclient_core::{
    ClientConfig, ClientError, Dex, LoginRequest, LoginResponse, LoginServer, LoginState,
    OutboxConnection, Preferences, Session,
};
use std::collections::HashMap;
use std::rc::Rc;
use yew::LocalServerRenderer;

struct OfflineLoginServer;

#[async_trait(?Send)]
impl LoginServer for OfflineLoginServer {
    async fn query(&self, _request: LoginRequest) -> Result<LoginResponse, ClientError> {
        Err(ClientError::Transport("offline".into()))
    }
}

struct Fixture {
    session: Session,
    prefs: Preferences,
    rooms: RoomDirectory,
    details: HashMap<String, UserDetails>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            session: Session::named("Blue"),
            prefs: Preferences::default(),
            rooms: RoomDirectory::new(),
            details: HashMap::new(),
        }
    }

    fn with_details(mut self, json: &str) -> Self {
        let details = UserDetails::from_json(json).unwrap();
        self.details.insert(details.userid.clone(), details);
        self
    }

    fn ctx(self) -> ClientContext {
        ClientContext {
            dex: Rc::new(Dex::empty(9)),
            connection: Rc::new(OutboxConnection::new()),
            login_server: Rc::new(OfflineLoginServer),
            session: Rc::new(self.session),
            prefs: Rc::new(self.prefs),
            groups: Rc::new(ServerGroups::new()),
            rooms: Rc::new(self.rooms),
            user_details: Rc::new(self.details),
            config: Rc::new(ClientConfig::default()),
            on_event: Callback::noop(),
        }
    }
}

fn render_with(route: &str, args: PopupArgs, ctx: ClientContext) -> String {
    let props = Props {
        route: AttrValue::from(route.to_string()),
        args,
        ctx,
    };
    block_on(LocalServerRenderer::<PopupHost>::with_props(props).render())
}

fn render(route: &str, fixture: Fixture) -> String {
    render_with(route, PopupArgs::default(), fixture.ctx())
}

const RED: &str = r#"{"userid":"red","name":"Red","avatar":167,"group":"+","status":"!napping",
    "rooms":{"@lobby":{},"battle-gen9ou-5":{"p1":" Red","p2":" Blue","isPrivate":true}}}"#;

#[test]
fn unknown_routes_render_nothing() {
    assert_eq!(render("teambuilder", Fixture::new()), "");
}

#[test]
fn user_profile_lists_rooms_and_groups() {
    let html = render("user-red", Fixture::new().with_details(RED));
    assert!(html.contains("sprites/trainers/167.png"));
    assert!(html.contains("Global Voice (+)"));
    assert!(html.contains(r#"<div class="userstatus">napping</div>"#));
    assert!(html.contains("color: #888888"));
    assert!(html.contains("Chatrooms:"));
    assert!(html.contains("Private rooms:"));
    assert!(html.contains(r#"title="Red v. Blue""#));
    assert!(html.contains("ilink yours"));
    assert!(html.contains("Challenge"));
    assert!(html.contains("\u{2026}"));
}

#[test]
fn loading_profile_uses_the_requested_name() {
    let html = render("user-Zarel", Fixture::new());
    assert!(html.contains(">Zarel</a>"));
    assert!(!html.contains("trainersprite"));
}

#[test]
fn viewuser_hides_interaction() {
    let html = render("viewuser-red", Fixture::new().with_details(RED));
    assert!(html.contains("Red"));
    assert!(!html.contains("Chatrooms:"));
    assert!(!html.contains("Challenge"));
}

#[test]
fn offline_users_are_marked() {
    let html = render(
        "user-ghost",
        Fixture::new().with_details(r#"{"userid":"ghost","name":"Ghost","avatar":1,"rooms":false}"#),
    );
    assert!(html.contains(r#"<strong class="offline">OFFLINE</strong>"#));
}

#[test]
fn own_profile_offers_rename_and_logout() {
    let mut fixture = Fixture::new().with_details(RED);
    fixture.session = Session::named("Red");
    let html = render("user-red", fixture);
    assert!(html.contains("Chat Self"));
    assert!(html.contains("Change name"));
    assert!(html.contains("Log out"));
    assert!(html.contains("trainersprite yours"));
}

#[test]
fn guests_see_disabled_buttons() {
    let mut fixture = Fixture::new().with_details(RED);
    fixture.session = Session::guest("Guest 1");
    let html = render("user-red", fixture);
    assert!(html.contains("Chat</button>"));
    assert!(html.contains("disabled"));
    assert!(!html.contains("Chat Self"));
}

#[test]
fn users_route_starts_with_lookup() {
    let html = render("users", Fixture::new());
    assert!(html.contains(r#"name="username""#));
    assert!(html.contains("Look up"));
}

#[test]
fn user_options_gate_moderation_on_room_rank() {
    let mut staff = Fixture::new();
    staff.rooms = RoomDirectory::new()
        .with_room(RoomInfo::chat("lobby", "Lobby").with_user("blue", "@Blue"));
    let html = render("useroptions-red-lobby", staff);
    assert!(html.contains("max-width:280px"));
    assert!(html.contains("Mute"));
    assert!(html.contains("Ban"));

    let mut driver = Fixture::new();
    driver.rooms = RoomDirectory::new()
        .with_room(RoomInfo::chat("lobby", "Lobby").with_user("blue", "%Blue"));
    let html = render("useroptions-red-lobby", driver);
    assert!(html.contains("Mute"));
    assert!(!html.contains("Ban"));

    let html = render("useroptions-red-lobby", Fixture::new());
    assert!(html.contains("Ignore"));
    assert!(html.contains("Add friend"));
    assert!(!html.contains("Mute"));
}

#[test]
fn volume_shows_levels_or_muted() {
    let html = render("volume", Fixture::new());
    assert!(html.contains("50%"));
    assert!(html.contains(r#"name="effectvolume""#));
    assert!(html.contains(r#"type="range""#));

    let mut muted = Fixture::new();
    muted.prefs.mute = true;
    let html = render("volume", muted);
    assert_eq!(html.matches("(muted)").count(), 3);
    assert!(!html.contains(r#"type="range""#));
}

#[test]
fn options_account_button_follows_registration() {
    let mut guest = Fixture::new();
    guest.session = Session::guest("Guest 1");
    let html = render("options", guest);
    assert!(html.contains("Choose name"));
    assert!(!html.contains("Register"));
    assert!(!html.contains("Password..."));

    let html = render("options", Fixture::new());
    assert!(html.contains("Register"));
    assert!(html.contains("Change name"));

    let mut registered = Fixture::new();
    registered.session.registered = Some(RegisteredUser::new("Blue"));
    let html = render("options", registered);
    assert!(html.contains("Password..."));
}

#[test]
fn options_list_every_setting() {
    let html = render("options", Fixture::new());
    assert!(html.contains("Status..."));
    assert!(html.contains("Match system theme"));
    assert!(html.contains("Vertical tabs"));
    assert!(html.contains(r#"name="blockPMs""#));
    assert!(html.contains("Confirm before refreshing"));
    assert!(html.contains("简体中文"));
    assert!(html.contains("[HH:MM:SS]"));
    assert!(html.contains("Text formatting..."));
}

#[test]
fn login_asks_for_password_when_needed() {
    let args = PopupArgs {
        login_state: Some(LoginState {
            name: Some("Red".into()),
            error: Some("Wrong password.".into()),
            needs_password: true,
            needs_google: false,
        }),
        ..PopupArgs::default()
    };
    let html = render_with("login", args, Fixture::new().ctx());
    assert!(html.contains(r#"<p class="error">Wrong password.</p>"#));
    assert!(html.contains(r#"name="password""#));
    assert!(html.contains("Log in</strong>"));
    assert!(html.contains("someone else's account"));
    assert!(!html.contains("Others will be able to see"));
}

#[test]
fn login_shows_progress_while_in_flight() {
    let mut fixture = Fixture::new();
    fixture.session.logging_in = Some("Red".into());
    let html = render("login", fixture);
    assert!(html.contains("Logging in..."));
    assert!(!html.contains("Choose name"));
}

#[test]
fn avatars_skip_retired_numbers_and_mark_current() {
    let html = render("avatars", Fixture::new());
    assert!(html.contains("max-width:1210px"));
    assert!(html.contains(r#"title="/avatar 293""#));
    assert!(!html.contains(r#"title="/avatar 162""#));
    assert!(html.contains("background-position: -81px -1px"));
    assert!(html.contains("option pixelated cur"));
}

#[test]
fn password_forms_render_their_fields() {
    let html = render("changepassword", Fixture::new());
    assert!(html.contains("Change your password:"));
    assert!(html.contains(r#"name="oldpassword""#));
    assert!(html.contains(r#"name="cpassword""#));

    let html = render("register", Fixture::new());
    assert!(html.contains("Register your account:"));
    assert!(html.contains("What is this pokemon?"));
    assert!(html.contains("pikachu.gif"));
}

#[test]
fn forfeit_offers_replacement_only_when_unrated() {
    let battle = |rated| {
        let mut fixture = Fixture::new();
        fixture.rooms = RoomDirectory::new().with_room(RoomInfo::battle(
            "battle-gen9ou-1",
            BattleInfo {
                rated,
                ended: false,
                p1: Some("blue".into()),
                p2: Some("red".into()),
            },
        ));
        fixture.ctx()
    };
    let args = PopupArgs::from_room("battle-gen9ou-1");
    let html = render_with("forfeitbattle", args.clone(), battle(false));
    assert!(html.contains("Forfeiting makes you lose the battle."));
    assert!(html.contains("Replace player"));

    let html = render_with("forfeitbattle", args, battle(true));
    assert!(!html.contains("Replace player"));
}

#[test]
fn replace_player_asks_for_a_name() {
    let html = render("replaceplayer", Fixture::new());
    assert!(html.contains("Replacement player's name:"));
    assert!(html.contains(r#"name="newplayer""#));
}

#[test]
fn backgrounds_list_official_choices() {
    let html = render("changebackground", Fixture::new());
    assert!(html.contains("Random"));
    assert!(html.contains("background-position: 0 -90px"));
    assert!(html.contains("background: #344b6c"));
    assert!(html.contains("Solid blue"));
    assert!(html.contains(r#"name="bgfile""#));
}

#[test]
fn chat_formatting_has_five_toggles() {
    let html = render("chatformatting", Fixture::new());
    assert_eq!(html.matches(r#"type="checkbox""#).count(), 5);
    assert!(html.contains("Auto-show spoilers"));
}

#[test]
fn leave_room_confirms() {
    let html = render_with(
        "confirmleaveroom",
        PopupArgs::from_room("lobby"),
        Fixture::new().ctx(),
    );
    assert!(html.contains("Are you sure you want to exit this room?"));
    assert!(html.contains("Close Room"));
}

#[test]
fn alerts_escape_messages_and_label_the_button() {
    let args = PopupArgs {
        message: Some("<b>hi</b>".into()),
        ok_label: Some("Retry".into()),
        ..PopupArgs::default()
    };
    let html = render_with("popup-1", args, Fixture::new().ctx());
    assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    assert!(html.contains("<strong>Retry</strong>"));

    let html = render_with("popup-2", PopupArgs::alert("Saved."), Fixture::new().ctx());
    assert!(html.contains("<strong>OK</strong>"));
}
