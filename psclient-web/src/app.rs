//! Root component: owns the client state and the popup stack.

use crate::components::popups::PopupHost;
use crate::components::search_results::SearchResults;
use crate::connection::LoggingConnection;
use crate::context::{ClientContext, ClientEvent};
use crate::login_server::WebLoginServer;
use psclient_core::groups::ServerGroups;
use psclient_core::id::to_id;
use psclient_core::popup::close_room_command;
use psclient_core::popup::login::LoginAction;
use psclient_core::prefs::BackgroundSetting;
use psclient_core::rooms::RoomDirectory;
use psclient_core::user_details::UserDetails;
use psclient_core::{
    ClientConfig, Connection, Dex, DexLookup, LoginRequest, LoginServer, LoginState, PopupArgs,
    PopupRoute, Preferences, SearchQuery, SearchSnapshot, Session,
};
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

const GUEST_NAME: &str = "Guest";
const WRONG_PASSWORD: &str = "Wrong password.";

/// Collaborators that live as long as the app.
struct Services {
    dex: Rc<dyn DexLookup>,
    search: Rc<dyn SearchQuery>,
    connection: Rc<dyn Connection>,
    login_server: Rc<dyn LoginServer>,
    groups: Rc<ServerGroups>,
    config: Rc<ClientConfig>,
}

impl Services {
    fn new(config: ClientConfig) -> Self {
        Self {
            dex: Rc::new(Dex::empty(9)),
            search: Rc::new(SearchSnapshot::default()),
            connection: Rc::new(LoggingConnection),
            login_server: Rc::new(WebLoginServer::new(config.login_server.clone())),
            groups: Rc::new(ServerGroups::new()),
            config: Rc::new(config),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    pub session: Rc<Session>,
    pub prefs: Rc<Preferences>,
    pub rooms: Rc<RoomDirectory>,
    pub user_details: Rc<HashMap<String, UserDetails>>,
    /// Open popups, topmost last.
    pub popups: Vec<(String, PopupArgs)>,
    alerts_opened: u32,
}

impl ClientState {
    #[must_use]
    pub fn new(prefs: Preferences) -> Self {
        Self {
            session: Rc::new(Session::guest(GUEST_NAME)),
            prefs: Rc::new(prefs),
            rooms: Rc::new(RoomDirectory::new()),
            user_details: Rc::new(HashMap::new()),
            popups: Vec::new(),
            alerts_opened: 0,
        }
    }

    #[must_use]
    pub fn with_rooms(mut self, rooms: RoomDirectory) -> Self {
        self.rooms = Rc::new(rooms);
        self
    }

    fn open(&mut self, route: String, args: PopupArgs) {
        if let Err(err) = route.parse::<PopupRoute>() {
            log::info!("{err}; leaving it to the room host");
            return;
        }
        self.popups.retain(|(open, _)| *open != route);
        self.popups.push((route, args));
    }

    fn close_route(&mut self, route: &str) {
        self.popups.retain(|(open, _)| open != route);
    }

    fn apply(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::Open { route, args } => self.open(route, args),
            ClientEvent::Close => {
                self.popups.pop();
            }
            ClientEvent::LeaveRoom(room) => {
                Rc::make_mut(&mut self.rooms).remove(&room);
            }
            ClientEvent::RoomLog { .. } => {}
            ClientEvent::PrefsChanged(prefs) => self.prefs = Rc::new(prefs),
            ClientEvent::SessionChanged(session) => self.session = Rc::new(session),
            ClientEvent::Login(LoginAction::ChangeName(name)) => {
                let session = Rc::make_mut(&mut self.session);
                session.userid = to_id(&name);
                session.name = name;
                session.named = true;
                session.logging_in = None;
                self.close_route("login");
            }
            ClientEvent::Login(LoginAction::ChangeNameWithPassword { name, .. }) => {
                Rc::make_mut(&mut self.session).logging_in = Some(name);
            }
            ClientEvent::SetBackground(background) => {
                Rc::make_mut(&mut self.prefs).background = Some(background);
            }
            ClientEvent::Alert(message) => {
                self.alerts_opened += 1;
                let route = format!("popup-{}", self.alerts_opened);
                self.open(route, PopupArgs::alert(&message));
            }
        }
    }
}

pub enum AppAction {
    Client(ClientEvent),
    LoggedIn(Session),
    LoginFailed(LoginState),
}

impl Reducible for ClientState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::Client(event) => next.apply(event),
            AppAction::LoggedIn(session) => {
                next.session = Rc::new(session);
                next.close_route("login");
            }
            AppAction::LoginFailed(state) => {
                Rc::make_mut(&mut next.session).logging_in = None;
                next.open(
                    "login".to_string(),
                    PopupArgs {
                        login_state: Some(state),
                        ..PopupArgs::default()
                    },
                );
            }
        }
        Rc::new(next)
    }
}

fn initial_prefs() -> Preferences {
    #[cfg(target_arch = "wasm32")]
    {
        crate::storage::load_prefs()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Preferences::default()
    }
}

fn persist(prefs: &Preferences) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = crate::storage::save_prefs(prefs) {
            log::warn!("saving preferences: {err}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("not persisting preferences off the browser: {prefs:?}");
    }
}

/// Work an event needs beyond the state change itself.
fn perform(event: &ClientEvent, services: &Services, state: &UseReducerHandle<ClientState>) {
    match event {
        ClientEvent::LeaveRoom(room) => services.connection.send_global(&close_room_command(room)),
        ClientEvent::RoomLog { room, line } => log::info!("[{room}] {line}"),
        ClientEvent::PrefsChanged(prefs) => persist(prefs),
        ClientEvent::SetBackground(background) => {
            let mut prefs = (*state.prefs).clone();
            prefs.background = Some(background.clone());
            persist(&prefs);
        }
        ClientEvent::Login(LoginAction::ChangeName(name)) => {
            services.connection.send_global(&format!("/trn {name}"));
        }
        ClientEvent::Login(LoginAction::ChangeNameWithPassword { name, password }) => log_in(
            services,
            &state.session,
            name.clone(),
            password.clone(),
            state.dispatcher(),
        ),
        ClientEvent::Open { .. }
        | ClientEvent::Close
        | ClientEvent::SessionChanged(_)
        | ClientEvent::Alert(_) => {}
    }
}

fn log_in(
    services: &Services,
    session: &Session,
    name: String,
    password: String,
    dispatcher: UseReducerDispatcher<ClientState>,
) {
    let request = LoginRequest::new("login")
        .param("name", name.clone())
        .param("pass", password)
        .param("challstr", session.challstr.clone());
    let login_server = Rc::clone(&services.login_server);
    let connection = Rc::clone(&services.connection);
    let previous = session.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let error = match login_server.query(request).await {
            Ok(response) => {
                if let (Some(user), Some(assertion)) =
                    (response.logged_in_name(), response.assertion.as_deref())
                {
                    let mut session = Session {
                        avatar: previous.avatar,
                        challstr: previous.challstr,
                        ..Session::named(user)
                    };
                    if let Some(command) = session.register(user, Some(assertion)) {
                        connection.send_global(&command);
                    }
                    dispatcher.dispatch(AppAction::LoggedIn(session));
                    return;
                }
                response
                    .actionerror
                    .unwrap_or_else(|| WRONG_PASSWORD.to_string())
            }
            Err(err) => {
                log::warn!("login for {name} failed: {err}");
                err.to_string()
            }
        };
        dispatcher.dispatch(AppAction::LoginFailed(LoginState {
            name: Some(name),
            error: Some(error),
            needs_password: true,
            needs_google: false,
        }));
    });
}

fn background_style(background: Option<&BackgroundSetting>) -> Option<String> {
    background
        .filter(|background| !background.url.is_empty())
        .map(|background| format!("background-image: url({})", background.url))
}

fn user_bar(ctx: &ClientContext) -> Html {
    let open = |route: String, args: PopupArgs| {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.open(&route, args.clone()))
    };
    let user_button = if ctx.session.named {
        let args = PopupArgs {
            username: Some(ctx.session.name.clone()),
            ..PopupArgs::default()
        };
        html! {
            <button class="button userbutton" onclick={open(format!("user-{}", ctx.session.userid), args)}>
                { ctx.session.name.clone() }
            </button>
        }
    } else {
        html! {
            <button class="button" onclick={open("login".to_string(), PopupArgs::default())}>
                { "Choose name" }
            </button>
        }
    };
    html! {
        <div class="userbar">
            { user_button }
            <button class="icon button" title="Sound" aria-label="Sound"
                onclick={open("volume".to_string(), PopupArgs::default())}>{ "Sound" }</button>
            <button class="icon button" title="Options" aria-label="Options"
                onclick={open("options".to_string(), PopupArgs::default())}>{ "Options" }</button>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| Services::new(ClientConfig::default()));
    let state = use_reducer(|| ClientState::new(initial_prefs()));

    let on_event = {
        let services = Rc::clone(&services);
        let state = state.clone();
        Callback::from(move |event: ClientEvent| {
            perform(&event, &services, &state);
            state.dispatch(AppAction::Client(event));
        })
    };
    let ctx = ClientContext {
        dex: Rc::clone(&services.dex),
        connection: Rc::clone(&services.connection),
        login_server: Rc::clone(&services.login_server),
        session: Rc::clone(&state.session),
        prefs: Rc::clone(&state.prefs),
        groups: Rc::clone(&services.groups),
        rooms: Rc::clone(&state.rooms),
        user_details: Rc::clone(&state.user_details),
        config: Rc::clone(&services.config),
        on_event,
    };

    let background = state.prefs.background.as_ref();
    let popups = state.popups.iter().map(|(route, args)| {
        html! {
            <PopupHost key={route.clone()} route={AttrValue::from(route.clone())}
                args={args.clone()} ctx={ctx.clone()} />
        }
    });

    html! {
        <div class={classes!("ps-client", format!("theme-{}", state.prefs.theme.as_str()))}
            data-bg={background.map(|background| background.id.clone())}
            style={background_style(background)}>
            { user_bar(&ctx) }
            <SearchResults dex={Rc::clone(&services.dex)} search={Rc::clone(&services.search)}
                config={Rc::clone(&services.config)} />
            { for popups }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psclient_core::popup::backgrounds::Background;
    use psclient_core::rooms::RoomInfo;

    fn reduce(state: ClientState, action: AppAction) -> ClientState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn event(state: ClientState, event: ClientEvent) -> ClientState {
        reduce(state, AppAction::Client(event))
    }

    fn routes(state: &ClientState) -> Vec<&str> {
        state.popups.iter().map(|(route, _)| route.as_str()).collect()
    }

    fn open(route: &str) -> ClientEvent {
        ClientEvent::Open {
            route: route.to_string(),
            args: PopupArgs::default(),
        }
    }

    #[test]
    fn popups_stack_and_close_from_the_top() {
        let state = ClientState::new(Preferences::default());
        let state = event(state, open("options"));
        let state = event(state, open("avatars"));
        assert_eq!(routes(&state), ["options", "avatars"]);

        let state = event(state, ClientEvent::Close);
        assert_eq!(routes(&state), ["options"]);
    }

    #[test]
    fn reopening_a_popup_moves_it_to_the_top() {
        let state = ClientState::new(Preferences::default());
        let state = event(state, open("volume"));
        let state = event(state, open("options"));
        let state = event(state, open("volume"));
        assert_eq!(routes(&state), ["options", "volume"]);
    }

    #[test]
    fn room_routes_are_not_stacked_as_popups() {
        let state = ClientState::new(Preferences::default());
        let state = event(state, open("challenge-red"));
        assert!(state.popups.is_empty());
    }

    #[test]
    fn alerts_get_distinct_routes() {
        let state = ClientState::new(Preferences::default());
        let state = event(state, ClientEvent::Alert("one".into()));
        let state = event(state, ClientEvent::Alert("two".into()));
        assert_eq!(routes(&state), ["popup-1", "popup-2"]);
        assert_eq!(state.popups[1].1.message.as_deref(), Some("two"));
    }

    #[test]
    fn leaving_a_room_forgets_it() {
        let state = ClientState::new(Preferences::default()).with_rooms(
            RoomDirectory::new().with_room(RoomInfo::chat("lobby", "Lobby")),
        );
        let state = event(state, ClientEvent::LeaveRoom("lobby".into()));
        assert!(!state.rooms.contains("lobby"));
    }

    #[test]
    fn choosing_a_name_closes_login() {
        let state = ClientState::new(Preferences::default());
        let state = event(state, open("login"));
        let state = event(
            state,
            ClientEvent::Login(LoginAction::ChangeName("Ash Ketchum".into())),
        );
        assert!(state.popups.is_empty());
        assert!(state.session.named);
        assert_eq!(state.session.userid, "ashketchum");
        assert_eq!(state.session.avatar, "1");
    }

    #[test]
    fn password_login_is_tracked_until_it_settles() {
        let state = ClientState::new(Preferences::default());
        let state = event(state, open("login"));
        let state = event(
            state,
            ClientEvent::Login(LoginAction::ChangeNameWithPassword {
                name: "Red".into(),
                password: "pika".into(),
            }),
        );
        assert_eq!(state.session.logging_in.as_deref(), Some("Red"));

        let failure = LoginState {
            name: Some("Red".into()),
            error: Some(WRONG_PASSWORD.into()),
            needs_password: true,
            needs_google: false,
        };
        let state = reduce(state, AppAction::LoginFailed(failure.clone()));
        assert_eq!(state.session.logging_in, None);
        assert_eq!(routes(&state), ["login"]);
        assert_eq!(state.popups[0].1.login_state, Some(failure));

        let state = reduce(state, AppAction::LoggedIn(Session::named("Red")));
        assert!(state.popups.is_empty());
        assert_eq!(state.session.name, "Red");
    }

    #[test]
    fn background_is_kept_in_preferences() {
        let state = ClientState::new(Preferences::default());
        let state = event(
            state,
            ClientEvent::SetBackground(Background::Ocean.setting()),
        );
        assert_eq!(
            state.prefs.background.as_ref().map(|bg| bg.id.as_str()),
            Some("ocean")
        );
    }

    #[test]
    fn only_uploaded_backgrounds_get_an_inline_image() {
        assert_eq!(background_style(Some(&Background::Ocean.setting())), None);
        let custom = psclient_core::popup::backgrounds::custom_background("data:image/png;base64,AA");
        assert_eq!(
            background_style(Some(&custom)).as_deref(),
            Some("background-image: url(data:image/png;base64,AA)")
        );
    }
}
