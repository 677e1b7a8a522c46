//! User profile popup.

use super::avatars::resolve_avatar;
use crate::config::ClientConfig;
use crate::dex::DexLookup;
use crate::groups::ServerGroups;
use crate::id::{starts_alphanumeric, to_id, to_room_id};
use crate::rooms::RoomDirectory;
use crate::session::Session;
use crate::user_details::{UserDetails, UserRoomEntry, UserRooms};

/// The user a profile popup is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTarget {
    /// Name with its rank symbol; a blank rank is a leading space.
    pub name: String,
    pub userid: String,
}

impl UserTarget {
    #[must_use]
    pub fn new(name: &str) -> Self {
        let name = if starts_alphanumeric(name) {
            format!(" {name}")
        } else {
            name.to_string()
        };
        Self {
            userid: to_id(&name),
            name,
        }
    }

    /// The name without its rank symbol.
    #[must_use]
    pub fn bare_name(&self) -> &str {
        let mut chars = self.name.chars();
        chars.next();
        chars.as_str()
    }

    /// Query sent whenever the target changes.
    #[must_use]
    pub fn details_command(&self) -> Option<String> {
        (!self.userid.is_empty()).then(|| format!("/cmd userdetails {}", self.userid))
    }

    /// Whether the lookup box still names this target.
    #[must_use]
    pub fn matches_input(&self, input: &str) -> bool {
        to_id(input) == self.userid
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLabel {
    pub name: String,
    /// Punishment groups are shown greyed out.
    pub punishment: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomLink {
    pub room_id: String,
    pub label: String,
    /// Rank the user holds in the room.
    pub rank: Option<char>,
    pub yours: bool,
    /// `p1 v. p2` for battles.
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomLists {
    pub battles: Vec<RoomLink>,
    pub chatrooms: Vec<RoomLink>,
    pub private: Vec<RoomLink>,
}

impl RoomLists {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.battles.is_empty() && self.chatrooms.is_empty() && self.private.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomsView {
    Lists(RoomLists),
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileButtons {
    /// Viewing yourself: chat self plus change name and log out.
    OwnProfile,
    /// The viewer has no name yet, so every action is disabled.
    Disabled,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub userid: String,
    pub name: String,
    /// `None` while details are loading.
    pub avatar: Option<String>,
    /// Your own avatar opens the avatar picker.
    pub avatar_editable: bool,
    pub profile_url: String,
    pub away: bool,
    pub status: Option<String>,
    pub room_group: Option<GroupLabel>,
    pub global_group: Option<GroupLabel>,
    pub custom_group: Option<String>,
    pub rooms: Option<RoomsView>,
    pub buttons: Option<ProfileButtons>,
    /// Routes behind the buttons of [`ProfileButtons::Other`].
    pub challenge_route: String,
    pub dm_route: String,
    pub options_route: String,
}

/// Everything a profile needs from the client besides the target.
pub struct ProfileContext<'a> {
    pub session: &'a Session,
    pub groups: &'a ServerGroups,
    pub rooms: &'a RoomDirectory,
    pub dex: &'a dyn DexLookup,
    pub config: &'a ClientConfig,
}

/// Build the profile for `target`; `None` when no user is selected.
///
/// `details` is `None` until the server answers the details query.
#[must_use]
pub fn build_profile(
    target: &UserTarget,
    details: Option<&UserDetails>,
    interactive: bool,
    parent_room: Option<&str>,
    cx: &ProfileContext<'_>,
) -> Option<UserProfile> {
    if target.userid.is_empty() {
        return None;
    }
    let loading = details.is_none();
    let (name, avatar) = match details {
        None => (target.bare_name().to_string(), None),
        // Offline: the server does not know the real name.
        Some(details) if details.avatar.is_none() => (target.name.clone(), Some("unknown")),
        Some(details) => (details.name.clone(), details.avatar.as_deref()),
    };

    let room_group = cx.groups.get(&target.name);
    let global_group = cx
        .groups
        .get(details.and_then(|d| d.group.as_deref()).unwrap_or(" "));
    let global_label = global_group.name.as_ref().map(|name| GroupLabel {
        name: format!("Global {name}"),
        punishment: global_group.is_punishment(),
    });
    let room_label = room_group
        .name
        .as_ref()
        .filter(|_| global_group.name != room_group.name)
        .map(|name| GroupLabel {
            name: name.clone(),
            punishment: room_group.is_punishment(),
        });

    let (away, status) = details
        .and_then(UserDetails::status)
        .map_or((false, None), |(away, message)| {
            (away, Some(message.to_string()))
        });

    let rooms = match details.map(|d| &d.rooms) {
        Some(UserRooms::Online(rooms)) => {
            let lists = room_lists(rooms, cx);
            (!lists.is_empty()).then_some(RoomsView::Lists(lists))
        }
        Some(UserRooms::Offline) => Some(RoomsView::Offline),
        Some(UserRooms::Unknown) | None => None,
    };

    let is_self = cx.session.is_self(&target.userid);
    let buttons = interactive.then(|| {
        if is_self {
            ProfileButtons::OwnProfile
        } else if !cx.session.named {
            ProfileButtons::Disabled
        } else {
            ProfileButtons::Other
        }
    });

    log::debug!("profile for {} (loading: {loading})", target.userid);
    Some(UserProfile {
        userid: target.userid.clone(),
        name,
        avatar: avatar.map(|avatar| resolve_avatar(avatar, cx.dex, cx.config)),
        avatar_editable: is_self,
        profile_url: cx.config.profile_url(&target.userid),
        away,
        status,
        room_group: room_label,
        global_group: global_label,
        custom_group: details.and_then(|d| d.customgroup.clone()),
        rooms: if interactive { rooms } else { None },
        buttons,
        challenge_route: format!("challenge-{}", target.userid),
        dm_route: format!("dm-{}", target.userid),
        options_route: format!(
            "useroptions-{}-{}",
            target.userid,
            parent_room.unwrap_or_default()
        ),
    })
}

fn room_lists(
    rooms: &std::collections::BTreeMap<String, UserRoomEntry>,
    cx: &ProfileContext<'_>,
) -> RoomLists {
    let mut lists = RoomLists::default();
    for (key, entry) in rooms {
        if key == "global" {
            continue;
        }
        let rank = key.chars().next().filter(|c| !c.is_ascii_alphanumeric());
        let room_id = to_room_id(key);
        let open = cx.rooms.contains(&room_id);
        let link = if let Some(battle) = room_id.strip_prefix("battle-") {
            let p1 = without_rank(entry.p1.as_deref());
            let p2 = without_rank(entry.p2.as_deref());
            let own = cx.session.is_self(&to_id(p1)) || cx.session.is_self(&to_id(p2));
            RoomLink {
                label: battle.to_string(),
                rank,
                yours: own || open,
                title: Some(format!("{} v. {}", or_unknown(p1), or_unknown(p2))),
                room_id: room_id.clone(),
            }
        } else {
            RoomLink {
                label: room_id.clone(),
                rank,
                yours: open,
                title: None,
                room_id: room_id.clone(),
            }
        };
        let list = if entry.is_private {
            &mut lists.private
        } else if room_id.starts_with("battle-") {
            &mut lists.battles
        } else {
            &mut lists.chatrooms
        };
        list.push(link);
    }
    lists
}

fn without_rank(name: Option<&str>) -> &str {
    name.map_or("", |name| {
        let mut chars = name.chars();
        chars.next();
        chars.as_str()
    })
}

fn or_unknown(name: &str) -> &str {
    if name.is_empty() { "?" } else { name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::Dex;
    use crate::rooms::RoomInfo;

    struct Fixture {
        session: Session,
        groups: ServerGroups,
        rooms: RoomDirectory,
        dex: Dex,
        config: ClientConfig,
    }

    impl Fixture {
        fn new(session: Session) -> Self {
            Self {
                session,
                groups: ServerGroups::new(),
                rooms: RoomDirectory::new().with_room(RoomInfo::chat("lobby", "Lobby")),
                dex: Dex::empty(9),
                config: ClientConfig::default(),
            }
        }

        fn cx(&self) -> ProfileContext<'_> {
            ProfileContext {
                session: &self.session,
                groups: &self.groups,
                rooms: &self.rooms,
                dex: &self.dex,
                config: &self.config,
            }
        }
    }

    fn details(json: &str) -> UserDetails {
        UserDetails::from_json(json).unwrap()
    }

    #[test]
    fn names_get_a_blank_rank() {
        let target = UserTarget::new("Zarel");
        assert_eq!(target.name, " Zarel");
        assert_eq!(target.bare_name(), "Zarel");
        assert_eq!(
            target.details_command().as_deref(),
            Some("/cmd userdetails zarel")
        );
        assert_eq!(UserTarget::new("@Mod").name, "@Mod");
        assert_eq!(UserTarget::new("").details_command(), None);
    }

    #[test]
    fn loading_profile_uses_target_name() {
        let fixture = Fixture::new(Session::named("Red"));
        let profile =
            build_profile(&UserTarget::new("Blue"), None, true, None, &fixture.cx()).unwrap();
        assert_eq!(profile.name, "Blue");
        assert_eq!(profile.avatar, None);
        assert_eq!(profile.buttons, Some(ProfileButtons::Other));
        assert_eq!(profile.options_route, "useroptions-blue-");
    }

    #[test]
    fn offline_user_keeps_ranked_name() {
        let fixture = Fixture::new(Session::named("Red"));
        let details = details(r#"{"userid":"blue","name":"blue","rooms":false}"#);
        let profile = build_profile(
            &UserTarget::new("Blue"),
            Some(&details),
            true,
            Some("lobby"),
            &fixture.cx(),
        )
        .unwrap();
        assert_eq!(profile.name, " Blue");
        assert_eq!(profile.rooms, Some(RoomsView::Offline));
        assert!(profile.avatar.unwrap().ends_with("trainers/unknown.png"));
        assert_eq!(profile.options_route, "useroptions-blue-lobby");
    }

    #[test]
    fn rooms_are_split_and_marked() {
        let fixture = Fixture::new(Session::named("Red"));
        let details = details(
            r#"{"userid":"blue","name":"Blue","avatar":"oak","rooms":{
                "global":{},
                "@lobby":{},
                "techcode":{},
                "battle-gen9ou-7":{"p1":" Red","p2":" Blue"},
                "battle-gen9ou-8":{"p1":" Blue","isPrivate":true}}}"#,
        );
        let profile =
            build_profile(&UserTarget::new("Blue"), Some(&details), true, None, &fixture.cx())
                .unwrap();
        let Some(RoomsView::Lists(lists)) = profile.rooms else {
            panic!("expected room lists");
        };
        assert_eq!(lists.chatrooms.len(), 2);
        let lobby = lists.chatrooms.iter().find(|l| l.room_id == "lobby").unwrap();
        assert_eq!(lobby.rank, Some('@'));
        assert!(lobby.yours);
        assert_eq!(lists.battles[0].label, "gen9ou-7");
        assert!(lists.battles[0].yours);
        assert_eq!(lists.battles[0].title.as_deref(), Some("Red v. Blue"));
        assert_eq!(lists.private[0].title.as_deref(), Some("Blue v. ?"));
        assert!(!lists.private[0].yours);
    }

    #[test]
    fn duplicate_room_group_is_hidden() {
        let fixture = Fixture::new(Session::named("Red"));
        let details = details(r#"{"userid":"mod","name":"Mod","avatar":1,"group":"@"}"#);
        let profile =
            build_profile(&UserTarget::new("@Mod"), Some(&details), true, None, &fixture.cx())
                .unwrap();
        assert_eq!(profile.room_group, None);
        assert_eq!(
            profile.global_group.map(|g| g.name).as_deref(),
            Some("Global Moderator (@)")
        );
    }

    #[test]
    fn punished_room_group_is_flagged() {
        let fixture = Fixture::new(Session::named("Red"));
        let details = details(r#"{"userid":"spam","name":"Spam","avatar":1}"#);
        let profile =
            build_profile(&UserTarget::new("!Spam"), Some(&details), true, None, &fixture.cx())
                .unwrap();
        let group = profile.room_group.unwrap();
        assert_eq!(group.name, "Muted");
        assert!(group.punishment);
    }

    #[test]
    fn buttons_follow_relation() {
        let own = Fixture::new(Session::named("Red"));
        let profile =
            build_profile(&UserTarget::new("Red"), None, true, None, &own.cx()).unwrap();
        assert_eq!(profile.buttons, Some(ProfileButtons::OwnProfile));
        assert!(profile.avatar_editable);

        let guest = Fixture::new(Session::guest("Guest 1"));
        let profile =
            build_profile(&UserTarget::new("Red"), None, true, None, &guest.cx()).unwrap();
        assert_eq!(profile.buttons, Some(ProfileButtons::Disabled));

        let profile =
            build_profile(&UserTarget::new("Red"), None, false, None, &guest.cx()).unwrap();
        assert_eq!(profile.buttons, None);
    }

    #[test]
    fn away_status_is_dimmed() {
        let fixture = Fixture::new(Session::named("Red"));
        let details = details(r#"{"userid":"blue","name":"Blue","avatar":1,"status":"!busy"}"#);
        let profile =
            build_profile(&UserTarget::new("Blue"), Some(&details), true, None, &fixture.cx())
                .unwrap();
        assert!(profile.away);
        assert_eq!(profile.status.as_deref(), Some("busy"));
    }

    #[test]
    fn empty_target_has_no_profile() {
        let fixture = Fixture::new(Session::named("Red"));
        assert!(build_profile(&UserTarget::default(), None, true, None, &fixture.cx()).is_none());
    }
}
