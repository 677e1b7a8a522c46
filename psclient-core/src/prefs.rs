//! Client preferences edited by the volume, options and chat-formatting popups.
//!
//! Setters that the server also needs to know about return the command to
//! send; the caller forwards it over the connection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub const ALL: [(Self, &'static str); 3] = [
        (Self::Light, "Light"),
        (Self::Dark, "Dark"),
        (Self::System, "Match system theme"),
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .map(|(theme, _)| theme)
            .find(|theme| theme.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Two panels when the window is wide enough.
    #[default]
    Auto,
    #[serde(rename = "onepanel")]
    SinglePanel,
    Vertical,
}

impl Layout {
    pub const ALL: [(Self, &'static str); 3] = [
        (Self::Auto, "Two panels (if wide enough)"),
        (Self::SinglePanel, "Single panel"),
        (Self::Vertical, "Vertical tabs"),
    ];

    /// Value of the layout `<select>` option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "",
            Self::SinglePanel => "onepanel",
            Self::Vertical => "vertical",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .map(|(layout, _)| layout)
            .find(|layout| layout.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampMode {
    #[default]
    Off,
    Minutes,
    Seconds,
}

impl TimestampMode {
    pub const ALL: [(Self, &'static str); 3] = [
        (Self::Off, "Off"),
        (Self::Minutes, "[HH:MM]"),
        (Self::Seconds, "[HH:MM:SS]"),
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .map(|(mode, _)| mode)
            .find(|mode| mode.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    #[serde(default)]
    pub chatrooms: TimestampMode,
    #[serde(default)]
    pub pms: TimestampMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentNotifications {
    #[default]
    Off,
    Notify,
    Hide,
}

impl TournamentNotifications {
    pub const ALL: [(Self, &'static str); 3] = [
        (Self::Off, "No notifications"),
        (Self::Notify, "Notifications"),
        (Self::Hide, "Hide"),
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "",
            Self::Notify => "notify",
            Self::Hide => "hide",
        }
    }

    /// Unknown values switch notifications off.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "notify" => Self::Notify,
            "hide" => Self::Hide,
            _ => Self::Off,
        }
    }
}

/// Languages the server can translate into, as `(id, native name)`.
pub const LANGUAGES: [(&str, &str); 12] = [
    ("german", "Deutsch"),
    ("english", "English"),
    ("spanish", "Español"),
    ("french", "Français"),
    ("italian", "Italiano"),
    ("dutch", "Nederlands"),
    ("portuguese", "Português"),
    ("turkish", "Türkçe"),
    ("hindi", "हिंदी"),
    ("japanese", "日本語"),
    ("simplifiedchinese", "简体中文"),
    ("traditionalchinese", "中文"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeChannel {
    Effects,
    Music,
    Notifications,
}

impl VolumeChannel {
    pub const ALL: [Self; 3] = [Self::Effects, Self::Music, Self::Notifications];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Effects => "Effects",
            Self::Music => "Music",
            Self::Notifications => "Notifications",
        }
    }

    #[must_use]
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::Effects => "effectvolume",
            Self::Music => "musicvolume",
            Self::Notifications => "notifvolume",
        }
    }
}

/// Checkbox options on the options popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionToggle {
    NoAnimations,
    BwGraphics,
    NoPastGens,
    BlockPms,
    BlockChallenges,
    InChatPm,
    NoSelfHighlight,
    LeavePopupRoom,
    RefreshPrompt,
}

impl OptionToggle {
    pub const GRAPHICS: [Self; 3] = [Self::NoAnimations, Self::BwGraphics, Self::NoPastGens];
    pub const CHAT: [Self; 6] = [
        Self::BlockPms,
        Self::BlockChallenges,
        Self::InChatPm,
        Self::NoSelfHighlight,
        Self::LeavePopupRoom,
        Self::RefreshPrompt,
    ];

    #[must_use]
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::NoAnimations => "noanim",
            Self::BwGraphics => "bwgfx",
            Self::NoPastGens => "nopastgens",
            Self::BlockPms => "blockPMs",
            Self::BlockChallenges => "blockChallenges",
            Self::InChatPm => "inchatpm",
            Self::NoSelfHighlight => "noselfhighlight",
            Self::LeavePopupRoom => "leavePopupRoom",
            Self::RefreshPrompt => "refreshprompt",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoAnimations => "Disable animations",
            Self::BwGraphics => "Use 2D sprites instead of 3D models",
            Self::NoPastGens => "Use modern sprites for past generations",
            Self::BlockPms => "Block PMs",
            Self::BlockChallenges => "Block challenges",
            Self::InChatPm => "Show PMs in chatrooms",
            Self::NoSelfHighlight => "Do not highlight when your name is said in chat",
            Self::LeavePopupRoom => "Confirm before leaving a room",
            Self::RefreshPrompt => "Confirm before refreshing",
        }
    }
}

/// Suppressible chat formatting features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormattingToggle {
    Greentext,
    Me,
    Spoiler,
    Links,
    Interstice,
}

impl FormattingToggle {
    pub const ALL: [Self; 5] = [
        Self::Greentext,
        Self::Me,
        Self::Spoiler,
        Self::Links,
        Self::Interstice,
    ];

    #[must_use]
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::Greentext => "greentext",
            Self::Me => "me",
            Self::Spoiler => "spoiler",
            Self::Links => "links",
            Self::Interstice => "interstice",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatFormatting {
    #[serde(default)]
    pub hidegreentext: bool,
    #[serde(default)]
    pub hideme: bool,
    #[serde(default)]
    pub hidespoiler: bool,
    #[serde(default)]
    pub hidelinks: bool,
    #[serde(default)]
    pub hideinterstice: bool,
}

impl ChatFormatting {
    #[must_use]
    pub const fn get(&self, toggle: FormattingToggle) -> bool {
        match toggle {
            FormattingToggle::Greentext => self.hidegreentext,
            FormattingToggle::Me => self.hideme,
            FormattingToggle::Spoiler => self.hidespoiler,
            FormattingToggle::Links => self.hidelinks,
            FormattingToggle::Interstice => self.hideinterstice,
        }
    }

    pub const fn set(&mut self, toggle: FormattingToggle, hide: bool) {
        match toggle {
            FormattingToggle::Greentext => self.hidegreentext = hide,
            FormattingToggle::Me => self.hideme = hide,
            FormattingToggle::Spoiler => self.hidespoiler = hide,
            FormattingToggle::Links => self.hidelinks = hide,
            FormattingToggle::Interstice => self.hideinterstice = hide,
        }
    }
}

/// Chosen client background; `url` is empty for the built-in ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundSetting {
    pub id: String,
    #[serde(default)]
    pub url: String,
}

fn default_volume() -> u8 {
    50
}

fn default_language() -> String {
    "english".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(rename = "effectvolume", default = "default_volume")]
    pub effect_volume: u8,
    #[serde(rename = "musicvolume", default = "default_volume")]
    pub music_volume: u8,
    #[serde(rename = "notifvolume", default = "default_volume")]
    pub notif_volume: u8,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub layout: Layout,
    #[serde(rename = "noanim", default)]
    pub no_animations: bool,
    #[serde(rename = "bwgfx", default)]
    pub bw_graphics: bool,
    #[serde(rename = "nopastgens", default)]
    pub no_past_gens: bool,
    #[serde(rename = "blockPMs", default)]
    pub block_pms: bool,
    #[serde(default)]
    pub block_challenges: bool,
    #[serde(rename = "inchatpm", default)]
    pub in_chat_pm: bool,
    #[serde(rename = "noselfhighlight", default)]
    pub no_self_highlight: bool,
    #[serde(default)]
    pub leave_popup_room: bool,
    #[serde(rename = "refreshprompt", default)]
    pub refresh_prompt: bool,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub tournaments: TournamentNotifications,
    #[serde(default)]
    pub timestamps: Timestamps,
    #[serde(rename = "chatformatting", default)]
    pub chat_formatting: ChatFormatting,
    #[serde(rename = "bg", default)]
    pub background: Option<BackgroundSetting>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            effect_volume: default_volume(),
            music_volume: default_volume(),
            notif_volume: default_volume(),
            mute: false,
            theme: Theme::default(),
            layout: Layout::default(),
            no_animations: false,
            bw_graphics: false,
            no_past_gens: false,
            block_pms: false,
            block_challenges: false,
            in_chat_pm: false,
            no_self_highlight: false,
            leave_popup_room: false,
            refresh_prompt: false,
            language: default_language(),
            tournaments: TournamentNotifications::default(),
            timestamps: Timestamps::default(),
            chat_formatting: ChatFormatting::default(),
            background: None,
        }
    }
}

impl Preferences {
    #[must_use]
    pub const fn volume(&self, channel: VolumeChannel) -> u8 {
        match channel {
            VolumeChannel::Effects => self.effect_volume,
            VolumeChannel::Music => self.music_volume,
            VolumeChannel::Notifications => self.notif_volume,
        }
    }

    /// Set a channel's volume, clamped to `0..=100`.
    pub fn set_volume(&mut self, channel: VolumeChannel, volume: u8) {
        let volume = volume.min(100);
        match channel {
            VolumeChannel::Effects => self.effect_volume = volume,
            VolumeChannel::Music => self.music_volume = volume,
            VolumeChannel::Notifications => self.notif_volume = volume,
        }
    }

    /// `"40%"`, or `"-"` when muted or silent.
    #[must_use]
    pub fn volume_label(&self, channel: VolumeChannel) -> String {
        let volume = self.volume(channel);
        if self.mute || volume == 0 {
            "-".to_string()
        } else {
            format!("{volume}%")
        }
    }

    #[must_use]
    pub const fn toggle(&self, toggle: OptionToggle) -> bool {
        match toggle {
            OptionToggle::NoAnimations => self.no_animations,
            OptionToggle::BwGraphics => self.bw_graphics,
            OptionToggle::NoPastGens => self.no_past_gens,
            OptionToggle::BlockPms => self.block_pms,
            OptionToggle::BlockChallenges => self.block_challenges,
            OptionToggle::InChatPm => self.in_chat_pm,
            OptionToggle::NoSelfHighlight => self.no_self_highlight,
            OptionToggle::LeavePopupRoom => self.leave_popup_room,
            OptionToggle::RefreshPrompt => self.refresh_prompt,
        }
    }

    /// Apply a checkbox change; returns the command the server must receive, if any.
    pub fn set_toggle(&mut self, toggle: OptionToggle, value: bool) -> Option<String> {
        match toggle {
            OptionToggle::NoAnimations => self.no_animations = value,
            OptionToggle::BwGraphics => self.bw_graphics = value,
            OptionToggle::NoPastGens => self.no_past_gens = value,
            OptionToggle::BlockPms => {
                self.block_pms = value;
                return Some(if value { "/blockpms" } else { "/unblockpms" }.to_string());
            }
            OptionToggle::BlockChallenges => {
                self.block_challenges = value;
                return Some(
                    if value {
                        "/blockchallenges"
                    } else {
                        "/unblockchallenges"
                    }
                    .to_string(),
                );
            }
            OptionToggle::InChatPm => self.in_chat_pm = value,
            OptionToggle::NoSelfHighlight => self.no_self_highlight = value,
            OptionToggle::LeavePopupRoom => self.leave_popup_room = value,
            OptionToggle::RefreshPrompt => self.refresh_prompt = value,
        }
        None
    }

    /// Switch language; returns the command telling the server.
    pub fn set_language(&mut self, language: &str) -> String {
        language.clone_into(&mut self.language);
        format!("/language {language}")
    }

    /// Battle sprite set implied by the graphics options.
    #[must_use]
    pub const fn sprite_set(&self) -> &'static str {
        if self.bw_graphics || self.no_animations {
            "bw"
        } else {
            "xy"
        }
    }

    /// Parse persisted preferences, falling back to defaults per field.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Command setting (or clearing, when blank) the user's status message.
#[must_use]
pub fn status_command(text: &str) -> String {
    if text.is_empty() {
        "/clearstatus".to_string()
    } else {
        format!("/status {text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_label_reflects_mute() {
        let mut prefs = Preferences::default();
        prefs.set_volume(VolumeChannel::Music, 40);
        assert_eq!(prefs.volume_label(VolumeChannel::Music), "40%");
        prefs.set_volume(VolumeChannel::Effects, 0);
        assert_eq!(prefs.volume_label(VolumeChannel::Effects), "-");
        prefs.mute = true;
        assert_eq!(prefs.volume_label(VolumeChannel::Music), "-");
    }

    #[test]
    fn volume_is_clamped() {
        let mut prefs = Preferences::default();
        prefs.set_volume(VolumeChannel::Notifications, 250);
        assert_eq!(prefs.notif_volume, 100);
    }

    #[test]
    fn blocking_toggles_produce_commands() {
        let mut prefs = Preferences::default();
        assert_eq!(
            prefs.set_toggle(OptionToggle::BlockPms, true).as_deref(),
            Some("/blockpms")
        );
        assert!(prefs.block_pms);
        assert_eq!(
            prefs.set_toggle(OptionToggle::BlockChallenges, false).as_deref(),
            Some("/unblockchallenges")
        );
        assert_eq!(prefs.set_toggle(OptionToggle::NoAnimations, true), None);
        assert!(prefs.toggle(OptionToggle::NoAnimations));
    }

    #[test]
    fn graphics_options_pick_sprite_set() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.sprite_set(), "xy");
        prefs.set_toggle(OptionToggle::NoAnimations, true);
        assert_eq!(prefs.sprite_set(), "bw");
    }

    #[test]
    fn language_change_tells_server() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.set_language("french"), "/language french");
        assert_eq!(prefs.language, "french");
    }

    #[test]
    fn formatting_toggles_map_to_hide_flags() {
        let mut formatting = ChatFormatting::default();
        formatting.set(FormattingToggle::Spoiler, true);
        assert!(formatting.hidespoiler);
        assert!(formatting.get(FormattingToggle::Spoiler));
        assert!(!formatting.get(FormattingToggle::Links));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let prefs = Preferences::from_json(
            r#"{"mute":true,"layout":"onepanel","timestamps":{"pms":"seconds"},"blockPMs":true}"#,
        )
        .unwrap();
        assert!(prefs.mute);
        assert!(prefs.block_pms);
        assert_eq!(prefs.layout, Layout::SinglePanel);
        assert_eq!(prefs.timestamps.pms, TimestampMode::Seconds);
        assert_eq!(prefs.timestamps.chatrooms, TimestampMode::Off);
        assert_eq!(prefs.effect_volume, 50);
        assert_eq!(prefs.language, "english");
    }

    #[test]
    fn select_values_parse() {
        assert_eq!(Layout::parse(""), Some(Layout::Auto));
        assert_eq!(Layout::parse("vertical"), Some(Layout::Vertical));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(TimestampMode::parse("minutes"), Some(TimestampMode::Minutes));
        assert_eq!(TournamentNotifications::parse("bogus"), TournamentNotifications::Off);
    }

    #[test]
    fn status_command_clears_on_empty() {
        assert_eq!(status_command(""), "/clearstatus");
        assert_eq!(status_command("brb"), "/status brb");
    }
}
