//! Background picker.

use crate::prefs::BackgroundSetting;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    Charizards,
    Horizon,
    Waterfall,
    Ocean,
    Shaymin,
    SolidBlue,
}

/// Backgrounds "Random" picks from.
pub const RANDOM_POOL: [Background; 5] = [
    Background::Horizon,
    Background::Ocean,
    Background::Waterfall,
    Background::Shaymin,
    Background::Charizards,
];

pub const FAILED_UPLOAD: &str = "Failed to load background image.";

impl Background {
    /// Official backgrounds in picker order.
    pub const OFFICIAL: [Self; 6] = [
        Self::Charizards,
        Self::Horizon,
        Self::Waterfall,
        Self::Ocean,
        Self::Shaymin,
        Self::SolidBlue,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Charizards => "charizards",
            Self::Horizon => "horizon",
            Self::Waterfall => "waterfall",
            Self::Ocean => "ocean",
            Self::Shaymin => "shaymin",
            Self::SolidBlue => "solidblue",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Charizards => "Charizards",
            Self::Horizon => "Horizon",
            Self::Waterfall => "Waterfall",
            Self::Ocean => "Ocean",
            Self::Shaymin => "Shaymin",
            Self::SolidBlue => "Solid blue",
        }
    }

    /// Inline style of the preview swatch.
    #[must_use]
    pub fn swatch_style(self) -> String {
        match self {
            Self::SolidBlue => "background: #344b6c".to_string(),
            other => {
                let row = Self::OFFICIAL
                    .iter()
                    .position(|bg| *bg == other)
                    .unwrap_or_default();
                format!("background-position: 0 -{}px", row * 90)
            }
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::OFFICIAL.into_iter().find(|bg| bg.id() == id)
    }

    /// Resolve a picker value; blank means a random official background.
    pub fn choose<R: Rng + ?Sized>(value: &str, rng: &mut R) -> Self {
        Self::from_id(value).unwrap_or_else(|| {
            if !value.is_empty() {
                log::warn!("unknown background {value:?}, picking one at random");
            }
            RANDOM_POOL
                .choose(rng)
                .copied()
                .unwrap_or(Self::Horizon)
        })
    }

    #[must_use]
    pub fn setting(self) -> BackgroundSetting {
        BackgroundSetting {
            id: self.id().to_string(),
            url: String::new(),
        }
    }
}

/// Setting for an uploaded image read as a data URL.
#[must_use]
pub fn custom_background(data_url: &str) -> BackgroundSetting {
    BackgroundSetting {
        id: "custom".to_string(),
        url: data_url.to_string(),
    }
}
