//! Typed profile data: achievement and badge enumerations, detail records,
//! and the top-level [`AppData`] container the loader produces.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Closed set of achievement topics. Any other string in the input
/// document is a parse error, never an opaque passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementType {
    Economy,
    Sports,
    Gardening,
    Marketing,
    Arts,
}

impl AchievementType {
    /// All achievement types in canonical order. This order also indexes
    /// [`BadgeMap`].
    pub const ALL: [AchievementType; 5] = [
        AchievementType::Economy,
        AchievementType::Sports,
        AchievementType::Gardening,
        AchievementType::Marketing,
        AchievementType::Arts,
    ];

    /// Lowercase name as it appears in the input document.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementType::Economy => "economy",
            AchievementType::Sports => "sports",
            AchievementType::Gardening => "gardening",
            AchievementType::Marketing => "marketing",
            AchievementType::Arts => "arts",
        }
    }

    /// Capitalized name for headings.
    pub fn title(&self) -> &'static str {
        match self {
            AchievementType::Economy => "Economy",
            AchievementType::Sports => "Sports",
            AchievementType::Gardening => "Gardening",
            AchievementType::Marketing => "Marketing",
            AchievementType::Arts => "Arts",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AchievementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed set of badge symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeType {
    Star,
    Trophy,
    Leaf,
    Fire,
    Gem,
}

impl BadgeType {
    /// Glyph drawn for this badge.
    pub fn icon(&self) -> &'static str {
        match self {
            BadgeType::Star => "⭐",
            BadgeType::Trophy => "🏆",
            BadgeType::Leaf => "🍃",
            BadgeType::Fire => "🔥",
            BadgeType::Gem => "💎",
        }
    }
}

/// Total mapping from [`AchievementType`] to [`BadgeType`], indexed by
/// [`AchievementType::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeMap([BadgeType; 5]);

/// The canonical fallback mapping. Referenced wherever a default is needed,
/// never re-declared.
pub const DEFAULT_ACHIEVEMENT_BADGES: BadgeMap = BadgeMap([
    BadgeType::Star,   // economy
    BadgeType::Trophy, // sports
    BadgeType::Leaf,   // gardening
    BadgeType::Fire,   // marketing
    BadgeType::Gem,    // arts
]);

impl BadgeMap {
    /// Badge assigned to the given achievement type.
    pub fn badge_for(&self, kind: AchievementType) -> BadgeType {
        self.0[kind.index()]
    }

    pub fn set(&mut self, kind: AchievementType, badge: BadgeType) {
        self.0[kind.index()] = badge;
    }
}

impl Default for BadgeMap {
    fn default() -> Self {
        DEFAULT_ACHIEVEMENT_BADGES
    }
}

// The document may supply any subset of the five keys; keys it omits keep
// their default badge. Unknown keys or badge names fail the whole parse.
impl<'de> Deserialize<'de> for BadgeMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let partial = HashMap::<AchievementType, BadgeType>::deserialize(deserializer)?;
        let mut map = DEFAULT_ACHIEVEMENT_BADGES;
        for (kind, badge) in partial {
            map.set(kind, badge);
        }
        Ok(map)
    }
}

/// One achievement attached to a profile.
#[derive(Debug, Clone, Deserialize)]
pub struct Achievement {
    pub name: AchievementType,
    #[serde(default)]
    pub grade: Option<u8>,
    pub description: String,
    #[serde(default)]
    pub details: Option<AchievementDetails>,
}

/// Rich detail records for an achievement. Every section is optional in the
/// document; absent sections deserialize to empty lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AchievementDetails {
    #[serde(default)]
    pub diplomas: Vec<Diploma>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub championships: Vec<Championship>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub performances: Vec<Performance>,
}

impl AchievementDetails {
    /// True when no section has any records, so the UI can skip the block.
    pub fn is_empty(&self) -> bool {
        self.diplomas.is_empty()
            && self.publications.is_empty()
            && self.channels.is_empty()
            && self.championships.is_empty()
            && self.projects.is_empty()
            && self.performances.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Diploma {
    pub degree: String,
    pub institution: String,
    pub year: u16,
    pub major: String,
    pub gpa: f32,
    #[serde(default)]
    pub honors: Option<String>,
    #[serde(default)]
    pub awards: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Publication {
    pub title: String,
    pub journal: String,
    pub year: u16,
    pub volume: u16,
    pub issue: u16,
    pub pages: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Championship {
    pub name: String,
    pub year: u16,
    pub placement: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub year: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Performance {
    pub title: String,
    pub venue: String,
    #[serde(default)]
    pub year: Option<u16>,
}

/// One card's subject. Immutable after load.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    /// Image URI; resolving it is the platform's concern, not ours.
    pub image: String,
    pub achievements: Vec<Achievement>,
}

/// Descriptor for a grade-fetching method declared in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeFetchingMethod {
    pub name: AchievementType,
    pub method: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Fully loaded, typed representation of the input document. Loaded once
/// per session; a reload replaces the whole structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub grade_fetching_methods: Vec<GradeFetchingMethod>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub achievement_badges: BadgeMap,
}

impl AppData {
    /// Empty data with the canonical badge mapping; what the loader hands
    /// back when the document cannot be used.
    pub fn fallback() -> Self {
        AppData {
            grade_fetching_methods: Vec::new(),
            profiles: Vec::new(),
            achievement_badges: DEFAULT_ACHIEVEMENT_BADGES,
        }
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Badge for an achievement type under this data's mapping.
    pub fn badge_for(&self, kind: AchievementType) -> BadgeType {
        self.achievement_badges.badge_for(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mapping_matches_canonical_assignments() {
        let map = BadgeMap::default();
        assert_eq!(map.badge_for(AchievementType::Economy), BadgeType::Star);
        assert_eq!(map.badge_for(AchievementType::Sports), BadgeType::Trophy);
        assert_eq!(map.badge_for(AchievementType::Gardening), BadgeType::Leaf);
        assert_eq!(map.badge_for(AchievementType::Marketing), BadgeType::Fire);
        assert_eq!(map.badge_for(AchievementType::Arts), BadgeType::Gem);
    }

    #[test]
    fn partial_badge_map_keeps_defaults_for_missing_keys() {
        let map: BadgeMap = serde_yaml::from_str("sports: gem").unwrap();
        assert_eq!(map.badge_for(AchievementType::Sports), BadgeType::Gem);
        // Everything else untouched
        assert_eq!(map.badge_for(AchievementType::Economy), BadgeType::Star);
        assert_eq!(map.badge_for(AchievementType::Arts), BadgeType::Gem);
    }

    #[test]
    fn unknown_achievement_name_is_a_parse_error() {
        let result: Result<BadgeMap, _> = serde_yaml::from_str("cooking: star");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_badge_name_is_a_parse_error() {
        let result: Result<BadgeMap, _> = serde_yaml::from_str("sports: medal");
        assert!(result.is_err());
    }

    #[test]
    fn achievement_type_display_is_lowercase() {
        assert_eq!(AchievementType::Economy.to_string(), "economy");
        assert_eq!(AchievementType::Arts.title(), "Arts");
    }
}
