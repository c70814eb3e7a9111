//! Profile domain: typed records and the fail-closed document loader.

pub mod loader;
pub mod types;

pub use loader::{load, load_from_path};
pub use types::{
    Achievement, AchievementDetails, AchievementType, AppData, BadgeMap, BadgeType,
    GradeFetchingMethod, Profile, DEFAULT_ACHIEVEMENT_BADGES,
};
