//! Activity catalog.
//!
//! Static activity descriptions and their display styles, keyed by a stable
//! activity id. The catalog is validated when it is built: every activity must
//! have a style entry and every style entry must belong to an activity.

use log::info;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use super::errors::FormError;
use super::models::activity::{ActivityConstraints, ActivityInfo, ActivityStyle};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Activity '{0}' has no style entry")]
    MissingStyle(String),
    #[error("Style entry '{0}' does not match any activity")]
    OrphanStyle(String),
    #[error("Activity id '{0}' is declared more than once")]
    DuplicateActivity(String),
}

#[derive(Debug, Clone)]
pub struct ActivityCatalog {
    activities: Vec<ActivityInfo>,
    styles: HashMap<String, ActivityStyle>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<ActivityInfo>, styles: HashMap<String, ActivityStyle>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for activity in &activities {
            if !seen.insert(activity.id.as_str()) {
                return Err(CatalogError::DuplicateActivity(activity.id.clone()));
            }
            if !styles.contains_key(&activity.id) {
                return Err(CatalogError::MissingStyle(activity.id.clone()));
            }
        }

        if let Some(orphan) = styles.keys().find(|id| !seen.contains(id.as_str())) {
            return Err(CatalogError::OrphanStyle(orphan.clone()));
        }

        info!("🎯 Activity catalog loaded with {} activities", activities.len());
        Ok(Self { activities, styles })
    }

    /// Activities offered by the park
    pub fn builtin() -> Result<Self, CatalogError> {
        let activities = vec![
            activity(
                "tirolesa",
                "Tirolesa",
                "Glide through the treetops on a thrilling zip line ride",
                ActivityConstraints::new(Some(8), true),
            ),
            activity(
                "safari",
                "Safari",
                "Tour the park in special vehicles and watch the local wildlife in its natural habitat",
                ActivityConstraints::new(None, false),
            ),
            activity(
                "palestra",
                "Palestra",
                "Climb our practice walls with certified instructors",
                ActivityConstraints::new(Some(12), true),
            ),
            activity(
                "jardineria",
                "Jardinería",
                "Learn sustainable growing techniques and help look after our nursery",
                ActivityConstraints::new(None, false),
            ),
        ];

        let styles = HashMap::from([
            style("tirolesa", "🪂", "#96E072"),
            style("safari", "🦁", "#3DA35D"),
            style("palestra", "🧗", "#134611"),
            style("jardineria", "🌱", "#97D848"),
        ]);

        Self::new(activities, styles)
    }

    pub fn activities(&self) -> &[ActivityInfo] {
        &self.activities
    }

    pub fn get(&self, activity_id: &str) -> Option<&ActivityInfo> {
        self.activities.iter().find(|activity| activity.id == activity_id)
    }

    /// Look up an activity by its display name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&ActivityInfo> {
        let normalized = name.trim().to_lowercase();
        self.activities
            .iter()
            .find(|activity| activity.name.to_lowercase() == normalized)
    }

    pub fn style(&self, activity_id: &str) -> Option<&ActivityStyle> {
        self.styles.get(activity_id)
    }

    pub fn require(&self, activity_id: &str) -> Result<&ActivityInfo, FormError> {
        self.get(activity_id)
            .ok_or_else(|| FormError::UnknownActivity(activity_id.to_string()))
    }
}

fn activity(id: &str, name: &str, description: &str, constraints: ActivityConstraints) -> ActivityInfo {
    ActivityInfo {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        constraints,
    }
}

fn style(id: &str, icon: &str, color: &str) -> (String, ActivityStyle) {
    (
        id.to_string(),
        ActivityStyle {
            icon: icon.to_string(),
            color: color.to_string(),
        },
    )
}
