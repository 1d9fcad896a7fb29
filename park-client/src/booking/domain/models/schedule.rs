use serde::{Deserialize, Serialize};

use super::activity::ActivityConstraints;
use crate::booking::domain::capacity::CapacityResolver;

/// Availability of a slot as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Full,
}

/// Capacity figures derived from the raw server counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCapacity {
    pub remaining: u32,
    pub status: SlotStatus,
}

impl SlotCapacity {
    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

/// One bookable time window, immutable once built from server data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub id: i64,
    pub activity_id: i64,
    pub activity_name: String,
    pub starts_at: String,
    pub ends_at: String,
    pub total_capacity: u32,
    pub occupied_count: u32,
    /// Lifecycle state reported by the server
    pub server_state: String,
    /// Rules for the activity as reported alongside the slot
    pub server_constraints: ActivityConstraints,
}

impl ScheduleSlot {
    pub fn capacity(&self) -> SlotCapacity {
        CapacityResolver::resolve(self.total_capacity, self.occupied_count, &self.server_state)
    }

    pub fn is_server_active(&self) -> bool {
        CapacityResolver::is_active_state(&self.server_state)
    }

    pub fn time_window(&self) -> String {
        format!("{} - {}", self.starts_at, self.ends_at)
    }
}
