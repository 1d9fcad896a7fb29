//! Schedule capacity resolution.
//!
//! Turns the raw counters of a schedule (total places, occupied places and the
//! server lifecycle state) into the remaining capacity and the availability
//! status used by the rest of the booking flow.

use log::warn;

use super::models::schedule::{SlotCapacity, SlotStatus};

/// Server state name of a schedule that accepts inscriptions
pub const ACTIVE_SCHEDULE_STATE: &str = "activo";

pub struct CapacityResolver;

impl CapacityResolver {
    /// Resolve remaining capacity and status.
    ///
    /// An occupied count above the total is a server inconsistency: the
    /// remaining capacity is clamped to zero and the slot is reported full.
    pub fn resolve(total_capacity: u32, occupied_count: u32, server_state: &str) -> SlotCapacity {
        let remaining = match total_capacity.checked_sub(occupied_count) {
            Some(remaining) => remaining,
            None => {
                warn!(
                    "⚠️ Schedule counters are inconsistent: occupied {} > total {}, treating as full",
                    occupied_count, total_capacity
                );
                0
            }
        };

        let status = if Self::is_active_state(server_state) && remaining > 0 {
            SlotStatus::Available
        } else {
            SlotStatus::Full
        };

        SlotCapacity { remaining, status }
    }

    pub fn is_active_state(server_state: &str) -> bool {
        server_state == ACTIVE_SCHEDULE_STATE
    }
}
