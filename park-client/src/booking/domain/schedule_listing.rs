//! Screen data for the activity list and the schedule picker.

use log::warn;
use serde::Serialize;

use super::activity_catalog::ActivityCatalog;
use super::errors::FormError;
use super::models::activity::{ActivityInfo, ActivityStyle};
use super::models::schedule::{ScheduleSlot, SlotCapacity};
use crate::booking::storage::ScheduleSnapshot;

/// One row of the activity list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityOverview {
    pub activity: ActivityInfo,
    pub style: ActivityStyle,
    pub total_slots: usize,
    pub available_slots: usize,
}

/// A slot together with its resolved capacity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub slot: ScheduleSlot,
    pub capacity: SlotCapacity,
}

pub struct ScheduleListing;

impl ScheduleListing {
    /// Activities of the catalog with their slot counts, sorted by name.
    ///
    /// Schedules for activities the catalog does not know are skipped with a
    /// warning.
    pub fn overview(catalog: &ActivityCatalog, snapshot: &ScheduleSnapshot) -> Vec<ActivityOverview> {
        for slot in snapshot.all() {
            if catalog.find_by_name(&slot.activity_name).is_none() {
                warn!(
                    "⚠️ Schedule {} belongs to unknown activity '{}', skipping",
                    slot.id, slot.activity_name
                );
            }
        }

        let mut rows: Vec<ActivityOverview> = catalog
            .activities()
            .iter()
            .filter_map(|activity| {
                let style = catalog.style(&activity.id)?.clone();
                let slots = snapshot.for_activity(&activity.name);
                let available_slots = slots.iter().filter(|slot| slot.capacity().is_available()).count();
                Some(ActivityOverview {
                    activity: activity.clone(),
                    style,
                    total_slots: slots.len(),
                    available_slots,
                })
            })
            .collect();

        rows.sort_by(|a, b| a.activity.name.cmp(&b.activity.name));
        rows
    }

    /// Active slots of one activity sorted by start time
    pub fn slots_for_activity(
        catalog: &ActivityCatalog,
        snapshot: &ScheduleSnapshot,
        activity_id: &str,
    ) -> Result<Vec<SlotView>, FormError> {
        let activity = catalog.require(activity_id)?;
        let mut views: Vec<SlotView> = snapshot
            .for_activity(&activity.name)
            .into_iter()
            .map(|slot| SlotView {
                slot: slot.clone(),
                capacity: slot.capacity(),
            })
            .collect();

        views.sort_by(|a, b| a.slot.starts_at.cmp(&b.slot.starts_at).then(a.slot.id.cmp(&b.slot.id)));
        Ok(views)
    }

    /// Pick a slot for booking; full or inactive slots cannot be selected
    pub fn select_slot<'a>(
        catalog: &ActivityCatalog,
        snapshot: &'a ScheduleSnapshot,
        activity_id: &str,
        schedule_id: i64,
    ) -> Result<&'a ScheduleSlot, FormError> {
        let activity = catalog.require(activity_id)?;
        let slot = snapshot
            .find(schedule_id)
            .filter(|slot| slot.activity_name.to_lowercase() == activity.name.to_lowercase())
            .ok_or(FormError::UnknownSchedule(schedule_id))?;

        if !slot.capacity().is_available() {
            return Err(FormError::SlotUnavailable);
        }
        Ok(slot)
    }
}
