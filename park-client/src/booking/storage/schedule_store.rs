//! # Schedule Store
//!
//! Owns the schedule source and hands out immutable snapshots. A refresh
//! builds a new snapshot and swaps it in; snapshots already handed out never
//! change.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::traits::ScheduleSource;
use crate::booking::domain::models::schedule::ScheduleSlot;

/// Schedules as fetched at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSnapshot {
    slots: Vec<ScheduleSlot>,
    fetched_at: DateTime<Utc>,
}

impl ScheduleSnapshot {
    pub fn new(slots: Vec<ScheduleSlot>, fetched_at: DateTime<Utc>) -> Self {
        Self { slots, fetched_at }
    }

    pub fn all(&self) -> &[ScheduleSlot] {
        &self.slots
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Server-active schedules of one activity, matched by name ignoring case
    pub fn for_activity(&self, activity_name: &str) -> Vec<&ScheduleSlot> {
        let normalized = activity_name.trim().to_lowercase();
        self.slots
            .iter()
            .filter(|slot| slot.activity_name.to_lowercase() == normalized && slot.is_server_active())
            .collect()
    }

    pub fn find(&self, schedule_id: i64) -> Option<&ScheduleSlot> {
        self.slots.iter().find(|slot| slot.id == schedule_id)
    }
}

pub struct ScheduleStore {
    source: Arc<dyn ScheduleSource>,
    latest: RwLock<Option<Arc<ScheduleSnapshot>>>,
}

impl ScheduleStore {
    pub fn new(source: Arc<dyn ScheduleSource>) -> Self {
        Self {
            source,
            latest: RwLock::new(None),
        }
    }

    /// Fetch schedules and publish them as the latest snapshot
    pub async fn refresh(&self) -> Result<Arc<ScheduleSnapshot>> {
        let slots = self
            .source
            .fetch_schedules()
            .await
            .context("Failed to fetch schedules")?;

        let snapshot = Arc::new(ScheduleSnapshot::new(slots, Utc::now()));
        info!("🗓️ Loaded {} schedules", snapshot.len());

        *self.latest.write().await = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Last published snapshot, if any refresh succeeded yet
    pub async fn latest(&self) -> Option<Arc<ScheduleSnapshot>> {
        self.latest.read().await.clone()
    }

    /// Latest snapshot, fetching one first if none exists
    pub async fn current(&self) -> Result<Arc<ScheduleSnapshot>> {
        if let Some(snapshot) = self.latest().await {
            debug!("Using schedule snapshot from {}", snapshot.fetched_at());
            return Ok(snapshot);
        }
        self.refresh().await
    }
}
