//! Navigation between the booking steps.
//!
//! Each step is reached with string parameters only, so the participant
//! roster travels to the confirmation step as JSON.

use std::collections::BTreeMap;

use super::errors::FormError;
use super::models::participant::ParticipantRecord;

pub const ACTIVITY_LIST_PATH: &str = "/";
pub const SCHEDULE_PATH: &str = "/[activityId]/schedule";
pub const PARTICIPANTS_PATH: &str = "/[activityId]/participants";
pub const CONFIRMATION_PATH: &str = "/[activityId]/confirmation";

const ACTIVITY_ID: &str = "activityId";
const SCHEDULE_ID: &str = "scheduleId";
const PARTICIPANTS: &str = "participants";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingRoute {
    ActivityList,
    Schedule {
        activity_id: String,
    },
    Participants {
        activity_id: String,
        schedule_id: i64,
    },
    Confirmation {
        activity_id: String,
        schedule_id: i64,
        participants: Vec<ParticipantRecord>,
    },
}

/// Path template plus string parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLocation {
    pub pathname: &'static str,
    pub params: BTreeMap<String, String>,
}

impl BookingRoute {
    pub fn to_location(&self) -> Result<RouteLocation, FormError> {
        let mut params = BTreeMap::new();
        let pathname = match self {
            BookingRoute::ActivityList => ACTIVITY_LIST_PATH,
            BookingRoute::Schedule { activity_id } => {
                params.insert(ACTIVITY_ID.to_string(), activity_id.clone());
                SCHEDULE_PATH
            }
            BookingRoute::Participants { activity_id, schedule_id } => {
                params.insert(ACTIVITY_ID.to_string(), activity_id.clone());
                params.insert(SCHEDULE_ID.to_string(), schedule_id.to_string());
                PARTICIPANTS_PATH
            }
            BookingRoute::Confirmation {
                activity_id,
                schedule_id,
                participants,
            } => {
                let roster = serde_json::to_string(participants)
                    .map_err(|e| FormError::Navigation(format!("cannot encode participants: {}", e)))?;
                params.insert(ACTIVITY_ID.to_string(), activity_id.clone());
                params.insert(SCHEDULE_ID.to_string(), schedule_id.to_string());
                params.insert(PARTICIPANTS.to_string(), roster);
                CONFIRMATION_PATH
            }
        };
        Ok(RouteLocation { pathname, params })
    }

    pub fn from_location(pathname: &str, params: &BTreeMap<String, String>) -> Result<Self, FormError> {
        match pathname {
            ACTIVITY_LIST_PATH => Ok(BookingRoute::ActivityList),
            SCHEDULE_PATH => Ok(BookingRoute::Schedule {
                activity_id: activity_id(params)?,
            }),
            PARTICIPANTS_PATH => Ok(BookingRoute::Participants {
                activity_id: activity_id(params)?,
                schedule_id: schedule_id(params)?,
            }),
            CONFIRMATION_PATH => {
                let raw = required(params, PARTICIPANTS)?;
                let participants: Vec<ParticipantRecord> = serde_json::from_str(raw)
                    .map_err(|e| FormError::Navigation(format!("invalid participants: {}", e)))?;
                Ok(BookingRoute::Confirmation {
                    activity_id: activity_id(params)?,
                    schedule_id: schedule_id(params)?,
                    participants,
                })
            }
            other => Err(FormError::Navigation(format!("unknown path {}", other))),
        }
    }
}

fn required<'a>(params: &'a BTreeMap<String, String>, key: &str) -> Result<&'a str, FormError> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| FormError::Navigation(format!("missing {}", key)))
}

/// Activity ids are compared in lowercase
fn activity_id(params: &BTreeMap<String, String>) -> Result<String, FormError> {
    Ok(required(params, ACTIVITY_ID)?.trim().to_lowercase())
}

fn schedule_id(params: &BTreeMap<String, String>) -> Result<i64, FormError> {
    let raw = required(params, SCHEDULE_ID)?;
    raw.trim()
        .parse()
        .map_err(|_| FormError::Navigation(format!("invalid {}: {}", SCHEDULE_ID, raw)))
}
