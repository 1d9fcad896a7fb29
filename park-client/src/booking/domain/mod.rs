//! # Domain Module
//!
//! Booking logic of the adventure park client, independent of the REST API
//! and the email provider.
//!
//! ## Module Organization
//!
//! - **capacity**: remaining places and availability of a schedule slot
//! - **field_validator**: per-field validation rules
//! - **roster**: participant records bounded by remaining capacity
//! - **error_map**: sparse map of outstanding field errors
//! - **participant_form**: form session tying roster, errors and state together
//! - **submission_gate**: validate, persist, then send the confirmation email
//! - **activity_catalog** / **schedule_listing**: activity list and schedule picker data
//! - **navigation**: parameters passed between booking steps
//!
//! ## Core Concepts
//!
//! - **Slot**: one bookable time window with total and occupied counters
//! - **Roster**: the participant records entered in the current form session
//! - **Error map**: the only feedback channel for field validation

pub mod activity_catalog;
pub mod capacity;
pub mod commands;
pub mod error_map;
pub mod errors;
pub mod field_validator;
pub mod models;
pub mod navigation;
pub mod participant_form;
pub mod roster;
pub mod schedule_listing;
pub mod submission_gate;

pub use activity_catalog::{ActivityCatalog, CatalogError};
pub use capacity::CapacityResolver;
pub use error_map::ErrorMap;
pub use errors::{BookingError, FormError};
pub use field_validator::{FieldError, FieldValidator};
pub use navigation::{BookingRoute, RouteLocation};
pub use participant_form::{BookingTarget, FormState, ParticipantForm};
pub use roster::Roster;
pub use schedule_listing::{ActivityOverview, ScheduleListing, SlotView};
pub use submission_gate::{SubmissionGate, SubmitOutcome};
