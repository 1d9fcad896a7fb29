pub mod activity;
pub mod participant;
pub mod schedule;

pub use activity::*;
pub use participant::*;
pub use schedule::*;
