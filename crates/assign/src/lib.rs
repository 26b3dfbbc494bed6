//! Applying spoof profile changes.
//!
//! [`AssignmentController`] owns the read-modify-write cycle over the
//! persisted registry value: read, decode, mutate one entry, encode, write,
//! then ask the process controller to restart the affected application.
//!
//! Cycles are not serialized against each other. Two interleaved cycles on
//! the same settings value lose one of the updates; the later write wins.
//!
//! [`AssignmentView`] is the read-only projection a list UI renders from.

mod controller;
mod error;
mod view;

pub use appspoof_profiles::DEFAULT_SETTING_KEY;
pub use controller::{AssignOutcome, AssignmentController, Termination};
pub use error::AssignError;
pub use view::{AssignmentView, ViewState};
