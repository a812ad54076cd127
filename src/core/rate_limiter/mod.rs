//! Admission control
//!
//! Two independent limits gate every dispatch:
//!
//! - a permit pool of `capacity` permits bounds how many calls are in flight;
//! - a dispatch window bounds how many dispatches happen per `window`.
//!
//! The window history sits behind one async mutex. A caller holds it from the
//! moment it checks the history until it records its own dispatch instant, so
//! two callers can never both see the same free slot.

mod limiter;
mod strategies;
mod types;
mod utils;


pub use limiter::AdmissionController;
pub use types::{Admission, WindowSlot};
