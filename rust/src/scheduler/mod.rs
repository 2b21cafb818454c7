//! Roadmap scheduler: converts exams and manual overrides into dated tasks.
//!
//! Placement walks backward from each test date, reserving simulation days
//! globally before any practice or study day is placed, then fills long
//! gaps with refresh tasks.

mod core;
mod refresh;
mod vault;

pub use core::{build_roadmap, RoadmapScheduler};
pub use refresh::refresh_dates;
pub use vault::{walk_back, Vault};
