//! DQQ indicator engine.
//!
//! This crate turns recorded food-group consumption into diet-quality
//! indicators:
//!
//! - **merge**: OR-reduction of per-meal answer sets into daily sets
//! - **indicators**: the diet-quality scoring rules (NCD-Protect/Risk, GDR,
//!   FGDS, MDD-W, All-5, and the consumption composites)
//! - **targets**: percentage-against-target mapping for pyramid charts
//!
//! Everything here is synchronous, pure, and cheap enough to invoke on every
//! input change; persistence and UI concerns live with the callers.

pub mod indicators;
pub mod merge;
pub mod targets;

pub use indicators::{calculate, score};
pub use merge::{MealRecord, group_by_day, merge_answer_sets};
pub use targets::{TargetRange, percent_of_target};
