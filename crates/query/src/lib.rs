//! Query primitives for kinship reports
//!
//! Three leaf components shared by the report drivers:
//! - [`interval`]: year-interval lifespan matching (alive-during / died-in-or-after)
//! - [`surname`]: surname resolution over the partner graph with first-class
//!   match attribution
//! - [`marriage`]: derived descriptive keys and display ordering for unions
//!
//! All of them are pure over the read-only record set: no mutation, no I/O,
//! diagnostics via `tracing` only.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod interval;
pub mod marriage;
pub mod surname;

pub use interval::{LifespanFilter, MatchMode, YearInterval};
pub use marriage::{compare_keys, marriage_key, sorted_families};
pub use surname::{MatchAttribution, SurnameResolver, PARTNER_DEPTH};
