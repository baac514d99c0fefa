//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the metadata/sink ports to
//! implement the summary pipeline:
//!
//! - [`summary`]: Accumulate loot events, then emit one packed summary
//! - [`controls`]: Declarative option-control descriptors for settings UIs
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod controls;
pub mod summary;

pub use controls::{control_descriptors, ControlDescriptor, ControlKind};
pub use summary::SummaryEngine;
