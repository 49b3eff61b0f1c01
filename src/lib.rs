//! Poké Planner Library
//!
//! This library provides the core functionality for the Poké Planner,
//! including the creature catalog, the team domain model, and the
//! presentation view models consumed by a rendering front end.

pub mod domain;
pub mod presentation;
