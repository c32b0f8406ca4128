//! Data types for the Career Compass server
//!
//! This module contains the core data structures shared across the application.

mod domain;
mod result;

pub use domain::Domain;
pub use result::{Classification, MatchResult, MAX_SUGGESTIONS};
