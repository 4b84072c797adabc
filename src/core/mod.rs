//! Core domain logic for passcheck
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Rule, ValidationResult)
//! - `services/` - The validator itself

pub mod models;
pub mod services;
