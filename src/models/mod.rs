//! Core data models for the Salary Breakdown Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod input;

pub use breakdown::SalaryBreakdown;
pub use input::{default_basic_percent, default_hra_percent, SalaryInput, State};
