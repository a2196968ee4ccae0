//! Salary Breakdown Engine for Indian Statutory Payroll
//!
//! This crate converts an annual cost-to-company (CTC) figure into an itemized
//! monthly salary breakdown, applying Provident Fund (EPF Scheme, 1952),
//! Employee State Insurance (ESI Act, 1948) and state Professional Tax rules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod statutory;
