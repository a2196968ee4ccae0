//! Request types for the Salary Breakdown Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{SalaryInput, State, default_basic_percent, default_hra_percent};

/// Request body for the `/calculate` endpoint.
///
/// Only the annual CTC is required. The split percentages default to the
/// conventional 40% Basic / 50%-of-Basic HRA structure, both statutory
/// deductions default to enabled, and the state defaults to Karnataka.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Annual cost to company in rupees.
    pub annual_ctc: Decimal,
    /// Basic Pay as a percentage of monthly CTC.
    #[serde(default = "default_basic_percent")]
    pub basic_percent: Decimal,
    /// HRA as a percentage of Basic Pay.
    #[serde(default = "default_hra_percent")]
    pub hra_percent: Decimal,
    /// Whether the employee participates in the Provident Fund scheme.
    #[serde(default = "default_true")]
    pub pf_enabled: bool,
    /// Whether state Professional Tax is deducted.
    #[serde(default = "default_true")]
    pub pt_enabled: bool,
    /// The state of employment, accepted leniently (e.g. "Tamil Nadu").
    #[serde(default)]
    pub state: State,
}

fn default_true() -> bool {
    true
}

impl From<CalculationRequest> for SalaryInput {
    fn from(req: CalculationRequest) -> Self {
        SalaryInput {
            annual_ctc: req.annual_ctc,
            basic_percent: req.basic_percent,
            hra_percent: req.hra_percent,
            pf_enabled: req.pf_enabled,
            pt_enabled: req.pt_enabled,
            state: req.state,
        }
    }
}
