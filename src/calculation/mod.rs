//! Calculation logic for the Salary Breakdown Engine.
//!
//! This module contains all the calculation functions for deriving a
//! monthly salary breakdown, including whole-rupee rounding, the monthly
//! CTC / Basic / HRA derivations, Provident Fund contributions, ESI
//! eligibility and contributions, and the orchestration that resolves the
//! special allowance and produces the final breakdown.

mod esi;
mod pay_components;
mod provident_fund;
mod rounding;
mod salary;

pub use esi::{employee_esi, employer_esi, esi_applicable};
pub use pay_components::{basic_pay, house_rent_allowance, monthly_ctc};
pub use provident_fund::{PfContribution, calculate_pf};
pub use rounding::round_rupees;
pub use salary::calculate_salary;
