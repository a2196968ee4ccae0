//! Statutory contribution rules for Indian payroll.
//!
//! This module carries the nationwide Provident Fund and Employee State
//! Insurance parameters and the per-state Professional Tax slab tables.
//! The figures are fixed in code; a rate or threshold revision lands as a
//! code change together with its tests.

mod contributions;
mod professional_tax;

pub use contributions::{
    EMPLOYEE_PF_CAP, ESI_GROSS_CEILING, PF_WAGE_CEILING, employee_esi_rate, employee_pf_rate,
    employer_epf_rate, employer_eps_rate, employer_esi_rate,
};
pub use professional_tax::{PtBand, monthly_professional_tax, pt_bands};
