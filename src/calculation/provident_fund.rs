//! Provident Fund contribution calculations.
//!
//! Contributions under the Employees' Provident Funds Scheme, 1952 are
//! assessed on Basic Pay capped at the statutory wage ceiling. The employer
//! side splits into EPF and EPS portions; the employee side is a flat 12%
//! subject to the monthly cap.

use rust_decimal::Decimal;

use crate::calculation::round_rupees;
use crate::statutory::{
    EMPLOYEE_PF_CAP, PF_WAGE_CEILING, employee_pf_rate, employer_epf_rate, employer_eps_rate,
};

/// Employer and employee Provident Fund contributions for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PfContribution {
    /// Employer contribution (EPF plus EPS portions).
    pub employer: Decimal,
    /// Employee contribution, capped at [`EMPLOYEE_PF_CAP`].
    pub employee: Decimal,
}

impl PfContribution {
    /// Contribution pair for an employee outside the PF scheme.
    pub fn none() -> Self {
        Self {
            employer: Decimal::ZERO,
            employee: Decimal::ZERO,
        }
    }
}

/// Calculates both sides of the monthly Provident Fund contribution.
///
/// The wage base is Basic Pay capped at [`PF_WAGE_CEILING`]. The employer
/// contribution applies the combined EPF and EPS rates to that base in a
/// single rounded figure. The employee contribution applies the 12% rate,
/// rounds, and then caps at [`EMPLOYEE_PF_CAP`]; at the wage ceiling the
/// rate already produces exactly the cap, so the cap only bites if a rate
/// revision pushes the product above it.
///
/// # Arguments
///
/// * `basic` - Monthly Basic Pay in whole rupees
/// * `pf_enabled` - Whether the employee participates in the PF scheme
///
/// # Returns
///
/// The employer and employee contributions, both zero when `pf_enabled`
/// is false
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use payroll_engine::calculation::calculate_pf;
///
/// let pf = calculate_pf(Decimal::new(10_000, 0), true);
/// assert_eq!(pf.employer, Decimal::new(1_200, 0));
/// assert_eq!(pf.employee, Decimal::new(1_200, 0));
/// ```
pub fn calculate_pf(basic: Decimal, pf_enabled: bool) -> PfContribution {
    if !pf_enabled {
        return PfContribution::none();
    }

    let pf_base = basic.min(PF_WAGE_CEILING);
    let employer = round_rupees(pf_base * (employer_epf_rate() + employer_eps_rate()));
    let employee = round_rupees(pf_base * employee_pf_rate()).min(EMPLOYEE_PF_CAP);

    PfContribution { employer, employee }
}
