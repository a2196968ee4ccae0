//! Nationwide Provident Fund and ESI parameters.
//!
//! Rates and ceilings for the Employees' Provident Funds Scheme, 1952 and
//! the Employees' State Insurance Act, 1948 as they apply to monthly
//! payroll. Amounts are rupees; rates are fractions (0.12 is 12%).

use rust_decimal::Decimal;

/// The wage ceiling for Provident Fund contributions.
///
/// Contributions are computed on Basic pay up to ₹15,000 per month; Basic
/// above the ceiling attracts no further PF.
pub const PF_WAGE_CEILING: Decimal = Decimal::from_parts(15_000, 0, 0, false, 0);

/// The absolute monthly cap on the employee's PF contribution.
///
/// 12% of the ₹15,000 wage ceiling.
pub const EMPLOYEE_PF_CAP: Decimal = Decimal::from_parts(1_800, 0, 0, false, 0);

/// The monthly gross salary ceiling for ESI coverage.
///
/// Employees whose gross is at or below ₹21,000 are covered; the boundary
/// itself is covered.
pub const ESI_GROSS_CEILING: Decimal = Decimal::from_parts(21_000, 0, 0, false, 0);

/// Returns the employee's PF contribution rate (12% of the PF base).
pub fn employee_pf_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// Returns the employer's EPF contribution rate (3.67% of the PF base).
///
/// Together with [`employer_eps_rate`] the employer side matches the
/// employee's 12%.
pub fn employer_epf_rate() -> Decimal {
    Decimal::new(367, 4)
}

/// Returns the employer's EPS (pension) contribution rate (8.33% of the
/// PF base).
pub fn employer_eps_rate() -> Decimal {
    Decimal::new(833, 4)
}

/// Returns the employee's ESI contribution rate (0.75% of gross salary).
pub fn employee_esi_rate() -> Decimal {
    Decimal::new(75, 4)
}

/// Returns the employer's ESI contribution rate (3.25% of gross salary).
pub fn employer_esi_rate() -> Decimal {
    Decimal::new(325, 4)
}
