//! Employee State Insurance contribution calculations.
//!
//! ESI coverage under the Employee State Insurance Act, 1948 is decided
//! against the gross wage ceiling once per month, before employer
//! contributions reshape the gross. Both contributions are then assessed on
//! whichever gross figure the caller supplies, so the coverage decision and
//! the contribution base are deliberately decoupled here.

use rust_decimal::Decimal;

use crate::calculation::round_rupees;
use crate::statutory::{ESI_GROSS_CEILING, employee_esi_rate, employer_esi_rate};

/// Decides ESI coverage from the preliminary gross wage.
///
/// Coverage applies when the wage is at or below [`ESI_GROSS_CEILING`];
/// the ceiling itself is covered. The decision is made on Basic Pay plus
/// HRA before allowances, and once made it holds for the month even if
/// the final gross lands above the ceiling.
///
/// # Arguments
///
/// * `preliminary_gross` - Basic Pay plus HRA, before allowances
///
/// # Returns
///
/// `true` when the employee is covered by ESI for the month
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use payroll_engine::calculation::esi_applicable;
///
/// assert!(esi_applicable(Decimal::new(21_000, 0)));
/// assert!(!esi_applicable(Decimal::new(21_001, 0)));
/// ```
pub fn esi_applicable(preliminary_gross: Decimal) -> bool {
    preliminary_gross <= ESI_GROSS_CEILING
}

/// Calculates the employer ESI contribution on a gross salary.
///
/// Returns zero when the employee is not covered; otherwise applies the
/// 3.25% employer rate and rounds to the nearest whole rupee.
pub fn employer_esi(gross_salary: Decimal, applicable: bool) -> Decimal {
    if !applicable {
        return Decimal::ZERO;
    }
    round_rupees(gross_salary * employer_esi_rate())
}

/// Calculates the employee ESI contribution on a gross salary.
///
/// Returns zero when the employee is not covered; otherwise applies the
/// 0.75% employee rate and rounds to the nearest whole rupee.
pub fn employee_esi(gross_salary: Decimal, applicable: bool) -> Decimal {
    if !applicable {
        return Decimal::ZERO;
    }
    round_rupees(gross_salary * employee_esi_rate())
}
