//! Monthly salary breakdown orchestration.
//!
//! This module sequences the component calculations into the full monthly
//! breakdown: CTC apportionment, earning components, Provident Fund, ESI
//! coverage and contributions, the special allowance reconciliation, and
//! the employee-side deductions down to the net salary.

use rust_decimal::Decimal;

use crate::models::{SalaryBreakdown, SalaryInput};
use crate::statutory::monthly_professional_tax;

use super::esi::{employee_esi, employer_esi, esi_applicable};
use super::pay_components::{basic_pay, house_rent_allowance, monthly_ctc};
use super::provident_fund::calculate_pf;

/// Calculates the complete monthly salary breakdown for one employee.
///
/// This function:
/// 1. Spreads the annual CTC across twelve months without rounding
/// 2. Derives Basic Pay and HRA from the configured percentages
/// 3. Assesses both Provident Fund contributions on the capped wage base
/// 4. Decides ESI coverage on Basic Pay plus HRA, before allowances, and
///    holds that decision for the rest of the month
/// 5. Prices the employer ESI contribution on a provisional gross, then
///    recomputes the special allowance once with that contribution funded
/// 6. Applies the employee-side deductions (PF, ESI, Professional Tax) and
///    a zero TDS line to reach the net salary
///
/// The special allowance absorbs whatever the earning components and the
/// employer contributions leave of the monthly CTC, and is floored at zero:
/// a CTC too small to fund the employer contributions on top of Basic Pay
/// and HRA yields a gross above the monthly CTC rather than a negative
/// allowance. Exactly one corrective pass runs after the employer ESI
/// figure is known; the breakdown never iterates to a fixed point.
///
/// Each derived amount is rounded to the nearest whole rupee as it is
/// produced. Sums and remainders of already-rounded amounts are not
/// rounded again, so a fractional monthly CTC surfaces as a fractional
/// special allowance rather than a missing rupee.
///
/// # Arguments
///
/// * `input` - The annual CTC, split percentages, statutory toggles and
///   state of employment
///
/// # Returns
///
/// The itemized [`SalaryBreakdown`]. The calculation is total: every input
/// produces a breakdown, and the same input always produces the same one.
///
/// # Statutory References
///
/// - Employees' Provident Funds Scheme, 1952: 12% employee contribution,
///   3.67% + 8.33% employer split, 15,000 wage ceiling
/// - Employees' State Insurance Act, 1948: 0.75% / 3.25% contributions,
///   21,000 gross wage ceiling
/// - State Professional Tax schedules for Karnataka, Maharashtra and
///   Tamil Nadu
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use payroll_engine::calculation::calculate_salary;
/// use payroll_engine::models::SalaryInput;
///
/// let input = SalaryInput::new(Decimal::new(300_000, 0));
/// let breakdown = calculate_salary(&input);
///
/// assert_eq!(breakdown.basic, Decimal::new(10_000, 0));
/// assert_eq!(breakdown.gross_salary, Decimal::new(23_026, 0));
/// assert_eq!(breakdown.net_salary, Decimal::new(21_453, 0));
/// ```
pub fn calculate_salary(input: &SalaryInput) -> SalaryBreakdown {
    // Step 1: Spread the annual CTC across twelve months, unrounded.
    let monthly_ctc = monthly_ctc(input.annual_ctc);

    // Step 2: Earning components.
    let basic = basic_pay(monthly_ctc, input.basic_percent);
    let hra = house_rent_allowance(basic, input.hra_percent);

    // Step 3: Provident Fund, both sides, on the capped wage base.
    let pf = calculate_pf(basic, input.pf_enabled);

    // Step 4: ESI coverage is decided on Basic + HRA and held for the
    // month, whatever the final gross turns out to be.
    let esi_covered = esi_applicable(basic + hra);

    // Step 5: Provisional special allowance and gross, before the employer
    // ESI contribution is funded. The allowance may be negative here.
    let provisional_special = monthly_ctc - basic - hra - pf.employer;
    let provisional_gross = basic + hra + provisional_special;

    // Step 6: Employer ESI priced on the provisional gross.
    let employer_esi = employer_esi(provisional_gross, esi_covered);

    // Step 7: Final special allowance, floored at zero, and the gross it
    // implies. One corrective pass only; the employer ESI figure keeps its
    // provisional-gross base even when the floor moves the final gross.
    let special_allowance =
        (monthly_ctc - basic - hra - pf.employer - employer_esi).max(Decimal::ZERO);
    let gross_salary = basic + hra + special_allowance;

    // Step 8: Employee-side deductions on the final gross.
    let employee_esi = employee_esi(gross_salary, esi_covered);
    let professional_tax = if input.pt_enabled {
        monthly_professional_tax(input.state, gross_salary)
    } else {
        Decimal::ZERO
    };

    // Income tax withholding is not computed; the line item is carried at
    // zero so the breakdown shape stays stable.
    let tds = Decimal::ZERO;

    let total_deductions = pf.employee + employee_esi + professional_tax + tds;
    let net_salary = gross_salary - total_deductions;

    SalaryBreakdown {
        basic,
        hra,
        special_allowance,
        gross_salary,
        employer_pf: pf.employer,
        employee_pf: pf.employee,
        employer_esi,
        employee_esi,
        professional_tax,
        tds,
        total_deductions,
        net_salary,
        monthly_ctc,
    }
}
