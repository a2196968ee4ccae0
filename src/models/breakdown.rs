//! Salary breakdown model for the Salary Breakdown Engine.
//!
//! This module contains the [`SalaryBreakdown`] type that captures every
//! line item of a monthly salary calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete monthly breakdown of an annual CTC.
///
/// This is a pure value object. It carries no identifiers and no timestamps,
/// so two calculations over the same input serialize to byte-identical JSON
/// and downstream systems can store or diff the payload directly.
///
/// Invariants that hold for every breakdown the engine produces:
///
/// - `gross_salary == basic + hra + special_allowance`
/// - `total_deductions == employee_pf + employee_esi + professional_tax + tds`
/// - `net_salary == gross_salary - total_deductions`
/// - `special_allowance >= 0`
///
/// # Example
///
/// The breakdown of a ₹300,000 annual CTC with the conventional structure:
///
/// ```
/// use payroll_engine::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// fn dec(s: &str) -> Decimal {
///     Decimal::from_str(s).unwrap()
/// }
///
/// let breakdown = SalaryBreakdown {
///     basic: dec("10000"),
///     hra: dec("5000"),
///     special_allowance: dec("8026"),
///     gross_salary: dec("23026"),
///     employer_pf: dec("1200"),
///     employee_pf: dec("1200"),
///     employer_esi: dec("774"),
///     employee_esi: dec("173"),
///     professional_tax: dec("200"),
///     tds: dec("0"),
///     total_deductions: dec("1573"),
///     net_salary: dec("21453"),
///     monthly_ctc: dec("25000"),
/// };
///
/// assert_eq!(
///     breakdown.gross_salary,
///     breakdown.basic + breakdown.hra + breakdown.special_allowance
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Basic pay, the anchor component all statutory rules key off.
    pub basic: Decimal,
    /// House Rent Allowance.
    pub hra: Decimal,
    /// Special allowance absorbing whatever monthly CTC remains after the
    /// fixed components and employer-side contributions. Never negative.
    pub special_allowance: Decimal,
    /// Monthly gross salary: Basic + HRA + special allowance.
    pub gross_salary: Decimal,
    /// Employer Provident Fund contribution (EPF + EPS) for the month.
    pub employer_pf: Decimal,
    /// Employee Provident Fund contribution for the month, capped at ₹1,800.
    pub employee_pf: Decimal,
    /// Employer ESI contribution for the month; zero when not eligible.
    pub employer_esi: Decimal,
    /// Employee ESI contribution for the month; zero when not eligible.
    pub employee_esi: Decimal,
    /// Monthly Professional Tax for the selected state.
    pub professional_tax: Decimal,
    /// Tax deducted at source. Always zero; the line item exists so the
    /// schema stays stable for consumers that expect it.
    pub tds: Decimal,
    /// Sum of all employee-side deductions.
    pub total_deductions: Decimal,
    /// Monthly take-home: gross salary minus total deductions.
    pub net_salary: Decimal,
    /// One twelfth of the annual CTC, unrounded.
    pub monthly_ctc: Decimal,
}
