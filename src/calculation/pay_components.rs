//! Monthly CTC apportionment and earning components.
//!
//! The annual cost-to-company figure is spread evenly across twelve months
//! and then split into Basic Pay and House Rent Allowance. Whatever the two
//! components (and the statutory employer contributions) do not consume is
//! later absorbed by the special allowance, so the monthly CTC itself is
//! never rounded here.

use rust_decimal::Decimal;

use crate::calculation::round_rupees;

/// Months in a payroll year.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Converts an annual CTC into its monthly equivalent.
///
/// The division is exact and deliberately left unrounded. Annual figures
/// that do not divide evenly by twelve produce a fractional monthly CTC,
/// and that fraction must survive into the special allowance computation
/// so the components still account for the full CTC.
///
/// # Arguments
///
/// * `annual_ctc` - Annual cost to company in rupees
///
/// # Returns
///
/// The monthly CTC, potentially with a fractional rupee component
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use payroll_engine::calculation::monthly_ctc;
///
/// let monthly = monthly_ctc(Decimal::new(300_000, 0));
/// assert_eq!(monthly, Decimal::new(25_000, 0));
/// ```
pub fn monthly_ctc(annual_ctc: Decimal) -> Decimal {
    annual_ctc / MONTHS_PER_YEAR
}

/// Calculates Basic Pay as a percentage of the monthly CTC.
///
/// Basic Pay anchors the rest of the breakdown: HRA is derived from it and
/// the Provident Fund wage base is capped against it. The result is rounded
/// to the nearest whole rupee, half away from zero.
///
/// # Arguments
///
/// * `monthly_ctc` - Monthly cost to company
/// * `basic_percent` - Basic Pay share of monthly CTC, e.g. `40` for 40%
///
/// # Returns
///
/// Basic Pay rounded to the nearest whole rupee
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use payroll_engine::calculation::basic_pay;
///
/// let basic = basic_pay(Decimal::new(25_000, 0), Decimal::new(40, 0));
/// assert_eq!(basic, Decimal::new(10_000, 0));
/// ```
pub fn basic_pay(monthly_ctc: Decimal, basic_percent: Decimal) -> Decimal {
    round_rupees(monthly_ctc * basic_percent / Decimal::ONE_HUNDRED)
}

/// Calculates House Rent Allowance as a percentage of Basic Pay.
///
/// HRA is derived from the already-rounded Basic Pay, not from the monthly
/// CTC, and is itself rounded to the nearest whole rupee.
///
/// # Arguments
///
/// * `basic` - Basic Pay in whole rupees
/// * `hra_percent` - HRA share of Basic Pay, e.g. `50` for 50%
///
/// # Returns
///
/// House Rent Allowance rounded to the nearest whole rupee
pub fn house_rent_allowance(basic: Decimal, hra_percent: Decimal) -> Decimal {
    round_rupees(basic * hra_percent / Decimal::ONE_HUNDRED)
}
