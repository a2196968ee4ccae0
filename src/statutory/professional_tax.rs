//! Professional Tax slab tables and lookup.
//!
//! Professional Tax is a state levy on monthly gross salary, charged as a
//! flat amount per slab under each state's Tax on Professions Act. The
//! tables here cover the jurisdictions in [`State`]; unknown state names
//! already degraded to Karnataka at the parsing boundary, so lookup is
//! total.

use rust_decimal::Decimal;

use crate::models::State;

/// A single Professional Tax slab band.
///
/// A band charges a flat monthly `tax` on any gross salary strictly greater
/// than `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PtBand {
    /// Monthly gross salary above which this band applies (exclusive).
    pub threshold: Decimal,
    /// Flat monthly tax amount for this band.
    pub tax: Decimal,
}

const fn band(threshold: u32, tax: u32) -> PtBand {
    PtBand {
        threshold: Decimal::from_parts(threshold, 0, 0, false, 0),
        tax: Decimal::from_parts(tax, 0, 0, false, 0),
    }
}

// Slabs are ordered highest threshold first so lookup can take the first
// band the gross exceeds.
const KARNATAKA_SLAB: &[PtBand] = &[band(15_000, 200)];
const MAHARASHTRA_SLAB: &[PtBand] = &[band(10_000, 200), band(7_500, 175)];
const TAMIL_NADU_SLAB: &[PtBand] = &[band(21_000, 208), band(15_000, 180), band(12_500, 115)];
const NO_TAX_SLAB: &[PtBand] = &[];

/// Returns the Professional Tax slab for a state, ordered highest threshold
/// first.
///
/// Gujarat and Delhi carry empty slabs: no gross salary attracts the tax
/// there.
pub fn pt_bands(state: State) -> &'static [PtBand] {
    match state {
        State::Karnataka => KARNATAKA_SLAB,
        State::Maharashtra => MAHARASHTRA_SLAB,
        State::TamilNadu => TAMIL_NADU_SLAB,
        State::Gujarat | State::Delhi => NO_TAX_SLAB,
    }
}

/// Looks up the monthly Professional Tax for a gross salary in a state.
///
/// Bands are evaluated from the highest threshold downward and the first
/// band whose threshold the gross strictly exceeds determines the tax. A
/// gross at or below every threshold pays nothing, so the slab boundaries
/// themselves are tax-free.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::State;
/// use payroll_engine::statutory::monthly_professional_tax;
/// use rust_decimal::Decimal;
///
/// let tax = monthly_professional_tax(State::Karnataka, Decimal::new(23_026, 0));
/// assert_eq!(tax, Decimal::new(200, 0));
///
/// let tax = monthly_professional_tax(State::Karnataka, Decimal::new(15_000, 0));
/// assert_eq!(tax, Decimal::ZERO);
/// ```
pub fn monthly_professional_tax(state: State, gross_salary: Decimal) -> Decimal {
    pt_bands(state)
        .iter()
        .find(|band| gross_salary > band.threshold)
        .map(|band| band.tax)
        .unwrap_or(Decimal::ZERO)
}
