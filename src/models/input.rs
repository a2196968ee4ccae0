//! Salary input model and the state jurisdiction enum.
//!
//! This module defines the [`SalaryInput`] struct describing an employee's
//! pay structure and the [`State`] enum selecting the Professional Tax
//! jurisdiction.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The conventional share of monthly CTC allocated to Basic pay, in percent.
///
/// Used when a pay structure does not specify its own split.
pub fn default_basic_percent() -> Decimal {
    Decimal::new(40, 0)
}

/// The conventional share of Basic pay allocated to HRA, in percent.
///
/// Used when a pay structure does not specify its own split.
pub fn default_hra_percent() -> Decimal {
    Decimal::new(50, 0)
}

/// The state whose Professional Tax slab applies to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    /// Karnataka, the default jurisdiction.
    #[default]
    Karnataka,
    /// Maharashtra.
    Maharashtra,
    /// Tamil Nadu.
    TamilNadu,
    /// Gujarat (levies no Professional Tax in this engine's tables).
    Gujarat,
    /// Delhi (levies no Professional Tax in this engine's tables).
    Delhi,
}

impl State {
    /// Resolves a state name leniently.
    ///
    /// Case, whitespace and punctuation are ignored, so `"tamil_nadu"`,
    /// `"Tamil Nadu"` and `"TAMILNADU"` all resolve to [`State::TamilNadu`].
    /// Unrecognized names fall back to [`State::Karnataka`] so that an
    /// unknown jurisdiction degrades to the default slab instead of failing
    /// the whole calculation.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::State;
    ///
    /// assert_eq!(State::from_name("Tamil Nadu"), State::TamilNadu);
    /// assert_eq!(State::from_name("maharashtra"), State::Maharashtra);
    /// assert_eq!(State::from_name("atlantis"), State::Karnataka);
    /// ```
    pub fn from_name(name: &str) -> State {
        let normalized: String = name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "karnataka" => State::Karnataka,
            "maharashtra" => State::Maharashtra,
            "tamilnadu" => State::TamilNadu,
            "gujarat" => State::Gujarat,
            "delhi" => State::Delhi,
            _ => State::Karnataka,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Karnataka => "Karnataka",
            State::Maharashtra => "Maharashtra",
            State::TamilNadu => "Tamil Nadu",
            State::Gujarat => "Gujarat",
            State::Delhi => "Delhi",
        };
        write!(f, "{}", name)
    }
}

impl<'de> Deserialize<'de> for State {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(State::from_name(&name))
    }
}

/// An employee's pay structure: the annual CTC and the rules that shape
/// its monthly breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Annual cost to company in rupees.
    pub annual_ctc: Decimal,
    /// Percentage of monthly CTC allocated to Basic pay.
    pub basic_percent: Decimal,
    /// Percentage of Basic pay allocated to HRA.
    pub hra_percent: Decimal,
    /// Whether Provident Fund contributions apply to this employee.
    pub pf_enabled: bool,
    /// Whether Professional Tax applies to this employee.
    pub pt_enabled: bool,
    /// The state whose Professional Tax slab applies.
    pub state: State,
}

impl SalaryInput {
    /// Creates an input with the conventional pay structure: 40% Basic,
    /// 50% HRA, PF and PT applied, Karnataka.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{SalaryInput, State};
    /// use rust_decimal::Decimal;
    ///
    /// let input = SalaryInput::new(Decimal::new(300_000, 0));
    /// assert_eq!(input.basic_percent, Decimal::new(40, 0));
    /// assert_eq!(input.hra_percent, Decimal::new(50, 0));
    /// assert!(input.pf_enabled);
    /// assert!(input.pt_enabled);
    /// assert_eq!(input.state, State::Karnataka);
    /// ```
    pub fn new(annual_ctc: Decimal) -> Self {
        SalaryInput {
            annual_ctc,
            basic_percent: default_basic_percent(),
            hra_percent: default_hra_percent(),
            pf_enabled: true,
            pt_enabled: true,
            state: State::default(),
        }
    }

    /// Checks that the pay structure is usable before calculation.
    ///
    /// The calculation itself is total and accepts any numbers; this check
    /// is applied at the API boundary so that callers get an explicit
    /// rejection instead of a mathematically consistent but meaningless
    /// breakdown.
    ///
    /// # Returns
    ///
    /// `Ok(())` for a usable structure, or:
    /// - [`EngineError::InvalidCtc`] when the annual CTC is zero or negative
    /// - [`EngineError::InvalidPercent`] when a split percentage falls
    ///   outside 0-100
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::SalaryInput;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(SalaryInput::new(Decimal::new(300_000, 0)).validate().is_ok());
    /// assert!(SalaryInput::new(Decimal::ZERO).validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.annual_ctc <= Decimal::ZERO {
            return Err(EngineError::InvalidCtc {
                value: self.annual_ctc,
                message: "annual CTC must be greater than zero".to_string(),
            });
        }
        if self.basic_percent < Decimal::ZERO || self.basic_percent > Decimal::ONE_HUNDRED {
            return Err(EngineError::InvalidPercent {
                field: "basic_percent".to_string(),
                value: self.basic_percent,
            });
        }
        if self.hra_percent < Decimal::ZERO || self.hra_percent > Decimal::ONE_HUNDRED {
            return Err(EngineError::InvalidPercent {
                field: "hra_percent".to_string(),
                value: self.hra_percent,
            });
        }
        Ok(())
    }
}
