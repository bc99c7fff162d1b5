//! Premium evaluation
//!
//! Maps an applicant's age, gender, and coverage amount to an annual premium
//! using the fixed tiered [`RATE_TABLE`]. Everything here is pure: no I/O, no
//! logging, no shared state. Rounding and display are left to callers.
//!
//! ```
//! use premium_calc::premium::compute_premium;
//!
//! let premium = compute_premium(25, "Male", 100_000.0).unwrap();
//! assert_eq!(format!("{premium:.2}"), "2000.00");
//! ```

pub mod rates;

pub use rates::{RateRow, RateTable, RATE_TABLE};

use crate::error::PremiumError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Applicant gender as recognized by the rate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = PremiumError;

    /// Case-insensitive; surrounding whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(PremiumError::InvalidGender(s.to_string())),
        }
    }
}

/// Age tier used to pick a rate within a gender's row.
///
/// Bands are half-open: `[0, 30)`, `[30, 50)`, `[50, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    Under30,
    From30To49,
    FiftyAndOver,
}

impl AgeBand {
    pub const ALL: [AgeBand; 3] = [AgeBand::Under30, AgeBand::From30To49, AgeBand::FiftyAndOver];

    pub fn for_age(age: u32) -> Self {
        match age {
            0..=29 => AgeBand::Under30,
            30..=49 => AgeBand::From30To49,
            _ => AgeBand::FiftyAndOver,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Under30 => "Age < 30",
            AgeBand::From30To49 => "30 <= Age < 50",
            AgeBand::FiftyAndOver => "Age >= 50",
        }
    }
}

/// A fully typed premium request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PremiumRequest {
    pub age: u32,
    pub gender: Gender,
    pub coverage: f64,
}

/// Everything known about one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub age: u32,
    pub gender: Gender,
    pub band: AgeBand,
    pub rate: f64,
    pub coverage: f64,
    pub premium: f64,
}

impl PremiumRequest {
    pub fn new(age: u32, gender: Gender, coverage: f64) -> Self {
        Self {
            age,
            gender,
            coverage,
        }
    }

    pub fn band(&self) -> AgeBand {
        AgeBand::for_age(self.age)
    }

    pub fn rate(&self) -> f64 {
        rate_for(self.age, self.gender)
    }

    /// Unrounded annual premium: `coverage * rate`
    pub fn premium(&self) -> f64 {
        self.coverage * self.rate()
    }

    pub fn quote(&self) -> Quote {
        let band = self.band();
        let rate = RATE_TABLE.rate(self.gender, band);
        Quote {
            age: self.age,
            gender: self.gender,
            band,
            rate,
            coverage: self.coverage,
            premium: self.coverage * rate,
        }
    }
}

/// Rate multiplier for an age and gender
pub fn rate_for(age: u32, gender: Gender) -> f64 {
    RATE_TABLE.rate(gender, AgeBand::for_age(age))
}

/// Compute the annual premium for an applicant.
///
/// `gender` is matched case-insensitively against `"male"` and `"female"`;
/// anything else fails with [`PremiumError::InvalidGender`]. The product is
/// returned unrounded.
pub fn compute_premium(age: u32, gender: &str, coverage: f64) -> Result<f64, PremiumError> {
    let gender: Gender = gender.parse()?;
    Ok(PremiumRequest::new(age, gender, coverage).premium())
}
