//! Fixed premium rate table
//!
//! Rates are fractional multipliers applied to the coverage amount. The table
//! is selected by gender and then by age band.

use super::{AgeBand, Gender};
use serde::Serialize;

/// Rate row for a single gender, one entry per [`AgeBand`] in band order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateRow {
    pub gender: Gender,
    pub under_30: f64,
    pub from_30_to_49: f64,
    pub fifty_and_over: f64,
}

impl RateRow {
    /// Rate for the given band within this row
    pub fn rate(&self, band: AgeBand) -> f64 {
        match band {
            AgeBand::Under30 => self.under_30,
            AgeBand::From30To49 => self.from_30_to_49,
            AgeBand::FiftyAndOver => self.fifty_and_over,
        }
    }
}

/// The complete rate table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    male: RateRow,
    female: RateRow,
}

/// The only rate table in use.
pub const RATE_TABLE: RateTable = RateTable {
    male: RateRow {
        gender: Gender::Male,
        under_30: 0.02,
        from_30_to_49: 0.03,
        fifty_and_over: 0.05,
    },
    female: RateRow {
        gender: Gender::Female,
        under_30: 0.015,
        from_30_to_49: 0.025,
        fifty_and_over: 0.04,
    },
};

impl RateTable {
    /// Select the row for a gender
    pub fn row(&self, gender: Gender) -> &RateRow {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Look up the rate for a gender and age band
    pub fn rate(&self, gender: Gender, band: AgeBand) -> f64 {
        self.row(gender).rate(band)
    }

    /// All rows, male first, for display
    pub fn schedule(&self) -> [RateRow; 2] {
        [self.male, self.female]
    }
}
