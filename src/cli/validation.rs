//! Input validation at the command-line boundary
//!
//! Raw strings from flags or CSV cells are turned into a typed
//! [`PremiumRequest`] here. Problems are accumulated so that every bad field
//! is reported at once.

use crate::error::{InputErrors, InputField, InputProblem, PremiumError};
use crate::premium::{Gender, PremiumRequest};
use serde::{Deserialize, Serialize};
use stillwater::Validation;

/// Default lower age bound when the policy is enforced
pub const DEFAULT_MIN_AGE: u32 = 0;
/// Default upper age bound when the policy is enforced
pub const DEFAULT_MAX_AGE: u32 = 150;

/// Optional range check applied to ages before evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgePolicy {
    pub enforce: bool,
    pub min: u32,
    pub max: u32,
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self {
            enforce: false,
            min: DEFAULT_MIN_AGE,
            max: DEFAULT_MAX_AGE,
        }
    }
}

impl AgePolicy {
    pub fn enforced(min: u32, max: u32) -> Self {
        Self {
            enforce: true,
            min,
            max,
        }
    }

    pub fn check(&self, age: u32, raw: &str) -> Result<u32, PremiumError> {
        if self.enforce && !(self.min..=self.max).contains(&age) {
            return Err(PremiumError::invalid_input(
                InputField::Age,
                raw,
                InputProblem::OutOfBounds {
                    min: self.min,
                    max: self.max,
                },
            ));
        }
        Ok(age)
    }
}

/// Parse an age as a non-negative whole number
pub fn parse_age(raw: &str) -> Result<u32, PremiumError> {
    validate_age_internal(raw).into_result()
}

fn validate_age_internal(raw: &str) -> Validation<u32, PremiumError> {
    match raw.trim().parse::<u32>() {
        Ok(age) => Validation::success(age),
        Err(_) => Validation::failure(PremiumError::invalid_input(
            InputField::Age,
            raw,
            InputProblem::NotAWholeNumber,
        )),
    }
}

/// Parse a coverage amount as a finite, non-negative real number
pub fn parse_coverage(raw: &str) -> Result<f64, PremiumError> {
    validate_coverage_internal(raw).into_result()
}

fn validate_coverage_internal(raw: &str) -> Validation<f64, PremiumError> {
    let invalid = |problem| {
        Validation::failure(PremiumError::invalid_input(
            InputField::Coverage,
            raw,
            problem,
        ))
    };

    match raw.trim().parse::<f64>() {
        Err(_) => invalid(InputProblem::NotANumber),
        Ok(value) if !value.is_finite() => invalid(InputProblem::NotFinite),
        Ok(value) if value < 0.0 => invalid(InputProblem::Negative),
        // -0.0 parses fine and is not negative; normalize it
        Ok(value) => Validation::success(value + 0.0),
    }
}

fn validate_gender_internal(raw: &str) -> Validation<Gender, PremiumError> {
    match raw.parse::<Gender>() {
        Ok(gender) => Validation::success(gender),
        Err(e) => Validation::failure(e),
    }
}

/// Build a request from raw values, collecting every problem found
pub fn parse_request(
    age: &str,
    gender: &str,
    coverage: &str,
    policy: &AgePolicy,
) -> Result<PremiumRequest, InputErrors> {
    validate_request_internal(age, gender, coverage, policy)
        .into_result()
        .map_err(InputErrors)
}

fn validate_request_internal(
    age: &str,
    gender: &str,
    coverage: &str,
    policy: &AgePolicy,
) -> Validation<PremiumRequest, Vec<PremiumError>> {
    let mut errors = Vec::new();

    let age = match validate_age_internal(age) {
        Validation::Success(value) => match policy.check(value, age) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(e);
                None
            }
        },
        Validation::Failure(e) => {
            errors.push(e);
            None
        }
    };

    let gender = match validate_gender_internal(gender) {
        Validation::Success(value) => Some(value),
        Validation::Failure(e) => {
            errors.push(e);
            None
        }
    };

    let coverage = match validate_coverage_internal(coverage) {
        Validation::Success(value) => Some(value),
        Validation::Failure(e) => {
            errors.push(e);
            None
        }
    };

    match (age, gender, coverage) {
        (Some(age), Some(gender), Some(coverage)) if errors.is_empty() => {
            Validation::success(PremiumRequest::new(age, gender, coverage))
        }
        _ => Validation::failure(errors),
    }
}
