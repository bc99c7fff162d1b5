//! Property tests for premium evaluation
//!
//! These tests use proptest to check the rate table laws over arbitrary
//! ages and coverage amounts.

use premium_calc::premium::{compute_premium, rate_for, AgeBand, Gender, PremiumRequest};
use proptest::prelude::*;

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn expected_rate(age: u32, gender: Gender) -> f64 {
    match (gender, age) {
        (Gender::Male, a) if a < 30 => 0.02,
        (Gender::Male, a) if a < 50 => 0.03,
        (Gender::Male, _) => 0.05,
        (Gender::Female, a) if a < 30 => 0.015,
        (Gender::Female, a) if a < 50 => 0.025,
        (Gender::Female, _) => 0.04,
    }
}

proptest! {
    #[test]
    fn premium_is_exact_product(age in any::<u32>(), g in gender(), coverage in 0.0f64..1e12) {
        let premium = compute_premium(age, g.as_str(), coverage).unwrap();
        prop_assert_eq!(premium, coverage * expected_rate(age, g));
    }

    #[test]
    fn premium_is_monotonic_in_coverage(
        age in 0u32..200,
        g in gender(),
        a in 0.0f64..1e9,
        b in 0.0f64..1e9,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let p_low = PremiumRequest::new(age, g, low).premium();
        let p_high = PremiumRequest::new(age, g, high).premium();
        prop_assert!(p_low <= p_high);
    }

    #[test]
    fn premium_scales_with_coverage(age in 0u32..200, g in gender(), coverage in 0.0f64..1e6, k in 0u32..1000) {
        let k = f64::from(k);
        let base = PremiumRequest::new(age, g, coverage).premium();
        let scaled = PremiumRequest::new(age, g, coverage * k).premium();
        let tolerance = 1e-9 * scaled.abs().max(1.0);
        prop_assert!((scaled - base * k).abs() <= tolerance);
    }

    #[test]
    fn gender_case_does_not_matter(age in 0u32..200, g in gender(), coverage in 0.0f64..1e9) {
        let lower = compute_premium(age, g.as_str(), coverage).unwrap();
        let upper = compute_premium(age, &g.as_str().to_uppercase(), coverage).unwrap();
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn unknown_genders_always_fail(s in "[a-zA-Z]{0,10}", age in 0u32..200) {
        prop_assume!(!s.eq_ignore_ascii_case("male") && !s.eq_ignore_ascii_case("female"));
        prop_assert!(compute_premium(age, &s, 1000.0).is_err());
    }

    #[test]
    fn bands_are_contiguous(age in 0u32..u32::MAX) {
        let band = AgeBand::for_age(age);
        let next = AgeBand::for_age(age + 1);
        // Bands only ever move forward as age increases
        let order = |b: AgeBand| AgeBand::ALL.iter().position(|x| *x == b).unwrap();
        prop_assert!(order(band) <= order(next));
        prop_assert_eq!(rate_for(age, Gender::Male), expected_rate(age, Gender::Male));
    }
}

#[test]
fn boundary_ages_select_different_rates() {
    for g in [Gender::Male, Gender::Female] {
        assert_ne!(rate_for(29, g), rate_for(30, g));
        assert_ne!(rate_for(49, g), rate_for(50, g));
        assert_eq!(rate_for(30, g), rate_for(49, g));
    }
}
