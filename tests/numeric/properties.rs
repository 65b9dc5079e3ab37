//! Algebraic properties over generated values

use std::cmp::Ordering;

use crate::common::*;
use num_bigint::BigInt;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn bigint_strategy() -> impl Strategy<Value = BigInt> {
    prop::collection::vec(any::<u32>(), 0..6).prop_flat_map(|digits| {
        any::<bool>().prop_map(move |negative| {
            let magnitude = BigInt::from_slice(num_bigint::Sign::Plus, &digits);
            if negative {
                -magnitude
            } else {
                magnitude
            }
        })
    })
}

/// Identity laws every kind satisfies
fn check_identities<T: Numeric + std::fmt::Debug>(x: T) -> std::result::Result<(), TestCaseError> {
    let zero = polynum::zero::<T>().unwrap();
    let one = polynum::one::<T>().unwrap();
    prop_assert!(polynum::equals(polynum::add(zero.clone(), one.clone()).unwrap(), one).unwrap());
    prop_assert!(polynum::equals(polynum::subtract(x.clone(), x.clone()).unwrap(), zero).unwrap());
    prop_assert_eq!(polynum::compare(x.clone(), x).unwrap(), Ordering::Equal);
    Ok(())
}

proptest! {
    #[test]
    fn identities_hold_for_integers(a in any::<i8>(), b in any::<u64>(), c in any::<i128>()) {
        check_identities(a)?;
        check_identities(b)?;
        check_identities(c)?;
    }

    #[test]
    fn identities_hold_for_finite_floats(x in -1e300f64..1e300, y in -1e30f32..1e30) {
        check_identities(x)?;
        check_identities(y)?;
    }

    #[test]
    fn identities_hold_for_decimal_and_bigint(d in decimal_strategy(), b in bigint_strategy()) {
        check_identities(d)?;
        check_identities(b)?;
    }

    #[test]
    fn identity_conversion_round_trips(a in any::<i32>(), d in decimal_strategy(), b in bigint_strategy()) {
        prop_assert_eq!(polynum::convert::<i32, i32>(a).unwrap(), a);
        prop_assert_eq!(polynum::convert::<Decimal, Decimal>(d).unwrap(), d);
        prop_assert_eq!(polynum::convert::<BigInt, BigInt>(b.clone()).unwrap(), b);
    }

    #[test]
    fn general_format_parses_back(a in any::<i64>(), u in any::<u128>(), b in bigint_strategy()) {
        let text = polynum::to_string(a, None).unwrap();
        prop_assert_eq!(polynum::parse::<i64>(&text, None).unwrap(), a);
        let text = polynum::to_string(u, None).unwrap();
        prop_assert_eq!(polynum::parse::<u128>(&text, None).unwrap(), u);
        let text = polynum::to_string(b.clone(), None).unwrap();
        prop_assert_eq!(polynum::parse::<BigInt>(&text, None).unwrap(), b);
    }

    #[test]
    fn hex_format_parses_back(a in any::<i16>(), b in bigint_strategy()) {
        let hex = Some(NumberStyles::HEX_NUMBER);
        let text = polynum::to_string(a, Some("X")).unwrap();
        prop_assert_eq!(polynum::parse::<i16>(&text, hex).unwrap(), a);
        let text = polynum::to_string(b.clone(), Some("X")).unwrap();
        prop_assert_eq!(polynum::parse::<BigInt>(&text, hex).unwrap(), b);
    }

    #[test]
    fn absent_is_absorbing(x in any::<i32>()) {
        prop_assert_eq!(polynum::add(None, Some(x)).unwrap(), None);
        prop_assert_eq!(polynum::subtract(Some(x), None).unwrap(), None);
        prop_assert!(!polynum::less_than(None, Some(x)).unwrap());
        prop_assert!(!polynum::greater_than(None, Some(x)).unwrap());
        prop_assert_eq!(polynum::compare(None, Some(x)).unwrap(), Ordering::Less);
    }

    #[test]
    fn present_options_match_plain_values(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(
            polynum::add(Some(a), Some(b)).unwrap(),
            Some(polynum::add(a, b).unwrap())
        );
        prop_assert_eq!(
            polynum::compare(Some(a), Some(b)).unwrap(),
            polynum::compare(a, b).unwrap()
        );
    }

    #[test]
    fn clamp_stays_in_bounds(x in any::<i64>(), lo in -1000i64..0, hi in 0i64..1000) {
        let clamped = polynum::clamp(x, lo, hi).unwrap();
        prop_assert!(clamped >= lo && clamped <= hi);
        prop_assert_eq!(clamped, x.clamp(lo, hi));
    }

    #[test]
    fn widening_conversion_never_fails(a in any::<i32>()) {
        prop_assert_eq!(polynum::convert::<i32, i64>(a).unwrap(), i64::from(a));
        prop_assert_eq!(polynum::convert::<i32, f64>(a).unwrap(), f64::from(a));
        prop_assert_eq!(polynum::convert::<i32, BigInt>(a).unwrap(), BigInt::from(a));
    }
}
