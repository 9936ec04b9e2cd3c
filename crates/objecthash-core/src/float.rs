//! Canonical binary form of finite doubles.
//!
//! The form is `<sign><exponent>:<mantissa bits>`, built only by doubling,
//! halving and subtracting one. Each of those steps is exact in IEEE-754, so
//! every platform produces the same string for the same double without any
//! decimal rounding.

use crate::error::{HashError, HashResult};

/// Upper bound on emitted mantissa bits. A finite double terminates after at
/// most 1075 halvings of its lowest set bit, but after exponent normalization
/// no more than 53 bits are ever needed.
pub const MAX_MANTISSA_BITS: usize = 1000;

/// Canonical form of zero, regardless of sign.
pub const ZERO_FORM: &str = "+0:";

/// Compute the canonical string for a finite double.
///
/// ```
/// use objecthash_core::float::canonicalize;
///
/// assert_eq!(canonicalize(1.0).unwrap(), "+0:1");
/// assert_eq!(canonicalize(1000.0).unwrap(), "+10:01111101");
/// ```
pub fn canonicalize(value: f64) -> HashResult<String> {
    if !value.is_finite() {
        return Err(HashError::UnsupportedNumber(value));
    }
    if value == 0.0 {
        return Ok(ZERO_FORM.to_owned());
    }

    let mut out = String::with_capacity(64);
    let mut f = value;
    if f < 0.0 {
        out.push('-');
        f = -f;
    } else {
        out.push('+');
    }

    let mut exponent: i32 = 0;
    while f > 1.0 {
        f /= 2.0;
        exponent += 1;
    }
    while f <= 0.5 {
        f *= 2.0;
        exponent -= 1;
    }
    if !(f > 0.5 && f <= 1.0) {
        return Err(HashError::MantissaRange(f));
    }
    out.push_str(&exponent.to_string());
    out.push(':');

    let mut bits = 0usize;
    while f != 0.0 {
        if bits == MAX_MANTISSA_BITS {
            return Err(HashError::MantissaOverflow {
                bits: MAX_MANTISSA_BITS,
            });
        }
        if f >= 1.0 {
            out.push('1');
            f -= 1.0;
        } else {
            out.push('0');
        }
        bits += 1;
        f *= 2.0;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Rebuild the double described by a canonical form.
    fn decode(form: &str) -> f64 {
        let (sign, rest) = form.split_at(1);
        let (exp, mantissa) = rest.split_once(':').unwrap();
        let exp: i32 = exp.parse().unwrap();
        let mut value = 0.0f64;
        for (i, bit) in mantissa.chars().enumerate() {
            if bit == '1' {
                value += 2f64.powi(exp - i as i32);
            }
        }
        if sign == "-" {
            -value
        } else {
            value
        }
    }

    #[test]
    fn reference_forms() {
        let cases = [
            (1.0, "+0:1"),
            (1.5, "+1:011"),
            (2.0, "+1:1"),
            (1000.0, "+10:01111101"),
            (0.0001, "+-13:011010001101101110001011101011000111000100001100101101"),
            (-23.1234, "-5:010111000111111001011100100100011101000101001110001111"),
        ];
        for (value, expected) in cases {
            assert_eq!(canonicalize(value).unwrap(), expected, "value {value}");
        }
    }

    #[test]
    fn zero_ignores_sign() {
        assert_eq!(canonicalize(0.0).unwrap(), "+0:");
        assert_eq!(canonicalize(-0.0).unwrap(), "+0:");
    }

    #[test]
    fn powers_of_two_below_one_normalize_to_a_single_bit() {
        assert_eq!(canonicalize(0.5).unwrap(), "+-1:1");
        assert_eq!(canonicalize(0.25).unwrap(), "+-2:1");
        assert_eq!(canonicalize(-0.125).unwrap(), "--3:1");
    }

    #[test]
    fn negative_mirrors_positive() {
        let pos = canonicalize(3.75).unwrap();
        let neg = canonicalize(-3.75).unwrap();
        assert_eq!(&neg[1..], &pos[1..]);
        assert!(neg.starts_with('-'));
    }

    #[test]
    fn extremes_are_finite() {
        let max = canonicalize(f64::MAX).unwrap();
        assert!(max.starts_with("+1024:"));
        let tiny = canonicalize(f64::from_bits(1)).unwrap();
        assert_eq!(tiny, "+-1074:1");
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(matches!(canonicalize(f64::NAN), Err(HashError::UnsupportedNumber(_))));
        assert_eq!(
            canonicalize(f64::INFINITY),
            Err(HashError::UnsupportedNumber(f64::INFINITY))
        );
        assert_eq!(
            canonicalize(f64::NEG_INFINITY),
            Err(HashError::UnsupportedNumber(f64::NEG_INFINITY))
        );
    }

    proptest! {
        #[test]
        fn prop_form_decodes_to_input(value in -1e100f64..1e100f64) {
            let form = canonicalize(value).unwrap();
            prop_assert_eq!(decode(&form), value);
        }

        #[test]
        fn prop_mantissa_fits_in_a_double(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
            let form = canonicalize(value).unwrap();
            let mantissa = form.split_once(':').unwrap().1;
            prop_assert!(mantissa.len() <= 54);
        }
    }
}
