// elmath - elmath
// Module: Power
//
// Copyright (c) 2025 The elmath Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! `base^exponent` with the C library special-value table.
//!
//! Both operands are first tagged ([`Base`], [`Exponent`]); the result is
//! then decided by an ordered table of match arms, first match wins. Only
//! when no special row applies does the value get computed: binary
//! exponentiation for integral exponents, `exp(exponent * log(base))`
//! otherwise.
//!
//! The zero-base rows sit at the top because the later magnitude tests
//! (`|base| < 1`) cannot tell the sign of a zero or the parity of the
//! exponent apart.

use elmath_error::{codes, kinds};

use crate::{
    classify::{signed_infinity, signed_zero},
    consts::{EPS, TWO53},
    exp_log::{exp, log},
    outcome::Outcome,
    rounding::{fabs, floor},
    traits::ApproxEq,
};

/// Tag of the base operand.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Base {
    Nan,
    Infinite { negative: bool },
    /// Zero, or within `EPS` of it.
    Zero { negative: bool },
    Finite(f64),
}

impl Base {
    fn of(x: f64) -> Self {
        if x.is_nan() {
            Self::Nan
        } else if x.is_infinite() {
            Self::Infinite {
                negative: x < 0.0,
            }
        } else if fabs(x) < EPS {
            Self::Zero {
                negative: x.is_sign_negative(),
            }
        } else {
            Self::Finite(x)
        }
    }
}

/// Integer-ness of a finite exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parity {
    Even,
    Odd,
    Fractional,
}

/// Tag of the exponent operand.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Exponent {
    Nan,
    Infinite { negative: bool },
    /// Zero, or within `EPS` of it.
    Zero,
    Finite { value: f64, parity: Parity },
}

impl Exponent {
    fn of(y: f64) -> Self {
        if y.is_nan() {
            return Self::Nan;
        }
        if y.is_infinite() {
            return Self::Infinite {
                negative: y < 0.0,
            };
        }
        if y.approx_zero() {
            return Self::Zero;
        }

        // One-sided: 3.0000001 counts as 3, 2.9999999 is fractional
        let whole = floor(y);
        let parity = if y - whole > EPS {
            Parity::Fractional
        } else if fabs(whole) >= TWO53 || (whole as i64) % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        };
        Self::Finite { value: y, parity }
    }

    fn is_negative(self) -> bool {
        match self {
            Self::Infinite { negative } => negative,
            Self::Finite { value, .. } => value < 0.0,
            Self::Nan | Self::Zero => false,
        }
    }

    fn is_positive(self) -> bool {
        match self {
            Self::Infinite { negative } => !negative,
            Self::Finite { value, .. } => value > 0.0,
            Self::Nan | Self::Zero => false,
        }
    }

    fn is_odd(self) -> bool {
        matches!(
            self,
            Self::Finite {
                parity: Parity::Odd,
                ..
            }
        )
    }

    fn is_finite(self) -> bool {
        matches!(self, Self::Finite { .. })
    }
}

/// `base^exponent`; see [`pow_checked`].
#[must_use]
pub fn pow(base: f64, exponent: f64) -> f64 {
    pow_checked(base, exponent).value()
}

/// `base^exponent` with its error side channel.
///
/// Rows, in the order they are tried:
///
/// | base | exponent | result |
/// |---|---|---|
/// | ±0 | negative odd integer | ±inf (pole error) |
/// | ±0 | negative otherwise | +inf (pole error when finite) |
/// | ±0 | positive odd integer | ±0 |
/// | ±0 | positive otherwise | +0 |
/// | −1 | ±inf | 1 |
/// | 1 | anything | 1 |
/// | anything | 0 | 1 |
/// | negative finite | finite non-integer | NaN (domain error) |
/// | \|b\| < 1 | −inf | +inf |
/// | \|b\| > 1 | −inf | +0 |
/// | \|b\| < 1 | +inf | +0 |
/// | \|b\| > 1 | +inf | +inf |
/// | −inf | negative odd / negative other | −0 / +0 |
/// | −inf | positive odd / positive other | −inf / +inf |
/// | +inf | negative / positive | +0 / +inf |
/// | NaN in either | | NaN |
///
/// Zero, one and minus one are judged within `EPS`. An exponent is an
/// integer when it exceeds its floor by at most `EPS`.
pub fn pow_checked(base: f64, exponent: f64) -> Outcome {
    match (Base::of(base), Exponent::of(exponent)) {
        (Base::Zero { negative }, e) if e.is_negative() && e.is_odd() => zero_pole(signed_infinity(negative)),
        (Base::Zero { .. }, e) if e.is_negative() && e.is_finite() => zero_pole(f64::INFINITY),
        (Base::Zero { .. }, e) if e.is_negative() => Outcome::ok(f64::INFINITY),
        (Base::Zero { negative }, e) if e.is_positive() && e.is_odd() => Outcome::ok(signed_zero(negative)),
        (Base::Zero { .. }, e) if e.is_positive() => Outcome::ok(0.0),

        (Base::Finite(b), Exponent::Infinite { .. }) if b.approx_eq(-1.0) => Outcome::ok(1.0),
        (Base::Finite(b), _) if b.approx_eq(1.0) => Outcome::ok(1.0),
        (_, Exponent::Zero) => Outcome::ok(1.0),

        (
            Base::Finite(b),
            Exponent::Finite {
                parity: Parity::Fractional,
                ..
            },
        ) if b < 0.0 => Outcome::failed(
            f64::NAN,
            kinds::domain_error(
                codes::POW_NEGATIVE_BASE_FRACTIONAL_EXPONENT,
                "negative base raised to a non-integer power",
            ),
        ),

        (Base::Finite(b), Exponent::Infinite { negative: true }) if fabs(b) < 1.0 => Outcome::ok(f64::INFINITY),
        (Base::Finite(_), Exponent::Infinite { negative: true }) => Outcome::ok(0.0),
        (Base::Finite(b), Exponent::Infinite { negative: false }) if fabs(b) < 1.0 => Outcome::ok(0.0),
        (Base::Finite(_), Exponent::Infinite { negative: false }) => Outcome::ok(f64::INFINITY),

        (Base::Infinite { negative: true }, e) if e.is_negative() && e.is_odd() => Outcome::ok(-0.0),
        (Base::Infinite { negative: true }, e) if e.is_negative() => Outcome::ok(0.0),
        (Base::Infinite { negative: true }, e) if e.is_positive() && e.is_odd() => Outcome::ok(f64::NEG_INFINITY),
        (Base::Infinite { negative: true }, e) if e.is_positive() => Outcome::ok(f64::INFINITY),
        (Base::Infinite { negative: false }, e) if e.is_negative() => Outcome::ok(0.0),
        (Base::Infinite { negative: false }, e) if e.is_positive() => Outcome::ok(f64::INFINITY),

        (Base::Finite(b), Exponent::Finite { value, parity }) => Outcome::ok(finite_pow(b, value, parity)),

        // NaN in either operand that no row above claimed
        _ => Outcome::ok(f64::NAN),
    }
}

fn zero_pole(value: f64) -> Outcome {
    Outcome::failed(
        value,
        kinds::pole_error(codes::POW_ZERO_NEGATIVE_EXPONENT, "zero raised to a negative power"),
    )
}

/// The general rows: both operands finite, the base not negligible and the
/// exponent neither negligible nor (for a negative base) fractional.
fn finite_pow(base: f64, exponent: f64, parity: Parity) -> f64 {
    match parity {
        // Even powers only see |base|; this also covers exponents beyond the
        // i64 range, which are all even.
        Parity::Even => fast_pow(fabs(base), floor(exponent) as i64),
        Parity::Odd => fast_pow(base, floor(exponent) as i64),
        Parity::Fractional if exponent > 0.0 => exp(exponent * log(base)),
        Parity::Fractional => 1.0 / exp(-exponent * log(base)),
    }
}

/// Binary exponentiation: square-and-multiply over the bits of `exp`,
/// recursing to the reciprocal for negative exponents.
#[must_use]
pub fn fast_pow(base: f64, exp: i64) -> f64 {
    if exp < 0 {
        return 1.0 / fast_pow_unsigned(base, exp.unsigned_abs());
    }
    fast_pow_unsigned(base, exp.unsigned_abs())
}

fn fast_pow_unsigned(mut base: f64, mut exp: u64) -> f64 {
    let mut result = 1.0;
    while exp != 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        base *= base;
        exp >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_negative_zero(x: f64) -> bool {
        x == 0.0 && x.is_sign_negative()
    }

    fn is_positive_zero(x: f64) -> bool {
        x == 0.0 && x.is_sign_positive()
    }

    #[test]
    fn test_fast_pow() {
        assert_eq!(fast_pow(2.0, 10), 1024.0);
        assert_eq!(fast_pow(2.0, -2), 0.25);
        assert_eq!(fast_pow(-3.0, 3), -27.0);
        assert_eq!(fast_pow(7.5, 0), 1.0);
        assert_eq!(fast_pow(2.0, i64::MIN), 0.0);
        assert_eq!(fast_pow(-1.0, 5), -1.0);
    }

    #[test]
    fn test_exponent_tags() {
        assert_eq!(Exponent::of(f64::NAN), Exponent::Nan);
        assert_eq!(Exponent::of(5e-7), Exponent::Zero);
        assert_eq!(
            Exponent::of(3.0),
            Exponent::Finite {
                value: 3.0,
                parity: Parity::Odd
            }
        );
        assert_eq!(
            Exponent::of(-3.0),
            Exponent::Finite {
                value: -3.0,
                parity: Parity::Odd
            }
        );
        assert_eq!(
            Exponent::of(2.9999999),
            Exponent::Finite {
                value: 2.9999999,
                parity: Parity::Fractional
            }
        );
        assert_eq!(
            Exponent::of(3.0000001),
            Exponent::Finite {
                value: 3.0000001,
                parity: Parity::Odd
            }
        );
        assert_eq!(
            Exponent::of(-2.9999999),
            Exponent::Finite {
                value: -2.9999999,
                parity: Parity::Odd
            }
        );
        assert_eq!(
            Exponent::of(1e300),
            Exponent::Finite {
                value: 1e300,
                parity: Parity::Even
            }
        );
        assert_eq!(
            Exponent::of(-0.33),
            Exponent::Finite {
                value: -0.33,
                parity: Parity::Fractional
            }
        );
    }

    #[test]
    fn test_base_tags() {
        assert_eq!(Base::of(-1e-9), Base::Zero { negative: true });
        assert_eq!(Base::of(0.0), Base::Zero { negative: false });
        assert_eq!(Base::of(f64::NEG_INFINITY), Base::Infinite { negative: true });
        assert_eq!(Base::of(2.0), Base::Finite(2.0));
    }

    #[test]
    fn test_zero_base_rows() {
        let pole = pow_checked(-0.0, -3.0);
        assert_eq!(pole.value(), f64::NEG_INFINITY);
        assert!(pole.is_pole_error());
        assert_eq!(pow(0.0, -3.0), f64::INFINITY);
        assert_eq!(pow(-0.0, -2.0), f64::INFINITY);
        assert_eq!(pow(0.0, -0.33), f64::INFINITY);
        assert_eq!(pow(-0.0, -0.33), f64::INFINITY);

        let to_neg_inf = pow_checked(0.0, f64::NEG_INFINITY);
        assert_eq!(to_neg_inf.value(), f64::INFINITY);
        assert!(to_neg_inf.error().is_none());

        assert!(is_negative_zero(pow(-0.0, 3.0)));
        assert!(is_positive_zero(pow(0.0, 3.0)));
        assert!(is_positive_zero(pow(-0.0, 2.0)));
        assert!(is_positive_zero(pow(-0.0, 0.5)));
        assert!(is_positive_zero(pow(-0.0, f64::INFINITY)));
        assert!(pow(0.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_unit_base_and_zero_exponent_rows() {
        assert_eq!(pow(-1.0, f64::INFINITY), 1.0);
        assert_eq!(pow(-1.0, f64::NEG_INFINITY), 1.0);
        assert_eq!(pow(1.0, f64::NAN), 1.0);
        assert_eq!(pow(1.0, f64::INFINITY), 1.0);
        assert_eq!(pow(f64::NAN, 0.0), 1.0);
        assert_eq!(pow(f64::INFINITY, 0.0), 1.0);
        assert_eq!(pow(0.0, 0.0), 1.0);
        assert_eq!(pow(-1.0, 3.0), -1.0);
        assert_eq!(pow(-1.0, 4.0), 1.0);
    }

    #[test]
    fn test_negative_base_fractional_exponent() {
        let outcome = pow_checked(-8.0, 1.0 / 3.0);
        assert!(outcome.value().is_nan());
        assert!(outcome.is_domain_error());
    }

    #[test]
    fn test_integer_exponent_tolerance_is_one_sided() {
        let below = pow_checked(-2.0, 2.9999999);
        assert!(below.value().is_nan());
        assert!(below.is_domain_error());

        let above = pow_checked(-2.0, 3.0000001);
        assert_eq!(above.value(), -8.0);
        assert!(above.error().is_none());

        assert_eq!(pow(-2.0, 4.0000005), 16.0);
        assert!((pow(2.0, 2.9999999) - 2.0f64.powf(2.9999999)).abs() < 1e-9);
    }

    #[test]
    fn test_infinite_exponent_rows() {
        assert_eq!(pow(0.5, f64::NEG_INFINITY), f64::INFINITY);
        assert!(is_positive_zero(pow(2.0, f64::NEG_INFINITY)));
        assert!(is_positive_zero(pow(-0.5, f64::INFINITY)));
        assert_eq!(pow(-2.0, f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_infinite_base_rows() {
        assert!(is_negative_zero(pow(f64::NEG_INFINITY, -3.0)));
        assert!(is_positive_zero(pow(f64::NEG_INFINITY, -2.0)));
        assert!(is_positive_zero(pow(f64::NEG_INFINITY, -0.5)));
        assert_eq!(pow(f64::NEG_INFINITY, 3.0), f64::NEG_INFINITY);
        assert_eq!(pow(f64::NEG_INFINITY, 2.0), f64::INFINITY);
        assert_eq!(pow(f64::NEG_INFINITY, f64::INFINITY), f64::INFINITY);
        assert!(is_positive_zero(pow(f64::INFINITY, -1.1)));
        assert_eq!(pow(f64::INFINITY, 1.1), f64::INFINITY);
        assert_eq!(pow(f64::INFINITY, f64::INFINITY), f64::INFINITY);
        assert!(pow(f64::NEG_INFINITY, f64::NAN).is_nan());
    }

    #[test]
    fn test_nan_rows() {
        assert!(pow(f64::NAN, 1.1).is_nan());
        assert!(pow(f64::NAN, f64::NAN).is_nan());
        assert!(pow(0.001, f64::NAN).is_nan());
        assert!(pow_checked(f64::NAN, 2.0).error().is_none());
    }

    #[test]
    fn test_general_rows() {
        assert_eq!(pow(3.0, 4.0), 81.0);
        assert_eq!(pow(2.0, -3.0), 0.125);
        assert_eq!(pow(-2.0, 3.0), -8.0);
        assert_eq!(pow(5.0, 1.0), 5.0);
        assert!((pow(2.0, 0.5) - core::f64::consts::SQRT_2).abs() < 1e-9);
        assert!((pow(4.0, -0.5) - 0.5).abs() < 1e-9);
        assert_eq!(pow(-2.0, 1e300), f64::INFINITY);
    }
}
