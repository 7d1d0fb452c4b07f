//! Digit arithmetic over an arbitrary radix.
//!
//! Digit sequences are read as fractions after an implicit radix point. A
//! [`Fraction`] pairs such a sequence with an integer remainder over a known
//! denominator, so `{ digits: [2, 3], remainder: 1 }` over denominator 4 in
//! base 10 is `0.23 + 1/4 * 0.01`. Division by the denominator is therefore
//! exact and no floating point is involved anywhere.

use crate::error::{Error, Result};
use crate::{Digit, Remainder};
use std::num::NonZeroU64;

/// Digits after the radix point plus an exact remainder in units of the last digit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fraction {
    /// Big-endian digits
    pub digits: Vec<Digit>,
    /// Numerator over the shared denominator, always below it
    pub remainder: Remainder,
}

impl Fraction {
    /// A fraction with no remainder.
    pub fn whole(digits: Vec<Digit>) -> Self {
        Self {
            digits,
            remainder: 0,
        }
    }

    /// `digits / divisor`, keeping the remainder over `divisor`.
    pub fn divide(digits: &[Digit], divisor: NonZeroU64, base: usize) -> Self {
        long_div(digits, divisor, base)
    }

    /// Sum of two fractions over the same denominator.
    ///
    /// Fails with [`Error::AdditionOverflow`] if the sum reaches one.
    pub fn add(&self, other: &Fraction, denominator: NonZeroU64, base: usize) -> Result<Self> {
        let (sum, carry) = long_add(
            &self.digits,
            &other.digits,
            self.remainder + other.remainder,
            denominator,
            base,
        )?;
        if carry {
            return Err(Error::AdditionOverflow);
        }
        Ok(sum)
    }

    /// Difference of two fractions over the same denominator.
    pub fn subtract(
        &self,
        other: &Fraction,
        denominator: NonZeroU64,
        base: usize,
    ) -> Result<Self> {
        long_subtract(
            &self.digits,
            &other.digits,
            self.remainder,
            other.remainder,
            denominator,
            base,
        )
    }
}

/// Append zeros until `digits` is `len` long. Aligns fractions at the radix point.
pub fn right_pad(digits: &[Digit], len: usize) -> Vec<Digit> {
    let mut padded = digits.to_vec();
    if padded.len() < len {
        padded.resize(len, 0);
    }
    padded
}

/// Prepend zeros until `digits` is `len` long. Aligns whole numbers at the last digit.
pub fn left_pad(digits: &[Digit], len: usize) -> Vec<Digit> {
    let fill = len.saturating_sub(digits.len());
    let mut padded = vec![0; fill];
    padded.extend_from_slice(digits);
    padded
}

/// Long division of `dividend` by `divisor`, one digit at a time.
///
/// The quotient has as many digits as the dividend.
pub fn long_div(dividend: &[Digit], divisor: NonZeroU64, base: usize) -> Fraction {
    let divisor = Remainder::from(divisor.get());
    let base = base as Remainder;

    let mut remainder: Remainder = 0;
    let mut digits = Vec::with_capacity(dividend.len());
    for &digit in dividend {
        let current = remainder * base + digit as Remainder;
        digits.push((current / divisor) as Digit);
        remainder = current % divisor;
    }

    Fraction { digits, remainder }
}

/// Add two equal-length digit sequences with a combined remainder.
///
/// A `remainder` of at least `denominator` carries one unit into the last
/// digit first. Returns the sum and whether it overflowed past the radix point.
pub fn long_add(
    a: &[Digit],
    b: &[Digit],
    remainder: Remainder,
    denominator: NonZeroU64,
    base: usize,
) -> Result<(Fraction, bool)> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let denominator = Remainder::from(denominator.get());
    let (mut carry, remainder) = if remainder >= denominator {
        (1, remainder - denominator)
    } else {
        (0, remainder)
    };

    let mut digits = vec![0; a.len()];
    for i in (0..a.len()).rev() {
        let sum = a[i] + b[i] + carry;
        digits[i] = sum % base;
        carry = sum / base;
    }

    Ok((Fraction { digits, remainder }, carry > 0))
}

/// Subtract `subtrahend` from `minuend`, both of equal length, with remainders.
///
/// The remainders act as one more digit in radix `denominator` to the right
/// of the last real digit. Fails with [`Error::BorrowExhausted`] when the
/// subtrahend is larger than the minuend.
pub fn long_subtract(
    minuend: &[Digit],
    subtrahend: &[Digit],
    minuend_remainder: Remainder,
    subtrahend_remainder: Remainder,
    denominator: NonZeroU64,
    base: usize,
) -> Result<Fraction> {
    if minuend.len() != subtrahend.len() {
        return Err(Error::LengthMismatch {
            left: minuend.len(),
            right: subtrahend.len(),
        });
    }

    let mut digits = minuend.to_vec();

    let remainder = if minuend_remainder >= subtrahend_remainder {
        minuend_remainder - subtrahend_remainder
    } else {
        let len = digits.len();
        borrow(&mut digits, len, base)?;
        minuend_remainder + Remainder::from(denominator.get()) - subtrahend_remainder
    };

    for i in (0..digits.len()).rev() {
        if digits[i] < subtrahend[i] {
            borrow(&mut digits, i, base)?;
            digits[i] += base;
        }
        digits[i] -= subtrahend[i];
    }

    Ok(Fraction { digits, remainder })
}

// Take one unit from the nearest non-zero digit left of `position`. Zeros
// skipped on the way become `base - 1`.
fn borrow(digits: &mut [Digit], position: usize, base: usize) -> Result<()> {
    let lender = digits[..position]
        .iter()
        .rposition(|&d| d != 0)
        .ok_or(Error::BorrowExhausted)?;

    digits[lender] -= 1;
    for digit in &mut digits[lender + 1..position] {
        *digit = base - 1;
    }
    Ok(())
}
