//! Evenly spaced points between two digit sequences.

use crate::error::{Error, Result};
use crate::fraction::Fraction;
use crate::{Digit, Remainder};
use std::num::NonZeroU64;

/// Most points a single call produces.
pub const MAX_COUNT: usize = 1_000_000;

/// Digits of `numerator / denominator`, rounded half-up to the fewest places
/// that resolve one part in `denominator`.
///
/// That is `ceil(log_base(denominator))` digits, left-padded with zeros. A
/// denominator of one needs no digits. `numerator` must be below
/// `denominator`, which keeps the rounded value from overflowing.
pub fn round_fraction(numerator: Remainder, denominator: NonZeroU64, base: usize) -> Vec<Digit> {
    let denominator = Remainder::from(denominator.get());
    let base = base as Remainder;

    let mut places = 0;
    let mut scale: Remainder = 1;
    while scale < denominator {
        scale = scale.saturating_mul(base);
        places += 1;
    }

    let mut remainder = numerator;
    let mut digits = Vec::with_capacity(places);
    for _ in 0..places {
        remainder *= base;
        digits.push((remainder / denominator) as Digit);
        remainder %= denominator;
    }

    if remainder * 2 >= denominator {
        for digit in digits.iter_mut().rev() {
            if (*digit as Remainder) + 1 < base {
                *digit += 1;
                break;
            }
            *digit = 0;
        }
    }

    digits
}

/// `count` points at `start + (end - start) * n / divisions` for `n = 1..=count`.
///
/// `start` and `end` are equal-length fractions. Every point carries its
/// remainder over `divisions`, so the spacing is exact no matter how deep
/// earlier insertions have pushed the keys. `count` is capped at [`MAX_COUNT`].
pub fn long_linspace(
    start: &[Digit],
    end: &[Digit],
    count: usize,
    divisions: NonZeroU64,
    base: usize,
) -> Result<Vec<Fraction>> {
    if start.len() != end.len() {
        return Err(Error::LengthMismatch {
            left: start.len(),
            right: end.len(),
        });
    }
    if start == end {
        return Err(Error::IdenticalBounds);
    }
    if count > MAX_COUNT {
        return Err(Error::TooManyKeys {
            requested: count,
            limit: MAX_COUNT,
        });
    }

    // Each point is start * (d - n) / d + end * n / d.
    let start_step = Fraction::divide(start, divisions, base);
    let end_step = Fraction::divide(end, divisions, base);

    let mut start_part = Fraction::whole(start.to_vec()).subtract(&start_step, divisions, base)?;
    let mut end_part = end_step.clone();

    let mut points = Vec::with_capacity(count);
    for n in 1..=count {
        points.push(start_part.add(&end_part, divisions, base)?);
        if n < count {
            start_part = start_part.subtract(&start_step, divisions, base)?;
            end_part = end_part.add(&end_step, divisions, base)?;
        }
    }

    tracing::trace!(
        "linspace produced {} points over {} divisions",
        points.len(),
        divisions
    );

    Ok(points)
}
