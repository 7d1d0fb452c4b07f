//! Trimming generated digit sequences to the shortest form that still sorts
//! strictly after its predecessor.

use crate::Digit;
use std::iter;

/// Shortest prefix of `current` that stays strictly above `previous`.
///
/// The first `places_to_keep` digits are always kept. From there the prefix
/// ends at the first non-zero digit that differs from `previous` at the same
/// position (a missing digit in `previous` counts as different). Requiring a
/// non-zero digit keeps the prefix numerically above `previous`, not just
/// longer than it. If no such digit exists, `current` is returned whole.
pub fn chop_digits<'a>(
    current: &'a [Digit],
    previous: &[Digit],
    places_to_keep: usize,
) -> &'a [Digit] {
    (places_to_keep..current.len())
        .find(|&i| current[i] != 0 && previous.get(i) != Some(&current[i]))
        .map_or(current, |i| &current[..=i])
}

/// Chop every sequence in `digits_list` against its already chopped predecessor.
///
/// `start` and `end` bracket the list; only the interior is returned.
pub fn chop_successive_digits(
    start: &[Digit],
    digits_list: &[Vec<Digit>],
    end: &[Digit],
    places_to_keep: usize,
) -> Vec<Vec<Digit>> {
    let bracketed = iter::once(start)
        .chain(digits_list.iter().map(Vec::as_slice))
        .chain(iter::once(end));

    let chopped = bracketed.fold(Vec::<Vec<Digit>>::new(), |mut acc, current| {
        let trimmed = match acc.last() {
            Some(previous) => chop_digits(current, previous, places_to_keep).to_vec(),
            None => current.to_vec(),
        };
        acc.push(trimmed);
        acc
    });

    chopped
        .into_iter()
        .skip(1)
        .take(digits_list.len())
        .collect()
}
