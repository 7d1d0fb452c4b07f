//! Generating order keys between two existing keys.
//!
//! [`SymbolTable::between`] is the general form. [`initial`], [`start`],
//! [`end`] and [`between`] fix its parameters for the production Base62
//! alphabet and return a single key.

use crate::chop::chop_successive_digits;
use crate::error::{Error, Result};
use crate::fraction::right_pad;
use crate::linspace::{long_linspace, round_fraction, MAX_COUNT};
use crate::symbols::SymbolTable;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::sync::OnceLock;

/// Subdivisions used by the single-key helpers when appending or prepending.
pub const DEFAULT_DIVISIONS: u64 = 10_000;

/// Leading digits the single-key helpers never trim.
pub const DEFAULT_PLACES_TO_KEEP: usize = 4;

/// Extra length of the implicit end bound over the start bound.
pub const END_PADDING: usize = 6;

impl SymbolTable {
    /// Generate `count` keys strictly between `start` and `end`.
    ///
    /// Defaults: an empty `start` is the first symbol, an empty `end` is the
    /// last symbol repeated `len(start) + 6` times, a zero `count` is one and
    /// zero `divisions` is `count + 1`. The keys are the points
    /// `start + (end - start) * n / divisions` for `n = 1..=count`, each
    /// trimmed to the shortest prefix that still sorts after its predecessor
    /// while keeping at least `places_to_keep` digits.
    ///
    /// `divisions` at or below `count` is not rejected. It places the last
    /// keys on or past `end` and usually fails with an arithmetic error.
    /// More than [`MAX_COUNT`] keys fail with [`Error::TooManyKeys`].
    pub fn between(
        &self,
        start: &str,
        end: &str,
        count: usize,
        divisions: u64,
        places_to_keep: usize,
    ) -> Result<Vec<String>> {
        let start = if start.is_empty() {
            self.first_symbol().to_string()
        } else {
            start.to_string()
        };
        let end = if end.is_empty() {
            self.last_symbol()
                .to_string()
                .repeat(start.chars().count() + END_PADDING)
        } else {
            end.to_string()
        };
        let start_digits = self.string_to_digits(&start)?;
        let end_digits = self.string_to_digits(&end)?;
        if end < start {
            return Err(Error::OrderViolation { start, end });
        }

        let count = count.max(1);
        let divisions =
            NonZeroU64::new(divisions).unwrap_or(NonZeroU64::MIN.saturating_add(count as u64));

        tracing::debug!(
            "generating {} keys between {:?} and {:?} over {} divisions",
            count,
            start,
            end,
            divisions
        );

        if divisions.get() <= count as u64 {
            tracing::warn!(
                "{} divisions cannot fit {} keys strictly before {:?}",
                divisions,
                count,
                end
            );
        }

        let width = start_digits.len().max(end_digits.len());
        let start_digits = right_pad(&start_digits, width);
        let end_digits = right_pad(&end_digits, width);

        let points = long_linspace(&start_digits, &end_digits, count, divisions, self.base())?;
        let digits_list: Vec<_> = points
            .into_iter()
            .map(|point| {
                let mut digits = point.digits;
                digits.extend(round_fraction(point.remainder, divisions, self.base()));
                digits
            })
            .collect();

        let chopped =
            chop_successive_digits(&start_digits, &digits_list, &end_digits, places_to_keep);
        chopped
            .iter()
            .map(|digits| self.digits_to_string(digits))
            .collect()
    }
}

/// Parameters of one general key request, as exchanged over JSON.
///
/// Every field is optional on the wire and defaults the same way
/// [`SymbolTable::between`] does. A missing alphabet means Base62.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<SymbolTable>,
    pub start: String,
    pub end: String,
    pub count: usize,
    pub divisions: u64,
    pub places_to_keep: usize,
}

impl KeyRequest {
    /// Request a single key between two bounds, either of which may be empty.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            ..Self::default()
        }
    }

    pub fn with_alphabet(mut self, alphabet: SymbolTable) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_divisions(mut self, divisions: u64) -> Self {
        self.divisions = divisions;
        self
    }

    pub fn with_places_to_keep(mut self, places_to_keep: usize) -> Self {
        self.places_to_keep = places_to_keep;
        self
    }

    /// Number of keys this request produces.
    pub fn key_count(&self) -> usize {
        self.count.max(1)
    }

    /// Generate the requested keys.
    pub fn run(&self) -> Result<Vec<String>> {
        let table = match &self.alphabet {
            Some(table) => table,
            None => base62(),
        };
        table.between(
            &self.start,
            &self.end,
            self.count,
            self.divisions,
            self.places_to_keep,
        )
    }
}

fn base62() -> &'static SymbolTable {
    static TABLE: OnceLock<SymbolTable> = OnceLock::new();
    TABLE.get_or_init(SymbolTable::base62)
}

fn single_key(start: &str, end: &str, divisions: u64) -> Result<String> {
    let mut keys = base62().between(start, end, 1, divisions, DEFAULT_PLACES_TO_KEEP)?;
    // A count of one always yields exactly one key.
    Ok(keys.swap_remove(0))
}

/// Key for the first item of an empty list.
pub fn initial() -> Result<String> {
    single_key("", "", DEFAULT_DIVISIONS)
}

/// Key that sorts before `next`.
pub fn start(next: &str) -> Result<String> {
    single_key("", next, DEFAULT_DIVISIONS)
}

/// Key that sorts after `previous`.
pub fn end(previous: &str) -> Result<String> {
    single_key(previous, "", DEFAULT_DIVISIONS)
}

/// Key halfway between two neighbours.
pub fn between(previous: &str, next: &str) -> Result<String> {
    single_key(previous, next, 0)
}
