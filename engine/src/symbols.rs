//! Symbol tables: numbering systems built from an ordered set of unique symbols.
//!
//! A table maps each symbol to its position, which becomes the digit value.
//! Keys only sort correctly as plain strings when the alphabet's character
//! order matches its digit order, which holds for all predefined alphabets.

use crate::error::{Error, Result};
use crate::Digit;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decimal digits.
pub const DECIMAL: &str = "0123456789";

/// Lowercase hexadecimal digits.
pub const HEX: &str = "0123456789abcdef";

/// Digits, uppercase, then lowercase letters, in ASCII order.
pub const BASE62: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// An immutable numbering system over a caller-chosen alphabet.
///
/// The radix is the number of symbols. Symbol `i` of the alphabet stands for
/// digit `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolTable {
    symbols: Vec<char>,
    index: HashMap<char, Digit>,
}

impl SymbolTable {
    /// Build a table from an alphabet, one symbol per character.
    ///
    /// Fails with [`Error::DuplicateSymbols`] if any character repeats.
    pub fn new(alphabet: &str) -> Result<Self> {
        let symbols: Vec<char> = alphabet.chars().collect();
        if symbols.len() < 2 {
            return Err(Error::TooFewSymbols(symbols.len()));
        }

        let mut index = HashMap::with_capacity(symbols.len());
        let mut duplicates = String::new();
        for (digit, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, digit).is_some() && !duplicates.contains(symbol) {
                duplicates.push(symbol);
            }
        }

        if !duplicates.is_empty() {
            return Err(Error::DuplicateSymbols(duplicates));
        }

        Ok(Self { symbols, index })
    }

    /// The decimal table (`0-9`).
    pub fn decimal() -> Self {
        Self::predefined(DECIMAL)
    }

    /// The hexadecimal table (`0-9a-f`).
    pub fn hex() -> Self {
        Self::predefined(HEX)
    }

    /// The base62 table (`0-9A-Za-z`), used for production keys.
    pub fn base62() -> Self {
        Self::predefined(BASE62)
    }

    fn predefined(alphabet: &str) -> Self {
        let symbols: Vec<char> = alphabet.chars().collect();
        let index = symbols
            .iter()
            .enumerate()
            .map(|(digit, &symbol)| (symbol, digit))
            .collect();
        Self { symbols, index }
    }

    /// Radix of this numbering system.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// The symbols in digit order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Symbol for digit zero.
    pub fn first_symbol(&self) -> char {
        self.symbols[0]
    }

    /// Symbol for the largest digit.
    pub fn last_symbol(&self) -> char {
        self.symbols[self.symbols.len() - 1]
    }

    /// Convert a number to big-endian digits. Zero is `[0]`.
    pub fn number_to_digits(&self, mut n: u64) -> Vec<Digit> {
        let base = self.base() as u64;
        let mut digits = Vec::new();
        loop {
            digits.push((n % base) as Digit);
            n /= base;
            if n == 0 {
                break;
            }
        }
        digits.reverse();
        digits
    }

    /// Positional value of big-endian digits.
    pub fn digits_to_number(&self, digits: &[Digit]) -> Result<u64> {
        let base = self.base() as u64;
        digits.iter().try_fold(0u64, |acc, &digit| {
            self.check_digit(digit)?;
            acc.checked_mul(base)
                .and_then(|value| value.checked_add(digit as u64))
                .ok_or_else(|| Error::NumberOverflow(self.render(digits)))
        })
    }

    /// Map digits to their symbols.
    pub fn digits_to_string(&self, digits: &[Digit]) -> Result<String> {
        digits
            .iter()
            .map(|&digit| {
                self.check_digit(digit)?;
                Ok(self.symbols[digit])
            })
            .collect()
    }

    /// Map symbols back to digits.
    pub fn string_to_digits(&self, s: &str) -> Result<Vec<Digit>> {
        s.chars()
            .map(|symbol| {
                self.index
                    .get(&symbol)
                    .copied()
                    .ok_or(Error::UnknownSymbol(symbol))
            })
            .collect()
    }

    /// Render a number in this alphabet.
    pub fn number_to_string(&self, n: u64) -> Result<String> {
        self.digits_to_string(&self.number_to_digits(n))
    }

    /// Parse a string in this alphabet as a number.
    pub fn string_to_number(&self, s: &str) -> Result<u64> {
        self.digits_to_number(&self.string_to_digits(s)?)
    }

    fn check_digit(&self, digit: Digit) -> Result<()> {
        if digit < self.base() {
            Ok(())
        } else {
            Err(Error::DigitOutOfRange {
                digit,
                base: self.base(),
            })
        }
    }

    // Best-effort rendering for error messages; out-of-range digits show as '?'.
    fn render(&self, digits: &[Digit]) -> String {
        digits
            .iter()
            .map(|&digit| self.symbols.get(digit).copied().unwrap_or('?'))
            .collect()
    }
}

impl TryFrom<String> for SymbolTable {
    type Error = Error;

    fn try_from(alphabet: String) -> Result<Self> {
        Self::new(&alphabet)
    }
}

impl From<SymbolTable> for String {
    fn from(table: SymbolTable) -> Self {
        table.symbols.into_iter().collect()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::base62()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_tables_match_their_alphabets() {
        assert_eq!(SymbolTable::decimal(), SymbolTable::new(DECIMAL).unwrap());
        assert_eq!(SymbolTable::hex(), SymbolTable::new(HEX).unwrap());
        assert_eq!(SymbolTable::base62(), SymbolTable::new(BASE62).unwrap());
        assert_eq!(SymbolTable::base62().base(), 62);
        assert_eq!(SymbolTable::hex().base(), 16);
    }

    #[test]
    fn duplicate_symbols_rejected() {
        assert_eq!(
            SymbolTable::new("aab"),
            Err(Error::DuplicateSymbols("a".into()))
        );
        assert_eq!(
            SymbolTable::new("abcabc"),
            Err(Error::DuplicateSymbols("abc".into()))
        );
    }

    #[test]
    fn too_few_symbols_rejected() {
        assert_eq!(SymbolTable::new(""), Err(Error::TooFewSymbols(0)));
        assert_eq!(SymbolTable::new("x"), Err(Error::TooFewSymbols(1)));
        assert!(SymbolTable::new("xy").is_ok());
    }

    #[test]
    fn base62_sorts_like_ascii() {
        let table = SymbolTable::base62();
        let mut sorted = table.symbols().to_vec();
        sorted.sort();
        assert_eq!(sorted, table.symbols());
    }

    #[test]
    fn number_to_digits_is_big_endian() {
        let table = SymbolTable::decimal();
        assert_eq!(table.number_to_digits(0), vec![0]);
        assert_eq!(table.number_to_digits(7), vec![7]);
        assert_eq!(table.number_to_digits(1203), vec![1, 2, 0, 3]);

        let hex = SymbolTable::hex();
        assert_eq!(hex.number_to_digits(255), vec![15, 15]);
        assert_eq!(hex.number_to_digits(256), vec![1, 0, 0]);
    }

    #[test]
    fn number_string_conversions() {
        let hex = SymbolTable::hex();
        assert_eq!(hex.number_to_string(0).unwrap(), "0");
        assert_eq!(hex.number_to_string(48879).unwrap(), "beef");
        assert_eq!(hex.string_to_number("beef").unwrap(), 48879);

        let base62 = SymbolTable::base62();
        assert_eq!(base62.number_to_string(61).unwrap(), "z");
        assert_eq!(base62.number_to_string(62).unwrap(), "10");
        assert_eq!(base62.string_to_number("zz").unwrap(), 62 * 62 - 1);
    }

    #[test]
    fn multibyte_symbols() {
        let table = SymbolTable::new("αβγδ").unwrap();
        assert_eq!(table.base(), 4);
        assert_eq!(table.number_to_string(6).unwrap(), "βγ");
        assert_eq!(table.string_to_number("βγ").unwrap(), 6);
    }

    #[test]
    fn unknown_symbol() {
        let table = SymbolTable::decimal();
        assert_eq!(table.string_to_digits("12a"), Err(Error::UnknownSymbol('a')));
        assert_eq!(table.string_to_number("-1"), Err(Error::UnknownSymbol('-')));
    }

    #[test]
    fn digit_out_of_range() {
        let table = SymbolTable::decimal();
        assert_eq!(
            table.digits_to_string(&[1, 10]),
            Err(Error::DigitOutOfRange { digit: 10, base: 10 })
        );
        assert_eq!(
            table.digits_to_number(&[42]),
            Err(Error::DigitOutOfRange { digit: 42, base: 10 })
        );
    }

    #[test]
    fn number_overflow() {
        let table = SymbolTable::decimal();
        assert_eq!(
            table.string_to_number("18446744073709551615").unwrap(),
            u64::MAX
        );
        assert!(matches!(
            table.string_to_number("18446744073709551616"),
            Err(Error::NumberOverflow(_))
        ));
    }

    #[test]
    fn serializes_as_alphabet() {
        let json = serde_json::to_string(&SymbolTable::hex()).unwrap();
        assert_eq!(json, "\"0123456789abcdef\"");

        let parsed: SymbolTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SymbolTable::hex());

        assert!(serde_json::from_str::<SymbolTable>("\"aab\"").is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_table() -> impl Strategy<Value = SymbolTable> {
            prop_oneof![
                Just(SymbolTable::decimal()),
                Just(SymbolTable::hex()),
                Just(SymbolTable::base62()),
                Just(SymbolTable::new("01").unwrap()),
            ]
        }

        proptest! {
            #[test]
            fn prop_number_roundtrip(table in arb_table(), n in any::<u64>()) {
                let s = table.number_to_string(n).unwrap();
                prop_assert_eq!(table.string_to_number(&s).unwrap(), n);
            }
        }
    }
}
