//! Partial functions shared by the integration tests.
//!
//! These are ordinary consumers of the chain contract: each recognizes one
//! spelling of a number and declines everything else.

#![allow(dead_code)]

use std::cell::Cell;

const ENGLISH_NUMERALS: [&str; 21] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
];

const ROMAN_NUMERALS: [&str; 20] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX",
];

/// Parses a decimal integer.
pub fn decimal_to_number(text: &str) -> Option<i32> {
    text.parse().ok()
}

/// Looks up "zero" through "twenty".
pub fn english_numeral_to_number(text: &str) -> Option<i32> {
    ENGLISH_NUMERALS
        .iter()
        .position(|numeral| *numeral == text)
        .and_then(|index| i32::try_from(index).ok())
}

/// Looks up "I" through "XX".
pub fn roman_to_number(text: &str) -> Option<i32> {
    ROMAN_NUMERALS
        .iter()
        .position(|numeral| *numeral == text)
        .and_then(|index| i32::try_from(index + 1).ok())
}

/// A string-to-number member, as stored in arrays and containers.
pub type StringToNumber = fn(&str) -> Option<i32>;

/// The three string-to-number members in evaluation order.
pub const STRING_TO_NUMBER: [StringToNumber; 3] =
    [decimal_to_number, english_numeral_to_number, roman_to_number];

/// The results of the six-member invocation-count scenario.
pub const COUNTED_RESULTS: [Option<i32>; 6] = [None, None, None, Some(7), None, Some(3)];

/// Returns a member that bumps `calls` and then returns `result`.
pub fn counted(calls: &Cell<usize>, result: Option<i32>) -> impl Fn(&()) -> Option<i32> + '_ {
    move |_: &()| {
        calls.set(calls.get() + 1);
        result
    }
}
