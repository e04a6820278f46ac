//! Unit tests for the chain runner.
//!
//! Tests for run, run_range and RunFirstMatch over arrays, containers,
//! ranges and the dynamic Chain.

#![cfg(all(feature = "runner", feature = "chain"))]

mod common;

use std::cell::Cell;
use std::collections::{LinkedList, VecDeque};

use common::{COUNTED_RESULTS, STRING_TO_NUMBER, StringToNumber, counted};
use fallthrough::chain::{BoxedPartialFunction, Chain};
use fallthrough::partial::{SinglePoint, constant, single_point};
use fallthrough::runner::{RangeError, RunFirstMatch, run, run_range};
use rstest::rstest;

fn int_to_string_table() -> Vec<SinglePoint<i32, &'static str>> {
    vec![
        single_point(0, "zero"),
        single_point(1, "one"),
        single_point(2, "two"),
        single_point(0, "zero2"),
        single_point(3, "three"),
    ]
}

// =============================================================================
// String to number
// =============================================================================

#[rstest]
#[case("2019", Some(2019))]
#[case("twelve", Some(12))]
#[case("XIV", Some(14))]
#[case("sieben", None)]
fn string_to_number_over_array(#[case] input: &str, #[case] expected: Option<i32>) {
    assert_eq!(run(&STRING_TO_NUMBER, input), expected);
    assert_eq!(run(STRING_TO_NUMBER, input), expected);
}

#[rstest]
#[case("2019", Some(2019))]
#[case("twelve", Some(12))]
#[case("XIV", Some(14))]
#[case("sieben", None)]
fn string_to_number_over_containers(#[case] input: &str, #[case] expected: Option<i32>) {
    let vector: Vec<StringToNumber> = STRING_TO_NUMBER.to_vec();
    let list: LinkedList<StringToNumber> = STRING_TO_NUMBER.into_iter().collect();
    let deque: VecDeque<StringToNumber> = STRING_TO_NUMBER.into_iter().collect();

    assert_eq!(run(&vector, input), expected);
    assert_eq!(run(&list, input), expected);
    assert_eq!(run(&deque, input), expected);
    assert_eq!(run(vector.as_slice(), input), expected);
}

#[rstest]
#[case("2019", Some(2019))]
#[case("twelve", Some(12))]
#[case("XIV", Some(14))]
#[case("sieben", None)]
fn string_to_number_over_chain(#[case] input: &str, #[case] expected: Option<i32>) {
    let chain: Chain<'_, str, i32> = STRING_TO_NUMBER.into_iter().collect();

    assert_eq!(chain.call(input), expected);
    assert_eq!(run(&chain, input), expected);
}

// =============================================================================
// Invocation count
// =============================================================================

#[rstest]
fn run_over_list_stops_at_first_success() {
    let calls = Cell::new(0);
    let chain: LinkedList<BoxedPartialFunction<'_, (), i32>> = COUNTED_RESULTS
        .iter()
        .map(|result| Box::new(counted(&calls, *result)) as BoxedPartialFunction<'_, (), i32>)
        .collect();

    assert_eq!(run(&chain, &()), Some(7));
    assert_eq!(calls.get(), 4);
}

#[rstest]
fn chain_stops_at_first_success() {
    let calls = Cell::new(0);
    let chain: Chain<'_, (), i32> = COUNTED_RESULTS
        .iter()
        .map(|result| counted(&calls, *result))
        .collect();

    assert_eq!(chain.len(), 6);
    assert_eq!(chain.call(&()), Some(7));
    assert_eq!(calls.get(), 4);
}

#[rstest]
fn lazy_iterator_is_only_advanced_up_to_the_match() {
    let built = Cell::new(0);
    let members = (0..10).map(|position| {
        built.set(built.get() + 1);
        single_point(position, position * 10)
    });

    assert_eq!(run(members, &3), Some(30));
    assert_eq!(built.get(), 4);
}

#[rstest]
fn empty_sequences_return_none() {
    let members: Vec<BoxedPartialFunction<'_, (), i32>> = Vec::new();
    let chain: Chain<'_, (), i32> = Chain::new();

    assert_eq!(run(&members, &()), None);
    assert_eq!(chain.call(&()), None);
    assert_eq!(run(std::iter::empty::<SinglePoint<(), i32>>(), &()), None);
}

#[rstest]
fn empty_window_invokes_nothing() {
    let calls = Cell::new(0);
    let members: Vec<_> = COUNTED_RESULTS
        .iter()
        .map(|result| counted(&calls, *result))
        .collect();

    assert_eq!(run_range(&members, 3..3, &()), Ok(None));
    assert_eq!(run(members.iter().skip(members.len()), &()), None);
    assert_eq!(calls.get(), 0);

    assert_eq!(run_range(&members, 4..6, &()), Ok(Some(3)));
    assert_eq!(calls.get(), 2);
}

// =============================================================================
// Exact-match lookup
// =============================================================================

#[rstest]
#[case(0, Some("zero"))]
#[case(2, Some("two"))]
#[case(3, Some("three"))]
#[case(4, None)]
fn earlier_single_point_wins(#[case] input: i32, #[case] expected: Option<&str>) {
    let table = int_to_string_table();
    let list: LinkedList<_> = int_to_string_table().into_iter().collect();

    assert_eq!(run(&table, &input), expected);
    assert_eq!(run(&list, &input), expected);
    assert_eq!(table.iter().first_match(&input), expected);
}

#[rstest]
fn iteration_order_decides_ties() {
    let table = int_to_string_table();

    assert_eq!(run(table.iter().rev(), &0), Some("zero2"));
}

// =============================================================================
// Ranges
// =============================================================================

#[rstest]
#[case(0..5, Some("zero"))]
#[case(1..5, Some("zero2"))]
#[case(1..3, None)]
#[case(3..3, None)]
#[case(0..0, None)]
fn run_range_evaluates_window(
    #[case] range: std::ops::Range<usize>,
    #[case] expected: Option<&str>,
) {
    let table = int_to_string_table();

    assert_eq!(run_range(&table, range, &0), Ok(expected));
}

#[rstest]
fn run_range_rejects_window_past_end() {
    let table = int_to_string_table();

    assert_eq!(
        run_range(&table, 2..6, &0),
        Err(RangeError {
            start: 2,
            end: 6,
            length: 5
        })
    );
}

#[rstest]
fn run_range_over_chain_members() {
    let chain = Chain::new()
        .with(single_point(1, 'a'))
        .with(single_point(2, 'b'))
        .with(constant('z'));

    assert_eq!(run_range(chain.as_slice(), 1..3, &1), Ok(Some('z')));
    assert_eq!(run_range(chain.as_slice(), 0..1, &2), Ok(None));
}

#[rstest]
fn range_error_is_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(RangeError {
        start: 0,
        end: 9,
        length: 2,
    });

    assert_eq!(
        error.to_string(),
        "range 0..9 is out of bounds for a chain of 2 partial functions"
    );
}
