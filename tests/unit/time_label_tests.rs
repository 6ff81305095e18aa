// Parameterized tests for slot and span labels

use availability_grid::models::block::SlotSpan;
use availability_grid::utils::time::{duration_label, slot_label, span_label};
use test_case::test_case;

#[test_case(0, "6:00 AM" ; "first slot")]
#[test_case(1, "6:30 AM" ; "first half hour")]
#[test_case(11, "11:30 AM" ; "last morning slot")]
#[test_case(12, "12:00 PM" ; "noon")]
#[test_case(13, "12:30 PM" ; "half past noon")]
#[test_case(14, "1:00 PM" ; "one pm")]
#[test_case(31, "9:30 PM" ; "last slot")]
#[test_case(32, "10:00 PM" ; "end of grid")]
fn test_slot_label(index: usize, expected: &str) {
    assert_eq!(slot_label(index), expected);
}

#[test_case(0, 1, "6:00 AM – 7:00 AM" ; "first hour")]
#[test_case(1, 0, "6:00 AM – 7:00 AM" ; "reversed bounds")]
#[test_case(11, 12, "11:30 AM – 12:30 PM" ; "across noon")]
#[test_case(31, 31, "9:30 PM – 10:00 PM" ; "last slot only")]
fn test_span_label(a: usize, b: usize, expected: &str) {
    assert_eq!(span_label(SlotSpan::new(a, b)), expected);
}

#[test_case(30, "30 min")]
#[test_case(60, "1 hour")]
#[test_case(90, "1.5 hours")]
#[test_case(120, "2 hours")]
fn test_duration_label(minutes: u32, expected: &str) {
    assert_eq!(duration_label(minutes), expected);
}
