// Time label helpers
//
// Slot indices count half hours from the first visible row (6:00 AM). Labels
// are for display only and never stored.

use chrono::NaiveTime;

use crate::grid::geometry::{FIRST_SLOT_HOUR, SLOT_MINUTES};
use crate::models::block::SlotSpan;

const MINUTES_PER_DAY: u32 = 24 * 60;
const SLOTS_PER_DAY: usize = (MINUTES_PER_DAY / SLOT_MINUTES) as usize;

/// Wall-clock time at the top edge of `index`. Wraps past midnight.
pub fn slot_time(index: usize) -> NaiveTime {
    // Reduce first: the remainder is below SLOTS_PER_DAY and fits in u32
    let slot = (index % SLOTS_PER_DAY) as u32;
    let minutes = (FIRST_SLOT_HOUR * 60 + slot * SLOT_MINUTES) % MINUTES_PER_DAY;
    NaiveTime::from_num_seconds_from_midnight_opt(minutes * 60, 0).unwrap_or_default()
}

/// 12-hour label such as "6:00 AM" or "9:30 PM".
pub fn slot_label(index: usize) -> String {
    slot_time(index).format("%-I:%M %p").to_string()
}

/// "start – end" for a block. The end label is taken from the slot after
/// `bottom`, since a block covers its last slot completely.
pub fn span_label(span: SlotSpan) -> String {
    format!("{} – {}", slot_label(span.top), slot_label(span.bottom + 1))
}

/// Human label for a meeting duration in the footer selector.
pub fn duration_label(minutes: u32) -> String {
    match minutes {
        m if m < 60 => format!("{} min", m),
        60 => "1 hour".to_string(),
        m => format!("{} hours", m as f32 / 60.0),
    }
}
