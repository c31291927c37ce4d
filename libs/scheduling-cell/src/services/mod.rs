pub mod overlap;
pub mod slots;

pub use overlap::{clock_ranges_overlap, overlaps};
pub use slots::{generate_slots, parse_date, SlotGenerator};
