//! The input-side data model: per-entity rankings and the decoded rating table.

mod rankings;
mod table;

pub use rankings::Rankings;
pub use table::RatingTable;
