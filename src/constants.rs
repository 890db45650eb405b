use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Separator used when list-valued fields are stored in a single TEXT column.
pub const TEXT_LIST_DELIMITER: char = ',';
