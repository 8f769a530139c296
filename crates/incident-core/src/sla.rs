//! SLA deadline computation.

use chrono::{Duration, NaiveDateTime};

use crate::temporal::parse_datetime;

/// Computes the SLA deadline for one row.
///
/// Precedence:
/// 1. A parseable explicit deadline value wins.
/// 2. Otherwise `opened_at + default` (also when the source has no
///    deadline field at all, in which case `raw_deadline` is `None` for
///    every row).
/// 3. A null `opened_at` yields a null deadline.
///
/// Resolution is per row: explicit and defaulted deadlines may coexist
/// within one result set.
pub fn compute_deadline(
    opened_at: Option<NaiveDateTime>,
    raw_deadline: Option<&str>,
    default: Duration,
) -> Option<NaiveDateTime> {
    if let Some(raw) = raw_deadline
        && let Some(parsed) = parse_datetime(raw)
    {
        return Some(parsed);
    }
    opened_at.map(|opened| opened + default)
}
