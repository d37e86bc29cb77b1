//! Shared helpers for application modules.

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Current UTC instant as an ISO-8601 (RFC 3339) string.
///
/// Doubles as the identity generator for new records: ids are
/// timestamp-derived, so two creates in the same clock tick would collide.
pub fn now_iso8601() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339).unwrap_or_else(|_| now.to_string())
}
