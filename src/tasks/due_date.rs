use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

/// Describes why the due date supplied by the client cannot be used.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DueDateError {
    #[error("Task due date cannot be empty.")]
    Empty,
    #[error("Task due date `{0}` is not a valid date and time.")]
    Invalid(String),
}

/// Parses due date supplied by the client and normalizes it to UTC with millisecond precision.
///
/// Accepts RFC 3339 timestamps, local date and time without offset (as submitted by the
/// `datetime-local` input, e.g. `2024-12-01T10:30`) and plain dates. Local date and time is
/// interpreted using `local_offset`, plain dates are treated as UTC midnight.
pub fn normalize_due_date(
    raw_due_date: &str,
    local_offset: UtcOffset,
) -> Result<OffsetDateTime, DueDateError> {
    let raw_due_date = raw_due_date.trim();
    if raw_due_date.is_empty() {
        return Err(DueDateError::Empty);
    }

    let due_date = if let Ok(due_date) = OffsetDateTime::parse(raw_due_date, &Rfc3339) {
        due_date
    } else if let Some(due_date) = parse_local_date_time(raw_due_date) {
        due_date.assume_offset(local_offset)
    } else if let Ok(date) = Date::parse(raw_due_date, format_description!("[year]-[month]-[day]"))
    {
        date.midnight().assume_utc()
    } else {
        return Err(DueDateError::Invalid(raw_due_date.to_string()));
    };

    let invalid = || DueDateError::Invalid(raw_due_date.to_string());
    let due_date = due_date.checked_to_offset(UtcOffset::UTC).ok_or_else(invalid)?;
    due_date
        .replace_nanosecond(due_date.nanosecond() - due_date.nanosecond() % 1_000_000)
        .map_err(|_| invalid())
}

fn parse_local_date_time(raw_due_date: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(
        raw_due_date,
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            raw_due_date,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
    })
    .or_else(|_| {
        PrimitiveDateTime::parse(
            raw_due_date,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
        )
    })
    .ok()
}
