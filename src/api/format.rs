use chrono::NaiveDateTime;

/// Wire format for entry timestamps: `yyyy-MM-dd HH:mm:ss`, second precision,
/// no timezone. Every entry payload and DTO uses exactly this shape.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a wire timestamp. Any deviation from the fixed format is an error.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, chrono::format::ParseError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
}

/// Render a timestamp in the wire format.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}
