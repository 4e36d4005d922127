//! Chip time parsing.

use crate::utils::error::ParseError;

/// Parse an `H:MM:SS` chip time into total elapsed seconds
///
/// Exactly three colon-separated fields of ASCII digits are required; signs,
/// whitespace and decimals inside a field are rejected.
/// Minute and second fields are not range-checked, so `0:75:00` is 4500s.
///
/// # Errors
/// * `ParseError::InvalidChipTime` - wrong number of fields or a non-integer field
pub fn parse_chip_time(chip_time: &str) -> Result<u32, ParseError> {
    let invalid = || ParseError::InvalidChipTime(chip_time.to_string());

    let fields: Vec<&str> = chip_time.trim().split(':').collect();
    let [hours, minutes, seconds] = fields.as_slice() else {
        return Err(invalid());
    };

    let parse = |field: &str| {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        field.parse::<u32>().map_err(|_| invalid())
    };
    let (h, m, s) = (parse(*hours)?, parse(*minutes)?, parse(*seconds)?);

    h.checked_mul(3600)
        .and_then(|total| total.checked_add(m.checked_mul(60)?))
        .and_then(|total| total.checked_add(s))
        .ok_or_else(invalid)
}
