//! Duration text parsing.

/// Convert a `H:MM:SS[.fff]` duration string into total milliseconds.
///
/// The fractional part is right-padded with zeros to three digits and
/// truncated beyond three (so `.5` is 500 ms and `.1234` is 123 ms).
/// Defensive on shape: empty input, anything other than three
/// colon-separated parts, or an unparsable component yields 0. Component
/// values are not range-checked; negative or over-range parts flow
/// through the arithmetic unchanged.
pub fn offset_to_millis(text: &str) -> i64 {
    if text.is_empty() {
        return 0;
    }

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 3 {
        return 0;
    }

    let seconds_parts: Vec<&str> = parts[2].split('.').collect();

    let Ok(hours) = parts[0].trim().parse::<i64>() else {
        return 0;
    };
    let Ok(minutes) = parts[1].trim().parse::<i64>() else {
        return 0;
    };
    let Ok(seconds) = seconds_parts[0].trim().parse::<i64>() else {
        return 0;
    };

    let mut millis = 0;
    if let Some(fraction) = seconds_parts.get(1) {
        let padded = format!("{:0<3}", fraction);
        let Some(leading) = padded.get(..3) else {
            return 0;
        };
        let Ok(value) = leading.parse::<i64>() else {
            return 0;
        };
        millis = value;
    }

    (hours * 3600 + minutes * 60 + seconds) * 1000 + millis
}
