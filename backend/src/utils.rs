/// Formats a restricted ISO8601 duration (PT1H2M3S) as a clock string:
/// "H:MM:SS" when hours are present, "M:SS" otherwise. Anything that does
/// not parse yields "N/A" instead of an error.
pub fn format_duration(duration: Option<&str>) -> String {
    const UNAVAILABLE: &str = "N/A";

    let Some(duration) = duration else {
        return UNAVAILABLE.to_string();
    };
    let Some(components) = duration.strip_prefix("PT") else {
        return UNAVAILABLE.to_string();
    };

    let mut hours = 0u64;
    let mut minutes = 0u64;
    let mut seconds = 0u64;
    let mut current_number = String::new();

    for ch in components.chars() {
        if ch.is_ascii_digit() {
            current_number.push(ch);
            continue;
        }
        let Ok(value) = current_number.parse::<u64>() else {
            return UNAVAILABLE.to_string();
        };
        match ch {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => return UNAVAILABLE.to_string(),
        }
        current_number.clear();
    }

    // Trailing digits without a unit suffix
    if !current_number.is_empty() {
        return UNAVAILABLE.to_string();
    }

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
