//! English labels for 7Timer! civillight weather codes.

/// Code -> label table. Codes double as icon file stems.
pub const WEATHER_LABELS: &[(&str, &str)] = &[
    ("clear", "Clear"),
    ("pcloudy", "Partly Cloudy"),
    ("mcloudy", "Mostly Cloudy"),
    ("cloudy", "Cloudy"),
    ("humid", "Foggy"),
    ("lightrain", "Light Rain"),
    ("oshower", "Occasional Showers"),
    ("ishower", "Isolated Showers"),
    ("lightsnow", "Light Snow"),
    ("rain", "Rain"),
    ("snow", "Snow"),
    ("rainsnow", "Mixed"),
    ("ts", "Thunderstorm Possible"),
    ("tsrain", "Thunderstorm"),
    ("windy", "Windy"),
];

/// Human-readable label for a weather code; unknown codes come back unchanged.
pub fn weather_label(code: &str) -> &str {
    WEATHER_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(code, |(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_codes() {
        assert_eq!(weather_label("clear"), "Clear");
        assert_eq!(weather_label("pcloudy"), "Partly Cloudy");
        assert_eq!(weather_label("tsrain"), "Thunderstorm");
    }

    #[test]
    fn test_unknown_code_falls_back_to_itself() {
        assert_eq!(weather_label("xyz"), "xyz");
        assert_eq!(weather_label(""), "");
        // lookup is exact
        assert_eq!(weather_label("Clear"), "Clear");
        assert_eq!(weather_label("CLEAR"), "CLEAR");
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = WEATHER_LABELS.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes.len(), WEATHER_LABELS.len());
    }
}
