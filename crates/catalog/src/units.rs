/// Parsers for the free-form dimensioned strings upstream feeds carry.
/// Both return `None` on garbage; callers substitute rule-specific
/// fallbacks rather than failing the whole analysis.

/// Parse a wattage out of text like "650W", "TDP: 125 W" or plain "450".
#[must_use]
pub fn parse_watts(text: &str) -> Option<u32> {
    first_number(text).map(|n| n as u32)
}

/// Parse a length in millimeters from text like "170mm" or "17 cm".
#[must_use]
pub fn parse_millimeters(text: &str) -> Option<f32> {
    let value = first_number(text)?;
    if text.to_lowercase().contains("cm") {
        Some(value * 10.0)
    } else {
        Some(value)
    }
}

/// First decimal number in the text, ignoring thousands separators.
fn first_number(text: &str) -> Option<f32> {
    let mut start = None;
    let mut end = 0;
    for (i, c) in text.char_indices() {
        if c.is_ascii_digit() || (start.is_some() && (c == '.' || c == ',')) {
            if start.is_none() {
                start = Some(i);
            }
            end = i + c.len_utf8();
        } else if start.is_some() {
            break;
        }
    }
    let slice = &text[start?..end];
    slice.replace(',', "").parse::<f32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watts_from_common_shapes() {
        assert_eq!(parse_watts("650W"), Some(650));
        assert_eq!(parse_watts("TDP: 125 W"), Some(125));
        assert_eq!(parse_watts("450"), Some(450));
        assert_eq!(parse_watts("1,000W"), Some(1000));
    }

    #[test]
    fn watts_from_garbage_is_none() {
        assert_eq!(parse_watts(""), None);
        assert_eq!(parse_watts("unknown"), None);
    }

    #[test]
    fn millimeters_with_unit_conversion() {
        assert_eq!(parse_millimeters("170mm"), Some(170.0));
        assert_eq!(parse_millimeters("36.0 cm"), Some(360.0));
        assert_eq!(parse_millimeters("no idea"), None);
    }
}
