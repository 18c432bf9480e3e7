//! Display Formatting
//!
//! Cell text for optional product attributes. Missing values render as a
//! dash; present values render as-is, including zero.

/// Placeholder for a missing attribute
pub const MISSING: &str = "-";

pub fn display_text(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING.to_string(),
    }
}

pub fn display_integer(value: Option<i64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

/// Trim trailing zeros so `249.0` shows as `249` and `4.50` as `4.5`
pub fn display_number(value: Option<f64>) -> String {
    let Some(v) = value else {
        return MISSING.to_string();
    };
    let text = format!("{v:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

/// Price in rupees
pub fn display_price(value: Option<f64>) -> String {
    match value {
        Some(_) => format!("₹{}", display_number(value)),
        None => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_render_dash() {
        assert_eq!(display_text(None), "-");
        assert_eq!(display_text(Some("")), "-");
        assert_eq!(display_integer(None), "-");
        assert_eq!(display_price(None), "-");
    }

    #[test]
    fn test_zero_is_not_missing() {
        assert_eq!(display_integer(Some(0)), "0");
        assert_eq!(display_number(Some(0.0)), "0");
        assert_eq!(display_price(Some(0.0)), "₹0");
    }

    #[test]
    fn test_number_trimming() {
        assert_eq!(display_number(Some(249.0)), "249");
        assert_eq!(display_number(Some(4.5)), "4.5");
        assert_eq!(display_number(Some(7.126)), "7.13");
    }
}
