/// Formats a number for output.
///
/// Finite integral values print without a fractional part, however large
/// (`3628800`, `1e21` as all of its digits). Other values print in the
/// shortest decimal form that round-trips to the same `f64` (`2.5`, `0.1`).
/// Negative zero prints as `0`.
///
/// ## Parameters
/// - `value`: The number to render.
///
/// ## Returns
/// The text `print` writes, without a trailing newline.
///
/// ## Example
/// ```
/// use reckon::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(-3.0), "-3");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    // `Display` for f64 never switches to exponent notation and already
    // prints the shortest round-trip digits.
    value.to_string()
}

/// Interprets a number as a condition: any nonzero value is true.
///
/// `NaN` compares unequal to zero and therefore counts as true.
#[must_use]
pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}

/// Converts a boolean into the number a comparison yields (`1` or `0`).
#[must_use]
pub fn bool_to_number(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(3_628_800.0), "3628800");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn fractions_use_shortest_round_trip_form() {
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(7.0 / 2.0), "3.5");
        assert_eq!(format_number(-1.5), "-1.5");
    }

    #[test]
    fn zero_has_no_sign() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn truthiness_and_comparison_results() {
        assert!(is_truthy(-1.0));
        assert!(is_truthy(f64::NAN));
        assert!(!is_truthy(-0.0));
        assert_eq!(bool_to_number(true), 1.0);
        assert_eq!(bool_to_number(false), 0.0);
    }
}
