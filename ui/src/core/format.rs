//! Formatting helpers for presenting run metrics.

/// Shown when a run never recovered.
pub const PLACEHOLDER: &str = "—";

/// Fixed-point text with `decimals` places.
///
/// The stored binary value is rounded as-is, so `0.15` (held as
/// `0.1499…`) gives `"0.1"`. Only exact ties round away from zero
/// (`3.25` → `"3.3"`, `42.5` → `"43"`); `format!` alone would send those to
/// the even neighbour.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    // The fused residual is zero only when `value * factor` was exact.
    let exact_tie = scaled.fract().abs() == 0.5 && value.mul_add(factor, -scaled) == 0.0;
    let value = if exact_tie {
        (scaled.trunc() + scaled.signum()) / factor
    } else {
        value
    };

    let text = format!("{value:.decimals$}");
    // Keep `-0` out of the labels.
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    to_fixed(value, decimals)
}

/// Inserts `,` between groups of three integer digits (`12345.6` → `12,345.6`).
pub fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}

pub fn format_km(value: f64) -> String {
    format!("{} km", format_number(value, 1))
}

pub fn format_seconds(value: f64) -> String {
    format!("{}s", format_number(value, 0))
}

pub fn format_recovery(value: Option<f64>) -> String {
    match value {
        Some(seconds) => format_seconds(seconds),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovery_rounds_to_whole_seconds() {
        assert_eq!(format_recovery(None), "—");
        assert_eq!(format_recovery(Some(42.6)), "43s");
        assert_eq!(format_recovery(Some(42.5)), "43s");
        assert_eq!(format_recovery(Some(0.0)), "0s");
        assert_eq!(format_recovery(Some(0.2)), "0s");
    }

    #[test]
    fn km_keeps_one_decimal() {
        assert_eq!(format_km(12.0), "12.0 km");
        assert_eq!(format_km(3.25), "3.3 km");
        assert_eq!(format_km(0.04), "0.0 km");
    }

    #[test]
    fn inexact_halves_round_by_their_stored_value() {
        // 0.15, 1.15 and 0.35 sit just below the tie in binary.
        assert_eq!(format_km(0.15), "0.1 km");
        assert_eq!(format_km(1.15), "1.1 km");
        assert_eq!(format_km(0.35), "0.3 km");
        // Exact ties still round away from zero.
        assert_eq!(format_recovery(Some(2.5)), "3s");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-2.5, 0), "-3");
    }

    #[test]
    fn negative_zero_is_dropped() {
        assert_eq!(to_fixed(-0.04, 1), "0.0");
        assert_eq!(to_fixed(-0.0, 0), "0");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("12345.50"), "12,345.50");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("-1500000"), "-1,500,000");
        assert_eq!(group_thousands("0.2"), "0.2");
    }

    #[test]
    fn non_finite_values_fall_back_to_placeholder() {
        assert_eq!(format_number(f64::NAN, 2), "—");
    }
}
