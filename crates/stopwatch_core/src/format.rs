//! `MM:SS.CC` rendering of elapsed time.

pub const CENTIS_PER_SECOND: u64 = 100;
const CENTIS_PER_MINUTE: u64 = 60 * CENTIS_PER_SECOND;

// Absorbs binary representation error in decimal inputs such as 0.29 or 65.23.
const CENTI_ROUNDING_SLACK: f64 = 1e-6;

/// Converts seconds to whole centiseconds, truncating toward zero.
///
/// Negative and NaN inputs map to zero; values past `u64::MAX` saturate.
pub fn seconds_to_centis(seconds: f64) -> u64 {
    if seconds.is_nan() || seconds <= 0.0 {
        return 0;
    }
    (seconds * CENTIS_PER_SECOND as f64 + CENTI_ROUNDING_SLACK).floor() as u64
}

/// Formats a centisecond count as `MM:SS.CC`.
///
/// The minutes field is padded to two digits and grows past 99 minutes.
pub fn format_centis(centis: u64) -> String {
    let minutes = centis / CENTIS_PER_MINUTE;
    let seconds = (centis / CENTIS_PER_SECOND) % 60;
    let hundredths = centis % CENTIS_PER_SECOND;
    format!("{minutes:02}:{seconds:02}.{hundredths:02}")
}

pub fn format_time(seconds: f64) -> String {
    format_centis(seconds_to_centis(seconds))
}

#[cfg(test)]
mod tests {
    use super::{format_centis, format_time, seconds_to_centis};

    #[test]
    fn formats_zero() {
        assert_eq!(format_time(0.0), "00:00.00");
    }

    #[test]
    fn formats_minutes_seconds_and_hundredths() {
        assert_eq!(format_time(65.23), "01:05.23");
        assert_eq!(format_time(3599.99), "59:59.99");
        assert_eq!(format_time(1.0), "00:01.00");
    }

    #[test]
    fn keeps_hundredths_that_are_not_exact_in_binary() {
        assert_eq!(format_time(0.29), "00:00.29");
        assert_eq!(format_time(0.57), "00:00.57");
        assert_eq!(format_time(10.07), "00:10.07");
    }

    #[test]
    fn truncates_below_a_hundredth() {
        assert_eq!(format_time(1.239), "00:01.23");
        assert_eq!(format_time(0.009), "00:00.00");
    }

    #[test]
    fn values_within_slack_of_a_hundredth_round_up_to_it() {
        assert_eq!(format_time(0.0099999999), "00:00.01");
        assert_eq!(format_time(59.9999999999), "01:00.00");
        assert_eq!(format_time(0.0099), "00:00.00");
    }

    #[test]
    fn minutes_field_widens_past_ninety_nine() {
        assert_eq!(format_time(6000.0), "100:00.00");
        assert_eq!(format_centis(123 * 6000 + 4 * 100 + 5), "123:04.05");
    }

    #[test]
    fn out_of_range_inputs_stay_total() {
        assert_eq!(format_time(-3.5), "00:00.00");
        assert_eq!(format_time(f64::NAN), "00:00.00");
        assert_eq!(seconds_to_centis(f64::INFINITY), u64::MAX);
    }

    #[test]
    fn integer_and_float_paths_agree() {
        for centis in [0_u64, 1, 99, 100, 6_523, 359_999, 360_000] {
            let seconds = centis as f64 / 100.0;
            assert_eq!(format_time(seconds), format_centis(centis), "{centis}");
        }
    }
}
