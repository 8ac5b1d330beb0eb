/// Utility helpers for On Repeat

/// Format a position in seconds as `m:ss`.
/// Fractions are dropped and anything negative or non-finite reads as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let mins = whole / 60;
    let secs = whole % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_known_values() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.4), "1:05");
        assert_eq!(format_time(3599.0), "59:59");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn bad_input_reads_as_zero() {
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    proptest! {
        #[test]
        fn seconds_are_always_two_digits(secs in 0.0f64..100_000.0) {
            let text = format_time(secs);
            let (mins, rest) = text.split_once(':').unwrap();
            prop_assert_eq!(rest.len(), 2);
            let total = mins.parse::<u64>().unwrap() * 60 + rest.parse::<u64>().unwrap();
            prop_assert_eq!(total, secs.floor() as u64);
        }
    }
}
