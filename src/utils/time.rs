//! Exact integer time arithmetic

use jiff::{SignedDuration, Timestamp};

/// Nanoseconds since the Unix epoch
#[inline]
pub fn epoch_nanos(time: Timestamp) -> i128 {
    time.as_nanosecond()
}

/// Absolute length of a duration in nanoseconds
#[inline]
pub fn duration_nanos(duration: SignedDuration) -> i128 {
    duration.as_nanos().abs()
}

/// Absolute difference of two epoch-nanosecond instants
#[inline]
pub fn abs_diff_nanos(a: i128, b: i128) -> i128 {
    (a - b).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_day_apart() {
        let a: Timestamp = "1984-08-28T00:00:00Z".parse().unwrap();
        let b: Timestamp = "1984-08-29T00:00:00Z".parse().unwrap();

        let diff = abs_diff_nanos(epoch_nanos(a), epoch_nanos(b));
        assert_eq!(diff, duration_nanos(SignedDuration::from_hours(24)));
        assert_eq!(diff, abs_diff_nanos(epoch_nanos(b), epoch_nanos(a)));
    }

    #[test]
    fn sub_second_precision() {
        let a: Timestamp = "2000-01-01T00:00:00.000000001Z".parse().unwrap();
        let b: Timestamp = "2000-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(abs_diff_nanos(epoch_nanos(a), epoch_nanos(b)), 1);
    }
}
