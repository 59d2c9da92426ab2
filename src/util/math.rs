//! Integer helpers for window clipping and rounded means.

use crate::util::{GrayAreaError, GrayAreaResult};

/// Clips `[center - radius, center + radius]` to `[0, len)`.
///
/// Requires `center < len`.
pub(crate) fn clip_span(center: usize, radius: usize, len: usize) -> (usize, usize) {
    debug_assert!(center < len);
    let lo = center.saturating_sub(radius);
    let hi = center.saturating_add(radius).min(len - 1);
    (lo, hi)
}

/// Mean of `count` samples summing to `sum`, rounded half up.
pub(crate) fn rounded_mean(sum: u64, count: u64) -> u64 {
    debug_assert!(count > 0);
    (sum + count / 2) / count
}

/// Returns `width * height`, or `InvalidDimensions` on overflow.
pub(crate) fn checked_area(width: usize, height: usize) -> GrayAreaResult<usize> {
    width
        .checked_mul(height)
        .ok_or(GrayAreaError::InvalidDimensions { width, height })
}

/// Allocates a zeroed vector, reporting allocation failure as an error.
pub(crate) fn try_zeroed<T: Copy + Default>(len: usize) -> GrayAreaResult<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| GrayAreaError::AllocationFailed {
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
    data.resize(len, T::default());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::{checked_area, clip_span, rounded_mean, try_zeroed};
    use crate::util::GrayAreaError;

    #[test]
    fn clip_span_shrinks_at_borders() {
        assert_eq!(clip_span(0, 2, 10), (0, 2));
        assert_eq!(clip_span(9, 2, 10), (7, 9));
        assert_eq!(clip_span(5, 2, 10), (3, 7));
        assert_eq!(clip_span(1, usize::MAX, 3), (0, 2));
    }

    #[test]
    fn rounded_mean_rounds_half_up() {
        assert_eq!(rounded_mean(255, 2), 128);
        assert_eq!(rounded_mean(254, 2), 127);
        assert_eq!(rounded_mean(10, 4), 3);
        assert_eq!(rounded_mean(9, 4), 2);
        assert_eq!(rounded_mean(7, 1), 7);
    }

    #[test]
    fn checked_area_detects_overflow() {
        assert_eq!(checked_area(3, 4), Ok(12));
        assert_eq!(
            checked_area(usize::MAX, 2),
            Err(GrayAreaError::InvalidDimensions {
                width: usize::MAX,
                height: 2,
            })
        );
    }

    #[test]
    fn try_zeroed_reports_impossible_requests() {
        assert_eq!(try_zeroed::<u64>(4).unwrap(), vec![0u64; 4]);
        let err = try_zeroed::<u64>(usize::MAX / 4).unwrap_err();
        assert!(matches!(err, GrayAreaError::AllocationFailed { .. }));
    }
}
