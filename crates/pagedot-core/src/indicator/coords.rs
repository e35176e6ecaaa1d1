//! Progress mapping: raw scroll positions from a paged container into the
//! (selecting index, progress) pair the rest of the engine consumes.

use super::state::Indicator;

/// Map a raw `(position, offset)` pair from a paged container to the
/// transition target and its progress.
///
/// `position` is the page currently leftmost under scroll and `offset` is how
/// far scroll has moved toward `position + 1`, in `[0, 1)`. With `reversed`
/// layouts the direction mirrors: `position` itself is the target and the
/// progress runs as `1 - offset`.
///
/// Pure and stateless; the indicator is only read for its count.
pub fn progress(indicator: &Indicator, position: usize, offset: f32, reversed: bool) -> (usize, f32) {
    let last = indicator.count().saturating_sub(1);

    if offset == 0.0 {
        // No transition in flight.
        return (position.min(last), 0.0);
    }

    let (selecting, progress) = if reversed {
        (position, 1.0 - offset)
    } else {
        (position + 1, offset)
    };

    (selecting.min(last), progress.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(count: usize) -> Indicator {
        let mut ind = Indicator::new();
        ind.set_count(count);
        ind
    }

    #[test]
    fn test_zero_offset_is_identity() {
        let ind = indicator(5);
        for position in 0..5 {
            assert_eq!(progress(&ind, position, 0.0, false), (position, 0.0));
        }
    }

    #[test]
    fn test_forward_targets_next_page() {
        let ind = indicator(5);
        assert_eq!(progress(&ind, 2, 0.6, false), (3, 0.6));
    }

    #[test]
    fn test_reversed_mirrors_direction() {
        let ind = indicator(5);
        let (selecting, p) = progress(&ind, 2, 0.6, true);
        assert_eq!(selecting, 2);
        assert!((p - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_output_clamped_to_count() {
        let ind = indicator(3);
        // Forward from the last page cannot select past the end.
        assert_eq!(progress(&ind, 2, 0.5, false), (2, 0.5));
        // Out-of-range raw positions clamp too.
        assert_eq!(progress(&ind, 9, 0.0, false), (2, 0.0));
    }

    #[test]
    fn test_empty_indicator_saturates() {
        let ind = indicator(0);
        assert_eq!(progress(&ind, 3, 0.4, false), (0, 0.4));
    }
}
