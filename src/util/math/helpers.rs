use chrono::TimeDelta;

/// Advances a ring index by one, wrapping at `len`.
pub fn next_ring_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + 1) % len }
}

/// Converts a per-tick delta in seconds into a `TimeDelta` with microsecond resolution.
///
/// Negative and non-finite deltas are treated as zero.
#[allow(clippy::cast_possible_truncation)]
pub fn secs_to_delta(secs: f32) -> TimeDelta {
    if !secs.is_finite() || secs <= 0.0 {
        return TimeDelta::zero();
    }
    TimeDelta::microseconds((f64::from(secs) * 1_000_000.0).round() as i64)
}
