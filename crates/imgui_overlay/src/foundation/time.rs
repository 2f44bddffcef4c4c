//! Frame timing

use std::time::Duration;

/// Nominal frame time used when the host reports no forward progress
pub const FALLBACK_FRAME_TIME: f32 = 1.0 / 60.0;

/// Timing information handed over by the host once per frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds elapsed since the previous frame; may be zero or negative when
    /// the host clock stalls or is rewound
    pub elapsed_seconds: f64,
    /// Seconds elapsed since the host started
    pub total_seconds: f64,
}

impl FrameTime {
    /// Create frame timing from raw seconds
    pub const fn new(elapsed_seconds: f64, total_seconds: f64) -> Self {
        Self { elapsed_seconds, total_seconds }
    }

    /// Delta time to feed the GUI library
    ///
    /// Never zero or negative: non-positive elapsed time yields `fallback`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn delta_time(&self, fallback: f32) -> f32 {
        let delta = self.elapsed_seconds as f32;
        if delta > 0.0 {
            delta
        } else {
            fallback
        }
    }
}

impl From<Duration> for FrameTime {
    fn from(elapsed: Duration) -> Self {
        Self::new(elapsed.as_secs_f64(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_delta_is_kept() {
        let time = FrameTime::new(0.025, 10.0);
        assert!((time.delta_time(FALLBACK_FRAME_TIME) - 0.025).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_delta_falls_back() {
        let time = FrameTime::new(0.0, 10.0);
        assert_eq!(time.delta_time(FALLBACK_FRAME_TIME), FALLBACK_FRAME_TIME);
    }

    #[test]
    fn test_negative_delta_falls_back() {
        let time = FrameTime::new(-0.5, 10.0);
        let delta = time.delta_time(FALLBACK_FRAME_TIME);
        assert_eq!(delta, FALLBACK_FRAME_TIME);
        assert!(delta > 0.0);
    }

    #[test]
    fn test_from_duration() {
        let time = FrameTime::from(Duration::from_millis(20));
        assert!((time.delta_time(FALLBACK_FRAME_TIME) - 0.02).abs() < 1e-6);
    }
}
