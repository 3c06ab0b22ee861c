/// timestep.rs
/// Frame time handed in by the host's fixed-timestep loop.
///
/// Two clocks per frame:
/// - Scaled dt: game time, slowed down during the goal celebration
/// - Unscaled dt: real time, used for windows that must not stretch in slow motion

/// Host fixed timestep (60 Hz).
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// One simulation step worth of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Game time (already multiplied by the engine time scale)
    pub dt: f32,
    /// Real time, independent of time scale
    pub unscaled_dt: f32,
}

impl FrameTime {
    pub fn new(dt: f32, unscaled_dt: f32) -> Self {
        Self { dt, unscaled_dt }
    }

    /// Same value on both clocks (time scale 1.0).
    pub fn uniform(dt: f32) -> Self {
        Self { dt, unscaled_dt: dt }
    }

    /// Frame at the given time scale: game time slowed, real time untouched.
    pub fn scaled(unscaled_dt: f32, time_scale: f32) -> Self {
        Self { dt: unscaled_dt * time_scale, unscaled_dt }
    }
}

/// Negative or non-finite steps count as zero.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.5), 0.5);
        assert_eq!(sanitize_dt(-1.0), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_scaled_frame_keeps_real_time() {
        let frame = FrameTime::scaled(FIXED_DT, 0.3);
        assert!((frame.dt - FIXED_DT * 0.3).abs() < 1e-6);
        assert_eq!(frame.unscaled_dt, FIXED_DT);
    }

    #[test]
    fn test_ticks_per_second() {
        let ticks = (1.0 / FIXED_DT).round() as u32;
        assert_eq!(ticks, 60);
    }
}
