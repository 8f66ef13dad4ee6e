// easing curves shared by every per-floor gradient

use super::params::CurveKind;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Maps a normalized progress value onto an eased progress value.
/// Input outside [0, 1] is clamped first, so every curve starts at 0 and ends at 1.
pub fn apply_curve(t: f32, kind: CurveKind) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match kind {
        CurveKind::Linear => t,
        CurveKind::Smoothstep => t * t * (3.0 - 2.0 * t),
        CurveKind::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}
