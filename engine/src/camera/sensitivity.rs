//! Pointer Sensitivity Curve
//!
//! Maps pointer-motion magnitude to a camera-rotation multiplier. Small,
//! precise motions rotate gently; fast flicks get amplified. The curve is a
//! collaborator supplied at construction time, so hosts can tune or replace
//! the response entirely.

use serde::{Deserialize, Serialize};

/// A configured mapping from pointer-delta magnitude to a sensitivity
/// multiplier. Expected to be monotonic in practice, though nothing here
/// enforces it.
pub trait SensitivityCurve {
    /// Evaluate the multiplier for one tick's pointer-motion magnitude.
    fn evaluate(&self, magnitude: f32) -> f32;
}

/// Constant sensitivity, handy for hosts that want a flat response.
impl SensitivityCurve for f32 {
    fn evaluate(&self, _magnitude: f32) -> f32 {
        *self
    }
}

/// One key of a [`ResponseCurve`]: a sample point with incoming and
/// outgoing tangents (slope per unit of magnitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub magnitude: f32,
    pub value: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
}

impl Keyframe {
    pub fn new(magnitude: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            magnitude,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// Piecewise cubic-Hermite sensitivity curve.
///
/// Evaluates the Hermite segment between the two bracketing keys; outside
/// the keyed range the end values are held constant. An empty curve
/// evaluates to the neutral multiplier 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCurve {
    keys: Vec<Keyframe>,
}

impl Default for ResponseCurve {
    /// The shipped pointer response: multiplier 0.5 at rest, ramping
    /// (initial slope 5.0) to 2.5 at magnitude 1 and held there.
    fn default() -> Self {
        Self::new(vec![
            Keyframe::new(0.0, 0.5, 0.0, 5.0),
            Keyframe::new(1.0, 2.5, 0.0, 0.0),
        ])
    }
}

impl ResponseCurve {
    /// Build a curve from keys; keys are sorted by magnitude.
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));
        Self { keys }
    }

    /// The curve's keys, sorted by magnitude.
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }
}

impl SensitivityCurve for ResponseCurve {
    fn evaluate(&self, magnitude: f32) -> f32 {
        let Some(first) = self.keys.first() else {
            return 1.0;
        };
        let last = self.keys.last().unwrap_or(first);

        if magnitude <= first.magnitude {
            return first.value;
        }
        if magnitude >= last.magnitude {
            return last.value;
        }

        // Find the bracketing pair and evaluate the Hermite segment.
        for pair in self.keys.windows(2) {
            let (k0, k1) = (pair[0], pair[1]);
            if magnitude > k1.magnitude {
                continue;
            }
            let span = k1.magnitude - k0.magnitude;
            if span <= f32::EPSILON {
                return k1.value;
            }
            let u = (magnitude - k0.magnitude) / span;
            let u2 = u * u;
            let u3 = u2 * u;
            let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
            let h10 = u3 - 2.0 * u2 + u;
            let h01 = -2.0 * u3 + 3.0 * u2;
            let h11 = u3 - u2;
            return h00 * k0.value
                + h10 * span * k0.out_tangent
                + h01 * k1.value
                + h11 * span * k1.in_tangent;
        }

        last.value
    }
}
