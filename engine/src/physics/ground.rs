//! Ground Contact Detection
//!
//! A thin, stateless wrapper over the host's volumetric overlap query: the
//! character is grounded when a fixed-radius sphere at its ground-check
//! point overlaps any geometry on the configured layers.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Bitmask of collision layers a query is allowed to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerMask(u32);

impl LayerMask {
    /// No layers.
    pub const NONE: Self = Self(0);
    /// Every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Mask from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Mask selecting a single layer index (0..32).
    pub const fn layer(index: u32) -> Self {
        Self(1 << index)
    }

    /// Raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether this mask and `other` share any layer.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Union of two masks.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Host-side volumetric overlap query.
///
/// Implemented by the host engine's physics world; the core never resolves
/// geometry itself.
pub trait SpatialQuery {
    /// `true` when any geometry on `mask` overlaps the sphere.
    fn overlap_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool;
}

/// Per-tick ground-contact test with a fixed radius and layer mask.
#[derive(Debug, Clone, Copy)]
pub struct GroundDetector {
    radius: f32,
    mask: LayerMask,
}

impl GroundDetector {
    /// Build a detector; `radius` must already be validated positive.
    pub fn new(radius: f32, mask: LayerMask) -> Self {
        Self { radius, mask }
    }

    /// The probe radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The layers the probe may hit.
    pub fn mask(&self) -> LayerMask {
        self.mask
    }

    /// Query ground contact at the character's ground-check point.
    pub fn is_grounded(&self, query: &dyn SpatialQuery, position: Vec3) -> bool {
        query.overlap_sphere(position, self.radius, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Infinite floor plane on one layer set.
    struct FlatFloor {
        height: f32,
        layers: LayerMask,
    }

    impl SpatialQuery for FlatFloor {
        fn overlap_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
            mask.intersects(self.layers) && center.y - radius <= self.height
        }
    }

    #[test]
    fn test_grounded_when_probe_touches_floor() {
        let floor = FlatFloor {
            height: 0.0,
            layers: LayerMask::layer(3),
        };
        let detector = GroundDetector::new(0.4, LayerMask::layer(3));

        assert!(detector.is_grounded(&floor, Vec3::new(0.0, 0.3, 0.0)));
        assert!(!detector.is_grounded(&floor, Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_mask_mismatch_never_grounds() {
        let floor = FlatFloor {
            height: 0.0,
            layers: LayerMask::layer(3),
        };
        let detector = GroundDetector::new(0.4, LayerMask::layer(4));

        assert!(!detector.is_grounded(&floor, Vec3::ZERO));
    }

    #[test]
    fn test_layer_mask_operations() {
        let ground = LayerMask::layer(0);
        let props = LayerMask::layer(5);
        let both = ground.union(props);

        assert!(both.intersects(ground));
        assert!(both.intersects(props));
        assert!(!ground.intersects(props));
        assert_eq!(LayerMask::NONE.bits(), 0);
        assert!(LayerMask::ALL.intersects(ground));
    }
}
