//! Mouse Input Module
//!
//! Pointer-delta accumulation for one mouse device. Raw motion deltas
//! accumulate between ticks and are consumed atomically once per tick.

use glam::Vec2;

/// Accumulated raw pointer motion for one mouse device.
///
/// The platform event loop calls [`PointerState::accumulate`] whenever raw
/// motion arrives; the tick loop calls [`PointerState::consume`] exactly once
/// per tick, which returns the total motion since the previous tick and
/// resets it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    delta: Vec2,
}

impl PointerState {
    /// Create a state with zero accumulated delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add raw pointer motion (device units, typically pixels).
    #[inline]
    pub fn accumulate(&mut self, delta: Vec2) {
        self.delta += delta;
    }

    /// Return the accumulated delta and reset it to zero.
    #[inline]
    pub fn consume(&mut self) -> Vec2 {
        let delta = self.delta;
        self.delta = Vec2::ZERO;
        delta
    }

    /// Read the accumulated delta without resetting it.
    #[inline]
    pub fn peek(&self) -> Vec2 {
        self.delta
    }
}
