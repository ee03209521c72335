// Fixed-capacity ring of recent pointer-down events driving interactive
// ripples in the field shader.

use super::constants::{MAX_CLICKS, RING_DAMP_R, RING_DAMP_T};
use glam::Vec2;

/// Sentinel position for unused slots; the shader skips any entry whose x is
/// negative, so fresh registers contribute nothing.
pub const CLICK_SENTINEL: Vec2 = Vec2::new(-1.0, -1.0);

#[derive(Clone, Debug)]
pub struct ClickRegister {
    positions: [Vec2; MAX_CLICKS],
    times: [f32; MAX_CLICKS],
    cursor: usize,
}

impl Default for ClickRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickRegister {
    pub fn new() -> Self {
        Self {
            positions: [CLICK_SENTINEL; MAX_CLICKS],
            times: [0.0; MAX_CLICKS],
            cursor: 0,
        }
    }

    /// Record a pointer-down at `pos` (framebuffer pixels, y-down) stamped
    /// with the current shader time. Overwrites the oldest slot once the ring
    /// is full; entries are never deleted, only overwritten.
    pub fn push(&mut self, pos: Vec2, time: f32) {
        self.positions[self.cursor] = pos;
        self.times[self.cursor] = time;
        self.cursor = (self.cursor + 1) % MAX_CLICKS;
    }

    pub fn live_count(&self) -> usize {
        self.positions.iter().filter(|p| p.x >= 0.0).count()
    }

    pub fn capacity(&self) -> usize {
        MAX_CLICKS
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entry(&self, i: usize) -> (Vec2, f32) {
        (self.positions[i], self.times[i])
    }

    /// Reference evaluation of one ripple ring, the same term the field
    /// shader computes per click: a Gaussian band expanding at `speed`,
    /// damped over time and distance from the click. Rings combine by
    /// maximum, never by sum, so coincident clicks cannot over-brighten.
    pub fn ring_profile(r: f32, t: f32, speed: f32, thickness: f32, intensity: f32) -> f32 {
        let band = (-((r - speed * t) / thickness).powi(2)).exp();
        band * (-RING_DAMP_T * t).exp() * (-RING_DAMP_R * r).exp() * intensity
    }

    /// Pack the ring for the uniform buffer: xy = position, z = click time,
    /// w unused (uniform arrays need 16-byte element stride).
    pub fn slots(&self) -> [[f32; 4]; MAX_CLICKS] {
        let mut out = [[0.0; 4]; MAX_CLICKS];
        for i in 0..MAX_CLICKS {
            out[i] = [
                self.positions[i].x,
                self.positions[i].y,
                self.times[i],
                0.0,
            ];
        }
        out
    }
}
