// Pointer trail raster consumed by the fluid-distortion post pass.
//
// A small RGBA texture encodes recent pointer motion: red/green hold the
// point's unit velocity remapped to 0..1, blue holds its intensity. Points
// decay over [`TRAIL_MAX_AGE`] frames and drift along their velocity while
// they fade. The raster is rebuilt from scratch every frame and flagged
// dirty so the render loop re-uploads it.

use super::constants::{
    TRAIL_ALPHA, TRAIL_BASE_RADIUS, TRAIL_FORCE_SCALE, TRAIL_MAX_AGE, TRAIL_RAMP_IN, TRAIL_SIZE,
};
use super::easing::Easing;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    /// Normalized 0..1, y-down to match texture addressing.
    pub pos: Vec2,
    pub age: u32,
    /// 0..1 scalar derived from pointer displacement.
    pub force: f32,
    /// Unit direction of travel.
    pub vel: Vec2,
}

pub struct TrailTexture {
    pixels: Vec<u8>,
    points: SmallVec<[TrailPoint; 32]>,
    last: Option<Vec2>,
    radius: f32,
    dirty: bool,
}

impl Default for TrailTexture {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailTexture {
    pub fn new() -> Self {
        Self {
            pixels: vec![0; TRAIL_SIZE * TRAIL_SIZE * 4],
            points: SmallVec::new(),
            last: None,
            radius: TRAIL_BASE_RADIUS,
            dirty: true,
        }
    }

    pub fn set_radius_scale(&mut self, scale: f32) {
        self.radius = TRAIL_BASE_RADIUS * scale;
    }

    /// Register a pointer position (normalized 0..1). The first touch only
    /// seeds the previous-position register; subsequent touches with zero
    /// displacement are rejected outright.
    pub fn add_touch(&mut self, norm: Vec2) {
        let mut force = 0.0;
        let mut vel = Vec2::ZERO;
        if let Some(last) = self.last {
            let d = norm - last;
            if d == Vec2::ZERO {
                return;
            }
            let dd = d.length_squared();
            let len = dd.sqrt();
            vel = d / if len > 0.0 { len } else { 1.0 };
            force = (dd * TRAIL_FORCE_SCALE).min(1.0);
        }
        self.last = Some(norm);
        self.points.push(TrailPoint {
            pos: norm,
            age: 0,
            force,
            vel,
        });
    }

    /// Advance every point one frame and re-raster the texture.
    pub fn update(&mut self) {
        let speed = 1.0 / TRAIL_MAX_AGE as f32;
        for p in self.points.iter_mut() {
            let f = p.force * speed * (1.0 - p.age as f32 / TRAIL_MAX_AGE as f32);
            p.pos += p.vel * f;
            p.age += 1;
        }
        self.points.retain(|p| p.age <= TRAIL_MAX_AGE);

        self.pixels.fill(0);
        for p in &self.points {
            splat(&mut self.pixels, self.radius, p);
        }
        self.dirty = true;
    }
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// True when the raster changed since the last [`take_dirty`] call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn splat(pixels: &mut [u8], radius: f32, p: &TrailPoint) {
    let ramp = TRAIL_MAX_AGE as f32 * TRAIL_RAMP_IN;
    let age = p.age as f32;
    let mut intensity = if age < ramp {
        Easing::OutSine.apply(age / ramp)
    } else {
        Easing::OutQuad
            .apply(1.0 - (age - ramp) / (TRAIL_MAX_AGE as f32 - ramp))
            .max(0.0)
    };
    intensity *= p.force;
    if intensity <= 0.0 {
        return;
    }

    let rgb = [(p.vel.x + 1.0) * 0.5, (p.vel.y + 1.0) * 0.5, intensity];
    let center = p.pos * TRAIL_SIZE as f32;
    let r = radius.max(0.5);
    let reach = (r * 2.0).ceil() as i32;
    let cx = center.x.round() as i32;
    let cy = center.y.round() as i32;
    for y in (cy - reach).max(0)..=(cy + reach).min(TRAIL_SIZE as i32 - 1) {
        for x in (cx - reach).max(0)..=(cx + reach).min(TRAIL_SIZE as i32 - 1) {
            let dx = x as f32 + 0.5 - center.x;
            let dy = y as f32 + 0.5 - center.y;
            // Gaussian falloff, a soft-edged disc.
            let w = (-(dx * dx + dy * dy) / (r * r)).exp() * TRAIL_ALPHA * intensity;
            if w <= 0.0 {
                continue;
            }
            let idx = (y as usize * TRAIL_SIZE + x as usize) * 4;
            for c in 0..3 {
                let add = (rgb[c] * w * 255.0) as u16;
                let cur = pixels[idx + c] as u16;
                pixels[idx + c] = (cur + add).min(255) as u8;
            }
            pixels[idx + 3] = 255;
        }
    }
}
