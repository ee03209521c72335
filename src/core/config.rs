// Renderer configuration shared between the mount handle and the frame loop.
//
// All fields can be updated on a live session except the three reinit keys
// (`antialias`, `liquid`, `noise_amount`), which change the composition of
// the render pipeline and force a full session teardown + recreate.

/// Shape rasterized inside each pixel cell. Discriminants match the shader's
/// shape selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Shape {
    #[default]
    Square = 0,
    Circle = 1,
    Triangle = 2,
    Diamond = 3,
}

impl Shape {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "square" => Some(Shape::Square),
            "circle" => Some(Shape::Circle),
            "triangle" => Some(Shape::Triangle),
            "diamond" => Some(Shape::Diamond),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub variant: Shape,
    pub pixel_size: f32,
    pub color: [f32; 3],
    pub antialias: bool,
    pub pattern_scale: f32,
    pub pattern_density: f32,
    pub pixel_jitter: f32,
    pub enable_ripples: bool,
    pub ripple_speed: f32,
    pub ripple_thickness: f32,
    pub ripple_intensity: f32,
    pub liquid: bool,
    pub liquid_strength: f32,
    pub liquid_radius: f32,
    pub liquid_wobble_speed: f32,
    pub auto_pause_offscreen: bool,
    pub speed: f32,
    pub transparent: bool,
    pub edge_fade: f32,
    pub noise_amount: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            variant: Shape::Square,
            pixel_size: 3.0,
            color: DEFAULT_COLOR,
            antialias: true,
            pattern_scale: 2.0,
            pattern_density: 1.0,
            pixel_jitter: 0.0,
            enable_ripples: true,
            ripple_speed: 0.3,
            ripple_thickness: 0.1,
            ripple_intensity: 1.0,
            liquid: false,
            liquid_strength: 0.1,
            liquid_radius: 1.0,
            liquid_wobble_speed: 4.5,
            auto_pause_offscreen: true,
            speed: 0.5,
            transparent: true,
            edge_fade: 0.5,
            noise_amount: 0.0,
        }
    }
}

/// Mid-green default, `#22c55e`.
pub const DEFAULT_COLOR: [f32; 3] = [
    0x22 as f32 / 255.0,
    0xc5 as f32 / 255.0,
    0x5e as f32 / 255.0,
];

impl RenderConfig {
    /// Whether switching from `prev` to `self` requires rebuilding the whole
    /// graphics session. True only for the reinit keys; every other field is
    /// pushed onto the live session via the per-frame uniform snapshot.
    pub fn needs_reinit(&self, prev: &RenderConfig) -> bool {
        self.antialias != prev.antialias
            || self.liquid != prev.liquid
            || self.noise_amount != prev.noise_amount
    }

    /// RGBA clear color for the frame's final target. Fully transparent when
    /// compositing over the page, opaque black otherwise. `transparent` is a
    /// live field, so this is re-evaluated every frame.
    pub fn clear_color(&self) -> [f64; 4] {
        if self.transparent {
            [0.0, 0.0, 0.0, 0.0]
        } else {
            [0.0, 0.0, 0.0, 1.0]
        }
    }
}

/// Parse `#rgb` or `#rrggbb` into linear-ish 0..1 RGB. Returns `None` for
/// anything else rather than guessing.
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let (r, g, b) = match hex.len() {
        3 => {
            let d = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
            (d(0)? * 17, d(1)? * 17, d(2)? * 17)
        }
        6 => {
            let d = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            (d(0)?, d(2)?, d(4)?)
        }
        _ => return None,
    };
    Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
}
