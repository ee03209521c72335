pub mod clicks;
pub mod config;
pub mod constants;
pub mod easing;
pub mod sequencer;
pub mod trail;
pub mod uniforms;

pub use clicks::*;
pub use config::*;
pub use constants::*;
pub use easing::*;
pub use sequencer::*;
pub use trail::*;
pub use uniforms::*;

// Shaders bundled as string constants
pub static FIELD_WGSL: &str = include_str!("../../shaders/field.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
