#[macro_use]
mod vector;

mod axis;
mod mask;
mod vec2;
mod vec3;
mod vec4;

pub use axis::*;
pub use mask::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
pub use vector::Vector;
pub use vectors_macro::*;
