use crate::{Axis, Vec3};

/// 4-component `f32` vector.
///
/// Slots are named `x y z w`, `r g b a` or `s t p q`. The `i j k` view shares
/// `w` with the position view.
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4 {
    components: [f32; 4],
}

const _: () = assert!(std::mem::size_of::<Vec4>() == 16);

impl_vector!(Vec4, 4);

impl_accessors!(Vec4 {
    0 => x / x_mut, i / i_mut, r / r_mut, s / s_mut;
    1 => y / y_mut, j / j_mut, g / g_mut, t / t_mut;
    2 => z / z_mut, k / k_mut, b / b_mut, p / p_mut;
    3 => w / w_mut, a / a_mut, q / q_mut;
});

#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vec4::new(x, y, z, w)
}

impl Vec4 {
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            components: [x, y, z, w],
        }
    }

    #[inline]
    pub const fn swizzle(self, a: Axis, b: Axis, c: Axis, d: Axis) -> Self {
        Self::new(
            self.component(a),
            self.component(b),
            self.component(c),
            self.component(d),
        )
    }

    /// Cross product of the `xyz` parts.
    ///
    /// `w` of the result is always `1.0`, not `0.0`, so the result reads as a
    /// homogeneous point rather than a direction.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        self.truncate().cross(other.truncate()).extend(1.0)
    }

    /// `1 - c` for the color channels, alpha passes through.
    ///
    /// Channels are expected in `0..=1`, values outside produce out of range
    /// colors.
    #[inline]
    pub fn invert_color(self) -> Self {
        Self::new(1.0 - self.r(), 1.0 - self.g(), 1.0 - self.b(), self.a())
    }

    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }
}
