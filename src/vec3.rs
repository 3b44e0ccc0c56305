use crate::{Axis, Vec2, Vec4};

/// 3-component `f32` vector.
///
/// Slots are named `x y z`, `i j k`, `r g b` or `s t p`.
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    components: [f32; 3],
}

const _: () = assert!(std::mem::size_of::<Vec3>() == 12);

impl_vector!(Vec3, 3);

impl_accessors!(Vec3 {
    0 => x / x_mut, i / i_mut, r / r_mut, s / s_mut;
    1 => y / y_mut, j / j_mut, g / g_mut, t / t_mut;
    2 => z / z_mut, k / k_mut, b / b_mut, p / p_mut;
});

#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

impl Vec3 {
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            components: [x, y, z],
        }
    }

    /// Reorders components, `Axis::W` wraps around to `x`.
    #[inline]
    pub const fn swizzle(self, a: Axis, b: Axis, c: Axis) -> Self {
        Self::new(self.component(a), self.component(b), self.component(c))
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y() * other.z() - other.y() * self.z(),
            self.z() * other.x() - other.z() * self.x(),
            self.x() * other.y() - other.x() * self.y(),
        )
    }

    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x(), self.y(), self.z(), w)
    }

    #[inline]
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }
}
