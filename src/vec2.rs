use crate::{Axis, Vec3};

/// 2-component `f32` vector.
///
/// `x`/`y` can also be read as `i`/`j`, `r`/`g` or `s`/`t`, every name reads
/// the same slot.
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    components: [f32; 2],
}

const _: () = assert!(std::mem::size_of::<Vec2>() == 8);

impl_vector!(Vec2, 2);

impl_accessors!(Vec2 {
    0 => x / x_mut, i / i_mut, r / r_mut, s / s_mut;
    1 => y / y_mut, j / j_mut, g / g_mut, t / t_mut;
});

#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

impl Vec2 {
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { components: [x, y] }
    }

    /// Reorders components, `Axis::Z` and `Axis::W` wrap around to `x` and `y`.
    #[inline]
    pub const fn swizzle(self, a: Axis, b: Axis) -> Self {
        Self::new(self.component(a), self.component(b))
    }

    /// Perp product, the signed area of the parallelogram spanned by `self`
    /// and `other`.
    #[inline]
    pub fn perp(self, other: Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    #[inline]
    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x(), self.y(), z)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::ComponentMask;

    fn samples() -> [Vec2; 6] {
        [
            vec2(1.0, 0.0),
            vec2(3.0, -4.0),
            vec2(-0.25, 0.75),
            vec2(12.5, 7.0),
            vec2(-3.0, -9.5),
            vec2(0.001, 250.0),
        ]
    }

    #[test]
    fn construction() {
        assert_eq!(Vec2::new(1.0, 2.0).to_array(), [1.0, 2.0]);
        assert_eq!(Vec2::splat(4.0), vec2(4.0, 4.0));
        assert_eq!(Vec2::from([5.0, 6.0]), vec2(5.0, 6.0));
        assert_eq!(<[f32; 2]>::from(vec2(5.0, 6.0)), [5.0, 6.0]);
        assert_eq!(Vec2::default(), Vec2::ZERO);
    }

    #[test]
    fn alias_views_share_storage() {
        let mut v = vec2(1.0, 2.0);

        *v.r_mut() = 8.0;
        *v.t_mut() = 9.0;

        assert_eq!(v.x(), 8.0);
        assert_eq!(v.i(), 8.0);
        assert_eq!(v.s(), 8.0);
        assert_eq!(v.y(), 9.0);
        assert_eq!(v.j(), 9.0);
        assert_eq!(v.g(), 9.0);
    }

    #[test]
    fn swizzle_reorders_and_wraps() {
        assert_eq!(vec2(3.0, 7.0).swizzle(Axis::Y, Axis::X), vec2(7.0, 3.0));
        assert_eq!(vec2(3.0, 7.0).swizzle(Axis::Y, Axis::Y), vec2(7.0, 7.0));
        assert_eq!(vec2(3.0, 7.0).swizzle(Axis::Z, Axis::W), vec2(3.0, 7.0));
    }

    #[test]
    fn mask_selects_per_component() {
        let a = vec2(1.0, 2.0);
        let b = vec2(-1.0, -2.0);

        assert_eq!(a.mask(b, ComponentMask::XY), a);
        assert_eq!(a.mask(b, ComponentMask::NONE), b);
        assert_eq!(a.mask(b, ComponentMask::Y), vec2(-1.0, 2.0));
        assert_eq!(a.mask(b, ComponentMask::from_bits(0xFC)), b);
    }

    #[test]
    fn arithmetic() {
        let a = vec2(6.0, -2.0);
        let b = vec2(3.0, 4.0);

        assert_eq!(-a, vec2(-6.0, 2.0));
        assert_eq!(a + b, vec2(9.0, 2.0));
        assert_eq!(a + 1.0, vec2(7.0, -1.0));
        assert_eq!(a - b, vec2(3.0, -6.0));
        assert_eq!(a - 1.0, vec2(5.0, -3.0));
        assert_eq!(a * b, vec2(18.0, -8.0));
        assert_eq!(a * 0.5, vec2(3.0, -1.0));
        assert_eq!(2.0 * a, vec2(12.0, -4.0));
        assert_eq!(a / b, vec2(2.0, -0.5));
        assert_eq!(a / 2.0, vec2(3.0, -1.0));
        assert_eq!(b.pow(vec2(2.0, 0.5)), vec2(9.0, 2.0));
        assert_eq!(b.pow_scalar(2.0), vec2(9.0, 16.0));
        assert_eq!(vec2(9.0, 16.0).sqrt(), vec2(3.0, 4.0));
        assert_eq!(vec2(4.0, 0.25).rcp(), vec2(0.25, 4.0));
        assert_eq!(vec2(4.0, 16.0).rsqrt(), vec2(0.5, 0.25));
        assert_eq!(a.abs(), vec2(6.0, 2.0));
    }

    #[test]
    fn rcp_follows_ieee() {
        let r = vec2(0.0, -0.0).rcp();

        assert_eq!(r, vec2(f32::INFINITY, f32::NEG_INFINITY));
        assert!(vec2(-1.0, 4.0).rsqrt().x().is_nan());
    }

    #[test]
    fn rcp_round_trips() {
        for v in samples() {
            let back = v.rcp().rcp();

            assert_relative_eq!(back.x(), v.x(), max_relative = 1e-6);
            assert_relative_eq!(back.y(), v.y(), max_relative = 1e-6);
        }
    }

    #[test]
    fn trigonometry() {
        let theta = vec2(0.5, -1.25);

        assert_relative_eq!(theta.csc().x(), 1.0 / 0.5f32.sin());
        assert_relative_eq!(theta.sec().y(), 1.0 / (-1.25f32).cos());
        assert_relative_eq!(theta.cot().x(), 1.0 / 0.5f32.tan());
        assert_relative_eq!(theta.csch().y(), 1.0 / (-1.25f32).sinh());
        assert_relative_eq!(theta.sech().x(), 1.0 / 0.5f32.cosh());
        assert_relative_eq!(theta.coth().y(), 1.0 / (-1.25f32).tanh());
        assert_relative_eq!(theta.sin().asin().x(), 0.5, epsilon = 1e-6);
        assert_relative_eq!(theta.tan().atan().y(), -1.25, epsilon = 1e-6);
        assert_eq!(Vec2::ZERO.csc(), Vec2::splat(f32::INFINITY));
    }

    #[test]
    fn rounding() {
        let v = vec2(2.75, -2.25);

        assert_eq!(v.floor(), vec2(2.0, -3.0));
        assert_eq!(v.ceil(), vec2(3.0, -2.0));
        assert_eq!(v.trunc(), vec2(2.0, -2.0));
        assert_eq!(v.frac(), vec2(0.75, 0.75));
    }

    #[test]
    fn frac_stays_in_unit_range() {
        for v in samples() {
            let f = v.frac();

            assert!(f.min_element() >= 0.0 && f.max_element() < 1.0, "{}", f);
        }
    }

    #[test]
    fn frac_of_tiny_negative_rounds_to_one() {
        assert_eq!(vec2(-1e-10, 0.5).frac(), vec2(1.0, 0.5));
    }

    #[test]
    fn min_max_clamp() {
        let v = vec2(-4.0, 9.0);
        let lo = vec2(-1.0, -1.0);
        let hi = vec2(1.0, 5.0);

        assert_eq!(v.max(lo), vec2(-1.0, 9.0));
        assert_eq!(v.max_scalar(0.0), vec2(0.0, 9.0));
        assert_eq!(v.min(hi), vec2(-4.0, 5.0));
        assert_eq!(v.min_scalar(0.0), vec2(-4.0, 0.0));
        assert_eq!(v.clamp(lo, hi), vec2(-1.0, 5.0));
        assert_eq!(v.clamp_scalar(-2.0, 2.0), vec2(-2.0, 2.0));
        assert_eq!(vec2(f32::NAN, 1.0).max_scalar(0.0), vec2(0.0, 1.0));
    }

    #[test]
    fn clamp_with_inverted_bounds_follows_min_of_max() {
        assert_eq!(vec2(0.0, 0.0).clamp_scalar(1.0, -1.0), Vec2::splat(-1.0));
    }

    #[test]
    fn all_and_any_compare_exactly() {
        assert!(vec2(1.0, -1.0).all());
        assert!(!vec2(1.0, 0.0).all());
        assert!(vec2(0.0, 1e-30).any());
        assert!(!vec2(0.0, -0.0).any());
        assert!(vec2(f32::NAN, 1.0).all());
    }

    #[test]
    fn geometry() {
        let v = vec2(3.0, 4.0);

        assert_eq!(v.dot(vec2(2.0, -1.0)), 2.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.normalize(), vec2(0.6, 0.8));
        assert_eq!(v.distance(vec2(0.0, 0.0)), 5.0);
        assert_relative_eq!(Vec2::X.angle(Vec2::Y), std::f32::consts::FRAC_PI_2);
        assert_eq!(vec2(1.0, -1.0).reflect(Vec2::Y), vec2(1.0, 1.0));
    }

    #[test]
    fn normalize_yields_unit_length() {
        for v in samples() {
            assert_abs_diff_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn zero_vector_degenerates() {
        assert!(Vec2::ZERO.normalize().is_nan());
        assert!(Vec2::ZERO.angle(Vec2::X).is_nan());
    }

    #[test]
    fn dot_commutes() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.dot(b), b.dot(a));
            }
        }
    }

    #[test]
    fn dot_keeps_negative_zero() {
        let d = vec2(-0.0, -0.0).dot(vec2(1.0, 1.0));

        assert_eq!(d, 0.0);
        assert!(d.is_sign_negative());
        assert_eq!(vec2(-0.0, -0.0).sum().to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn perp_product() {
        assert_eq!(vec2(1.0, 0.0).perp(vec2(0.0, 1.0)), 1.0);
        assert_eq!(vec2(0.0, 1.0).perp(vec2(1.0, 0.0)), -1.0);
        assert_eq!(vec2(2.0, 3.0).perp(vec2(4.0, 6.0)), 0.0);
    }

    #[test]
    fn angle_units_round_trip() {
        for v in samples() {
            let there_and_back = v.radians().degrees();
            let back_and_there = v.degrees().radians();

            assert_relative_eq!(there_and_back.x(), v.x(), max_relative = 1e-6);
            assert_relative_eq!(there_and_back.y(), v.y(), max_relative = 1e-6);
            assert_relative_eq!(back_and_there.x(), v.x(), max_relative = 1e-6);
            assert_relative_eq!(back_and_there.y(), v.y(), max_relative = 1e-6);
        }

        assert_eq!(Vec2::splat(std::f32::consts::PI).degrees(), Vec2::splat(180.0));
    }

    #[test]
    fn extends_into_vec3() {
        assert_eq!(vec2(1.0, 2.0).extend(3.0), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn display() {
        assert_eq!(vec2(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
