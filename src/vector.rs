use std::{
    fmt::Debug,
    ops::{Add, Div, Index, Mul, Neg, Sub},
};

use crate::{Axis, ComponentMask};

pub(crate) const DEGREES_PER_RADIAN: f64 = 180.0 / std::f64::consts::PI;
pub(crate) const RADIANS_PER_DEGREE: f64 = std::f64::consts::PI / 180.0;

/// Operations shared by [`Vec2`](crate::Vec2), [`Vec3`](crate::Vec3) and
/// [`Vec4`](crate::Vec4), for code that is generic over the component count.
///
/// Covers construction, component access, masking and the geometric
/// operations (`dot`, `magnitude`, `normalize`, `distance`, `angle`,
/// `reflect`, `clamp`, `lerp`). The per-component math catalogue (`sin`,
/// `floor`, ...) stays inherent and is reachable generically through `map`.
/// Every type also exposes these as inherent methods, importing the trait is
/// only needed in generic code.
pub trait Vector:
    Copy
    + Debug
    + Default
    + PartialEq
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
    + Index<usize, Output = f32>
{
    const COMPONENTS: usize;

    fn splat(value: f32) -> Self;

    fn as_slice(&self) -> &[f32];

    fn component(self, axis: Axis) -> f32;

    fn map(self, f: impl FnMut(f32) -> f32) -> Self;

    fn zip_map(self, other: Self, f: impl FnMut(f32, f32) -> f32) -> Self;

    fn mask(self, other: Self, mask: ComponentMask) -> Self;

    fn dot(self, other: Self) -> f32;

    #[inline]
    fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    fn normalize(self) -> Self {
        self / self.magnitude()
    }

    #[inline]
    fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    #[inline]
    fn angle(self, other: Self) -> f32 {
        (self.dot(other) / (self.magnitude() * other.magnitude())).acos()
    }

    #[inline]
    fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    #[inline]
    fn clamp(self, minimum: Self, maximum: Self) -> Self {
        self.zip_map(minimum, f32::max).zip_map(maximum, f32::min)
    }

    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

macro_rules! impl_vector_op {
    ($vec:ident, $trait:ident, $fn:ident, $op:tt) => {
        impl std::ops::$trait for $vec {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $op b)
            }
        }

        impl std::ops::$trait<f32> for $vec {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: f32) -> Self {
                self.map(|a| a $op rhs)
            }
        }

        impl std::ops::$trait<$vec> for f32 {
            type Output = $vec;

            #[inline]
            fn $fn(self, rhs: $vec) -> $vec {
                rhs.map(|b| self $op b)
            }
        }
    };
}

/// Named views over component slots, `$get` reads and `$get_mut` writes the
/// same slot.
macro_rules! impl_accessors {
    ($vec:ident { $($slot:literal => $($get:ident / $get_mut:ident),+;)+ }) => {
        impl $vec {
            $($(
                #[inline]
                pub const fn $get(self) -> f32 {
                    self.components[$slot]
                }

                #[inline]
                pub fn $get_mut(&mut self) -> &mut f32 {
                    &mut self.components[$slot]
                }
            )+)+
        }
    };
}

/// Generates the per-component catalogue every vector family shares.
macro_rules! impl_vector {
    ($vec:ident, $len:literal) => {
        impl $vec {
            pub const ZERO: Self = Self::splat(0.0);
            pub const ONE: Self = Self::splat(1.0);

            /// Broadcasts `value` into every component.
            #[inline]
            pub const fn splat(value: f32) -> Self {
                Self {
                    components: [value; $len],
                }
            }

            #[inline]
            pub const fn from_array(components: [f32; $len]) -> Self {
                Self { components }
            }

            #[inline]
            pub const fn to_array(self) -> [f32; $len] {
                self.components
            }

            #[inline]
            pub const fn as_array(&self) -> &[f32; $len] {
                &self.components
            }

            #[inline]
            pub fn as_slice(&self) -> &[f32] {
                &self.components
            }

            /// Reads the component named by `axis`, wrapping axes past the last
            /// component back to the start (`W` on a `Vec3` reads `x`).
            #[inline]
            pub const fn component(self, axis: crate::Axis) -> f32 {
                self.components[axis.index() % $len]
            }

            #[inline]
            pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
                Self {
                    components: self.components.map(f),
                }
            }

            #[inline]
            pub fn zip_map(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
                let mut components = self.components;

                for (component, other) in components.iter_mut().zip(other.components) {
                    *component = f(*component, other);
                }

                Self { components }
            }

            /// Takes component `k` from `self` where bit `k` of `mask` is set,
            /// otherwise from `other`.
            #[inline]
            pub fn mask(self, other: Self, mask: crate::ComponentMask) -> Self {
                let mut components = other.components;

                for (slot, component) in components.iter_mut().enumerate() {
                    if mask.selects(slot) {
                        *component = self.components[slot];
                    }
                }

                Self { components }
            }

            #[inline]
            pub fn pow(self, power: Self) -> Self {
                self.zip_map(power, f32::powf)
            }

            #[inline]
            pub fn pow_scalar(self, power: f32) -> Self {
                self.map(|base| base.powf(power))
            }

            #[inline]
            pub fn sqrt(self) -> Self {
                self.map(f32::sqrt)
            }

            /// Per-component `1 / x`. Zero components become infinite.
            #[inline]
            pub fn rcp(self) -> Self {
                Self::ONE / self
            }

            /// Per-component `1 / sqrt(x)`, computed as `rcp(sqrt(x))`.
            #[inline]
            pub fn rsqrt(self) -> Self {
                self.sqrt().rcp()
            }

            #[inline]
            pub fn abs(self) -> Self {
                self.map(f32::abs)
            }

            #[inline]
            pub fn sin(self) -> Self {
                self.map(f32::sin)
            }

            #[inline]
            pub fn cos(self) -> Self {
                self.map(f32::cos)
            }

            #[inline]
            pub fn tan(self) -> Self {
                self.map(f32::tan)
            }

            #[inline]
            pub fn asin(self) -> Self {
                self.map(f32::asin)
            }

            #[inline]
            pub fn acos(self) -> Self {
                self.map(f32::acos)
            }

            #[inline]
            pub fn atan(self) -> Self {
                self.map(f32::atan)
            }

            /// Cosecant, `rcp(sin(x))`.
            #[inline]
            pub fn csc(self) -> Self {
                self.sin().rcp()
            }

            /// Secant, `rcp(cos(x))`.
            #[inline]
            pub fn sec(self) -> Self {
                self.cos().rcp()
            }

            /// Cotangent, `rcp(tan(x))`.
            #[inline]
            pub fn cot(self) -> Self {
                self.tan().rcp()
            }

            #[inline]
            pub fn sinh(self) -> Self {
                self.map(f32::sinh)
            }

            #[inline]
            pub fn cosh(self) -> Self {
                self.map(f32::cosh)
            }

            #[inline]
            pub fn tanh(self) -> Self {
                self.map(f32::tanh)
            }

            #[inline]
            pub fn csch(self) -> Self {
                self.sinh().rcp()
            }

            #[inline]
            pub fn sech(self) -> Self {
                self.cosh().rcp()
            }

            #[inline]
            pub fn coth(self) -> Self {
                self.tanh().rcp()
            }

            #[inline]
            pub fn floor(self) -> Self {
                self.map(f32::floor)
            }

            #[inline]
            pub fn ceil(self) -> Self {
                self.map(f32::ceil)
            }

            #[inline]
            pub fn trunc(self) -> Self {
                self.map(f32::trunc)
            }

            /// `x - floor(x)`, non-negative for finite components.
            ///
            /// Tiny negative inputs round up to exactly `1.0`, e.g. `-1e-10`.
            #[inline]
            pub fn frac(self) -> Self {
                self.map(|x| x - x.floor())
            }

            /// Per-component maximum. A NaN component yields the other operand.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                self.zip_map(other, f32::max)
            }

            #[inline]
            pub fn max_scalar(self, other: f32) -> Self {
                self.map(|x| x.max(other))
            }

            /// Per-component minimum. A NaN component yields the other operand.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                self.zip_map(other, f32::min)
            }

            #[inline]
            pub fn min_scalar(self, other: f32) -> Self {
                self.map(|x| x.min(other))
            }

            /// `min(max(self, minimum), maximum)`.
            ///
            /// Callers keep `minimum <= maximum`, otherwise `maximum` wins.
            #[inline]
            pub fn clamp(self, minimum: Self, maximum: Self) -> Self {
                self.max(minimum).min(maximum)
            }

            #[inline]
            pub fn clamp_scalar(self, minimum: f32, maximum: f32) -> Self {
                self.max_scalar(minimum).min_scalar(maximum)
            }

            /// True if every component is non-zero. NaN counts as non-zero.
            #[inline]
            pub fn all(self) -> bool {
                self.components.iter().all(|&x| x != 0.0)
            }

            /// True if at least one component is non-zero.
            #[inline]
            pub fn any(self) -> bool {
                self.components.iter().any(|&x| x != 0.0)
            }

            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                (self * other).sum()
            }

            #[inline]
            pub fn magnitude_squared(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn magnitude(self) -> f32 {
                self.magnitude_squared().sqrt()
            }

            /// Scales `self` to unit length.
            ///
            /// The zero vector has no direction, its components become NaN.
            #[inline]
            pub fn normalize(self) -> Self {
                self / self.magnitude()
            }

            #[inline]
            pub fn distance(self, other: Self) -> f32 {
                (self - other).magnitude()
            }

            /// Angle between `self` and `other` in radians.
            ///
            /// NaN when either vector is zero, or when rounding pushes the
            /// cosine outside `[-1, 1]`.
            #[inline]
            pub fn angle(self, other: Self) -> f32 {
                let cos = self.dot(other) / (self.magnitude() * other.magnitude());

                cos.acos()
            }

            /// Reflects `self` about `normal`, which must already be unit length.
            #[inline]
            pub fn reflect(self, normal: Self) -> Self {
                self - normal * (2.0 * self.dot(normal))
            }

            /// Converts each component from radians to degrees.
            #[inline]
            pub fn degrees(self) -> Self {
                self.map(|radians| (radians as f64 * crate::vector::DEGREES_PER_RADIAN) as f32)
            }

            /// Converts each component from degrees to radians.
            #[inline]
            pub fn radians(self) -> Self {
                self.map(|degrees| (degrees as f64 * crate::vector::RADIANS_PER_DEGREE) as f32)
            }

            #[inline]
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self + (other - self) * t
            }

            #[inline]
            pub fn sum(self) -> f32 {
                let [first, rest @ ..] = self.components;

                rest.iter().fold(first, |sum, &x| sum + x)
            }

            #[inline]
            pub fn min_element(self) -> f32 {
                self.components.iter().copied().fold(f32::INFINITY, f32::min)
            }

            #[inline]
            pub fn max_element(self) -> f32 {
                self.components.iter().copied().fold(f32::NEG_INFINITY, f32::max)
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                self.components.iter().all(|x| x.is_finite())
            }

            #[inline]
            pub fn is_nan(self) -> bool {
                self.components.iter().any(|x| x.is_nan())
            }
        }

        impl crate::Vector for $vec {
            const COMPONENTS: usize = $len;

            #[inline]
            fn splat(value: f32) -> Self {
                $vec::splat(value)
            }

            #[inline]
            fn as_slice(&self) -> &[f32] {
                $vec::as_slice(self)
            }

            #[inline]
            fn component(self, axis: crate::Axis) -> f32 {
                $vec::component(self, axis)
            }

            #[inline]
            fn map(self, f: impl FnMut(f32) -> f32) -> Self {
                $vec::map(self, f)
            }

            #[inline]
            fn zip_map(self, other: Self, f: impl FnMut(f32, f32) -> f32) -> Self {
                $vec::zip_map(self, other, f)
            }

            #[inline]
            fn mask(self, other: Self, mask: crate::ComponentMask) -> Self {
                $vec::mask(self, other, mask)
            }

            #[inline]
            fn dot(self, other: Self) -> f32 {
                $vec::dot(self, other)
            }
        }

        impl std::ops::Neg for $vec {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                self.map(|x| -x)
            }
        }

        impl_vector_op!($vec, Add, add, +);
        impl_vector_op!($vec, Sub, sub, -);
        impl_vector_op!($vec, Mul, mul, *);
        impl_vector_op!($vec, Div, div, /);

        impl std::ops::Index<usize> for $vec {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &f32 {
                &self.components[index]
            }
        }

        impl std::ops::IndexMut<usize> for $vec {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.components[index]
            }
        }

        // Panics for axes past the last component, unlike `component`.
        impl std::ops::Index<crate::Axis> for $vec {
            type Output = f32;

            #[inline]
            fn index(&self, axis: crate::Axis) -> &f32 {
                &self.components[axis.index()]
            }
        }

        impl std::ops::IndexMut<crate::Axis> for $vec {
            #[inline]
            fn index_mut(&mut self, axis: crate::Axis) -> &mut f32 {
                &mut self.components[axis.index()]
            }
        }

        impl From<[f32; $len]> for $vec {
            #[inline]
            fn from(components: [f32; $len]) -> Self {
                Self { components }
            }
        }

        impl From<$vec> for [f32; $len] {
            #[inline]
            fn from(vec: $vec) -> Self {
                vec.components
            }
        }

        impl std::fmt::Display for $vec {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "(")?;

                for (slot, component) in self.components.iter().enumerate() {
                    if slot > 0 {
                        write!(f, ", ")?;
                    }

                    std::fmt::Display::fmt(component, f)?;
                }

                write!(f, ")")
            }
        }
    };
}
