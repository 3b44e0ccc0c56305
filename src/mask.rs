use std::{
    fmt,
    ops::{BitAnd, BitOr, Not},
    str::FromStr,
};

use crate::{Axis, ParseAxisError};

/// Per-component selection bits, bit `k` selects component `k`.
///
/// Bits above [`ComponentMask::XYZW`] are kept but never consulted.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComponentMask(u32);

macro_rules! masks {
    ($($name:ident = $($axis:ident)|+;)*) => {
        impl ComponentMask {
            $(
                pub const $name: Self = Self($(Self::bit(Axis::$axis))|+);
            )*
        }
    };
}

masks! {
    X = X;
    Y = Y;
    Z = Z;
    W = W;
    XY = X | Y;
    XZ = X | Z;
    XW = X | W;
    YZ = Y | Z;
    YW = Y | W;
    ZW = Z | W;
    XYZ = X | Y | Z;
    XYW = X | Y | W;
    XZW = X | Z | W;
    YZW = Y | Z | W;
    XYZW = X | Y | Z | W;
}

impl ComponentMask {
    pub const NONE: Self = Self(0);

    #[inline]
    const fn bit(axis: Axis) -> u32 {
        1 << axis as u32
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn contains(self, axis: Axis) -> bool {
        self.0 & Self::bit(axis) != 0
    }

    #[inline]
    pub const fn with(self, axis: Axis) -> Self {
        Self(self.0 | Self::bit(axis))
    }

    #[inline]
    pub const fn without(self, axis: Axis) -> Self {
        Self(self.0 & !Self::bit(axis))
    }

    pub fn from_axes(axes: &[Axis]) -> Self {
        axes.iter().fold(Self::NONE, |mask, &axis| mask.with(axis))
    }

    /// Whether the component in `slot` is taken from the first source.
    #[inline]
    pub(crate) const fn selects(self, slot: usize) -> bool {
        slot < 32 && self.0 & (1 << slot) != 0
    }
}

impl From<Axis> for ComponentMask {
    #[inline]
    fn from(axis: Axis) -> Self {
        Self::NONE.with(axis)
    }
}

impl BitOr for ComponentMask {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Axis> for ComponentMask {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Axis) -> Self {
        self.with(rhs)
    }
}

impl BitAnd for ComponentMask {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for ComponentMask {
    type Output = Self;

    /// Flips the four axis bits and clears everything above them.
    #[inline]
    fn not(self) -> Self {
        Self(!self.0 & Self::XYZW.0)
    }
}

impl FromStr for ComponentMask {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (axes, len) = Axis::parse_pattern(s)?;

        Ok(Self::from_axes(&axes[..len]))
    }
}

impl fmt::Display for ComponentMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in Axis::ALL {
            if self.contains(axis) {
                write!(f, "{}", axis)?;
            }
        }

        Ok(())
    }
}
