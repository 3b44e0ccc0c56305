use std::{fmt, str::FromStr};

use thiserror::Error;

/// Alias letter families, in slot order.
///
/// `w` is shared by `xyzw` and `ijkw`, every other letter belongs to exactly
/// one family.
pub(crate) const NAMING_SETS: [&str; 4] = ["xyzw", "ijkw", "rgba", "stpq"];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseAxisError {
    #[error("`{0}` is not a component letter")]
    UnknownLetter(char),
    #[error("`{0}` mixes letters from different naming sets")]
    MixedNamingSets(String),
    #[error("empty component pattern")]
    Empty,
    #[error("pattern names {found} components, at most {max} are allowed")]
    TooManyComponents { found: usize, max: usize },
    #[error("component index {0} is out of range")]
    IndexOutOfRange(usize),
}

/// Index of a single vector component.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
}

impl Axis {
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::Z, Self::W];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Maps any alias letter (`x`, `i`, `r`, `s`, ...) to the slot it names.
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'x' | 'i' | 'r' | 's' => Some(Self::X),
            'y' | 'j' | 'g' | 't' => Some(Self::Y),
            'z' | 'k' | 'b' | 'p' => Some(Self::Z),
            'w' | 'a' | 'q' => Some(Self::W),
            _ => None,
        }
    }

    /// Parses a letter pattern such as `"yx"` or `"bgr"` into axes.
    ///
    /// Returns the axes in pattern order together with their count; slots past
    /// the count are `Axis::X`.
    pub(crate) fn parse_pattern(pattern: &str) -> Result<([Self; 4], usize), ParseAxisError> {
        let result = Self::parse_pattern_inner(pattern);

        if let Err(err) = &result {
            log::debug!("rejected component pattern {:?}: {}", pattern, err);
        }

        result
    }

    fn parse_pattern_inner(pattern: &str) -> Result<([Self; 4], usize), ParseAxisError> {
        let len = pattern.chars().count();

        if len == 0 {
            return Err(ParseAxisError::Empty);
        }

        if len > 4 {
            return Err(ParseAxisError::TooManyComponents { found: len, max: 4 });
        }

        let mut axes = [Self::X; 4];

        for (slot, letter) in pattern.chars().enumerate() {
            axes[slot] = Self::from_letter(letter).ok_or(ParseAxisError::UnknownLetter(letter))?;
        }

        let single_set = NAMING_SETS
            .iter()
            .any(|set| pattern.chars().all(|letter| set.contains(letter)));

        if !single_set {
            return Err(ParseAxisError::MixedNamingSets(pattern.to_owned()));
        }

        Ok((axes, len))
    }
}

impl TryFrom<usize> for Axis {
    type Error = ParseAxisError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ParseAxisError::IndexOutOfRange(index))
    }
}

impl From<Axis> for usize {
    #[inline]
    fn from(axis: Axis) -> Self {
        axis.index()
    }
}

impl FromStr for Axis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::parse_pattern(s)? {
            (axes, 1) => Ok(axes[0]),
            (_, len) => {
                let err = ParseAxisError::TooManyComponents { found: len, max: 1 };
                log::debug!("rejected axis {:?}: {}", s, err);
                Err(err)
            }
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::W => 'w',
        };

        write!(f, "{}", letter)
    }
}
