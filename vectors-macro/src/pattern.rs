use proc_macro2::{Ident, Span};
use proc_macro_error::{Diagnostic, Level};
use syn::{
    parse::{Parse, ParseStream},
    Expr, Token,
};

const NAMING_SETS: [&str; 4] = ["xyzw", "ijkw", "rgba", "stpq"];

pub enum PatternError {
    UnknownLetter(char),
    MixedNamingSets,
    TooManyComponents(usize),
}

impl PatternError {
    fn message(&self, pattern: &str) -> String {
        match self {
            Self::UnknownLetter(letter) => format!(
                "`{}` is not a component letter in `{}`, expected one of xyzw, ijkw, rgba or stpq",
                letter, pattern
            ),
            Self::MixedNamingSets => format!(
                "`{}` mixes letters from different naming sets",
                pattern
            ),
            Self::TooManyComponents(len) => format!(
                "`{}` names {} components, at most 4 are allowed",
                pattern, len
            ),
        }
    }
}

pub trait PatternResult {
    type Ok;

    fn pattern_unwrap(self, pattern: &Pattern) -> Self::Ok;
}

impl<T> PatternResult for Result<T, PatternError> {
    type Ok = T;

    fn pattern_unwrap(self, pattern: &Pattern) -> <Self as PatternResult>::Ok {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                Diagnostic::spanned(pattern.span, Level::Error, error.message(&pattern.source))
                    .abort()
            }
        }
    }
}

/// Component letters written as a bare identifier, e.g. `yx` or `bgra`.
pub struct Pattern {
    pub source: String,
    pub span: Span,
}

impl Pattern {
    #[inline]
    pub fn new(ident: &Ident) -> Self {
        Self {
            source: ident.to_string(),
            span: ident.span(),
        }
    }

    /// Slot indices named by the pattern, in order.
    pub fn slots(&self) -> Vec<u8> {
        self.parse_slots().pattern_unwrap(self)
    }

    fn parse_slots(&self) -> Result<Vec<u8>, PatternError> {
        let len = self.source.chars().count();

        if len > 4 {
            return Err(PatternError::TooManyComponents(len));
        }

        let slots = self
            .source
            .chars()
            .map(|letter| slot(letter).ok_or(PatternError::UnknownLetter(letter)))
            .collect::<Result<Vec<_>, _>>()?;

        let single_set = NAMING_SETS
            .iter()
            .any(|set| self.source.chars().all(|letter| set.contains(letter)));

        if !single_set {
            return Err(PatternError::MixedNamingSets);
        }

        Ok(slots)
    }
}

fn slot(letter: char) -> Option<u8> {
    match letter {
        'x' | 'i' | 'r' | 's' => Some(0),
        'y' | 'j' | 'g' | 't' => Some(1),
        'z' | 'k' | 'b' | 'p' => Some(2),
        'w' | 'a' | 'q' => Some(3),
        _ => None,
    }
}

pub struct SwizzleInput {
    pub source: Expr,
    pub pattern: Pattern,
}

impl Parse for SwizzleInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let source = input.parse()?;
        input.parse::<Token![,]>()?;
        let pattern = Pattern::new(&input.parse()?);

        // allow a trailing comma
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        Ok(Self { source, pattern })
    }
}

pub struct MaskInput {
    pub pattern: Pattern,
}

impl Parse for MaskInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(Self {
            pattern: Pattern::new(&input.parse()?),
        })
    }
}
