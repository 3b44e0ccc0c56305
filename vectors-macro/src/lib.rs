mod pattern;
mod swizzle;

use proc_macro_error::abort;

fn parse<T: syn::parse::Parse>(input: proc_macro::TokenStream) -> T {
    syn::parse(input).unwrap_or_else(|err| abort!(err.span(), "{}", err))
}

/// Builds a new vector from named components of `source`.
///
/// ```ignore
/// let v = vec3(1.0, 2.0, 3.0);
///
/// assert_eq!(swizzle!(v, zyx), vec3(3.0, 2.0, 1.0));
/// assert_eq!(swizzle!(v, rg), vec2(1.0, 2.0));
/// ```
///
/// Letters come from one naming set (`xyzw`, `ijkw`, `rgba` or `stpq`); the
/// pattern length picks `Vec2`, `Vec3` or `Vec4`, a single letter yields an
/// `f32`. Letters past the last component of `source` wrap around.
#[proc_macro_error::proc_macro_error]
#[proc_macro]
pub fn swizzle(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse::<pattern::SwizzleInput>(input);

    swizzle::swizzle(&input)
}

/// `ComponentMask` with the bits of the named components set, `mask!(xz)`.
#[proc_macro_error::proc_macro_error]
#[proc_macro]
pub fn mask(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse::<pattern::MaskInput>(input);

    swizzle::mask(&input)
}
