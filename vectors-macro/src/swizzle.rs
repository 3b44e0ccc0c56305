use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::pattern::{MaskInput, SwizzleInput};

fn axis(slot: u8) -> TokenStream {
    match slot {
        0 => quote!(::vectors::Axis::X),
        1 => quote!(::vectors::Axis::Y),
        2 => quote!(::vectors::Axis::Z),
        _ => quote!(::vectors::Axis::W),
    }
}

pub fn swizzle(input: &SwizzleInput) -> proc_macro::TokenStream {
    let slots = input.pattern.slots();
    let source = &input.source;

    // evaluated once, invisible to the caller's expression
    let vector = Ident::new("vector", Span::mixed_site());

    let components = slots.iter().map(|&slot| {
        let axis = axis(slot);

        quote!(#vector.component(#axis))
    });

    let constructor = match slots.len() {
        1 => None,
        2 => Some(quote!(::vectors::Vec2::new)),
        3 => Some(quote!(::vectors::Vec3::new)),
        _ => Some(quote!(::vectors::Vec4::new)),
    };

    let expanded = quote! {
        {
            let #vector = #source;
            #constructor(#(#components),*)
        }
    };

    proc_macro::TokenStream::from(expanded)
}

pub fn mask(input: &MaskInput) -> proc_macro::TokenStream {
    let bits = input
        .pattern
        .slots()
        .iter()
        .fold(0u32, |bits, &slot| bits | 1 << slot);

    let expanded = quote! {
        ::vectors::ComponentMask::from_bits(#bits)
    };

    proc_macro::TokenStream::from(expanded)
}
