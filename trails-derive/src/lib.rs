//! Derive macros for the mouse-trails particle engine.
//!
//! This crate provides one derive macro:
//!
//! - [`MenuIds`] - Maps a unit enum onto stable, externally visible integer ids
//!
//! # Usage
//!
//! The macro is re-exported from the main `mouse_trails` crate. You don't need
//! to add this crate directly:
//!
//! ```ignore
//! use mouse_trails::MenuIds;
//!
//! #[derive(MenuIds, Clone, Copy, PartialEq)]
//! enum Effect {
//!     #[menu(id = 2)]
//!     Sparkle,
//!     #[menu(id = 1, fallback)]
//!     Haze,
//! }
//! ```
//!
//! # Why ids are explicit
//!
//! Menus, tray items and config files refer to effects by number. Those
//! numbers are part of the outside contract and must not shift when variants
//! are reordered, so each variant can pin its id with `#[menu(id = N)]`.
//! Variants without an id get their zero-based declaration index.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitInt};

/// Derive macro for enums selected by an integer menu id.
///
/// # Generated Items
///
/// For an enum `Effect`:
///
/// - `impl From<Effect> for u32` - Convert variant to its menu id
/// - `impl From<u32> for Effect` - Convert id to variant (unknown ids give the fallback)
/// - `Effect::from_id(u32) -> Effect` - Same as the `From` impl, without type annotations
/// - `Effect::id(self) -> u32` - Menu id of the variant
/// - `Effect::name(self) -> &'static str` - Lowercase variant name
/// - `Effect::ALL` - Every variant in declaration order
/// - `Effect::count() -> u32` - Number of variants
///
/// # Attributes
///
/// - `#[menu(id = N)]` - Pin the variant's id
/// - `#[menu(fallback)]` - Variant returned for unknown ids (defaults to the first variant)
///
/// # Panics
///
/// The macro panics at compile time if:
/// - Applied to a struct instead of an enum
/// - Any variant has fields (tuple or struct variants)
/// - Enum has zero variants
/// - Two variants share an id, or more than one variant is marked `fallback`
#[proc_macro_derive(MenuIds, attributes(menu))]
pub fn derive_menu_ids(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => panic!("MenuIds derive only supports enums"),
    };

    if variants.is_empty() {
        panic!("MenuIds enum must have at least one variant");
    }

    let mut entries = Vec::with_capacity(variants.len());
    let mut fallback = None;

    for (i, variant) in variants.iter().enumerate() {
        if !matches!(variant.fields, Fields::Unit) {
            panic!(
                "MenuIds enum variants must be unit variants (no fields). \
                 Found fields on variant '{}'",
                variant.ident
            );
        }

        let mut id = i as u32;
        let mut is_fallback = false;

        for attr in variant.attrs.iter().filter(|a| a.path().is_ident("menu")) {
            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    let lit: LitInt = meta.value()?.parse()?;
                    id = lit.base10_parse()?;
                    Ok(())
                } else if meta.path.is_ident("fallback") {
                    is_fallback = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `id = N` or `fallback`"))
                }
            });
            if let Err(err) = parsed {
                return err.to_compile_error().into();
            }
        }

        if entries.iter().any(|(_, other)| *other == id) {
            panic!("MenuIds: duplicate id {} on variant '{}'", id, variant.ident);
        }
        if is_fallback {
            if fallback.is_some() {
                panic!("MenuIds: only one variant may be marked `fallback`");
            }
            fallback = Some(&variant.ident);
        }

        entries.push((&variant.ident, id));
    }

    let fallback = fallback.unwrap_or(entries[0].0);
    let variant_count = entries.len() as u32;

    let idents: Vec<_> = entries.iter().map(|(ident, _)| *ident).collect();
    let ids: Vec<_> = entries.iter().map(|(_, id)| *id).collect();
    let names: Vec<_> = idents
        .iter()
        .map(|ident| ident.to_string().to_lowercase())
        .collect();

    let expanded = quote! {
        impl From<#name> for u32 {
            fn from(value: #name) -> u32 {
                value.id()
            }
        }

        impl From<u32> for #name {
            fn from(value: u32) -> #name {
                #name::from_id(value)
            }
        }

        impl #name {
            /// Every variant, in declaration order.
            pub const ALL: [#name; #variant_count as usize] = [#(#name::#idents),*];

            /// Variant for a menu id. Unknown ids map to the fallback variant.
            pub fn from_id(id: u32) -> #name {
                match id {
                    #(#ids => #name::#idents,)*
                    _ => #name::#fallback,
                }
            }

            /// Menu id of this variant.
            pub const fn id(self) -> u32 {
                match self {
                    #(#name::#idents => #ids),*
                }
            }

            /// Lowercase variant name.
            pub const fn name(self) -> &'static str {
                match self {
                    #(#name::#idents => #names),*
                }
            }

            /// Returns the number of variants.
            pub const fn count() -> u32 {
                #variant_count
            }
        }
    };

    TokenStream::from(expanded)
}
