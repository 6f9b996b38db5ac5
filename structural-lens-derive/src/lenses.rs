//! Implementation of the `#[derive(Lenses)]` macro.
//!
//! For every named field the macro emits `{field}_lens()` over the plain
//! value. With `#[lenses(shared)]` on the struct it also emits
//! `{field}_shared_lens()` over a `Shared<Self>` node whose setter copies the
//! node instead of writing into it.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_lenses(&input))
}

pub(crate) fn expand_lenses(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;

    let options = match LensOptions::from_attributes(&input.attrs) {
        Ok(options) => options,
        Err(error) => return error.to_compile_error(),
    };

    match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_lenses(name, &input.generics, &data_struct.fields, options)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Lenses cannot be derived for unions.").to_compile_error()
        }
    }
}

/// Options read from `#[lenses(...)]` on the deriving struct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct LensOptions {
    shared: bool,
}

impl LensOptions {
    fn from_attributes(attributes: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();

        let lens_attributes = attributes
            .iter()
            .filter(|attribute| attribute.path().is_ident("lenses"));

        for attribute in lens_attributes {
            attribute.parse_nested_meta(|meta| {
                if meta.path.is_ident("shared") {
                    options.shared = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported lenses option; expected `shared`"))
                }
            })?;
        }

        Ok(options)
    }
}

fn generate_struct_lenses(
    name: &Ident,
    generics: &Generics,
    fields: &Fields,
    options: LensOptions,
) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            // A `Self: Clone` bound on a non-generic type is checked eagerly.
            let clone_bound = (!generics.params.is_empty()).then(|| quote! { where Self: Clone });
            let lens_methods = named_fields.named.iter().filter_map(|field| {
                let plain = generate_field_lens(field)?;
                let shared = if options.shared {
                    generate_shared_field_lens(field, clone_bound.as_ref())
                } else {
                    None
                };
                Some(quote! { #plain #shared })
            });
            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#lens_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

fn generate_field_lens(field: &Field) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let lens_name = format_ident!("{}_lens", field_name);
    let lens_doc = format!(" Returns a lens focusing on the `{field_name}` field.");

    Some(quote! {
        #[doc = #lens_doc]
        #[inline]
        #[must_use]
        pub fn #lens_name() -> impl ::structural_lens::optics::Lens<Self, #field_type> + Clone {
            ::structural_lens::optics::FunctionLens::new(
                |source: &Self| &source.#field_name,
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }
    })
}

fn generate_shared_field_lens(
    field: &Field,
    clone_bound: Option<&TokenStream2>,
) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let shared_lens_name = format_ident!("{}_shared_lens", field_name);
    let shared_lens_doc = format!(
        " Returns a lens focusing on the `{field_name}` field of a shared node.\n\n \
         Setting through it copies the node and keeps every other field shared."
    );

    Some(quote! {
        #[doc = #shared_lens_doc]
        #[inline]
        #[must_use]
        pub fn #shared_lens_name() -> impl ::structural_lens::optics::Lens<
            ::structural_lens::optics::Shared<Self>,
            #field_type,
        > + Clone
        #clone_bound
        {
            ::structural_lens::optics::FunctionLens::new(
                |source: &::structural_lens::optics::Shared<Self>| &source.#field_name,
                |source: ::structural_lens::optics::Shared<Self>, value: #field_type| {
                    ::structural_lens::optics::copy_with(&source, move |node: &mut Self| {
                        node.#field_name = value;
                    })
                },
            )
        }
    })
}
