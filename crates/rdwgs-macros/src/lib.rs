//! Derive macros for rdwgs conversion results.

use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

/// Name of the field carrying the composite range error code.
const CODE_FIELD: &str = "error_code";

/// Derive a column-oriented `{Name}Batch` for a conversion result struct.
///
/// The struct must have exactly one `error_code: i32` field; every other
/// field is a coordinate component and must be `f64`. The batch keeps one
/// private column per component plus the error codes, so all columns always
/// have the same length. It can be filled with `push`, `collect()` or
/// `extend`, and read back per row (`get`) or per column (`phi()`,
/// `error_codes()`, ...).
#[proc_macro_derive(ConversionBatch)]
pub fn derive_conversion_batch(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let batch = format_ident!("{}Batch", name);

    let (coords, code) = split_fields(input)?;

    let column_docs = coords
        .iter()
        .map(|c| format!("The `{c}` column, one entry per converted point."));

    Ok(quote! {
        /// Column-oriented batch of conversion results.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct #batch {
            #(#coords: Vec<f64>,)*
            error_codes: Vec<i32>,
        }

        impl #batch {
            /// Pre-allocate every column for `n` points.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#coords: Vec::with_capacity(n),)*
                    error_codes: Vec::with_capacity(n),
                }
            }

            /// Append one conversion result.
            pub fn push(&mut self, r: &#name) {
                #(self.#coords.push(r.#coords);)*
                self.error_codes.push(r.#code);
            }

            /// Result at row `i`, or `None` past the end.
            pub fn get(&self, i: usize) -> Option<#name> {
                Some(#name {
                    #(#coords: *self.#coords.get(i)?,)*
                    #code: *self.error_codes.get(i)?,
                })
            }

            #(
                #[doc = #column_docs]
                pub fn #coords(&self) -> &[f64] {
                    &self.#coords
                }
            )*

            /// Composite range error code per point.
            pub fn error_codes(&self) -> &[i32] {
                &self.error_codes
            }

            /// Number of points stored.
            pub fn len(&self) -> usize {
                self.error_codes.len()
            }

            /// Returns `true` if no points have been stored.
            pub fn is_empty(&self) -> bool {
                self.error_codes.is_empty()
            }

            /// Number of points whose input fell outside the validity box.
            pub fn out_of_range_count(&self) -> usize {
                self.error_codes.iter().filter(|&&c| c != 0).count()
            }
        }

        impl ::core::iter::Extend<#name> for #batch {
            fn extend<I: IntoIterator<Item = #name>>(&mut self, iter: I) {
                for r in iter {
                    self.push(&r);
                }
            }
        }

        impl ::core::iter::FromIterator<#name> for #batch {
            fn from_iter<I: IntoIterator<Item = #name>>(iter: I) -> Self {
                let iter = iter.into_iter();
                let mut batch = Self::with_capacity(iter.size_hint().0);
                batch.extend(iter);
                batch
            }
        }
    })
}

/// Separate coordinate fields from the error-code field, validating types.
fn split_fields(input: &DeriveInput) -> syn::Result<(Vec<&Ident>, &Ident)> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "ConversionBatch can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "ConversionBatch can only be derived for structs",
            ))
        }
    };

    let mut coords = Vec::new();
    let mut code = None;
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if ident == CODE_FIELD {
            expect_type(field, "i32", "the `error_code` field must be i32")?;
            code = Some(ident);
        } else {
            expect_type(field, "f64", "ConversionBatch derive: coordinate fields must be f64")?;
            coords.push(ident);
        }
    }

    let code = code.ok_or_else(|| {
        syn::Error::new_spanned(name, "ConversionBatch requires an `error_code: i32` field")
    })?;
    if coords.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "ConversionBatch requires at least one f64 coordinate field",
        ));
    }
    Ok((coords, code))
}

fn expect_type(field: &Field, ty: &str, msg: &str) -> syn::Result<()> {
    match &field.ty {
        syn::Type::Path(p) if p.qself.is_none() && p.path.is_ident(ty) => Ok(()),
        other => Err(syn::Error::new_spanned(other, msg)),
    }
}
