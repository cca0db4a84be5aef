//! Token generation for the accessor table and the metadata impls.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::{RecordField, RecordInput};

pub(crate) fn expand(input: &RecordInput) -> TokenStream {
    let record_impl = impl_trait_record(input);
    let described_impl = impl_trait_described(input);
    let meta_impl = impl_trait_get_record_meta(input);
    let auto_register = auto_register_tokens(input);

    quote! {
        const _: () = {
            #record_impl

            #described_impl

            #meta_impl

            #auto_register
        };
    }
}

/// Generate the `Record` accessor table: one `match` arm per field, so
/// every lookup compiles to static dispatch over a string or index match.
fn impl_trait_record(input: &RecordInput) -> TokenStream {
    let ident = &input.ident;
    let field_count = input.fields.len();

    let names: Vec<&str> = input.fields.iter().map(|f| f.name.as_str()).collect();
    let idents: Vec<_> = input.fields.iter().map(|f| &f.ident).collect();
    let indices: Vec<usize> = (0..field_count).collect();

    let writable = input.fields.iter().filter(|f| !f.readonly);
    let writable_names: Vec<&str> = writable.clone().map(|f| f.name.as_str()).collect();
    let writable_idents: Vec<_> = writable.map(|f| &f.ident).collect();

    quote! {
        impl ::recast_record::Record for #ident {
            #[inline]
            fn info(&self) -> &'static ::recast_record::RecordInfo {
                <Self as ::recast_record::Described>::record_info()
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn ::recast_record::Value> {
                match name {
                    #(#names => ::core::option::Option::Some(&self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn ::recast_record::Value> {
                match name {
                    #(#writable_names => ::core::option::Option::Some(&mut self.#writable_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(
                &self,
                index: usize,
            ) -> ::core::option::Option<&dyn ::recast_record::Value> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#indices => ::core::option::Option::Some(#names),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> ::recast_record::FieldIter<'_> {
                ::recast_record::FieldIter::new(self)
            }
        }
    }
}

fn impl_trait_described(input: &RecordInput) -> TokenStream {
    let ident = &input.ident;
    let name = ident.to_string();

    let field_infos = input.fields.iter().map(|field| {
        let RecordField {
            ty, name, readonly, ..
        } = field;
        if *readonly {
            quote! { ::recast_record::FieldInfo::readonly::<#ty>(#name) }
        } else {
            quote! { ::recast_record::FieldInfo::new::<#ty>(#name) }
        }
    });

    quote! {
        impl ::recast_record::Described for #ident {
            fn record_info() -> &'static ::recast_record::RecordInfo {
                static CELL: ::recast_record::__macro_exports::OnceLock<
                    ::recast_record::RecordInfo,
                > = ::recast_record::__macro_exports::OnceLock::new();
                CELL.get_or_init(|| {
                    ::recast_record::RecordInfo::new::<Self>(
                        #name,
                        ::core::concat!(::core::module_path!(), "::", #name),
                        <[_]>::into_vec(::std::boxed::Box::new([#(#field_infos),*])),
                    )
                })
            }
        }
    }
}

fn impl_trait_get_record_meta(input: &RecordInput) -> TokenStream {
    let ident = &input.ident;

    quote! {
        impl ::recast_record::registry::GetRecordMeta for #ident {
            #[inline]
            fn record_meta() -> ::recast_record::registry::RecordMeta {
                ::recast_record::registry::RecordMeta::of::<Self>()
            }
        }
    }
}

fn auto_register_tokens(input: &RecordInput) -> TokenStream {
    if cfg!(not(feature = "auto_register")) {
        return TokenStream::new();
    }

    let ident = &input.ident;
    quote! {
        ::recast_record::__macro_exports::inventory::submit! {
            ::recast_record::registry::AutoRegisterFn(|registry| {
                registry.register::<#ident>();
            })
        }
    }
}
