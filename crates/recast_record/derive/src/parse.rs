//! Input validation: which struct shapes are accepted and what the
//! `#[record(..)]` field attributes mean.

use syn::{Data, DeriveInput, Error, Fields, Ident, LitStr, Result, Type};

use crate::RECORD_ATTRIBUTE_NAME;

/// A validated derive input: a non-generic struct with named fields.
pub(crate) struct RecordInput {
    pub ident: Ident,
    /// Non-skipped fields, in declaration order.
    pub fields: Vec<RecordField>,
}

pub(crate) struct RecordField {
    /// The struct member identifier.
    pub ident: Ident,
    pub ty: Type,
    /// The name the accessor table exposes; the identifier unless renamed.
    pub name: String,
    pub readonly: bool,
}

impl RecordInput {
    pub fn parse(ast: &DeriveInput) -> Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(Error::new_spanned(
                &ast.generics,
                "#[derive(Record)] does not support generic types",
            ));
        }

        let Data::Struct(data) = &ast.data else {
            return Err(Error::new_spanned(
                &ast.ident,
                "#[derive(Record)] only supports structs",
            ));
        };
        let Fields::Named(fields) = &data.fields else {
            return Err(Error::new_spanned(
                &ast.ident,
                "#[derive(Record)] only supports structs with named fields",
            ));
        };

        let mut parsed = Vec::with_capacity(fields.named.len());
        for field in &fields.named {
            let attrs = FieldAttributes::parse(field)?;
            if attrs.skip {
                continue;
            }

            // The unwrap is fine: `Fields::Named` guarantees an identifier.
            let ident = field.ident.clone().unwrap();
            let name = attrs.rename.unwrap_or_else(|| ident.to_string());
            if parsed.iter().any(|other: &RecordField| other.name == name) {
                return Err(Error::new_spanned(
                    field,
                    format!("duplicate record field name `{name}`"),
                ));
            }

            parsed.push(RecordField {
                ident,
                ty: field.ty.clone(),
                name,
                readonly: attrs.readonly,
            });
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields: parsed,
        })
    }
}

#[derive(Default)]
struct FieldAttributes {
    readonly: bool,
    skip: bool,
    rename: Option<String>,
}

impl FieldAttributes {
    fn parse(field: &syn::Field) -> Result<Self> {
        let mut attrs = Self::default();
        for attr in &field.attrs {
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("readonly") {
                    attrs.readonly = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    attrs.rename = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `readonly`, `skip`, or `rename = \"...\"`"))
                }
            })?;
        }
        if attrs.skip && (attrs.readonly || attrs.rename.is_some()) {
            return Err(Error::new_spanned(
                field,
                "`skip` cannot be combined with other record attributes",
            ));
        }
        Ok(attrs)
    }
}
