//! `#[derive(Record)]` for the `recast_record` toolkit.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";

// -----------------------------------------------------------------------------
// Modules

mod codegen;
mod parse;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` turns a named-field struct into a dynamically
/// accessible record. It implements:
///
/// - `Record`: the per-field accessor table (name and index to typed
///   get/set), generated as plain `match` arms so every access is
///   statically dispatched.
/// - `Described`: the static `RecordInfo` describing the fields.
/// - `GetRecordMeta`: registry integration; this is also why derived
///   types must implement `Default`.
///
/// Only non-generic structs with named fields are supported.
///
/// ## Field attributes
///
/// ```rust, ignore
/// #[derive(Record, Default)]
/// struct Document {
///     // Readable but rejected by every write operation.
///     #[record(readonly)]
///     id: u64,
///
///     // Accessible under the given name instead of the field identifier.
///     #[record(rename = "title")]
///     raw_title: String,
///
///     // Invisible to the accessor table altogether.
///     #[record(skip)]
///     cache: Option<u64>,
/// }
/// ```
///
/// Every non-skipped field's type must implement `Value`.
///
/// ## Auto registration
///
/// With the `auto_register` feature enabled, each derived type also submits
/// an `inventory` entry so `RecordRegistry::with_auto_registered()` can
/// find it by name at runtime.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match parse::RecordInput::parse(&ast) {
        Ok(input) => codegen::expand(&input).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
