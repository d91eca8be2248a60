extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `Record` and, unless the model carries `#[hooks]`, an empty
/// `Hooks` impl.
///
/// Struct attributes: `#[table = "name"]`, `#[hooks]`. Field attributes:
/// `#[key]`, `#[constraint("...")]`, `#[column("...")]`, `#[skip]`.
#[proc_macro_derive(Model, attributes(table, hooks, key, constraint, column, skip))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match ormlet_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
