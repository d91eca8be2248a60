use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Every hook keeps its no-op default unless the model opts into
    /// writing the impl itself with `#[hooks]`.
    pub(super) fn expand_hooks_impl(&self) -> TokenStream {
        if self.model.hooks {
            return TokenStream::new();
        }

        let ormlet = &self.ormlet;
        let model_ident = &self.model.ident;

        quote! {
            impl #ormlet::Hooks for #model_ident {}
        }
    }
}
