mod hooks;
mod record;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for ormlet types
    ormlet: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let hooks_impl = self.expand_hooks_impl();

        wrap_in_const(quote! {
            #record_impl
            #hooks_impl
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        ormlet: quote!(_ormlet::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use ormlet as _ormlet;
            #code
        };
    }
}
