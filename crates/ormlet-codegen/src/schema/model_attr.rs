use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Optional database table name to map the model to
    pub(crate) table: Option<syn::LitStr>,

    /// True if the model is annotated with `#[hooks]`, meaning the user
    /// implements `Hooks` by hand.
    pub(crate) hooks: bool,
}

impl ModelAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut errs = ErrorSet::new();
        let mut ret = ModelAttr::default();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if ret.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
                    continue;
                }

                match table_name(attr) {
                    Ok(lit) => ret.table = Some(lit),
                    Err(err) => errs.push(err),
                }
            } else if attr.path().is_ident("hooks") {
                if ret.hooks {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[hooks] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    ret.hooks = true;
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(ret),
        }
    }
}

fn table_name(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(syn::Error::new_spanned(
            attr,
            "expected `table = \"table_name\"`",
        ));
    };

    let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = &meta.value
    else {
        return Err(syn::Error::new_spanned(
            attr,
            "expected `table = \"table_name\"`",
        ));
    };

    if lit.value().is_empty() {
        return Err(syn::Error::new_spanned(lit, "table name cannot be empty"));
    }

    Ok(lit.clone())
}
