use super::ErrorSet;

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Rust identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Verbatim constraint text: `#[constraint("NOT NULL")]`
    pub(crate) constraint: Option<syn::LitStr>,

    /// Column name override: `#[column("Name")]`
    pub(crate) column: Option<syn::LitStr>,

    /// True if the field is annotated with `#[skip]`
    pub(crate) skip: Option<syn::Attribute>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("skip") {
                if attrs.skip.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.skip = Some(attr.clone());
                }
            } else if attr.path().is_ident("constraint") {
                if attrs.constraint.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[constraint] attribute",
                    ));
                } else {
                    match attr.parse_args::<syn::LitStr>() {
                        Ok(lit) => attrs.constraint = Some(lit),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                } else {
                    match attr.parse_args::<syn::LitStr>() {
                        Ok(lit) if lit.value().is_empty() => {
                            errs.push(syn::Error::new_spanned(lit, "column name cannot be empty"))
                        }
                        Ok(lit) => attrs.column = Some(lit),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if let Some(skip) = &attrs.skip {
            if attrs.key.is_some() || attrs.constraint.is_some() || attrs.column.is_some() {
                errs.push(syn::Error::new_spanned(
                    skip,
                    "#[skip] fields cannot carry column attributes",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            attrs,
            ident: ident.clone(),
            ty: field.ty.clone(),
        })
    }

    pub(crate) fn is_skipped(&self) -> bool {
        self.attrs.skip.is_some()
    }

    /// Column the field is stored in. Defaults to the field name.
    pub(crate) fn column_name(&self) -> String {
        match &self.attrs.column {
            Some(lit) => lit.value(),
            None => self.ident.unraw().to_string(),
        }
    }

    /// Constraint tag for the column definition, if any.
    pub(crate) fn constraint(&self) -> Option<String> {
        let constraint = self.attrs.constraint.as_ref().map(syn::LitStr::value);

        match (&self.attrs.key, constraint) {
            (Some(_), Some(constraint)) => Some(format!("PRIMARY KEY {constraint}")),
            (Some(_), None) => Some("PRIMARY KEY".to_string()),
            (None, constraint) => constraint,
        }
    }
}
