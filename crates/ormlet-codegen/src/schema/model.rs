use super::{ErrorSet, Field, ModelAttr};

use std::collections::HashMap;
use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Model {
    /// Model name, the default table name
    pub(crate) name: String,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// All struct fields in declaration order, skipped ones included
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the model to
    pub(crate) table: Option<syn::LitStr>,

    /// `Hooks` is implemented by hand
    pub(crate) hooks: bool,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        let model_attr = match ModelAttr::from_ast(&ast.attrs) {
            Ok(attr) => attr,
            Err(err) => {
                errs.push(err);
                ModelAttr::default()
            }
        };

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let mut errs = ErrorSet::new();
        let mut columns = HashMap::new();

        for field in fields.iter().filter(|field| !field.is_skipped()) {
            let column = field.column_name();
            if let Some(prev) = columns.insert(column.clone(), &field.ident) {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!("column `{column}` is already mapped by field `{prev}`"),
                ));
            }
        }

        if columns.is_empty() {
            errs.push(syn::Error::new_spanned(
                ast,
                "model must have at least one field that is not #[skip]",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            name: ast.ident.unraw().to_string(),
            ident: ast.ident.clone(),
            fields,
            table: model_attr.table,
            hooks: model_attr.hooks,
        })
    }

    /// Fields that map to columns, in declaration order.
    pub(crate) fn columns(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.is_skipped())
    }
}
