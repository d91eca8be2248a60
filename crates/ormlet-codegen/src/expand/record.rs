use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let ormlet = &self.ormlet;
        let model_ident = &self.model.ident;
        let describe = self.expand_describe_body();
        let field_value = self.expand_field_value_body();
        let load = self.expand_load_body();

        quote! {
            impl #ormlet::Record for #model_ident {
                fn describe() -> #ormlet::ModelDesc {
                    #describe
                }

                fn field_value(&self, name: &str) -> #ormlet::Option<#ormlet::Value> {
                    #field_value
                }

                fn load(mut record: #ormlet::ValueRecord) -> #ormlet::Result<Self> {
                    #load
                }
            }
        }
    }

    fn expand_describe_body(&self) -> TokenStream {
        let ormlet = &self.ormlet;
        let name = &self.model.name;

        let table = self
            .model
            .table
            .as_ref()
            .map(|table| quote!(.table(#table)));

        let fields = self.model.columns().map(|field| {
            let column = field.column_name();
            let ty = &field.ty;
            let constraint = field
                .constraint()
                .map(|constraint| quote!(.constraint(#constraint)));

            quote! {
                .field(
                    #ormlet::FieldDesc::new(#column, <#ty as #ormlet::Primitive>::TYPE)
                        #constraint
                )
            }
        });

        quote! {
            #ormlet::ModelDesc::new(#name)
                #table
                #( #fields )*
        }
    }

    fn expand_field_value_body(&self) -> TokenStream {
        let ormlet = &self.ormlet;

        let arms = self.model.columns().map(|field| {
            let column = field.column_name();
            let ident = &field.ident;

            quote! {
                #column => #ormlet::Option::Some(
                    #ormlet::Value::from(#ormlet::Clone::clone(&self.#ident))
                ),
            }
        });

        quote! {
            match name {
                #( #arms )*
                _ => #ormlet::Option::None,
            }
        }
    }

    fn expand_load_body(&self) -> TokenStream {
        let ormlet = &self.ormlet;
        let name = &self.model.name;
        let width = self.model.columns().count();

        let fields = self.model.fields.iter().scan(0usize, |index, field| {
            let ident = &field.ident;

            if field.is_skipped() {
                return Some(quote!(#ident: #ormlet::Default::default(),));
            }

            let ty = &field.ty;
            let context = format!("{name}.{}", field.column_name());
            let i = *index;
            *index += 1;

            Some(quote! {
                #ident: <#ty as #ormlet::Primitive>::load(record.take(#i)).map_err(|err| {
                    err.context(#ormlet::Error::from_args(format_args!("{}", #context)))
                })?,
            })
        });

        quote! {
            if record.len() != #width {
                return #ormlet::Err(#ormlet::Error::from_args(format_args!(
                    "{}: expected {} columns, got {}",
                    #name,
                    #width,
                    record.len(),
                )));
            }

            #ormlet::Ok(Self {
                #( #fields )*
            })
        }
    }
}
