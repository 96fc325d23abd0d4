use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

pub fn from_variants_derive_impl(input: DeriveInput) -> TokenStream {
    let enum_name = input.ident;
    let (impl_generics, ty_generics, where_clause) =
        input.generics.split_for_impl();

    let Data::Enum(data_enum) = input.data else {
        return syn::Error::new_spanned(
            enum_name,
            "#[derive(FromVariants)] can only be used on enums",
        )
        .to_compile_error();
    };

    let from_impls = data_enum.variants.iter().filter_map(|variant| {
        let variant_name = &variant.ident;
        match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                let field_type = &fields.unnamed.first()?.ty;
                Some(quote! {
                    impl #impl_generics From<#field_type> for #enum_name #ty_generics #where_clause {
                        fn from(value: #field_type) -> Self {
                            #enum_name::#variant_name(value)
                        }
                    }
                })
            }
            _ => None,
        }
    });

    quote! {
        #(#from_impls)*
    }
}
