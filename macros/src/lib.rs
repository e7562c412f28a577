use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{parse::Parser, punctuated::Punctuated, Token};

/// How a component is brought into its valid range on construction.
enum Range {
    /// Clamp between two expressions. The expressions are evaluated inside the
    /// generated impl, so generic associated constants are allowed.
    Clamp(syn::Expr, syn::Expr),
    /// Wrap around modulo 360 degrees.
    Hue,
}

struct Channel {
    ident: syn::Ident,
    docs: Vec<syn::Attribute>,
    range: Range,
}

/// Generate a color model struct with exactly 3 components and an alpha
/// component.
///
/// Every component must carry either `#[clamp(min, max)]` or `#[hue]`. The
/// components are made private and can only be read through generated
/// accessors, which keeps every instance inside its valid range.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::ItemStruct);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn parse_channel(field: &mut syn::Field) -> syn::Result<Channel> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(&*field, "components must be named"));
    };

    let mut range = None;
    let mut kept = Vec::with_capacity(field.attrs.len());

    for attr in std::mem::take(&mut field.attrs) {
        if attr.path().is_ident("hue") {
            range = Some(Range::Hue);
        } else if attr.path().is_ident("clamp") {
            let args =
                attr.parse_args_with(Punctuated::<syn::Expr, Token![,]>::parse_terminated)?;
            let mut args = args.into_iter();
            match (args.next(), args.next(), args.next()) {
                (Some(min), Some(max), None) => range = Some(Range::Clamp(min, max)),
                _ => return Err(syn::Error::new_spanned(attr, "expected #[clamp(min, max)]")),
            }
        } else {
            kept.push(attr);
        }
    }

    field.attrs = kept;
    field.vis = syn::Visibility::Inherited;

    let Some(range) = range else {
        return Err(syn::Error::new_spanned(
            &ident,
            "each component needs either #[clamp(min, max)] or #[hue]",
        ));
    };

    let docs = field
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .cloned()
        .collect();

    Ok(Channel { ident, docs, range })
}

fn expand(mut input: syn::ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    if input.fields.len() != 3 {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Models must have exactly 3 fields, one for each component of the color.",
        ));
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Models must use named fields.",
        ));
    };

    let channels = named
        .named
        .iter_mut()
        .map(parse_channel)
        .collect::<syn::Result<Vec<_>>>()?;

    named.named.push(syn::Field::parse_named.parse2(quote! {
        alpha: crate::color::Component
    })?);

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    for param in input.generics.params.iter() {
        let syn::GenericParam::Type(type_param) = param else {
            return Err(syn::Error::new_spanned(param, "unsupported generic parameter"));
        };
        let ident = &type_param.ident;
        let field_name = syn::Ident::new(
            &format!("_{}", ident.to_string().to_lowercase()),
            Span::call_site(),
        );
        named.named.push(syn::Field::parse_named.parse2(quote! {
            #field_name: std::marker::PhantomData<#ident>
        })?);
        phantom_fields.push(field_name);
    }

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let idents = channels.iter().map(|c| &c.ident).collect::<Vec<_>>();
    let names = idents.iter().map(|i| i.to_string()).collect::<Vec<_>>();
    let (c0, c1, c2) = (idents[0], idents[1], idents[2]);

    let ranged = channels.iter().map(|channel| {
        let ident = &channel.ident;
        match &channel.range {
            Range::Hue => quote! { #ident: crate::math::normalize_hue(#ident) },
            Range::Clamp(min, max) => quote! { #ident: crate::math::clamp(#ident, #min, #max) },
        }
    });

    let getters = channels.iter().map(|channel| {
        let ident = &channel.ident;
        let docs = &channel.docs;
        quote! {
            #(#docs)*
            #[inline]
            pub fn #ident(&self) -> crate::color::Component {
                self.#ident
            }
        }
    });

    let builders = channels.iter().map(|channel| {
        let ident = &channel.ident;
        let builder = format_ident!("with_{}", ident);
        let doc = format!(
            "Return a copy of this color with the {} component replaced. The new value is brought into range the same way [`Self::new`] does.",
            ident
        );
        let args = idents.iter().map(|other| {
            if *other == ident {
                quote! { #ident }
            } else {
                quote! { self.#other }
            }
        });
        quote! {
            #[doc = #doc]
            pub fn #builder(&self, #ident: crate::color::Component) -> Self {
                Self::new(#(#args,)* self.alpha)
            }
        }
    });

    Ok(quote! {
        #input

        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Names of the components in declaration order, followed by alpha.
            pub const CHANNELS: [&'static str; 4] = [#(#names,)* "alpha"];

            /// Create a new color in this model. Components outside of their
            /// valid range are clamped and hue components wrap around.
            pub fn new(
                #c0: crate::color::Component,
                #c1: crate::color::Component,
                #c2: crate::color::Component,
                alpha: crate::color::Component,
            ) -> Self {
                Self {
                    #(#ranged,)*
                    alpha: crate::math::clamp(alpha, 0.0, 1.0),
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            /// Create a new color from generic components and an alpha value.
            pub fn from_components(
                components: crate::color::Components,
                alpha: crate::color::Component,
            ) -> Self {
                Self::new(components.0, components.1, components.2, alpha)
            }

            #(#getters)*

            /// The alpha component of the color.
            #[inline]
            pub fn alpha(&self) -> crate::color::Component {
                self.alpha
            }

            #(#builders)*

            /// Return a copy of this color with the alpha component replaced.
            pub fn with_alpha(&self, alpha: crate::color::Component) -> Self {
                Self::new(self.#c0, self.#c1, self.#c2, alpha)
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#c0, self.#c1, self.#c2)
            }

            /// Return each component paired with its name, followed by alpha.
            pub fn to_array(&self) -> [(&'static str, crate::color::Component); 4] {
                [
                    (Self::CHANNELS[0], self.#c0),
                    (Self::CHANNELS[1], self.#c1),
                    (Self::CHANNELS[2], self.#c2),
                    ("alpha", self.alpha),
                ]
            }
        }
    })
}
