//! `#[derive(Record)]` for the `jsonry` decoder.
//!
//! The derive registers a struct's named fields, their `#[jsonry("a.b")]` and
//! `#[json("name")]` attributes, and their types, so the decoder can build a
//! cached descriptor and write each field by declaration index.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derive `Record`, `Unmarshal`, and `Receiver` for a struct with named fields.
///
/// Field attributes:
/// - `#[jsonry("relationships.space.guid")]`: dotted document path.
/// - `#[json("name,omitempty")]`: single key from the first token; `"-"` skips the field.
#[proc_macro_derive(Record, attributes(jsonry, json))]
pub fn derive_record(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	match expand(&input) {
		Ok(tokens) => tokens.into(),
		Err(err) => err.to_compile_error().into(),
	}
}

struct FieldInfo {
	member: syn::Ident,
	ty: syn::Type,
	path_tag: Option<LitStr>,
	name_tag: Option<LitStr>,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
	if !input.generics.params.is_empty() {
		return Err(syn::Error::new(input.generics.span(), "generic records are not supported"));
	}

	let Data::Struct(data) = &input.data else {
		return Err(syn::Error::new(input.ident.span(), "Record can only be derived for structs"));
	};

	let fields = match &data.fields {
		Fields::Named(named) => named.named.iter().map(field_info).collect::<syn::Result<Vec<_>>>()?,
		Fields::Unnamed(_) | Fields::Unit => {
			return Err(syn::Error::new(input.ident.span(), "Record requires named fields"));
		}
	};

	let name = &input.ident;
	let type_name = quote! { ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#name)) };

	let specs = fields.iter().map(|field| {
		let ident = field.member.to_string();
		let ty = &field.ty;
		let path_tag = option_tokens(field.path_tag.as_ref());
		let name_tag = option_tokens(field.name_tag.as_ref());
		quote! {
			::jsonry::decode::FieldSpec {
				ident: #ident,
				path_tag: #path_tag,
				name_tag: #name_tag,
				shape: <#ty as ::jsonry::decode::Unmarshal>::shape,
			}
		}
	});

	let arms = fields.iter().enumerate().map(|(index, field)| {
		let member = &field.member;
		quote! {
			#index => ::jsonry::decode::Unmarshal::unmarshal(&mut self.#member, raw, ctx),
		}
	});

	Ok(quote! {
		impl ::jsonry::decode::Record for #name {
			fn descriptor() -> ::jsonry::decode::Result<&'static ::jsonry::decode::RecordDescriptor> {
				static DESCRIPTOR: ::std::sync::OnceLock<::jsonry::decode::RecordDescriptor> = ::std::sync::OnceLock::new();
				::jsonry::decode::RecordDescriptor::cached(&DESCRIPTOR, || {
					::jsonry::decode::RecordDescriptor::build(#type_name, &[#(#specs),*])
				})
			}

			fn record_descriptor(&self) -> ::jsonry::decode::Result<&'static ::jsonry::decode::RecordDescriptor> {
				<Self as ::jsonry::decode::Record>::descriptor()
			}

			fn unmarshal_field(
				&mut self,
				field: &::jsonry::decode::FieldDescriptor,
				raw: ::core::option::Option<&::jsonry::decode::Value>,
				ctx: &::jsonry::decode::Context<'_>,
			) -> ::jsonry::decode::Result<()> {
				match field.index {
					#(#arms)*
					index => {
						let _ = (raw, ctx);
						::core::result::Result::Err(::jsonry::decode::DecodeError::UnknownField {
							record: #type_name,
							field: ::std::string::ToString::to_string(field.ident),
							index,
						})
					}
				}
			}
		}

		impl ::jsonry::decode::Unmarshal for #name {
			fn shape() -> ::jsonry::decode::Shape {
				::jsonry::decode::Shape::new(#type_name, ::jsonry::decode::Def::Record(<Self as ::jsonry::decode::Record>::descriptor))
			}

			fn unmarshal(
				&mut self,
				raw: ::core::option::Option<&::jsonry::decode::Value>,
				ctx: &::jsonry::decode::Context<'_>,
			) -> ::jsonry::decode::Result<()> {
				::jsonry::decode::unmarshal_record(self, raw, ctx)
			}

			fn as_record_mut(&mut self) -> ::core::option::Option<&mut dyn ::jsonry::decode::Record> {
				::core::option::Option::Some(self as &mut dyn ::jsonry::decode::Record)
			}
		}

		impl ::jsonry::decode::Receiver for #name {
			fn target(&mut self) -> ::core::result::Result<&mut dyn ::jsonry::decode::Record, ::jsonry::decode::ReceiverError> {
				::core::result::Result::Err(::jsonry::decode::ReceiverError::NonPointer)
			}
		}
	})
}

fn field_info(field: &syn::Field) -> syn::Result<FieldInfo> {
	let Some(member) = field.ident.clone() else {
		return Err(syn::Error::new(field.span(), "Record requires named fields"));
	};

	let mut path_tag = None;
	let mut name_tag = None;
	for attr in &field.attrs {
		if attr.path().is_ident("jsonry") {
			set_once(&mut path_tag, attr, "jsonry")?;
		} else if attr.path().is_ident("json") {
			set_once(&mut name_tag, attr, "json")?;
		}
	}

	Ok(FieldInfo {
		member,
		ty: field.ty.clone(),
		path_tag,
		name_tag,
	})
}

fn set_once(slot: &mut Option<LitStr>, attr: &syn::Attribute, name: &str) -> syn::Result<()> {
	if slot.is_some() {
		return Err(syn::Error::new(attr.span(), format!("duplicate `{name}` attribute")));
	}
	*slot = Some(attr.parse_args::<LitStr>()?);
	Ok(())
}

fn option_tokens(value: Option<&LitStr>) -> TokenStream2 {
	match value {
		Some(lit) => quote! { ::core::option::Option::Some(#lit) },
		None => quote! { ::core::option::Option::None },
	}
}
