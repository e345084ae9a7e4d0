use proc_macro::TokenStream;
use quote::quote;
use syn::bracketed;
use syn::parse::Parse;
use syn::parse_macro_input;
use syn::token;
use syn::Expr;
use syn::Ident;
use syn::ItemFn;
use syn::Lit;
use syn::LitBool;
use syn::LitInt;
use syn::LitStr;

#[proc_macro_attribute]
pub fn async_timeout_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(item as ItemFn);
    let dura = parse_duration::parse(attr.to_string().as_str()).unwrap();
    let secs = LitInt::new(format!("{}", dura.as_secs()).as_str(), sig.ident.span());
    let nanos = LitInt::new(
        format!("{}", dura.subsec_nanos()).as_str(),
        sig.ident.span(),
    );
    let stmts = &block.stmts;
    let stream = quote! {
        #(#attrs)* #vis #sig {
            let dura = std::time::Duration::new(#secs, #nanos);
            let f = async {
                #(#stmts)*
            };
            tokio::time::timeout(dura, f).await.unwrap();
        }
    };
    stream.into()
}

struct HTTPHeader {
    pub header: String,
}

impl Parse for HTTPHeader {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut header = String::new();
        let ident = Ident::parse(input)?;
        header += ident.to_string().replace("_", "-").as_str();
        loop {
            if input.cursor().eof() {
                break;
            }
            match token::Sub::parse(input) {
                Ok(_) => {}
                Err(_) => {
                    break;
                }
            }
            let ident = Ident::parse(input)?;
            header += "-";
            header += ident.to_string().replace("_", "-").as_str();
        }
        return Ok(Self { header });
    }
}

struct FilterHttpMethods {
    pub req: Ident,
    pub typ: Expr,
    pub handle_options: LitBool,
    pub ctx: Option<Expr>,
    pub methods: Vec<Ident>,
    pub cors_allow_headers: Option<Vec<String>>,
}

impl Parse for FilterHttpMethods {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let req = Ident::parse(input)?;
        token::Comma::parse(input)?;
        let typ = Expr::parse(input)?;
        token::Comma::parse(input)?;
        let mut methods = Vec::new();
        let handle_options = match Lit::parse(input)? {
            Lit::Bool(s) => s,
            _ => {
                return Err(syn::Error::new(input.span(), "Failed to parse boolean."));
            }
        };
        let ctx = if handle_options.value() {
            token::Comma::parse(input)?;
            Some(Expr::parse(input)?)
        } else {
            None
        };
        let mut cors_allow_headers = None;
        loop {
            if input.cursor().eof() {
                break;
            }
            token::Comma::parse(input)?;
            if input.cursor().eof() {
                break;
            }
            let method = Ident::parse(input)?;
            if method.to_string() == "allow_headers" {
                cors_allow_headers.replace(Vec::new());
                token::Eq::parse(input)?;
                let content;
                bracketed!(content in input);
                let first: HTTPHeader = content.parse()?;
                cors_allow_headers.as_mut().unwrap().push(first.header);
                while !content.is_empty() {
                    let _: token::Comma = content.parse()?;
                    let m: HTTPHeader = content.parse()?;
                    cors_allow_headers.as_mut().unwrap().push(m.header);
                }
            } else {
                methods.push(method);
            }
        }
        Ok(Self {
            req,
            typ,
            handle_options,
            ctx,
            methods,
            cors_allow_headers,
        })
    }
}

/// Filter http methods.
///
/// `request, 405 body, handle_options, [method [, method [, method ...]]]`
#[proc_macro]
pub fn filter_http_methods(item: TokenStream) -> TokenStream {
    let FilterHttpMethods {
        req,
        typ,
        handle_options,
        ctx,
        methods,
        cors_allow_headers,
    } = parse_macro_input!(item as FilterHttpMethods);
    let mut header_value = Vec::new();
    let mut streams = Vec::new();
    let mut enable_options = false;
    for method in methods {
        header_value.push(method.to_string());
        if method == "OPTIONS" && handle_options.value() {
            enable_options = true;
        } else {
            streams.push(quote!(&hyper::Method::#method => {}));
        }
    }
    let allow_header = header_value.join(", ");
    let allow_header = LitStr::new(allow_header.as_str(), req.span());
    if enable_options {
        let cors_allow_headers = match &cors_allow_headers {
            Some(h) => {
                let headers = h.join(", ");
                let headers = LitStr::new(headers.as_str(), req.span());
                quote!(
                    let builder = builder.header(hyper::header::ACCESS_CONTROL_ALLOW_HEADERS, #headers);
                )
            }
            None => quote!(),
        };
        streams.push(quote!(&hyper::Method::OPTIONS => {
            let builder = hyper::Response::builder();
            let headers = #req.headers();
            let origin = match headers.get(hyper::header::ORIGIN) {
                Some(origin) => match origin.to_str() {
                    Ok(origin) => Some(origin.to_owned()),
                    Err(_) => None,
                },
                None => None,
            };
            match origin {
                Some(origin) => {
                    match #ctx.cors.matches(origin.as_str()) {
                        crate::server::cors::CorsResult::Allowed => {
                            let builder = builder
                                .header(hyper::header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.as_str())
                                .header(hyper::header::ACCESS_CONTROL_ALLOW_METHODS, #allow_header);
                                #cors_allow_headers
                            return Ok(builder.status(200).header("Allow", #allow_header).body(#typ)?);
                        }
                        crate::server::cors::CorsResult::AllowedAll => {
                            let builder = builder
                                .header(hyper::header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
                                .header(hyper::header::ACCESS_CONTROL_ALLOW_METHODS, #allow_header);
                                #cors_allow_headers
                            return Ok(builder.status(200).header("Allow", #allow_header).body(#typ)?);
                        }
                        _ => {
                            return Ok(builder.status(400).header("Allow", #allow_header).body(#typ)?);
                        }
                    }
                }
                None => {
                    return Ok(builder.status(200).header("Allow", #allow_header).body(#typ)?);
                }
            }
        }));
    }
    let post_stream = if enable_options {
        let cors_allow_headers = match cors_allow_headers {
            Some(h) => {
                let headers = h.join(", ");
                let headers = LitStr::new(headers.as_str(), req.span());
                quote!(
                    builder.
                        headers_mut()
                        .try_err(gettext("Failed to build response."))?
                        .insert(hyper::header::ACCESS_CONTROL_ALLOW_HEADERS, #headers.parse()?);
                )
            }
            None => quote!(),
        };
        quote!(
            let mut builder = hyper::Response::builder();
            let headers = #req.headers();
            let origin = match headers.get(hyper::header::ORIGIN) {
                Some(origin) => match origin.to_str() {
                    Ok(origin) => Some(origin.to_owned()),
                    Err(_) => None,
                },
                None => None,
            };
            match origin {
                Some(origin) => {
                    use crate::ext::try_err::TryErr;
                    use crate::gettext;
                    match #ctx.cors.matches(origin.as_str()) {
                        crate::server::cors::CorsResult::Allowed => {
                            builder
                                .headers_mut()
                                .try_err(gettext("Failed to build response."))?
                                .insert(hyper::header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.parse()?);
                            #cors_allow_headers
                        }
                        crate::server::cors::CorsResult::AllowedAll => {
                            builder
                                .headers_mut()
                                .try_err(gettext("Failed to build response."))?
                                .insert(hyper::header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".parse()?);
                            #cors_allow_headers
                        }
                        _ => {
                            return Ok(builder.status(403).body(#typ)?);
                        }
                    }
                }
                None => {}
            }
        )
    } else {
        quote!()
    };
    let stream = quote! {
        match #req.method() {
            #(#streams)*
            _ => {
                return Ok(hyper::Response::builder().status(405).header("Allow", #allow_header).body(#typ)?)
            }
        }
        #post_stream
    };
    stream.into()
}
