#![deny(clippy::all)]

use napi::{JsUnknown, Status, ValueType};
use napi_derive::napi;

use marklet::{EmphasisTags, MarkletError, MarkletService, Options as MarkletOptions, Slugger};

#[napi(object)]
pub struct Options {
    pub headings: Option<bool>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub escapes: Option<bool>,
    pub emphasis_tags: Option<String>,
    pub header_ids: Option<bool>,
    pub header_prefix: Option<String>,
}

impl From<Options> for MarkletOptions {
    fn from(opts: Options) -> Self {
        let mut result = MarkletOptions::default();

        if let Some(headings) = opts.headings {
            result.headings = headings;
        }

        if let Some(bold) = opts.bold {
            result.bold = bold;
        }

        if let Some(italic) = opts.italic {
            result.italic = italic;
        }

        if let Some(escapes) = opts.escapes {
            result.escapes = escapes;
        }

        if let Some(style) = opts.emphasis_tags {
            result.emphasis_tags = match style.to_lowercase().as_str() {
                "presentational" => EmphasisTags::Presentational,
                _ => EmphasisTags::Semantic,
            };
        }

        if let Some(header_ids) = opts.header_ids {
            result.header_ids = header_ids;
        }

        if let Some(prefix) = opts.header_prefix {
            result.header_prefix = prefix;
        }

        result
    }
}

fn to_napi_error(err: MarkletError) -> napi::Error {
    napi::Error::new(Status::InvalidArg, err.to_string())
}

/// Accept only JavaScript strings; numbers, objects and the like are
/// rejected rather than coerced.
fn expect_string(input: JsUnknown) -> napi::Result<String> {
    let value_type = input.get_type()?;
    if value_type != ValueType::String {
        return Err(to_napi_error(MarkletError::InvalidInput(format!(
            "expected a string, got {value_type:?}"
        ))));
    }
    input.coerce_to_string()?.into_utf8()?.into_owned()
}

fn service(options: Option<Options>) -> MarkletService {
    match options {
        Some(opts) => MarkletService::with_options(opts.into()),
        None => MarkletService::new(),
    }
}

/// Convert markup to an HTML fragment
#[napi]
pub fn parse(input: JsUnknown, options: Option<Options>) -> napi::Result<String> {
    let input = expect_string(input)?;
    Ok(service(options).to_html(&input))
}

/// Convert markup to plain text
#[napi]
pub fn to_text(input: JsUnknown, options: Option<Options>) -> napi::Result<String> {
    let input = expect_string(input)?;
    Ok(service(options).to_text(&input))
}

/// Slug a heading text the way heading ids are generated
#[napi]
pub fn slug(value: String) -> String {
    Slugger::serialize(&value)
}
