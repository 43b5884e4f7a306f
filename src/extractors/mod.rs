//! Field extractors for listing detail pages.
//!
//! Every extractor reads one landmark of the parsed document and returns a
//! `Result`. Callers go through [`contained`], which turns a failure into the
//! field's default so a broken landmark never affects any other field.

pub mod basic;
pub mod embedded;
pub mod geo;
pub mod media;
pub mod presence;

use crate::error::ExtractError;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

pub(crate) fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector(format!("{css}: {e:?}")))
}

/// First element matching `css`, or `MissingNode`
pub(crate) fn first<'a>(doc: &'a Html, css: &'static str) -> Result<ElementRef<'a>, ExtractError> {
    let sel = selector(css)?;
    doc.select(&sel).next().ok_or(ExtractError::MissingNode(css))
}

/// First descendant of `el` matching `css`
pub(crate) fn first_in<'a>(
    el: ElementRef<'a>,
    css: &'static str,
) -> Result<ElementRef<'a>, ExtractError> {
    let sel = selector(css)?;
    el.select(&sel).next().ok_or(ExtractError::MissingNode(css))
}

/// Text content with every text node trimmed and joined by single spaces
pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text a browser would render: text nodes outside `script`, `style`,
/// `noscript` and `template` elements, concatenated in document order
pub(crate) fn visible_text(doc: &Html) -> String {
    let mut out = String::new();
    for node in doc.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|el| NON_RENDERED.contains(&el.name()))
        });
        if !hidden {
            out.push_str(text);
        }
    }
    out
}

const NON_RENDERED: [&str; 4] = ["script", "style", "noscript", "template"];

/// Unwrap an extractor result, logging the failure and falling back to the default
pub fn contained<T: Default>(field: &'static str, result: Result<T, ExtractError>) -> T {
    match result {
        Ok(value) => value,
        Err(
            e @ (ExtractError::MissingNode(_)
            | ExtractError::MissingAttribute(_)
            | ExtractError::MissingScript(_)
            | ExtractError::MissingParam(_)),
        ) => {
            debug!(field, reason = %e, "Field not present, using default");
            T::default()
        }
        Err(e) => {
            warn!(field, error = %e, "Field extraction failed, using default");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed_and_joined() {
        let doc = Html::parse_document("<div class='x'>\n  Piso <b> luminoso </b>\n</div>");
        let el = first(&doc, "div.x").unwrap();
        assert_eq!(text_of(el), "Piso luminoso");
    }

    #[test]
    fn visible_text_skips_scripts_and_styles() {
        let doc = Html::parse_document(
            r#"<html><head><style>.a { color: red }</style>
            <script>window.i18n = {"offer": "Hacer una contraoferta"};</script></head>
            <body><p>Piso</p><noscript>Activa JavaScript</noscript><span> luminoso</span></body></html>"#,
        );
        let text = visible_text(&doc);
        assert!(text.contains("Piso"));
        assert!(text.contains("luminoso"));
        assert!(!text.contains("contraoferta"));
        assert!(!text.contains("color"));
        assert!(!text.contains("JavaScript"));
    }

    #[test]
    fn contained_falls_back_to_default() {
        let missing: Result<Option<i64>, _> = Err(ExtractError::MissingNode("span.price"));
        assert_eq!(contained("price", missing), None);

        let bad: Result<Vec<String>, _> = Err(ExtractError::Number("abc".into()));
        assert!(contained("list", bad).is_empty());

        assert_eq!(contained("price", Ok(Some(3))), Some(3));
    }
}
