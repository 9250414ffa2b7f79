//! SEO tag extraction: first `<title>`, first `<h1>`, first `<meta name="description">`.
//!
//! Each field is three-valued: `None` when the element is missing,
//! `Some("")` when it exists with no text, otherwise its trimmed text.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

struct Selectors {
    title: Selector,
    h1: Selector,
    description: Selector,
}

static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    title: Selector::parse("title").expect("title selector"),
    h1: Selector::parse("h1").expect("h1 selector"),
    description: Selector::parse(r#"meta[name="description"]"#).expect("meta selector"),
});

/// Fields pulled from one page body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub h1: Option<String>,
    pub description: Option<String>,
}

fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Parses `html` leniently and extracts the three fields.
///
/// A description `<meta>` without a `content` attribute counts as absent.
pub fn extract(html: &str) -> PageMeta {
    let doc = Html::parse_document(html);
    let sel = &*SELECTORS;

    let title = doc.select(&sel.title).next().map(trimmed_text);
    let h1 = doc.select(&sel.h1).next().map(trimmed_text);
    let description = doc
        .select(&sel.description)
        .next()
        .and_then(|m| m.value().attr("content"))
        .map(|s| s.trim().to_string());

    PageMeta {
        title,
        h1,
        description,
    }
}
