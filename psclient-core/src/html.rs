//! Markup allowed inside free-form `html` result rows.

use once_cell::sync::Lazy;
use regex::Regex;

static ALLOWED_TAGS: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"&lt;(/?)(em|strong)>").ok());

/// Escape every tag except `<em>` and `<strong>` (and their closing tags).
#[must_use]
pub fn sanitize_row_html(text: &str) -> String {
    let escaped = text.replace('<', "&lt;");
    ALLOWED_TAGS.as_ref().map_or_else(
        || escaped.clone(),
        |re| re.replace_all(&escaped, "<$1$2>").into_owned(),
    )
}
