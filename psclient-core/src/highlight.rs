//! Search-hit highlighting for display names.
//!
//! A display name may carry a "tag" suffix (a forme such as `-Attack`, or the
//! type after `Hidden Power`) that is rendered dimmed. The matched substring
//! of a search query is emphasized. A match that spills into the tag is
//! emphasized whole in the base and again inside the dimmed tag.
//!
//! All offsets are counted in characters, not bytes.

use serde::{Deserialize, Serialize};

/// One styled run of a highlighted name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Plain(String),
    Emphasized(String),
    Dim(String),
    DimEmphasized(String),
}

impl Segment {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text)
            | Self::Emphasized(text)
            | Self::Dim(text)
            | Self::DimEmphasized(text) => text,
        }
    }

    #[must_use]
    pub const fn is_dim(&self) -> bool {
        matches!(self, Self::Dim(_) | Self::DimEmphasized(_))
    }

    #[must_use]
    pub const fn is_emphasized(&self) -> bool {
        matches!(self, Self::Emphasized(_) | Self::DimEmphasized(_))
    }
}

/// A name together with the search match and tag boundary to render it with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayName {
    pub name: String,
    pub match_start: usize,
    /// `0` means the name was not matched.
    pub match_end: usize,
    /// Character offset where the dimmed tag begins; `None` (or `Some(0)`) for no tag.
    pub tag_start: Option<usize>,
}

impl DisplayName {
    #[must_use]
    pub fn new(name: impl Into<String>, match_start: usize, match_end: usize) -> Self {
        Self {
            name: name.into(),
            match_start,
            match_end,
            tag_start: None,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag_start: Option<usize>) -> Self {
        self.tag_start = tag_start;
        self
    }

    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        highlight(&self.name, self.match_start, self.match_end, self.tag_start)
    }
}

/// Split `name` into styled segments.
///
/// When the match begins inside the tag, the whole name is kept as the plain
/// base and the emphasized tag is appended after it, so the tag text appears
/// twice. A match that starts before the tag and ends inside it is emphasized
/// unclamped, so the overlapping text also appears twice. Renderers rely on
/// this layout; do not collapse it.
#[must_use]
pub fn highlight(
    name: &str,
    match_start: usize,
    match_end: usize,
    tag_start: Option<usize>,
) -> Vec<Segment> {
    let len = name.chars().count();
    let tag = tag_start.filter(|&start| start > 0).map(|start| start.min(len));

    if match_end == 0 {
        let Some(tag) = tag else {
            return vec![Segment::Plain(name.to_owned())];
        };
        return compact(vec![
            Segment::Plain(char_slice(name, 0, tag)),
            Segment::Dim(char_slice(name, tag, len)),
        ]);
    }

    let start = match_start.min(len);
    let end = match_end.min(len);

    let mut out = Vec::with_capacity(6);
    match tag {
        Some(tag) if start >= tag => out.push(Segment::Plain(name.to_owned())),
        _ => {
            let base_end = tag.unwrap_or(len);
            out.push(Segment::Plain(char_slice(name, 0, start)));
            out.push(Segment::Emphasized(char_slice(name, start, end)));
            out.push(Segment::Plain(char_slice(name, end, base_end)));
        }
    }

    let Some(tag) = tag else {
        return compact(out);
    };

    if end > tag {
        let tag_match_start = start.max(tag);
        out.push(Segment::Dim(char_slice(name, tag, tag_match_start)));
        out.push(Segment::DimEmphasized(char_slice(name, tag_match_start, end)));
        out.push(Segment::Dim(char_slice(name, end, len)));
    } else {
        out.push(Segment::Dim(char_slice(name, tag, len)));
    }

    compact(out)
}

/// Concatenate the text of `segments`, ignoring style.
#[must_use]
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}

fn compact(segments: Vec<Segment>) -> Vec<Segment> {
    segments
        .into_iter()
        .filter(|segment| !segment.text().is_empty())
        .collect()
}

fn char_slice(text: &str, start: usize, end: usize) -> String {
    if end <= start {
        return String::new();
    }
    text.chars().skip(start).take(end - start).collect()
}
