//! HTML fragment helpers for the rendered report.
//!
//! Everything here is a pure string transformation: element wrapping with
//! attributes, links, code spans (inline and block), nested unordered lists,
//! and a custom table renderer over a closed `Cell` variant. The report
//! targets GitHub-flavored rendering, so the emoji symbols are gemoji
//! shortcodes left for the host to expand.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Gemoji shortcodes used throughout the report.
pub mod symbols {
    pub const INFO: &str = ":information_source:";
    pub const PASS: &str = ":white_check_mark:";
    pub const WARN: &str = ":warning:";
    pub const ERROR: &str = ":x:";
    pub const FILE: &str = ":page_facing_up:";
    pub const FIX: &str = ":bulb:";
    pub const NO_FIX: &str = ":grey_question:";
}

/// Messages at or above this length render their code spans as blocks so
/// the containing table does not grow wider than the viewport.
pub const MULTILINE_THRESHOLD: usize = 100;

static CODE_SPAN: OnceLock<Regex> = OnceLock::new();
static RETURN_GLYPH: OnceLock<Regex> = OnceLock::new();

/// Wrap `text` (raw HTML or otherwise) in another HTML element.
///
/// Attributes render as `key="value"` pairs in the order given. A trailing
/// newline is appended only when `newline` is set. `tag` is not validated.
pub fn wrap(text: &str, tag: &str, newline: bool, attrs: &[(&str, &str)]) -> String {
    let mut open = String::from(tag);
    for (key, val) in attrs {
        open.push_str(&format!(" {}=\"{}\"", key, val));
    }
    let eol = if newline { "\n" } else { "" };
    format!("<{open}>{text}</{tag}>{eol}")
}

/// Build an anchor element; the non-inline form is wrapped in a paragraph.
pub fn to_link(text: &str, url: &str, inline: bool) -> String {
    let link = wrap(text, "a", false, &[("href", url)]);
    if inline {
        link
    } else {
        wrap(&link, "p", false, &[])
    }
}

/// Build a code element; the block form wraps it in `wrap_tag` with `attrs`
/// (e.g. a `pre` carrying a language hint).
pub fn to_code(text: &str, inline: bool, wrap_tag: &str, attrs: &[(&str, &str)]) -> String {
    let code = wrap(text, "code", false, &[]);
    if inline {
        code
    } else {
        wrap(&code, wrap_tag, false, attrs)
    }
}

/// Convert backtick-delimited spans in `text` into code elements.
///
/// The span regex consumes at most one pair of backticks, stopping at end of
/// input or at a whitespace/closing-bracket/period boundary. That preserves
/// nested backticks inside a span and keeps a closing backtick from being
/// parsed as an opening one. When `force_multiline` is set, or the text is at
/// least `MULTILINE_THRESHOLD` characters, spans render as block code with a
/// `<br>` prefix, and a newline is inserted after any return-symbol glyphs
/// (the human-readable ␍/␊/⏎ characters, not actual line terminators).
pub fn convert_inline_code(text: &str, force_multiline: bool) -> String {
    let code_span =
        CODE_SPAN.get_or_init(|| Regex::new(r"(?ms)`(.+?)`($|\s|[\]\)\}>.])").unwrap());
    let multiline = force_multiline || text.chars().count() >= MULTILINE_THRESHOLD;

    let source = if multiline {
        let glyphs = RETURN_GLYPH
            .get_or_init(|| Regex::new("([\u{240D}\u{240A}]?\u{23CE})").unwrap());
        glyphs.replace_all(text, "$1\n").into_owned()
    } else {
        text.to_string()
    };

    code_span
        .replace_all(&source, |caps: &Captures| {
            let body = &caps[1];
            let boundary = &caps[2];
            let rendered = if multiline {
                to_code(
                    &format!("<br>{body}"),
                    false,
                    "pre",
                    &[("lang", "javascript")],
                )
            } else {
                to_code(body, true, "p", &[])
            };
            format!("{rendered}{boundary}")
        })
        .into_owned()
}

#[derive(Debug, Clone)]
/// Closed set of cell shapes accepted by `to_custom_table`.
pub enum Cell {
    /// Plain `<td>` content.
    Plain(String),
    /// `<td>` content with per-cell attributes (alignment, hover title).
    Attributed(String, Vec<(String, String)>),
    /// `<th>` content.
    Header(String),
}

/// Render a table element from rows of cells, in input order.
///
/// A non-empty `table_id` becomes the table's `id` attribute, which the host
/// turns into a stable anchor target.
pub fn to_custom_table(rows: &[Vec<Cell>], table_id: &str) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Plain(data) => wrap(data, "td", false, &[]),
                    Cell::Attributed(data, attrs) => {
                        let pairs: Vec<(&str, &str)> = attrs
                            .iter()
                            .map(|(k, v)| (k.as_str(), v.as_str()))
                            .collect();
                        wrap(data, "td", false, &pairs)
                    }
                    Cell::Header(data) => wrap(data, "th", false, &[]),
                })
                .collect();
            wrap(&cells, "tr", false, &[])
        })
        .collect();

    if table_id.is_empty() {
        wrap(&body, "table", true, &[])
    } else {
        wrap(&body, "table", true, &[("id", table_id)])
    }
}

#[derive(Debug, Clone)]
/// Node of a possibly-nested unordered list.
pub enum ListNode {
    Item(String),
    List(Vec<ListNode>),
}

/// Recursively render nodes into a nested `<ul>` element.
///
/// Empty item strings are skipped silently rather than rendered as empty
/// list items. An empty node slice still renders its `<ul>` wrapper.
pub fn to_nested_ul(nodes: &[ListNode]) -> String {
    let mut contents = String::new();
    for node in nodes {
        match node {
            ListNode::Item(text) if text.is_empty() => {}
            ListNode::Item(text) => contents.push_str(&wrap(text, "li", true, &[])),
            ListNode::List(children) => contents.push_str(&to_nested_ul(children)),
        }
    }
    wrap(&contents, "ul", true, &[])
}

/// Return the bare noun when `count == 1`, else the noun with an `s`.
/// Irregular nouns must be pre-pluralized by the caller.
pub fn pluralize(count: u64, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}
