// git-conventions - A Git extension to manage branch naming and PR templates.
// Copyright (C) 2024 Jean-Philippe Cugnet <jean-philippe@cugnet.eu>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Minimal markup rendering for template previews.
//!
//! This is not a Markdown parser. The content goes through a fixed sequence of
//! passes, each one working on the output of the previous one:
//!
//! 1. lines starting with `# `, `## ` or `### ` become headings,
//! 2. `**text**` becomes bold,
//! 3. `*text*` becomes italic,
//! 4. lines starting with `- ` become list items,
//! 5. newlines become `<br>`,
//! 6. each list item is wrapped in its own list.
//!
//! Delimiters pair with the nearest following delimiter on the same line. An
//! unpaired delimiter is kept as is. List items are never grouped together.

/// Renders template content to HTML.
///
/// Absent or empty content renders to an empty string.
pub fn render<'content>(
    content: impl Into<Option<&'content str>>,
) -> String {
    let Some(content) = content.into().filter(|content| !content.is_empty())
    else {
        return String::new();
    };

    let html = wrap_lines(content, "# ", "h1");
    let html = wrap_lines(&html, "## ", "h2");
    let html = wrap_lines(&html, "### ", "h3");
    let html = wrap_pairs(&html, "**", "**", |inner| wrap(inner, "strong"));
    let html = wrap_pairs(&html, "*", "*", |inner| wrap(inner, "em"));
    let html = wrap_lines(&html, "- ", "li");
    let html = html.replace('\n', "<br>");
    wrap_pairs(&html, "<li>", "</li>", |inner| {
        format!("<ul><li>{inner}</li></ul>")
    })
}

/// Returns whether `c` ends a line.
const fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Wraps `inner` in an HTML element.
fn wrap(inner: &str, tag: &str) -> String {
    format!("<{tag}>{inner}</{tag}>")
}

/// Wraps in `tag` every line starting with `marker`, without the marker.
fn wrap_lines(text: &str, marker: &str, tag: &str) -> String {
    let mut output = String::with_capacity(text.len());

    for line in text.split_inclusive(is_line_terminator) {
        let (body, terminator) = split_terminator(line);

        match body.strip_prefix(marker) {
            Some(inner) => output.push_str(&wrap(inner, tag)),
            None => output.push_str(body),
        }

        output.push_str(terminator);
    }

    output
}

/// Splits a line into its body and its terminator, if any.
fn split_terminator(line: &str) -> (&str, &str) {
    match line.char_indices().next_back() {
        Some((index, c)) if is_line_terminator(c) => line.split_at(index),
        _ => (line, ""),
    }
}

/// Replaces each `open`…`close` pair with the output of `replace`.
///
/// The pairing is non-greedy and does not span lines. When an opening
/// delimiter has no closing one, its first character is kept and the search
/// resumes right after it.
fn wrap_pairs(
    text: &str,
    open: &str,
    close: &str,
    replace: impl Fn(&str) -> String,
) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(open) {
        let (before, candidate) = rest.split_at(start);
        output.push_str(before);

        let after_open = candidate.get(open.len()..).unwrap_or_default();
        if let Some((inner, remainder)) = find_closing(after_open, close) {
            output.push_str(&replace(inner));
            rest = remainder;
        } else {
            let skip = candidate.chars().next().map_or(0, char::len_utf8);
            let (literal, remainder) = candidate.split_at(skip);
            output.push_str(literal);
            rest = remainder;
        }
    }

    output.push_str(rest);
    output
}

/// Finds the nearest `close` on the current line.
///
/// Returns the text before the delimiter and the text after it.
fn find_closing<'text>(
    text: &'text str,
    close: &str,
) -> Option<(&'text str, &'text str)> {
    let end = text.find(close)?;
    let (inner, rest) = text.split_at(end);

    if inner.contains(is_line_terminator) {
        None
    } else {
        Some((inner, rest.get(close.len()..).unwrap_or_default()))
    }
}
