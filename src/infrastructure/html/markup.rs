// SPDX-License-Identifier: MPL-2.0
//! Markup scanning for HTML templates, on top of `quick_xml`.
//!
//! The reader runs with end-name checks off so that HTML void elements and
//! loosely nested templates still produce an event stream. Comments, CDATA
//! and doctypes come out as their own events and never match a tag. Tag and
//! attribute names compare ASCII case-insensitively.

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;
use std::ops::Range;

pub use quick_xml::escape::escape;

/// A start tag located in a document.
#[derive(Debug, Clone)]
pub struct StartTag<'a> {
    /// Byte range of the whole tag, `<` through `>`.
    pub span: Range<usize>,
    pub self_closing: bool,
    tag: BytesStart<'a>,
}

impl StartTag<'_> {
    /// Lowercased tag name.
    #[must_use]
    pub fn name(&self) -> String {
        String::from_utf8_lossy(self.tag.name().as_ref()).to_ascii_lowercase()
    }

    /// Unescaped value of attribute `name`. Valueless attributes read as "".
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.tag
            .html_attributes()
            .flatten()
            .find(|attr| attr.key.as_ref().eq_ignore_ascii_case(name.as_bytes()))
            .map(|attr| value_text(&attr))
    }

    /// Serializes the tag with attribute `name` set to `value`, or removed
    /// when `value` is `None`. A set attribute moves to the end of the tag.
    #[must_use]
    pub fn with_attribute(&self, name: &str, value: Option<&str>) -> String {
        let tag_name = String::from_utf8_lossy(self.tag.name().as_ref()).into_owned();
        let mut tag = BytesStart::new(tag_name);
        tag.extend_attributes(
            self.tag
                .html_attributes()
                .flatten()
                .filter(|attr| !attr.key.as_ref().eq_ignore_ascii_case(name.as_bytes())),
        );
        if let Some(value) = value {
            tag.push_attribute((name, value));
        }

        let content = String::from_utf8_lossy(&tag);
        if self.self_closing {
            format!("<{content}/>")
        } else {
            format!("<{content}>")
        }
    }
}

/// An element located in a document: its start tag and, unless void or
/// unterminated, the byte range of its end tag.
#[derive(Debug, Clone)]
pub struct Element<'a> {
    pub start: StartTag<'a>,
    pub end: Option<Range<usize>>,
}

impl Element<'_> {
    /// Byte range of the element's content, between start and end tags.
    #[must_use]
    pub fn inner(&self) -> Option<Range<usize>> {
        self.end.as_ref().map(|end| self.start.span.end..end.start)
    }
}

/// Iterates over the start tags of `html`, in document order.
pub fn start_tags(html: &str) -> impl Iterator<Item = StartTag<'_>> {
    events(html).filter_map(|(event, end)| start_tag(event, end))
}

/// Finds the element whose `id` attribute equals `id`.
///
/// Nested elements with the same name are balanced, so the end tag returned
/// is the one closing this element.
pub fn find_element_by_id<'a>(html: &'a str, id: &str) -> Option<Element<'a>> {
    let mut events = events(html);
    let start = events
        .by_ref()
        .filter_map(|(event, end)| start_tag(event, end))
        .find(|tag| tag.attribute("id").as_deref() == Some(id))?;
    if start.self_closing {
        return Some(Element { start, end: None });
    }

    let name = start.name();
    let mut depth = 1usize;
    let end = events.find_map(|(event, end)| match event {
        Event::Start(tag) if tag.name().as_ref().eq_ignore_ascii_case(name.as_bytes()) => {
            depth += 1;
            None
        }
        Event::End(tag) if tag.trim_ascii().eq_ignore_ascii_case(name.as_bytes()) => {
            depth -= 1;
            // `</` + name + `>`
            (depth == 0).then(|| end - (tag.len() + 3)..end)
        }
        _ => None,
    });
    Some(Element { start, end })
}

/// Replaces every start tag for which `rewrite` returns new text.
pub fn rewrite_start_tags(
    html: &str,
    mut rewrite: impl FnMut(&StartTag<'_>) -> Option<String>,
) -> String {
    let mut out = String::with_capacity(html.len());
    let mut copied = 0;
    for tag in start_tags(html) {
        if let Some(replacement) = rewrite(&tag) {
            out.push_str(&html[copied..tag.span.start]);
            out.push_str(&replacement);
            copied = tag.span.end;
        }
    }
    out.push_str(&html[copied..]);
    out
}

/// Reader events paired with the byte offset just past each one.
///
/// Stops at the end of input, or at the first construct the reader rejects.
fn events(html: &str) -> impl Iterator<Item = (Event<'_>, usize)> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.trim_markup_names_in_closing_tags = false;

    std::iter::from_fn(move || match reader.read_event() {
        Ok(Event::Eof) => None,
        Ok(event) => {
            let end = usize::try_from(reader.buffer_position()).unwrap_or(html.len());
            Some((event, end))
        }
        Err(err) => {
            tracing::debug!(error = %err, "template markup not understood, scan stopped");
            None
        }
    })
}

fn start_tag(event: Event<'_>, end: usize) -> Option<StartTag<'_>> {
    match event {
        // `<` + content + `>`
        Event::Start(tag) => Some(StartTag {
            span: end - (tag.len() + 2)..end,
            self_closing: false,
            tag,
        }),
        // `<` + content + `/>`
        Event::Empty(tag) => Some(StartTag {
            span: end - (tag.len() + 3)..end,
            self_closing: true,
            tag,
        }),
        _ => None,
    }
}

fn value_text(attr: &Attribute<'_>) -> String {
    attr.unescape_value()
        .map(Cow::into_owned)
        .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned())
}
