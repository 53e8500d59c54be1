// SPDX-License-Identifier: MPL-2.0
//! HTML page render target.
//!
//! [`HtmlDocument`] takes a page template holding the gallery container, the
//! optional "load more" control and the category filter buttons, applies
//! render instructions, and serializes the resulting page.
//!
//! A static page has no scroll events, so revealing cards happens as soon as
//! animations are observed: observed cards carry the `visible` class.

pub mod card;
pub mod markup;

use crate::application::port::RenderTarget;
use crate::domain::gallery::{CategoryFilter, ImageRecord, LoadMoreState, RenderInstruction};
use crate::error::{Error, Result};

/// Icon shown before the "load more" caption.
const LOAD_MORE_ICON: &str = r#"<i class="bi bi-plus-circle me-2"></i>"#;

#[derive(Debug, Clone)]
struct Card {
    image: ImageRecord,
    visible: bool,
}

/// A page template with a gallery container.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    /// Template text up to and including the container start tag.
    head: String,
    /// Container content from the template, kept until the first clear.
    initial_content: Option<String>,
    /// Template text from the container end tag on.
    tail: String,
    container_id: String,
    load_more_id: Option<String>,
    cards: Vec<Card>,
    load_more: Option<LoadMoreState>,
    active_filter: Option<CategoryFilter>,
}

impl HtmlDocument {
    /// Splits `template` around the element with id `container_id`.
    ///
    /// The load-more control is optional: when `load_more_id` is `None` or no
    /// element carries it, visibility updates are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingContainer`] if no element has `container_id`,
    /// or if that element is void or never closed.
    pub fn parse(template: &str, container_id: &str, load_more_id: Option<&str>) -> Result<Self> {
        let element = markup::find_element_by_id(template, container_id)
            .ok_or_else(|| Error::MissingContainer(container_id.to_string()))?;
        let (inner, end) = match (element.inner(), element.end) {
            (Some(inner), Some(end)) => (inner, end),
            _ => return Err(Error::MissingContainer(container_id.to_string())),
        };

        let load_more_id = load_more_id
            .filter(|id| markup::find_element_by_id(template, id).is_some())
            .map(str::to_string);

        Ok(Self {
            head: template[..element.start.span.end].to_string(),
            initial_content: Some(template[inner].to_string()),
            tail: template[end.start..].to_string(),
            container_id: container_id.to_string(),
            load_more_id,
            cards: Vec::new(),
            load_more: None,
            active_filter: None,
        })
    }

    /// Images currently rendered in the container, in order.
    pub fn rendered_images(&self) -> impl Iterator<Item = &ImageRecord> {
        self.cards.iter().map(|card| &card.image)
    }

    /// Number of cards currently in the container.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Last load-more state applied, if any.
    #[must_use]
    pub fn load_more(&self) -> Option<&LoadMoreState> {
        self.load_more.as_ref()
    }

    /// Serializes the page with every applied instruction.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(self.head.len() + self.tail.len() + 700 * self.cards.len());
        html.push_str(&self.head);
        if let Some(content) = &self.initial_content {
            html.push_str(content);
        }
        for card in &self.cards {
            html.push_str(&card::render(&card.image, card.visible));
        }
        html.push_str(&self.tail);

        if let (Some(id), Some(state)) = (&self.load_more_id, &self.load_more) {
            html = patch_load_more(&html, id, state);
        }
        if let Some(filter) = &self.active_filter {
            html = patch_filter_buttons(&html, filter);
        }
        html
    }
}

impl RenderTarget for HtmlDocument {
    fn has_element(&self, id: &str) -> bool {
        id == self.container_id
            || markup::find_element_by_id(&self.head, id).is_some()
            || markup::find_element_by_id(&self.tail, id).is_some()
    }

    fn apply(&mut self, instructions: &[RenderInstruction]) {
        for instruction in instructions {
            match instruction {
                RenderInstruction::Clear => {
                    self.initial_content = None;
                    self.cards.clear();
                }
                RenderInstruction::AppendCard(image) => self.cards.push(Card {
                    image: image.clone(),
                    visible: false,
                }),
                RenderInstruction::SetLoadMore(state) => self.load_more = Some(state.clone()),
                RenderInstruction::SetActiveFilter(filter) => {
                    self.active_filter = Some(filter.clone());
                }
                RenderInstruction::ObserveAnimations => {
                    for card in &mut self.cards {
                        card.visible = true;
                    }
                }
            }
        }
    }
}

/// Shows or hides the load-more control and sets its caption.
fn patch_load_more(html: &str, id: &str, state: &LoadMoreState) -> String {
    let Some(element) = markup::find_element_by_id(html, id) else {
        return html.to_string();
    };
    let display = if state.visible {
        "display: inline-block"
    } else {
        "display: none"
    };
    let mut out = String::with_capacity(html.len() + 64);
    out.push_str(&html[..element.start.span.start]);
    out.push_str(&element.start.with_attribute("style", Some(display)));

    match (state.visible, element.inner()) {
        (true, Some(inner)) => {
            out.push_str(LOAD_MORE_ICON);
            out.push_str(&markup::escape(&state.label));
            out.push_str(&html[inner.end..]);
        }
        _ => out.push_str(&html[element.start.span.end..]),
    }
    out
}

/// Moves the `active` class to the filter controls whose `data-filter` matches.
fn patch_filter_buttons(html: &str, filter: &CategoryFilter) -> String {
    markup::rewrite_start_tags(html, |tag| {
        let value = tag.attribute("data-filter")?;
        let selected = value.parse::<CategoryFilter>().ok()? == *filter;

        let classes = tag.attribute("class").unwrap_or_default();
        let mut tokens: Vec<&str> = classes
            .split_ascii_whitespace()
            .filter(|token| *token != "active")
            .collect();
        if selected {
            tokens.push("active");
        }
        let classes = tokens.join(" ");
        let classes = (!classes.is_empty()).then_some(classes.as_str());
        Some(tag.with_attribute("class", classes))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::Category;

    const TEMPLATE: &str = r#"<section>
<div class="gallery-filters">
<button class="btn active" data-filter="all">Tout</button>
<button class="btn" data-filter="theatre">Théâtre</button>
</div>
<div class="row g-4" id="photoGallery"><p>placeholder</p></div>
<button id="loadMoreBtn" class="btn btn-primary">Load</button>
</section>"#;

    fn image(category: &str, number: u32) -> ImageRecord {
        ImageRecord {
            path: format!("photos/{category}/{number}.jpg"),
            title: format!("{category} {number}"),
            category: Category::new(category),
            sequence_number: number,
        }
    }

    fn document() -> HtmlDocument {
        HtmlDocument::parse(TEMPLATE, "photoGallery", Some("loadMoreBtn")).unwrap()
    }

    #[test]
    fn missing_container_is_an_error() {
        let result = HtmlDocument::parse(TEMPLATE, "gallery", None);
        assert!(matches!(result, Err(Error::MissingContainer(id)) if id == "gallery"));
    }

    #[test]
    fn untouched_document_serializes_to_template() {
        assert_eq!(document().to_html(), TEMPLATE);
    }

    #[test]
    fn clear_drops_placeholder_content() {
        let mut doc = document();
        doc.apply(&[RenderInstruction::Clear]);
        assert!(doc
            .to_html()
            .contains(r#"<div class="row g-4" id="photoGallery"></div>"#));
    }

    #[test]
    fn clear_drops_commented_end_tags_with_the_placeholder() {
        let template = r#"<div id="photoGallery"><!-- legacy </div> markup --></div><footer></footer>"#;
        let mut doc = HtmlDocument::parse(template, "photoGallery", None).unwrap();
        doc.apply(&[
            RenderInstruction::Clear,
            RenderInstruction::AppendCard(image("theatre", 1)),
        ]);
        let html = doc.to_html();
        assert!(!html.contains("markup -->"));
        assert!(html.ends_with("</div>\n</div><footer></footer>"));
        assert_eq!(html.matches("</div><footer>").count(), 1);
    }

    #[test]
    fn cards_are_appended_in_order() {
        let mut doc = document();
        doc.apply(&[
            RenderInstruction::Clear,
            RenderInstruction::AppendCard(image("theatre", 1)),
            RenderInstruction::AppendCard(image("colonies", 2)),
        ]);
        let html = doc.to_html();
        let first = html.find("theatre 1").unwrap();
        let second = html.find("colonies 2").unwrap();
        assert!(first < second);
        assert_eq!(doc.card_count(), 2);
    }

    #[test]
    fn observe_animations_reveals_cards() {
        let mut doc = document();
        doc.apply(&[
            RenderInstruction::AppendCard(image("theatre", 1)),
            RenderInstruction::ObserveAnimations,
        ]);
        assert!(doc.to_html().contains("gallery-item fade-in visible"));
    }

    #[test]
    fn load_more_visibility_and_label() {
        let mut doc = document();
        doc.apply(&[RenderInstruction::SetLoadMore(LoadMoreState::shown(
            "Charger plus de photos",
        ))]);
        assert!(doc.to_html().contains(
            r#"<button id="loadMoreBtn" class="btn btn-primary" style="display: inline-block"><i class="bi bi-plus-circle me-2"></i>Charger plus de photos</button>"#
        ));

        doc.apply(&[RenderInstruction::SetLoadMore(LoadMoreState::hidden())]);
        assert!(doc.to_html().contains(
            r#"<button id="loadMoreBtn" class="btn btn-primary" style="display: none">Load</button>"#
        ));
    }

    #[test]
    fn missing_load_more_control_is_ignored() {
        let mut doc = HtmlDocument::parse(TEMPLATE, "photoGallery", Some("absent")).unwrap();
        doc.apply(&[RenderInstruction::SetLoadMore(LoadMoreState::hidden())]);
        assert!(!doc.to_html().contains("display: none"));
    }

    #[test]
    fn active_filter_moves_active_class() {
        let mut doc = document();
        doc.apply(&[RenderInstruction::SetActiveFilter(CategoryFilter::Only(
            Category::new("theatre"),
        ))]);
        let html = doc.to_html();
        assert!(html.contains(r#"<button data-filter="all" class="btn">Tout</button>"#));
        assert!(html.contains(r#"<button data-filter="theatre" class="btn active">Théâtre</button>"#));
    }

    #[test]
    fn has_element_checks_whole_page() {
        let doc = document();
        assert!(doc.has_element("photoGallery"));
        assert!(doc.has_element("loadMoreBtn"));
        assert!(!doc.has_element("lightbox"));
    }
}
