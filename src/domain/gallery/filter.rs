// SPDX-License-Identifier: MPL-2.0
//! Category filtering for the gallery.
//!
//! A filter is either `All` (every discovered image) or a single category.
//! Filtering is a pure re-slice of already discovered images.

use std::fmt;
use std::str::FromStr;

use super::{Category, ImageRecord};

/// Keyword used by filter controls to select every category.
pub const ALL_KEYWORD: &str = "all";

/// Filter applied to the discovered images before pagination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every image.
    #[default]
    All,
    /// Show only images of one category.
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` if the image belongs to the filtered view.
    #[must_use]
    pub fn matches(&self, image: &ImageRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => image.category == *category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Value carried by a filter control's `data-filter` attribute.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => ALL_KEYWORD,
            Self::Only(category) => category.as_str(),
        }
    }

    /// Iterates over the images matching this filter, preserving order.
    pub fn apply<'a>(&'a self, images: &'a [ImageRecord]) -> impl Iterator<Item = &'a ImageRecord> + 'a {
        images.iter().filter(move |image| self.matches(image))
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// Parses a filter control value; `all` (any case) or an empty value selects everything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_KEYWORD) {
            Ok(Self::All)
        } else {
            Ok(Self::Only(Category::new(trimmed)))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(category: &str, number: u32) -> ImageRecord {
        ImageRecord {
            path: format!("{category}/{number}.jpg"),
            title: format!("{category} {number}"),
            category: Category::new(category),
            sequence_number: number,
        }
    }

    #[test]
    fn all_matches_everything() {
        let filter = CategoryFilter::All;
        assert!(filter.matches(&image("theatre", 1)));
        assert!(filter.matches(&image("colonies", 1)));
        assert!(!filter.is_active());
    }

    #[test]
    fn only_matches_its_category() {
        let filter = CategoryFilter::Only(Category::new("theatre"));
        assert!(filter.matches(&image("theatre", 1)));
        assert!(!filter.matches(&image("colonies", 1)));
        assert!(filter.is_active());
    }

    #[test]
    fn apply_preserves_discovery_order() {
        let images = vec![
            image("colonies", 1),
            image("theatre", 1),
            image("colonies", 2),
            image("theatre", 2),
        ];
        let filter: CategoryFilter = "theatre".parse().unwrap();
        let numbers: Vec<u32> = filter.apply(&images).map(|i| i.sequence_number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn parse_all_keyword_and_empty() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("  ".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    }

    #[test]
    fn key_round_trips_through_display() {
        let filter = CategoryFilter::Only(Category::new("activites"));
        assert_eq!(filter.to_string(), "activites");
        assert_eq!(CategoryFilter::All.to_string(), "all");
    }
}
