// SPDX-License-Identifier: MPL-2.0
//! Gallery card markup.

use super::markup::escape;
use crate::domain::gallery::ImageRecord;
use std::fmt::Write;

/// Renders the card for one image.
///
/// The card is a Bootstrap column holding a lightbox link around the lazily
/// loaded image, a zoom overlay, and the title. `visible` adds the class the
/// reveal-on-scroll stylesheet keys on.
pub fn render(image: &ImageRecord, visible: bool) -> String {
    let path = escape(&image.path);
    let title = escape(&image.title);
    let category = escape(image.category.as_str());
    let classes = if visible {
        "col-md-6 col-lg-4 gallery-item fade-in visible"
    } else {
        "col-md-6 col-lg-4 gallery-item fade-in"
    };

    let mut html = String::with_capacity(640 + 3 * path.len());
    // Writing to a String cannot fail.
    let _ = write!(
        html,
        r#"
<div class="{classes}" data-category="{category}">
    <div class="gallery-card">
        <a href="{path}" data-lightbox="gallery" data-title="{title}">
            <div class="gallery-image">
                <img src="{path}" alt="{title}" class="img-fluid" loading="lazy" onerror="this.closest('.gallery-item').style.display='none'">
                <div class="gallery-overlay">
                    <i class="bi bi-zoom-in"></i>
                </div>
            </div>
        </a>
        <div class="gallery-info p-3">
            <h6 class="fw-bold mb-1">{title}</h6>
        </div>
    </div>
</div>
"#
    );
    html
}
