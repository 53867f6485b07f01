//! Page templates: named, reusable element layouts.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::{Element, ElementContent, ElementType, Position, Size, TextTag};

/// A reusable page layout supplied by the template collaborator.
///
/// The store consumes only the `elements` array; the rest is catalog
/// metadata for pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Stable template identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Catalog category.
    pub category: String,
    /// Thumbnail image URI.
    pub thumbnail: String,
    /// Short description for the picker.
    pub description: String,
    /// The elements this template places on the canvas.
    pub elements: Vec<Element>,
    /// Creation time, unix milliseconds.
    pub created_at: u64,
}

impl Template {
    /// Create a template stamped with the current time.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        elements: Vec<Element>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            thumbnail: String::new(),
            description: description.into(),
            elements,
            created_at: current_timestamp_ms(),
        }
    }

    /// The built-in starter template: a heading, a hero image, and a
    /// product card laid out for a simple product page.
    #[must_use]
    pub fn starter() -> Self {
        let heading = Element::with_content(ElementContent::Heading {
            text: "Product showcase".to_string(),
            tag: TextTag::H1,
        })
        .at(Position::new(50.0, 50.0))
        .sized(Size::new(600.0, 50.0));

        let hero = Element::new(ElementType::Image)
            .at(Position::new(50.0, 120.0))
            .sized(Size::new(400.0, 300.0));

        let card = Element::new(ElementType::ProductInfo)
            .at(Position::new(480.0, 120.0))
            .sized(Size::new(350.0, 300.0));

        Self::new(
            "starter",
            "Starter page",
            "product",
            "A heading, a hero image, and a product card to build from",
            vec![heading, hero, card],
        )
    }
}

/// Current unix timestamp in milliseconds.
#[must_use]
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| {
        // Timestamp will not exceed u64 max for millennia
        #[allow(clippy::cast_possible_truncation)]
        {
            d.as_millis() as u64
        }
    })
}
