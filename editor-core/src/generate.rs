//! AI-assisted page generation: the request contract and the demo
//! generator that fills a canvas from a structured prompt.
//!
//! A production deployment would call a language model here; the demo
//! generator mirrors its output shape deterministically so the import path
//! through the store is exercised end to end.

use serde::{Deserialize, Serialize};

use crate::{
    ButtonVariant, EditorError, EditorResult, Element, ElementContent, ElementStyle, Position,
    Size, TextAlign, TextTag,
};

/// Tone of the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Business-facing, authoritative copy.
    Professional,
    /// Conversational, everyday copy.
    Casual,
    /// Premium, aspirational copy.
    Luxury,
    /// Specification-heavy, feature-first copy.
    Tech,
}

/// Visual style of the generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    /// Clean, blue-accented look.
    Modern,
    /// Dark, restrained look.
    Classic,
    /// Grayscale, sparse look.
    Minimal,
    /// Saturated, image-heavy look.
    Colorful,
}

/// A structured generation prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Product name. Required; must be non-empty after trimming.
    pub product_name: String,
    /// Product category, e.g. "electronics".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    /// Who the page should speak to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    /// Key selling points. Clients comma-split free text into this list;
    /// see [`parse_key_features`].
    #[serde(default)]
    pub key_features: Vec<String>,
    /// Tone of the copy.
    pub tone: Tone,
    /// Visual style of the page.
    pub style: StylePreset,
    /// Free-form extra instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_instructions: Option<String>,
}

impl GenerationRequest {
    /// Validate the request before any state mutation.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Validation`] when the product name is empty
    /// after trimming.
    pub fn validate(&self) -> EditorResult<()> {
        if self.product_name.trim().is_empty() {
            return Err(EditorError::Validation(
                "product name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// The generator's reply: a full replacement element array plus follow-up
/// suggestions for the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Elements to import wholesale via the store's bulk-set operation.
    pub elements: Vec<Element>,
    /// Human-readable follow-up suggestions.
    pub suggestions: Vec<String>,
}

/// Split a free-text feature list on commas, trimming entries and dropping
/// empty ones.
#[must_use]
pub fn parse_key_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Fallback features when the prompt supplies none.
const FALLBACK_FEATURES: [&str; 3] = [
    "High-quality materials",
    "Contemporary design",
    "Outstanding performance",
];

/// Generate a full page for the prompt.
///
/// The layout mirrors what the model is prompted to produce: heading, hero
/// image, product card, tone-keyed description, style-keyed call to action,
/// and an extra image for the colorful style.
///
/// # Errors
///
/// Returns [`EditorError::Validation`] when the request fails validation;
/// no elements are produced in that case.
pub fn generate(request: &GenerationRequest) -> EditorResult<GenerationResult> {
    request.validate()?;

    let name = request.product_name.trim();
    let mut elements = vec![
        page_title(name),
        hero_image(name),
        product_card(request, name),
        description_block(name, request.tone),
        cta_button(request.style),
    ];

    // The colorful style gets a secondary detail image
    if request.style == StylePreset::Colorful {
        elements.push(detail_image());
    }

    Ok(GenerationResult {
        elements,
        suggestions: vec![
            "Try adding more images".to_string(),
            "A customer review section would strengthen the page".to_string(),
            "Consider highlighting the discount more".to_string(),
        ],
    })
}

fn page_title(name: &str) -> Element {
    Element::with_content(ElementContent::Heading {
        text: name.to_string(),
        tag: TextTag::H1,
    })
    .at(Position::new(50.0, 50.0))
    .sized(Size::new(600.0, 50.0))
    .styled(ElementStyle {
        font_size: Some(32.0),
        font_weight: Some("bold".to_string()),
        color: Some("#1a1a1a".to_string()),
        text_align: Some(TextAlign::Center),
        ..ElementStyle::default()
    })
}

fn hero_image(name: &str) -> Element {
    Element::with_content(ElementContent::Image {
        src: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=300&fit=crop"
            .to_string(),
        alt: name.to_string(),
        caption: Some(String::new()),
    })
    .at(Position::new(50.0, 120.0))
    .sized(Size::new(400.0, 300.0))
    .styled(ElementStyle {
        border_radius: Some(12.0),
        ..ElementStyle::default()
    })
}

fn product_card(request: &GenerationRequest, name: &str) -> Element {
    let features = if request.key_features.is_empty() {
        FALLBACK_FEATURES.map(ToString::to_string).to_vec()
    } else {
        request.key_features.clone()
    };
    let category = request.product_category.as_deref().unwrap_or("product");
    let audience = request
        .target_audience
        .as_deref()
        .unwrap_or("every customer");
    let price = demo_price(name);

    Element::with_content(ElementContent::ProductInfo {
        name: name.to_string(),
        price,
        original_price: Some(price + price / 5),
        description: format!(
            "A premium {category} made for {audience}, built on proven quality and performance."
        ),
        features,
    })
    .at(Position::new(480.0, 120.0))
    .sized(Size::new(350.0, 300.0))
    .styled(ElementStyle {
        background_color: Some("#f8f9fa".to_string()),
        border_radius: Some(12.0),
        padding: Some(20.0),
        ..ElementStyle::default()
    })
}

fn description_block(name: &str, tone: Tone) -> Element {
    Element::with_content(ElementContent::Text {
        text: description_for(name, tone),
        tag: TextTag::P,
    })
    .at(Position::new(50.0, 450.0))
    .sized(Size::new(780.0, 100.0))
    .styled(ElementStyle {
        font_size: Some(16.0),
        color: Some("#4a5568".to_string()),
        padding: Some(20.0),
        background_color: Some("#ffffff".to_string()),
        border_radius: Some(8.0),
        ..ElementStyle::default()
    })
}

fn cta_button(style: StylePreset) -> Element {
    Element::with_content(ElementContent::Button {
        text: "Buy now".to_string(),
        href: None,
        variant: ButtonVariant::Primary,
    })
    .at(Position::new(50.0, 580.0))
    .sized(Size::new(200.0, 50.0))
    .styled(ElementStyle {
        background_color: Some(button_color_for(style).to_string()),
        color: Some("#ffffff".to_string()),
        border_radius: Some(8.0),
        font_size: Some(16.0),
        font_weight: Some("bold".to_string()),
        ..ElementStyle::default()
    })
}

fn detail_image() -> Element {
    Element::with_content(ElementContent::Image {
        src: "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=200&h=100&fit=crop"
            .to_string(),
        alt: "Product detail".to_string(),
        caption: Some(String::new()),
    })
    .at(Position::new(300.0, 580.0))
    .sized(Size::new(200.0, 100.0))
    .styled(ElementStyle {
        border_radius: Some(8.0),
        ..ElementStyle::default()
    })
}

/// Description copy keyed by tone.
fn description_for(name: &str, tone: Tone) -> String {
    let base = format!("{name} combines innovative engineering with refined design.");
    match tone {
        Tone::Professional => format!(
            "{base} Trusted quality and performance deliver a dependable solution for demanding business environments."
        ),
        Tone::Casual => format!(
            "{base} It's an easy pick that makes everyday life simpler and a lot more fun."
        ),
        Tone::Luxury => format!(
            "{base} Crafted from the finest materials for those who expect a truly premium experience."
        ),
        Tone::Tech => format!(
            "{base} Cutting-edge components and measured performance gains push the user experience to its limits."
        ),
    }
}

/// Call-to-action color keyed by visual style.
fn button_color_for(style: StylePreset) -> &'static str {
    match style {
        StylePreset::Modern => "#2563eb",
        StylePreset::Classic => "#1f2937",
        StylePreset::Minimal => "#374151",
        StylePreset::Colorful => "#dc2626",
    }
}

/// Demo price derived from a stable hash of the product name, mapped into
/// the 50 000 - 550 000 range. Deterministic so generation is testable.
fn demo_price(name: &str) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for byte in name.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(16_777_619);
    }
    50_000 + hash % 500_000
}
