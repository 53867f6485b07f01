//! Page elements - the building blocks of an editor document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an element on the canvas (pixels from the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates to be non-negative.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Size of an element in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Size {
    /// Minimum width an interactive resize may produce.
    pub const MIN_WIDTH: f32 = 50.0;
    /// Minimum height an interactive resize may produce.
    pub const MIN_HEIGHT: f32 = 30.0;

    /// Create a size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp to the interactive resize minimums.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(Self::MIN_WIDTH),
            height: self.height.max(Self::MIN_HEIGHT),
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left-aligned text.
    Left,
    /// Centered text.
    Center,
    /// Right-aligned text.
    Right,
}

/// Sparse visual styling attributes.
///
/// Every field is optional: absence means "use the renderer default",
/// not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    /// Font size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// CSS font weight keyword or number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Text color as hex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background color as hex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Inner padding in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Outer margin in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    /// Corner radius in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// CSS border shorthand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    /// Horizontal text alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

/// HTML tag rendered for a text or heading element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTag {
    /// Paragraph.
    P,
    /// Top-level heading.
    H1,
    /// Second-level heading.
    H2,
    /// Third-level heading.
    H3,
    /// Fourth-level heading.
    H4,
    /// Fifth-level heading.
    H5,
    /// Sixth-level heading.
    H6,
}

/// Visual treatment of a button element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled call-to-action button.
    Primary,
    /// Secondary filled button.
    Secondary,
    /// Outlined button.
    Outline,
}

/// Layout mode of a container element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerLayout {
    /// Horizontal flex row.
    FlexRow,
    /// Vertical flex column.
    FlexCol,
    /// Grid layout.
    Grid,
}

/// The closed set of element variants.
///
/// `Copy` discriminant used as the factory key; the payload lives in
/// [`ElementContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    /// Body text block.
    Text,
    /// Heading text block.
    Heading,
    /// Image with optional caption.
    Image,
    /// Clickable button.
    Button,
    /// Horizontal divider rule.
    Divider,
    /// Grouping container for other elements.
    Container,
    /// Product name/price/description card.
    ProductInfo,
    /// Customer review section.
    ReviewSection,
    /// Specification table.
    SpecTable,
}

/// Type-specific content payload of an element.
///
/// Adjacently tagged so an element serializes as
/// `{"type": "text", "content": {...}}`, matching the editor wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "kebab-case")]
pub enum ElementContent {
    /// Body text.
    Text {
        /// Text content.
        text: String,
        /// HTML tag to render with.
        tag: TextTag,
    },
    /// Heading text.
    Heading {
        /// Heading content.
        text: String,
        /// HTML tag to render with.
        tag: TextTag,
    },
    /// Image.
    Image {
        /// Image source URI.
        src: String,
        /// Alternative text.
        alt: String,
        /// Optional caption shown below the image.
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// Button.
    Button {
        /// Button label.
        text: String,
        /// Optional link target.
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        /// Visual treatment.
        variant: ButtonVariant,
    },
    /// Divider rule. Carries no content.
    Divider {},
    /// Grouping container.
    Container {
        /// IDs of the child elements.
        children: Vec<ElementId>,
        /// Layout mode for the children.
        layout: ContainerLayout,
        /// Gap between children in pixels.
        #[serde(skip_serializing_if = "Option::is_none")]
        gap: Option<f32>,
    },
    /// Product information card.
    ProductInfo {
        /// Product name.
        name: String,
        /// Current price in minor currency units.
        price: u32,
        /// Pre-discount price, when showing a markdown.
        #[serde(skip_serializing_if = "Option::is_none")]
        original_price: Option<u32>,
        /// Product description.
        description: String,
        /// Bullet-point feature list.
        features: Vec<String>,
    },
    /// Customer review section. Rendered from external review data.
    ReviewSection {},
    /// Product specification table.
    SpecTable {},
}

impl ElementContent {
    /// The discriminant for this payload.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Text { .. } => ElementType::Text,
            Self::Heading { .. } => ElementType::Heading,
            Self::Image { .. } => ElementType::Image,
            Self::Button { .. } => ElementType::Button,
            Self::Divider {} => ElementType::Divider,
            Self::Container { .. } => ElementType::Container,
            Self::ProductInfo { .. } => ElementType::ProductInfo,
            Self::ReviewSection {} => ElementType::ReviewSection,
            Self::SpecTable {} => ElementType::SpecTable,
        }
    }
}

/// Offset applied to a cloned element so the copy is visually
/// distinguishable from the original.
pub const CLONE_OFFSET: f32 = 20.0;

/// Default size for elements whose type has no specific default.
const BASE_SIZE: Size = Size {
    width: 200.0,
    height: 50.0,
};

/// A positioned, sized, styled, typed visual unit on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, stable for the element's lifetime.
    pub id: ElementId,
    /// Type discriminant and type-specific payload.
    #[serde(flatten)]
    pub content: ElementContent,
    /// Position on the canvas.
    pub position: Position,
    /// Size in pixels.
    pub size: Size,
    /// Sparse visual styling.
    pub style: ElementStyle,
    /// Stacking key; higher paints above lower. Need not be unique.
    #[serde(rename = "zIndex")]
    pub z_index: i32,
}

impl Element {
    /// Create a new element of the given type with a fresh unique id,
    /// zero position, and type-appropriate default size, style, and content.
    #[must_use]
    pub fn new(element_type: ElementType) -> Self {
        let (size, style, content) = defaults_for(element_type);
        Self {
            id: ElementId::new(),
            content,
            position: Position::default(),
            size,
            style,
            z_index: 1,
        }
    }

    /// Create an element from an explicit content payload, with the default
    /// size and style for that payload's type.
    #[must_use]
    pub fn with_content(content: ElementContent) -> Self {
        let mut element = Self::new(content.element_type());
        element.content = content;
        element
    }

    /// Set the position.
    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the size.
    #[must_use]
    pub fn sized(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the style.
    #[must_use]
    pub fn styled(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    /// The element's type discriminant.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        self.content.element_type()
    }

    /// Deep copy with a new id and position offset by `(+20, +20)`.
    /// Size, style, and content are preserved.
    #[must_use]
    pub fn clone_with_offset(&self) -> Self {
        let mut clone = self.clone();
        clone.id = ElementId::new();
        clone.position = Position::new(
            self.position.x + CLONE_OFFSET,
            self.position.y + CLONE_OFFSET,
        );
        clone
    }
}

/// Default size, style, and content for each element type.
///
/// Unlisted types fall through to the base 200x50 shape with empty content.
fn defaults_for(element_type: ElementType) -> (Size, ElementStyle, ElementContent) {
    match element_type {
        ElementType::Text => (
            BASE_SIZE,
            ElementStyle {
                font_size: Some(16.0),
                color: Some("#000000".to_string()),
                ..ElementStyle::default()
            },
            ElementContent::Text {
                text: "Enter text".to_string(),
                tag: TextTag::P,
            },
        ),
        ElementType::Heading => (
            Size::new(300.0, 40.0),
            ElementStyle {
                font_size: Some(24.0),
                font_weight: Some("bold".to_string()),
                color: Some("#000000".to_string()),
                ..ElementStyle::default()
            },
            ElementContent::Heading {
                text: "Enter heading".to_string(),
                tag: TextTag::H2,
            },
        ),
        ElementType::Image => (
            Size::new(300.0, 200.0),
            ElementStyle::default(),
            ElementContent::Image {
                src: "/placeholder-image.jpg".to_string(),
                alt: "Image".to_string(),
                caption: Some(String::new()),
            },
        ),
        ElementType::Button => (
            Size::new(120.0, 40.0),
            ElementStyle {
                background_color: Some("#007bff".to_string()),
                color: Some("#ffffff".to_string()),
                border_radius: Some(6.0),
                ..ElementStyle::default()
            },
            ElementContent::Button {
                text: "Button".to_string(),
                href: None,
                variant: ButtonVariant::Primary,
            },
        ),
        ElementType::Container => (
            Size::new(400.0, 200.0),
            ElementStyle {
                background_color: Some("#f8f9fa".to_string()),
                padding: Some(20.0),
                border_radius: Some(8.0),
                ..ElementStyle::default()
            },
            ElementContent::Container {
                children: Vec::new(),
                layout: ContainerLayout::FlexCol,
                gap: Some(10.0),
            },
        ),
        ElementType::ProductInfo => (
            Size::new(400.0, 300.0),
            ElementStyle {
                padding: Some(20.0),
                ..ElementStyle::default()
            },
            ElementContent::ProductInfo {
                name: "Product name".to_string(),
                price: 99_000,
                original_price: None,
                description: "Enter a product description".to_string(),
                features: vec![
                    "Feature 1".to_string(),
                    "Feature 2".to_string(),
                    "Feature 3".to_string(),
                ],
            },
        ),
        ElementType::Divider => (BASE_SIZE, ElementStyle::default(), ElementContent::Divider {}),
        ElementType::ReviewSection => (
            BASE_SIZE,
            ElementStyle::default(),
            ElementContent::ReviewSection {},
        ),
        ElementType::SpecTable => (
            BASE_SIZE,
            ElementStyle::default(),
            ElementContent::SpecTable {},
        ),
    }
}
