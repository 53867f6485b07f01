//! Pure geometry helpers over element bounds.

use serde::{Deserialize, Serialize};

use crate::Element;

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether `other` is fully contained in `self`, all four edges
    /// inclusive.
    #[must_use]
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the two rectangles intersect with positive area on both
    /// axes. Exactly edge-touching rectangles do NOT overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

impl Element {
    /// The element's axis-aligned bounding box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        )
    }
}

/// Whether the element's box is fully contained in `rect` (edges inclusive).
#[must_use]
pub fn in_bounds(element: &Element, rect: &Rect) -> bool {
    rect.contains(&element.bounds())
}

/// Whether the two elements' boxes overlap with positive area.
#[must_use]
pub fn overlaps(a: &Element, b: &Element) -> bool {
    a.bounds().overlaps(&b.bounds())
}

/// Stable sort ascending by `z_index`. Equal-z elements retain their
/// relative input order, which makes paint order deterministic.
#[must_use]
pub fn sort_by_z(elements: &[Element]) -> Vec<Element> {
    let mut sorted = elements.to_vec();
    sorted.sort_by_key(|e| e.z_index);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElementType, Position, Size};

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Element {
        Element::new(ElementType::Divider)
            .at(Position::new(x, y))
            .sized(Size::new(w, h))
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));
    }

    #[test]
    fn test_proper_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_disjoint_is_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(30.0, 30.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_in_bounds_edges_inclusive() {
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        // Exactly filling the bounds counts as contained
        assert!(in_bounds(&boxed(0.0, 0.0, 100.0, 100.0), &canvas));
        assert!(in_bounds(&boxed(10.0, 10.0, 50.0, 50.0), &canvas));
        // Sticking out on any edge does not
        assert!(!in_bounds(&boxed(60.0, 10.0, 50.0, 50.0), &canvas));
        assert!(!in_bounds(&boxed(-1.0, 0.0, 50.0, 50.0), &canvas));
    }

    #[test]
    fn test_sort_by_z_is_stable() {
        let mut a = boxed(0.0, 0.0, 1.0, 1.0);
        a.z_index = 1;
        let mut b = boxed(0.0, 0.0, 1.0, 1.0);
        b.z_index = 1;
        let mut c = boxed(0.0, 0.0, 1.0, 1.0);
        c.z_index = 0;

        let sorted = sort_by_z(&[a.clone(), b.clone(), c.clone()]);
        let ids: Vec<_> = sorted.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![c.id, a.id, b.id]);
    }

    #[test]
    fn test_sort_by_z_leaves_input_untouched() {
        let mut a = boxed(0.0, 0.0, 1.0, 1.0);
        a.z_index = 5;
        let b = boxed(0.0, 0.0, 1.0, 1.0);
        let input = vec![a.clone(), b.clone()];
        let sorted = sort_by_z(&input);
        assert_eq!(input[0].id, a.id);
        assert_eq!(sorted[0].id, b.id);
    }
}
