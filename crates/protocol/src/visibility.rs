use serde::{Deserialize, Serialize};

/// One notification from the host's viewport-visibility service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    /// Fraction of the element inside the viewport, `0.0..=1.0`.
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    pub fn new(is_intersecting: bool, intersection_ratio: f64) -> Self {
        Self {
            is_intersecting,
            intersection_ratio,
        }
    }

    /// An intersecting entry at `ratio`.
    pub fn visible(ratio: f64) -> Self {
        Self::new(true, ratio)
    }

    /// An entry reporting the element left the viewport.
    pub fn hidden() -> Self {
        Self::new(false, 0.0)
    }

    /// Whether at least `threshold` of the element is in view.
    pub fn is_visible_at(&self, threshold: f64) -> bool {
        self.is_intersecting && self.intersection_ratio >= threshold
    }
}
