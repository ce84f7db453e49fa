/// Scroll geometry sampled from a scroll surface.
///
/// `view_height` is the height of the visible part of the surface: the `clientHeight` of the scroll container for an
/// element surface, and the `innerHeight` of the window for the document surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub view_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, view_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            view_height,
        }
    }

    /// Returns true when the remaining unscrolled distance is at most `offset_px`.
    pub fn has_reached_bottom(&self, offset_px: i32) -> bool {
        self.scroll_height - f64::from(offset_px) <= self.scroll_top + self.view_height
    }

    /// Unscrolled distance between the bottom of the view and the end of the content.
    pub fn remaining_distance(&self) -> f64 {
        self.scroll_height - (self.scroll_top + self.view_height)
    }
}
