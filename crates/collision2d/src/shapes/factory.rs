//! Rectangle constructors for entity code

use super::Rectangle;

/// Makes a rectangle whose bottom-left corner (before rotation) is at `(x, y)`
pub fn make_rect_at_bottom_left(x: f64, y: f64, w: f64, h: f64, rotation: f64) -> Rectangle {
    Rectangle::new(x + w / 2.0, y + h / 2.0, w, h, rotation)
}

/// Makes a rectangle centred at `(x, y)`
pub fn make_rect_at_center(x: f64, y: f64, w: f64, h: f64, rotation: f64) -> Rectangle {
    Rectangle::new(x, y, w, h, rotation)
}
