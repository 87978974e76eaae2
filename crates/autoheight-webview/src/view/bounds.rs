//! Coordinate conversion between layout rects and wry rects.

use autoheight_common::Rect;

/// Convert a `Rect` (f64 logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}
