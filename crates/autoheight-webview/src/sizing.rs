//! Displayed size of the auto-height view.

/// How the displayed size is derived from the measured height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizingPolicy {
    pub auto_height: bool,
    pub default_height: u32,
    /// Fixed width. `None` follows the host window width.
    pub width: Option<u32>,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            auto_height: true,
            default_height: 100,
            width: None,
        }
    }
}

impl SizingPolicy {
    /// Height to display for the last accepted measurement.
    pub fn display_height(&self, measured: u32) -> u32 {
        if self.auto_height {
            measured
        } else {
            self.default_height
        }
    }

    /// Width to display inside a window of `window_width` logical pixels.
    pub fn display_width(&self, window_width: f64) -> f64 {
        match self.width {
            Some(w) => f64::from(w),
            None => window_width,
        }
    }

    /// `(width, height)` in logical pixels.
    pub fn display_size(&self, measured: u32, window_width: f64) -> (f64, f64) {
        (
            self.display_width(window_width),
            f64::from(self.display_height(measured)),
        )
    }
}
