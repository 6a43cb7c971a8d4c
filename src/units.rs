//! English Metric Units and layout constants.
//!
//! Drawing dimensions are stored in EMU, 1/914400 inch.

use crate::model::Extent;

/// EMU per inch.
pub const EMUS_PER_INCH: i64 = 914_400;

/// EMU per typographic point.
pub const EMUS_PER_POINT: i64 = 12_700;

/// EMU per centimeter.
pub const EMUS_PER_CM: i64 = 360_000;

/// Maximum display width of an A4 page body with default margins.
pub const A4_MAX_DISPLAY_WIDTH: i64 = 5_274_310;

/// Convert EMU to inches.
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// Convert EMU to points.
pub fn emu_to_points(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_POINT as f64
}

/// Convert points to EMU, rounding to the nearest unit.
pub fn points_to_emu(points: f64) -> i64 {
    (points * EMUS_PER_POINT as f64).round() as i64
}

impl Extent {
    /// Create an extent.
    pub fn new(cx: i64, cy: i64) -> Self {
        Self { cx, cy }
    }

    /// Width in inches.
    pub fn width_inches(&self) -> f64 {
        emu_to_inches(self.cx)
    }

    /// Height in inches.
    pub fn height_inches(&self) -> f64 {
        emu_to_inches(self.cy)
    }

    /// Scale down proportionally so the width does not exceed `max_width`.
    ///
    /// Extents that already fit, or have no width, are returned unchanged.
    pub fn fit_width(&self, max_width: i64) -> Extent {
        if self.cx <= max_width || self.cx <= 0 {
            return *self;
        }
        let cy = (self.cy as i128 * max_width as i128 / self.cx as i128) as i64;
        Extent { cx: max_width, cy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(emu_to_inches(EMUS_PER_INCH), 1.0);
        assert_eq!(emu_to_points(EMUS_PER_INCH), 72.0);
        assert_eq!(points_to_emu(72.0), EMUS_PER_INCH);
        assert_eq!(EMUS_PER_INCH, EMUS_PER_CM * 254 / 100);
    }

    #[test]
    fn test_fit_width() {
        let extent = Extent::new(5_949_950, 3_971_925);
        let fitted = extent.fit_width(A4_MAX_DISPLAY_WIDTH);
        assert_eq!(fitted.cx, A4_MAX_DISPLAY_WIDTH);
        assert!(fitted.cy < extent.cy);
        // Aspect ratio is kept within rounding
        let before = extent.cx as f64 / extent.cy as f64;
        let after = fitted.cx as f64 / fitted.cy as f64;
        assert!((before - after).abs() < 1e-5);
    }

    #[test]
    fn test_fit_width_unchanged() {
        let small = Extent::new(914_400, 457_200);
        assert_eq!(small.fit_width(A4_MAX_DISPLAY_WIDTH), small);
        assert_eq!(small.width_inches(), 1.0);
        assert_eq!(small.height_inches(), 0.5);
    }
}
