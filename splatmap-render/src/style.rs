use crate::buffer::Rgb;

/// Grey level of an unvisited cell.
pub const UNVISITED: u8 = 255;
/// Grey level of a visited cell.
pub const VISITED: u8 = 0;

/// Colors used to highlight selected blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Color blended into a selected block's pixels.
    pub stain: Rgb,
    /// Solid outline color, drawn after the stain.
    pub border: Rgb,
    /// Share of `stain` in the blend, `0.0..=1.0`.
    pub stain_weight: f64,
}

impl OverlayStyle {
    /// Blend `color` toward the stain, truncating each channel.
    #[inline]
    pub fn stain_rgb(&self, color: Rgb) -> Rgb {
        let w = self.stain_weight.clamp(0.0, 1.0);
        let keep = 1.0 - w;
        let mix = |c: u8, s: u8| (c as f64 * keep + s as f64 * w) as u8;
        [
            mix(color[0], self.stain[0]),
            mix(color[1], self.stain[1]),
            mix(color[2], self.stain[2]),
        ]
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stain: [255, 0, 0],
            border: [0, 255, 0],
            stain_weight: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stain_of_white() {
        assert_eq!(OverlayStyle::default().stain_rgb([255, 255, 255]), [255, 204, 204]);
    }

    #[test]
    fn default_stain_of_black() {
        // 0.2 * 255 = 51.
        assert_eq!(OverlayStyle::default().stain_rgb([0, 0, 0]), [51, 0, 0]);
    }

    #[test]
    fn stain_compounds_when_reapplied() {
        let style = OverlayStyle::default();
        let once = style.stain_rgb([255, 255, 255]);
        let twice = style.stain_rgb(once);
        assert_ne!(once, twice);
    }

    #[test]
    fn weight_extremes() {
        let mut style = OverlayStyle::default();
        style.stain_weight = 0.0;
        assert_eq!(style.stain_rgb([10, 20, 30]), [10, 20, 30]);
        style.stain_weight = 1.0;
        assert_eq!(style.stain_rgb([10, 20, 30]), [255, 0, 0]);
    }
}
