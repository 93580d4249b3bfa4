use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

/// Larger radii are capped, the circle is then still far bigger than any sensible marker.
pub const MAX_MARKER_RADIUS: u32 = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerStyle {
    pub radius: u32,
    /// red, green, blue
    pub color: [u8; 3],
}
impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            radius: 2,
            color: [255, 255, 0],
        }
    }
}

/// Anything markers can be drawn onto.
pub trait DrawMarker {
    fn draw_marker(&mut self, center: (i32, i32), style: &MarkerStyle);
}

/// Whether a circle around `center` can touch a `w`x`h` image. Computed in `i64` so that
/// coordinates anywhere in the `i32` range do not overflow.
fn touches_image(center: (i32, i32), radius: u32, w: u32, h: u32) -> bool {
    let r = i64::from(radius);
    let (x, y) = (i64::from(center.0), i64::from(center.1));
    x >= -r && x < i64::from(w) + r && y >= -r && y < i64::from(h) + r
}

impl DrawMarker for RgbImage {
    /// Filled circle, parts outside of the image are clipped.
    fn draw_marker(&mut self, center: (i32, i32), style: &MarkerStyle) {
        let radius = style.radius.min(MAX_MARKER_RADIUS);
        // imageproc adds radius and center without overflow checks
        if touches_image(center, radius, self.width(), self.height()) {
            draw_filled_circle_mut(self, center, radius as i32, Rgb(style.color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn test_marker_inside() {
        let mut im = RgbImage::new(20, 20);
        im.draw_marker((10, 10), &MarkerStyle::default());
        assert_eq!(im.get_pixel(10, 10), &YELLOW);
        assert_eq!(im.get_pixel(12, 10), &YELLOW);
        assert_eq!(im.get_pixel(10, 8), &YELLOW);
        assert_eq!(im.get_pixel(13, 10), &BLACK);
        assert_eq!(im.get_pixel(10, 14), &BLACK);
        assert_eq!(im.get_pixel(0, 0), &BLACK);
    }

    #[test]
    fn test_marker_clipped() {
        let mut im = RgbImage::new(8, 8);
        im.draw_marker((0, 7), &MarkerStyle::default());
        assert_eq!(im.get_pixel(0, 7), &YELLOW);
        assert_eq!(im.get_pixel(1, 6), &YELLOW);
        // fully outside, nothing happens
        let before = im.clone();
        im.draw_marker((-100, 300), &MarkerStyle::default());
        assert_eq!(im, before);
    }

    #[test]
    fn test_marker_far_away() {
        let mut im = RgbImage::new(20, 20);
        for center in [
            (i32::MAX, 10),
            (10, i32::MAX),
            (i32::MIN, i32::MIN),
            (i32::MIN, 10),
            (-3, 10),
            (22, 22),
        ] {
            im.draw_marker(center, &MarkerStyle::default());
        }
        assert_eq!(im, RgbImage::new(20, 20));
        // just touching the border
        im.draw_marker((-2, 10), &MarkerStyle::default());
        assert_eq!(im.get_pixel(0, 10), &YELLOW);
    }

    #[test]
    fn test_marker_huge_radius() {
        let style = MarkerStyle {
            radius: u32::MAX,
            color: [255, 255, 0],
        };
        let mut im = RgbImage::new(20, 20);
        im.draw_marker((i32::MAX, i32::MIN), &style);
        assert_eq!(im, RgbImage::new(20, 20));
        im.draw_marker((10, 10), &style);
        assert!(im.pixels().all(|p| p == &YELLOW));
    }

    #[test]
    fn test_marker_style() {
        let mut im = RgbImage::new(30, 30);
        let style = MarkerStyle {
            radius: 5,
            color: [0, 0, 255],
        };
        im.draw_marker((15, 15), &style);
        assert_eq!(im.get_pixel(20, 15), &Rgb([0, 0, 255]));
        assert_eq!(im.get_pixel(21, 15), &BLACK);
    }
}
