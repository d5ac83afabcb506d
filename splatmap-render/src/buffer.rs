use splatmap_core::BlockRect;

/// An RGB pixel, one byte per channel.
pub type Rgb = [u8; 3];

/// An RGB pixel buffer representing a rendered image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    pub width: u32,
    pub height: u32,
    /// RGB pixel data, 3 bytes per pixel, row-major order.
    pub pixels: Vec<u8>,
}

impl RgbBuffer {
    /// Create a new buffer filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: color.repeat(width as usize * height as usize),
        }
    }

    /// Byte stride of one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * 3
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row as usize * self.stride() + col as usize * 3
    }

    pub fn pixel(&self, row: u32, col: u32) -> Rgb {
        let i = self.index(row, col);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    pub fn set_pixel(&mut self, row: u32, col: u32, color: Rgb) {
        let i = self.index(row, col);
        self.pixels[i..i + 3].copy_from_slice(&color);
    }

    /// Apply `f` to every pixel of `rect`, row by row.
    pub fn map_rect(&mut self, rect: &BlockRect, mut f: impl FnMut(Rgb) -> Rgb) {
        let stride = self.stride();
        for row in rect.top..rect.bottom {
            let start = row as usize * stride + rect.left as usize * 3;
            let end = row as usize * stride + rect.right as usize * 3;
            for px in self.pixels[start..end].chunks_exact_mut(3) {
                let out = f([px[0], px[1], px[2]]);
                px.copy_from_slice(&out);
            }
        }
    }

    /// Overwrite the one-pixel outline of `rect` with `color`.
    pub fn outline_rect(&mut self, rect: &BlockRect, color: Rgb) {
        if rect.height() == 0 || rect.width() == 0 {
            return;
        }
        for col in rect.left..rect.right {
            self.set_pixel(rect.top, col, color);
            self.set_pixel(rect.bottom - 1, col, color);
        }
        for row in rect.top..rect.bottom {
            self.set_pixel(row, rect.left, color);
            self.set_pixel(row, rect.right - 1, color);
        }
    }
}
