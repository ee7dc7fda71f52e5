use crate::{error::RenderError, material::Color};

/// Anything a frame can be drawn into, one `0xRRGGBB` pixel at a time.
pub trait PixelSink {
    fn draw_pixel(&mut self, x: i32, y: i32, color: u32);

    /// Called once every pixel of a frame has been drawn.
    fn present(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// A plain `0RGB` backbuffer, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Copy the buffer into an image, e.g. to save it out.
    pub fn to_image(&self) -> image::RgbImage {
        image::ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            Color::from_packed(self.pixels[y as usize * self.width + x as usize]).into()
        })
    }
}

impl PixelSink for FrameBuffer {
    fn draw_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }
}

impl PixelSink for image::RgbImage {
    fn draw_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        self.put_pixel(x as u32, y as u32, Color::from_packed(color).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framebuffer_ignores_out_of_bounds() {
        let mut buffer = FrameBuffer::new(4, 3);
        buffer.draw_pixel(3, 2, 0x123456);
        buffer.draw_pixel(4, 0, 0xffffff);
        buffer.draw_pixel(-1, 0, 0xffffff);

        assert_eq!(buffer.get(3, 2), Some(0x123456));
        assert_eq!(buffer.get(4, 0), None);
        assert_eq!(buffer.pixels.iter().filter(|&&p| p != 0).count(), 1);
    }

    #[test]
    fn image_sink_unpacks_channels() {
        let mut img: image::RgbImage = image::ImageBuffer::new(2, 2);
        img.draw_pixel(1, 0, 0x00a1e3);
        assert_eq!(*img.get_pixel(1, 0), image::Rgb([0x00, 0xa1, 0xe3]));

        let mut buffer = FrameBuffer::new(2, 2);
        buffer.draw_pixel(1, 0, 0x00a1e3);
        assert_eq!(buffer.to_image(), img);
    }
}
