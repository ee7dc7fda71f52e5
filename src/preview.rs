use minifb::{Key, Scale, Window, WindowOptions};

use crate::{
    controls::{Input, InputSource},
    error::RenderError,
    frame::{FrameBuffer, PixelSink},
};

/// A live window that shows each frame and reads the arrow keys.
///
/// Arrows move the first sphere, left shift turns up/down into depth,
/// escape or closing the window exits.
pub struct Preview {
    window: Window,
    buffer: FrameBuffer,
}

impl Preview {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, RenderError> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                scale: Scale::X1,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| RenderError::Window(e.to_string()))?;
        // Limit to max ~60 fps update rate
        window.set_target_fps(60);

        Ok(Self {
            window,
            buffer: FrameBuffer::new(width, height),
        })
    }
}

impl PixelSink for Preview {
    fn draw_pixel(&mut self, x: i32, y: i32, color: u32) {
        self.buffer.draw_pixel(x, y, color);
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.window
            .update_with_buffer(&self.buffer.pixels, self.buffer.width, self.buffer.height)
            .map_err(|e| RenderError::Window(e.to_string()))
    }
}

impl InputSource for Preview {
    fn poll(&mut self) -> Input {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            return Input::exit();
        }

        Input {
            left: self.window.is_key_down(Key::Left),
            right: self.window.is_key_down(Key::Right),
            up: self.window.is_key_down(Key::Up),
            down: self.window.is_key_down(Key::Down),
            modifier: self.window.is_key_down(Key::LeftShift),
            exit: false,
        }
    }
}
