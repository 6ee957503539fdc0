use crate::chip::{
    chip8::{
        constants::{CHIP8_DISPLAY_HEIGHT, CHIP8_DISPLAY_SIZE, CHIP8_DISPLAY_WIDTH},
        Chip8,
    },
    Chip, ChipWithCursiveDisplay,
};

use cursive::{
    event::{Event, EventResult},
    theme::{BaseColor, Color, ColorStyle},
    view::View,
    CbSink, Cursive, Printer, Vec2,
};

/// Represents the display of the Chip 8
pub struct Display {
    pixels: [bool; CHIP8_DISPLAY_SIZE],
}

impl Display {
    /// Creates a new display from a slice.
    ///
    /// # Panics
    /// In case `pixels` does not hold exactly one value per pixel.
    pub fn new(pixels: &[bool]) -> Self {
        assert_eq!(pixels.len(), CHIP8_DISPLAY_SIZE);
        let mut tmp = [false; CHIP8_DISPLAY_SIZE];
        tmp.copy_from_slice(pixels);
        Display { pixels: tmp }
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.pixels[x + CHIP8_DISPLAY_WIDTH * y]
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new(&[false; CHIP8_DISPLAY_SIZE])
    }
}

/// Implements cursive::view::View for Display to enable drawing it
/// as a View out of the box. Every lit pixel is one white terminal cell.
impl View for Display {
    fn draw(&self, printer: &Printer) {
        printer.with_color(
            ColorStyle::new(Color::Dark(BaseColor::Black), Color::Light(BaseColor::White)),
            |printer| {
                for x in 0..CHIP8_DISPLAY_WIDTH {
                    for y in 0..CHIP8_DISPLAY_HEIGHT {
                        if self.is_lit(x, y) {
                            printer.print((x, y), " ");
                        }
                    }
                }
            },
        );
    }

    fn on_event(&mut self, _event: Event) -> EventResult {
        EventResult::Ignored
    }

    fn required_size(&mut self, _: Vec2) -> Vec2 {
        Vec2 {
            x: CHIP8_DISPLAY_WIDTH,
            y: CHIP8_DISPLAY_HEIGHT,
        }
    }
}

impl ChipWithCursiveDisplay for Chip8 {
    fn update_ui(&mut self, gfx_sink: &CbSink) {
        if !self.draw {
            return;
        }
        let display = Display::new(self.read_output_pins());
        let update = gfx_sink.send(Box::new(move |s: &mut Cursive| {
            s.pop_layer();
            s.add_layer(display);
        }));
        if update.is_err() {
            log::warn!("display is gone, dropping frame");
        }
        self.draw = false;
    }
}
