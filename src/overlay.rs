//! Final screen composition: background, pattern, then revealed text.

use std::convert::Infallible;

use embedded_graphics::{
    mono_font::{ascii::FONT_9X15, MonoFont, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::params::DisplayConfig;
use crate::pattern::{Framebuffer, Rgba};

/// Horizontal padding on each side of the text block (pixels)
const TEXT_MARGIN: u32 = 8;
/// Extra vertical gap between wrapped lines (pixels)
const LINE_GAP: u32 = 2;

/// Opaque RGBA screen that embedded-graphics can draw onto
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Screen {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::new(0, 0, 0, 255); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

impl OriginDimensions for Screen {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Screen {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
                continue;
            }
            let idx = y as usize * self.width as usize + x as usize;
            self.pixels[idx] = Rgba::new(color.r(), color.g(), color.b(), 255);
        }
        Ok(())
    }
}

/// Composites the pattern and the revealed text onto a [`Screen`]
pub struct TextOverlay {
    background: Rgba,
    text_color: Rgb888,
    font: &'static MonoFont<'static>,
}

impl TextOverlay {
    pub fn new(config: &DisplayConfig) -> Self {
        let [r, g, b] = config.background_color;
        let [tr, tg, tb] = config.text_color;
        Self {
            background: Rgba::new(r, g, b, 255),
            text_color: Rgb888::new(tr, tg, tb),
            font: &FONT_9X15,
        }
    }

    /// Characters that fit on one line of a `width`-pixel screen
    pub fn columns(&self, width: u32) -> usize {
        let char_width = self.font.character_size.width + self.font.character_spacing;
        (width.saturating_sub(2 * TEXT_MARGIN) / char_width.max(1)).max(1) as usize
    }

    /// Background, then `pattern` alpha-blended over it, then `text` centred
    ///
    /// `pattern` and `screen` must have the same dimensions; a mismatched
    /// pattern is skipped.
    pub fn compose(&self, pattern: &Framebuffer, text: &str, screen: &mut Screen) {
        if pattern.width() == screen.width && pattern.height() == screen.height {
            for (dst, src) in screen.pixels.iter_mut().zip(pattern.pixels()) {
                *dst = blend_over(*src, self.background);
            }
        } else {
            screen.pixels.fill(self.background);
        }

        self.draw_text(text, screen);
    }

    fn draw_text(&self, text: &str, screen: &mut Screen) {
        let lines = wrap(text, self.columns(screen.width));
        if lines.is_empty() {
            return;
        }

        let line_height = (self.font.character_size.height + LINE_GAP) as i32;
        let block_height = line_height * lines.len() as i32;
        let center_x = screen.width as i32 / 2;
        let mut y = (screen.height as i32 - block_height) / 2;

        let character_style = MonoTextStyle::new(self.font, self.text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();

        for line in &lines {
            Text::with_text_style(line, Point::new(center_x, y), character_style, text_style)
                .draw(screen)
                .ok();
            y += line_height;
        }
    }
}

/// Source-over blend of `src` onto an opaque `dst`
fn blend_over(src: Rgba, dst: Rgba) -> Rgba {
    match src.a {
        255 => Rgba { a: 255, ..src },
        0 => dst,
        a => {
            let a = a as u16;
            let mix = |s: u8, d: u8| ((s as u16 * a + d as u16 * (255 - a) + 127) / 255) as u8;
            Rgba::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), 255)
        }
    }
}

/// Greedy word wrap to `columns` characters; over-long words are split
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > columns {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(columns);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let needed = if current_len == 0 {
            chars.len()
        } else {
            current_len + 1 + chars.len()
        };
        if needed > columns && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += chars.len();
        current.extend(chars);
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap("SHADOWS CONSUME ALL", 10),
            vec!["SHADOWS", "CONSUME", "ALL"]
        );
        assert_eq!(wrap("A B C D", 3), vec!["A B", "C D"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("XY ABCDEFG", 3), vec!["XY", "ABC", "DEF", "G"]);
    }

    #[test]
    fn test_blend() {
        let bg = Rgba::new(0, 0, 0, 255);
        assert_eq!(blend_over(Rgba::TRANSPARENT, bg), bg);
        assert_eq!(
            blend_over(Rgba::new(255, 1, 1, 255), bg),
            Rgba::new(255, 1, 1, 255)
        );
        assert_eq!(blend_over(Rgba::new(255, 255, 255, 128), bg).r, 128);
    }

    #[test]
    fn test_compose_without_text_shows_pattern() {
        let config = DisplayConfig::default();
        let overlay = TextOverlay::new(&config);
        let mut pattern = Framebuffer::new(240, 282);
        pattern.fill_block(0, 0, 3, Rgba::new(255, 1, 1, 255));
        let mut screen = Screen::new(240, 282);

        overlay.compose(&pattern, "", &mut screen);
        assert_eq!(screen.pixels()[0], Rgba::new(255, 1, 1, 255));
        assert_eq!(screen.pixels()[3], Rgba::new(0, 0, 0, 255));
        assert!(screen.pixels().iter().all(|p| p.a == 255));
    }

    #[test]
    fn test_compose_draws_text() {
        let config = DisplayConfig::default();
        let overlay = TextOverlay::new(&config);
        let pattern = Framebuffer::new(240, 282);
        let mut screen = Screen::new(240, 282);

        overlay.compose(&pattern, "HI", &mut screen);
        let white = Rgba::new(255, 255, 255, 255);
        assert!(screen.pixels().contains(&white));
    }

    #[test]
    fn test_columns_for_reference_width() {
        let overlay = TextOverlay::new(&DisplayConfig::default());
        assert_eq!(overlay.columns(240), 24);
    }
}
