//! Fixed-canvas quote rendering.
//!
//! Lays out wrapped quote text and an author byline on a 1080x1080 canvas
//! and encodes the result to PNG in memory. Never touches disk except for
//! the one-time font read.

use crate::config::ImageConfig;
use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use once_cell::sync::OnceCell;
use std::io::Cursor;
use std::path::PathBuf;
use thiserror::Error;

/// Canvas edge length in pixels.
const CANVAS_SIZE: u32 = 1080;

/// Near-black background fill.
const BACKGROUND: Rgb<u8> = Rgb([25, 25, 25]);

/// Quote body color.
const QUOTE_COLOR: Rgb<u8> = Rgb([240, 240, 240]);

/// Author byline color.
const AUTHOR_COLOR: Rgb<u8> = Rgb([200, 200, 200]);

/// Greedy wrap limit for the quote body, in characters.
const MAX_LINE_CHARS: usize = 25;

/// Height attributed to each wrapped line when centering the text block.
const LINE_HEIGHT: f32 = 80.0;

/// Vertical advance between drawn lines.
const LINE_SPACING: f32 = 90.0;

/// Upward shift of the block, leaving room for the byline underneath.
const AUTHOR_OFFSET: f32 = 50.0;

/// Extra gap between the last quote line and the byline.
const AUTHOR_GAP: f32 = 20.0;

/// Error type for rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to read font file {path}: {source}")]
    FontRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Font file {path} is not a valid TrueType/OpenType font")]
    FontParse { path: PathBuf },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Renders quote cards. One instance per process; the font is loaded on
/// first use and cached, so only the first render pays the disk read.
pub struct QuoteRenderer {
    config: ImageConfig,
    font: OnceCell<FontVec>,
}

impl QuoteRenderer {
    pub fn new(config: ImageConfig) -> Self {
        Self {
            config,
            font: OnceCell::new(),
        }
    }

    /// The cached font. A failed load is reported per request and retried
    /// on the next one; only a successful load is cached.
    fn font(&self) -> Result<&FontVec, RenderError> {
        self.font.get_or_try_init(|| {
            let path = &self.config.font_path;
            let bytes = std::fs::read(path).map_err(|source| RenderError::FontRead {
                path: path.clone(),
                source,
            })?;
            FontVec::try_from_vec(bytes).map_err(|_| RenderError::FontParse { path: path.clone() })
        })
    }

    /// Render `quote` and `author` onto the canvas and return PNG bytes.
    pub fn render(&self, quote: &str, author: &str) -> Result<Vec<u8>, RenderError> {
        let font = self.font()?;
        let quote_scale = PxScale::from(self.config.quote_font_size);
        let author_scale = PxScale::from(self.config.author_font_size);

        let mut canvas = RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND);

        // Center the wrapped block vertically, shifted up to make room for
        // the byline below it.
        let lines = wrap_lines(quote, MAX_LINE_CHARS);
        let block_height = lines.len() as f32 * LINE_HEIGHT;
        let mut y = (CANVAS_SIZE as f32 - block_height) / 2.0 - AUTHOR_OFFSET;

        for line in &lines {
            let (line_width, _) = text_size(quote_scale, font, line);
            let x = (CANVAS_SIZE as f32 - line_width as f32) / 2.0;
            draw_text_mut(
                &mut canvas,
                QUOTE_COLOR,
                x as i32,
                y as i32,
                quote_scale,
                font,
                line,
            );
            y += LINE_SPACING;
        }

        let byline = format!("— {author}");
        let (byline_width, _) = text_size(author_scale, font, &byline);
        let x = (CANVAS_SIZE as f32 - byline_width as f32) / 2.0;
        draw_text_mut(
            &mut canvas,
            AUTHOR_COLOR,
            x as i32,
            (y + AUTHOR_GAP) as i32,
            author_scale,
            font,
            &byline,
        );

        let mut png = Vec::new();
        DynamicImage::ImageRgb8(canvas).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }
}

/// Greedy word-boundary wrap: pack whole words until the next word would
/// push the line past `max_chars`. Words are never split; a single word
/// longer than the limit gets a line of its own.
fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
