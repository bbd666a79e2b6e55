//! Bitmap Text
//!
//! Built-in 5x7 procedural font used for every label in the game. It lays
//! strings out into [`TextHandle`]s (measured in logical pixels) and tells the
//! renderer which cells of a handle are lit.

use crate::coords::PixelVec;
use crate::render::{Baseline, FontRenderer, TextHandle, TextOptions};

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal advance per character (glyph + 1 spacing column)
pub const GLYPH_ADVANCE: u32 = 6;
/// Line pitch (glyph + 1 spacing row)
pub const LINE_HEIGHT: u32 = 8;
/// Distance from the top of a line to its baseline
pub const BASELINE: u32 = 7;

/// Row patterns for `c` (case-insensitive). Bit 4 is the leftmost column.
/// Unknown characters render as a full block.
pub fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => [0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111],
    }
}

/// The procedural 5x7 font
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    pub fn new() -> Self {
        BitmapFont
    }

    pub fn string_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * GLYPH_ADVANCE
    }

    /// Vertical shift applied to every line for the given baseline
    pub fn baseline_shift(&self, baseline: Baseline) -> i32 {
        let descent = (LINE_HEIGHT - BASELINE) as i32;
        match baseline {
            Baseline::Top => -descent,
            Baseline::Middle => -descent / 2,
            Baseline::Bottom => 0,
        }
    }

    /// Greedy split on spaces into lines at most `wrap` pixels wide.
    /// A single word wider than `wrap` gets a line to itself.
    pub fn wrap_lines(&self, text: &str, wrap: u32) -> Vec<String> {
        if wrap == 0 {
            return vec![text.to_string()];
        }

        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split(' ').filter(|w| !w.is_empty()) {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate_width = self.string_width(&current) + GLYPH_ADVANCE + self.string_width(word);
            if candidate_width > wrap {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            } else {
                current.push(' ');
                current.push_str(word);
            }
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }
        lines
    }
}

impl FontRenderer for BitmapFont {
    fn create_static_string(&self, text: &str, options: TextOptions) -> TextHandle {
        let lines = self.wrap_lines(text, options.word_wrap);
        let width = if options.word_wrap > 0 {
            options.word_wrap
        } else {
            self.string_width(text)
        };

        TextHandle::new(lines, width, LINE_HEIGHT, self.baseline_shift(options.baseline))
    }
}

/// Lit cells of `text`, as pixel offsets from the handle's top-left corner.
///
/// Cells shifted above the top edge by the baseline are still reported; the
/// renderer decides whether to clip.
pub fn lit_cells(text: &TextHandle) -> Vec<PixelVec> {
    let mut cells = Vec::new();

    for (line_index, line) in text.lines().iter().enumerate() {
        let line_y = line_index as i32 * text.line_height() as i32 + text.baseline_shift()
            + (BASELINE as i32 - GLYPH_HEIGHT);

        for (char_index, c) in line.chars().enumerate() {
            if c == ' ' {
                continue;
            }
            let char_x = char_index as i32 * GLYPH_ADVANCE as i32;

            for (row, pattern_row) in glyph(c).into_iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (pattern_row >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                        cells.push(PixelVec::new(char_x + col, line_y + row as i32));
                    }
                }
            }
        }
    }

    cells
}
