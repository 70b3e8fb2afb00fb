//! A small deterministic word cloud.
//!
//! Words are sized by frequency, placed as close to the middle of the canvas
//! as the already placed words allow, and drawn with the block glyphs from
//! [`crate::glyphs`].

use image::{Rgba, RgbaImage};
use tracing::{debug, info};

use crate::{
    color::{parse_color, GroupedColors},
    consts::{
        BACKGROUND_COLOR, CANVAS_HEIGHT, CANVAS_SCALE, CANVAS_WIDTH, FONT_STEP, MARGIN, MAX_WORDS,
        MIN_FONT_SIZE, RELATIVE_SCALING,
    },
    data::FrequencyMap,
    glyphs::{is_set, text_cells, GLYPH_ADVANCE, GLYPH_COLS, GLYPH_ROWS},
};

const FALLBACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Words are drawn in this color until recolored.
const INITIAL_COLOR: &str = "white";

#[derive(Debug, Clone)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub background: &'static str,
    pub margin: u32,
    pub max_words: usize,
    pub relative_scaling: f64,
    pub min_font_size: u32,
    pub font_step: u32,
    /// Try a word rotated by 90 degrees before shrinking it.
    pub allow_vertical: bool,
}

impl Default for WordCloud {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            scale: CANVAS_SCALE,
            background: BACKGROUND_COLOR,
            margin: MARGIN,
            max_words: MAX_WORDS,
            relative_scaling: RELATIVE_SCALING,
            min_font_size: MIN_FONT_SIZE,
            font_step: FONT_STEP,
            allow_vertical: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub frequency: u32,
    pub font_size: u32,
    /// Top-left corner of the text in canvas pixels, margin excluded.
    pub x: u32,
    pub y: u32,
    /// Size of the drawn text, already swapped for vertical words.
    pub width: u32,
    pub height: u32,
    /// Reads bottom to top when set.
    pub vertical: bool,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub background: &'static str,
    pub words: Vec<PlacedWord>,
}

/// Pixel size of one glyph cell for a font size, never below one pixel.
fn cell_size(font_size: u32) -> u32 {
    (font_size / GLYPH_ROWS).max(1)
}

fn text_box(word: &str, font_size: u32) -> (u32, u32) {
    let (cols, rows) = text_cells(word);
    let cell = cell_size(font_size);
    (cols * cell, rows * cell)
}

impl WordCloud {
    pub fn generate_from_frequencies(&self, frequencies: &FrequencyMap) -> Layout {
        let mut words = frequencies
            .iter()
            .filter(|(_, &n)| n > 0)
            .collect::<Vec<_>>();
        words.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(self.max_words);

        let mut occupancy = Occupancy::new(self.width, self.height);
        let mut placed = Vec::with_capacity(words.len());
        let mut font_size = self.height;
        let mut last_freq = words.first().map(|(_, &n)| n).unwrap_or(1);

        for (i, (word, &freq)) in words.into_iter().enumerate() {
            let rs = self.relative_scaling;
            if rs != 0.0 && i != 0 {
                let ratio = f64::from(freq) / f64::from(last_freq);
                font_size = ((rs * ratio + (1.0 - rs)) * f64::from(font_size)).round() as u32;
            }
            let position = loop {
                if font_size < self.min_font_size {
                    break None;
                }
                let (w, h) = text_box(word, font_size);
                if let Some(pos) = occupancy.find_position(w + self.margin, h + self.margin) {
                    break Some((pos, false));
                }
                if self.allow_vertical {
                    if let Some(pos) = occupancy.find_position(h + self.margin, w + self.margin) {
                        break Some((pos, true));
                    }
                }
                font_size = self.smaller(font_size);
            };
            let Some(((x, y), vertical)) = position else {
                debug!(%word, "no room left, stopping");
                break;
            };
            let (w, h) = match text_box(word, font_size) {
                (w, h) if vertical => (h, w),
                size => size,
            };
            occupancy.fill(x, y, w + self.margin, h + self.margin);
            placed.push(PlacedWord {
                word: word.clone(),
                frequency: freq,
                font_size,
                x: x + self.margin / 2,
                y: y + self.margin / 2,
                width: w,
                height: h,
                vertical,
                color: INITIAL_COLOR,
            });
            last_freq = freq;
        }
        info!(placed = placed.len(), "laid out word cloud");

        Layout {
            width: self.width,
            height: self.height,
            scale: self.scale,
            background: self.background,
            words: placed,
        }
    }

    // sizes between two multiples of the glyph height draw identically
    fn smaller(&self, font_size: u32) -> u32 {
        let stepped = font_size.saturating_sub(self.font_step);
        if cell_size(stepped) == cell_size(font_size) && font_size >= GLYPH_ROWS {
            (cell_size(font_size) * GLYPH_ROWS).saturating_sub(1)
        } else {
            stepped
        }
    }
}

impl Layout {
    pub fn recolor(&mut self, colors: &GroupedColors) {
        for word in &mut self.words {
            word.color = colors.color_for(&word.word);
        }
    }

    pub fn to_image(&self) -> RgbaImage {
        let scale = self.scale.max(1);
        let background = parse_color(self.background).unwrap_or(FALLBACK);
        let mut img = RgbaImage::from_pixel(self.width * scale, self.height * scale, background);
        for word in &self.words {
            let color = parse_color(word.color).unwrap_or(FALLBACK);
            let cell = cell_size(word.font_size) * scale;
            let (ox, oy) = (word.x * scale, word.y * scale);
            let (text_cols, _) = text_cells(&word.word);
            for (i, ch) in word.word.chars().enumerate() {
                for row in 0..GLYPH_ROWS {
                    for col in 0..GLYPH_COLS {
                        if !is_set(ch, row, col) {
                            continue;
                        }
                        let tx = i as u32 * GLYPH_ADVANCE + col;
                        // rotated counter-clockwise: text runs upwards
                        let (cx, cy) = if word.vertical {
                            (row, text_cols - 1 - tx)
                        } else {
                            (tx, row)
                        };
                        fill(&mut img, ox + cx * cell, oy + cy * cell, cell, color);
                    }
                }
            }
        }
        img
    }
}

fn fill(img: &mut RgbaImage, x: u32, y: u32, size: u32, color: Rgba<u8>) {
    let (w, h) = img.dimensions();
    for py in y..(y + size).min(h) {
        for px in x..(x + size).min(w) {
            img.put_pixel(px, py, color);
        }
    }
}

/// Taken pixels of the canvas with a summed-area table for O(1) box queries.
struct Occupancy {
    width: u32,
    height: u32,
    free: u64,
    taken: Vec<bool>,
    integral: Vec<u32>,
}

impl Occupancy {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            free: u64::from(width) * u64::from(height),
            taken: vec![false; (width * height) as usize],
            integral: vec![0; ((width + 1) * (height + 1)) as usize],
        }
    }

    fn at(&self, x: u32, y: u32) -> u32 {
        self.integral[(y * (self.width + 1) + x) as usize]
    }

    fn is_free(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        let total = self.at(x + w, y + h) + self.at(x, y);
        let cut = self.at(x + w, y) + self.at(x, y + h);
        total == cut
    }

    /// Free spot for a `w` by `h` box, searched in growing rings around the
    /// middle of the canvas.
    fn find_position(&self, w: u32, h: u32) -> Option<(u32, u32)> {
        if w == 0 || h == 0 || w > self.width || h > self.height {
            return None;
        }
        if self.free < u64::from(w) * u64::from(h) {
            return None;
        }
        let (max_x, max_y) = (i64::from(self.width - w), i64::from(self.height - h));
        let (x0, y0) = (max_x / 2, max_y / 2);
        let radius = x0.max(max_x - x0).max(y0).max(max_y - y0);
        for r in 0..=radius {
            let mut best: Option<(i64, u32, u32)> = None;
            for dy in -r..=r {
                let y = y0 + dy;
                if y < 0 || y > max_y {
                    continue;
                }
                let step = if dy.abs() == r { 1 } else { (2 * r).max(1) as usize };
                for dx in (-r..=r).step_by(step) {
                    let x = x0 + dx;
                    if x < 0 || x > max_x {
                        continue;
                    }
                    let dist = dx * dx + dy * dy;
                    if best.is_some_and(|(d, _, _)| d <= dist) {
                        continue;
                    }
                    if self.is_free(x as u32, y as u32, w, h) {
                        best = Some((dist, x as u32, y as u32));
                    }
                }
            }
            if let Some((_, x, y)) = best {
                return Some((x, y));
            }
        }
        None
    }

    fn fill(&mut self, x: u32, y: u32, w: u32, h: u32) {
        for py in y..(y + h).min(self.height) {
            for px in x..(x + w).min(self.width) {
                let cell = &mut self.taken[(py * self.width + px) as usize];
                if !*cell {
                    *cell = true;
                    self.free -= 1;
                }
            }
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let stride = (self.width + 1) as usize;
        for y in 0..self.height as usize {
            let mut row = 0;
            for x in 0..self.width as usize {
                row += u32::from(self.taken[y * self.width as usize + x]);
                self.integral[(y + 1) * stride + x + 1] = self.integral[y * stride + x + 1] + row;
            }
        }
    }
}
