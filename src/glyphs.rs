//! 3x5 block letters used to draw words on the cloud.

pub const GLYPH_ROWS: u32 = 5;
pub const GLYPH_COLS: u32 = 3;
/// Horizontal advance per character, one blank column included.
pub const GLYPH_ADVANCE: u32 = GLYPH_COLS + 1;

/// Rows of the glyph for `ch`, most significant bit on the left.
///
/// Lower-case letters share the upper-case shapes; anything without a shape
/// is drawn as a hollow box.
pub fn glyph(ch: char) -> [u8; 5] {
    match ch.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b011, 0b101, 0b101, 0b101, 0b110],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b110, 0b001, 0b010, 0b100, 0b111],
        '3' => [0b110, 0b001, 0b010, 0b001, 0b110],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b110, 0b001, 0b110],
        '6' => [0b011, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b110],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b110, 0b001, 0b010, 0b000, 0b010],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '\'' => [0b010, 0b010, 0b000, 0b000, 0b000],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '&' => [0b010, 0b101, 0b010, 0b101, 0b011],
        '(' => [0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => [0b100, 0b010, 0b010, 0b010, 0b100],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        _ => [0b111, 0b101, 0b101, 0b101, 0b111],
    }
}

/// Whether the cell at `row`, `col` of `ch` is inked.
pub fn is_set(ch: char, row: u32, col: u32) -> bool {
    if row >= GLYPH_ROWS || col >= GLYPH_COLS {
        return false;
    }
    glyph(ch)[row as usize] & (1 << (GLYPH_COLS - 1 - col)) != 0
}

/// Size in glyph cells of `text` drawn on one line.
pub fn text_cells(text: &str) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return (0, GLYPH_ROWS);
    }
    (chars * GLYPH_ADVANCE - 1, GLYPH_ROWS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_does_not_matter() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn space_is_blank() {
        assert!((0..GLYPH_ROWS).all(|r| (0..GLYPH_COLS).all(|c| !is_set(' ', r, c))));
    }

    #[test]
    fn unknown_falls_back_to_box() {
        assert_eq!(glyph('é'), glyph('~'));
        assert!(is_set('~', 0, 0));
        assert!(!is_set('~', 2, 1));
        assert_ne!(glyph('~'), glyph('0'));
    }

    #[test]
    fn shapes_fit_the_grid() {
        for ch in ('A'..='Z').chain('0'..='9') {
            assert!(glyph(ch).iter().all(|&row| row < 1 << GLYPH_COLS), "{ch}");
            assert!(glyph(ch).iter().any(|&row| row != 0), "{ch}");
        }
    }

    #[test]
    fn cells_of_text() {
        assert_eq!(text_cells("Bolt"), (15, 5));
        assert_eq!(text_cells(""), (0, 5));
    }
}
