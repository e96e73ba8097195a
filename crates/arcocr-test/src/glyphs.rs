//! Synthetic digit glyphs
//!
//! A 5x7 bitmap font for the digits 0-9. Every glyph is a single
//! 8-connected shape, so each rendered digit forms exactly one contour.
//! Glyphs are scaled by an integer factor and cropped to their ink.

use crate::error::{TestError, TestResult};
use arcocr_core::{Box, Pix, PixMut};

/// Width of a font cell in font pixels
pub const CELL_WIDTH: i32 = 5;
/// Height of a font cell in font pixels
pub const CELL_HEIGHT: i32 = 7;

const FONT: [[&str; 7]; 10] = [
    [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."],
    ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."],
    [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"],
    ["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."],
    ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."],
    ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."],
    ["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."],
    ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."],
    [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."],
    [".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."],
];

fn font_rows(digit: u8) -> TestResult<&'static [&'static str; 7]> {
    FONT.get(digit as usize).ok_or(TestError::UnknownDigit(digit))
}

/// Ink columns `[first, last]` of a digit's font cell.
fn ink_columns(rows: &[&str; 7]) -> (i32, i32) {
    let mut first = CELL_WIDTH;
    let mut last = -1;
    for row in rows {
        for (x, c) in row.chars().enumerate() {
            if c == '#' {
                first = first.min(x as i32);
                last = last.max(x as i32);
            }
        }
    }
    (first, last)
}

fn fixture<T>(r: arcocr_core::Result<T>) -> TestResult<T> {
    r.map_err(|e| TestError::Fixture(e.to_string()))
}

/// Paint a digit's scaled cell with its top-left corner at (`x`, `y`).
fn paint_cell(pm: &mut PixMut, digit: u8, x: i32, y: i32, scale: i32) -> TestResult<()> {
    let rows = font_rows(digit)?;
    for (fy, row) in rows.iter().enumerate() {
        for (fx, c) in row.chars().enumerate() {
            if c == '#' {
                pm.fill_rect(x + fx as i32 * scale, y + fy as i32 * scale, scale, scale, 1);
            }
        }
    }
    Ok(())
}

/// Bounding box of a digit's ink when rendered at `scale`, relative to its cell.
pub fn ink_box(digit: u8, scale: i32) -> TestResult<Box> {
    let (first, last) = ink_columns(font_rows(digit)?);
    Ok(Box::new_unchecked(
        first * scale,
        0,
        (last - first + 1) * scale,
        CELL_HEIGHT * scale,
    ))
}

/// Render one digit at an integer `scale`, cropped to its ink.
///
/// # Errors
///
/// Returns [`TestError::UnknownDigit`] for digits above 9 and
/// [`TestError::Fixture`] for a non-positive scale.
pub fn render_digit(digit: u8, scale: i32) -> TestResult<Pix> {
    if scale <= 0 {
        return Err(TestError::Fixture(format!("scale must be positive, got {scale}")));
    }
    let mut pm = fixture(PixMut::new(
        (CELL_WIDTH * scale) as u32,
        (CELL_HEIGHT * scale) as u32,
    ))?;
    paint_cell(&mut pm, digit, 0, 0, scale)?;
    let cell: Pix = pm.into();
    fixture(cell.clip_rectangle(&ink_box(digit, scale)?))
}

/// Render digits into a `width` x `height` canvas.
///
/// Each placement is `(digit, x, y)`, the top-left corner of the digit's
/// ink box. Returns the canvas and the ink box of every placement.
pub fn compose(
    placements: &[(u8, i32, i32)],
    width: u32,
    height: u32,
    scale: i32,
) -> TestResult<(Pix, Vec<Box>)> {
    let mut pm = fixture(PixMut::new(width, height))?;
    let mut boxes = Vec::with_capacity(placements.len());
    for &(digit, x, y) in placements {
        let ink = ink_box(digit, scale)?;
        paint_cell(&mut pm, digit, x - ink.x, y, scale)?;
        boxes.push(Box::new_unchecked(x, y, ink.w, ink.h));
    }
    Ok((pm.into(), boxes))
}

/// Lay out a digit string left to right, `gap` pixels apart, inside a
/// `margin`-pixel border.
///
/// Returns the canvas and the ink box of every digit in string order.
pub fn render_number(text: &str, scale: i32, gap: i32, margin: i32) -> TestResult<(Pix, Vec<Box>)> {
    let mut placements = Vec::new();
    let mut x = margin;
    for c in text.chars() {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| TestError::Fixture(format!("not a digit: {c:?}")))? as u8;
        let ink = ink_box(digit, scale)?;
        placements.push((digit, x, margin));
        x += ink.w + gap;
    }
    let width = (x - gap + margin).max(1) as u32;
    let height = (CELL_HEIGHT * scale + 2 * margin) as u32;
    compose(&placements, width, height, scale)
}
