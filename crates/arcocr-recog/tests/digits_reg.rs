//! Digit recognition regression test
//!
//! Run with:
//! ```
//! cargo test -p arcocr-recog --test digits_reg
//! ```

use arcocr_core::{Box, Pix, PixMut};
use arcocr_recog::RecogError;
use arcocr_recog::digits::{
    KNearest, RecognizeOptions, RectFilter, find_glyph_rects, read_digits, recognize_batch,
    recognize_digits, select_by_coverage,
};
use arcocr_test::{RegParams, glyphs};

/// Model with one sample per font digit, rendered at each scale
fn font_model(scales: &[i32]) -> KNearest {
    let crops: Vec<(Pix, u8)> = scales
        .iter()
        .flat_map(|&s| (0..10u8).map(move |d| (glyphs::render_digit(d, s).unwrap(), d)))
        .collect();
    KNearest::from_glyphs(crops.iter().map(|(p, d)| (p, *d)), 20).unwrap()
}

#[test]
fn digits_reg() {
    let mut rp = RegParams::new("digits");
    let model = font_model(&[2]);
    let options = RecognizeOptions::default();

    // -----------------------------------------------------------
    // Scenario: glyphs at x = 2, 15, 30 read as 729
    // -----------------------------------------------------------
    let (region, boxes) = glyphs::compose(&[(7, 2, 2), (2, 15, 2), (9, 30, 2)], 44, 18, 2).unwrap();
    let reading = read_digits(&region, &model, &options).unwrap();
    rp.compare_values(729.0, reading.value as f64, 0.0);
    rp.compare_strings(b"729", reading.digits.as_bytes());
    let rects: Vec<Box> = reading.glyphs.iter().map(|(r, _)| *r).collect();
    rp.compare_boxes(&boxes, &rects);

    // -----------------------------------------------------------
    // Every digit, alone and in a long number
    // -----------------------------------------------------------
    for digit in 0..10u8 {
        let (region, _) = glyphs::render_number(&digit.to_string(), 2, 3, 2).unwrap();
        let value = recognize_digits(&region, &model, &options).unwrap();
        rp.compare_values(digit as f64, value as f64, 0.0);
    }
    let (region, _) = glyphs::render_number("9876543210", 2, 3, 2).unwrap();
    let value = recognize_digits(&region, &model, &options).unwrap();
    rp.compare_values(9_876_543_210.0, value as f64, 0.0);

    // -----------------------------------------------------------
    // Ordering follows x, not contour discovery order:
    // the "1" sits higher, so its contour is found first
    // -----------------------------------------------------------
    let (region, _) = glyphs::compose(&[(7, 2, 4), (1, 16, 1)], 26, 20, 2).unwrap();
    let reading = read_digits(&region, &model, &options).unwrap();
    rp.compare_strings(b"71", reading.digits.as_bytes());

    // -----------------------------------------------------------
    // Empty region
    // -----------------------------------------------------------
    let empty = Pix::new(40, 20).unwrap();
    let result = recognize_digits(&empty, &model, &options);
    rp.compare_values(
        1.0,
        matches!(result, Err(RecogError::NoGlyphsFound)) as u8 as f64,
        0.0,
    );

    // -----------------------------------------------------------
    // A speck inside the hole of a "0" is part of that glyph,
    // not a digit of its own
    // -----------------------------------------------------------
    let (clean, boxes) = glyphs::render_number("80", 2, 3, 2).unwrap();
    let mut pm = clean.to_mut();
    // Font cell (2, 1) of the "0", bottom-left pixel: clear of ink all around
    pm.fill_rect(boxes[1].x + 4, boxes[1].y + 3, 1, 1, 1);
    let specked: Pix = pm.into();
    let reading = read_digits(&specked, &model, &options).unwrap();
    rp.compare_boxes(&boxes, &reading.glyphs.iter().map(|(r, _)| *r).collect::<Vec<_>>());
    rp.compare_values(80.0, reading.value as f64, 0.0);

    assert!(rp.cleanup(), "digits regression test failed");
}

#[test]
fn broken_glyph_reg() {
    let mut rp = RegParams::new("broken_glyph");
    let model = font_model(&[2]);

    // -----------------------------------------------------------
    // Scenario: body x=5..9, y=2..18 plus a cap fragment on row 0
    // become one rect y=0..18 and one digit
    // -----------------------------------------------------------
    let mut pm = PixMut::new(20, 30).unwrap();
    pm.fill_rect(5, 2, 5, 16, 1);
    pm.fill_rect(5, 0, 5, 1, 1);
    let region: Pix = pm.into();
    let options = RecognizeOptions::default();
    let (rects, _) = find_glyph_rects(&region, &options).unwrap();
    rp.compare_boxes(&[Box::new_unchecked(5, 0, 5, 18)], &rects);
    let reading = read_digits(&region, &model, &options).unwrap();
    rp.compare_values(1.0, reading.digits.len() as f64, 0.0);

    // -----------------------------------------------------------
    // A font "7" cut horizontally reads as 7 after merging
    // -----------------------------------------------------------
    let (whole, _) = glyphs::compose(&[(7, 4, 4)], 20, 30, 2).unwrap();
    let mut cut = whole.to_mut();
    // Clear font row 1 of the glyph; only the top bar stays above the gap
    cut.fill_rect(0, 6, 20, 2, 0);
    let cut: Pix = cut.into();
    let (rects, _) = find_glyph_rects(&cut, &options).unwrap();
    rp.compare_values(1.0, rects.len() as f64, 0.0);

    // -----------------------------------------------------------
    // Specks below the minimum area are dropped and erased
    // -----------------------------------------------------------
    let (clean, _) = glyphs::render_number("58", 2, 4, 3).unwrap();
    let mut noisy = clean.to_mut();
    noisy.fill_rect(1, 1, 1, 1, 1);
    noisy.fill_rect(14, clean.height() as i32 - 2, 2, 1, 1);
    let noisy: Pix = noisy.into();
    let options = RecognizeOptions::default()
        .with_min_contour_area(5.0 * 1.25)
        .with_erase_dropped_contours(true);
    let reading = read_digits(&noisy, &model, &options).unwrap();
    rp.compare_values(58.0, reading.value as f64, 0.0);
    let (_, working) = find_glyph_rects(&noisy, &options).unwrap();
    rp.compare_pix(&clean, &working);

    assert!(rp.cleanup(), "broken_glyph regression test failed");
}

#[test]
fn touching_glyph_reg() {
    let mut rp = RegParams::new("touching_glyph");

    // -----------------------------------------------------------
    // Scenario: one 18x10 blob holding two touching glyphs reads as 42
    // -----------------------------------------------------------
    let mut pm = PixMut::new(22, 14).unwrap();
    pm.fill_rect(2, 2, 8, 10, 1);
    pm.fill_rect(4, 3, 4, 8, 0);
    pm.fill_rect(10, 6, 1, 1, 1);
    pm.fill_rect(11, 2, 9, 1, 1);
    pm.fill_rect(18, 2, 2, 5, 1);
    pm.fill_rect(11, 6, 9, 1, 1);
    pm.fill_rect(11, 6, 2, 6, 1);
    pm.fill_rect(11, 11, 9, 1, 1);
    let region: Pix = pm.into();

    let left = Box::new_unchecked(2, 2, 8, 10);
    let right = Box::new_unchecked(10, 2, 10, 10);
    let options = RecognizeOptions::default();
    let (rects, _) = find_glyph_rects(&region, &options).unwrap();
    rp.compare_boxes(&[left, right], &rects);

    // Reference samples: the two halves plus font decoys with other labels
    let mut crops = vec![
        (region.clip_rectangle(&left).unwrap(), 4u8),
        (region.clip_rectangle(&right).unwrap(), 2u8),
    ];
    for d in [0u8, 1, 3, 5, 6, 7, 8, 9] {
        crops.push((glyphs::render_digit(d, 2).unwrap(), d));
    }
    let model = KNearest::from_glyphs(crops.iter().map(|(p, d)| (p, *d)), 20).unwrap();
    let value = recognize_digits(&region, &model, &options).unwrap();
    rp.compare_values(42.0, value as f64, 0.0);

    assert!(rp.cleanup(), "touching_glyph regression test failed");
}

#[test]
fn batch_reg() {
    let mut rp = RegParams::new("batch");
    let model = font_model(&[2]);

    let texts = ["0", "1234", "987", "5050", "31415926"];
    let mut regions: Vec<Pix> = texts
        .iter()
        .map(|t| glyphs::render_number(t, 2, 3, 2).unwrap().0)
        .collect();
    regions.push(Pix::new(30, 10).unwrap());

    // Drop everything shorter than the glyphs to exercise the filter too
    let options = RecognizeOptions::default().with_rect_filter(RectFilter::min_height_ratio(0.6));
    let results = recognize_batch(&regions, &model, &options);
    rp.compare_values(regions.len() as f64, results.len() as f64, 0.0);
    for (text, result) in texts.iter().zip(&results) {
        let expected: u64 = text.parse().unwrap();
        rp.compare_values(expected as f64, *result.as_ref().unwrap() as f64, 0.0);
    }
    rp.compare_values(
        1.0,
        matches!(results.last(), Some(Err(RecogError::NoGlyphsFound))) as u8 as f64,
        0.0,
    );

    // -----------------------------------------------------------
    // Coverage selection picks the mask with the most ink
    // -----------------------------------------------------------
    let masks: Vec<Pix> = [1u8, 8, 7]
        .iter()
        .map(|&d| glyphs::render_digit(d, 2).unwrap().add_border(2).unwrap())
        .collect();
    rp.compare_values(1.0, select_by_coverage(&masks, 0).unwrap() as f64, 0.0);
    rp.compare_values(
        1.0,
        select_by_coverage(&masks, 10_000).is_none() as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "batch regression test failed");
}
