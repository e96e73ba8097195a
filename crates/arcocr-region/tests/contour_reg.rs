//! Contour extraction regression test
//!
//! Run with:
//! ```
//! cargo test -p arcocr-region --test contour_reg
//! ```

use arcocr_core::{Box, Pix, PixMut};
use arcocr_region::{
    ConnectivityType, LabelMap, find_contours, find_contours_labeled, label_connected_components,
};
use arcocr_test::{RegParams, glyphs, pix_from_ascii};

#[test]
fn contour_reg() {
    let mut rp = RegParams::new("contour");

    // -----------------------------------------------------------
    // Every font digit is a single 8-connected blob
    // -----------------------------------------------------------
    for digit in 0..10u8 {
        let pix = glyphs::render_digit(digit, 3).unwrap();
        let contours = find_contours(&pix).unwrap();
        rp.compare_values(1.0, contours.len() as f64, 0.0);
        let c = &contours[0];
        rp.compare_values(pix.width() as f64, c.bounds.w as f64, 0.0);
        rp.compare_values(pix.height() as f64, c.bounds.h as f64, 0.0);
        rp.compare_values(pix.count_pixels() as f64, c.pixel_count as f64, 0.0);
        assert!(c.area() > 0.0, "digit {digit} has zero contour area");
    }

    // -----------------------------------------------------------
    // A rendered number: one contour per digit, bounds equal ink boxes
    // -----------------------------------------------------------
    let (pix, boxes) = glyphs::render_number("9802", 2, 3, 2).unwrap();
    let mut bounds: Vec<_> = find_contours(&pix)
        .unwrap()
        .into_iter()
        .map(|c| c.bounds)
        .collect();
    bounds.sort_by_key(|b| b.x);
    rp.compare_boxes(&boxes, &bounds);

    // -----------------------------------------------------------
    // 4-way connectivity splits diagonal strokes, 8-way does not
    // -----------------------------------------------------------
    let pix = pix_from_ascii(&["#...", ".#..", "..#.", "...#"]).unwrap();
    let (_, comps4) = label_connected_components(&pix, ConnectivityType::FourWay).unwrap();
    let (_, comps8) = label_connected_components(&pix, ConnectivityType::EightWay).unwrap();
    let (n4, n8) = (comps4.len(), comps8.len());
    rp.compare_values(4.0, n4 as f64, 0.0);
    rp.compare_values(1.0, n8 as f64, 0.0);

    // -----------------------------------------------------------
    // Label map keeps exactly the requested blobs
    // -----------------------------------------------------------
    let pix = pix_from_ascii(&["##....#", "##....#", ".......", "...##.."]).unwrap();
    let (contours, map) = find_contours_labeled(&pix).unwrap();
    rp.compare_values(3.0, contours.len() as f64, 0.0);
    let small: Vec<u32> = contours
        .iter()
        .filter(|c| c.pixel_count < 3)
        .map(|c| c.label)
        .collect();
    let kept = map.render_mask(|l| !small.contains(&l)).unwrap();
    let expected = pix_from_ascii(&["##.....", "##.....", ".......", "......."]).unwrap();
    rp.compare_pix(&expected, &kept);

    // -----------------------------------------------------------
    // Blobs inside a hole are not external contours
    // -----------------------------------------------------------
    let mut pm = PixMut::new(18, 20).unwrap();
    pm.fill_rect(4, 2, 10, 16, 1);
    pm.fill_rect(6, 4, 6, 12, 0);
    pm.fill_rect(9, 10, 1, 1, 1);
    let ring: Pix = pm.into();
    let bounds: Vec<Box> = find_contours(&ring).unwrap().iter().map(|c| c.bounds).collect();
    rp.compare_boxes(&[Box::new_unchecked(4, 2, 10, 16)], &bounds);

    // Specks inside the holes of 0, 6, 8 and 9 leave one contour per digit
    for digit in [0u8, 6, 8, 9] {
        let pix = glyphs::render_digit(digit, 3).unwrap();
        let mut pm = pix.to_mut();
        let (holes, _) =
            label_connected_components(&invert(&pix), ConnectivityType::FourWay).unwrap();
        let mut specks = 0;
        for y in 1..pix.height() as i32 - 1 {
            for x in 1..pix.width() as i32 - 1 {
                let label = holes.get(x, y);
                if label != 0 && is_enclosed(&holes, label, &pix) && clear_around(&pix, x, y) {
                    pm.fill_rect(x, y, 1, 1, 1);
                    specks += 1;
                }
            }
        }
        let specked: Pix = pm.into();
        rp.compare_values(1.0, (specks > 0) as u8 as f64, 0.0);
        let contours = find_contours(&specked).unwrap();
        rp.compare_values(1.0, contours.len() as f64, 0.0);
    }

    assert!(rp.cleanup(), "contour regression test failed");
}

fn invert(pix: &Pix) -> Pix {
    let mut pm = PixMut::new(pix.width(), pix.height()).unwrap();
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            if pix.get_pixel(x, y) == Some(0) {
                pm.fill_rect(x as i32, y as i32, 1, 1, 1);
            }
        }
    }
    pm.into()
}

/// A background component is enclosed if none of its pixels is on the image edge
fn is_enclosed(holes: &LabelMap, label: u32, pix: &Pix) -> bool {
    let (w, h) = (pix.width() as i32, pix.height() as i32);
    (0..w).all(|x| holes.get(x, 0) != label && holes.get(x, h - 1) != label)
        && (0..h).all(|y| holes.get(0, y) != label && holes.get(w - 1, y) != label)
}

/// No ink among the 8 neighbors
fn clear_around(pix: &Pix, x: i32, y: i32) -> bool {
    (-1..=1).all(|dy| {
        (-1..=1).all(|dx| pix.get_pixel((x + dx) as u32, (y + dy) as u32) == Some(0))
    })
}
