//! Background seed fill
//!
//! Marks the background reachable from the image border. Foreground is
//! 8-connected, so the background is filled with 4-connectivity: a hole
//! closed only by a diagonal step stays closed.

use arcocr_core::Pix;
use std::collections::VecDeque;

/// Background pixels 4-connected to the image border, row-major.
///
/// Pixels inside holes, and all foreground pixels, are `false`.
pub(crate) fn border_background(pix: &Pix) -> Vec<bool> {
    let width = pix.width();
    let height = pix.height();
    let idx = |x: u32, y: u32| (y * width + x) as usize;
    let mut reached = vec![false; (width * height) as usize];
    let mut queue = VecDeque::new();

    let seed = |x: u32, y: u32, reached: &mut [bool], queue: &mut VecDeque<(u32, u32)>| {
        if pix.get_pixel_unchecked(x, y) == 0 && !reached[idx(x, y)] {
            reached[idx(x, y)] = true;
            queue.push_back((x, y));
        }
    };
    for x in 0..width {
        seed(x, 0, &mut reached, &mut queue);
        seed(x, height - 1, &mut reached, &mut queue);
    }
    for y in 0..height {
        seed(0, y, &mut reached, &mut queue);
        seed(width - 1, y, &mut reached, &mut queue);
    }

    while let Some((x, y)) = queue.pop_front() {
        let neighbors = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];
        for (nx, ny) in neighbors {
            if nx < width && ny < height {
                seed(nx, ny, &mut reached, &mut queue);
            }
        }
    }
    reached
}
