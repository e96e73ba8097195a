//! External contours of foreground blobs
//!
//! One [`Contour`] per outermost 8-connected component: its traced outer
//! border, the bounding box and the pixel count. Holes are not reported,
//! and neither is any blob lying inside another blob's hole.

use crate::ccbord::{Border, trace_outer_border};
use crate::conncomp::{ConnectivityType, LabelMap, label_connected_components};
use crate::error::RegionResult;
use crate::seedfill::border_background;
use arcocr_core::{Box, Pix};

/// Outer boundary of exactly one foreground blob
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Component label in the accompanying [`LabelMap`]
    pub label: u32,
    /// Outer border in clockwise order
    pub border: Border,
    /// Bounding box of the blob
    pub bounds: Box,
    /// Number of ink pixels in the blob
    pub pixel_count: u32,
}

impl Contour {
    /// Polygon area enclosed by the border
    pub fn area(&self) -> f64 {
        self.border.area()
    }
}

/// Labels of components touching the image edge or the border background
fn outermost_labels(pix: &Pix, map: &LabelMap, count: usize) -> Vec<bool> {
    let width = pix.width() as i32;
    let height = pix.height() as i32;
    let background = border_background(pix);
    let open = |x: i32, y: i32| {
        x < 0 || y < 0 || x >= width || y >= height || background[(y * width + x) as usize]
    };

    let mut outer = vec![false; count + 1];
    for y in 0..height {
        for x in 0..width {
            let label = map.get(x, y);
            if label == 0 || outer[label as usize] {
                continue;
            }
            if open(x - 1, y) || open(x + 1, y) || open(x, y - 1) || open(x, y + 1) {
                outer[label as usize] = true;
            }
        }
    }
    outer
}

/// Find the external contour of every outermost blob, along with the label map
///
/// Contours come back in label order. Blobs nested inside a hole keep their
/// label in the map but get no contour. The label map lets callers drop a
/// blob's ink by label (see [`LabelMap::render_mask`]).
pub fn find_contours_labeled(pix: &Pix) -> RegionResult<(Vec<Contour>, LabelMap)> {
    let (map, comps) = label_connected_components(pix, ConnectivityType::EightWay)?;
    let outer = outermost_labels(pix, &map, comps.len());
    let mut contours = Vec::with_capacity(comps.len());
    for comp in comps {
        if !outer[comp.label as usize] {
            continue;
        }
        let Some(start) = map.first_pixel(&comp) else {
            continue;
        };
        contours.push(Contour {
            label: comp.label,
            border: trace_outer_border(pix, start.into())?,
            bounds: comp.bounds,
            pixel_count: comp.pixel_count,
        });
    }
    Ok((contours, map))
}

/// Find the external contour of every blob
///
/// An image without ink yields an empty list.
pub fn find_contours(pix: &Pix) -> RegionResult<Vec<Contour>> {
    find_contours_labeled(pix).map(|(contours, _)| contours)
}
