//! Connected component analysis
//!
//! This module provides functions for finding and labeling connected components
//! in binary images. It uses a Union-Find (disjoint set) data structure for
//! two-pass labeling.
//!
//! Labels are assigned in raster order of each component's first pixel,
//! starting at 1. Label 0 is background.

use crate::error::RegionResult;
use arcocr_core::{Box, Pix, PixMut};

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

/// A connected component in an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Unique label for this component
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding box of this component
    pub bounds: Box,
}

impl ConnectedComponent {
    /// Create a new connected component
    pub fn new(label: u32, pixel_count: u32, bounds: Box) -> Self {
        Self {
            label,
            pixel_count,
            bounds,
        }
    }
}

/// Per-pixel component labels of a binary image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
}

impl LabelMap {
    /// Label at (`x`, `y`); 0 for background or outside the image.
    pub fn get(&self, x: i32, y: i32) -> u32 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return 0;
        }
        self.labels[(y as u32 * self.width + x as u32) as usize]
    }

    /// Build a binary image holding only the components for which `keep` is true.
    pub fn render_mask(&self, keep: impl Fn(u32) -> bool) -> RegionResult<Pix> {
        let mut out = PixMut::new(self.width, self.height)?;
        for y in 0..self.height {
            let row = &self.labels[(y * self.width) as usize..((y + 1) * self.width) as usize];
            for (x, &label) in row.iter().enumerate() {
                if label != 0 && keep(label) {
                    out.set_pixel_unchecked(x as u32, y, 1);
                }
            }
        }
        Ok(out.into())
    }

    /// First pixel of a component in raster order.
    pub fn first_pixel(&self, component: &ConnectedComponent) -> Option<(i32, i32)> {
        let y = component.bounds.y;
        (component.bounds.x..component.bounds.right())
            .find(|&x| self.get(x, y) == component.label)
            .map(|x| (x, y))
    }
}

struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        // Index 0 is the background and never merged.
        Self { parent: vec![0] }
    }

    fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grand = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grand;
            x = grand;
        }
        x
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi as usize] = lo;
        }
    }
}

/// Label all connected components in a binary image
///
/// Returns the label map together with one [`ConnectedComponent`] per
/// label, ordered by label.
pub fn label_connected_components(
    pix: &Pix,
    connectivity: ConnectivityType,
) -> RegionResult<(LabelMap, Vec<ConnectedComponent>)> {
    let width = pix.width();
    let height = pix.height();
    let mut provisional = vec![0u32; width as usize * height as usize];
    let mut sets = UnionFind::new();

    let neighbors: &[(i32, i32)] = match connectivity {
        ConnectivityType::FourWay => &[(-1, 0), (0, -1)],
        ConnectivityType::EightWay => &[(-1, 0), (-1, -1), (0, -1), (1, -1)],
    };

    // First pass: provisional labels and equivalences
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if !pix.is_foreground(x, y) {
                continue;
            }
            let mut label = 0u32;
            for &(dx, dy) in neighbors {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= width as i32 {
                    continue;
                }
                let nl = provisional[(ny as u32 * width + nx as u32) as usize];
                if nl == 0 {
                    continue;
                }
                if label == 0 {
                    label = nl;
                } else {
                    sets.union(label, nl);
                }
            }
            if label == 0 {
                label = sets.make_set();
            }
            provisional[(y as u32 * width + x as u32) as usize] = label;
        }
    }

    // Second pass: resolve to final labels in raster order of first pixel
    let mut final_of_root = vec![0u32; sets.parent.len()];
    let mut components: Vec<ConnectedComponent> = Vec::new();
    let mut extents: Vec<(i32, i32, i32, i32)> = Vec::new();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let idx = (y as u32 * width + x as u32) as usize;
            if provisional[idx] == 0 {
                continue;
            }
            let root = sets.find(provisional[idx]);
            if final_of_root[root as usize] == 0 {
                components.push(ConnectedComponent::new(
                    components.len() as u32 + 1,
                    0,
                    Box::default(),
                ));
                extents.push((x, y, x, y));
                final_of_root[root as usize] = components.len() as u32;
            }
            let label = final_of_root[root as usize];
            provisional[idx] = label;
            let i = label as usize - 1;
            components[i].pixel_count += 1;
            let e = &mut extents[i];
            e.0 = e.0.min(x);
            e.1 = e.1.min(y);
            e.2 = e.2.max(x);
            e.3 = e.3.max(y);
        }
    }

    for (comp, &(l, t, r, b)) in components.iter_mut().zip(&extents) {
        comp.bounds = Box::from_edges(l, t, r + 1, b + 1);
    }

    Ok((
        LabelMap {
            width,
            height,
            labels: provisional,
        },
        components,
    ))
}
