//! Border tracing for connected components
//!
//! Outer borders are traced with Moore-neighbor following: starting from a
//! component's first pixel in raster order, the tracer walks clockwise
//! around the blob, always keeping background on its left. Holes are not
//! traced.

use crate::error::{RegionError, RegionResult};
use arcocr_core::{Box, Pix};

/// Direction for border traversal (8-connected, clockwise from West)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// West (-1, 0)
    West = 0,
    /// Northwest (-1, -1)
    NorthWest = 1,
    /// North (0, -1)
    North = 2,
    /// Northeast (1, -1)
    NorthEast = 3,
    /// East (1, 0)
    East = 4,
    /// Southeast (1, 1)
    SouthEast = 5,
    /// South (0, 1)
    South = 6,
    /// Southwest (-1, 1)
    SouthWest = 7,
}

impl Direction {
    /// Get the x offset for this direction
    #[inline]
    pub fn dx(self) -> i32 {
        XPOSTAB[self as usize]
    }

    /// Get the y offset for this direction
    #[inline]
    pub fn dy(self) -> i32 {
        YPOSTAB[self as usize]
    }

    /// Get direction from x,y offsets
    pub fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        if dx.abs() > 1 || dy.abs() > 1 || (dx == 0 && dy == 0) {
            return None;
        }
        let idx = DIRTAB[(1 + dy) as usize][(1 + dx) as usize];
        if idx < 0 {
            None
        } else {
            Some(Self::from_index(idx as usize))
        }
    }

    /// Create direction from index, wrapping modulo 8
    #[inline]
    fn from_index(idx: usize) -> Self {
        match idx % 8 {
            0 => Direction::West,
            1 => Direction::NorthWest,
            2 => Direction::North,
            3 => Direction::NorthEast,
            4 => Direction::East,
            5 => Direction::SouthEast,
            6 => Direction::South,
            _ => Direction::SouthWest,
        }
    }

    /// The direction `steps` positions further clockwise
    #[inline]
    pub fn rotated(self, steps: usize) -> Self {
        Self::from_index(self as usize + steps)
    }
}

/// X offset for each direction
const XPOSTAB: [i32; 8] = [-1, -1, 0, 1, 1, 1, 0, -1];

/// Y offset for each direction
const YPOSTAB: [i32; 8] = [0, -1, -1, -1, 0, 1, 1, 1];

/// Direction lookup table: DIRTAB[1+dy][1+dx] gives direction index
const DIRTAB: [[i32; 3]; 3] = [[1, 2, 3], [0, -1, 4], [7, 6, 5]];

/// A point on a border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderPoint {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl BorderPoint {
    /// Create a new border point
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move in the given direction
    #[inline]
    pub fn moved(self, dir: Direction) -> Self {
        Self {
            x: self.x + dir.dx(),
            y: self.y + dir.dy(),
        }
    }
}

impl From<(i32, i32)> for BorderPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A closed outer border, points in clockwise traversal order
///
/// The first point is not repeated at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Border {
    /// All points on the border
    pub points: Vec<BorderPoint>,
}

impl Border {
    /// Create a new border from points
    pub fn new(points: Vec<BorderPoint>) -> Self {
        Self { points }
    }

    /// Get the number of points in this border
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the border is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get bounding box of this border
    pub fn bounding_box(&self) -> Option<Box> {
        if self.points.is_empty() {
            return None;
        }

        let mut min_x = i32::MAX;
        let mut min_y = i32::MAX;
        let mut max_x = i32::MIN;
        let mut max_y = i32::MIN;

        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Box::new_unchecked(
            min_x,
            min_y,
            max_x - min_x + 1,
            max_y - min_y + 1,
        ))
    }

    /// Area enclosed by the polygon through the border's pixel centers.
    ///
    /// Shoelace formula, absolute value. Borders with fewer than three
    /// points enclose nothing.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: i64 = (0..n)
            .map(|i| {
                let p = self.points[i];
                let q = self.points[(i + 1) % n];
                p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64
            })
            .sum();
        twice.abs() as f64 / 2.0
    }
}

/// Find the next border pixel clockwise from `back`, the background
/// neighbor last examined. Returns the pixel and its new backtrack direction.
fn next_border_pixel(
    pix: &Pix,
    cur: BorderPoint,
    back: Direction,
) -> Option<(BorderPoint, Direction)> {
    for step in 1..8 {
        let dir = back.rotated(step);
        let candidate = cur.moved(dir);
        if pix.is_foreground(candidate.x, candidate.y) {
            let behind = cur.moved(back.rotated(step - 1));
            let new_back = Direction::from_offset(behind.x - candidate.x, behind.y - candidate.y)?;
            return Some((candidate, new_back));
        }
    }
    None
}

/// Trace the outer border of the component whose first raster pixel is `start`.
///
/// `start` must be a foreground pixel whose west neighbor is background, as
/// is true for the top-most, left-most pixel of any component. Tracing stops
/// when the walk returns to `start` and is about to repeat its first move.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if `start` is not foreground.
pub fn trace_outer_border(pix: &Pix, start: BorderPoint) -> RegionResult<Border> {
    if !pix.is_foreground(start.x, start.y) {
        return Err(RegionError::InvalidSeed {
            x: start.x,
            y: start.y,
        });
    }

    let mut points = vec![start];
    let mut cur = start;
    let mut back = Direction::West;
    // Each border pixel is visited at most four times.
    let max_steps = 4 * pix.width() as usize * pix.height() as usize + 8;

    for _ in 0..max_steps {
        let Some((next, next_back)) = next_border_pixel(pix, cur, back) else {
            break;
        };
        if cur == start && points.len() > 1 && Some(&next) == points.get(1) {
            points.pop();
            break;
        }
        points.push(next);
        cur = next;
        back = next_back;
    }

    Ok(Border::new(points))
}
