//! Box, Boxa - Rectangle regions
//!
//! These structures represent rectangular regions in an image. The rect
//! repair passes treat them as immutable values: a merge or a split always
//! produces new boxes instead of mutating the inputs.

/// A rectangle region
///
/// A small `Copy` value. `right()` and `bottom()` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a box from its left/top and exclusive right/bottom edges
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            w: right - left,
            h: bottom - top,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Width divided by height; 0.0 for a box with no height
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        if self.h <= 0 {
            return 0.0;
        }
        self.w as f64 / self.h as f64
    }

    /// Compute the union (bounding box) of two boxes
    pub fn union(&self, other: &Box) -> Box {
        Box::from_edges(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Bounding box of every box in the iterator, `None` if it is empty
    pub fn union_all<'a>(boxes: impl IntoIterator<Item = &'a Box>) -> Option<Box> {
        boxes.into_iter().fold(None, |acc: Option<Box>, b| match acc {
            Some(u) => Some(u.union(b)),
            None => Some(*b),
        })
    }

    /// Clip the box to fit within `[0, width) x [0, height)`
    pub fn clip(&self, width: i32, height: i32) -> Option<Box> {
        let x = self.x.max(0);
        let y = self.y.max(0);
        let right = self.right().min(width);
        let bottom = self.bottom().min(height);

        if x < right && y < bottom {
            Some(Box::from_edges(x, y, right, bottom))
        } else {
            None
        }
    }

    /// Split the box at an absolute x coordinate into `[x, split_x)` and `[split_x, right)`
    ///
    /// Returns `None` unless `split_x` falls strictly inside the box.
    pub fn split_at_x(&self, split_x: i32) -> Option<(Box, Box)> {
        if split_x <= self.x || split_x >= self.right() {
            return None;
        }
        Some((
            Box::from_edges(self.x, self.y, split_x, self.bottom()),
            Box::from_edges(split_x, self.y, self.right(), self.bottom()),
        ))
    }
}

/// Array of boxes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boxa {
    boxes: Vec<Box>,
}

impl Boxa {
    /// Iterate over the boxes
    pub fn iter(&self) -> std::slice::Iter<'_, Box> {
        self.boxes.iter()
    }

    /// Keep only the boxes matching the predicate
    pub fn retain(&mut self, keep: impl FnMut(&Box) -> bool) {
        self.boxes.retain(keep);
    }

    /// Sort boxes by ascending left edge (stable)
    pub fn sort_by_x(&mut self) {
        self.boxes.sort_by_key(|b| b.x);
    }

    /// Consume the Boxa, returning the underlying vector
    pub fn into_vec(self) -> Vec<Box> {
        self.boxes
    }
}

impl FromIterator<Box> for Boxa {
    fn from_iter<I: IntoIterator<Item = Box>>(iter: I) -> Self {
        Self {
            boxes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Boxa {
    type Item = Box;
    type IntoIter = std::vec::IntoIter<Box>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_edges() {
        let b = Box::new_unchecked(5, 2, 5, 16);
        assert_eq!(b.right(), 10);
        assert_eq!(b.bottom(), 18);
    }

    #[test]
    fn test_box_union() {
        let big = Box::new_unchecked(5, 2, 5, 16);
        let frag = Box::new_unchecked(5, 0, 5, 2);
        assert_eq!(big.union(&frag), Box::new_unchecked(5, 0, 5, 18));
    }

    #[test]
    fn test_box_union_all() {
        let boxes = [
            Box::new_unchecked(3, 4, 2, 2),
            Box::new_unchecked(1, 8, 2, 2),
            Box::new_unchecked(6, 0, 1, 1),
        ];
        assert_eq!(Box::union_all(&boxes), Some(Box::new_unchecked(1, 0, 6, 10)));
        assert_eq!(Box::union_all(&[]), None);
    }

    #[test]
    fn test_box_clip() {
        let b = Box::new_unchecked(-2, -2, 6, 6);
        assert_eq!(b.clip(10, 10), Some(Box::new_unchecked(0, 0, 4, 4)));
        assert_eq!(Box::new_unchecked(20, 20, 4, 4).clip(10, 10), None);
    }

    #[test]
    fn test_box_split_at_x() {
        let b = Box::new_unchecked(0, 0, 18, 10);
        let (l, r) = b.split_at_x(9).unwrap();
        assert_eq!(l, Box::new_unchecked(0, 0, 9, 10));
        assert_eq!(r, Box::new_unchecked(9, 0, 9, 10));
        assert!(b.split_at_x(0).is_none());
        assert!(b.split_at_x(18).is_none());
    }

    #[test]
    fn test_box_aspect_ratio() {
        assert!((Box::new_unchecked(0, 0, 18, 10).aspect_ratio() - 1.8).abs() < 1e-9);
        assert_eq!(Box::new_unchecked(0, 0, 3, 0).aspect_ratio(), 0.0);
    }

    #[test]
    fn test_boxa_sort_by_x() {
        let mut boxa: Boxa = [30, 2, 15, 2]
            .iter()
            .enumerate()
            .map(|(i, &x)| Box::new_unchecked(x, i as i32, 1, 1))
            .collect();
        boxa.sort_by_x();
        let order: Vec<(i32, i32)> = boxa.iter().map(|b| (b.x, b.y)).collect();
        assert_eq!(order, vec![(2, 1), (2, 3), (15, 2), (30, 0)]);
    }

    #[test]
    fn test_boxa_retain_into_vec() {
        let mut boxa: Boxa = (0..4).map(|i| Box::new_unchecked(i, 0, i + 1, 1)).collect();
        boxa.retain(|b| b.w > 2);
        assert_eq!(
            boxa.into_vec(),
            vec![Box::new_unchecked(2, 0, 3, 1), Box::new_unchecked(3, 0, 4, 1)]
        );
    }
}
