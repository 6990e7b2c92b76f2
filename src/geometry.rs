use serde::{Deserialize, Serialize};

/// A rectangle representing a region, room or corridor segment, in grid units
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Opposite corner x (exclusive edge)
    pub fn x2(&self) -> i32 {
        self.x + self.width
    }

    /// Opposite corner y (exclusive edge)
    pub fn y2(&self) -> i32 {
        self.y + self.height
    }

    /// Integer midpoint; ties round toward the lower coordinate
    pub fn center(&self) -> (i32, i32) {
        (
            (self.x + self.x2()).div_euclid(2),
            (self.y + self.y2()).div_euclid(2),
        )
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Closed-interval overlap test. Rectangles that merely share an edge
    /// count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.x2() && self.x2() >= other.x && self.y <= other.y2() && self.y2() >= other.y
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x2() && y >= self.y && y < self.y2()
    }

    /// True if `inner` lies inside this rectangle with at least `margin`
    /// tiles of clearance on every side.
    pub fn contains_with_margin(&self, inner: &Rect, margin: i32) -> bool {
        inner.x >= self.x + margin
            && inner.y >= self.y + margin
            && inner.x2() <= self.x2() - margin
            && inner.y2() <= self.y2() - margin
    }

    /// Iterate over every tile covered by this rectangle, row by row
    pub fn tiles(&self) -> impl Iterator<Item = (i32, i32)> {
        let Rect { x, y, width, height } = *self;
        (y..y + height).flat_map(move |ty| (x..x + width).map(move |tx| (tx, ty)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let rect = Rect::new(3, 4, 10, 6);
        assert_eq!(rect.x2(), 13);
        assert_eq!(rect.y2(), 10);
        assert_eq!(rect.area(), 60);
    }

    #[test]
    fn test_rect_center_rounds_down() {
        assert_eq!(Rect::new(0, 0, 10, 10).center(), (5, 5));
        assert_eq!(Rect::new(5, 5, 4, 6).center(), (7, 8));
        // (2 + 5) / 2 = 3.5 -> 3
        assert_eq!(Rect::new(2, 2, 3, 3).center(), (3, 3));
    }

    #[test]
    fn test_intersects_overlap_and_disjoint() {
        let a = Rect::new(0, 0, 5, 5);
        assert!(a.intersects(&Rect::new(2, 2, 5, 5)));
        assert!(!a.intersects(&Rect::new(10, 0, 3, 3)));
        assert!(!a.intersects(&Rect::new(0, 6, 3, 3)));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(5, 0, 5, 5);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_one_tile_gap_does_not_intersect() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(6, 0, 5, 5);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_with_margin() {
        let leaf = Rect::new(0, 0, 10, 10);
        assert!(leaf.contains_with_margin(&Rect::new(1, 1, 8, 8), 1));
        assert!(!leaf.contains_with_margin(&Rect::new(0, 1, 8, 8), 1));
        assert!(!leaf.contains_with_margin(&Rect::new(1, 1, 9, 8), 1));
    }

    #[test]
    fn test_tiles_covers_area() {
        let rect = Rect::new(2, 3, 3, 2);
        let tiles: Vec<_> = rect.tiles().collect();
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[0], (2, 3));
        assert_eq!(tiles[5], (4, 4));
        assert!(tiles.iter().all(|&(x, y)| rect.contains(x, y)));
    }
}
