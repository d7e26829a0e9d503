use serde::{Deserialize, Serialize};

/// A position in the pane's coordinate space, in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

impl Bounds {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn center_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let bounds = Bounds::from_xywh(0., 20., 100., 20.);
        assert!(bounds.contains(Point::new(0., 20.)));
        assert!(bounds.contains(Point::new(99.5, 39.9)));
        assert!(!bounds.contains(Point::new(50., 40.)));
        assert!(!bounds.contains(Point::new(100., 30.)));
        assert!(!bounds.contains(Point::new(50., 19.9)));
    }

    #[test]
    fn empty_bounds_contain_nothing() {
        let bounds = Bounds::from_xywh(10., 10., 0., 0.);
        assert!(!bounds.contains(Point::new(10., 10.)));
    }

    #[test]
    fn edges_and_midpoints() {
        let bounds = Bounds::from_xywh(4., 60., 40., 20.);
        assert_eq!(bounds.bottom(), 80.);
        assert_eq!(bounds.mid_y(), 70.);
        assert_eq!(bounds.center_x(), 24.);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(0., 0.).distance(Point::new(3., 4.)), 5.);
    }
}
