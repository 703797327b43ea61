//! Points and rectangles in list coordinates (logical pixels, y down).

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Returns this point shifted by the given offsets.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Squared euclidean distance to `other`.
    pub fn distance_squared(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Edges are inclusive on the leading side and exclusive on the trailing
    /// side, so stacked rows never both claim the same point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_rects_do_not_share_boundary() {
        let first = Rect::new(0.0, 0.0, 90.0, 40.0);
        let second = first.translate(0.0, 40.0);
        let boundary = Point::new(10.0, 40.0);

        assert!(!first.contains(boundary));
        assert!(second.contains(boundary));
    }

    #[test]
    fn center_of_translated_rect() {
        let rect = Rect::from_origin_size(Point::new(10.0, 20.0), Size::new(90.0, 40.0));
        assert_eq!(rect.center(), Point::new(55.0, 40.0));
        assert_eq!(rect.size(), Size::new(90.0, 40.0));
    }

    #[test]
    fn point_arithmetic() {
        let down = Point::new(12.0, 30.0);
        let current = down.offset(25.0, -4.0);
        assert_eq!(current - down, Point::new(25.0, -4.0));
        assert_eq!(down + Point::new(1.0, 1.0), Point::new(13.0, 31.0));
        assert_eq!(down.distance_squared(Point::new(15.0, 34.0)), 25.0);
    }
}
