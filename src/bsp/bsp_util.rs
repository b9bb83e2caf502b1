// src/bsp/bsp_util.rs
// Geometry value types used by the space partitioner.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }
}

/// One of the two horizontal directions a space can be divided along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

/// An axis-aligned rectangular space. All spaces sit on the same level, so
/// the vertical coordinate of `left_corner` is carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Space {
    /// Size of this space along the world x axis.
    pub length: f64,
    /// Size of this space along the world z axis.
    pub width: f64,
    /// The minimum-coordinate corner of this space.
    pub left_corner: Point3,
}

impl Space {
    pub fn new(left_corner: Point3, length: f64, width: f64) -> Self {
        Space {
            length,
            width,
            left_corner,
        }
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.length,
            Axis::Z => self.width,
        }
    }

    /// Divide this space at `offset` along `axis`, measured from the left
    /// corner. Returns the near and far halves; together they tile `self`.
    pub fn split(&self, axis: Axis, offset: f64) -> (Space, Space) {
        let mut far_corner = self.left_corner;
        match axis {
            Axis::X => {
                far_corner.x += offset;
                (
                    Space::new(self.left_corner, offset, self.width),
                    Space::new(far_corner, self.length - offset, self.width),
                )
            }
            Axis::Z => {
                far_corner.z += offset;
                (
                    Space::new(self.left_corner, self.length, offset),
                    Space::new(far_corner, self.length, self.width - offset),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_area() {
        let space = Space::new(Point3::new(0.0, 0.0, 0.0), 4.0, 2.5);
        assert_approx_eq!(space.area(), 10.0);
    }

    #[test]
    fn test_extent_per_axis() {
        let space = Space::new(Point3::new(1.0, 0.0, 2.0), 4.0, 2.5);
        assert_approx_eq!(space.extent(Axis::X), 4.0);
        assert_approx_eq!(space.extent(Axis::Z), 2.5);
    }

    #[test]
    fn test_split_on_x_tiles_parent() {
        let space = Space::new(Point3::new(1.0, 5.0, 2.0), 10.0, 4.0);
        let (near, far) = space.split(Axis::X, 3.0);

        assert_approx_eq!(near.length, 3.0);
        assert_approx_eq!(far.length, 7.0);
        assert_approx_eq!(near.width, 4.0);
        assert_approx_eq!(far.width, 4.0);

        // The far half starts where the near half ends.
        assert_approx_eq!(far.left_corner.x, 4.0);
        assert_eq!(near.left_corner, space.left_corner);
        assert_approx_eq!(near.area() + far.area(), space.area());
    }

    #[test]
    fn test_split_on_z_tiles_parent() {
        let space = Space::new(Point3::new(1.0, 5.0, 2.0), 10.0, 4.0);
        let (near, far) = space.split(Axis::Z, 1.5);

        assert_approx_eq!(near.width, 1.5);
        assert_approx_eq!(far.width, 2.5);
        assert_approx_eq!(near.length, 10.0);
        assert_approx_eq!(far.length, 10.0);
        assert_approx_eq!(far.left_corner.z, 3.5);
        assert_approx_eq!(near.area() + far.area(), space.area());
    }

    #[test]
    fn test_split_keeps_vertical_coordinate() {
        let space = Space::new(Point3::new(0.0, 7.0, 0.0), 6.0, 6.0);
        let (near, far) = space.split(Axis::X, 2.0);
        assert_approx_eq!(near.left_corner.y, 7.0);
        assert_approx_eq!(far.left_corner.y, 7.0);
    }
}
