// Math utilities: directions and rectangles in map space (y grows downward)

use glam::Vec2;

/// One of the four directions a sprite can face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction4 {
    #[default]
    Right,
    Up,
    Left,
    Down,
}

impl Direction4 {
    /// Unit vector pointing in this direction
    pub fn to_vec(self) -> Vec2 {
        match self {
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Down => Vec2::new(0.0, 1.0),
        }
    }

    /// The direction opposite to this one
    pub fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
        }
    }

    /// Closest facing direction for a movement vector.
    /// Horizontal wins ties, like walking diagonally in most 2D games.
    pub fn from_vec(v: Vec2) -> Option<Self> {
        if v.length_squared() < f32::EPSILON {
            return None;
        }
        if v.x.abs() >= v.y.abs() {
            Some(if v.x > 0.0 { Self::Right } else { Self::Left })
        } else {
            Some(if v.y > 0.0 { Self::Down } else { Self::Up })
        }
    }
}

/// Unit vector for an 8-way direction (0 = right, counter-clockwise)
pub fn direction8_to_vec(direction8: u8) -> Vec2 {
    let angle = (direction8 % 8) as f32 * std::f32::consts::FRAC_PI_4;
    // y axis points down on the map
    Vec2::new(angle.cos(), -angle.sin())
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    /// Rectangle of the given size centered on a point
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_vectors() {
        assert_eq!(Direction4::Right.to_vec(), Vec2::new(1.0, 0.0));
        assert_eq!(Direction4::Up.to_vec(), Vec2::new(0.0, -1.0));
        assert_eq!(Direction4::Down.opposite(), Direction4::Up);
    }

    #[test]
    fn test_direction_from_vec() {
        assert_eq!(Direction4::from_vec(Vec2::new(0.0, 2.0)), Some(Direction4::Down));
        assert_eq!(Direction4::from_vec(Vec2::new(-1.0, 1.0)), Some(Direction4::Left));
        assert_eq!(Direction4::from_vec(Vec2::ZERO), None);
    }

    #[test]
    fn test_direction8() {
        let up = direction8_to_vec(2);
        assert_relative_eq!(up.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(up.y, -1.0, epsilon = 1e-6);

        let down_left = direction8_to_vec(5);
        assert_relative_eq!(down_left.length(), 1.0, epsilon = 1e-6);
        assert!(down_left.x < 0.0 && down_left.y > 0.0);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 16.0, 16.0);
        let b = Rect::new(8.0, 8.0, 16.0, 16.0);
        let c = Rect::new(16.0, 0.0, 16.0, 16.0);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c), "Touching edges do not overlap");
        assert!(a.contains(Vec2::new(15.9, 0.0)));
        assert!(!a.contains(Vec2::new(16.0, 0.0)));
    }

    #[test]
    fn test_rect_centered() {
        let r = Rect::centered(Vec2::new(10.0, 10.0), Vec2::new(4.0, 2.0));
        assert_eq!(r.center(), Vec2::new(10.0, 10.0));
        assert_eq!(r.size(), Vec2::new(4.0, 2.0));
    }
}
