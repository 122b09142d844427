use std::ops::{Add, Sub};

/// Ephemeral 3-D vector in meters. Every operation returns a new value;
/// nothing is mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Displacement vector from `a` to `b`.
    pub fn from_points(a: Self, b: Self) -> Self {
        b - a
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is exactly zero.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::default()
        } else {
            Self::new(self.x / mag, self.y / mag, self.z / mag)
        }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Angle between the two vectors in degrees. The cosine is clamped to
    /// [-1, 1] before `acos`, so floating noise on near-parallel vectors
    /// cannot produce NaN.
    pub fn angle_degrees(self, other: Self) -> f64 {
        let cos = self
            .normalize()
            .dot(other.normalize())
            .max(-1.0)
            .min(1.0);
        cos.acos().to_degrees()
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Distance in the horizontal (x, y) plane, ignoring z.
    pub fn horizontal_distance_to(self, other: Self) -> f64 {
        let delta = self - other;
        (delta.x * delta.x + delta.y * delta.y).sqrt()
    }

    /// Angle in degrees between this vector and the +z (up) axis.
    pub fn angle_from_vertical(self) -> f64 {
        self.angle_degrees(Self::new(0.0, 0.0, 1.0))
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(self) -> f64 {
        self.z
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
