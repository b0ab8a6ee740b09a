use crate::*;

/// Closed scalar range. Used for ray parameter windows and for each AABB axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Add<Float> for Interval {
    type Output = Interval;
    fn add(self, rhs: Float) -> Self::Output {
        Interval { min: self.min + rhs, max: self.max + rhs }
    }
}

impl Interval {
    pub const EMPTY: Self = Self { min: INFINITY, max: NEG_INFINITY };
    pub const UNIVERSE: Self = Self { min: NEG_INFINITY, max: INFINITY };
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    pub fn new(min: Float, max: Float) -> Self {
        Self { min, max }
    }
    pub fn len(&self) -> Float {
        self.max - self.min
    }
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }
    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }
    pub fn surrounds(&self, x: Float) -> bool {
        self.min < x && x < self.max
    }
    pub fn clamp(&self, x: Float) -> Float {
        x.clamp(self.min, self.max)
    }
    /// Grows the interval by `delta` in total, half on each side.
    pub fn expanded(&self, delta: Float) -> Interval {
        let padding = delta / 2.0;
        Interval { min: self.min - padding, max: self.max + padding }
    }
    pub fn ordered(x: Float, y: Float) -> Self {
        let (min, max) = if x >= y { (y, x) } else { (x, y) };
        Self { min, max }
    }
    pub fn enclosing(a: &Self, b: &Self) -> Self {
        Interval { min: a.min.min(b.min), max: a.max.max(b.max) }
    }
}

/// `orig + t * dir`, sampled at time `tm` in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub orig: Point,
    pub dir: Vector,
    pub tm: Float,
}

impl Ray {
    pub fn new(orig: Point, dir: Vector, tm: Float) -> Self {
        Self { orig, dir, tm }
    }
    pub fn at(&self, t: Float) -> Point {
        self.orig + t * self.dir
    }
}

pub trait VectorExt {
    fn reflect(&self, n: Vector) -> Self;
    fn refract(&self, n: Vector, etai_over_etat: Float) -> Self;
}

impl VectorExt for Vector {
    fn reflect(&self, n: Vector) -> Self {
        *self - 2.0 * self.dot(n) * n
    }
    // self must be unit length
    fn refract(&self, n: Vector, etai_over_etat: Float) -> Self {
        let cos = (-*self).dot(n).min(1.0);
        let perp = etai_over_etat * (*self + cos * n);
        let parallel = -(1.0 - perp.length_squared()).abs().sqrt() * n;
        perp + parallel
    }
}
