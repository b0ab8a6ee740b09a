use crate::*;

/// Axis-aligned bounding box. Every constructor except [`AABB::NONE`] pads
/// thin axes so flat primitives still produce a usable slab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Index<usize> for AABB {
    type Output = Interval;
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds: {}", index),
        }
    }
}

impl Add<Vector> for &AABB {
    type Output = AABB;
    fn add(self, offset: Vector) -> Self::Output {
        AABB { x: self.x + offset.x, y: self.y + offset.y, z: self.z + offset.z }
    }
}

impl AABB {
    pub const NONE: Self = Self { x: Interval::EMPTY, y: Interval::EMPTY, z: Interval::EMPTY };
    pub const PAD_DELTA: Float = 0.0001;

    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }.padded()
    }
    /// Box with `a` and `b` as opposite corners.
    pub fn enclosing_point(a: &Point, b: &Point) -> Self {
        let x = Interval::ordered(a.x, b.x);
        let y = Interval::ordered(a.y, b.y);
        let z = Interval::ordered(a.z, b.z);
        Self { x, y, z }.padded()
    }
    pub fn enclosing_volume(a: &Self, b: &Self) -> Self {
        let x = Interval::enclosing(&a.x, &b.x);
        let y = Interval::enclosing(&a.y, &b.y);
        let z = Interval::enclosing(&a.z, &b.z);
        Self { x, y, z }.padded()
    }
    pub fn contains(&self, p: &Point) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }
    /// Slab test. A zero direction component makes `recip` infinite, which
    /// either keeps or empties that axis' range as IEEE-754 dictates.
    pub fn hit(&self, ray: &Ray, ray_t: &Interval) -> bool {
        let mut t_min = ray_t.min;
        let mut t_max = ray_t.max;
        for axis in 0..3 {
            let interval = &self[axis];
            let dinv = ray.dir[axis].recip();
            let from = ray.orig[axis];

            let t0 = (interval.min - from) * dinv;
            let t1 = (interval.max - from) * dinv;

            let (t0, t1) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max <= t_min {
                return false;
            }
        }
        true
    }
    pub fn longest_axis(&self) -> usize {
        if self.x.len() > self.y.len() && self.x.len() > self.z.len() {
            0
        } else if self.y.len() > self.z.len() {
            1
        } else {
            2
        }
    }
    fn padded(self) -> Self {
        let pad = |i: Interval| if i.len() < Self::PAD_DELTA { i.expanded(Self::PAD_DELTA) } else { i };
        Self { x: pad(self.x), y: pad(self.y), z: pad(self.z) }
    }
}
