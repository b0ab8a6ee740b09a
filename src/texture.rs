use crate::*;

/// Color as a function of surface coordinates and hit point.
pub trait Texture: Send + Sync {
    fn value(&self, uv: UV, p: &Point) -> Color;
}

pub struct SolidColor {
    albedo: Color,
}

/// Alternates two textures on a 3D lattice of cells `scale` wide.
pub struct CheckeredColor {
    inv_scale: Float,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl SolidColor {
    pub fn from_color(albedo: Color) -> Self {
        Self { albedo }
    }
    pub fn from_rgb(r: Float, g: Float, b: Float) -> Self {
        Self { albedo: Color::new(r, g, b) }
    }
}

impl CheckeredColor {
    pub fn new(scale: Float, even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self { inv_scale: scale.recip(), even, odd }
    }
    pub fn from_color(scale: Float, even: Color, odd: Color) -> Self {
        Self::new(scale, Arc::new(SolidColor::from_color(even)), Arc::new(SolidColor::from_color(odd)))
    }
}

impl Texture for SolidColor {
    fn value(&self, _: UV, _: &Point) -> Color {
        self.albedo
    }
}

impl Texture for CheckeredColor {
    fn value(&self, uv: UV, p: &Point) -> Color {
        let cell = (self.inv_scale * *p).floor();
        let sum = cell.x as i64 + cell.y as i64 + cell.z as i64;
        if sum.rem_euclid(2) == 0 {
            self.even.value(uv, p)
        } else {
            self.odd.value(uv, p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid() {
        let tex = SolidColor::from_rgb(0.1, 0.2, 0.3);
        assert_eq!(tex.value(UV::ZERO, &Point::ONE), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_checker_alternates() {
        let tex = CheckeredColor::from_color(1.0, Color::ZERO, Color::ONE);
        assert_eq!(tex.value(UV::ZERO, &Point::new(0.5, 0.5, 0.5)), Color::ZERO);
        assert_eq!(tex.value(UV::ZERO, &Point::new(1.5, 0.5, 0.5)), Color::ONE);
        assert_eq!(tex.value(UV::ZERO, &Point::new(-0.5, 0.5, 0.5)), Color::ONE);
    }
}
