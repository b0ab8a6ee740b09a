use crate::*;

/// A density over directions that can also be sampled.
pub trait PDF {
    fn value(&self, dir: &Vector) -> Float;
    fn generate(&self, rng: &mut dyn RngCore) -> Vector;
}

/// Uniform over the unit sphere.
pub struct SpherePDF;

impl PDF for SpherePDF {
    fn value(&self, _dir: &Vector) -> Float {
        0.25 * FRAC_1_PI
    }
    fn generate(&self, rng: &mut dyn RngCore) -> Vector {
        Vector::random_unit_vector(rng)
    }
}

/// Cosine-weighted about a surface normal.
pub struct CosinePDF {
    onb: ONB,
}

impl CosinePDF {
    pub fn new(n: &Vector) -> Self {
        Self { onb: ONB::new(n) }
    }
}

impl PDF for CosinePDF {
    fn value(&self, dir: &Vector) -> Float {
        let cos = dir.normalize().dot(self.onb.w);
        (cos * FRAC_1_PI).max(0.0)
    }
    fn generate(&self, rng: &mut dyn RngCore) -> Vector {
        self.onb.transform(&Vector::random_cosine_direction(rng))
    }
}

/// Samples directions from `orig` toward a hittable (usually the lights).
///
/// `value` evaluates with a fixed-seed scratch generator so the density is a
/// pure function of the direction.
pub struct HittablePDF<'a> {
    objects: &'a dyn Hittable,
    orig: Point,
}

impl<'a> HittablePDF<'a> {
    pub fn new(objects: &'a dyn Hittable, orig: Point) -> Self {
        Self { objects, orig }
    }
}

impl PDF for HittablePDF<'_> {
    fn value(&self, dir: &Vector) -> Float {
        let mut scratch = TraceRng::seed_from_u64(0);
        self.objects.pdf_value(&self.orig, dir, &mut scratch)
    }
    fn generate(&self, rng: &mut dyn RngCore) -> Vector {
        self.objects.random_direction(&self.orig, rng)
    }
}

/// Equal-weight mixture of two densities.
pub struct MixturePDF<'a> {
    left: &'a dyn PDF,
    right: &'a dyn PDF,
}

impl<'a> MixturePDF<'a> {
    /// Fixed mixing weight; changing it changes convergence behaviour.
    pub const WEIGHT: Float = 0.5;

    pub fn new(left: &'a dyn PDF, right: &'a dyn PDF) -> Self {
        Self { left, right }
    }
}

impl PDF for MixturePDF<'_> {
    fn value(&self, dir: &Vector) -> Float {
        Self::WEIGHT * self.left.value(dir) + (1.0 - Self::WEIGHT) * self.right.value(dir)
    }
    fn generate(&self, rng: &mut dyn RngCore) -> Vector {
        if rand_unit(rng) < Self::WEIGHT {
            self.left.generate(rng)
        } else {
            self.right.generate(rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_pdf_constant() {
        let pdf = SpherePDF;
        assert!((pdf.value(&Vector::X) - 1.0 / (4.0 * PI)).abs() < 1e-15);
        assert_eq!(pdf.value(&Vector::X), pdf.value(&Vector::new(0.3, -0.2, 9.0)));
    }

    #[test]
    fn test_cosine_pdf_hemisphere() {
        let pdf = CosinePDF::new(&Vector::Y);
        assert!((pdf.value(&Vector::Y) - FRAC_1_PI).abs() < 1e-15);
        assert!((pdf.value(&(Vector::Y * 5.0)) - FRAC_1_PI).abs() < 1e-15);
        assert_eq!(pdf.value(&-Vector::Y), 0.0);
        let mut rng = TraceRng::seed_from_u64(8);
        for _ in 0..100 {
            assert!(pdf.generate(&mut rng).y >= 0.0);
        }
    }

    #[test]
    fn test_cosine_pdf_mean_estimate() {
        let pdf = CosinePDF::new(&Vector::new(1.0, 2.0, -0.5));
        let mut rng = TraceRng::seed_from_u64(12);
        let n = 20_000;
        let mean_cos: Float = (0..n)
            .map(|_| pdf.generate(&mut rng).dot(pdf.onb.w))
            .sum::<Float>()
            / n as Float;
        // E[cos] under a cosine density is 2/3
        assert!((mean_cos - 2.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn test_mixture_is_average() {
        let quad = Quad::new(Point::new(-1.0, -1.0, -2.0), Vector::new(2.0, 0.0, 0.0), Vector::new(0.0, 2.0, 0.0), Arc::new(EmptyMaterial));
        let light = HittablePDF::new(&quad, Point::ZERO);
        let cosine = CosinePDF::new(&Vector::new(0.0, 0.0, -1.0));
        let mixture = MixturePDF::new(&light, &cosine);
        let mut rng = TraceRng::seed_from_u64(4);
        for _ in 0..50 {
            let d = Vector::random(&mut rng);
            let expected = 0.5 * light.value(&d) + 0.5 * cosine.value(&d);
            assert!((mixture.value(&d) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_mixture_samples_both() {
        let a = CosinePDF::new(&Vector::Y);
        let b = CosinePDF::new(&-Vector::Y);
        let mixture = MixturePDF::new(&a, &b);
        let mut rng = TraceRng::seed_from_u64(5);
        let up = (0..1000).filter(|_| mixture.generate(&mut rng).y > 0.0).count();
        assert!((400..600).contains(&up));
    }
}
