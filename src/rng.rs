// Random sampling helpers. Every sampling routine takes the generator as an
// argument; there is no global RNG.

use crate::*;
use rand::distributions::Uniform;
pub use rand::SeedableRng;

/// Per-path generator. Xoshiro is fast, statistically strong and cheap to
/// seed, so each pixel gets its own instance.
pub type TraceRng = rand_xoshiro::Xoshiro256PlusPlus;

/// Generator for pixel `index` of a render seeded with `seed`.
pub fn pixel_rng(seed: u64, index: u64) -> TraceRng {
    TraceRng::seed_from_u64(seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Uniform in `[0, 1)`.
pub fn rand_unit(rng: &mut dyn RngCore) -> Float {
    rng.gen()
}

pub trait RngVector {
    /// Components uniform in `[-1, 1)`.
    fn random(rng: &mut dyn RngCore) -> Self;
    fn random_unit_vector(rng: &mut dyn RngCore) -> Self;
    /// Point in the unit disk of the XY plane.
    fn random_in_unit_disk(rng: &mut dyn RngCore) -> Self;
    /// Cosine-weighted direction about +Z.
    fn random_cosine_direction(rng: &mut dyn RngCore) -> Self;
    /// Direction about +Z uniform over the cone subtended by a sphere of
    /// `radius` at squared distance `distance_squared`.
    fn random_to_sphere(radius: Float, distance_squared: Float, rng: &mut dyn RngCore) -> Self;
}

impl RngVector for Vector {
    fn random(rng: &mut dyn RngCore) -> Self {
        let d = Uniform::new(-1.0, 1.0);
        Vector::new(rng.sample(d), rng.sample(d), rng.sample(d))
    }

    fn random_unit_vector(rng: &mut dyn RngCore) -> Self {
        loop {
            let p = Self::random(rng);
            let lsq = p.length_squared();
            if 1e-160 < lsq && lsq <= 1.0 {
                return p / lsq.sqrt();
            }
        }
    }

    fn random_in_unit_disk(rng: &mut dyn RngCore) -> Self {
        let d = Uniform::new(-1.0, 1.0);
        loop {
            let p = Vector::new(rng.sample(d), rng.sample(d), 0.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    fn random_cosine_direction(rng: &mut dyn RngCore) -> Self {
        let r1 = rand_unit(rng);
        let r2 = rand_unit(rng);
        let phi = 2.0 * PI * r1;
        let x = phi.cos() * r2.sqrt();
        let y = phi.sin() * r2.sqrt();
        let z = (1.0 - r2).sqrt();
        Vector::new(x, y, z)
    }

    fn random_to_sphere(radius: Float, distance_squared: Float, rng: &mut dyn RngCore) -> Self {
        let r1 = rand_unit(rng);
        let r2 = rand_unit(rng);
        let cos_max = (1.0 - radius * radius / distance_squared).max(0.0).sqrt();
        let z = 1.0 + r2 * (cos_max - 1.0);
        let phi = 2.0 * PI * r1;
        let s = (1.0 - z * z).max(0.0).sqrt();
        Vector::new(phi.cos() * s, phi.sin() * s, z)
    }
}
