use crate::*;

/// How a scattered direction is chosen.
pub enum Scatter {
    /// Sample from this density, mixed with light sampling by the integrator.
    Pdf(Box<dyn PDF>),
    /// A concrete specular ray; the integrator skips PDF weighting.
    Ray(Ray),
}

pub struct ScatterRecord {
    pub attenuation: Color,
    pub scatter: Scatter,
}

pub trait Material: Send + Sync {
    fn scatter(&self, _ray: &Ray, _record: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        None
    }
    fn emitted(&self, _ray: &Ray, _record: &HitRecord, _uv: UV, _p: &Point) -> Color {
        Color::ZERO
    }
    fn scattering_pdf(&self, _ray: &Ray, _record: &HitRecord, _scattered: &Ray) -> Float {
        0.0
    }
}

/// Neither scatters nor emits. For shapes that only serve as light-sampling
/// targets.
pub struct EmptyMaterial;
impl Material for EmptyMaterial {}

pub struct Lambertian {
    tex: Arc<dyn Texture>,
}

pub struct Metal {
    albedo: Color,
    fuzz: Float,
}

pub struct Dielectric {
    /// Refractive index in vacuum, or the ratio over the enclosing medium.
    refractive_index: Float,
}

/// One-sided emitter: only the front face glows.
pub struct DiffuseLight {
    tex: Arc<dyn Texture>,
}

/// Phase function of a participating medium.
pub struct Isotropic {
    tex: Arc<dyn Texture>,
}

impl Lambertian {
    pub fn from_color(albedo: Color) -> Self {
        Self { tex: Arc::new(SolidColor::from_color(albedo)) }
    }
    pub fn new(tex: Arc<dyn Texture>) -> Self {
        Self { tex }
    }
}

impl Metal {
    pub fn new(albedo: Color, fuzz: Float) -> Self {
        Self { albedo, fuzz: fuzz.clamp(0.0, 1.0) }
    }
}

impl Dielectric {
    pub fn new(refractive_index: Float) -> Self {
        Self { refractive_index }
    }
    /// Schlick's approximation.
    pub fn reflectance(cos: Float, ri: Float) -> Float {
        let r0 = ((1.0 - ri) / (1.0 + ri)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }
}

impl DiffuseLight {
    pub fn from_color(emit: Color) -> Self {
        Self { tex: Arc::new(SolidColor::from_color(emit)) }
    }
    pub fn new(tex: Arc<dyn Texture>) -> Self {
        Self { tex }
    }
}

impl Isotropic {
    pub fn from_color(albedo: Color) -> Self {
        Self { tex: Arc::new(SolidColor::from_color(albedo)) }
    }
    pub fn from_texture(tex: Arc<dyn Texture>) -> Self {
        Self { tex }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray: &Ray, record: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        let attenuation = self.tex.value(record.uv, &record.p);
        let scatter = Scatter::Pdf(Box::new(CosinePDF::new(&record.n)));
        Some(ScatterRecord { attenuation, scatter })
    }
    fn scattering_pdf(&self, _ray: &Ray, record: &HitRecord, scattered: &Ray) -> Float {
        let cos = record.n.dot(scattered.dir.normalize());
        (cos * FRAC_1_PI).max(0.0)
    }
}

impl Material for Metal {
    fn scatter(&self, ray: &Ray, record: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        let reflected = ray.dir.reflect(record.n).normalize() + self.fuzz * Vector::random_unit_vector(rng);
        // fuzzed below the surface: absorbed
        if reflected.dot(record.n) <= 0.0 {
            return None;
        }
        let scatter = Scatter::Ray(Ray::new(record.p, reflected, ray.tm));
        Some(ScatterRecord { attenuation: self.albedo, scatter })
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray: &Ray, record: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        let ri = if record.front { self.refractive_index.recip() } else { self.refractive_index };
        let unit = ray.dir.normalize();
        let cos = record.n.dot(-unit).min(1.0);
        let sin = (1.0 - cos * cos).sqrt();
        let dir = if ri * sin > 1.0 || Dielectric::reflectance(cos, ri) > rand_unit(rng) {
            unit.reflect(record.n)
        } else {
            unit.refract(record.n, ri)
        };
        let scatter = Scatter::Ray(Ray::new(record.p, dir, ray.tm));
        Some(ScatterRecord { attenuation: Color::ONE, scatter })
    }
}

impl Material for DiffuseLight {
    fn emitted(&self, _ray: &Ray, record: &HitRecord, uv: UV, p: &Point) -> Color {
        if record.front {
            self.tex.value(uv, p)
        } else {
            Color::ZERO
        }
    }
}

impl Material for Isotropic {
    fn scatter(&self, _ray: &Ray, record: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        let attenuation = self.tex.value(record.uv, &record.p);
        Some(ScatterRecord { attenuation, scatter: Scatter::Pdf(Box::new(SpherePDF)) })
    }
    fn scattering_pdf(&self, _ray: &Ray, _record: &HitRecord, _scattered: &Ray) -> Float {
        0.25 * FRAC_1_PI
    }
}
