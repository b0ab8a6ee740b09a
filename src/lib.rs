//! restlife: a Monte Carlo path tracer.
//!
//! The scene is an immutable tree of [`Hittable`] nodes (usually rooted at a
//! [`BVHNode`]). [`ray_color`] estimates the radiance along a ray by mixing
//! light sampling with the material's own scattering density, and the
//! [`renderer`] drives it over the image in parallel buckets.

pub mod aabb;
pub mod bvh;
pub mod camera;
pub mod config;
pub mod hitrecord;
pub mod hittable;
pub mod integrator;
pub mod material;
pub mod math;
pub mod onb;
pub mod pdf;
pub mod renderer;
pub mod rng;
pub mod scene;
pub mod texture;

pub use aabb::*;
pub use bvh::*;
pub use camera::*;
pub use config::*;
pub use hitrecord::*;
pub use hittable::*;
pub use integrator::*;
pub use material::*;
pub use math::*;
pub use onb::*;
pub use pdf::*;
pub use renderer::*;
pub use rng::*;
pub use texture::*;

pub(crate) use rand::{Rng, RngCore};
pub(crate) use std::f64::consts::{FRAC_1_PI, PI};
pub(crate) use std::f64::{INFINITY, NEG_INFINITY};
pub(crate) use std::ops::{Add, Index};
pub use std::sync::Arc;

pub type Float = f64;
pub type Point = glam::DVec3;
pub type Vector = glam::DVec3;
pub type Color = glam::DVec3;
pub type UV = glam::DVec2;
