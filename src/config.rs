//! Validated run settings for the command-line renderer.

use crate::*;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("image width must be at least 1")]
    ZeroWidth,
    #[error("samples per pixel must be at least 1")]
    ZeroSamples,
    #[error("max depth must be at least 1")]
    ZeroDepth,
    #[error("thread count must be at least 1")]
    ZeroThreads,
    #[error("aspect ratio must be positive, got {0}")]
    NonPositiveAspect(Float),
    #[error("malformed aspect ratio {0:?}, expected W:H or a number")]
    MalformedAspect(String),
    #[error("unknown scene {0:?}")]
    UnknownScene(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneChoice {
    Cornell,
    Smoke,
}

impl SceneChoice {
    pub const NAMES: [&'static str; 2] = ["cornell", "smoke"];
}

impl FromStr for SceneChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cornell" => Ok(SceneChoice::Cornell),
            "smoke" => Ok(SceneChoice::Smoke),
            other => Err(ConfigError::UnknownScene(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: usize,
    pub aspect_ratio: Float,
    pub samples_per_pixel: usize,
    pub max_depth: usize,
    pub seed: Option<u64>,
    /// `None` leaves the rayon global pool at its default size.
    pub threads: Option<usize>,
    pub scene: SceneChoice,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 600,
            aspect_ratio: 1.0,
            samples_per_pixel: 10,
            max_depth: 50,
            seed: None,
            threads: None,
            scene: SceneChoice::Cornell,
            output: None,
        }
    }
}

impl Settings {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }
        if !(self.aspect_ratio > 0.0 && self.aspect_ratio.is_finite()) {
            return Err(ConfigError::NonPositiveAspect(self.aspect_ratio));
        }
        Ok(self)
    }

    /// Overrides the image parameters of a scene's camera.
    pub fn apply(&self, camera: &mut CameraConfig) {
        camera.image_width = self.width;
        camera.aspect_ratio = self.aspect_ratio;
        camera.samples_per_pixel = self.samples_per_pixel;
        camera.max_depth = self.max_depth;
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { seed: self.seed, ..Default::default() }
    }
}

/// Parses `16:9` style ratios or a plain number such as `1.5`.
pub fn parse_aspect(s: &str) -> Result<Float, ConfigError> {
    let malformed = || ConfigError::MalformedAspect(s.to_string());
    let ratio = match s.split_once(':') {
        Some((w, h)) => {
            let w: Float = w.trim().parse().map_err(|_| malformed())?;
            let h: Float = h.trim().parse().map_err(|_| malformed())?;
            if h == 0.0 {
                return Err(ConfigError::NonPositiveAspect(INFINITY));
            }
            w / h
        }
        None => s.trim().parse().map_err(|_| malformed())?,
    };
    if ratio > 0.0 && ratio.is_finite() {
        Ok(ratio)
    } else {
        Err(ConfigError::NonPositiveAspect(ratio))
    }
}
