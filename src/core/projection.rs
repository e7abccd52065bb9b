use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;
use crate::error::{AtlasError, AtlasResult};

const EPSILON: f64 = 1e-6;

/// Parameters of the Albers conic equal-area projection used for the map.
///
/// Angles are in degrees. `translate` is filled from the map surface center
/// when the projection is built for a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlbersParams {
    pub parallels: [f64; 2],
    pub rotate: [f64; 3],
    pub center: [f64; 2],
    pub scale: f64,
}

impl Default for AlbersParams {
    fn default() -> Self {
        Self {
            parallels: [45.0, 45.5],
            rotate: [96.90, -5.45, 0.0],
            center: [-15.0, 41.78],
            scale: 600.0,
        }
    }
}

impl AlbersParams {
    pub fn validate(self) -> AtlasResult<()> {
        let all = self
            .parallels
            .iter()
            .chain(self.rotate.iter())
            .chain(self.center.iter());
        for value in all {
            if !value.is_finite() {
                return Err(AtlasError::InvalidData(
                    "projection angles must be finite".to_owned(),
                ));
            }
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(AtlasError::InvalidData(
                "projection scale must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Raw conic equal-area projection in radians, with a cylindrical fallback
/// when the two standard parallels are symmetric about the equator.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ConicRaw {
    Conic { n: f64, c: f64, r0: f64 },
    Cylindrical { cos_phi0: f64 },
}

impl ConicRaw {
    fn new(phi0: f64, phi1: f64) -> Self {
        let sin_phi0 = phi0.sin();
        let n = (sin_phi0 + phi1.sin()) / 2.0;
        if n.abs() < EPSILON {
            return Self::Cylindrical {
                cos_phi0: phi0.cos(),
            };
        }
        let c = 1.0 + sin_phi0 * (2.0 * n - sin_phi0);
        Self::Conic {
            n,
            c,
            r0: c.sqrt() / n,
        }
    }

    fn project(self, lambda: f64, phi: f64) -> (f64, f64) {
        match self {
            Self::Conic { n, c, r0 } => {
                let r = (c - 2.0 * n * phi.sin()).sqrt() / n;
                let angle = lambda * n;
                (r * angle.sin(), r0 - r * angle.cos())
            }
            Self::Cylindrical { cos_phi0 } => (lambda * cos_phi0, phi.sin() / cos_phi0),
        }
    }
}

/// Spherical rotation by yaw (`lambda`), pitch (`phi`) and roll (`gamma`).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rotation {
    delta_lambda: f64,
    cos_phi: f64,
    sin_phi: f64,
    cos_gamma: f64,
    sin_gamma: f64,
}

impl Rotation {
    fn new([lambda, phi, gamma]: [f64; 3]) -> Self {
        let delta_phi = (phi % 360.0).to_radians();
        let delta_gamma = (gamma % 360.0).to_radians();
        Self {
            delta_lambda: (lambda % 360.0).to_radians(),
            cos_phi: delta_phi.cos(),
            sin_phi: delta_phi.sin(),
            cos_gamma: delta_gamma.cos(),
            sin_gamma: delta_gamma.sin(),
        }
    }

    fn apply(self, lambda: f64, phi: f64) -> (f64, f64) {
        let mut lambda = lambda + self.delta_lambda;
        if lambda > PI {
            lambda -= TAU;
        } else if lambda < -PI {
            lambda += TAU;
        }

        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();
        let k = z * self.cos_phi + x * self.sin_phi;
        (
            (y * self.cos_gamma - k * self.sin_gamma).atan2(x * self.cos_phi - z * self.sin_phi),
            (k * self.cos_gamma + y * self.sin_gamma).clamp(-1.0, 1.0).asin(),
        )
    }
}

/// Forward Albers projection from `[lon, lat]` degrees to surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlbersProjection {
    raw: ConicRaw,
    rotation: Rotation,
    scale: f64,
    dx: f64,
    dy: f64,
}

impl AlbersProjection {
    pub fn new(params: AlbersParams, translate: (f64, f64)) -> AtlasResult<Self> {
        params.validate()?;
        if !translate.0.is_finite() || !translate.1.is_finite() {
            return Err(AtlasError::InvalidData(
                "projection translate must be finite".to_owned(),
            ));
        }

        let raw = ConicRaw::new(
            params.parallels[0].to_radians(),
            params.parallels[1].to_radians(),
        );
        let (cx, cy) = raw.project(
            (params.center[0] % 360.0).to_radians(),
            (params.center[1] % 360.0).to_radians(),
        );
        let projection = Self {
            raw,
            rotation: Rotation::new(params.rotate),
            scale: params.scale,
            dx: translate.0 - cx * params.scale,
            dy: translate.1 + cy * params.scale,
        };
        if !projection.dx.is_finite() || !projection.dy.is_finite() {
            return Err(AtlasError::InvalidData(
                "projection center is outside the projectable area".to_owned(),
            ));
        }
        Ok(projection)
    }

    /// Projects one position; `None` when the result is not finite.
    #[must_use]
    pub fn project(&self, lon: f64, lat: f64) -> Option<ScreenPoint> {
        let (lambda, phi) = self.rotation.apply(lon.to_radians(), lat.to_radians());
        let (x, y) = self.raw.project(lambda, phi);
        let point = ScreenPoint::new(self.dx + x * self.scale, self.dy - y * self.scale);
        point.is_finite().then_some(point)
    }
}
