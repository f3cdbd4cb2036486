// ---------------------------------------------------------------------------
// Gravity magnitude laws
// ---------------------------------------------------------------------------

/// Gravitational constant, m^3/(kg*s^2).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Earth mass, kg.
pub const EARTH_MASS: f64 = 5.972e24;

/// Magnitude of gravitational acceleration as a function of distance from
/// the attracting body. Direction is supplied by the geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GravityModel {
    /// Fixed acceleration at every altitude.
    Constant { g: f64 },
    /// Inverse-square law, mu = G*M. The radial distance is clamped to the
    /// body radius so evaluations at or below the surface stay finite.
    InverseSquare { mu: f64, body_radius: f64 },
}

impl GravityModel {
    /// Inverse-square Earth gravity.
    pub fn earth(body_radius: f64) -> Self {
        GravityModel::InverseSquare {
            mu: GRAVITATIONAL_CONSTANT * EARTH_MASS,
            body_radius,
        }
    }

    /// Acceleration magnitude at a radial distance from the body center, m/s^2.
    pub fn accel_at_radius(&self, radius: f64) -> f64 {
        match *self {
            GravityModel::Constant { g } => g,
            GravityModel::InverseSquare { mu, body_radius } => {
                let r = radius.max(body_radius);
                mu / (r * r)
            }
        }
    }

    /// Acceleration magnitude at an altitude above the surface, m/s^2.
    /// Negative altitudes clamp to the surface.
    pub fn accel_at_altitude(&self, altitude: f64) -> f64 {
        match *self {
            GravityModel::Constant { g } => g,
            GravityModel::InverseSquare { body_radius, .. } => {
                self.accel_at_radius(body_radius + altitude.max(0.0))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
