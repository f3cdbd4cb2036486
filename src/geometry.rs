use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Geometric regimes
// ---------------------------------------------------------------------------

/// The two geometric regimes a trajectory can run in.
///
/// Flat: Cartesian East-North-Up frame, ground is the z = 0 plane, "up" is
/// the fixed +z axis. Spherical: body-centered Cartesian frame, the surface
/// is a sphere of the given radius, "up" is the local radial direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Flat,
    Spherical { radius: f64 },
}

impl Geometry {
    /// Local up direction at a position.
    pub fn up(&self, pos: &Vector3<f64>) -> Vector3<f64> {
        match *self {
            Geometry::Flat => Vector3::z(),
            Geometry::Spherical { .. } => {
                let r = pos.norm();
                if r > f64::EPSILON {
                    pos / r
                } else {
                    // Degenerate center position: any radial works, pick +z
                    // so the result stays deterministic.
                    Vector3::z()
                }
            }
        }
    }

    /// Altitude above the ground plane / sphere surface.
    pub fn altitude(&self, pos: &Vector3<f64>) -> f64 {
        match *self {
            Geometry::Flat => pos.z,
            Geometry::Spherical { radius } => pos.norm() - radius,
        }
    }

    /// Whether a position is on or below the surface.
    pub fn impacted(&self, pos: &Vector3<f64>) -> bool {
        self.altitude(pos) <= 0.0
    }

    /// Project a (possibly under-surface) position onto the surface.
    pub fn clamp_to_surface(&self, pos: &Vector3<f64>) -> Vector3<f64> {
        match *self {
            Geometry::Flat => Vector3::new(pos.x, pos.y, 0.0),
            Geometry::Spherical { radius } => self.up(pos) * radius,
        }
    }

    /// Axis a configured constant lateral force acts along: the North axis
    /// in the flat frame, the inertial +z axis in the spherical frame.
    pub fn lateral_axis(&self) -> Vector3<f64> {
        match *self {
            Geometry::Flat => Vector3::y(),
            Geometry::Spherical { .. } => Vector3::z(),
        }
    }

    /// Ground distance covered between a reference point and a position:
    /// planar horizontal norm in the flat regime, straight-line (chord)
    /// distance in the spherical regime.
    pub fn downrange(&self, from: &Vector3<f64>, pos: &Vector3<f64>) -> f64 {
        match *self {
            Geometry::Flat => {
                let dx = pos.x - from.x;
                let dy = pos.y - from.y;
                (dx * dx + dy * dy).sqrt()
            }
            Geometry::Spherical { .. } => (pos - from).norm(),
        }
    }
}

/// Cartesian position of a surface site given geodetic coordinates.
pub fn geodetic(lat_deg: f64, lon_deg: f64, radius: f64) -> Vector3<f64> {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    Vector3::new(
        radius * lat.cos() * lon.cos(),
        radius * lat.cos() * lon.sin(),
        radius * lat.sin(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EARTH_RADIUS;
    use approx::assert_relative_eq;

    #[test]
    fn flat_altitude_is_z() {
        let g = Geometry::Flat;
        assert_eq!(g.altitude(&Vector3::new(500.0, 30.0, 1200.0)), 1200.0);
        assert_eq!(g.up(&Vector3::new(500.0, 30.0, 1200.0)), Vector3::z());
    }

    #[test]
    fn flat_impact_at_or_below_ground() {
        let g = Geometry::Flat;
        assert!(g.impacted(&Vector3::new(100.0, 0.0, 0.0)));
        assert!(g.impacted(&Vector3::new(100.0, 0.0, -3.0)));
        assert!(!g.impacted(&Vector3::new(100.0, 0.0, 0.5)));
    }

    #[test]
    fn flat_clamp_zeroes_vertical_only() {
        let g = Geometry::Flat;
        let clamped = g.clamp_to_surface(&Vector3::new(750.0, -20.0, -4.2));
        assert_eq!(clamped, Vector3::new(750.0, -20.0, 0.0));
    }

    #[test]
    fn spherical_altitude_and_up_are_radial() {
        let g = Geometry::Spherical { radius: EARTH_RADIUS };
        let pos = Vector3::new(EARTH_RADIUS + 10_000.0, 0.0, 0.0);
        assert_relative_eq!(g.altitude(&pos), 10_000.0, epsilon = 1e-6);
        assert_relative_eq!(g.up(&pos), Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn spherical_clamp_lands_on_surface() {
        let g = Geometry::Spherical { radius: EARTH_RADIUS };
        let under = Vector3::new(EARTH_RADIUS - 500.0, 1_000.0, -2_000.0);
        let clamped = g.clamp_to_surface(&under);
        assert_relative_eq!(clamped.norm(), EARTH_RADIUS, epsilon = 1e-6);
    }

    #[test]
    fn downrange_flat_ignores_altitude() {
        let g = Geometry::Flat;
        let from = Vector3::zeros();
        let pos = Vector3::new(3_000.0, 4_000.0, 9_999.0);
        assert_relative_eq!(g.downrange(&from, &pos), 5_000.0, epsilon = 1e-9);
    }

    #[test]
    fn downrange_spherical_is_chord() {
        let g = Geometry::Spherical { radius: EARTH_RADIUS };
        let a = geodetic(0.0, 0.0, EARTH_RADIUS);
        let b = geodetic(0.0, 90.0, EARTH_RADIUS);
        let expected = EARTH_RADIUS * 2.0_f64.sqrt();
        assert_relative_eq!(g.downrange(&a, &b), expected, epsilon = 1.0);
    }

    #[test]
    fn geodetic_reference_points() {
        let origin = geodetic(0.0, 0.0, EARTH_RADIUS);
        assert_relative_eq!(origin, Vector3::x() * EARTH_RADIUS, epsilon = 1e-6);

        let pole = geodetic(90.0, 0.0, EARTH_RADIUS);
        assert_relative_eq!(pole.z, EARTH_RADIUS, epsilon = 1e-6);
        assert!(pole.x.abs() < 1.0 && pole.y.abs() < 1.0);

        let site = geodetic(50.4501, 30.5234, EARTH_RADIUS);
        assert_relative_eq!(site.norm(), EARTH_RADIUS, epsilon = 1e-6);
    }
}
