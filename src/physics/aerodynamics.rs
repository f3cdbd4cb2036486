use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Component-wise quadratic drag
// ---------------------------------------------------------------------------

/// Which axes drag acts on.
///
/// Axis meaning follows the simulation frame: x = downrange, y = lateral,
/// z = vertical (flat regime) or the inertial axes (spherical regime).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAxes {
    pub downrange: bool,
    pub lateral: bool,
    pub vertical: bool,
}

impl DragAxes {
    pub const ALL: DragAxes = DragAxes {
        downrange: true,
        lateral: true,
        vertical: true,
    };

    pub const NONE: DragAxes = DragAxes {
        downrange: false,
        lateral: false,
        vertical: false,
    };

    pub fn any(&self) -> bool {
        self.downrange || self.lateral || self.vertical
    }
}

/// Drag force opposing each enabled velocity component independently:
/// F_i = -0.5 * rho * Cd * A * v_i * |v_i|.
pub fn drag_force(
    vel: &Vector3<f64>,
    density: f64,
    cd: f64,
    area: f64,
    axes: DragAxes,
) -> Vector3<f64> {
    let k = 0.5 * density * cd * area;
    let component = |v: f64, enabled: bool| if enabled { -k * v * v.abs() } else { 0.0 };
    Vector3::new(
        component(vel.x, axes.downrange),
        component(vel.y, axes.lateral),
        component(vel.z, axes.vertical),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::atmosphere::RHO_SEA_LEVEL;

    #[test]
    fn drag_opposes_each_component() {
        let vel = Vector3::new(100.0, -50.0, 200.0);
        let f = drag_force(&vel, RHO_SEA_LEVEL, 0.5, 1.0, DragAxes::ALL);
        assert!(f.x < 0.0, "drag should oppose +x motion");
        assert!(f.y > 0.0, "drag should oppose -y motion");
        assert!(f.z < 0.0, "drag should oppose +z motion");
    }

    #[test]
    fn no_drag_at_rest() {
        let f = drag_force(&Vector3::zeros(), RHO_SEA_LEVEL, 0.5, 1.0, DragAxes::ALL);
        assert_eq!(f.norm(), 0.0);
    }

    #[test]
    fn disabled_axis_carries_no_drag() {
        let vel = Vector3::new(100.0, 100.0, 100.0);
        let axes = DragAxes {
            downrange: true,
            lateral: false,
            vertical: false,
        };
        let f = drag_force(&vel, RHO_SEA_LEVEL, 0.5, 1.0, axes);
        assert!(f.x < 0.0);
        assert_eq!(f.y, 0.0);
        assert_eq!(f.z, 0.0);
    }

    #[test]
    fn drag_is_quadratic_in_speed() {
        let slow = drag_force(
            &Vector3::new(10.0, 0.0, 0.0),
            RHO_SEA_LEVEL,
            0.5,
            1.0,
            DragAxes::ALL,
        );
        let fast = drag_force(
            &Vector3::new(20.0, 0.0, 0.0),
            RHO_SEA_LEVEL,
            0.5,
            1.0,
            DragAxes::ALL,
        );
        assert!((fast.x / slow.x - 4.0).abs() < 1e-12);
    }

    #[test]
    fn vacuum_produces_no_drag() {
        let vel = Vector3::new(300.0, 0.0, 300.0);
        let f = drag_force(&vel, 0.0, 0.5, 1.0, DragAxes::ALL);
        assert_eq!(f.norm(), 0.0);
    }
}
