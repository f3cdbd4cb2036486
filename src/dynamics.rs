use nalgebra::Vector3;

use crate::geometry::Geometry;
use crate::physics::aerodynamics;
use crate::scenario::Scenario;
use crate::sim::phase::FlightPhase;
use crate::sim::state::State;

// ---------------------------------------------------------------------------
// Point-mass force model
// ---------------------------------------------------------------------------

/// Compute the net force on the vehicle for a given state and phase.
///
/// Forces modeled:
///   1. Gravity — magnitude from the configured law, along local "down"
///   2. Drag    — quadratic, opposing each enabled velocity component
///   3. Thrust  — constant magnitude along the launch direction during Boost
///   4. Lateral — optional constant side force during Boost
pub fn net_force(state: &State, scenario: &Scenario, phase: FlightPhase) -> Vector3<f64> {
    let geom = &scenario.geometry;
    let alt = geom.altitude(&state.pos);
    let up = geom.up(&state.pos);

    // --- Gravity ---
    let g_mag = match *geom {
        Geometry::Flat => scenario.gravity.accel_at_altitude(alt),
        Geometry::Spherical { .. } => scenario.gravity.accel_at_radius(state.pos.norm()),
    };
    let f_gravity = -up * (g_mag * state.mass);

    // --- Drag ---
    let density = scenario.atmosphere.density(alt);
    let f_drag = aerodynamics::drag_force(
        &state.vel,
        density,
        scenario.vehicle.cd,
        scenario.vehicle.area,
        scenario.drag_axes,
    );

    // --- Thrust and lateral force (powered phase only) ---
    let f_powered = if phase.thrusting() {
        scenario.launch_direction() * scenario.vehicle.thrust
            + geom.lateral_axis() * scenario.lateral_force
    } else {
        Vector3::zeros()
    };

    f_gravity + f_drag + f_powered
}

/// Net upward force at ignition (N). Non-positive means the vehicle cannot
/// leave the pad; the runner reports this as a launch failure.
pub fn ignition_margin(scenario: &Scenario) -> f64 {
    let pos = scenario.launch_position();
    let state = State {
        time: 0.0,
        pos,
        vel: Vector3::zeros(),
        mass: scenario.vehicle.initial_mass,
    };
    let up = scenario.geometry.up(&pos);
    net_force(&state, scenario, FlightPhase::Boost).dot(&up)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::aerodynamics::DragAxes;
    use crate::scenario::ScenarioBuilder;
    use crate::sim::state::EARTH_RADIUS;
    use crate::vehicle::VehicleBuilder;

    fn pad_state(scenario: &Scenario) -> State {
        State {
            time: 0.0,
            pos: scenario.launch_position(),
            vel: Vector3::zeros(),
            mass: scenario.vehicle.initial_mass,
        }
    }

    fn vertical_booster() -> Scenario {
        let v = VehicleBuilder::new("Booster")
            .initial_mass(30_000.0)
            .dry_mass(20_000.0)
            .burn_rate(500.0)
            .thrust(600_000.0)
            .build();
        ScenarioBuilder::new("vertical", v).build()
    }

    #[test]
    fn net_upward_force_on_pad() {
        let s = vertical_booster();
        let f = net_force(&pad_state(&s), &s, FlightPhase::Boost);
        // 600 kN thrust against ~294 kN weight
        assert!(f.z > 0.0, "expected net upward force, got {}", f.z);
        assert!(ignition_margin(&s) > 0.0);
    }

    #[test]
    fn weak_thrust_has_negative_margin() {
        let v = VehicleBuilder::new("Weak")
            .initial_mass(30_000.0)
            .dry_mass(20_000.0)
            .burn_rate(500.0)
            .thrust(0.5 * 30_000.0 * 9.81)
            .build();
        let s = ScenarioBuilder::new("weak", v).build();
        assert!(ignition_margin(&s) < 0.0);
    }

    #[test]
    fn no_thrust_while_coasting() {
        let s = vertical_booster();
        let state = State {
            time: 30.0,
            pos: Vector3::new(0.0, 0.0, 5_000.0),
            vel: Vector3::zeros(),
            mass: s.vehicle.dry_mass,
        };
        let f = net_force(&state, &s, FlightPhase::Coast);
        // Gravity only (at rest, no drag): straight down
        assert!(f.z < 0.0);
        assert_eq!(f.x, 0.0);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn drag_respects_axis_mask() {
        let v = VehicleBuilder::new("Masked")
            .unpowered(1_000.0)
            .cd(0.5)
            .area(1.0)
            .build();
        let s = ScenarioBuilder::new("masked", v)
            .drag_axes(DragAxes {
                downrange: true,
                lateral: false,
                vertical: false,
            })
            .build();
        let state = State {
            time: 0.0,
            pos: Vector3::new(0.0, 0.0, 1_000.0),
            vel: Vector3::new(100.0, 100.0, 100.0),
            mass: 1_000.0,
        };
        let f = net_force(&state, &s, FlightPhase::Coast);
        assert!(f.x < 0.0, "downrange drag enabled");
        assert_eq!(f.y, 0.0, "lateral drag disabled");
        // Vertical carries gravity only, no drag term
        let weight = 1_000.0 * 9.81;
        assert!((f.z + weight).abs() < 1e-9);
    }

    #[test]
    fn spherical_gravity_points_at_center() {
        let v = VehicleBuilder::new("Sph").unpowered(1_000.0).build();
        let s = ScenarioBuilder::new("sph", v)
            .geometry(Geometry::Spherical { radius: EARTH_RADIUS })
            .drag_axes(DragAxes::NONE)
            .launch_site(Vector3::new(EARTH_RADIUS, 0.0, 0.0))
            .build();
        let state = State {
            time: 0.0,
            pos: Vector3::new(EARTH_RADIUS + 100_000.0, 0.0, 0.0),
            vel: Vector3::zeros(),
            mass: 1_000.0,
        };
        let f = net_force(&state, &s, FlightPhase::Coast);
        assert!(f.x < 0.0, "gravity should pull toward the center");
        assert_eq!(f.y, 0.0);
        assert_eq!(f.z, 0.0);
    }

    #[test]
    fn lateral_force_applies_only_during_boost() {
        let v = VehicleBuilder::new("Side")
            .initial_mass(500_000.0)
            .dry_mass(100_000.0)
            .burn_rate(2_000.0)
            .thrust(20_000_000.0)
            .build();
        let s = ScenarioBuilder::new("side", v)
            .drag_axes(DragAxes::NONE)
            .lateral_force(500_000.0)
            .build();
        let state = pad_state(&s);
        let boosting = net_force(&state, &s, FlightPhase::Boost);
        let coasting = net_force(&state, &s, FlightPhase::Coast);
        assert_eq!(boosting.y, 500_000.0);
        assert_eq!(coasting.y, 0.0);
    }
}
