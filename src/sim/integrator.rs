use nalgebra::Vector3;

use crate::sim::state::State;

// ---------------------------------------------------------------------------
// Fixed-step semi-implicit Euler integrator
// ---------------------------------------------------------------------------

/// Advance a state by one fixed step under a constant acceleration.
///
/// Velocity updates first; the position update then uses the *new*
/// velocity. The ordering is load-bearing: the reference trajectories were
/// produced with exactly this scheme, and swapping it for explicit Euler
/// shifts every impact point.
///
/// Mass is carried through unchanged; the runner reassigns it from the
/// depletion model after the step.
pub fn euler_step(state: &State, accel: Vector3<f64>, dt: f64) -> State {
    let vel = state.vel + accel * dt;
    State {
        time: state.time + dt,
        pos: state.pos + vel * dt,
        vel,
        mass: state.mass,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn at_rest() -> State {
        State {
            time: 0.0,
            pos: Vector3::zeros(),
            vel: Vector3::zeros(),
            mass: 100.0,
        }
    }

    #[test]
    fn velocity_updates_before_position() {
        // From rest under constant accel, one semi-implicit step moves the
        // position by a*dt^2 (explicit Euler would leave it at zero).
        let a = Vector3::new(0.0, 0.0, -9.81);
        let dt = 0.1;
        let next = euler_step(&at_rest(), a, dt);
        assert!((next.vel.z - (-0.981)).abs() < 1e-12);
        assert!((next.pos.z - (-0.0981)).abs() < 1e-12);
    }

    #[test]
    fn time_advances_by_exactly_dt() {
        let next = euler_step(&at_rest(), Vector3::zeros(), 0.05);
        assert_eq!(next.time, 0.05);
    }

    #[test]
    fn mass_is_untouched() {
        let next = euler_step(&at_rest(), Vector3::new(1.0, 0.0, 0.0), 0.1);
        assert_eq!(next.mass, 100.0);
    }

    #[test]
    fn zero_accel_is_uniform_motion() {
        let state = State {
            time: 1.0,
            pos: Vector3::new(10.0, 0.0, 100.0),
            vel: Vector3::new(50.0, 0.0, 0.0),
            mass: 1.0,
        };
        let next = euler_step(&state, Vector3::zeros(), 0.5);
        assert_eq!(next.vel, state.vel);
        assert_eq!(next.pos, Vector3::new(35.0, 0.0, 100.0));
    }
}
