use nalgebra::Vector3;

use crate::sim::phase::FlightPhase;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

/// Standard gravity, m/s^2.
pub const G0: f64 = 9.80665;

/// Mean Earth radius, m.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// Full kinematic state at a single point in time. Owned by the runner for
/// the duration of a run; the output sequence holds `Sample` snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub time: f64,         // s
    pub pos: Vector3<f64>, // m
    pub vel: Vector3<f64>, // m/s
    pub mass: f64,         // kg (decreases during the burn)
}

impl State {
    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }
}

/// Immutable snapshot appended to the trajectory, one per accepted step.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub pos: Vector3<f64>,
    pub vel: Vector3<f64>,
    pub mass: f64,
    pub phase: FlightPhase,
}

impl Sample {
    pub fn of(state: &State, phase: FlightPhase) -> Sample {
        Sample {
            time: state.time,
            pos: state.pos,
            vel: state.vel,
            mass: state.mass,
            phase,
        }
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }
}
