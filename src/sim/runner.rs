use crate::dynamics;
use crate::error::ScenarioError;
use crate::scenario::Scenario;

use super::integrator::euler_step;
use super::phase::FlightPhase;
use super::state::{Sample, State};

// ---------------------------------------------------------------------------
// Run outcome
// ---------------------------------------------------------------------------

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The body reached the ground plane / sphere surface.
    Impacted,
    /// The time budget ran out before impact. Not a fault.
    MaxTimeExceeded,
    /// Net upward force at ignition was non-positive; the flight holds
    /// only the ignition sample.
    LaunchFailure,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Impacted => "impacted",
            Outcome::MaxTimeExceeded => "max_time_exceeded",
            Outcome::LaunchFailure => "launch_failure",
        }
    }
}

// ---------------------------------------------------------------------------
// Flight: the finished trajectory plus its verdicts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// Time-ordered samples, one per accepted step, ignition sample first.
    pub samples: Vec<Sample>,
    pub outcome: Outcome,
    /// Whether the configured target distance was met. Trivially true for
    /// scenarios without a target.
    pub target_reached: bool,
}

impl Flight {
    /// The terminal sample. A flight always holds at least the ignition
    /// sample.
    pub fn final_sample(&self) -> &Sample {
        &self.samples[self.samples.len() - 1]
    }

    pub fn duration(&self) -> f64 {
        self.final_sample().time
    }
}

// ---------------------------------------------------------------------------
// Simulation loop
// ---------------------------------------------------------------------------

/// Run a scenario from ignition to impact, time-budget exhaustion, or
/// launch failure.
pub fn simulate(scenario: &Scenario) -> Result<Flight, ScenarioError> {
    scenario.validate()?;

    let launch_pos = scenario.launch_position();
    let mut state = State {
        time: 0.0,
        pos: launch_pos,
        vel: scenario.initial_velocity(),
        mass: scenario.vehicle.initial_mass,
    };
    let mut phase = FlightPhase::initial(&scenario.vehicle);

    let capacity = (scenario.max_time / scenario.dt) as usize + 1;
    let mut samples = Vec::with_capacity(capacity.min(200_000));
    samples.push(Sample::of(&state, phase));

    // Launch guard: a powered start from rest must clear the pad.
    let launch_failed = phase == FlightPhase::Boost
        && scenario.initial_speed == 0.0
        && dynamics::ignition_margin(scenario) <= 0.0;

    let mut outcome = Outcome::MaxTimeExceeded;

    if launch_failed {
        outcome = Outcome::LaunchFailure;
    } else {
        let mut airborne = false;

        while state.time < scenario.max_time {
            // Force and acceleration from the state at the start of the step
            let force = dynamics::net_force(&state, scenario, phase);
            let accel = force / state.mass;

            let mut next = euler_step(&state, accel, scenario.dt);
            next.mass = scenario.vehicle.mass_at(next.time);
            phase = phase.advance(&scenario.vehicle, next.time);

            let alt = scenario.geometry.altitude(&next.pos);
            if alt > 0.0 {
                airborne = true;
            }

            // Surface contact: below the surface, or back on it after
            // having been airborne.
            if alt < 0.0 || (airborne && alt <= 0.0) {
                next.pos = scenario.geometry.clamp_to_surface(&next.pos);
                phase = FlightPhase::Impacted;
                samples.push(Sample::of(&next, phase));
                state = next;
                outcome = Outcome::Impacted;
                break;
            }

            samples.push(Sample::of(&next, phase));
            state = next;
        }
    }

    let downrange = scenario.geometry.downrange(&launch_pos, &state.pos);
    let target_reached = scenario.target_distance.map_or(true, |d| downrange >= d);

    Ok(Flight {
        samples,
        outcome,
        target_reached,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
