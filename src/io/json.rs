use std::io::{self, Write};

use crate::scenario::Scenario;
use crate::sim::phase::FlightPhase;
use crate::sim::runner::Flight;
use crate::sim::state::Sample;

/// Summary statistics computed from a finished flight.
#[derive(Debug, Clone)]
pub struct FlightSummary {
    pub apogee_m: f64,
    pub apogee_time: f64,
    /// Time of the first coast sample; None when the shot never boosted
    /// or never burned out.
    pub burnout_time: Option<f64>,
    pub max_speed: f64,
    pub flight_time: f64,
    pub impact_speed: f64,
    pub downrange_m: f64,
    pub target_reached: bool,
}

impl FlightSummary {
    /// Compute the summary from flight data. Altitude and ground distance
    /// follow the scenario's geometric regime.
    pub fn from_flight(flight: &Flight, scenario: &Scenario) -> Self {
        let geom = &scenario.geometry;
        let launch = scenario.launch_position();

        let (apogee_m, apogee_time) = flight
            .samples
            .iter()
            .map(|s| (geom.altitude(&s.pos), s.time))
            .fold((f64::NEG_INFINITY, 0.0), |best, cand| {
                if cand.0 > best.0 {
                    cand
                } else {
                    best
                }
            });

        let burnout_time = flight
            .samples
            .iter()
            .zip(flight.samples.iter().skip(1))
            .find(|(prev, curr)| {
                prev.phase == FlightPhase::Boost && curr.phase != FlightPhase::Boost
            })
            .map(|(_, curr)| curr.time);

        let max_speed = flight
            .samples
            .iter()
            .map(Sample::speed)
            .fold(0.0_f64, f64::max);

        let last = flight.final_sample();

        FlightSummary {
            apogee_m,
            apogee_time,
            burnout_time,
            max_speed,
            flight_time: last.time,
            impact_speed: last.speed(),
            downrange_m: geom.downrange(&launch, &last.pos),
            target_reached: flight.target_reached,
        }
    }
}

/// Write a flight summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    scenario: &Scenario,
    flight: &Flight,
    summary: &FlightSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"scenario\": {{")?;
    writeln!(writer, "    \"name\": \"{}\",", scenario.name)?;
    writeln!(writer, "    \"vehicle\": \"{}\"", scenario.vehicle.name)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"performance\": {{")?;
    writeln!(writer, "    \"apogee_m\": {:.2},", summary.apogee_m)?;
    writeln!(writer, "    \"apogee_time_s\": {:.2},", summary.apogee_time)?;
    match summary.burnout_time {
        Some(t) => writeln!(writer, "    \"burnout_time_s\": {:.2},", t)?,
        None => writeln!(writer, "    \"burnout_time_s\": null,")?,
    }
    writeln!(writer, "    \"max_speed_ms\": {:.2},", summary.max_speed)?;
    writeln!(writer, "    \"flight_time_s\": {:.2},", summary.flight_time)?;
    writeln!(writer, "    \"impact_speed_ms\": {:.2},", summary.impact_speed)?;
    writeln!(writer, "    \"downrange_m\": {:.2}", summary.downrange_m)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"verdict\": {{")?;
    writeln!(writer, "    \"outcome\": \"{}\",", flight.outcome.label())?;
    writeln!(writer, "    \"target_reached\": {}", summary.target_reached)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a flight summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    scenario: &Scenario,
    flight: &Flight,
    summary: &FlightSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, scenario, flight, summary)
}
