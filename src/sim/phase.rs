use crate::vehicle::Vehicle;

// ---------------------------------------------------------------------------
// Flight phases
// ---------------------------------------------------------------------------

/// The flight-phase state machine. Transitions are one-directional:
/// Boost -> Coast on propellant exhaustion, any phase -> Impacted on
/// surface contact; there is no path out of Impacted and no path back
/// into Boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    /// Powered ascent: engine burning, propellant remaining.
    Boost,
    /// Unpowered ballistic flight.
    Coast,
    /// Terminal: the body has reached the surface.
    Impacted,
}

impl FlightPhase {
    /// Phase at ignition. Vehicles with no thrust or no propellant skip
    /// the powered phase entirely.
    pub fn initial(vehicle: &Vehicle) -> FlightPhase {
        if vehicle.has_thrust_phase() {
            FlightPhase::Boost
        } else {
            FlightPhase::Coast
        }
    }

    /// Advance the machine to a new simulated time. Engine cutoff happens
    /// here and only here, so a later mass perturbation cannot re-light
    /// the engine.
    pub fn advance(self, vehicle: &Vehicle, time: f64) -> FlightPhase {
        match self {
            FlightPhase::Boost if vehicle.mass_at(time) <= vehicle.dry_mass => FlightPhase::Coast,
            other => other,
        }
    }

    /// Whether thrust (and any configured lateral force) applies.
    pub fn thrusting(&self) -> bool {
        matches!(self, FlightPhase::Boost)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FlightPhase::Impacted)
    }

    /// Short tag used by the CSV writer and the report table.
    pub fn label(&self) -> &'static str {
        match self {
            FlightPhase::Boost => "BOOST",
            FlightPhase::Coast => "COAST",
            FlightPhase::Impacted => "IMPACT",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleBuilder;

    fn burner() -> Vehicle {
        // Propellant 10_000 kg at 500 kg/s: cutoff at t = 20 s
        VehicleBuilder::new("Burner")
            .initial_mass(30_000.0)
            .dry_mass(20_000.0)
            .burn_rate(500.0)
            .thrust(600_000.0)
            .build()
    }

    #[test]
    fn powered_vehicle_starts_in_boost() {
        assert_eq!(FlightPhase::initial(&burner()), FlightPhase::Boost);
    }

    #[test]
    fn inert_vehicle_skips_boost() {
        let shell = VehicleBuilder::new("Shell").unpowered(1_000.0).build();
        assert_eq!(FlightPhase::initial(&shell), FlightPhase::Coast);
    }

    #[test]
    fn boost_ends_at_propellant_exhaustion() {
        let v = burner();
        assert_eq!(FlightPhase::Boost.advance(&v, 19.9), FlightPhase::Boost);
        assert_eq!(FlightPhase::Boost.advance(&v, 20.0), FlightPhase::Coast);
        assert_eq!(FlightPhase::Boost.advance(&v, 25.0), FlightPhase::Coast);
    }

    #[test]
    fn coast_never_returns_to_boost() {
        let v = burner();
        // Even at a time when propellant would nominally remain
        assert_eq!(FlightPhase::Coast.advance(&v, 1.0), FlightPhase::Coast);
    }

    #[test]
    fn impacted_is_terminal() {
        let v = burner();
        assert_eq!(FlightPhase::Impacted.advance(&v, 0.0), FlightPhase::Impacted);
        assert!(FlightPhase::Impacted.is_terminal());
    }

    #[test]
    fn only_boost_thrusts() {
        assert!(FlightPhase::Boost.thrusting());
        assert!(!FlightPhase::Coast.thrusting());
        assert!(!FlightPhase::Impacted.thrusting());
    }
}
