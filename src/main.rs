use ballistic_sim::io::json::FlightSummary;
use ballistic_sim::scenario::presets;
use ballistic_sim::simulate;

fn main() {
    let scenario = presets::surface_to_surface();

    let flight = match simulate(&scenario) {
        Ok(flight) => flight,
        Err(e) => {
            eprintln!("invalid scenario: {e}");
            std::process::exit(1);
        }
    };
    let summary = FlightSummary::from_flight(&flight, &scenario);

    let vehicle = &scenario.vehicle;
    let g_surface = scenario.gravity.accel_at_altitude(0.0);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  BALLISTIC FLIGHT SIMULATION — {}", scenario.name);
    println!("====================================================================");
    println!();
    println!("  Vehicle Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Initial mass:  {:>9.0} kg    Dry mass:     {:>9.0} kg",
        vehicle.initial_mass, vehicle.dry_mass
    );
    println!(
        "  Thrust:        {:>9.0} N     TWR:          {:>9.2}",
        vehicle.thrust,
        vehicle.twr(g_surface)
    );
    println!(
        "  Burn rate:     {:>9.0} kg/s  Burn time:    {:>9.1} s",
        vehicle.burn_rate,
        vehicle.burn_time()
    );
    println!(
        "  Launch angle:  {:>9.1} deg   Cd * A:       {:>9.3} m^2",
        vehicle.launch_angle.to_degrees(),
        vehicle.cd * vehicle.area
    );
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    if let Some(burnout) = summary.burnout_time {
        println!("  BURNOUT   t={:>6.1}s", burnout);
    }
    println!(
        "  APOGEE    t={:>6.1}s   alt={:>9.0}m",
        summary.apogee_time, summary.apogee_m
    );
    println!(
        "  {}   t={:>6.1}s   vel={:>7.1}m/s",
        match flight.outcome {
            ballistic_sim::Outcome::Impacted => "IMPACT ",
            ballistic_sim::Outcome::MaxTimeExceeded => "TIMEOUT",
            ballistic_sim::Outcome::LaunchFailure => "NO LIFT",
        },
        summary.flight_time,
        summary.impact_speed
    );
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Max altitude:  {:>9.0} m   ({:.2} km)",
        summary.apogee_m,
        summary.apogee_m / 1000.0
    );
    println!("  Max speed:     {:>9.1} m/s", summary.max_speed);
    println!(
        "  Downrange:     {:>9.0} m   ({:.2} km)",
        summary.downrange_m,
        summary.downrange_m / 1000.0
    );
    if let Some(target) = scenario.target_distance {
        println!(
            "  Target:        {:>9.0} m   {}",
            target,
            if flight.target_reached {
                "REACHED"
            } else {
                "NOT REACHED"
            }
        );
    }
    println!("  Flight time:   {:>9.1} s", summary.flight_time);
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>9}  {:>10}  {:>9}  {:>9}  {:>6}",
        "t (s)", "alt (m)", "range (m)", "vel (m/s)", "mass (kg)", "phase"
    );
    println!("  {}", "─".repeat(62));

    let launch = scenario.launch_position();
    let sample_interval = (flight.samples.len() / 30).max(1);
    for (i, s) in flight.samples.iter().enumerate() {
        if i % sample_interval != 0 && i != flight.samples.len() - 1 {
            continue;
        }
        println!(
            "  {:>7.1}  {:>9.1}  {:>10.1}  {:>9.1}  {:>9.0}  {:>6}",
            s.time,
            scenario.geometry.altitude(&s.pos),
            scenario.geometry.downrange(&launch, &s.pos),
            s.speed(),
            s.mass,
            s.phase.label()
        );
    }

    println!();
    println!(
        "  Simulation: {} steps, dt={} s",
        flight.samples.len(),
        scenario.dt
    );
    println!("====================================================================");
    println!();
}
