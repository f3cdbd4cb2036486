// ---------------------------------------------------------------------------
// Vehicle definition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub name: String,
    pub initial_mass: f64, // kg, structure + propellant at ignition
    pub dry_mass: f64,     // kg, mass floor once propellant is spent
    pub burn_rate: f64,    // kg/s, propellant consumption while thrusting
    pub thrust: f64,       // N, constant magnitude during the burn
    pub launch_angle: f64, // rad from vertical (0 = straight up)
    pub cd: f64,           // drag coefficient (dimensionless)
    pub area: f64,         // aerodynamic reference area, m^2
}

impl Vehicle {
    /// Mass at elapsed time t: linear depletion, floored at dry mass.
    pub fn mass_at(&self, t: f64) -> f64 {
        (self.initial_mass - self.burn_rate * t.max(0.0)).max(self.dry_mass)
    }

    /// Propellant loaded at ignition.
    pub fn propellant_mass(&self) -> f64 {
        self.initial_mass - self.dry_mass
    }

    /// Time at which the propellant runs out. Infinite for a vehicle that
    /// burns nothing per second.
    pub fn burn_time(&self) -> f64 {
        if self.burn_rate > 0.0 {
            self.propellant_mass() / self.burn_rate
        } else {
            f64::INFINITY
        }
    }

    /// Whether this vehicle has a powered ascent at all.
    pub fn has_thrust_phase(&self) -> bool {
        self.thrust > 0.0 && self.propellant_mass() > 0.0
    }

    /// Thrust-to-weight ratio at ignition, for a given surface gravity.
    pub fn twr(&self, g: f64) -> f64 {
        self.thrust / (self.initial_mass * g)
    }
}

// ---------------------------------------------------------------------------
// Vehicle builder
// ---------------------------------------------------------------------------

pub struct VehicleBuilder {
    name: String,
    initial_mass: f64,
    dry_mass: f64,
    burn_rate: f64,
    thrust: f64,
    launch_angle: f64,
    cd: f64,
    area: f64,
}

impl VehicleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_mass: 1_000.0,
            dry_mass: 200.0,
            burn_rate: 10.0,
            thrust: 20_000.0,
            launch_angle: 0.0,
            cd: 0.5,
            area: 1.0,
        }
    }

    pub fn initial_mass(mut self, v: f64) -> Self { self.initial_mass = v; self }
    pub fn dry_mass(mut self, v: f64) -> Self { self.dry_mass = v; self }
    pub fn burn_rate(mut self, v: f64) -> Self { self.burn_rate = v; self }
    pub fn thrust(mut self, v: f64) -> Self { self.thrust = v; self }
    pub fn launch_angle(mut self, v: f64) -> Self { self.launch_angle = v; self }
    pub fn cd(mut self, v: f64) -> Self { self.cd = v; self }
    pub fn area(mut self, v: f64) -> Self { self.area = v; self }

    /// Inert projectile: no thrust, no propellant, constant mass.
    pub fn unpowered(mut self, mass: f64) -> Self {
        self.initial_mass = mass;
        self.dry_mass = mass;
        self.burn_rate = 0.0;
        self.thrust = 0.0;
        self
    }

    pub fn build(self) -> Vehicle {
        Vehicle {
            name: self.name,
            initial_mass: self.initial_mass,
            dry_mass: self.dry_mass,
            burn_rate: self.burn_rate,
            thrust: self.thrust,
            launch_angle: self.launch_angle,
            cd: self.cd,
            area: self.area,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
