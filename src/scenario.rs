use nalgebra::Vector3;

use crate::error::ScenarioError;
use crate::geometry::Geometry;
use crate::physics::aerodynamics::DragAxes;
use crate::physics::atmosphere::AtmosphereModel;
use crate::physics::gravity::GravityModel;
use crate::vehicle::Vehicle;

// ---------------------------------------------------------------------------
// Scenario: the immutable input bundle for one run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub vehicle: Vehicle,
    pub geometry: Geometry,
    pub gravity: GravityModel,
    pub atmosphere: AtmosphereModel,
    pub drag_axes: DragAxes,
    /// Constant side force (N) along the geometry's lateral axis, applied
    /// while the engine burns. Zero disables it.
    pub lateral_force: f64,
    /// Speed (m/s) along the launch direction at t = 0. Nonzero values
    /// model shots that begin in ballistic flight.
    pub initial_speed: f64,
    /// Inertial thrust/launch direction for the spherical regime. The flat
    /// regime derives the direction from the vehicle's launch angle.
    pub thrust_direction: Option<Vector3<f64>>,
    /// Launch site for the spherical regime (on or above the surface).
    pub launch_site: Option<Vector3<f64>>,
    pub dt: f64,
    pub max_time: f64,
    /// Downrange distance (m) the shot is supposed to cover; the run
    /// records whether it was met. None runs without a target.
    pub target_distance: Option<f64>,
}

impl Scenario {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.dt <= 0.0 {
            return Err(ScenarioError::NonPositiveTimeStep(self.dt));
        }
        if self.max_time <= 0.0 {
            return Err(ScenarioError::NonPositiveMaxTime(self.max_time));
        }
        let v = &self.vehicle;
        if v.initial_mass <= 0.0 {
            return Err(ScenarioError::NonPositiveMass(v.initial_mass));
        }
        if v.dry_mass > v.initial_mass {
            return Err(ScenarioError::DryMassAboveInitial {
                dry: v.dry_mass,
                initial: v.initial_mass,
            });
        }
        if v.burn_rate < 0.0 {
            return Err(ScenarioError::NegativeBurnRate(v.burn_rate));
        }
        if self.drag_axes.any() && v.area <= 0.0 {
            return Err(ScenarioError::NonPositiveDragArea(v.area));
        }
        if let Geometry::Spherical { .. } = self.geometry {
            let site = self.launch_site.ok_or(ScenarioError::MissingLaunchSite)?;
            let depth = -self.geometry.altitude(&site);
            if depth > 0.0 {
                return Err(ScenarioError::LaunchSiteInsideBody(depth));
            }
            if v.has_thrust_phase() && self.thrust_direction.is_none() {
                return Err(ScenarioError::MissingThrustDirection);
            }
        }
        Ok(())
    }

    /// Position at t = 0: the origin on the flat ground plane, the
    /// configured site on the sphere.
    pub fn launch_position(&self) -> Vector3<f64> {
        match self.geometry {
            Geometry::Flat => Vector3::zeros(),
            Geometry::Spherical { .. } => self.launch_site.unwrap_or_else(Vector3::zeros),
        }
    }

    /// Unit launch/thrust direction. Flat: the vehicle's launch angle from
    /// vertical, in the downrange/up plane. Spherical: the configured
    /// inertial direction, falling back to the local radial for unpowered
    /// shots.
    pub fn launch_direction(&self) -> Vector3<f64> {
        match self.geometry {
            Geometry::Flat => {
                let angle = self.vehicle.launch_angle;
                Vector3::new(angle.sin(), 0.0, angle.cos())
            }
            Geometry::Spherical { .. } => match self.thrust_direction {
                Some(dir) if dir.norm() > f64::EPSILON => dir / dir.norm(),
                _ => self.geometry.up(&self.launch_position()),
            },
        }
    }

    /// Velocity at t = 0.
    pub fn initial_velocity(&self) -> Vector3<f64> {
        self.launch_direction() * self.initial_speed
    }
}

// ---------------------------------------------------------------------------
// Scenario builder
// ---------------------------------------------------------------------------

pub struct ScenarioBuilder {
    scenario: Scenario,
}

impl ScenarioBuilder {
    pub fn new(name: impl Into<String>, vehicle: Vehicle) -> Self {
        Self {
            scenario: Scenario {
                name: name.into(),
                vehicle,
                geometry: Geometry::Flat,
                gravity: GravityModel::Constant { g: 9.81 },
                atmosphere: AtmosphereModel::uniform(),
                drag_axes: DragAxes::ALL,
                lateral_force: 0.0,
                initial_speed: 0.0,
                thrust_direction: None,
                launch_site: None,
                dt: 0.1,
                max_time: 600.0,
                target_distance: None,
            },
        }
    }

    pub fn geometry(mut self, v: Geometry) -> Self { self.scenario.geometry = v; self }
    pub fn gravity(mut self, v: GravityModel) -> Self { self.scenario.gravity = v; self }
    pub fn atmosphere(mut self, v: AtmosphereModel) -> Self { self.scenario.atmosphere = v; self }
    pub fn drag_axes(mut self, v: DragAxes) -> Self { self.scenario.drag_axes = v; self }
    pub fn lateral_force(mut self, v: f64) -> Self { self.scenario.lateral_force = v; self }
    pub fn initial_speed(mut self, v: f64) -> Self { self.scenario.initial_speed = v; self }
    pub fn thrust_direction(mut self, v: Vector3<f64>) -> Self { self.scenario.thrust_direction = Some(v); self }
    pub fn launch_site(mut self, v: Vector3<f64>) -> Self { self.scenario.launch_site = Some(v); self }
    pub fn dt(mut self, v: f64) -> Self { self.scenario.dt = v; self }
    pub fn max_time(mut self, v: f64) -> Self { self.scenario.max_time = v; self }
    pub fn target_distance(mut self, v: f64) -> Self { self.scenario.target_distance = Some(v); self }

    pub fn build(self) -> Scenario {
        self.scenario
    }
}

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;
    use crate::geometry::geodetic;
    use crate::sim::state::EARTH_RADIUS;
    use crate::vehicle::VehicleBuilder;

    /// Heavy surface-to-surface shot at a 755 km target: constant gravity,
    /// uniform sea-level air, drag on both active axes.
    pub fn surface_to_surface() -> Scenario {
        let vehicle = VehicleBuilder::new("Heavy-1")
            .initial_mass(110_000.0)
            .dry_mass(23_000.0)
            .burn_rate(500.0)
            .thrust(2_250_000.0)
            .launch_angle(45.0_f64.to_radians())
            .cd(0.5)
            .area(1.0)
            .build();
        ScenarioBuilder::new("Surface to surface", vehicle)
            .target_distance(755_000.0)
            .build()
    }

    /// Lighter vehicle flown high enough that gravity falloff and the
    /// thinning atmosphere both matter: inverse-square gravity,
    /// exponential density.
    pub fn stratospheric() -> Scenario {
        let vehicle = VehicleBuilder::new("Stratos")
            .initial_mass(23_000.0)
            .dry_mass(2_400.0)
            .burn_rate(500.0)
            .thrust(750_000.0)
            .launch_angle(45.0_f64.to_radians())
            .cd(0.5)
            .area(1.0)
            .build();
        ScenarioBuilder::new("Stratospheric", vehicle)
            .gravity(GravityModel::earth(EARTH_RADIUS))
            .atmosphere(AtmosphereModel::exponential())
            .dt(0.05)
            .target_distance(755_000.0)
            .build()
    }

    /// Inert shell fired at 3 km/s, 45 degrees: no thrust phase, no drag,
    /// pure ballistic arc under constant gravity.
    pub fn unpowered() -> Scenario {
        let vehicle = VehicleBuilder::new("Shell")
            .unpowered(1_000.0)
            .launch_angle(45.0_f64.to_radians())
            .build();
        ScenarioBuilder::new("Unpowered shell", vehicle)
            .drag_axes(DragAxes::NONE)
            .initial_speed(3_000.0)
            .target_distance(755_000.0)
            .build()
    }

    /// Heavy booster with a constant 500 kN side force during the burn
    /// (wind shear stand-in); drag neglected.
    pub fn crosswind() -> Scenario {
        let vehicle = VehicleBuilder::new("Booster-3D")
            .initial_mass(500_000.0)
            .dry_mass(100_000.0)
            .burn_rate(2_000.0)
            .thrust(20_000_000.0)
            .launch_angle(45.0_f64.to_radians())
            .build();
        ScenarioBuilder::new("Crosswind boost", vehicle)
            .drag_axes(DragAxes::NONE)
            .lateral_force(500_000.0)
            .max_time(3_600.0)
            .target_distance(755_000.0)
            .build()
    }

    /// Spherical-Earth shot between two geodetic sites, with a constant
    /// side force and a fixed inertial thrust direction; impact is defined
    /// by the planetary radius.
    pub fn intercontinental() -> Scenario {
        let launch = geodetic(50.4501, 30.5234, EARTH_RADIUS);
        let target = geodetic(55.7558, 37.6173, EARTH_RADIUS);
        let angle = 45.0_f64.to_radians();
        let vehicle = VehicleBuilder::new("Booster-3D")
            .initial_mass(500_000.0)
            .dry_mass(100_000.0)
            .burn_rate(2_000.0)
            .thrust(20_000_000.0)
            .build();
        ScenarioBuilder::new("Intercontinental", vehicle)
            .geometry(Geometry::Spherical { radius: EARTH_RADIUS })
            .drag_axes(DragAxes::NONE)
            .lateral_force(500_000.0)
            .launch_site(launch)
            .thrust_direction(Vector3::new(angle.cos(), angle.sin(), 0.0))
            .max_time(7_200.0)
            .target_distance((target - launch).norm())
            .build()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
