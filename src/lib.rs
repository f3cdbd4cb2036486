pub mod dynamics;
pub mod error;
pub mod geometry;
pub mod io;
pub mod physics;
pub mod scenario;
pub mod sim;
pub mod vehicle;

// Commonly used items, re-exported at the crate root
pub use error::ScenarioError;
pub use geometry::Geometry;
pub use physics::aerodynamics::DragAxes;
pub use physics::atmosphere::AtmosphereModel;
pub use physics::gravity::GravityModel;
pub use scenario::{Scenario, ScenarioBuilder};
pub use sim::phase::FlightPhase;
pub use sim::runner::{simulate, Flight, Outcome};
pub use sim::state::{Sample, State, EARTH_RADIUS, G0};
pub use vehicle::{Vehicle, VehicleBuilder};
