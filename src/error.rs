use thiserror::Error;

/// Configuration faults caught before any stepping happens.
///
/// Physical verdicts (launch failure, time budget exhaustion) are not
/// errors; they are carried in the flight outcome.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("time step must be positive, got {0} s")]
    NonPositiveTimeStep(f64),

    #[error("max simulation time must be positive, got {0} s")]
    NonPositiveMaxTime(f64),

    #[error("initial mass must be positive, got {0} kg")]
    NonPositiveMass(f64),

    #[error("dry mass {dry} kg exceeds initial mass {initial} kg")]
    DryMassAboveInitial { dry: f64, initial: f64 },

    #[error("burn rate must be non-negative, got {0} kg/s")]
    NegativeBurnRate(f64),

    #[error("drag is enabled but reference area is {0} m^2")]
    NonPositiveDragArea(f64),

    #[error("spherical geometry requires a launch site")]
    MissingLaunchSite,

    #[error("launch site is {0} m inside the body surface")]
    LaunchSiteInsideBody(f64),

    #[error("powered spherical scenario requires a thrust direction")]
    MissingThrustDirection,
}
