/// Invalid detector configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BoilerParamsError {
    #[error("boiler {name} must be finite and positive (got {value})")]
    InvalidDimension { name: &'static str, value: f64 },
    #[error("target angle {0} rad is outside (0, 2π)")]
    InvalidTargetAngle(f64),
    #[error("angle range {0} rad is outside [0, π)")]
    InvalidAngleRange(f64),
}

/// Alliance value that is neither blue nor red.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AllianceError {
    #[error("unknown alliance tag {0} (expected 0 = blue, 1 = red)")]
    UnknownTag(u8),
    #[error("unknown alliance name {0:?} (expected \"blue\" or \"red\")")]
    UnknownName(String),
}
