use crate::error::ApparatusError;

/// Common Result type alias
pub type ApparatusResult<T> = Result<T, ApparatusError>;
