/// Affinity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score assigned to a catalog role with no entry in the user's results.
pub const MISSING_SCORE: f64 = 0.0;

/// Lower bound of the Low-High alignment scale.
pub const SCALE_MIN: f64 = 0.0;

/// Upper bound of the Low-High alignment scale.
pub const SCALE_MAX: f64 = 100.0;

/// Maximum accepted length of a user id.
pub const MAX_USER_ID_LEN: usize = 64;

/// Maximum accepted length of a role id.
pub const MAX_ROLE_ID_LEN: usize = 64;
