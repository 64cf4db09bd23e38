/// Roles counted as `core`, from the top of the ranking.
pub const DEFAULT_CORE_COUNT: usize = 4;
/// Roles counted as `peripheral`, from the bottom of the ranking.
pub const DEFAULT_PERIPHERAL_COUNT: usize = 3;

pub const DEFAULT_CATALOG_PATH: &str = "data/roles.json";
pub const DEFAULT_RESULTS_PATH: &str = "data/results.json";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
