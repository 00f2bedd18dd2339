//! Solver constants and runtime configuration defaults

/// Highest pip count on one half of a double-six domino
pub const MAX_PIPS: u8 = 6;

/// Number of tiles in the double-six pool (7 doubles plus both orders of 21 other pairs)
pub const POOL_SIZE: usize = 49;

/// Grid size used for the default puzzle when no puzzle file is given
pub const DEFAULT_GRID_SIZE: usize = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_SIZE: usize = 64;

// Rendering geometry
/// Side length of one rendered cell in pixels
pub const CELL_PIXELS: u32 = 48;
/// Width of the outline drawn around each domino
pub const TILE_BORDER_PIXELS: u32 = 3;
/// Radius of one rendered pip dot
pub const PIP_RADIUS_PIXELS: u32 = 5;

// Progress display settings
/// Number of visited nodes between spinner refreshes
pub const PROGRESS_REFRESH_NODES: u64 = 4096;
/// Spinner tick interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;

/// Filter applied to log output when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter applied to log output with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "pips_solver=debug";
