mod filesystem;
mod loader;
mod model;
mod presets;
mod validation;

pub use filesystem::{FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use loader::{ConfigLoader, ConfigSource, FileConfigLoader, LoadResult, parse_config};
pub use model::{CONFIG_VERSION, ChartLimitsConfig, LimitsConfig};
pub use presets::{AVAILABLE_PRESETS, DEFAULT_PRESET, load_preset, preset_source};
pub use validation::{apply_overrides, resolve_limits, validate_version};
