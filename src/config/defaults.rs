//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default log filter directive
pub const DEFAULT_LEVEL: &str = "info";

/// Log filter directive used with --verbose
pub const DEFAULT_VERBOSE_LEVEL: &str = "debug";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "quantumnexus";
