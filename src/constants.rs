//! Application-wide constants
//!
//! Single source of truth for the magic strings used by the settings panel.

/// Settings file location
pub mod config {
    /// Directory created under the platform config dir
    pub const APP_DIR: &str = "titlebar-settings";

    /// Settings file name inside `APP_DIR`
    pub const FILENAME: &str = "display.json";

    /// Environment variable overriding the settings file path
    pub const PATH_ENV: &str = "TITLEBAR_SETTINGS_PATH";
}

/// Logging setup
pub mod logging {
    /// Environment variable selecting the log level
    pub const LEVEL_ENV: &str = "LOG_LEVEL";

    pub const DEFAULT_LEVEL: &str = "info";
}

/// Built-in titlebar elements, in default display order
pub mod elements {
    pub const MEMORY: &str = "memory";
    pub const SERVICE_STATUS: &str = "serviceStatus";
    pub const GEMINI_REINJECT: &str = "geminiReinject";
    pub const PROVIDER_TOAST: &str = "providerToast";

    /// (id, human label) pairs
    pub const LABELS: [(&str, &str); 4] = [
        (MEMORY, "Memory"),
        (SERVICE_STATUS, "Status"),
        (GEMINI_REINJECT, "Reinject"),
        (PROVIDER_TOAST, "Toast"),
    ];
}

/// Save worker
pub mod persistence {
    /// Name of the background thread that writes settings
    pub const WORKER_THREAD_NAME: &str = "settings-save";
}
