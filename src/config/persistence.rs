//! Persistence configuration

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state (native only)
    pub state_path: &'static str,
    /// Storage key holding the dark/light choice
    pub theme_key: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".states.json",
        theme_key: "dark_mode",
    },
};
