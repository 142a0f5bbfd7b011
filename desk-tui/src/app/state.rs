//! Application state
//!
//! The single source of truth for the TUI. State transitions happen
//! through the reducer (see `reducer.rs`); rendering reads snapshots.

use std::time::Duration;

use libdeskcalc::{Config, ExpressionBuilder};

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Calculator state
    pub calc: CalcState,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,
}

/// Calculator screen state
#[derive(Debug, Clone)]
pub struct CalcState {
    /// The expression state machine
    pub builder: ExpressionBuilder,

    /// Text of the last evaluation failure, shown in the status bar
    /// alongside the "Error" sentinel
    pub last_error: Option<String>,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            calc: CalcState::default(),
            status: StatusBarState::default(),
            config: UiConfig::default(),
        }
    }
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            builder: ExpressionBuilder::new(),
            last_error: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("DESK_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("DESK_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state from a loaded configuration.
    ///
    /// Environment variables (`NO_COLOR`, `DESK_TUI_TICK_MS`) take
    /// precedence over the config file.
    pub fn from_config(config: &Config) -> Self {
        let env_defaults = UiConfig::default();

        Self {
            calc: CalcState {
                builder: ExpressionBuilder::with_error_clear_delay(Duration::from_millis(
                    config.ui.error_clear_ms,
                )),
                last_error: None,
            },
            config: UiConfig {
                colors_enabled: env_defaults.colors_enabled && config.ui.colors,
                tick_rate_ms: if std::env::var("DESK_TUI_TICK_MS").is_ok() {
                    env_defaults.tick_rate_ms
                } else {
                    config.ui.tick_rate_ms
                },
            },
            ..Self::default()
        }
    }

    /// Is the "Error" sentinel currently displayed?
    pub fn in_error(&self) -> bool {
        self.calc.builder.is_error()
    }
}
