pub mod commands;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod keymap;
pub mod notify;
pub mod reset;
pub mod settings;
pub mod step;
pub mod store;
pub mod surface;

pub use commands::{Action, Command};
pub use config::AppConfig;
pub use dispatch::{FontShortcuts, ResetReport, StepReport, SurfaceReport};
pub use error::{Error, Result, StoreError};
pub use notify::{LogNotifier, Notifier};
pub use reset::{resolve_reset, ResetOutcome};
pub use settings::ShortcutsSettings;
pub use step::{compute_step, Direction, StepChange};
pub use store::{ConfigurationService, ConfigurationTarget, JsonSettingsStore, MemoryStore};
pub use surface::{Surface, SurfaceKeys};
