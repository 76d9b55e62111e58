pub mod cancel;
pub mod rate_limiter;
pub mod settings_watcher;

pub use cancel::{cancel_pair, CancelHandle, CancelSignal};
pub use rate_limiter::RateLimiter;
pub use settings_watcher::{FixedSettings, SettingsSource, SettingsWatcher};
