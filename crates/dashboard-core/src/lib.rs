//! Client-side state concerns of the ESG dashboard, modeled explicitly:
//! a settings store with subscription-based change notification, and the
//! upload status polling loop as a bounded state machine.

pub mod settings;
pub mod upload;

pub use settings::{
    FileStorage, MemoryStorage, Settings, SettingsError, SettingsStorage, SettingsStore, Theme,
};
pub use upload::{poll_until_terminal, PollPolicy, PollResult, PollStep, UploadPoller};
