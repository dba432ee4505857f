pub mod decoder;
pub mod display;
pub mod session;

pub use crate::domain::model::{EntryId, Encoding, ScanEntry, SessionEntry};
pub use crate::domain::ports::{AutoConfirm, ConfigProvider, Confirmer};
pub use crate::utils::error::Result;
