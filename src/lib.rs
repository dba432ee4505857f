pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::DialoguerConfirmer, CliConfig, Command};

pub use app::{run_batch, BatchReport, Console};
pub use config::{OnInvalid, OutputFormat, ScanConfig};
pub use crate::core::decoder::{decode, decode_with_encoding};
pub use crate::core::display::{render_table, Summary, WeightFormat};
pub use crate::core::session::{ClearOutcome, RemoveOutcome, Session, SessionManager};
pub use domain::model::{EntryId, Encoding, ScanEntry, SessionEntry};
pub use domain::ports::{AutoConfirm, Confirmer};
pub use utils::error::{Result, ScanError};
