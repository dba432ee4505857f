use crate::config::OnInvalid;
use crate::core::decoder;
use crate::core::session::{Session, SessionManager};
use crate::domain::ports::AutoConfirm;
use crate::utils::error::Result;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line: usize,
    pub raw: String,
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub session: Session,
    pub rejected: Vec<RejectedLine>,
}

/// Decodes one scan per line into a fresh session. Blank lines are ignored.
pub fn run_batch<R: BufRead>(input: R, on_invalid: OnInvalid) -> Result<BatchReport> {
    let mut manager = SessionManager::new(AutoConfirm(false));
    let mut rejected = Vec::new();

    for (index, line) in input.split(b'\n').enumerate() {
        let line = line?;
        let decoded = match decoder::scan_text(&line) {
            Ok(raw) if raw.trim().is_empty() => continue,
            Ok(raw) => decoder::decode(raw),
            Err(e) => Err(e),
        };

        match decoded {
            Ok(scan) => {
                manager.append(scan);
            }
            Err(e) => {
                let line_number = index + 1;
                match on_invalid {
                    OnInvalid::Skip => {
                        tracing::warn!(line = line_number, "skipping: {}", e);
                        rejected.push(RejectedLine {
                            line: line_number,
                            raw: e.raw_input().unwrap_or_default().to_string(),
                        });
                    }
                    OnInvalid::Abort => {
                        tracing::error!(line = line_number, "aborting: {}", e);
                        return Err(e);
                    }
                }
            }
        }
    }

    tracing::info!(
        accepted = manager.session().len(),
        rejected = rejected.len(),
        "batch decoded"
    );

    Ok(BatchReport {
        session: manager.into_session(),
        rejected,
    })
}
