use crate::domain::model::{EntryId, ScanEntry, SessionEntry};
use crate::domain::ports::Confirmer;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

pub const DEFAULT_CONFIRM_MESSAGE: &str = "Are you sure?";

/// Ordered list of scans for one operator run. Insertion order is display order.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    started_at: DateTime<Utc>,
    entries: Vec<SessionEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            entries: Vec::new(),
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn entries(&self) -> &[SessionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their 1-based row number.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &SessionEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn get(&self, id: EntryId) -> Option<&SessionEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn row(&self, row: usize) -> Option<&SessionEntry> {
        row.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Sum of all weights, recomputed on each call.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|e| e.scan.weight).sum()
    }

    fn push(&mut self, scan: ScanEntry) -> EntryId {
        let entry = SessionEntry::new(scan);
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    fn take(&mut self, id: EntryId) -> Option<SessionEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    fn drain(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(SessionEntry),
    NotFound,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared { removed: usize },
    Declined,
}

/// Owns a [`Session`] and gates removals behind a [`Confirmer`].
pub struct SessionManager<C: Confirmer> {
    session: Session,
    confirmer: C,
    confirm_message: String,
}

impl<C: Confirmer> SessionManager<C> {
    pub fn new(confirmer: C) -> Self {
        Self::with_session(Session::new(), confirmer)
    }

    pub fn with_session(session: Session, confirmer: C) -> Self {
        Self {
            session,
            confirmer,
            confirm_message: DEFAULT_CONFIRM_MESSAGE.to_string(),
        }
    }

    pub fn with_confirm_message(mut self, message: impl Into<String>) -> Self {
        self.confirm_message = message.into();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn append(&mut self, scan: ScanEntry) -> EntryId {
        tracing::info!(code = %scan.code, weight = %scan.weight, "scan added");
        self.session.push(scan)
    }

    /// Asks for confirmation, then removes the entry with this id.
    pub fn remove(&mut self, id: EntryId) -> RemoveOutcome {
        if !self.confirmer.confirm(&self.confirm_message) {
            tracing::debug!(%id, "removal declined");
            return RemoveOutcome::Declined;
        }

        match self.session.take(id) {
            Some(entry) => {
                tracing::info!(code = %entry.scan.code, weight = %entry.scan.weight, "scan removed");
                RemoveOutcome::Removed(entry)
            }
            None => {
                tracing::debug!(%id, "removal requested for unknown entry");
                RemoveOutcome::NotFound
            }
        }
    }

    /// Removes by 1-based row number. Rows that don't exist are reported
    /// without prompting.
    pub fn remove_row(&mut self, row: usize) -> RemoveOutcome {
        match self.session.row(row).map(|e| e.id) {
            Some(id) => self.remove(id),
            None => RemoveOutcome::NotFound,
        }
    }

    pub fn clear(&mut self) -> ClearOutcome {
        if !self.confirmer.confirm(&self.confirm_message) {
            tracing::debug!("clear declined");
            return ClearOutcome::Declined;
        }

        let removed = self.session.drain();
        tracing::info!(removed, "session cleared");
        ClearOutcome::Cleared { removed }
    }

    pub fn total(&self) -> Decimal {
        self.session.total()
    }
}
