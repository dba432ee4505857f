use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which barcode layout a scan was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// 13 digits, grams in positions 8-12.
    Ean13,
    /// GS1-128 application identifier 310x, kilograms with x decimals.
    Gs1Weight310,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Ean13 => write!(f, "EAN-13"),
            Encoding::Gs1Weight310 => write!(f, "GS1-128 AI 310x"),
        }
    }
}

/// A decoded scan. Weight is in kilograms and never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEntry {
    pub code: String,
    pub weight: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A scan as held by a session: the decoded value plus the identity it was
/// given when appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEntry {
    pub id: EntryId,
    #[serde(flatten)]
    pub scan: ScanEntry,
    pub scanned_at: DateTime<Utc>,
}

impl SessionEntry {
    pub fn new(scan: ScanEntry) -> Self {
        Self {
            id: EntryId::new(),
            scan,
            scanned_at: Utc::now(),
        }
    }
}
