use crate::core::session::Session;
use crate::domain::ports::ConfigProvider;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt::Write;

pub const DEFAULT_UNIT: &str = "Kgs";
pub const DEFAULT_DECIMALS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightFormat {
    pub unit: String,
    pub decimals: u32,
}

impl Default for WeightFormat {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT.to_string(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl WeightFormat {
    pub fn new(unit: impl Into<String>, decimals: u32) -> Self {
        Self {
            unit: unit.into(),
            decimals,
        }
    }

    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Self {
        Self::new(provider.unit(), provider.decimals())
    }

    /// Fixed decimals, halves rounded away from zero, e.g. `1.250 Kgs`.
    pub fn format(&self, weight: Decimal) -> String {
        format!("{} {}", self.format_number(weight), self.unit)
    }

    pub fn format_number(&self, weight: Decimal) -> String {
        let rounded =
            weight.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.*}", self.decimals as usize, rounded)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub row: usize,
    pub id: String,
    pub code: String,
    pub weight: Decimal,
    pub display_weight: String,
}

/// Serializable snapshot of a session for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub started_at: DateTime<Utc>,
    pub count: usize,
    pub rows: Vec<SummaryRow>,
    pub total: Decimal,
    pub display_total: String,
    pub unit: String,
}

impl Summary {
    pub fn from_session(session: &Session, format: &WeightFormat) -> Self {
        let rows = session
            .rows()
            .map(|(row, entry)| SummaryRow {
                row,
                id: entry.id.to_string(),
                code: entry.scan.code.clone(),
                weight: entry.scan.weight,
                display_weight: format.format_number(entry.scan.weight),
            })
            .collect();
        let total = session.total();

        Self {
            started_at: session.started_at(),
            count: session.len(),
            rows,
            total,
            display_total: format.format_number(total),
            unit: format.unit.clone(),
        }
    }
}

/// Renders the numbered table with a TOTAL footer.
pub fn render_table(session: &Session, format: &WeightFormat) -> String {
    let num_header = "Num";
    let code_header = "Code";
    let weight_header = "Weight";

    let weights: Vec<String> = session
        .entries()
        .iter()
        .map(|e| format.format(e.scan.weight))
        .collect();
    let total = format.format(session.total());

    let num_width = session.len().to_string().len().max(num_header.len());
    let code_width = session
        .entries()
        .iter()
        .map(|e| e.scan.code.chars().count())
        .chain(std::iter::once(code_header.len()))
        .max()
        .unwrap_or(code_header.len());
    let weight_width = weights
        .iter()
        .map(|w| w.chars().count())
        .chain([weight_header.len(), total.chars().count()])
        .max()
        .unwrap_or(weight_header.len());

    let rule = format!(
        "{}-+-{}-+-{}",
        "-".repeat(num_width),
        "-".repeat(code_width),
        "-".repeat(weight_width)
    );

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>nw$} | {:<cw$} | {:>ww$}",
        num_header,
        code_header,
        weight_header,
        nw = num_width,
        cw = code_width,
        ww = weight_width
    );
    let _ = writeln!(out, "{}", rule);

    for ((row, entry), weight) in session.rows().zip(&weights) {
        let _ = writeln!(
            out,
            "{:>nw$} | {:<cw$} | {:>ww$}",
            row,
            entry.scan.code,
            weight,
            nw = num_width,
            cw = code_width,
            ww = weight_width
        );
    }

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "{:<lw$} | {:>ww$}",
        "TOTAL",
        total,
        lw = num_width + 3 + code_width,
        ww = weight_width
    );
    out
}
