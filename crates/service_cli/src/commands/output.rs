//! Price output rendering

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// One line of price output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    /// Pricing method label
    pub method: String,
    /// Present value
    pub price: f64,
    /// Standard error, for simulated prices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_error: Option<f64>,
    /// Difference to the closed-form price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_analytic: Option<f64>,
}

impl PriceRow {
    /// Row for a deterministic price
    pub fn new(method: impl Into<String>, price: f64) -> Self {
        Self {
            method: method.into(),
            price,
            std_error: None,
            vs_analytic: None,
        }
    }

    /// Attach a standard error
    pub fn with_std_error(mut self, std_error: f64) -> Self {
        self.std_error = Some(std_error);
        self
    }

    /// Attach the difference to a reference price
    pub fn against(mut self, analytic: f64) -> Self {
        self.vs_analytic = Some(self.price - analytic);
        self
    }
}

/// Write price rows as a table or a JSON array
pub fn write_prices<W: Write>(rows: &[PriceRow], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "┌──────────────────────────────┬──────────────┬──────────────┬──────────────┐")?;
            writeln!(out, "│ Method                       │ Price        │ Std Error    │ vs Analytic  │")?;
            writeln!(out, "├──────────────────────────────┼──────────────┼──────────────┼──────────────┤")?;
            for row in rows {
                writeln!(
                    out,
                    "│ {:<28} │ {:>12.6} │ {:>12} │ {:>12} │",
                    row.method,
                    row.price,
                    optional(row.std_error),
                    optional(row.vs_analytic),
                )?;
            }
            writeln!(out, "└──────────────────────────────┴──────────────┴──────────────┴──────────────┘")?;
        }
    }
    Ok(())
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.6}", v))
}
