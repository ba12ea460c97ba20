//! QQ command implementation
//!
//! Simulates the payoff sample and hands it to [`render_qq`], which compares
//! it against the standard normal. The renderer is only reached when the
//! simulation succeeded.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use pricer_pricing::diagnostics::QqPlot;
use serde::Serialize;
use tracing::info;

use super::simulate::simulate_sample;
use super::{ContractArgs, SimulationArgs};
use crate::config::PricerConfig;
use crate::Result;

/// QQ output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum QqFormat {
    /// Aligned text columns with a summary header
    #[default]
    Table,
    /// `theoretical,sample,reference` records
    Csv,
    /// Points, reference line and correlation as one JSON document
    Json,
}

/// Arguments of the `qq` command
#[derive(Debug, Clone, Default, Args)]
pub struct QqArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = QqFormat::Table)]
    pub format: QqFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ReferenceLine {
    intercept: f64,
    slope: f64,
}

#[derive(Serialize)]
struct QqDocument<'a> {
    len: usize,
    reference_line: ReferenceLine,
    correlation: f64,
    points: &'a [pricer_pricing::diagnostics::QqPoint],
}

/// Render a normal QQ plot of `sample`
///
/// The reference line is the standardised line: intercept equal to the
/// sample mean and slope equal to its standard deviation.
pub fn render_qq<W: Write>(sample: &[f64], format: QqFormat, writer: &mut W) -> Result<()> {
    let plot = QqPlot::from_sample(sample)?;
    write_plot(&plot, format, writer)
}

fn write_plot<W: Write>(plot: &QqPlot, format: QqFormat, writer: &mut W) -> Result<()> {
    let (intercept, slope) = plot.reference_line();

    match format {
        QqFormat::Table => {
            writeln!(writer, "Normal QQ plot: {} points", plot.len())?;
            writeln!(
                writer,
                "Reference line: sample = {:.6} + {:.6} * theoretical",
                intercept, slope
            )?;
            writeln!(writer, "Correlation: {:.6}", plot.correlation())?;
            writeln!(writer)?;
            writeln!(writer, "{:>14}  {:>14}  {:>14}", "theoretical", "sample", "reference")?;
            for point in plot.points() {
                writeln!(
                    writer,
                    "{:>14.6}  {:>14.6}  {:>14.6}",
                    point.theoretical,
                    point.sample,
                    plot.reference_value(point.theoretical)
                )?;
            }
        }
        QqFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut *writer);
            csv_writer.write_record(["theoretical", "sample", "reference"])?;
            for point in plot.points() {
                csv_writer.write_record([
                    point.theoretical.to_string(),
                    point.sample.to_string(),
                    plot.reference_value(point.theoretical).to_string(),
                ])?;
            }
            csv_writer.flush()?;
        }
        QqFormat::Json => {
            let document = QqDocument {
                len: plot.len(),
                reference_line: ReferenceLine { intercept, slope },
                correlation: plot.correlation(),
                points: plot.points(),
            };
            serde_json::to_writer_pretty(&mut *writer, &document)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Run the qq command
pub fn run<W: Write>(args: &QqArgs, mut config: PricerConfig, out: &mut W) -> Result<()> {
    let sample = simulate_sample(&args.contract, &args.simulation, &mut config)?;

    match &args.output {
        Some(path) => {
            // The file is only created once the plot exists.
            let plot = QqPlot::from_sample(sample.as_slice())?;
            let mut file = BufWriter::new(File::create(path)?);
            write_plot(&plot, args.format, &mut file)?;
            file.flush()?;
            info!(path = %path.display(), format = ?args.format, "QQ data written");
        }
        None => render_qq(sample.as_slice(), args.format, out)?,
    }
    Ok(())
}
