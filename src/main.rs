use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rdwgs::format::Style;
use rdwgs::{rd, report, samples, wgs};

#[derive(Parser, Debug)]
#[command(name = "rdwgs")]
#[command(version, about = "Convert Dutch RD coordinates to WGS84 and back")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// RD (x, y) in metres to WGS84 latitude/longitude
    Rd2wgs {
        /// RD x (easting) [m]
        #[arg(default_value_t = 195994.0, allow_negative_numbers = true)]
        x: f64,

        /// RD y (northing) [m]
        #[arg(default_value_t = 447683.0, allow_negative_numbers = true)]
        y: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Raw)]
        format: OutputFormat,
    },

    /// WGS84 latitude/longitude in degrees to RD (x, y)
    Wgs2rd {
        /// Latitude [deg]
        #[arg(allow_negative_numbers = true)]
        phi: f64,

        /// Longitude [deg]
        #[arg(allow_negative_numbers = true)]
        labda: f64,
    },

    /// Convert the validity-box edge samples
    Table {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = TableFormat::Dmm)]
        format: TableFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One full-precision value per line
    Raw,
    Ddd,
    Dmm,
    Dms,
}

/// Table rows always carry one formatted coordinate, so there is no `raw`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TableFormat {
    Ddd,
    Dmm,
    Dms,
}

impl From<TableFormat> for Style {
    fn from(f: TableFormat) -> Self {
        match f {
            TableFormat::Ddd => Style::Ddd,
            TableFormat::Dmm => Style::Dmm,
            TableFormat::Dms => Style::Dms,
        }
    }
}

impl OutputFormat {
    /// `None` for `raw`, which prints unformatted values.
    fn style(self) -> Option<Style> {
        match self {
            OutputFormat::Raw => None,
            OutputFormat::Ddd => Some(Style::Ddd),
            OutputFormat::Dmm => Some(Style::Dmm),
            OutputFormat::Dms => Some(Style::Dms),
        }
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Results go to stdout, diagnostics to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Rd2wgs { x, y, format } => {
            let g = rd::convert(x, y);
            if !g.is_valid() {
                tracing::warn!(
                    x,
                    y,
                    error_code = g.error_code,
                    x_out_of_range = g.x_out_of_range(),
                    y_out_of_range = g.y_out_of_range(),
                    "RD coordinate outside the validity box, result is approximate"
                );
            }
            let lines = match format.style() {
                None => report::rd_lines(x, y, &g),
                Some(style) => report::rd_lines_styled(x, y, &g, style),
            };
            print_lines(&lines);
        }
        Command::Wgs2rd { phi, labda } => {
            let r = wgs::convert(phi, labda);
            if !r.is_valid() {
                tracing::warn!(
                    phi,
                    labda,
                    error_code = r.error_code,
                    "WGS84 coordinate outside the validity box, result is approximate"
                );
            }
            print_lines(&report::wgs_lines(phi, labda, &r));
        }
        Command::Table { output, format } => {
            let lines = samples::table_lines(format.into());
            match output {
                Some(path) => {
                    let mut out = BufWriter::new(File::create(&path)?);
                    for line in &lines {
                        writeln!(out, "{line}")?;
                    }
                    out.flush()?;
                    tracing::info!(
                        path = %path.display(),
                        rows = lines.len(),
                        "wrote sample table"
                    );
                }
                None => print_lines(&lines),
            }
        }
    }

    Ok(())
}
