use clap::{Parser, Subcommand, ValueEnum};
use em_diagram::config::load_yaml;
use em_diagram::{Baseline, BaselineConfig, DiagramResult, Sounding};
use em_thermo::{
    calc_theta_e, calc_theta_es, dry_adiabatic_line, moist_adiabatic_line,
    saturation_mixing_ratio_line,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "em-cli")]
#[command(about = "Emagram CLI - thermodynamic diagram curves and soundings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Equivalent potential temperature [K]
    ThetaE {
        /// Pressure [hPa]
        p_hpa: f64,
        /// Temperature [degC]
        #[arg(allow_negative_numbers = true)]
        t_c: f64,
        /// Dewpoint [degC]
        #[arg(allow_negative_numbers = true)]
        td_c: f64,
    },
    /// Saturation equivalent potential temperature [K]
    ThetaEs {
        /// Pressure [hPa]
        p_hpa: f64,
        /// Temperature [degC]
        #[arg(allow_negative_numbers = true)]
        t_c: f64,
    },
    /// Print a single reference curve as JSON
    Line {
        /// Curve family
        #[arg(value_enum)]
        kind: LineKind,
        /// Pressure levels [hPa], comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        pressures: Vec<f64>,
        /// Start temperature [degC] (dry, moist) or mixing ratio [kg/kg] (mixing)
        #[arg(long, allow_negative_numbers = true)]
        start: f64,
    },
    /// Generate the diagram baseline JSON
    Baseline {
        /// Baseline config YAML (defaults when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output JSON path
        #[arg(short, long, default_value = "baseline.json")]
        output: PathBuf,
    },
    /// Convert a saved University of Wyoming listing to JSON
    Sounding {
        /// Listing text or HTML page
        listing: PathBuf,
        #[arg(long)]
        station: u32,
        #[arg(long)]
        year: u16,
        #[arg(long)]
        month: u8,
        #[arg(long)]
        day: u8,
        #[arg(long)]
        hour: u8,
        /// Output directory
        #[arg(short, long, default_value = "data")]
        output_dir: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LineKind {
    Dry,
    Moist,
    Mixing,
}

fn main() -> DiagramResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ThetaE { p_hpa, t_c, td_c } => {
            println!("{:.2}", calc_theta_e(p_hpa, t_c, td_c));
            Ok(())
        }
        Commands::ThetaEs { p_hpa, t_c } => {
            println!("{:.2}", calc_theta_es(p_hpa, t_c));
            Ok(())
        }
        Commands::Line {
            kind,
            pressures,
            start,
        } => cmd_line(kind, &pressures, start),
        Commands::Baseline { config, output } => cmd_baseline(config.as_deref(), &output),
        Commands::Sounding {
            listing,
            station,
            year,
            month,
            day,
            hour,
            output_dir,
        } => cmd_sounding(&listing, station, year, month, day, hour, &output_dir),
    }
}

fn cmd_line(kind: LineKind, pressures: &[f64], start: f64) -> DiagramResult<()> {
    let curve = match kind {
        LineKind::Dry => dry_adiabatic_line(pressures, start),
        LineKind::Moist => moist_adiabatic_line(pressures, start),
        LineKind::Mixing => saturation_mixing_ratio_line(pressures, start),
    };
    println!("{}", serde_json::to_string_pretty(&curve)?);
    Ok(())
}

fn cmd_baseline(config_path: Option<&Path>, output: &Path) -> DiagramResult<()> {
    let config = match config_path {
        Some(path) => {
            println!("Loading baseline config: {}", path.display());
            load_yaml(path)?
        }
        None => BaselineConfig::default(),
    };

    let baseline = Baseline::generate(&config)?;
    baseline.save_json(output)?;
    println!(
        "✓ Wrote {} dry, {} moist, {} mixing ratio lines to {}",
        baseline.dryline.len(),
        baseline.moistline.len(),
        baseline.mixingratioline.len(),
        output.display()
    );
    Ok(())
}

fn cmd_sounding(
    listing: &Path,
    station: u32,
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    output_dir: &Path,
) -> DiagramResult<()> {
    let text = std::fs::read_to_string(listing)?;
    let sounding = match Sounding::parse_listing(station, year, month, day, hour, &text) {
        Ok(sounding) => sounding,
        Err(err) => {
            tracing::error!(station, %err, "failed to read sounding listing");
            return Err(err);
        }
    };

    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(sounding.file_name());
    sounding.save_json(&path)?;
    println!("✓ Wrote {} levels to {}", sounding.data.len(), path.display());
    Ok(())
}
