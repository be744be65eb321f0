//! # ColdLoad CLI
//!
//! Command-line front end for the load engine. Reads a facility form as
//! JSON, prints a capacity summary followed by the full JSON result, and
//! optionally saves the result to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use coldload_core::calculations::LoadResult;
use coldload_core::constants::formula;
use coldload_core::file_io::{load_form, save_result};
use coldload_core::loads::LoadComponent;
use coldload_core::materials::products;
use coldload_core::profile::{FacilityProfile, FacilityType};

#[derive(Parser, Debug)]
#[command(author, version, about = "Refrigeration load estimates for cold rooms and freezers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the load for a facility form (JSON).
    Compute {
        /// Path to the form file.
        input: PathBuf,
        /// Reject out-of-range or unknown inputs instead of defaulting them.
        #[arg(long)]
        strict: bool,
        /// Print only the JSON result.
        #[arg(long)]
        json_only: bool,
        /// Save the result (with version and timestamp) to this path.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List the product reference table.
    Products,
    /// List the load formulas.
    Formulas,
    /// Show the constants and active components of a facility type.
    Profile {
        /// cold-room, freezer or blast-freezer
        facility: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Compute {
            input,
            strict,
            json_only,
            output,
        } => handle_compute(&input, strict, json_only, output.as_deref()),
        Command::Products => handle_products(),
        Command::Formulas => {
            for (label, expr) in formula::ALL {
                println!("{:<34} {}", label, expr);
            }
            Ok(())
        }
        Command::Profile { facility } => handle_profile(&facility),
    }
}

fn handle_compute(input: &Path, strict: bool, json_only: bool, output: Option<&Path>) -> Result<()> {
    let form = load_form(input).with_context(|| format!("failed to read form from {}", input.display()))?;

    let result = if strict {
        form.compute_validated()
            .with_context(|| format!("invalid input in {}", input.display()))?
    } else {
        form.compute()
    };

    if !json_only {
        print_summary(&result);
        println!();
    }
    let json = serde_json::to_string_pretty(&result).context("failed to serialize result")?;
    println!("{}", json);

    if let Some(path) = output {
        save_result(&result, path).with_context(|| format!("failed to save result to {}", path.display()))?;
        info!(path = %path.display(), "result saved");
    }
    Ok(())
}

fn print_summary(result: &LoadResult) {
    println!("═══════════════════════════════════════");
    println!("  {} LOAD SUMMARY", result.facility.display_name().to_uppercase());
    println!("═══════════════════════════════════════");
    println!();
    println!("Room:");
    println!(
        "  {:.2} x {:.2} x {:.2} m ({:.1} m³)",
        result.room.length_m, result.room.width_m, result.room.height_m, result.volume
    );
    println!(
        "  {:.1} °C outside, {:.1} °C inside (ΔT {:.1} K)",
        result.conditions.external_temp_c, result.conditions.internal_temp_c, result.temperature_difference
    );
    println!("  Product: {} ({:.0} kg)", result.product.name, result.product.mass_kg);
    println!();
    println!("Loads (kW):");
    for component in LoadComponent::ALL {
        if let Some(value) = result.breakdown.category(component) {
            println!("  {:<16} {:>10.3}", component.display_name(), value);
        }
    }
    println!("  {:<16} {:>10.3}", "Subtotal", result.total_before_safety);
    println!(
        "  {:<16} {:>10.3}",
        format!("Safety ({:.0}%)", result.safety_percentage),
        result.safety_factor_load
    );
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  CAPACITY: {:.2} kW = {:.2} TR = {:.0} BTU/h",
        result.final_load, result.total_tr, result.total_btu
    );
    println!("═══════════════════════════════════════");
    println!("  SHR {:.2}", result.load_summary.shr);
    match result.air_qty_required_cfm {
        Some(cfm) => println!("  Required airflow {:.0} CFM", cfm),
        None => println!("  Required airflow undefined (zero temperature difference)"),
    }
    if let Some(kj) = result.load_kj_per_batch {
        println!("  Energy per batch {:.0} kJ", kj);
    }
}

fn handle_products() -> Result<()> {
    println!(
        "{:<20} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Product", "Cp>", "Cp<", "Latent", "Tf", "Density"
    );
    for p in products::all() {
        println!(
            "{:<20} {:>8.2} {:>8.2} {:>8.0} {:>8.1} {:>8.0}",
            p.name, p.cp_above, p.cp_below, p.latent_heat, p.freezing_point, p.density
        );
    }
    Ok(())
}

fn handle_profile(facility: &str) -> Result<()> {
    let facility = FacilityType::from_str_flexible(facility).context("unknown facility type")?;
    let profile = FacilityProfile::for_facility(facility);
    let json = serde_json::to_string_pretty(&profile).context("failed to serialize profile")?;
    println!("{}", json);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
