use ag_app::{
    AppResult, DesignOptions, DesignService, ReportFormat, ReportOptions, UnitSystem,
    case_service, render_report, report_file_name,
};
use ag_core::Constants;
use ag_design::{Metrics, Sizing, Technology};
use ag_influent::Influent;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "ag-cli")]
#[command(about = "AquaGenius CLI - preliminary WWTP sizing for CAS, IFAS, MBR and MBBR", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size one or more technologies for an influent
    Design {
        #[command(flatten)]
        influent: InfluentArgs,
        /// Technology to size (repeatable); defaults to the case selection or all four
        #[arg(short, long)]
        technology: Vec<String>,
        /// Skip the result cache
        #[arg(long)]
        no_cache: bool,
    },
    /// Export a design report for one technology
    Report {
        #[command(flatten)]
        influent: InfluentArgs,
        /// Technology to report (CAS, IFAS, MBR, MBBR)
        #[arg(short, long)]
        technology: String,
        /// Output format: md, txt, csv or json
        #[arg(short, long, default_value = "md")]
        format: String,
        /// Output file (defaults to <TECH>_report.<ext> in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
        /// Report dimensions in US customary units
        #[arg(long)]
        us_units: bool,
    },
    /// Validate a design case file
    Validate {
        /// Path to the case YAML or JSON file
        case_path: PathBuf,
    },
    /// Print the process constants table
    Constants,
}

/// Influent definition, either inline or from a case file.
#[derive(Args)]
struct InfluentArgs {
    /// Design case file (YAML or JSON); overrides the inline values
    #[arg(long)]
    case: Option<PathBuf>,
    /// Flow magnitude
    #[arg(long, default_value_t = 1.0)]
    flow: f64,
    /// Flow unit: MGD, MLD or m3/day
    #[arg(long, default_value = "MGD")]
    unit: String,
    /// BOD (mg/L)
    #[arg(long, default_value_t = 250.0)]
    bod: f64,
    /// TSS (mg/L)
    #[arg(long, default_value_t = 220.0)]
    tss: f64,
    /// TKN (mg/L)
    #[arg(long, default_value_t = 40.0)]
    tkn: f64,
    /// TP (mg/L)
    #[arg(long, default_value_t = 7.0)]
    tp: f64,
}

impl InfluentArgs {
    /// Influent plus the case's technology selection, if a case was given.
    fn resolve(&self) -> AppResult<(Influent, Option<Vec<Technology>>)> {
        if let Some(path) = &self.case {
            let case = case_service::load_case(path)?;
            let summary = case_service::summarize_case(&case)?;
            return Ok((summary.influent, Some(summary.technologies)));
        }
        let influent = Influent::parse(
            self.flow, &self.unit, self.bod, self.tss, self.tkn, self.tp,
        )?;
        Ok((influent, None))
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Design {
            influent,
            technology,
            no_cache,
        } => cmd_design(&influent, &technology, !no_cache),
        Commands::Report {
            influent,
            technology,
            format,
            output,
            stdout,
            us_units,
        } => cmd_report(
            &influent,
            &technology,
            &format,
            output.as_deref(),
            stdout,
            us_units,
        ),
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Constants => cmd_constants(),
    }
}

fn parse_technologies(names: &[String]) -> AppResult<Vec<Technology>> {
    let mut techs = names
        .iter()
        .map(|n| n.parse::<Technology>())
        .collect::<Result<Vec<_>, _>>()?;
    techs.sort();
    techs.dedup();
    Ok(techs)
}

fn cmd_design(args: &InfluentArgs, technology: &[String], use_cache: bool) -> AppResult<()> {
    let (influent, case_selection) = args.resolve()?;
    let technologies = if !technology.is_empty() {
        parse_technologies(technology)?
    } else {
        case_selection.unwrap_or_else(|| Technology::ALL.to_vec())
    };

    let service = DesignService::new(*Constants::standard(), DesignOptions { use_cache });
    print_influent(&influent, service.constants());

    let mut failed = 0;
    for (tech, outcome) in service.run_many(&technologies, &influent) {
        match outcome {
            Ok((sizing, metrics)) => print_design(&sizing, &metrics),
            Err(err) => {
                failed += 1;
                println!("\n{} - {}", tech, tech.long_name());
                println!("  ✗ {}", err);
            }
        }
    }
    info!(
        sized = technologies.len() - failed,
        failed, "designs complete"
    );
    Ok(())
}

fn cmd_report(
    args: &InfluentArgs,
    technology: &str,
    format: &str,
    output: Option<&Path>,
    stdout: bool,
    us_units: bool,
) -> AppResult<()> {
    let (influent, _) = args.resolve()?;
    let technology = technology.parse::<Technology>()?;
    let format = format.parse::<ReportFormat>()?;
    let units = if us_units {
        UnitSystem::UsCustomary
    } else {
        UnitSystem::Metric
    };

    let service = DesignService::default();
    let (sizing, metrics) = service.run(technology, &influent)?;
    let doc = render_report(
        &influent,
        &sizing,
        &metrics,
        service.constants(),
        ReportOptions { format, units },
    )?;

    if stdout {
        print!("{}", doc);
        return Ok(());
    }

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(report_file_name(technology, format)));
    std::fs::write(&path, doc)?;
    println!("✓ Wrote {} report to {}", technology, path.display());
    Ok(())
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating design case: {}", case_path.display());
    let case = case_service::load_case(case_path)?;
    case_service::validate_case(&case)?;
    let summary = case_service::summarize_case(&case)?;
    println!("✓ Case '{}' is valid", summary.name);
    let names: Vec<_> = summary.technologies.iter().map(|t| t.name()).collect();
    println!("  Technologies: {}", names.join(", "));
    Ok(())
}

fn cmd_constants() -> AppResult<()> {
    println!("Process constants:");
    for (label, value) in Constants::standard().entries() {
        println!("  {:<28} {}", label, value);
    }
    Ok(())
}

fn print_influent(influent: &Influent, constants: &Constants) {
    println!("Influent:");
    println!(
        "  Flow: {} {} ({:.1} m³/d)",
        influent.flow(),
        influent.unit(),
        influent.daily_flow_m3d(constants)
    );
    println!(
        "  BOD {} | TSS {} | TKN {} | TP {} (mg/L)",
        influent.bod(),
        influent.tss(),
        influent.tkn(),
        influent.tp()
    );
}

fn print_design(sizing: &Sizing, metrics: &Metrics) {
    println!(
        "\n{} - {}",
        sizing.technology,
        sizing.technology.long_name()
    );
    println!("  Volume: {:.0} m³ (HRT {} h)", sizing.volume_m3, sizing.hrt_h);
    println!("  Air:    {:.0} m³/h", metrics.required_air_m3h());
    for (label, value) in metrics.entries().iter().take(4) {
        println!("  {}: {}", label, value);
    }
    println!("  Dimensions:");
    for (zone, dims) in sizing.dims() {
        let parts: Vec<String> = dims.iter().map(|(k, v)| format!("{k} {v}")).collect();
        println!("    {:<10} {}", zone, parts.join(", "));
    }
}
