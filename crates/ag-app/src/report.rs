//! Design report rendering.
//!
//! A report is a title naming the technology, the parameter/value table from
//! the metrics mapping (two decimals), then process, influent and dimension
//! listings. Formatting lives here; the engine only hands over raw numbers.

use ag_core::Constants;
use ag_design::{Metrics, Sizing, Technology, ZoneSizing};
use ag_influent::Influent;
use ag_results::DesignRecord;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Markdown,
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(AppError::InvalidInput(format!(
                "unknown report format '{other}' (expected txt, md, csv or json)"
            ))),
        }
    }
}

/// Units for the dimension listing. Metrics keep their own labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    Metric,
    UsCustomary,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub format: ReportFormat,
    pub units: UnitSystem,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Markdown,
            units: UnitSystem::Metric,
        }
    }
}

/// Default export file name, e.g. `CAS_report.md`.
pub fn report_file_name(technology: Technology, format: ReportFormat) -> String {
    format!("{}_report.{}", technology.name(), format.extension())
}

pub fn render_report(
    influent: &Influent,
    sizing: &Sizing,
    metrics: &Metrics,
    constants: &Constants,
    options: ReportOptions,
) -> AppResult<String> {
    let record = DesignRecord::new(influent, (sizing.clone(), *metrics));
    let doc = ReportDoc::build(&record, constants, options.units);

    match options.format {
        ReportFormat::Json => Ok(record.to_json()?),
        ReportFormat::Csv => Ok(doc.to_csv()),
        ReportFormat::Markdown => Ok(doc.to_markdown()),
        ReportFormat::Text => Ok(doc.to_text()),
    }
}

type Rows = Vec<(String, String)>;

/// Format-neutral report content.
struct ReportDoc {
    title: String,
    subtitle: String,
    footer: String,
    parameters: Rows,
    process: Rows,
    influent: Rows,
    zones: Vec<(String, Rows)>,
}

impl ReportDoc {
    fn build(record: &DesignRecord, constants: &Constants, units: UnitSystem) -> Self {
        let sizing = &record.sizing;
        let tech = sizing.technology;
        let inf = &record.influent;

        let parameters = record
            .metrics
            .entries()
            .into_iter()
            .map(|(label, value)| (label.to_string(), format!("{value:.2}")))
            .collect();

        let (volume_label, volume) = match units {
            UnitSystem::Metric => ("Process Volume (m³)", sizing.volume_m3),
            UnitSystem::UsCustomary => ("Process Volume (gal)", sizing.volume_m3 * constants.m3_to_gal),
        };
        let process = vec![
            ("HRT (h)".to_string(), format!("{:.1}", sizing.hrt_h)),
            (volume_label.to_string(), format!("{volume:.2}")),
            (
                "Oxygen Demand (kg O2/d)".to_string(),
                format!("{:.2}", record.metrics.air.oxygen_kg_per_day),
            ),
        ];

        let influent = vec![
            (
                format!("Flow ({})", inf.unit().label()),
                format!("{:.2}", inf.flow()),
            ),
            (
                "Flow (m³/d)".to_string(),
                format!("{:.2}", inf.daily_flow_m3d(constants)),
            ),
            ("BOD (mg/L)".to_string(), format!("{:.2}", inf.bod())),
            ("TSS (mg/L)".to_string(), format!("{:.2}", inf.tss())),
            ("TKN (mg/L)".to_string(), format!("{:.2}", inf.tkn())),
            ("TP (mg/L)".to_string(), format!("{:.2}", inf.tp())),
        ];

        let zones = sizing
            .zones
            .iter()
            .map(|(zone, zs)| (zone.label().to_string(), zone_rows(zs, constants, units)))
            .collect();

        Self {
            title: format!("{} Design Summary", tech.name()),
            subtitle: tech.long_name().to_string(),
            footer: format!(
                "Design {} | engine {} | {}",
                &record.design_id[..12.min(record.design_id.len())],
                record.engine_version,
                record.generated_at
            ),
            parameters,
            process,
            influent,
            zones,
        }
    }

    fn sections(&self) -> Vec<(String, &Rows)> {
        let mut sections = vec![
            ("Process".to_string(), &self.process),
            ("Influent".to_string(), &self.influent),
        ];
        for (zone, rows) in &self.zones {
            sections.push((format!("{zone} Dimensions"), rows));
        }
        sections
    }

    fn to_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}\n", self.title);
        let _ = writeln!(out, "_{}_\n", self.subtitle);
        write_md_table(&mut out, ("Parameter", "Value"), &self.parameters);
        for (heading, rows) in self.sections() {
            let _ = writeln!(out, "\n## {heading}\n");
            write_md_table(&mut out, ("Item", "Value"), rows);
        }
        let _ = writeln!(out, "\n---\n{}", self.footer);
        out
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", "=".repeat(self.title.chars().count()));
        let _ = writeln!(out, "{}\n", self.subtitle);
        write_text_table(&mut out, ("Parameter", "Value"), &self.parameters);
        for (heading, rows) in self.sections() {
            let _ = writeln!(out, "\n{heading}");
            write_text_table(&mut out, ("Item", "Value"), rows);
        }
        let _ = writeln!(out, "\n{}", self.footer);
        out
    }

    fn to_csv(&self) -> String {
        let mut out = String::from("Parameter,Value\n");
        for (label, value) in &self.parameters {
            let _ = writeln!(out, "{},{}", csv_field(label), csv_field(value));
        }
        out
    }
}

fn zone_rows(zone: &ZoneSizing, constants: &Constants, units: UnitSystem) -> Rows {
    let mut rows: Rows = match units {
        UnitSystem::Metric => zone
            .display_map()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        UnitSystem::UsCustomary => {
            let ft = |v: f64| format!("{:.1}", v * constants.m_to_ft);
            match zone {
                ZoneSizing::Basin { basin, .. } => vec![
                    ("Length (ft)".to_string(), ft(basin.length_m)),
                    ("Width (ft)".to_string(), ft(basin.width_m)),
                    ("Depth (ft)".to_string(), ft(basin.depth_m)),
                ],
                ZoneSizing::Clarifier { basin, .. } => vec![
                    ("Diameter (ft)".to_string(), ft(basin.diameter_m)),
                    ("SWD (ft)".to_string(), ft(basin.swd_m)),
                ],
            }
        }
    };

    let size_row = match (zone, units) {
        (ZoneSizing::Basin { volume_m3, .. }, UnitSystem::Metric) => {
            ("Volume (m³)".to_string(), format!("{volume_m3:.1}"))
        }
        (ZoneSizing::Basin { volume_m3, .. }, UnitSystem::UsCustomary) => (
            "Volume (gal)".to_string(),
            format!("{:.0}", volume_m3 * constants.m3_to_gal),
        ),
        (ZoneSizing::Clarifier { area_m2, .. }, UnitSystem::Metric) => {
            ("Surface Area (m²)".to_string(), format!("{area_m2:.1}"))
        }
        (ZoneSizing::Clarifier { area_m2, .. }, UnitSystem::UsCustomary) => (
            "Surface Area (ft²)".to_string(),
            format!("{:.0}", area_m2 * constants.m2_to_ft2),
        ),
    };
    rows.insert(0, size_row);
    rows
}

fn write_md_table(out: &mut String, header: (&str, &str), rows: &Rows) {
    let _ = writeln!(out, "| {} | {} |", header.0, header.1);
    let _ = writeln!(out, "|---|---:|");
    for (label, value) in rows {
        let _ = writeln!(out, "| {label} | {value} |");
    }
}

fn write_text_table(out: &mut String, header: (&str, &str), rows: &Rows) {
    let key_w = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once(header.0.len()))
        .max()
        .unwrap_or(0);
    let val_w = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .chain(std::iter::once(header.1.len()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(out, "  {:<key_w$}  {:>val_w$}", header.0, header.1);
    let _ = writeln!(out, "  {}  {}", "-".repeat(key_w), "-".repeat(val_w));
    for (label, value) in rows {
        // Pad by chars: labels carry multi-byte unit symbols
        let pad = key_w - label.chars().count();
        let _ = writeln!(out, "  {label}{}  {value:>val_w$}", " ".repeat(pad));
    }
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
