//! Subcommand implementations.

use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result, bail};
use tracing::info;

use medreport_map::{MAX_REPORT_SIZE_BYTES, ReportMapper};
use medreport_model::{DiseaseForm, disease_form, disease_forms};

use crate::cli::{FieldsArgs, OutputFormatArg, ParseArgs};
use crate::summary::{print_field_listing, print_parsed_report};

pub fn run_parse(args: &ParseArgs) -> Result<()> {
    let max_bytes = args
        .max_size_mb
        .map_or(MAX_REPORT_SIZE_BYTES, |mb| mb.saturating_mul(1024 * 1024));
    let metadata = fs::metadata(&args.report)
        .with_context(|| format!("read {}", args.report.display()))?;
    if metadata.len() > max_bytes {
        bail!(
            "report {} is {} bytes, above the {max_bytes} byte limit",
            args.report.display(),
            metadata.len()
        );
    }

    let parsed = ReportMapper::new().parse_path(&args.report)?;
    let field_count: usize = parsed.values().map(BTreeMap::len).sum();
    info!(
        diseases = parsed.len(),
        fields = field_count,
        "report parsed"
    );

    match args.format {
        OutputFormatArg::Json => {
            let rendered = serde_json::to_string_pretty(&parsed).context("render json")?;
            println!("{rendered}");
        }
        OutputFormatArg::Table => {
            if parsed.is_empty() {
                println!("No recognized fields in {}", args.report.display());
            } else {
                print_parsed_report(&parsed);
            }
        }
    }
    Ok(())
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let forms: Vec<&DiseaseForm> = match args.disease {
        Some(disease) => vec![disease_form(disease)],
        None => disease_forms().iter().collect(),
    };
    print_field_listing(&forms);
    Ok(())
}
