//! Scan command

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use vaultref_core::VaultRefConfig;
use vaultref_secrets::{load_parameter_set, scan};

use crate::output;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Parameter file (.json, .yaml, .yml, or KEY=VALUE lines)
    pub params: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ScanOutput<'a> {
    secrets: BTreeSet<&'a str>,
    parameters: &'a BTreeSet<String>,
}

pub fn run(args: ScanArgs, config: &VaultRefConfig) -> Result<()> {
    let parameters = load_parameter_set(&args.params)
        .with_context(|| format!("Failed to load parameters from {}", args.params.display()))?;

    let report = scan(&parameters, config.namespace());

    if args.json {
        let out = ScanOutput {
            secrets: report.secret_names(),
            parameters: &report.keys_with_references,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if report.is_empty() {
        output::info(&format!(
            "No '{}' references in {} parameters",
            config.namespace().prefix(),
            parameters.len()
        ));
        return Ok(());
    }

    output::header(&format!(
        "{} secrets referenced by {} parameters",
        report.secret_names().len(),
        report.keys_with_references.len()
    ));
    for name in &report.keys_with_references {
        output::kv("parameter", name);
    }

    for name in report.secret_names() {
        println!("{}", name);
    }

    Ok(())
}
