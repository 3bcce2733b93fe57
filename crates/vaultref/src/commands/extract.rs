//! Extract command

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use vaultref_core::VaultRefConfig;
use vaultref_secrets::extract;

use crate::output;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Value to inspect, e.g. "jdbc:pg://%vault:db/host%/app"
    pub value: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ExtractOutput<'a> {
    key: &'a str,
    name: &'a str,
}

pub fn run(args: ExtractArgs, config: &VaultRefConfig) -> Result<()> {
    let keys = extract(&args.value, config.namespace());

    if args.json {
        let entries: Vec<_> = keys
            .iter()
            .map(|k| ExtractOutput {
                key: k.as_str(),
                name: k.name(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if keys.is_empty() {
        output::info(&format!(
            "No '{}' references found",
            config.namespace().prefix()
        ));
        return Ok(());
    }

    for key in &keys {
        println!("{}", key.name());
    }

    Ok(())
}
