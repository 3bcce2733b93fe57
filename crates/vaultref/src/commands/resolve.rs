//! Resolve command

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::debug;
use vaultref_core::{BehaviourFlags, ParameterKind, VaultRefConfig};
use vaultref_secrets::{
    load_parameter_set, load_secret_mapping, resolve_parameters, InjectionPlan, ReferenceKey,
};

use crate::output;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Parameter file (.json, .yaml, .yml, or KEY=VALUE lines)
    pub params: PathBuf,

    /// Secret file mapping secret names to values
    #[arg(short, long)]
    pub secrets: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Properties)]
    pub format: OutputFormat,

    /// Fail when references remain unresolved
    #[arg(long)]
    pub strict: bool,

    /// Print every changed parameter, ignoring behaviour flags
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// name=value lines
    Properties,
    /// JSON document
    Json,
    /// `export NAME='value'` lines for environment parameters
    Env,
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    environment: &'a BTreeMap<String, String>,
    parameters: &'a BTreeMap<String, String>,
    withheld: &'a BTreeSet<String>,
    unresolved: &'a BTreeMap<String, Vec<ReferenceKey>>,
}

pub fn run(args: ResolveArgs, config: &VaultRefConfig) -> Result<()> {
    let parameters = load_parameter_set(&args.params)
        .with_context(|| format!("Failed to load parameters from {}", args.params.display()))?;
    let secrets = load_secret_mapping(&args.secrets)
        .with_context(|| format!("Failed to load secrets from {}", args.secrets.display()))?;

    debug!(
        namespace = %config.namespace(),
        parameters = parameters.len(),
        secrets = secrets.len(),
        "Resolving parameter set"
    );
    let resolved = resolve_parameters(&parameters, &secrets, config.namespace());

    let flags = if args.all {
        BehaviourFlags {
            expose_env: true,
            expose_config: true,
        }
    } else {
        BehaviourFlags::from_parameters(&parameters, config.config.behaviour)
    };
    let plan = InjectionPlan::build(&resolved.updates, flags);

    match args.format {
        OutputFormat::Properties => {
            for (name, value) in &plan.environment {
                println!(
                    "env.{}={}",
                    escape_property(name),
                    escape_property(value)
                );
            }
            for (name, value) in &plan.parameters {
                println!("{}={}", escape_property(name), escape_property(value));
            }
        }
        OutputFormat::Env => {
            for (name, value) in &plan.environment {
                println!("export {}={}", name, shell_quote(value));
            }
            if !plan.parameters.is_empty() {
                output::info(&format!(
                    "{} non-environment parameters omitted from env output",
                    plan.parameters.len()
                ));
            }
        }
        OutputFormat::Json => {
            let out = ResolveOutput {
                environment: &plan.environment,
                parameters: &plan.parameters,
                withheld: &plan.withheld,
                unresolved: &resolved.unresolved,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    for name in &plan.withheld {
        output::info(&format!(
            "Withheld {} parameter '{}' (enable with {})",
            ParameterKind::of(name),
            name,
            flag_name(ParameterKind::of(name))
        ));
    }

    if resolved.has_unresolved() {
        for (parameter, keys) in &resolved.unresolved {
            let refs: Vec<String> = keys.iter().map(ReferenceKey::to_reference).collect();
            output::warning(&format!(
                "Parameter '{}' has unresolved references: {}",
                parameter,
                refs.join(", ")
            ));
        }

        if args.strict || config.config.fail_on_unresolved {
            bail!(
                "{} secret references could not be resolved",
                resolved.unresolved_names().len()
            );
        }
    } else if !resolved.updates.is_empty() {
        output::success(&format!(
            "Resolved secrets in {} parameters",
            resolved.updates.len()
        ));
    }

    Ok(())
}

fn flag_name(kind: ParameterKind) -> &'static str {
    match kind {
        ParameterKind::Environment => vaultref_core::types::EXPOSE_ENV_PARAMETER,
        ParameterKind::System | ParameterKind::Config => {
            vaultref_core::types::EXPOSE_CONFIG_PARAMETER
        }
    }
}

/// Escape line breaks and backslashes so one entry stays on one line
fn escape_property(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str(r"\\"),
            '\n' => escaped.push_str(r"\n"),
            '\r' => escaped.push_str(r"\r"),
            '\t' => escaped.push_str(r"\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Single-quote `value` for POSIX shells
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
