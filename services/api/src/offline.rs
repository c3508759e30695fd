use std::path::PathBuf;

use clap::Args;
use policy_enforcement::config::AppConfig;
use policy_enforcement::enforcement::{EvaluationRequest, PolicyEnforcementService, RuleSnapshot};
use policy_enforcement::error::AppError;

/// Arguments for one-shot evaluation against snapshot files.
#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Request JSON file: a single object or an array of objects
    #[arg(long)]
    pub(crate) request: PathBuf,
    /// Override the configured rules file
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Override the configured grade hierarchy file
    #[arg(long)]
    pub(crate) grades: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct PoliciesArgs {
    /// Override the configured rules file
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Override the configured grade hierarchy file
    #[arg(long)]
    pub(crate) grades: Option<PathBuf>,
}

fn load_snapshot(
    rules: Option<PathBuf>,
    grades: Option<PathBuf>,
) -> Result<RuleSnapshot, AppError> {
    let config = AppConfig::load()?;
    let rules_path = rules.unwrap_or(config.snapshot.rules_path);
    let grades_path = grades.or(config.snapshot.grades_path);
    Ok(RuleSnapshot::from_files(
        &rules_path,
        grades_path.as_deref(),
    )?)
}

/// Evaluate a request file and print one decision per request.
pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let snapshot = load_snapshot(args.rules, args.grades)?;
    let service = PolicyEnforcementService::new(snapshot);

    let raw = std::fs::read_to_string(&args.request)?;
    let parsed: serde_json::Value = serde_json::from_str(&raw)?;
    let requests: Vec<EvaluationRequest> = if parsed.is_array() {
        serde_json::from_value(parsed)?
    } else {
        vec![serde_json::from_value(parsed)?]
    };

    for decision in service.evaluate_batch(&requests) {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    }
    Ok(())
}

/// Print a per-policy rule count summary for a snapshot.
pub(crate) fn run_policies(args: PoliciesArgs) -> Result<(), AppError> {
    let snapshot = load_snapshot(args.rules, args.grades)?;

    println!("{} rules loaded", snapshot.rule_count());
    for summary in snapshot.policy_summaries() {
        println!(
            "  {} [{}]: {} rule(s)",
            summary.policy_name, summary.policy_id, summary.rule_count
        );
    }
    Ok(())
}
