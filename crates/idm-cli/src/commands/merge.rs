//! Effective password rule command.

use idm_model::{DefaultPasswordRuleConf, PasswordPolicy};
use idm_spi::{RuleRegistry, RuleSource};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::MergeArgs;
use crate::config::OutputFormat;
use crate::output::{output, render_table};

/// One field of the effective configuration.
#[derive(Debug, Tabled, Serialize)]
struct FieldRow {
    field: &'static str,
    value: String,
}

/// Runs the merge command.
pub fn run_merge(args: MergeArgs, format: OutputFormat) -> crate::CliResult<()> {
    let policies: Vec<PasswordPolicy> = super::load_policies(&args.policies)?;
    let registry = RuleRegistry::with_defaults();

    let confs: Vec<DefaultPasswordRuleConf> = policies
        .iter()
        .flat_map(|policy| registry.resolve_password_rules(policy))
        .collect();
    let merged = idm_policy::merge(Some(&confs))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&merged)?);
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", render_table(&field_rows(&merged)));
            Ok(())
        }
        OutputFormat::Quiet => output(&field_rows(&merged), format, |r| {
            format!("{}={}", r.field, r.value)
        }),
    }
}

fn field_rows(conf: &DefaultPasswordRuleConf) -> Vec<FieldRow> {
    let words = conf
        .words_not_permitted
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");

    vec![
        row("min_length", conf.min_length),
        row("max_length", conf.max_length),
        row("alphabetical", conf.alphabetical),
        row("uppercase", conf.uppercase),
        row("lowercase", conf.lowercase),
        row("digit", conf.digit),
        row("special", conf.special),
        row("special_chars", conf.special_chars.iter().collect::<String>()),
        row("illegal_chars", conf.illegal_chars.iter().collect::<String>()),
        row("repeat_same", conf.repeat_same),
        row("username_allowed", conf.username_allowed),
        row("words_not_permitted", words),
    ]
}

fn row(field: &'static str, value: impl ToString) -> FieldRow {
    FieldRow {
        field,
        value: value.to_string(),
    }
}
