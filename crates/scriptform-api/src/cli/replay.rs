//! `sform replay`: run a script with pre-collected answers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use scriptform_types::error::ReplayError;
use scriptform_types::form::AnswerSequence;
use scriptform_types::replay::ExecutionResult;

use crate::state::AppState;

/// Replay a script non-interactively and print what it printed.
///
/// # Examples
///
/// ```bash
/// sform replay scripts/password.rhai -a 12 -a abc123
/// sform replay scripts/password.rhai --answers-file answers.json
/// ```
pub async fn replay_script(
    state: &AppState,
    script: Option<&str>,
    answers: Vec<String>,
    answers_file: Option<PathBuf>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let answers = match answers_file {
        Some(path) => read_answers_file(&path).await?,
        None => AnswerSequence::new(answers),
    };

    let source = state.resolve_script(script)?;
    let text = state
        .load_script(&source)
        .await
        .with_context(|| format!("Failed to load script {source}"))?;

    let outcome = state.form_service.replay(&text, &answers);
    print_outcome(outcome, json, quiet)
}

/// Read a JSON array of answers from a file.
pub async fn read_answers_file(path: &Path) -> Result<AnswerSequence> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} must hold a JSON array of strings", path.display()))
}

/// Print a replay outcome. Captured output goes to stdout; notes go to
/// stderr so the output can be piped.
pub fn print_outcome(
    outcome: std::result::Result<ExecutionResult, ReplayError>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    match outcome {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            print!("{}", result.output);
            if !quiet && result.unused_answers() > 0 {
                eprintln!(
                    "  {} {} answer{} not used by the script",
                    style("i").blue().bold(),
                    result.unused_answers(),
                    if result.unused_answers() == 1 { " was" } else { "s were" }
                );
            }
            Ok(())
        }
        Err(err) => {
            if let ReplayError::ScriptFailed { output, .. } = &err {
                print!("{output}");
            }
            Err(err.into())
        }
    }
}
