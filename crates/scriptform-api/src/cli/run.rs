//! `sform run`: fill in a script's form in the terminal, then replay it.

use anyhow::Result;
use console::style;
use dialoguer::Input;

use scriptform_types::form::{AnswerSequence, FormSpec};

use crate::cli::form::load_form;
use crate::cli::replay::print_outcome;
use crate::render::render_text;
use crate::state::AppState;

/// Show the form, ask for every field in order, then run the script with
/// the collected answers. A field's placeholder is offered as its default.
pub async fn run_script(
    state: &AppState,
    script: Option<&str>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let (text, spec) = load_form(state, script).await?;

    if !quiet && !json {
        println!();
        for line in render_text(&spec).lines() {
            println!("  {}", style(line).dim());
        }
        println!();
    }

    let answers = collect_answers(&spec)?;

    if !quiet && !json {
        println!();
        println!("  {}", style("Output").bold());
        println!();
    }

    let outcome = state.form_service.replay(&text, &answers);
    print_outcome(outcome, json, quiet)
}

fn collect_answers(spec: &FormSpec) -> Result<AnswerSequence> {
    let mut answers = Vec::with_capacity(spec.len());
    for input in &spec.inputs {
        let mut prompt = Input::<String>::new()
            .with_prompt(input.label.as_str())
            .allow_empty(true);
        if input.has_placeholder() {
            prompt = prompt.default(input.placeholder.clone());
        }
        answers.push(prompt.interact_text()?);
    }
    Ok(AnswerSequence::new(answers))
}
