//! `sform form`: show the form a script implies.

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use scriptform_core::form::naming::field_name;
use scriptform_types::form::FormSpec;

use crate::cli::FormFormat;
use crate::render::render_html;
use crate::state::AppState;

/// Resolve, load, and scan a script into its form.
pub async fn load_form(state: &AppState, script: Option<&str>) -> Result<(String, FormSpec)> {
    let source = state.resolve_script(script)?;
    let text = state
        .load_script(&source)
        .await
        .with_context(|| format!("Failed to load script {source}"))?;
    let spec = state
        .form_service
        .build_form(&text)
        .with_context(|| format!("Failed to build a form from {source}"))?;
    Ok((text, spec))
}

/// Print a script's form as a table, an HTML fragment, or JSON.
pub async fn show_form(
    state: &AppState,
    script: Option<&str>,
    format: FormFormat,
    json: bool,
) -> Result<()> {
    let (_, spec) = load_form(state, script).await?;

    let format = if json { FormFormat::Json } else { format };
    match format {
        FormFormat::Json => println!("{}", serde_json::to_string_pretty(&spec)?),
        FormFormat::Html => print!("{}", render_html(&spec, None)),
        FormFormat::Text => print_form_table(&spec),
    }

    Ok(())
}

fn print_form_table(spec: &FormSpec) {
    println!();
    if !spec.title.is_empty() {
        println!("  {}", style(&spec.title).cyan().bold());
    }
    if !spec.description.is_empty() {
        for line in spec.description.lines() {
            println!("  {}", style(line).dim());
        }
    }
    if spec.has_header() {
        println!();
    }

    if spec.is_empty() {
        println!(
            "  {} This script asks for no input.",
            style("i").blue().bold()
        );
        println!();
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Field").fg(Color::White),
        Cell::new("Label").fg(Color::White),
        Cell::new("Placeholder").fg(Color::White),
    ]);

    for (index, input) in spec.inputs.iter().enumerate() {
        let placeholder = if input.has_placeholder() {
            Cell::new(&input.placeholder).fg(Color::Yellow)
        } else {
            Cell::new("-").fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(field_name(index)).fg(Color::Cyan),
            Cell::new(&input.label),
            placeholder,
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} field{}",
        style(spec.len()).bold(),
        if spec.len() == 1 { "" } else { "s" }
    );
    println!();
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use scriptform_types::config::GlobalConfig;

    fn state() -> AppState {
        AppState::with_config(GlobalConfig::default(), PathBuf::from("/tmp/sf-test"))
    }

    #[tokio::test]
    async fn inline_script_loads() {
        let (text, spec) = load_form(&state(), Some(r#"let a = input("Your city [Seattle]:");"#))
            .await
            .unwrap();
        assert!(text.contains("input"));
        assert_eq!(spec.inputs[0].label, "Your city:");
        assert_eq!(spec.inputs[0].placeholder, "Seattle");
    }

    #[tokio::test]
    async fn missing_file_mentions_path() {
        let err = load_form(&state(), Some("/nonexistent/scriptform/form.rhai"))
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("form.rhai"));
    }

    #[tokio::test]
    async fn no_script_and_no_default_fails() {
        assert!(load_form(&state(), None).await.is_err());
    }
}
