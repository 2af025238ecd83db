//! Command handlers. Each returns the text to print on stdout.

use std::path::Path;

use anyhow::{Context, Result};
use roomy::{Breakpoints, ClassNaming, StyleSheet};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::cli::{Cli, Commands, OutputMode};
use crate::demo::{visibility, DemoPage};
use crate::render::{Renderer, CLASSIFY_TEMPLATE, VISIBILITY_TEMPLATE};

#[derive(Debug, Serialize)]
struct ClassifyRow {
    width: f64,
    label: String,
    tiers: Vec<&'static str>,
}

pub fn run(cli: Cli) -> Result<String> {
    let mode = cli.output;
    match cli.command {
        Commands::Classify { widths, config } => {
            classify(&widths, load_breakpoints(config.as_deref())?, mode)
        }
        Commands::Stylesheet { hashed } => stylesheet(hashed, mode),
        Commands::Visibility { width, config } => {
            show_visibility(width, load_breakpoints(config.as_deref())?, mode)
        }
    }
}

fn load_breakpoints(path: Option<&Path>) -> Result<Breakpoints> {
    match path {
        Some(path) => Breakpoints::load(path)
            .with_context(|| format!("loading breakpoints from {}", path.display())),
        None => Ok(Breakpoints::default()),
    }
}

fn format_width(width: f64) -> String {
    if width.fract() == 0.0 && width.is_finite() {
        format!("{width:.0}px")
    } else {
        format!("{width}px")
    }
}

fn classify(widths: &[f64], breakpoints: Breakpoints, mode: OutputMode) -> Result<String> {
    let rows: Vec<ClassifyRow> = widths
        .iter()
        .map(|&width| ClassifyRow {
            width,
            label: format_width(width),
            tiers: breakpoints.satisfied(width).class_names(),
        })
        .collect();
    debug!(count = rows.len(), "classified widths");

    if mode == OutputMode::Json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    let out = Renderer::new(mode).render(CLASSIFY_TEMPLATE, &json!({ "rows": rows }))?;
    Ok(out)
}

fn stylesheet(hashed: bool, mode: OutputMode) -> Result<String> {
    let naming = if hashed {
        ClassNaming::Hashed
    } else {
        ClassNaming::Sequential
    };
    let page = DemoPage::build(StyleSheet::with_naming(naming));
    debug!(rules = page.sheet.len(), "built demo sheet");

    if mode == OutputMode::Json {
        let rules: Vec<_> = page
            .sheet
            .rules()
            .iter()
            .map(|rule| {
                let declarations: serde_json::Map<String, serde_json::Value> = rule
                    .declarations
                    .iter()
                    .map(|(prop, value)| (prop.clone(), value.clone().into()))
                    .collect();
                json!({ "selector": rule.selector, "declarations": declarations })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rules)?);
    }
    Ok(format!("{}\n", page.sheet.to_css()))
}

fn show_visibility(width: f64, breakpoints: Breakpoints, mode: OutputMode) -> Result<String> {
    let page = DemoPage::build(StyleSheet::with_naming(ClassNaming::Sequential));
    let state = visibility(&page, breakpoints, width);

    if mode == OutputMode::Json {
        return Ok(serde_json::to_string_pretty(&state)?);
    }
    let mut ctx = serde_json::to_value(&state)?;
    ctx["width"] = format_width(width).into();
    let out = Renderer::new(mode).render(VISIBILITY_TEMPLATE, &ctx)?;
    Ok(out)
}
