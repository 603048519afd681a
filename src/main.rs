use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use markbar::cli::{CliArgs, Request, RunConfig};
use markbar::editable::TextSpan;
use markbar::keymap::{load_default_keymap, Keymap, Keystroke};
use markbar::syntax::{toggle_syntax, Catalogue};
use markbar::toolbar::{update, Toolbar, ToolbarMsg};
use markbar::ToolbarConfig;

/// One navigation step, for `navigate` output
#[derive(Serialize)]
struct FocusStep<'a> {
    key: String,
    index: usize,
    label: &'a str,
}

fn main() -> Result<()> {
    markbar::tracing::init();

    let config = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    run(config)
}

fn run(config: RunConfig) -> Result<()> {
    let mut toolbar_config = match config.config_path {
        Some(ref path) => {
            anyhow::ensure!(path.exists(), "Config file {} not found", path.display());
            ToolbarConfig::load_from(path)
        }
        None => ToolbarConfig::load(),
    };
    if let Some(flavor) = config.flavor {
        toolbar_config.flavor = flavor;
    }

    match config.request {
        Request::Apply { kind, span } => {
            let descriptor = Catalogue::new(toolbar_config.flavor)
                .resolve(kind)
                .with_context(|| format!("{} has nothing to apply", kind))?;
            print_span(&toggle_syntax(&span, &descriptor), config.json)
        }
        Request::Press { keystroke, span } => {
            let mut toolbar = build_toolbar(&toolbar_config)?;
            update(&mut toolbar, ToolbarMsg::SetField(span));
            update(&mut toolbar, ToolbarMsg::FocusField);
            if update(&mut toolbar, ToolbarMsg::KeyDown(keystroke)).is_none() {
                tracing::warn!("{} is not bound in the field", keystroke);
            }
            print_span(toolbar.field(), config.json)
        }
        Request::Navigate { keystrokes } => {
            let mut toolbar = build_toolbar(&toolbar_config)?;
            let start = toolbar
                .active_button()
                .context("The toolbar has no visible buttons")?;
            update(&mut toolbar, ToolbarMsg::FocusButton(start));

            let mut steps = Vec::with_capacity(keystrokes.len());
            for keystroke in keystrokes {
                update(&mut toolbar, ToolbarMsg::KeyDown(keystroke));
                let index = toolbar
                    .active_button()
                    .context("The toolbar has no visible buttons")?;
                steps.push((keystroke, index));
            }

            print_steps(&toolbar, &steps, config.json)
        }
    }
}

fn build_toolbar(config: &ToolbarConfig) -> Result<Toolbar> {
    let keymap = Keymap::with_bindings(load_default_keymap());
    Toolbar::from_config(config, keymap).context("Invalid button layout")
}

fn print_span(span: &TextSpan, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(span)?);
    } else {
        println!("{}", span.to_visual());
    }
    Ok(())
}

fn print_steps(toolbar: &Toolbar, steps: &[(Keystroke, usize)], json: bool) -> Result<()> {
    let steps: Vec<FocusStep> = steps
        .iter()
        .map(|&(keystroke, index)| FocusStep {
            key: keystroke.to_string(),
            index,
            label: &toolbar.buttons()[index].label,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        for step in steps {
            println!("{:<8} {:>3}  {}", step.key, step.index, step.label);
        }
    }
    Ok(())
}
