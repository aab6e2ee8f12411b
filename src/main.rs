//! pinfield: replay a PIN input scenario against a headless document and
//! print the control's state after every step.

mod scenario;

use anyhow::{Context, Result};
use clap::Parser;
use pin_dom::{HeadlessDocument, connect};
use pin_input::{PinInput, PinInputId, PinSnapshot};
use scenario::Scenario;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "pinfield")]
#[command(about = "Replay a PIN input scenario headlessly")]
#[command(version)]
struct Cli {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Override the scenario's number of fields
    #[arg(long)]
    fields: Option<usize>,

    /// Override the scenario's form field name
    #[arg(long)]
    name: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn render(snap: &PinSnapshot) -> String {
    let slots: Vec<&str> = snap
        .value
        .iter()
        .map(|s| if s.is_empty() { "_" } else { s.as_str() })
        .collect();
    format!(
        "[{}] focus={} mode={:?} complete={}",
        slots.join(" "),
        snap.focused_index_raw(),
        snap.mode,
        snap.is_complete
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut scenario = Scenario::load(&cli.scenario)?;
    if let Some(fields) = cli.fields {
        scenario.pin_input.num_of_fields = fields;
    }
    if let Some(name) = cli.name {
        scenario.pin_input.name = Some(name);
    }

    let completions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&completions);
    let pin = PinInput::new(scenario.pin_input)
        .context("invalid [pin_input] options")?
        .with_id(PinInputId::from_raw(1))
        .with_on_complete(move |value| sink.borrow_mut().push(value));
    let mut doc = HeadlessDocument::new(pin);

    log::info!(
        "replaying {} steps from {}",
        scenario.steps.len(),
        cli.scenario.display()
    );
    println!("start: {}", render(&doc.snapshot()));

    for (n, step) in scenario.steps.iter().enumerate() {
        step.apply(&mut doc);
        println!("{:>3} {step}: {}", n + 1, render(&doc.snapshot()));
        for value in completions.borrow_mut().drain(..) {
            println!("    on_complete({})", value.concat());
        }
    }

    let api = connect(doc.pin());
    for props in api.all_input_props() {
        log::debug!("{:?}", props.attributes());
    }
    match doc.submit() {
        Some((name, value)) => println!("submit: {name}={value}"),
        None => println!("submit: <unnamed control, nothing submitted>"),
    }
    Ok(())
}
