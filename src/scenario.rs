//! Scenario files: control options plus a list of user actions.
//!
//! ```toml
//! [pin_input]
//! num_of_fields = 4
//! name = "pincode"
//!
//! [[steps]]
//! action = "click_label"
//!
//! [[steps]]
//! action = "type"
//! index = 0
//! text = "1234"
//! ```

use anyhow::{Context, Result};
use pin_dom::HeadlessDocument;
use pin_input::PinInputOptions;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub pin_input: PinInputOptions,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    ClickLabel,
    Focus { index: usize },
    Blur,
    Type { index: usize, text: String },
    Backspace { index: usize },
    Paste { index: usize, text: String },
    Change { index: usize, value: String },
}

impl Step {
    /// Perform the action, then let the host run its next frame.
    pub fn apply(&self, doc: &mut HeadlessDocument) {
        match self {
            Step::ClickLabel => doc.click_label(),
            Step::Focus { index } => doc.focus(*index),
            Step::Blur => doc.blur(),
            Step::Type { index, text } => doc.type_text(*index, text),
            Step::Backspace { index } => doc.backspace(*index),
            Step::Paste { index, text } => {
                doc.paste(*index, text);
            }
            Step::Change { index, value } => doc.change(*index, value),
        }
        doc.run_frame();
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::ClickLabel => write!(f, "click label"),
            Step::Focus { index } => write!(f, "focus #{index}"),
            Step::Blur => write!(f, "blur"),
            Step::Type { index, text } => write!(f, "type {text:?} at #{index}"),
            Step::Backspace { index } => write!(f, "backspace at #{index}"),
            Step::Paste { index, text } => write!(f, "paste {text:?} at #{index}"),
            Step::Change { index, value } => write!(f, "change #{index} to {value:?}"),
        }
    }
}
