//! Operation selection and reporting
//!
//! Maps the parsed command line onto a single Blade operation and renders
//! the human-readable result line.

use anyhow::{Context, Result};
use tracing::info;

use crate::blade::Blade;
use crate::Args;

/// Operation requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Blend with another colour
    Blend { with: String },
    /// Move towards black
    Darken,
    /// Move towards white
    Lighten,
}

impl Operation {
    /// Pick the operation from the flags, first match wins:
    /// `--blend`, then `--darken`, then `--lighten`
    pub fn from_args(args: &Args) -> Option<Self> {
        if let Some(with) = &args.blend {
            Some(Operation::Blend { with: with.clone() })
        } else if args.darken {
            Some(Operation::Darken)
        } else if args.lighten {
            Some(Operation::Lighten)
        } else {
            None
        }
    }

    /// Apply the operation to `colour` and format the report line
    pub fn run(&self, colour: &str, percent: f64) -> Result<String> {
        let blade = Blade::new(colour);
        info!("{:?} {} by {}", self, blade.color(), percent);

        let line = match self {
            Operation::Blend { with } => {
                let result = blade
                    .blend(with, percent)
                    .with_context(|| format!("Failed to blend {} with {}", colour, with))?;
                format!("Blend {} with {} by {:.2}% = {}", colour, with, percent, result)
            }
            Operation::Darken => {
                let result = blade
                    .darken(percent)
                    .with_context(|| format!("Failed to darken {}", colour))?;
                format!("Darken {} by {:.2}% = {}", colour, percent, result)
            }
            Operation::Lighten => {
                let result = blade
                    .lighten(percent)
                    .with_context(|| format!("Failed to lighten {}", colour))?;
                format!("Lighten {} by {:.2}% = {}", colour, percent, result)
            }
        };

        Ok(line)
    }
}
