//! Interactive quote wizard
//!
//! - [`WizardRepl`] prompts for each field step by step and drives a
//!   [`WizardSession`](haul_application::WizardSession)
//! - [`ConsoleNavigator`] carries out focus and confirmation signals

mod input;
mod navigator;
mod repl;

pub use input::{Command, Input, parse_line, resolve_value};
pub use navigator::ConsoleNavigator;
pub use repl::WizardRepl;
