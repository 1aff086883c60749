//! REPL (Read-Eval-Print Loop) for the quote wizard

use super::input::{Command, Input, parse_line};
use super::navigator::ConsoleNavigator;
use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SubmissionSpinner;
use colored::Colorize;
use haul_application::{
    AnalyticsSink, IntakeGateway, SessionProgress, SubmitQuoteUseCase, WizardSession,
};
use haul_domain::{Field, Step, validate_step};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::debug;

/// How prompting continues after one field
enum FieldFlow {
    Next,
    Back,
    Quit,
}

/// Interactive quote wizard
pub struct WizardRepl<G: IntakeGateway + 'static, A: AnalyticsSink + 'static> {
    session: WizardSession<G, A, ConsoleNavigator>,
    navigator: Arc<ConsoleNavigator>,
    output: OutputConfig,
}

impl<G: IntakeGateway + 'static, A: AnalyticsSink + 'static> WizardRepl<G, A> {
    /// Create a new WizardRepl
    pub fn new(submit: SubmitQuoteUseCase<G, A>) -> Self {
        let navigator = Arc::new(ConsoleNavigator::new());
        Self {
            session: WizardSession::new(submit, Arc::clone(&navigator)),
            navigator,
            output: OutputConfig::default(),
        }
    }

    /// Set output behavior
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Run the wizard until the request is accepted or the user leaves.
    ///
    /// Returns `true` when the request was accepted.
    pub async fn run(&mut self) -> RlResult<bool> {
        let mut rl = DefaultEditor::new()?;

        print!("{}", ConsoleFormatter::welcome());

        loop {
            let step = self.session.state().current_step();
            println!("{}", ConsoleFormatter::step_header(step));

            match self.prompt_step(&mut rl, step).await? {
                FieldFlow::Next => {}
                FieldFlow::Back => {
                    if let Err(e) = self.session.retreat().await {
                        eprintln!("Error: {}", e);
                    }
                    continue;
                }
                FieldFlow::Quit => {
                    println!("Bye!");
                    return Ok(false);
                }
            }

            print!("{}", ConsoleFormatter::actions(self.session.state()));

            if self.advance(step).await == SessionProgress::Completed {
                return Ok(true);
            }

            let errors = self.session.state().errors();
            if !errors.is_empty() {
                print!("{}", ConsoleFormatter::errors(errors));
            }
        }
    }

    /// Prompt the step's fields, starting at the focused one if any
    async fn prompt_step(&mut self, rl: &mut DefaultEditor, step: Step) -> RlResult<FieldFlow> {
        let fields = step.fields();
        let start = self
            .navigator
            .take_focus()
            .and_then(|focus| fields.iter().position(|f| *f == focus))
            .unwrap_or(0);

        for field in &fields[start..] {
            match self.prompt_field(rl, *field).await? {
                FieldFlow::Next => {}
                flow => return Ok(flow),
            }
        }
        Ok(FieldFlow::Next)
    }

    async fn prompt_field(&mut self, rl: &mut DefaultEditor, field: Field) -> RlResult<FieldFlow> {
        let prompt = ConsoleFormatter::field_prompt(field);

        loop {
            print!("{}", ConsoleFormatter::choices(field));
            let current = self.session.state().request().get(field).to_string();

            let line = match rl.readline_with_initial(&prompt, (current.as_str(), "")) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(FieldFlow::Quit),
                Err(err) => return Err(err),
            };

            match parse_line(field, &line) {
                Input::Command(Command::Back) => {
                    if self.session.state().can_retreat() {
                        return Ok(FieldFlow::Back);
                    }
                    println!("Already on the first step");
                }
                Input::Command(Command::Quit) => return Ok(FieldFlow::Quit),
                Input::Command(Command::Help) => {
                    println!();
                    print!("{}", ConsoleFormatter::commands_help());
                    println!();
                }
                Input::Command(Command::Unknown(cmd)) => {
                    println!("Unknown command: {}", cmd);
                    println!("Type /help for available commands");
                }
                Input::Value(value) => match self.session.update_field(field, value).await {
                    Ok(_) => return Ok(FieldFlow::Next),
                    Err(e) => println!("{} {}", "x".red(), e),
                },
            }
        }
    }

    /// Move forward from `step`, submitting when it is the last one
    async fn advance(&mut self, step: Step) -> SessionProgress {
        let submitting =
            step.is_last() && validate_step(step, self.session.state().request()).is_empty();
        let spinner = submitting
            .then(|| SubmissionSpinner::start("Submitting...", self.output.show_progress));

        let progress = match self.session.advance().await {
            Ok(progress) => progress,
            Err(e) => {
                debug!("Advance rejected: {}", e);
                eprintln!("Error: {}", e);
                SessionProgress::InProgress
            }
        };

        if let Some(spinner) = spinner {
            spinner.finish(progress == SessionProgress::Completed);
        }

        if self.navigator.take_confirmation() {
            println!("{}", ConsoleFormatter::confirmation());
        }

        progress
    }
}
