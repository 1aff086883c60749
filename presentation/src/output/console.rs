//! Console output formatter for the quote wizard

use colored::Colorize;
use haul_domain::{ErrorKey, Field, Species, Step, TOTAL_STEPS, Timeline, WizardErrors, WizardState};

const PROGRESS_WIDTH: usize = 20;

/// Formats wizard screens for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Welcome banner shown once at start-up
    pub fn welcome() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│      Get a Free Livestock Hauling Quote     │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str(&Self::commands_help());
        output
    }

    pub fn commands_help() -> String {
        let mut output = String::new();
        output.push_str("Commands:\n");
        output.push_str("  /back     - Return to the previous step\n");
        output.push_str("  /help     - Show this help\n");
        output.push_str("  /quit     - Leave without submitting\n");
        output.push_str("Press Enter to keep the value shown in brackets.\n");
        output
    }

    /// Title, progress bar and heading of a step
    pub fn step_header(step: Step) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(step.title()));
        output.push_str(&format!(
            "{} {}\n",
            format!("Step {} of {}", step.number(), TOTAL_STEPS).dimmed(),
            Self::progress_bar(step.progress_percent())
        ));
        output.push_str(&format!("\n{}\n", step.heading().bold()));
        output
    }

    /// Textual progress bar, e.g. `[========------------] 40%`
    pub fn progress_bar(percent: u8) -> String {
        let percent = percent.min(100) as usize;
        let filled = percent * PROGRESS_WIDTH / 100;
        format!(
            "[{}{}] {}%",
            "=".repeat(filled).green(),
            "-".repeat(PROGRESS_WIDTH - filled),
            percent
        )
    }

    /// Prompt line for one field
    pub fn field_prompt(field: Field) -> String {
        let mut prompt = field.label().to_string();
        if field.is_optional() {
            prompt.push_str(" (optional)");
        }
        if let Some(placeholder) = field.placeholder() {
            prompt.push_str(&format!(" [{}]", placeholder));
        }
        prompt.push_str(": ");
        prompt
    }

    /// Numbered list of choices for picker fields, empty for free text
    pub fn choices(field: Field) -> String {
        let labels: Vec<&str> = match field {
            Field::Species => Species::all().iter().map(|s| s.as_str()).collect(),
            Field::Timeline => Timeline::all().iter().map(|t| t.as_str()).collect(),
            _ => return String::new(),
        };

        let placeholder = match field {
            Field::Species => "Select livestock type",
            _ => "Select timeline",
        };

        let mut output = format!("  {}\n", placeholder.dimmed());
        for (i, label) in labels.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, label));
        }
        output
    }

    /// Every error currently shown, submit banner first
    pub fn errors(errors: &WizardErrors) -> String {
        let mut output = String::new();
        if let Some(message) = errors.submit() {
            output.push_str(&Self::banner(message));
        }
        for (key, message) in errors.iter() {
            if let ErrorKey::Field(field) = key {
                output.push_str(&format!(
                    "  {} {}: {}\n",
                    "x".red(),
                    field.label().bold(),
                    message.red()
                ));
            }
        }
        output
    }

    /// Banner for a failed submission
    pub fn banner(message: &str) -> String {
        format!("\n{} {}\n\n", "!".red().bold(), message.red().bold())
    }

    /// Navigation hints for the current step
    pub fn actions(state: &WizardState) -> String {
        let forward = format!("[{}]", state.forward_label()).cyan().bold();
        if state.can_retreat() {
            format!("{}  {}\n", "[Back: /back]".dimmed(), forward)
        } else {
            format!("{}\n", forward)
        }
    }

    /// Confirmation page shown after a successful submission
    pub fn confirmation() -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Request Received"));
        output.push_str(&format!(
            "{}\n\n",
            "Thank You for Your Request!".green().bold()
        ));
        output.push_str(
            "We've received your livestock hauling quote request and are preparing your quote.\n",
        );
        output.push_str(&Self::footer());
        output
    }

    fn header(title: &str) -> String {
        format!(
            "\n{}\n{}\n{}\n",
            "═".repeat(50).cyan(),
            title.cyan().bold(),
            "═".repeat(50).cyan()
        )
    }

    fn footer() -> String {
        format!("\n{}\n", "═".repeat(50).cyan())
    }
}
