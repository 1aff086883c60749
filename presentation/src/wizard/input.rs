//! Interpreting one line typed at a field prompt

use haul_domain::{Field, Species, Timeline};

/// Slash commands accepted at any prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Back,
    Help,
    Quit,
    Unknown(String),
}

/// What a typed line means for the field being prompted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Value(String),
}

/// Parse a prompt line for `field`
pub fn parse_line(field: Field, line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.starts_with('/') {
        let command = match trimmed {
            "/back" | "/b" => Command::Back,
            "/help" | "/h" | "/?" => Command::Help,
            "/quit" | "/exit" | "/q" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        };
        return Input::Command(command);
    }
    Input::Value(resolve_value(field, line))
}

/// Turn raw input into the value stored for `field`.
///
/// Picker fields accept a 1-based choice number as well as the label.
/// Length-limited fields keep only their first characters.
pub fn resolve_value(field: Field, raw: &str) -> String {
    if field.is_choice() {
        let trimmed = raw.trim();
        return choice_by_number(field, trimmed)
            .map(str::to_string)
            .unwrap_or_else(|| trimmed.to_string());
    }

    match field.max_length() {
        Some(max) => raw.trim().chars().take(max).collect(),
        None => raw.to_string(),
    }
}

fn choice_by_number(field: Field, input: &str) -> Option<&'static str> {
    let index = input.parse::<usize>().ok()?.checked_sub(1)?;
    match field {
        Field::Species => Species::all().get(index).map(|s| s.as_str()),
        Field::Timeline => Timeline::all().get(index).map(|t| t.as_str()),
        _ => None,
    }
}
