//! Where answers to prompts come from.

use crate::grade::AssignmentEntry;
use anyhow::{anyhow, Context, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Something that can answer a prompt with one line of text
pub trait InputProvider {
    /// Show `message` and return the answer, without its line ending
    fn prompt(&mut self, message: &str) -> Result<String>;
}

/// Reads answers from standard input
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputProvider for StdinInput {
    fn prompt(&mut self, message: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{message}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Err(anyhow!("Standard input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Answers prompts from a fixed list, in order
///
/// ```
/// use pacwalk::grade::input::{InputProvider, ScriptedInput};
///
/// let mut input = ScriptedInput::new(["summative", "10"]);
/// assert_eq!(input.prompt("type: ").unwrap(), "summative");
/// assert_eq!(input.prompt("earned: ").unwrap(), "10");
/// assert!(input.prompt("possible: ").is_err());
/// assert_eq!(input.prompts(), ["type: ", "earned: ", "possible: "]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Create a new ScriptedInput
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: vec![],
        }
    }

    /// Every prompt that has been shown so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputProvider for ScriptedInput {
    fn prompt(&mut self, message: &str) -> Result<String> {
        self.prompts.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("No scripted answer for prompt '{message}'"))
    }
}

/// Prompt for the new assignment type
pub const TYPE_PROMPT: &str = "Input: New assignment Type - summative or formative: ";
/// Prompt for points earned
pub const EARNED_PROMPT: &str = "Input: New Points Earned / Points Earned Prediction: ";
/// Prompt for points possible
pub const POSSIBLE_PROMPT: &str = "Input: New Points Possible / Points Possible Prediction: ";

fn prompt_points<I: InputProvider + ?Sized>(input: &mut I, message: &str) -> Result<u32> {
    let answer = input.prompt(message)?;
    answer
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a whole number of points", answer.trim()))
}

/// Ask for the type, points earned and points possible of a new assignment, in that order
pub fn read_assignment_entry<I: InputProvider + ?Sized>(input: &mut I) -> Result<AssignmentEntry> {
    let kind = input.prompt(TYPE_PROMPT)?.trim().to_string();
    let earned = prompt_points(input, EARNED_PROMPT)?;
    let possible = prompt_points(input, POSSIBLE_PROMPT)?;
    Ok(AssignmentEntry {
        kind,
        earned,
        possible,
    })
}
