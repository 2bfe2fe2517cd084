/**
 * The command-line user interface for taking quizzes.
 */
use std::io;

use colored::*;

use super::common::{QuizError, Result};
use super::iohelper::{prettyprint, prettyprint_colored, MyReadline};
use super::parser::{option_letter, Rejection};
use super::quiz::{QuizResult, Tier};


const RULE: &str = "-----------------------------------------------------------";
const ANSWER_PROMPT: &str = "Your answer: ";


pub struct CmdUI<W> {
    writer: W,
}


impl<W: io::Write> CmdUI<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the interface and return whatever it was writing to.
    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn welcome(&mut self, title: &str) -> Result<()> {
        let banner = format!("Welcome to the {}!", title);
        my_writeln!(self.writer, "{}", banner.bright_blue())?;
        my_writeln!(
            self.writer, "Answer by typing the option number or letter (e.g., 1 or A)."
        )?;
        my_writeln!(self.writer, "{}", RULE)
    }

    pub fn question(&mut self, number: usize, prompt: &str) -> Result<()> {
        my_write!(self.writer, "\n")?;
        let prefix = format!("Q{}. ", number);
        prettyprint_colored(&mut self.writer, prompt, Some(&prefix), None, Some(Color::Cyan))
    }

    pub fn choices(&mut self, choices: &[String]) -> Result<()> {
        for (i, choice) in choices.iter().enumerate() {
            let prefix = format!("  {}. ", option_letter(i));
            prettyprint(&mut self.writer, choice, Some(&prefix))?;
        }
        Ok(())
    }

    /// Ask for one line of input. Readers that do not display the prompt themselves
    /// get it written here. Everything written so far is flushed first so the question
    /// is visible before blocking on the reader.
    pub fn prompt<R: MyReadline>(&mut self, reader: &mut R) -> Result<String> {
        if !reader.shows_prompt() {
            my_write!(self.writer, "{}", ANSWER_PROMPT)?;
        }
        self.writer.flush().map_err(QuizError::Io)?;
        reader.read_line(ANSWER_PROMPT)
    }

    pub fn rejected(&mut self, rejection: &Rejection) -> Result<()> {
        my_writeln!(self.writer, "{}", rejection.to_string().yellow())
    }

    pub fn correct(&mut self) -> Result<()> {
        my_writeln!(self.writer, "{}", "Correct! ✅".green())
    }

    pub fn incorrect(&mut self, correct_index: usize, correction: &str) -> Result<()> {
        let message = format!(
            "{}   Correct answer: {}. {}",
            "Wrong ❌".red(),
            option_letter(correct_index),
            correction.green(),
        );
        my_writeln!(self.writer, "{}", message)
    }

    pub fn results(&mut self, results: &QuizResult) -> Result<()> {
        my_write!(self.writer, "\n")?;
        my_writeln!(self.writer, "{}", RULE)?;
        my_writeln!(self.writer, "Quiz finished!")?;
        my_writeln!(
            self.writer,
            "Your score: {} out of {}",
            format!("{}", results.total_correct).cyan(),
            format!("{}", results.total).cyan(),
        )?;
        my_writeln!(
            self.writer, "Percentage: {}", format!("{:.2}%", results.percentage).cyan()
        )?;

        let message = results.tier.message();
        let message = match results.tier {
            Tier::Perfect => message.bright_green(),
            Tier::Good => message.green(),
            Tier::KeepLearning => message.yellow(),
        };
        my_writeln!(self.writer, "{}", message)?;
        self.writer.flush().map_err(QuizError::Io)
    }
}
