/**
 * Multiple-choice questions and the randomized presentation of their options.
 */
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::common::{QuizError, Result};


/// Represents a multiple-choice question. The options and the correct answer are
/// fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    /// Zero-based index into `options`.
    correct_index: usize,
}


/// The options of a question in the order they are shown for one asking, along with
/// the position of the correct option in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedOptions {
    options: Vec<String>,
    correct_index: usize,
}


impl Question {
    /// Return a new question, or `QuizError::InvalidQuestion` if there are fewer than
    /// two options or `correct_index` does not refer to one of them.
    pub fn new<S: Into<String>>(
        prompt: S, options: Vec<String>, correct_index: usize
    ) -> Result<Self> {
        let prompt = prompt.into();
        if options.len() < 2 {
            return Err(QuizError::InvalidQuestion {
                prompt,
                reason: String::from("must provide at least two options"),
            });
        }
        if correct_index >= options.len() {
            return Err(QuizError::InvalidQuestion {
                prompt,
                reason: format!(
                    "correct index {} out of bounds for {} options",
                    correct_index,
                    options.len(),
                ),
            });
        }
        Ok(Question { prompt, options, correct_index })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Return the options to show for one asking of the question. If `shuffle` is
    /// `false` they are returned in their original order; otherwise they are put in a
    /// uniformly random order drawn from `rng` and the correct index is moved along
    /// with the correct option.
    pub fn present<R: Rng + ?Sized>(&self, rng: &mut R, shuffle: bool) -> PresentedOptions {
        if !shuffle {
            return PresentedOptions {
                options: self.options.clone(),
                correct_index: self.correct_index,
            };
        }

        // Each option travels with its original position so that the correct one can
        // be found again after shuffling.
        let mut paired: Vec<(usize, &String)> = self.options.iter().enumerate().collect();
        paired.shuffle(rng);
        debug!(
            "shuffled options of {:?}: {:?}",
            self.prompt,
            paired.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
        );
        PresentedOptions::from_pairs(&paired, self.correct_index)
    }
}


impl PresentedOptions {
    /// Build a presentation from options paired with their original positions, in the
    /// order they are to be shown.
    fn from_pairs(paired: &[(usize, &String)], original_correct: usize) -> Self {
        let mut options = Vec::with_capacity(paired.len());
        let mut correct_index = 0;
        for (position, (original, option)) in paired.iter().enumerate() {
            options.push((*option).clone());
            if *original == original_correct {
                correct_index = position;
            }
        }
        PresentedOptions { options, correct_index }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}
