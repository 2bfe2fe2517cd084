/**
 * Running a quiz: asking each question in turn, collecting valid answers and keeping
 * score.
 */
use std::collections::VecDeque;
use std::io;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use super::common::{QuizError, Result, TakeOptions};
use super::iohelper::MyReadline;
use super::parser::parse_answer;
use super::question::Question;
use super::ui::CmdUI;


/// Represents an entire quiz that has not been taken yet. Taking it consumes it, so a
/// quiz can only be run once.
#[derive(Debug)]
pub struct Quiz {
    questions: Vec<Question>,
    options: TakeOptions,
}


/// The mutable state of a quiz while it is being taken.
#[derive(Debug)]
pub struct QuizState {
    remaining: VecDeque<Question>,
    total: usize,
    total_correct: usize,
    per_question: Vec<QuestionResult>,
}


/// Represents the result of answering a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    pub prompt: String,
    /// The line of input that was accepted as the answer.
    pub response: String,
    /// The text of the option that was chosen.
    pub selected: String,
    /// The text of the correct option.
    pub answer: String,
    pub correct: bool,
    /// How many lines of input were rejected before a valid answer was given.
    pub rejected: usize,
}


/// Represents the results of taking a quiz.
#[derive(Debug, Clone)]
pub struct QuizResult {
    pub total: usize,
    pub total_correct: usize,
    pub total_incorrect: usize,
    /// Percentage of questions answered correctly, from 0 to 100.
    pub percentage: f64,
    pub tier: Tier,
    pub per_question: Vec<QuestionResult>,
}


/// The band that a final percentage falls into, which determines the closing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Perfect,
    Good,
    KeepLearning,
}


impl Quiz {
    /// Return a new quiz, or `QuizError::EmptyQuiz` if there are no questions.
    pub fn new(questions: Vec<Question>, options: TakeOptions) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }
        Ok(Quiz { questions, options })
    }

    /// Take the quiz, reading answers from `reader` and drawing every shuffle from
    /// `rng`. Invalid answers are reported through `ui` and asked for again until a
    /// valid one is given.
    ///
    /// Returns an error without a result if the reader runs out of input or is
    /// interrupted before the last question is answered.
    pub fn take<W, R, G>(
        self, ui: &mut CmdUI<W>, reader: &mut R, rng: &mut G
    ) -> Result<QuizResult>
    where
        W: io::Write,
        R: MyReadline,
        G: Rng + ?Sized,
    {
        let Quiz { questions, options } = self;
        info!(
            "starting quiz with {} questions (shuffle questions: {}, shuffle options: {})",
            questions.len(),
            options.shuffle_questions,
            options.shuffle_options,
        );
        let mut state = QuizState::start(questions, options.shuffle_questions, rng);

        ui.welcome(&options.title)?;
        while let Some(question) = state.next_question() {
            let number = state.asked() + 1;
            let result = ask(&question, number, options.shuffle_options, ui, reader, rng)?;
            state.record(result);
        }

        let results = state.finish()?;
        info!(
            "quiz finished: {} out of {} ({:.2}%)",
            results.total_correct, results.total, results.percentage,
        );
        ui.results(&results)?;
        Ok(results)
    }
}


impl QuizState {
    fn start<G: Rng + ?Sized>(mut questions: Vec<Question>, shuffle: bool, rng: &mut G) -> Self {
        if shuffle {
            questions.shuffle(rng);
        }
        QuizState {
            total: questions.len(),
            remaining: questions.into(),
            total_correct: 0,
            per_question: Vec::new(),
        }
    }

    fn next_question(&mut self) -> Option<Question> {
        self.remaining.pop_front()
    }

    fn asked(&self) -> usize {
        self.per_question.len()
    }

    fn record(&mut self, result: QuestionResult) {
        if result.correct {
            self.total_correct += 1;
        }
        self.per_question.push(result);
    }

    fn finish(self) -> Result<QuizResult> {
        QuizResult::new(self.total_correct, self.total, self.per_question)
    }
}


/// Ask a single question until a valid answer is given, and return the result.
fn ask<W, R, G>(
    question: &Question, number: usize, shuffle: bool, ui: &mut CmdUI<W>, reader: &mut R,
    rng: &mut G
) -> Result<QuestionResult>
where
    W: io::Write,
    R: MyReadline,
    G: Rng + ?Sized,
{
    let presented = question.present(rng, shuffle);
    ui.question(number, question.prompt())?;
    ui.choices(presented.options())?;

    let mut rejected = 0;
    loop {
        let response = ui.prompt(reader)?;
        match parse_answer(&response, presented.len()) {
            Ok(index) => {
                let correct = index == presented.correct_index();
                if correct {
                    ui.correct()?;
                } else {
                    ui.incorrect(presented.correct_index(), presented.correct_option())?;
                }
                return Ok(QuestionResult {
                    prompt: question.prompt().to_string(),
                    response: response.trim().to_string(),
                    selected: presented.options()[index].clone(),
                    answer: presented.correct_option().to_string(),
                    correct,
                    rejected,
                });
            },
            Err(rejection) => {
                debug!("rejected answer {:?} ({})", response, rejection.code());
                rejected += 1;
                ui.rejected(&rejection)?;
            },
        }
    }
}


impl QuizResult {
    /// Compute the summary for `total_correct` correct answers out of `total` questions.
    /// A run with no questions has no percentage and is an `EmptyQuiz` error.
    pub(crate) fn new(
        total_correct: usize, total: usize, per_question: Vec<QuestionResult>
    ) -> Result<Self> {
        if total == 0 {
            return Err(QuizError::EmptyQuiz);
        }
        let total_correct = total_correct.min(total);
        let percentage = 100.0 * (total_correct as f64) / (total as f64);
        Ok(QuizResult {
            total,
            total_correct,
            total_incorrect: total - total_correct,
            percentage,
            tier: Tier::from_percentage(percentage),
            per_question,
        })
    }
}


impl Tier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage == 100.0 {
            Tier::Perfect
        } else if percentage >= 70.0 {
            Tier::Good
        } else {
            Tier::KeepLearning
        }
    }

    pub fn message(&self) -> &'static str {
        match *self {
            Tier::Perfect => "Excellent! You got all questions right. 🎉",
            Tier::Good => "Good job! Keep practicing. 👍",
            Tier::KeepLearning => "Keep learning, practice makes perfect. 💪",
        }
    }
}
