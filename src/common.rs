/**
 * Definitions of data structures used by several modules, such as `QuizError` and the
 * options that configure a run of the quiz.
 */
use std::error;
use std::fmt;
use std::io;


pub type Result<T> = ::std::result::Result<T, QuizError>;


#[derive(Debug)]
pub enum QuizError {
    /// For when a question is built from malformed data, e.g. too few options.
    InvalidQuestion { prompt: String, reason: String },
    /// For JSON errors in the built-in question set.
    Json(serde_json::Error),
    Io(io::Error),
    ReadlineInterrupted,
    ReadlineEof,
    ReadlineOther,
    EmptyQuiz,
}


impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuizError::InvalidQuestion { ref prompt, ref reason } => {
                write!(f, "invalid question '{}' ({})", prompt, reason)
            },
            QuizError::Json(ref err) => {
                write!(f, "could not parse JSON ({})", err)
            },
            QuizError::Io(ref err) => {
                write!(f, "IO error ({})", err)
            },
            QuizError::EmptyQuiz => {
                write!(f, "no questions found")
            },
            QuizError::ReadlineInterrupted => {
                write!(f, "quiz interrupted")
            },
            QuizError::ReadlineEof => {
                write!(f, "input ended before the quiz was finished")
            },
            QuizError::ReadlineOther => {
                write!(f, "error while reading input")
            },
        }
    }
}


impl error::Error for QuizError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            QuizError::Json(ref err) => Some(err),
            QuizError::Io(ref err) => Some(err),
            _ => None,
        }
    }
}


impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Json(err)
    }
}


pub fn is_broken_pipe(e: &QuizError) -> bool {
    if let QuizError::Io(e) = e {
        if let io::ErrorKind::BrokenPipe = e.kind() {
            return true;
        }
    }
    false
}


/// Holds the configuration for one run of the quiz.
#[derive(Debug, Clone)]
pub struct TakeOptions {
    /// Title shown in the welcome banner.
    pub title: String,
    /// Ask the questions in a random order instead of the order they were given in.
    pub shuffle_questions: bool,
    /// Show the options of each question in a random order.
    pub shuffle_options: bool,
}


impl TakeOptions {
    /// Options for asking every question as written, in order.
    pub fn in_order() -> Self {
        TakeOptions { shuffle_questions: false, shuffle_options: false, ..Self::default() }
    }
}


impl Default for TakeOptions {
    fn default() -> Self {
        TakeOptions {
            title: String::from("Java Developer Quiz"),
            shuffle_questions: true,
            shuffle_options: true,
        }
    }
}
