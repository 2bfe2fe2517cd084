/**
 * Parsing and validation of the answer typed for a multiple-choice question.
 *
 * An answer is either the number of an option (starting at 1) or its letter
 * (starting at A, in either case).
 */
use std::fmt;


/// Why a line of input was not accepted as an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    OutOfRangeNumber { option_count: usize },
    InvalidLetterOrFormat,
}


impl Rejection {
    /// A stable name for the kind of rejection, used in logs.
    pub fn code(&self) -> &'static str {
        match *self {
            Rejection::Empty => "empty",
            Rejection::OutOfRangeNumber { .. } => "out_of_range_number",
            Rejection::InvalidLetterOrFormat => "invalid_letter_or_format",
        }
    }
}


impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Rejection::Empty => {
                write!(f, "Please enter an option (e.g., A or 1).")
            },
            Rejection::OutOfRangeNumber { option_count } => {
                write!(f, "Enter a number between 1 and {}.", option_count)
            },
            Rejection::InvalidLetterOrFormat => {
                write!(f, "Invalid input. Try again with option letter (A) or number (1).")
            },
        }
    }
}


/// Parse `input` as the choice of one of `option_count` visible options and return
/// its zero-based index.
///
/// Surrounding whitespace is ignored. If the whole input is an integer it must be
/// between 1 and `option_count`; otherwise only its first character is considered,
/// which must be one of the visible option letters.
pub fn parse_answer(input: &str, option_count: usize) -> Result<usize, Rejection> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Rejection::Empty);
    }

    if let Ok(number) = input.parse::<i32>() {
        return if number >= 1 && (number as u64) <= option_count as u64 {
            Ok((number - 1) as usize)
        } else {
            Err(Rejection::OutOfRangeNumber { option_count })
        };
    }

    // `input` is non-empty, so there is a first character.
    let first = input.chars().next().unwrap_or(' ').to_ascii_uppercase();
    if first.is_ascii_uppercase() {
        let index = (first as u8 - b'A') as usize;
        if index < option_count {
            return Ok(index);
        }
    }
    Err(Rejection::InvalidLetterOrFormat)
}


/// Return the letter that labels the option at `index`.
pub fn option_letter(index: usize) -> char {
    std::char::from_u32('A' as u32 + index as u32).unwrap_or('?')
}
