/**
 * The built-in question set, embedded in the binary as JSON.
 */
use serde::Deserialize;

use super::common::Result;
use super::question::Question;


const JAVA_QUIZ: &str = include_str!("../data/java_quiz.json");


#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QuizDocument {
    questions: Vec<QuestionEntry>,
}


#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionEntry {
    prompt: String,
    options: Vec<String>,
    /// Zero-based index of the correct option.
    correct: usize,
}


/// Return the built-in questions about Java.
pub fn default_questions() -> Result<Vec<Question>> {
    load_questions_from_json(JAVA_QUIZ)
}


/// Decode a quiz document and validate every question in it. The first malformed
/// question aborts loading.
pub fn load_questions_from_json(data: &str) -> Result<Vec<Question>> {
    let document: QuizDocument = serde_json::from_str(data)?;
    document.questions.into_iter()
        .map(|entry| Question::new(entry.prompt, entry.options, entry.correct))
        .collect()
}
