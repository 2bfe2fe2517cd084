/**
 * Functional tests that run the compiled binary with answers piped to standard input.
 */
use std::io::Write;
use std::process::{Command, Output, Stdio};

use regex::Regex;

use consolequiz::seed;


#[test]
fn invalid_answers_are_asked_again() {
    let mut input = vec!["", "0", "9", "Z", "A"];
    input.extend(&["1"; 9]);
    let output = play(&input);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_in_order(
        &stdout,
        &[
            "Welcome to the Java Developer Quiz!",
            "Answer by typing the option number or letter (e.g., 1 or A).",
            "Q1. ",
            "Please enter an option (e.g., A or 1).",
            "Enter a number between 1 and 4.",
            "Enter a number between 1 and 4.",
            "Invalid input. Try again with option letter (A) or number (1).",
            "Q2. ",
            "Q10. ",
            "Quiz finished!",
            "Your score: ",
            "Percentage: ",
        ],
    );
    assert_eq!(stdout.matches("Q1. ").count(), 1);
    assert_eq!(stdout.matches("Your answer: ").count(), 14);
}

#[test]
fn piped_output_is_not_colored() {
    let output = play(&["a"; 10]);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    assert!(output.status.success());
    assert!(!stdout.contains('\u{1b}'), "escape codes in stdout: {:?}", stdout);
    assert!(stderr.is_empty(), "stderr: {:?}", stderr);
}

#[test]
fn summary_matches_feedback() {
    let output = play(&["b"; 10]);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(output.status.success());

    let correct = stdout.matches("Correct! ✅").count();
    let wrong = stdout.matches("Wrong ❌").count();
    assert_eq!(correct + wrong, 10);

    let score = Regex::new(r"Your score: (\d+) out of 10").unwrap();
    let captures = score.captures(&stdout).expect("missing score line");
    assert_eq!(captures[1].parse::<usize>().unwrap(), correct);

    let percentage = format!("Percentage: {:.2}%", 100.0 * (correct as f64) / 10.0);
    assert!(stdout.contains(&percentage), "missing {:?}", percentage);

    let message = if correct == 10 {
        "Excellent! You got all questions right."
    } else if correct >= 7 {
        "Good job! Keep practicing."
    } else {
        "Keep learning, practice makes perfect."
    };
    assert!(stdout.contains(message));
}

#[test]
fn corrections_name_the_right_option() {
    let questions = seed::default_questions().unwrap();
    let output = play(&["D"; 10]);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(output.status.success());

    let correction = Regex::new(r"Correct answer: ([A-D])\. (.+)").unwrap();
    for captures in correction.captures_iter(&stdout) {
        let text = captures[2].trim();
        assert!(
            questions.iter().any(|q| q.correct_option() == text),
            "{:?} is not the correct option of any question",
            text,
        );
        assert_ne!(&captures[1], "D");
    }
}

#[test]
fn running_out_of_input_is_an_error() {
    let output = play(&["A", "B"]);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Error: input ended before the quiz was finished"));
    assert!(stdout.contains("Q3. "));
    assert!(!stdout.contains("Quiz finished!"));
}

fn assert_in_order(stdout: &str, data: &[&str]) {
    let mut last_pos = 0;
    for datum in data {
        if let Some(pos) = stdout[last_pos..].find(datum) {
            last_pos = (pos + last_pos) + datum.len();
        } else {
            panic!("Missing: {:?}; Contents of stdout: {:?}", datum, stdout);
        }
    }
}

fn play(input: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_consolequiz"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("RUST_LOG")
        .spawn()
        .expect("Failed to spawn child process");

    {
        let stdin = child.stdin.as_mut().expect("Failed to open stdin");
        for line in input {
            stdin.write_all(line.as_bytes()).expect("Failed to write to stdin");
            stdin.write_all("\n".as_bytes()).expect("Failed to write to stdin");
        }
    }

    child.wait_with_output().expect("Failed to read stdout")
}
