/**
 * Take the built-in quiz from the command line.
 */
use std::io;
use std::io::IsTerminal;

use colored::*;
use log::info;
use rand::thread_rng;

use consolequiz::common::{is_broken_pipe, Result, TakeOptions};
use consolequiz::iohelper::PipedReader;
use consolequiz::quiz::Quiz;
use consolequiz::seed;
use consolequiz::ui::CmdUI;


fn main() {
    pretty_env_logger::init();

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = main_take() {
        if !is_broken_pipe(&e) {
            eprintln!("{}: {}", "Error".red(), e);
            ::std::process::exit(2);
        }
    }
}


/// Load the built-in questions and run the quiz over standard input and output.
fn main_take() -> Result<()> {
    let quiz = Quiz::new(seed::default_questions()?, TakeOptions::default())?;
    let mut ui = CmdUI::new(io::stdout());
    let mut rng = thread_rng();

    if io::stdin().is_terminal() {
        let mut editor = rustyline::Editor::<()>::new();
        quiz.take(&mut ui, &mut editor, &mut rng)?;
    } else {
        info!("standard input is not a terminal, reading answers line by line");
        let stdin = io::stdin();
        let mut reader = PipedReader::new(stdin.lock());
        quiz.take(&mut ui, &mut reader, &mut rng)?;
    }
    Ok(())
}
