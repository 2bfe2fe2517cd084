/**
 * A multiple-choice quiz that runs in the terminal.
 *
 * Questions are asked one at a time, optionally in a random order and with their
 * options shuffled. Answers are given by option number or letter, and a score with a
 * closing message is reported at the end.
 */
#[macro_use]
pub mod iohelper;
pub mod common;
pub mod parser;
pub mod question;
pub mod quiz;
pub mod seed;
pub mod ui;
