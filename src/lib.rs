pub mod calculator;
pub mod config;
pub mod keypad;

pub use calculator::{EvaluationService, evaluate};
