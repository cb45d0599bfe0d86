mod generator;

#[cfg(test)]
mod tests;

pub use generator::{Question, QuestionGenerator, QuestionSource, TargetPolicy};
