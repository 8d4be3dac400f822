use crate::model::fluent::Fluent;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error struct for the planning model.
/// Carries a message and the chain of contexts it went through, so that a
/// failure during problem construction points back to the constructor that
/// rejected the input.
/// # Note:
/// The first argument of each constructor is supposed to be an explanation of
/// where the error occurred. It can be the name of the function.
#[derive(Debug, Clone, Default)]
pub struct PlanningError {
    backtrace: Vec<String>,
    message: String,
}

impl PlanningError {
    pub fn new(context: impl Display, message: impl Display) -> Self {
        Self {
            backtrace: vec![context.to_string()],
            message: message.to_string(),
        }
    }

    pub fn get_message(&self) -> &str {
        &self.message
    }

    pub fn chain(mut self, context: impl Display) -> Self {
        self.backtrace.push(context.to_string());
        self
    }

    pub fn duplicate_fluent(context: impl Display, fluent: &Fluent) -> Self {
        Self {
            backtrace: vec![context.to_string()],
            message: format!("Duplicate fluent: {} appears twice in the vocabulary.", fluent),
        }
    }

    pub fn unknown_fluent(context: impl Display, fluent: &Fluent) -> Self {
        Self {
            backtrace: vec![context.to_string()],
            message: format!("Unknown fluent: {} is not part of the vocabulary.", fluent),
        }
    }
}

impl Error for PlanningError {}

impl Display for PlanningError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        writeln!(f, "message:\n{}", self.message)?;
        writeln!(f, "\nbacktrace:")?;
        for a in &self.backtrace {
            writeln!(f, "- from {}", a)?;
        }
        Ok(())
    }
}

impl From<anyhow::Error> for PlanningError {
    fn from(a: anyhow::Error) -> Self {
        Self {
            backtrace: vec!["anyhow".to_string()],
            message: format!("{:?}", a),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanningError>;
