//! Core data model types for mathdrill.
//!
//! These are the value types the engine, the report renderers and the CLI
//! share: the arithmetic operation, a single problem, and the configuration
//! a session is started with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four arithmetic operations a session can drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// All operations, in menu order.
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// The symbol shown between the two numbers of a question.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition => write!(f, "addition"),
            Operation::Subtraction => write!(f, "subtraction"),
            Operation::Multiplication => write!(f, "multiplication"),
            Operation::Division => write!(f, "division"),
        }
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "addition" | "add" | "+" => Ok(Operation::Addition),
            "subtraction" | "sub" | "-" => Ok(Operation::Subtraction),
            "multiplication" | "mul" | "x" | "*" | "×" => Ok(Operation::Multiplication),
            "division" | "div" | "/" | "÷" => Ok(Operation::Division),
            other => Err(format!("unknown operation: {other}")),
        }
    }
}

/// One arithmetic fact: an ordered operand pair plus its operation.
///
/// Subtraction and division are framed as the inverse of the matching
/// addition and multiplication facts, so every question has a whole,
/// non-negative answer:
///
/// | operation      | question         | answer |
/// |----------------|------------------|--------|
/// | Addition       | `a + b = `       | a + b  |
/// | Subtraction    | `(a + b) - a = ` | b      |
/// | Multiplication | `a × b = `       | a × b  |
/// | Division       | `(a × b) ÷ b = ` | a      |
///
/// Ordering follows generation order: first operand, then second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProblemSpec {
    pub operation: Operation,
    pub operand_a: u32,
    pub operand_b: u32,
}

impl ProblemSpec {
    pub fn new(operation: Operation, operand_a: u32, operand_b: u32) -> Self {
        Self {
            operation,
            operand_a,
            operand_b,
        }
    }

    /// The two numbers shown to the learner, left to right.
    pub fn shown_operands(&self) -> (i64, i64) {
        let a = i64::from(self.operand_a);
        let b = i64::from(self.operand_b);
        match self.operation {
            Operation::Addition | Operation::Multiplication => (a, b),
            Operation::Subtraction => (a + b, a),
            Operation::Division => (a * b, b),
        }
    }

    /// The arithmetically correct answer.
    pub fn answer(&self) -> i64 {
        let a = i64::from(self.operand_a);
        let b = i64::from(self.operand_b);
        match self.operation {
            Operation::Addition => a + b,
            Operation::Subtraction => b,
            Operation::Multiplication => a * b,
            Operation::Division => a,
        }
    }

    /// Whether `given` is the correct answer to this problem.
    pub fn is_correct(&self, given: i64) -> bool {
        self.answer() == given
    }

    /// Question text as presented, e.g. `"3 + 4 = "`.
    pub fn question(&self) -> String {
        format!("{self} = ")
    }
}

impl fmt::Display for ProblemSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = self.shown_operands();
        write!(f, "{left} {} {right}", self.operation.symbol())
    }
}

/// How the scheduler orders the unmastered problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionOrder {
    /// Each presentation draws uniformly from the unmastered pool.
    #[default]
    Random,
    /// The unmastered pool is shuffled into rounds; a new round is shuffled
    /// from whatever is still unmastered once the current one runs out.
    Shuffled,
    /// Problems are presented in generation order.
    Sequential,
}

impl fmt::Display for SelectionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionOrder::Random => write!(f, "random"),
            SelectionOrder::Shuffled => write!(f, "shuffled"),
            SelectionOrder::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for SelectionOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(SelectionOrder::Random),
            "shuffled" | "shuffle" => Ok(SelectionOrder::Shuffled),
            "sequential" | "in-order" => Ok(SelectionOrder::Sequential),
            other => Err(format!("unknown selection order: {other}")),
        }
    }
}

/// Everything needed to start a session. Copied into the session at start
/// and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub operation: Operation,
    pub min_value: i64,
    pub max_value: i64,
    /// A problem is mastered only when its latest answer is faster than this.
    pub mastery_threshold_secs: f64,
    #[serde(default)]
    pub order: SelectionOrder,
    /// Seed for the selection RNG. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn new(
        operation: Operation,
        min_value: i64,
        max_value: i64,
        mastery_threshold_secs: f64,
    ) -> Self {
        Self {
            operation,
            min_value,
            max_value,
            mastery_threshold_secs,
            order: SelectionOrder::default(),
            seed: None,
        }
    }

    pub fn with_order(mut self, order: SelectionOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Operation::Addition, 0, 12, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_display_and_parse() {
        assert_eq!(Operation::Addition.to_string(), "addition");
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Addition);
        assert_eq!("SUB".parse::<Operation>().unwrap(), Operation::Subtraction);
        assert_eq!("×".parse::<Operation>().unwrap(), Operation::Multiplication);
        assert_eq!("div".parse::<Operation>().unwrap(), Operation::Division);
        assert!("modulo".parse::<Operation>().is_err());
    }

    #[test]
    fn question_framing() {
        let add = ProblemSpec::new(Operation::Addition, 3, 4);
        assert_eq!(add.question(), "3 + 4 = ");
        assert_eq!(add.answer(), 7);

        let sub = ProblemSpec::new(Operation::Subtraction, 3, 4);
        assert_eq!(sub.question(), "7 - 3 = ");
        assert_eq!(sub.answer(), 4);

        let mul = ProblemSpec::new(Operation::Multiplication, 3, 4);
        assert_eq!(mul.question(), "3 × 4 = ");
        assert_eq!(mul.answer(), 12);

        let div = ProblemSpec::new(Operation::Division, 3, 4);
        assert_eq!(div.question(), "12 ÷ 4 = ");
        assert_eq!(div.answer(), 3);
    }

    #[test]
    fn ordered_pairs_are_distinct() {
        let a = ProblemSpec::new(Operation::Addition, 3, 4);
        let b = ProblemSpec::new(Operation::Addition, 4, 3);
        assert_ne!(a, b);
        assert_eq!(a.answer(), b.answer());
    }

    #[test]
    fn is_correct_compares_answer() {
        let p = ProblemSpec::new(Operation::Multiplication, 6, 7);
        assert!(p.is_correct(42));
        assert!(!p.is_correct(41));
    }

    #[test]
    fn selection_order_parse() {
        assert_eq!(
            "shuffled".parse::<SelectionOrder>().unwrap(),
            SelectionOrder::Shuffled
        );
        assert_eq!(SelectionOrder::default(), SelectionOrder::Random);
        assert!("backwards".parse::<SelectionOrder>().is_err());
    }

    #[test]
    fn session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.min_value, 0);
        assert_eq!(config.max_value, 12);
        assert_eq!(config.mastery_threshold_secs, 5.0);
        assert!(config.seed.is_none());
    }
}
