//! Command implementations

pub mod analyze;
pub mod evaluate;
pub mod simulate;
pub mod solve;

pub use analyze::{AnalysisResult, FrequencyRow, analyze_words};
pub use evaluate::{EvaluationReport, WordResult, evaluate_all};
pub use simulate::{RoundRecord, SimulationReport, Simulator};
pub use solve::{SolveResult, solve_word};
