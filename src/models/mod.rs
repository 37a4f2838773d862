pub mod calculation;
pub mod input;

pub use calculation::{CalcFailure, CalcOutcome, Calculation, FailureKind};
pub use input::{CalcInput, InputError};
