mod fetch;
mod run_program;

pub use fetch::Fetch;
#[cfg(test)]
pub use fetch::MockFetch;
pub use run_program::{RunProgram, TokioRunner};
#[cfg(test)]
pub use run_program::MockRunProgram;
