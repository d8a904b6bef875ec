//! Command implementations

mod plan;
mod run;

pub use plan::cmd_plan;
pub use run::cmd_run;
