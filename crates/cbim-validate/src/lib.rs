//! Consistency validation for the CBIM ontology bundle.
//!
//! The checks in [`checks`] are the core of the validator: pure functions
//! over already-loaded module trees that compare values stated in more
//! than one independently-authored document. [`engine`] wires loading,
//! the optional schema stage and the rule set into one run.

pub mod checks;
mod engine;
mod schema;

pub use engine::{RunOptions, RunReport, Stage, run, run_with_reference};
pub use schema::dotted_instance_path;
