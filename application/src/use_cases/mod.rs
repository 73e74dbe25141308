//! Use cases (application services)

pub mod initialize;
pub mod plan;
