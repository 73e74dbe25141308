//! Progress display for loading passes

pub mod reporter;
