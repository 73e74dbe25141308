//! Output formatting for resolutions, plans and load reports

pub mod console;
pub mod formatter;
pub mod json;
