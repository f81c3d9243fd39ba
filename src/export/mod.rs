//! Export subsystem
//!
//! Renders a sequence of analysis records as a delimited text report for
//! download. Export is a local rendering, not a network endpoint.

mod csv;

pub use csv::{to_delimited_text, CSV_HEADER};
