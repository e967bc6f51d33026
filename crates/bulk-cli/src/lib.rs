//! Library side of the `bulk-import` command.

pub mod logging;
pub mod pipeline;
pub mod profile;
