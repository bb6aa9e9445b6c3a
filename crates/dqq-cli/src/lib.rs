//! Library components for the DQQ command-line tool.

pub mod input;
pub mod logging;
