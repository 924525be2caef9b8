//! Input helpers shared by the command runners.

pub mod line_reader;
