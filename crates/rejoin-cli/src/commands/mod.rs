pub mod dump;
pub mod join;

mod pattern_input;
