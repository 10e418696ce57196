mod prompt;

pub use prompt::{confirm, input, input_optional, input_with_initial};
