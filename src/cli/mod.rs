//! Command-line interface: arguments and credential prompting.

pub mod args;
pub mod prompt;

pub use args::Args;
pub use prompt::prompt_credentials;
