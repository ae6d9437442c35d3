//! External type-checker abstraction.

pub mod cli;
pub mod mock;
pub mod traits;

pub use cli::{CliChecker, CliCheckerConfig};
pub use mock::{MockChecker, MockCheckerConfig};
pub use traits::{CheckOutput, Checker};
