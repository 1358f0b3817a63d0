//! Interactive console session.

mod command;
mod console;
mod ops;
mod runner;
mod util;

pub use command::MenuChoice;
pub use console::Console;
pub use ops::{list_all, search_by_cast, search_by_keyword};
pub use runner::{SecretInput, SessionOutcome, read_credentials, run_menu, run_session};
pub use util::{INVALID_INPUT, INVALID_OPTION, MENU};
