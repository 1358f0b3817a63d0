use std::io::{BufRead, Write};

use super::command::MenuChoice;
use super::console::Console;
use super::ops::{list_all, search_by_cast, search_by_keyword};
use super::util::{
    CHOICE_PROMPT, CONNECTED, CONNECT_FAILED, EXITING, INVALID_OPTION, MENU, PASSWORD_PROMPT,
    USER_ID_PROMPT,
};
use crate::connection::Credentials;
use crate::errors::ShellError;
use crate::store::{MovieStore, VerifiedStore, connect_and_verify};
use zeroize::Zeroizing;

/// How the secret is read at the second prompt.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum SecretInput {
    /// Read from the console like any other line; typed characters are echoed.
    #[default]
    Echo,
    /// Read from the terminal without echo.
    Hidden,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SessionOutcome {
    /// The user picked Exit, or input ended at the menu.
    Exited,
    /// Connecting or the probe failed; the menu was never shown.
    ConnectFailed,
}

/// Prompt for user id and secret. End of input yields empty strings.
///
/// # Errors
/// Propagates console failures.
pub fn read_credentials<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    secret_input: SecretInput,
) -> Result<Credentials, ShellError> {
    let user_id = console.prompt_or_empty(USER_ID_PROMPT)?;
    let secret = match secret_input {
        SecretInput::Echo => console.prompt_secret(PASSWORD_PROMPT)?,
        SecretInput::Hidden => Zeroizing::new(rpassword::prompt_password(PASSWORD_PROMPT)?),
    };
    Ok(Credentials::new(&user_id, &secret))
}

/// Show the menu and dispatch until Exit.
///
/// # Errors
/// Query failures end the loop and are returned to the caller.
pub fn run_menu<R, W, S>(console: &mut Console<R, W>, store: &VerifiedStore<S>) -> Result<(), ShellError>
where
    R: BufRead,
    W: Write,
    S: MovieStore,
{
    loop {
        console.say(MENU)?;
        let Some(line) = console.prompt(CHOICE_PROMPT)? else {
            log::info!("end of input at menu");
            console.say(EXITING)?;
            return Ok(());
        };
        match MenuChoice::parse(&line) {
            MenuChoice::ListAll => list_all(console, store)?,
            MenuChoice::SearchByCast => search_by_cast(console, store)?,
            MenuChoice::SearchByKeyword => search_by_keyword(console, store)?,
            MenuChoice::Exit => {
                console.say(EXITING)?;
                return Ok(());
            }
            MenuChoice::Invalid => console.say(INVALID_OPTION)?,
        }
    }
}

/// Full session: credentials, connect, probe, then the menu.
///
/// `connect` opens the store for the typed credentials. Any failure there or in
/// the probe prints the failure message with the underlying error and returns
/// [`SessionOutcome::ConnectFailed`] without querying.
///
/// # Errors
/// Console failures, and query failures raised from the menu.
pub fn run_session<R, W, S, C>(
    console: &mut Console<R, W>,
    secret_input: SecretInput,
    connect: C,
) -> Result<SessionOutcome, ShellError>
where
    R: BufRead,
    W: Write,
    S: MovieStore,
    C: FnOnce(&Credentials) -> Result<S, ShellError>,
{
    let verified = {
        let credentials = read_credentials(console, secret_input)?;
        connect(&credentials).and_then(connect_and_verify)
    };
    let store = match verified {
        Ok(store) => store,
        Err(e) => {
            log::error!("startup failed: {e}");
            console.say(CONNECT_FAILED)?;
            console.say(&format!("Error: {e}"))?;
            return Ok(SessionOutcome::ConnectFailed);
        }
    };
    console.say(CONNECTED)?;
    run_menu(console, &store)?;
    Ok(SessionOutcome::Exited)
}
