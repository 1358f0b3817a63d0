use std::io::{BufRead, Write};

use super::console::Console;
use super::util::{CAST_PROMPT, INVALID_INPUT, KEYWORD_PROMPT, SEPARATOR};
use crate::document::MovieView;
use crate::errors::ShellError;
use crate::query::{Filter, QueryKind};
use crate::store::{MovieStore, VerifiedStore};

/// Print every movie with its cast.
///
/// # Errors
/// Propagates query and console failures.
pub fn list_all<R, W, S>(console: &mut Console<R, W>, store: &VerifiedStore<S>) -> Result<(), ShellError>
where
    R: BufRead,
    W: Write,
    S: MovieStore,
{
    let movies = store.find(QueryKind::ListAll, &Filter::all())?;
    if movies.is_empty() {
        console.say("\nNo movies found in the database!")?;
        return Ok(());
    }

    console.say("\n=== Movie List ===")?;
    for doc in &movies {
        let movie = MovieView::new(doc);
        console.say(&format!("🎬 Movie: {}", movie.title()))?;
        match movie.cast_names() {
            Some(names) => {
                console.say("👥 Cast:")?;
                for name in names {
                    console.say(&format!("   🎭 {name}"))?;
                }
            }
            None => console.say("👥 No cast available.")?,
        }
        console.say(SEPARATOR)?;
    }
    Ok(())
}

/// Ask for a cast member and print the titles they appear in.
///
/// # Errors
/// Propagates query and console failures.
pub fn search_by_cast<R, W, S>(
    console: &mut Console<R, W>,
    store: &VerifiedStore<S>,
) -> Result<(), ShellError>
where
    R: BufRead,
    W: Write,
    S: MovieStore,
{
    let name = console.prompt_or_empty(CAST_PROMPT)?;
    if name.is_empty() {
        console.say(INVALID_INPUT)?;
        return Ok(());
    }

    let movies = store.find(QueryKind::ByCast, &Filter::cast_member(&name))?;
    if movies.is_empty() {
        console.say(&format!("\n❌ No movies found featuring {name}."))?;
        return Ok(());
    }

    console.say(&format!("\n🎭 Movies featuring {name}:"))?;
    for doc in &movies {
        console.say(&format!("- {}", MovieView::new(doc).title()))?;
    }
    Ok(())
}

/// Ask for a keyword and print title and overview of every movie whose overview mentions it.
///
/// # Errors
/// Propagates query and console failures.
pub fn search_by_keyword<R, W, S>(
    console: &mut Console<R, W>,
    store: &VerifiedStore<S>,
) -> Result<(), ShellError>
where
    R: BufRead,
    W: Write,
    S: MovieStore,
{
    let keyword = console.prompt_or_empty(KEYWORD_PROMPT)?;
    if keyword.is_empty() {
        console.say(INVALID_INPUT)?;
        return Ok(());
    }

    let movies = store.find(QueryKind::ByKeyword, &Filter::overview_keyword(&keyword))?;
    if movies.is_empty() {
        console.say(&format!("\n❌ No movies found matching keyword '{keyword}'."))?;
        return Ok(());
    }

    console.say(&format!("\n🔍 Movies matching keyword '{keyword}':"))?;
    for doc in &movies {
        let movie = MovieView::new(doc);
        console.say(&format!("   🎬 {}: {}", movie.title(), movie.overview()))?;
    }
    Ok(())
}
