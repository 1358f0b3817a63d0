mod common;

use bson::doc;
use common::{RecordingStore, run_script};
use movieshell::cli::{Console, INVALID_INPUT, INVALID_OPTION, MENU, SecretInput, SessionOutcome, run_session};
use movieshell::query::Filter;
use movieshell::{Credentials, MemoryStore, ShellError};

const LOGIN: &str = "instructor\nsecret\n";

fn script(lines: &[&str]) -> String {
    let mut s = LOGIN.to_string();
    for l in lines {
        s.push_str(l);
        s.push('\n');
    }
    s
}

#[test]
fn rejected_credentials_never_reach_the_menu() {
    let store = RecordingStore::rejecting("bad auth : authentication failed");
    let queries = store.queries.clone();
    let (outcome, out) = run_script(&script(&["1", "4"]), store);
    assert_eq!(outcome.unwrap(), SessionOutcome::ConnectFailed);
    assert!(out.contains("\n❌ Failed to connect to MongoDB. Check your credentials.\n"));
    assert!(out.contains("Error: bad auth : authentication failed\n"));
    assert!(!out.contains("Connected to MongoDB successfully"));
    assert!(!out.contains("=== MongoDB Movie Database ==="));
    assert!(queries.borrow().is_empty());
}

#[test]
fn connect_errors_take_the_same_failure_path() {
    let input = script(&["4"]);
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let outcome = run_session(&mut console, SecretInput::Echo, |_: &Credentials| {
        Err::<MemoryStore, _>(ShellError::Connect("DNS lookup failed".into()))
    })
    .unwrap();
    assert_eq!(outcome, SessionOutcome::ConnectFailed);
    let out = String::from_utf8(console.into_parts().1).unwrap();
    assert!(out.ends_with("Error: DNS lookup failed\n"), "{out}");
}

#[test]
fn credentials_are_trimmed_before_connecting() {
    let input = "  alice \n\tpw \n4\n";
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let mut seen = String::new();
    run_session(&mut console, SecretInput::Echo, |c: &Credentials| {
        seen = c.connection_string().to_string();
        Ok::<_, ShellError>(MemoryStore::default())
    })
    .unwrap();
    assert!(seen.starts_with("mongodb+srv://alice:pw@"), "{seen}");
}

#[test]
fn missing_credentials_become_empty_strings() {
    let mut console = Console::new("".as_bytes(), Vec::new());
    let mut user = None;
    let outcome = run_session(&mut console, SecretInput::Echo, |c: &Credentials| {
        user = Some((c.user_id().to_string(), c.secret().to_string()));
        Ok::<_, ShellError>(MemoryStore::default())
    })
    .unwrap();
    assert_eq!(user, Some((String::new(), String::new())));
    // End of input at the menu ends the session.
    assert_eq!(outcome, SessionOutcome::Exited);
}

#[test]
fn blank_search_input_issues_no_query() {
    let store = RecordingStore::with_docs(vec![doc! { "title": "Big" }]);
    let queries = store.queries.clone();
    let (outcome, out) = run_script(&script(&["2", "   ", "3", "", "4"]), store);
    assert_eq!(outcome.unwrap(), SessionOutcome::Exited);
    assert_eq!(out.matches(INVALID_INPUT).count(), 2);
    assert!(queries.borrow().is_empty());
}

#[test]
fn list_all_on_empty_collection_prints_only_the_notice() {
    let (_, out) = run_script(&script(&["1", "4"]), RecordingStore::default());
    assert!(out.contains("Choose an option: \nNo movies found in the database!\n"));
    assert!(!out.contains("=== Movie List ==="));
    assert!(!out.contains("🎬"));
}

#[test]
fn list_all_prints_title_cast_and_separator() {
    let store = RecordingStore::with_docs(vec![
        doc! { "title": "X", "cast": [ { "name": "Ann" }, { "name": "Bob" } ] },
    ]);
    let (_, out) = run_script(&script(&["1", "4"]), store);
    assert!(out.contains(
        "🎬 Movie: X\n👥 Cast:\n   🎭 Ann\n   🎭 Bob\n----------------------------\n"
    ));
}

#[test]
fn cast_search_finds_and_misses() {
    let docs = vec![
        doc! { "title": "Big", "cast": [ { "name": "Tom Hanks" } ] },
        doc! { "title": "Speed", "cast": [ { "name": "Keanu Reeves" } ] },
    ];
    let store = RecordingStore::with_docs(docs);
    let queries = store.queries.clone();
    let (_, out) = run_script(&script(&["2", "Tom Hanks", "4"]), store);
    assert!(out.contains("\n🎭 Movies featuring Tom Hanks:\n- Big\n"));
    assert!(!out.contains("- Speed"));
    assert_eq!(queries.borrow().as_slice(), [Filter::cast_member("Tom Hanks")]);

    let (_, out) = run_script(&script(&["2", "Tom Hanks", "4"]), RecordingStore::default());
    assert!(out.contains("\n❌ No movies found featuring Tom Hanks.\n"));
}

#[test]
fn keyword_search_sends_case_insensitive_regex_on_overview() {
    let store = RecordingStore::with_docs(vec![
        doc! { "title": "Voyage", "overview": "A journey through SPACE" },
        doc! { "title": "Deep", "overview": "Under the sea" },
    ]);
    let queries = store.queries.clone();
    let (_, out) = run_script(&script(&["3", "space", "4"]), store);
    assert_eq!(
        queries.borrow().as_slice(),
        [Filter::Regex { path: "overview".into(), pattern: "space".into(), case_insensitive: true }]
    );
    assert!(out.contains("\n🔍 Movies matching keyword 'space':\n   🎬 Voyage: A journey through SPACE\n"));
    assert!(!out.contains("Deep"));

    let (_, out) = run_script(&script(&["3", "zebra", "4"]), RecordingStore::default());
    assert!(out.contains("\n❌ No movies found matching keyword 'zebra'.\n"));
}

#[test]
fn invalid_menu_choices_redisplay_the_menu() {
    let (outcome, out) = run_script(&script(&["5", "", "abc", "4"]), RecordingStore::default());
    assert_eq!(outcome.unwrap(), SessionOutcome::Exited);
    assert_eq!(out.matches(INVALID_OPTION).count(), 3);
    assert_eq!(out.matches(MENU).count(), 4);
    assert!(out.ends_with("Choose an option: Exiting...\n"));
}

#[test]
fn exit_stops_reading_input() {
    let store = RecordingStore::with_docs(vec![doc! { "title": "Big" }]);
    let queries = store.queries.clone();
    let (_, out) = run_script(&script(&["4", "1"]), store);
    assert_eq!(out.matches(MENU).count(), 1);
    assert!(queries.borrow().is_empty());
}

#[test]
fn query_failures_propagate_out_of_the_session() {
    let store = RecordingStore::with_docs(vec![doc! { "overview": "x" }]);
    let (outcome, out) = run_script(&script(&["3", "(unclosed", "4"]), store);
    assert!(matches!(outcome, Err(ShellError::Query(_))));
    assert!(!out.contains("Exiting..."));
}
