pub const USER_ID_PROMPT: &str = "Enter Instructor's User ID: ";
pub const PASSWORD_PROMPT: &str = "Enter Instructor's Password: ";
pub const CONNECTED: &str = "\n✅ Connected to MongoDB successfully!";
pub const CONNECT_FAILED: &str = "\n❌ Failed to connect to MongoDB. Check your credentials.";

pub const MENU: &str = "\n=== MongoDB Movie Database ===\n\
1. List all movies with cast members\n\
2. Search movies by cast member\n\
3. Search movies by keyword in overview\n\
4. Exit";
pub const CHOICE_PROMPT: &str = "Choose an option: ";
pub const EXITING: &str = "Exiting...";
pub const INVALID_OPTION: &str = "Invalid option. Try again.";
pub const INVALID_INPUT: &str = "Invalid input. Try again.";

pub const CAST_PROMPT: &str = "\nEnter cast member name: ";
pub const KEYWORD_PROMPT: &str = "\nEnter keyword: ";
pub const SEPARATOR: &str = "----------------------------";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::MenuChoice;

    #[test]
    fn menu_lists_four_options_in_order() {
        let lines: Vec<&str> = MENU.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=== MongoDB Movie Database ===");
        assert!(lines[2].starts_with("1. "));
        assert_eq!(lines[5], "4. Exit");
    }

    #[test]
    fn choice_parsing() {
        assert_eq!(MenuChoice::parse(" 1 "), MenuChoice::ListAll);
        assert_eq!(MenuChoice::parse("2"), MenuChoice::SearchByCast);
        assert_eq!(MenuChoice::parse("3\r"), MenuChoice::SearchByKeyword);
        assert_eq!(MenuChoice::parse("4"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("5"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("1 2"), MenuChoice::Invalid);
    }
}
