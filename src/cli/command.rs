/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    SearchByCast,
    SearchByKeyword,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Parse one line typed at the menu prompt. Whitespace is trimmed; anything
    /// other than the four option numbers is `Invalid`.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::ListAll,
            "2" => Self::SearchByCast,
            "3" => Self::SearchByKeyword,
            "4" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}
