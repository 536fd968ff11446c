const YES_TOKENS: [&str; 4] = ["да", "д", "yes", "y"];
const NO_TOKENS: [&str; 4] = ["нет", "н", "no", "n"];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Maps a raw line to an answer. Case and surrounding whitespace are ignored;
/// anything outside the two token sets is `None`.
pub fn parse_answer(raw: &str) -> Option<Answer> {
    let token = raw.trim().to_lowercase();
    if YES_TOKENS.contains(&token.as_str()) {
        Some(Answer::Yes)
    } else if NO_TOKENS.contains(&token.as_str()) {
        Some(Answer::No)
    } else {
        None
    }
}
