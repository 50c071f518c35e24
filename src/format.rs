//! Text shown on the board: avatar initials, availability lines and the
//! fixed user-facing messages.

pub const LOADING: &str = "Loading activities...";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const REMOVE_TITLE: &str = "Remove participant";

pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const REMOVE_FALLBACK: &str = "Failed to remove participant";
pub const REMOVE_FAILED: &str = "Failed to remove participant. Please try again.";
pub const SIGNUP_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

/// Two-letter avatar text for a participant.
///
/// Only the part before `@` is used, with `.`, `_` and `-` read as spaces.
/// A single word gives its first two letters, otherwise the first letter of
/// each of the first two words. Always uppercased.
pub fn get_initials(name_or_email: &str) -> String {
    let local = name_or_email.split('@').next().unwrap_or_default();
    let spaced: String = local
        .chars()
        .map(|c| if matches!(c, '.' | '_' | '-') { ' ' } else { c })
        .collect();
    let parts: Vec<&str> = spaced.split_whitespace().collect();

    match parts.as_slice() {
        [] => String::new(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [first, second, ..] => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}

pub fn spots_left_text(spots_left: i64) -> String {
    format!("{spots_left} spots left")
}

pub fn participants_header(count: usize) -> String {
    format!("Participants ({count}):")
}

pub fn remove_prompt(email: &str, activity: &str) -> String {
    format!("Remove {email} from {activity}?")
}
