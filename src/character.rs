use crate::satisfy::{Satisfy, satisfy};

/// Parser that matches one specific character
pub fn is_char(expected: char) -> Satisfy<impl Fn(char) -> bool> {
    satisfy(move |c| c == expected, expected.to_string())
}

/// Parser that matches a single decimal digit
pub fn digit() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|c: char| c.is_ascii_digit(), "digit")
}

/// Parser that matches a single whitespace character
pub fn whitespace() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(char::is_whitespace, "whitespace")
}

/// Parser that matches any single non-whitespace character
pub fn non_whitespace() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|c: char| !c.is_whitespace(), "non-whitespace")
}

/// Parser that matches any single character on the current line
pub fn any_char() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|_| true, "any")
}
