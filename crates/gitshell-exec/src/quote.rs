//! POSIX shell quoting for values interpolated into command lines.
//!
//! The runner executes exactly the string it is given, so every
//! caller-supplied value (branch names, paths, messages) must pass through
//! [`quote`] before it is joined into a command line.

use std::borrow::Cow;

/// Quote `word` so that `sh` reads it back as exactly one literal argument.
///
/// Words made only of characters with no meaning to the shell are returned
/// as-is. Everything else is wrapped in single quotes, with embedded single
/// quotes written as `'\''`.
///
/// # Examples
///
/// ```
/// use gitshell_exec::quote;
///
/// assert_eq!(quote("main"), "main");
/// assert_eq!(quote("my file.txt"), "'my file.txt'");
/// assert_eq!(quote("it's"), r"'it'\''s'");
/// assert_eq!(quote(""), "''");
/// ```
pub fn quote(word: &str) -> Cow<'_, str> {
    if word.is_empty() {
        return Cow::Borrowed("''");
    }
    if word.bytes().all(is_shell_safe) {
        return Cow::Borrowed(word);
    }

    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push('\'');
    for ch in word.chars() {
        if ch == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

/// Quote each word and join them with single spaces.
pub fn quote_all<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| quote(w.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_shell_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b'.' | b'/' | b',' | b':' | b'@' | b'+' | b'=' | b'%')
}
