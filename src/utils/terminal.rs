//! Text shaping for diagnostics
//!
//! Names and descriptions come from third-party pages and may carry control
//! characters or escape sequences; they are cleaned before being logged.

/// Shortens `text` to at most `max_chars` characters for log output
///
/// ANSI CSI sequences (`ESC [ ... letter`) and other control characters are
/// dropped, and runs of whitespace collapse to a single space. A truncated preview ends
/// with `...`.
///
/// # Examples
///
/// ```
/// use ai_project_launcher::utils::terminal::preview;
///
/// assert_eq!(preview("hello\n   world", 80), "hello world");
/// assert_eq!(preview("abcdef", 3), "abc...");
/// ```
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut result = String::with_capacity(text.len().min(max_chars + 3));
    let mut count = 0;
    let mut pending_space = false;

    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final letter
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        if ch.is_whitespace() {
            pending_space = count > 0;
            continue;
        }
        if ch.is_control() {
            continue;
        }

        let needed = if pending_space { 2 } else { 1 };
        if count + needed > max_chars {
            result.push_str("...");
            return result;
        }
        if pending_space {
            result.push(' ');
            count += 1;
            pending_space = false;
        }
        result.push(ch);
        count += 1;
    }

    result
}
