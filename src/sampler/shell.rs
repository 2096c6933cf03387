//! Shell quoting for diagnostic command rendering.
//!
//! Spawns never go through a shell, but the command lines logged at
//! DEBUG are rendered copy-pasteable. The quoting rule: wrap the word
//! in single quotes; at each run of embedded quotes, close the quoted
//! run, emit `\'` per quote, and reopen.

/// Quote one word for POSIX shells.
pub fn shell_quote(word: &str) -> String {
    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push('\'');
    let mut rest = word;
    while let Some(pos) = rest.find('\'') {
        quoted.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let run = tail.len() - tail.trim_start_matches('\'').len();
        quoted.push('\'');
        for _ in 0..run {
            quoted.push_str("\\'");
        }
        quoted.push('\'');
        rest = &tail[run..];
    }
    quoted.push_str(rest);
    quoted.push('\'');
    quoted
}

/// Render a program invocation as a single quoted command line.
pub fn render_command<'a>(program: &str, args: impl IntoIterator<Item = &'a str>) -> String {
    let mut line = shell_quote(program);
    for arg in args {
        line.push(' ');
        line.push_str(&shell_quote(arg));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain_word() {
        assert_eq!(shell_quote("clip.mkv"), "'clip.mkv'");
        assert_eq!(shell_quote("a b c"), "'a b c'");
    }

    #[test]
    fn test_quote_empty_word() {
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn test_quote_embedded_quote() {
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_quote_collapses_quote_runs() {
        // Consecutive quotes share one close/reopen pair.
        assert_eq!(shell_quote("a''b"), r"'a'\'\''b'");
    }

    #[test]
    fn test_quote_leading_and_trailing_quotes() {
        assert_eq!(shell_quote("'x'"), r"''\''x'\'''");
    }

    #[test]
    fn test_render_command() {
        let line = render_command("ffprobe", ["-v", "error", "a clip.mkv"]);
        assert_eq!(line, "'ffprobe' '-v' 'error' 'a clip.mkv'");
    }
}
