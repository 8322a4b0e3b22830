//! The line-oriented chat loop, generic over its streams.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use concierge_matcher::{IntentMatcher, ResponseSelector};
use rand::Rng;
use tracing::{debug, info};

pub const GREETING: &str = "Welcome to our Hotel Concierge Chatbot. How may I assist you today?";
pub const FAREWELL: &str = "Thank you for chatting with me! Have a wonderful stay!";
const PROMPT: &str = "You: ";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A terminal intent matched.
    Farewell,
    /// Input ran out first.
    EndOfInput,
}

/// Run one conversation until a terminal intent matches or input ends.
/// Blank lines are skipped without a reply. Invalid UTF-8 is replaced with
/// U+FFFD and answered like any other line.
pub fn run_session<I, O, R>(
    matcher: &IntentMatcher<'_>,
    selector: &mut ResponseSelector<R>,
    mut input: I,
    mut output: O,
) -> io::Result<SessionEnd>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    writeln!(output, "Chatbot: {GREETING}")?;
    let mut turns = 0usize;
    let mut buf = Vec::new();

    let end = loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break SessionEnd::EndOfInput;
        }
        let text = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = text {
            debug!(bytes = buf.len(), "replaced invalid UTF-8 in input line");
        }
        let line = text.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        turns += 1;
        let reply = matcher.turn(line, selector);
        writeln!(output, "Chatbot: {}", reply.text)?;

        if reply.signal.is_terminate() {
            writeln!(output, "{FAREWELL}")?;
            break SessionEnd::Farewell;
        }
    };

    info!(turns, end = ?end, "session finished");
    Ok(end)
}

/// Write every catalog pattern, one per line, as input suggestions.
pub fn write_suggestions<O: Write>(patterns: &[&str], mut output: O) -> io::Result<()> {
    for pattern in patterns {
        writeln!(output, "{pattern}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use concierge_core::config::MatcherConfig;
    use concierge_core::constants::FALLBACK_RESPONSE;
    use test_fixtures::hotel_catalog;

    use super::*;

    fn run(script: impl AsRef<[u8]>) -> (SessionEnd, String) {
        let catalog = hotel_catalog();
        let matcher = IntentMatcher::new(&catalog, &MatcherConfig::default()).unwrap();
        let mut selector = ResponseSelector::seeded(7);
        let mut out = Vec::new();
        let end = run_session(&matcher, &mut selector, Cursor::new(script.as_ref()), &mut out).unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn goodbye_ends_with_farewell() {
        let (end, out) = run("hello\nbye\nroom service\n");
        assert_eq!(end, SessionEnd::Farewell);
        assert!(out.starts_with(&format!("Chatbot: {GREETING}\n")));
        assert!(out.trim_end().ends_with(FAREWELL));
        // Nothing after the terminal turn is answered.
        assert!(!out.contains("Room service is available"));
        assert_eq!(out.matches("Chatbot: ").count(), 3);
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let (end, out) = run("purple elephant\n\n   \n");
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(out.contains(&format!("Chatbot: {FALLBACK_RESPONSE}")));
        assert!(!out.contains(FAREWELL));
        assert_eq!(out.matches("Chatbot: ").count(), 2);
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_session() {
        let (end, out) = run(b"caf\xe9\nhello\nbye\n");
        assert_eq!(end, SessionEnd::Farewell);
        assert_eq!(out.matches("Chatbot: ").count(), 4);
        assert!(out.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let (end, _) = run("bye\r\n");
        assert_eq!(end, SessionEnd::Farewell);
    }

    #[test]
    fn suggestions_list_every_pattern() {
        let catalog = hotel_catalog();
        let mut out = Vec::new();
        write_suggestions(&catalog.all_patterns(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), catalog.pattern_count());
        assert_eq!(text.lines().next(), Some("hello"));
    }
}
