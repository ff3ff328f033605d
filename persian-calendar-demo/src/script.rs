//! Line-oriented commands that drive the widget.
use anyhow::{Context, Result, bail};
use persian_calendar::{Direction, WidgetEvent};

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an event to the widget.
    Event(WidgetEvent),
    /// Print the current month again.
    Show,
    /// Stop reading commands.
    Quit,
}

/// Parses one line. Blank lines and `#` comments yield `None`.
///
/// Accepted forms are `next`, `prev`, `click <day>`, a bare day number,
/// `show` and `quit`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default().to_ascii_lowercase();
    let command = match head.as_str() {
        "next" | "n" => Command::Event(WidgetEvent::Navigate(Direction::Next)),
        "prev" | "previous" | "p" => Command::Event(WidgetEvent::Navigate(Direction::Previous)),
        "show" => Command::Show,
        "quit" | "exit" | "q" => Command::Quit,
        "click" | "c" => {
            let Some(day) = words.next() else {
                bail!("`{line}` is missing a day number");
            };
            Command::Event(WidgetEvent::ClickDay(parse_day(day)?))
        }
        _ if head.chars().all(|c| c.is_ascii_digit()) => {
            Command::Event(WidgetEvent::ClickDay(parse_day(&head)?))
        }
        _ => bail!("unknown command `{line}`"),
    };

    if let Some(extra) = words.next() {
        bail!("unexpected `{extra}` in `{line}`");
    }
    Ok(Some(command))
}

fn parse_day(word: &str) -> Result<u8> {
    word.parse()
        .with_context(|| format!("`{word}` is not a day number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_and_clicks() {
        assert_eq!(
            parse_line("next").expect("parse"),
            Some(Command::Event(WidgetEvent::Navigate(Direction::Next)))
        );
        assert_eq!(
            parse_line("  PREV ").expect("parse"),
            Some(Command::Event(WidgetEvent::Navigate(Direction::Previous)))
        );
        assert_eq!(
            parse_line("click 12").expect("parse"),
            Some(Command::Event(WidgetEvent::ClickDay(12)))
        );
        assert_eq!(
            parse_line("7").expect("parse"),
            Some(Command::Event(WidgetEvent::ClickDay(7)))
        );
        assert_eq!(parse_line("quit").expect("parse"), Some(Command::Quit));
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        assert_eq!(parse_line("").expect("parse"), None);
        assert_eq!(parse_line("# pick nowruz").expect("parse"), None);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("click").is_err());
        assert!(parse_line("click twelve").is_err());
        assert!(parse_line("click 300").is_err());
        assert!(parse_line("next 2").is_err());
        assert!(parse_line("jump").is_err());
    }
}
