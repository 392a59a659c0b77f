//! Interactive chat loop over a [`SessionCoordinator`].

use std::io::Write;

use chrono::Local;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use codechat_core::types::{Message, Role};
use codechat_session::{ChatTransport, SendOutcome, SessionCoordinator};

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Blank,
    Quit,
    History,
    Session,
    Unknown(&'a str),
    Text(&'a str),
}

impl<'a> Input<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Input::Blank;
        }
        match trimmed {
            "/quit" | "/exit" => Input::Quit,
            "/history" => Input::History,
            "/session" => Input::Session,
            cmd if cmd.starts_with('/') => Input::Unknown(cmd),
            // Sent as typed; the coordinator trims only to test for blank input.
            _ => Input::Text(line),
        }
    }
}

/// One timeline entry as printed: `HH:MM <who> [<badge>] <content>`.
pub fn render_message(message: &Message) -> String {
    let who = match message.role {
        Role::User => "Вы",
        Role::Assistant => "ИИ",
    };
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
    format!(
        "{} {} [{}] {}",
        time,
        who,
        message.category.label(),
        message.content
    )
}

/// Read lines from `input` until EOF or `/quit`, writing replies to `out`.
pub async fn run<T, R, W>(
    coordinator: &SessionCoordinator<T>,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    T: ChatTransport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    for message in coordinator.messages() {
        writeln!(out, "{}", render_message(&message))?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match Input::parse(&line) {
            Input::Blank => continue,
            Input::Quit => break,
            Input::History => {
                for message in coordinator.messages() {
                    writeln!(out, "{}", render_message(&message))?;
                }
            }
            Input::Session => match coordinator.session_id() {
                Some(id) => writeln!(out, "session: {}", id)?,
                None => writeln!(out, "session: (not established)")?,
            },
            Input::Unknown(cmd) => {
                writeln!(out, "unknown command {}; try /history, /session or /quit", cmd)?;
            }
            Input::Text(text) => {
                let outcome = coordinator.send(text).await;
                if let SendOutcome::Failed(ref failure) = outcome {
                    tracing::debug!(error = %failure, "Exchange failed");
                    writeln!(out, "! {}", failure.indicator())?;
                }
                if outcome.was_accepted() {
                    if let Some(reply) = coordinator.last_message() {
                        writeln!(out, "{}", render_message(&reply))?;
                    }
                } else if let SendOutcome::Invalid(err) = outcome {
                    writeln!(out, "! {}", err)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codechat_core::error::CONNECTION_INDICATOR;
    use codechat_core::fallback::APOLOGY;
    use codechat_core::types::Category;
    use codechat_session::OfflineTransport;

    #[test]
    fn test_parse_input() {
        assert_eq!(Input::parse("   "), Input::Blank);
        assert_eq!(Input::parse("/quit"), Input::Quit);
        assert_eq!(Input::parse(" /history "), Input::History);
        assert_eq!(Input::parse("/session"), Input::Session);
        assert_eq!(Input::parse("/nope"), Input::Unknown("/nope"));
        assert_eq!(Input::parse(" привет "), Input::Text(" привет "));
    }

    #[test]
    fn test_render_carries_badge_and_content() {
        let line = render_message(&Message::user(1, "напиши код", Category::Code));
        assert!(line.contains("Вы [Код] напиши код"));

        let line = render_message(&Message::local_assistant(2, APOLOGY, Category::Error));
        assert!(line.contains("ИИ [Ошибка]"));
    }

    #[tokio::test]
    async fn test_offline_session_prints_indicator_and_apology() {
        let coordinator = SessionCoordinator::without_greeting(OfflineTransport);
        let input: &[u8] = "привет\n\n/session\n/quit\nnever sent\n".as_bytes();
        let mut out = Vec::new();

        run(&coordinator, input, &mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains(CONNECTION_INDICATOR));
        assert!(printed.contains(APOLOGY));
        assert!(printed.contains("session: (not established)"));
        assert_eq!(coordinator.len(), 2);
    }

    #[tokio::test]
    async fn test_greeting_printed_and_eof_ends_loop() {
        let coordinator = SessionCoordinator::new(OfflineTransport);
        let greeting = coordinator.messages()[0].content.clone();
        let input: &[u8] = b"";
        let mut out = Vec::new();

        run(&coordinator, input, &mut out).await.unwrap();

        assert!(String::from_utf8(out).unwrap().contains(&greeting));
        assert_eq!(coordinator.len(), 1);
    }
}
