use lukkari::components::calendar::FilterChange;
use lukkari::components::{Calendar, ComponentManager, Countdown};
use lukkari::error::{AppResult, Error};
use std::io::{self, BufRead};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

// Export submodules
pub mod calendar;

/// Shared context for all commands
#[derive(Debug)]
pub struct CommandContext {
    pub component_manager: Arc<ComponentManager>,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(component_manager: Arc<ComponentManager>) -> Self {
        Self { component_manager }
    }

    /// The calendar view, if enabled
    pub fn calendar(&self) -> Option<&Calendar> {
        self.component_manager.get::<Calendar>("calendar")
    }

    /// The countdown, if enabled
    pub fn countdown(&self) -> Option<&Countdown> {
        self.component_manager.get::<Countdown>("countdown")
    }
}

/// A line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Filter(FilterChange),
    Reset,
    List,
    Export,
    Next,
    Filters,
    Help,
    Quit,
}

/// What the input loop does after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// Type alias for command result
pub type CommandResult = AppResult<Reply>;

/// Why an input line is not a command
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("{0}")]
    Invalid(String),
}

impl From<Error> for ParseError {
    fn from(err: Error) -> Self {
        match err {
            Error::Command(reason) => ParseError::Invalid(reason),
            other => ParseError::Invalid(other.to_string()),
        }
    }
}

impl Command {
    /// Parse one input line, `None` for a blank line
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match (*name, args) {
            ("filter", [dimension, value]) => Command::Filter(FilterChange::parse(dimension, value)?),
            ("filter", _) => {
                return Err(ParseError::Invalid(
                    "usage: filter <category|audience|term> <value|all>".to_string(),
                ))
            }
            ("reset", []) => Command::Reset,
            ("list", []) => Command::List,
            ("export", []) => Command::Export,
            ("next", []) => Command::Next,
            ("filters", []) => Command::Filters,
            ("help", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (name @ ("reset" | "list" | "export" | "next" | "filters" | "help" | "quit" | "exit"), _) => {
                return Err(ParseError::Invalid(format!("'{}' takes no arguments", name)))
            }
            (name, _) => return Err(ParseError::Unknown(name.to_string())),
        };

        Ok(Some(command))
    }
}

/// Run a parsed command against the components
pub async fn execute(ctx: &CommandContext, command: Command) -> CommandResult {
    debug!("Executing {:?}", command);
    let text = match command {
        Command::Filter(change) => calendar::filter(ctx, change).await?,
        Command::Reset => calendar::reset(ctx).await?,
        Command::List => calendar::list(ctx).await?,
        Command::Export => calendar::export(ctx).await?,
        Command::Next => calendar::next(ctx).await?,
        Command::Filters => calendar::filters(ctx).await?,
        Command::Help => lukkari::components::calendar::render::render_help(),
        Command::Quit => return Ok(Reply::Quit),
    };
    Ok(Reply::Text(text))
}

/// Handle one input line and produce the text to show
pub async fn handle_line(ctx: &CommandContext, line: &str) -> CommandResult {
    match Command::parse(line) {
        Ok(Some(command)) => execute(ctx, command).await,
        Ok(None) => Ok(Reply::Text(String::new())),
        Err(ParseError::Invalid(reason)) => Ok(Reply::Text(format!(
            "{}\n",
            t!("invalid_command", reason = reason)
        ))),
        Err(ParseError::Unknown(name)) => Ok(Reply::Text(format!(
            "{}\n",
            t!("unknown_command", command = name)
        ))),
    }
}

/// Read stdin on a dedicated thread, one message per line
pub fn spawn_stdin_reader() -> mpsc::Receiver<io::Result<String>> {
    let (line_tx, line_rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if line_tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    line_rx
}

/// Serve commands until `quit` or the end of input
pub async fn run(ctx: &CommandContext, mut lines: mpsc::Receiver<io::Result<String>>) -> AppResult<()> {
    while let Some(line) = lines.recv().await {
        match handle_line(ctx, &line?).await? {
            Reply::Text(text) => print!("{}", text),
            Reply::Quit => {
                info!("Quit requested");
                return Ok(());
            }
        }
    }

    info!("Input closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lukkari::components::calendar::{Audience, Category};
    use lukkari::components::event_source::{EventFetcher, EventSourceHandle, RawEvent};
    use lukkari::config::Config;
    use tokio::sync::RwLock;

    struct StaticFetcher(Vec<RawEvent>);

    #[async_trait]
    impl EventFetcher for StaticFetcher {
        async fn fetch(&self) -> AppResult<Vec<RawEvent>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    async fn test_context() -> CommandContext {
        let rows = vec![
            RawEvent {
                id: "1".to_string(),
                title: "Midterms".to_string(),
                start_date: "2025-12-10".to_string(),
                category: Some("exam".to_string()),
                ..Default::default()
            },
            RawEvent {
                id: "2".to_string(),
                title: "Winter break".to_string(),
                start_date: "2025-12-21".to_string(),
                category: Some("holiday".to_string()),
                ..Default::default()
            },
        ];
        let config = Arc::new(RwLock::new(Config::new("https://sheetdb.io/api/v1/test")));
        let event_source = EventSourceHandle::new(Arc::new(StaticFetcher(rows)));

        let mut manager = ComponentManager::new(config);
        manager.register(Calendar::new()).await;
        manager.register(Countdown::new()).await;
        manager.init_all(event_source).await.unwrap();

        CommandContext::new(Arc::new(manager))
    }

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Text(text) => text,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[tokio::test]
    async fn test_filter_command_rerenders() {
        let ctx = test_context().await;

        let output = text(handle_line(&ctx, "filter category holiday").await.unwrap());
        assert!(output.contains("Winter break"));
        assert!(!output.contains("Midterms"));

        let output = text(handle_line(&ctx, "reset").await.unwrap());
        assert!(output.contains("Winter break"));
        assert!(output.contains("Midterms"));

        ctx.component_manager.shutdown_all().await.unwrap();
    }

    #[tokio::test]
    async fn test_export_and_quit() {
        let ctx = test_context().await;

        handle_line(&ctx, "filter category exam").await.unwrap();
        let output = text(handle_line(&ctx, "export").await.unwrap());
        let exported: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(exported.as_array().unwrap().len(), 1);
        assert_eq!(exported[0]["id"], "1");
        assert_eq!(exported[0]["allDay"], true);

        assert_eq!(handle_line(&ctx, "quit").await.unwrap(), Reply::Quit);

        ctx.component_manager.shutdown_all().await.unwrap();
    }

    #[tokio::test]
    async fn test_bad_lines_are_answered() {
        let ctx = test_context().await;

        let output = text(handle_line(&ctx, "dance").await.unwrap());
        assert!(output.contains("dance"));

        let output = text(handle_line(&ctx, "filter term T9").await.unwrap());
        assert!(output.contains("T9"));

        assert_eq!(text(handle_line(&ctx, "").await.unwrap()), "");

        ctx.component_manager.shutdown_all().await.unwrap();
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("  ").unwrap(), None);
        assert_eq!(Command::parse("list").unwrap(), Some(Command::List));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(
            Command::parse("filter category exam").unwrap(),
            Some(Command::Filter(FilterChange::Category(Some(Category::Exam))))
        );
        assert_eq!(
            Command::parse("filter  audience   all").unwrap(),
            Some(Command::Filter(FilterChange::Audience(None)))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Command::parse("filter category"), Err(ParseError::Invalid(_))));
        assert_eq!(
            Command::parse("filter term T9"),
            Err(ParseError::Invalid("unknown term 'T9'".to_string()))
        );
        assert_eq!(
            Command::parse("list now"),
            Err(ParseError::Invalid("'list' takes no arguments".to_string()))
        );
        assert_eq!(
            Command::parse("dance"),
            Err(ParseError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_audience_values() {
        for audience in Audience::ALL {
            let line = format!("filter audience {}", audience);
            assert_eq!(
                Command::parse(&line).unwrap(),
                Some(Command::Filter(FilterChange::Audience(Some(*audience))))
            );
        }
    }
}
