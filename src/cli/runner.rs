//! CLI runner - executes commands

use crate::cli::commands::{ActionArg, Cli, Commands, OutputFormat};
use crate::config::{load_config, PagerConfig};
use crate::error::{Result, ResultExt};
use crate::location::NavigationLocation;
use crate::pagination::{
    parse_link_header, try_parse_link_header, ActionView, Command, Direction, HeaderAction,
    HeaderView, LinkDescriptor, PaginationController, PaginationLinks,
};
use crate::source::PageEvent;
use serde_json::json;
use std::fmt::Write as _;

/// CLI runner
pub struct Runner {
    cli: Cli,
    config: PagerConfig,
}

impl Runner {
    /// Create a new runner, loading the config file if one was given
    pub fn new(cli: Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Loading config '{}'", path.display()))?,
            None => PagerConfig::default(),
        };
        Ok(Self { cli, config })
    }

    /// Create a runner with an already loaded config
    pub fn with_config(cli: Cli, config: PagerConfig) -> Self {
        Self { cli, config }
    }

    /// Log level requested by flags or config
    pub fn log_level(&self) -> tracing::Level {
        if self.cli.verbose {
            tracing::Level::DEBUG
        } else {
            self.config
                .log_level
                .map_or(tracing::Level::INFO, tracing::Level::from)
        }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Links { header, strict } => self.links(header, *strict),
            Commands::View {
                location,
                link,
                items,
                total,
                loading,
            } => {
                let event = page_event(link.as_deref(), *items, *total, *loading);
                self.view(location, &event)
            }
            Commands::Navigate {
                action,
                location,
                link,
                loading,
            } => {
                let event = page_event(link.as_deref(), 0, 0, *loading);
                self.navigate(*action, location, &event)
            }
        }
    }

    /// Parse a header
    fn links(&self, header: &str, strict: bool) -> Result<String> {
        let links = if strict {
            try_parse_link_header(header)?
        } else {
            parse_link_header(Some(header))
        };

        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&links)?),
            OutputFormat::Pretty => Ok(render_links(&links)),
        }
    }

    /// Render the header for one page
    fn view(&self, location: &str, event: &PageEvent) -> Result<String> {
        let location = NavigationLocation::parse(location)?;
        let mut controller = PaginationController::new(&self.config);
        controller.on_page_event(event);
        let view = controller.view(&location);

        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "state": controller.state(),
                "summary": view.summary,
                "range": view.range,
                "previous": action_json(&view.previous),
                "next": action_json(&view.next),
            }))?),
            OutputFormat::Pretty => Ok(render_view(&view)),
        }
    }

    /// Resolve an action
    fn navigate(&self, action: ActionArg, location: &str, event: &PageEvent) -> Result<String> {
        let location = NavigationLocation::parse(location)?;
        let mut controller = PaginationController::new(&self.config);
        controller.on_page_event(event);

        let action = HeaderAction::from(action);
        let command = controller.handle(action, &location);

        match self.cli.format {
            OutputFormat::Json => {
                let value = match &command {
                    Some(Command::Navigate(target)) => json!({
                        "action": action,
                        "command": "navigate",
                        "url": target.to_string(),
                        "location": target,
                    }),
                    Some(Command::Close) => json!({ "action": action, "command": "close" }),
                    None => json!({ "action": action, "command": null }),
                };
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Pretty => Ok(match command {
                Some(Command::Navigate(target)) => format!("navigate {target}"),
                Some(Command::Close) => "close".to_string(),
                None => format!(
                    "{} is disabled",
                    action.direction().map_or("action", Direction::rel)
                ),
            }),
        }
    }
}

fn page_event(link: Option<&str>, items: u64, total: u64, loading: bool) -> PageEvent {
    if loading {
        PageEvent {
            link_header: link.map(String::from),
            ..PageEvent::loading()
        }
    } else {
        PageEvent::loaded(link, items, total)
    }
}

fn action_json(action: &ActionView) -> serde_json::Value {
    json!({
        "enabled": action.enabled,
        "url": action.location.as_ref().map(ToString::to_string),
    })
}

fn render_links(links: &PaginationLinks) -> String {
    let mut out = String::new();
    for direction in Direction::ALL {
        let descriptor: &LinkDescriptor = &links[direction];
        let state = if descriptor.results_available {
            "available"
        } else {
            "unavailable"
        };
        let _ = writeln!(
            out,
            "{:<9} {:<11} cursor={}",
            format!("{direction}:"),
            state,
            descriptor.cursor().unwrap_or("-")
        );
    }
    out.trim_end().to_string()
}

fn render_view(view: &HeaderView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.summary.as_deref().unwrap_or("(loading)"));
    for direction in Direction::ALL {
        let action = view.action(direction);
        let target = match (&action.location, action.enabled) {
            (Some(location), true) => location.to_string(),
            _ => "disabled".to_string(),
        };
        let _ = writeln!(out, "{:<9} {}", format!("{direction}:"), target);
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    const LINK: &str = r#"<u>; rel="previous"; results="false"; cursor="0:0:1", <u>; rel="next"; results="true"; cursor="0:25:0""#;

    fn runner(args: &[&str]) -> Runner {
        let cli = Cli::try_parse_from(std::iter::once("event-pager").chain(args.iter().copied()))
            .unwrap();
        Runner::with_config(cli, PagerConfig::default())
    }

    #[test]
    fn test_links_json() {
        let out = runner(&["links", LINK]).execute().unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["previous"]["results_available"], false);
        assert_eq!(value["next"]["cursor"], "0:25:0");
    }

    #[test]
    fn test_links_strict_rejects_malformed() {
        assert!(runner(&["links", "--strict", "bogus"]).execute().is_err());
        assert!(runner(&["links", "bogus"]).execute().is_ok());
    }

    #[test]
    fn test_links_pretty() {
        let out = runner(&["--format", "pretty", "links", LINK]).execute().unwrap();
        assert_eq!(
            out,
            "previous: unavailable cursor=0:0:1\nnext:     available   cursor=0:25:0"
        );
    }

    #[test]
    fn test_view_json() {
        let out = runner(&[
            "view",
            "--location",
            "/issues/3/events/?environment=prod",
            "--link",
            LINK,
            "--items",
            "25",
            "--total",
            "60",
        ])
        .execute()
        .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["state"], "idle");
        assert_eq!(value["summary"], "Showing 1-25 of 60 matching events");
        assert_eq!(value["previous"]["enabled"], false);
        assert_eq!(value["previous"]["url"], Value::Null);
        assert_eq!(value["next"]["enabled"], true);
        assert_eq!(
            value["next"]["url"],
            "/issues/3/events/?environment=prod&cursor=0%3A25%3A0"
        );
    }

    #[test]
    fn test_view_loading_pretty() {
        let out = runner(&[
            "-f",
            "pretty",
            "view",
            "-l",
            "/issues/3/events/",
            "--link",
            LINK,
            "--loading",
        ])
        .execute()
        .unwrap();
        assert_eq!(out, "(loading)\nprevious: disabled\nnext:     disabled");
    }

    #[test]
    fn test_navigate_next() {
        let out = runner(&[
            "-f",
            "pretty",
            "navigate",
            "next",
            "-l",
            "/issues/3/events/?cursor=0:0:0",
            "--link",
            LINK,
        ])
        .execute()
        .unwrap();
        assert_eq!(out, "navigate /issues/3/events/?cursor=0%3A25%3A0");
    }

    #[test]
    fn test_navigate_disabled_and_close() {
        let out = runner(&["-f", "pretty", "navigate", "prev", "-l", "/e/", "--link", LINK])
            .execute()
            .unwrap();
        assert_eq!(out, "previous is disabled");

        let out = runner(&["navigate", "close", "-l", "/e/"]).execute().unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["command"], "close");
    }

    #[test]
    fn test_navigate_rejects_bad_location() {
        assert!(runner(&["navigate", "next", "-l", ""]).execute().is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(runner(&["-v", "links", LINK]).log_level(), tracing::Level::DEBUG);
        assert_eq!(runner(&["links", LINK]).log_level(), tracing::Level::INFO);
    }
}
