use std::fmt;
use std::sync::Arc;

use services::api::DEFAULT_DOMAIN_URL;
use services::{
    ApiClient, ApiConfig, Clock, FixedMinutes, LoginRequest, StaticSubscription, StudyFlow,
    TracingAnalytics,
};
use study_core::model::{ModeKind, SelectionEvent, TimedMinutes, UserTestId};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod console;

use console::ConsoleHost;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownEvent(String),
    InvalidMinutes { raw: String },
    InvalidRunId { raw: String },
    MissingToken,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownEvent(raw) => write!(f, "unknown selection: {raw}"),
            ArgsError::InvalidMinutes { raw } => write!(f, "invalid --minutes value: {raw}"),
            ArgsError::InvalidRunId { raw } => write!(f, "invalid --submit value: {raw}"),
            ArgsError::MissingToken => write!(f, "login requires --token or STUDY_USER_TOKEN"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- select <event> [--subscribed] [--minutes <n>] [--submit <id>] [--course <name>]");
    eprintln!("  cargo run -p app -- settings");
    eprintln!("  cargo run -p app -- login [--token <t>] [--domain <url>] [--api-key <k>]");
    eprintln!();
    eprintln!("Events:");
    eprintln!("  brief, title, unlock, take-test, ten, random, missed, daily, saved, timed");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDY_SUBSCRIBED, STUDY_API_DOMAIN, STUDY_API_KEY, STUDY_USER_TOKEN, RUST_LOG");
}

fn parse_event(raw: &str) -> Result<SelectionEvent, ArgsError> {
    let event = match raw {
        "brief" => SelectionEvent::Brief,
        "title" => SelectionEvent::Title,
        "unlock" => SelectionEvent::UnlockAllQuestions,
        "take-test" => SelectionEvent::TakeTest {
            free_sample_only: true,
        },
        "ten" => SelectionEvent::Mode(ModeKind::TenQuestions),
        "random" => SelectionEvent::Mode(ModeKind::Random),
        "missed" => SelectionEvent::Mode(ModeKind::Missed),
        "daily" => SelectionEvent::Mode(ModeKind::DailyQuestion),
        "saved" => SelectionEvent::Mode(ModeKind::Saved),
        "timed" => SelectionEvent::Mode(ModeKind::Timed),
        _ => return Err(ArgsError::UnknownEvent(raw.to_string())),
    };
    Ok(event)
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

struct FlowArgs {
    subscribed: bool,
    minutes: Option<TimedMinutes>,
    submit_as: Option<UserTestId>,
    course: Option<String>,
}

impl FlowArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            subscribed: env_flag("STUDY_SUBSCRIBED"),
            minutes: None,
            submit_as: None,
            course: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--subscribed" => parsed.subscribed = true,
                "--minutes" => {
                    let value = require_value(args, "--minutes")?;
                    let minutes = value
                        .parse::<TimedMinutes>()
                        .map_err(|_| ArgsError::InvalidMinutes { raw: value.clone() })?;
                    parsed.minutes = Some(minutes);
                }
                "--submit" => {
                    let value = require_value(args, "--submit")?;
                    let run = value
                        .parse::<UserTestId>()
                        .map_err(|_| ArgsError::InvalidRunId { raw: value.clone() })?;
                    parsed.submit_as = Some(run);
                }
                "--course" => parsed.course = Some(require_value(args, "--course")?),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn into_flow(self) -> (StudyFlow, Option<String>) {
        let flow = StudyFlow::new(
            Clock::system(),
            Arc::new(StaticSubscription::new(self.subscribed)),
            Arc::new(ConsoleHost {
                submit_as: self.submit_as,
            }),
            Arc::new(FixedMinutes(self.minutes)),
            Arc::new(TracingAnalytics),
        );
        (flow, self.course)
    }
}

struct LoginArgs {
    token: String,
    config: Option<ApiConfig>,
}

impl LoginArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut token = std::env::var("STUDY_USER_TOKEN").ok();
        let mut config = ApiConfig::from_env();
        let mut domain = None;
        let mut api_key = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--token" => token = Some(require_value(args, "--token")?),
                "--domain" => domain = Some(require_value(args, "--domain")?),
                "--api-key" => api_key = Some(require_value(args, "--api-key")?),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if let Some(api_key) = api_key {
            let domain_url = config
                .as_ref()
                .map(|c| c.domain_url.clone())
                .unwrap_or_else(|| DEFAULT_DOMAIN_URL.to_string());
            config = Some(ApiConfig::new(domain_url, api_key));
        }
        if let (Some(domain), Some(config)) = (domain, config.as_mut()) {
            config.domain_url = domain;
        }

        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ArgsError::MissingToken)?;
        Ok(Self { token, config })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Select,
    Settings,
    Login,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "select" => Some(Self::Select),
            "settings" => Some(Self::Settings),
            "login" => Some(Self::Login),
            _ => None,
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);

    let cmd = match argv.next() {
        None => {
            print_usage();
            return Ok(());
        }
        Some(first) if first == "--help" || first == "-h" => {
            print_usage();
            return Ok(());
        }
        Some(first) => Command::from_arg(&first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    let report = |e: ArgsError| {
        eprintln!("{e}");
        print_usage();
        e
    };

    match cmd {
        Command::Select => {
            let raw = argv
                .next()
                .ok_or(ArgsError::MissingValue { flag: "select" })
                .map_err(report)?;
            let event = parse_event(&raw).map_err(report)?;
            let (flow, course) = FlowArgs::parse(&mut argv).map_err(report)?.into_flow();

            if let Some(course) = course {
                flow.screen_opened(&course);
            }
            let outcome = flow.select(event).await?;
            info!(?outcome, "selection handled");
            Ok(())
        }
        Command::Settings => {
            let (flow, _) = FlowArgs::parse(&mut argv).map_err(report)?.into_flow();
            let outcome = flow.settings_tapped().await?;
            info!(?outcome, "settings handled");
            Ok(())
        }
        Command::Login => {
            let args = LoginArgs::parse(&mut argv).map_err(report)?;
            let client = ApiClient::new(args.config);
            let body = client.login(&LoginRequest::new(args.token)).await?;
            println!("{body}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
