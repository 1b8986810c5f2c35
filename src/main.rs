use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use clap::Subcommand;
use release_comment::Plugin as _;
use release_comment::ReleaseCommentNotifier;
use release_comment::config::HookKind;
use release_comment::config::NotifierOptions;
use release_comment::event::CanaryEvent;
use release_comment::event::ReleaseContext;
use release_comment::event::ReleaseEvent;
use release_comment::host::Host;
use release_comment::host::PR_NUMBER_VAR;
use release_comment::host::comment::CommentPoster;
use release_comment::host::comment::CommentRequest;
use release_comment::host::hooks::Hooks;
use release_comment::host::logger::TracingLogger;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::Layer as _;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[derive(Parser)]
#[command(name = "release-comment")]
#[command(about = "Preview the PR comments the release-comment plugin would post", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fire the canary hook and print the resulting comment
    Canary {
        /// Canary version string
        #[arg(short, long)]
        version: String,
        /// PR number (defaults to the PR_NUMBER environment variable)
        #[arg(short, long)]
        pr: Option<u64>,
        /// Comment heading
        #[arg(long)]
        heading: Option<String>,
        /// Note appended to the comment
        #[arg(long)]
        note: Option<String>,
    },
    /// Fire the release-shipped hook and print the resulting comment
    Ship {
        /// Released version string
        #[arg(short, long)]
        version: String,
        /// Release context: canary, next, latest, or anything else
        #[arg(short, long, default_value = "latest")]
        context: String,
        /// Comment heading
        #[arg(long)]
        heading: Option<String>,
        /// Note appended to the comment
        #[arg(long)]
        note: Option<String>,
    },
}

/// Comment capability that prints the comment instead of posting it.
struct StdoutComments;

#[async_trait]
impl CommentPoster for StdoutComments {
    async fn comment(&self, request: CommentRequest) -> Result<()> {
        match request.pr {
            Some(pr) => println!("--- comment on PR #{pr} ({}) ---", request.context),
            None => println!("--- comment ({}) ---", request.context),
        }
        println!("{}", request.message);
        Ok(())
    }
}

fn setup_logging() -> Result<()> {
    let timer = tracing_subscriber::fmt::time::ChronoLocal::new("%H:%M:%S%.3f".into());
    let format = tracing_subscriber::fmt::format().with_timer(timer);
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;
    let subscriber = tracing_subscriber::fmt::layer()
        .event_format(format)
        .with_filter(filter);
    tracing_subscriber::registry().with(subscriber).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Canary {
            version,
            pr,
            heading,
            note,
        } => {
            let options = NotifierOptions {
                hook: HookKind::Canary,
                context: heading,
                note,
                ..Default::default()
            };

            let mut hooks = Hooks::default();
            Arc::new(ReleaseCommentNotifier::new(options)).apply(&mut hooks);

            let host = Arc::new(Host::new(
                Arc::new(TracingLogger),
                Some(Arc::new(StdoutComments)),
                pr.map(|pr| pr.to_string())
                    .or_else(|| std::env::var(PR_NUMBER_VAR).ok()),
            ));
            hooks
                .canary
                .call(
                    &host,
                    CanaryEvent::Released {
                        new_version: Some(version),
                    },
                )
                .await;
        }
        Commands::Ship {
            version,
            context,
            heading,
            note,
        } => {
            let options = NotifierOptions {
                hook: HookKind::AfterShip,
                context: heading,
                note,
                ..Default::default()
            };

            let mut hooks = Hooks::default();
            Arc::new(ReleaseCommentNotifier::new(options)).apply(&mut hooks);

            let host = Arc::new(Host::new(
                Arc::new(TracingLogger),
                Some(Arc::new(StdoutComments)),
                None,
            ));
            hooks
                .after_ship
                .call(
                    &host,
                    ReleaseEvent {
                        new_version: Some(version),
                        context: ReleaseContext::from(context.as_str()),
                    },
                )
                .await;
        }
    }

    Ok(())
}
