use anyhow::Result;
use signup_core::application::ports::ClockPort;
use signup_core::application::services::SignUpScreen;
use signup_core::config::AppConfig;
use signup_core::infrastructure::time::SystemClock;
use signup_core::presentation::console::{self, ConsoleRenderer, Flow, LineSink, StdoutSink};
use signup_core::presentation::theme::DEFAULT_THEME;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_filter());

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let mut screen = SignUpScreen::new(clock);
    let renderer = ConsoleRenderer::new(
        config.output_format(),
        DEFAULT_THEME.with_transition(config.transition()),
    );
    let sink: Arc<dyn LineSink> = Arc::new(StdoutSink);
    let _subscriptions = renderer.attach(&screen, Arc::clone(&sink));

    tracing::info!(output = %config.output_format(), "sign-up screen ready");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if console::handle_line(&mut screen, &renderer, sink.as_ref(), &line) == Flow::Quit {
            break;
        }
    }

    tracing::info!("sign-up screen closed");
    Ok(())
}

fn init_tracing(filter: &str) {
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
