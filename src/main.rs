// WeatherRun v0.1
use std::process::ExitCode;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod cli;
mod config;
mod db;
mod errors;
mod helpers;
mod services;
mod views;

use app::AppState;
use cli::CliArgs;
use config::AppConfig;
use errors::AppError;
use services::visual_crossing::VisualCrossingClient;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "weatherrun=warn".into());
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// One query: restore preferences, apply overrides, fetch, score, render.
async fn run(cli: &CliArgs) -> Result<String, AppError> {
    let config = AppConfig::from_env()?;

    let pool = db::connect(&config.database_url).await?;
    let prefs = db::queries::load_preferences(&pool).await?;

    let mut state = AppState::restore(&prefs);
    if let Some(location) = &cli.location {
        state.search(location);
    }
    if let Some(time) = cli.time {
        state.set_run_time(time);
    }
    if cli.shift != 0 {
        state.adjust_hour(cli.shift);
    }

    if state.location.is_none() {
        return Ok(views::EMPTY_STATE_HINT.to_string());
    }

    let client = VisualCrossingClient::new(&config)?;
    let reference = chrono::Local::now().naive_local();
    app::load_weather(&mut state, &client, &pool, reference).await?;
    pool.close().await;

    let rec = state
        .result
        .as_ref()
        .ok_or_else(|| AppError::InternalError("query finished without a result".to_string()))?;
    tracing::info!("Scored {} days for {}", rec.days.len(), rec.location);

    match cli.share {
        Some(number) => views::share::share_day(rec, number),
        None if cli.json => views::json::render_recommendation(rec),
        None => Ok(views::cards::render_recommendation(rec)),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("weatherrun");

    let cli = match cli::parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}\n", e.user_message());
            eprint!("{}", cli::usage(program));
            return ExitCode::FAILURE;
        }
    };

    if cli.help {
        print!("{}", cli::usage(program));
        return ExitCode::SUCCESS;
    }

    match run(&cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if cli.json {
                println!("{}", views::json::render_error(&e));
            }
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
