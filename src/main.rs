// src/main.rs

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use quiz_engine::config::Config;
use quiz_engine::error::QuizError;
use quiz_engine::handlers::{history, import};
use quiz_engine::state::AppState;
use quiz_engine::store::{ResultSink, SqliteStore};
use quiz_engine::QuizSession;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quiz-engine", version, about = "Country/continent multiple-choice quiz")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Replace the stored facts with a two-column CSV (entity,category)
    Import { csv: PathBuf },
    /// Take one quiz in the terminal (default)
    Play,
    /// List past results, most recent first
    Results {
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration from environment (.env included)
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "quiz.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    // Console logs go to stderr so they don't interleave with quiz prompts
    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Err(e) = run(cli, config).await {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> Result<(), QuizError> {
    let store = SqliteStore::connect(&config.database_url).await?;
    tracing::info!("Database connected...");

    tracing::info!("Running migrations...");
    store.migrate().await?;
    tracing::info!("Migrations applied successfully.");

    // Seed facts on first run
    if let Some(csv) = &config.facts_csv {
        if let Err(e) = import::seed_if_empty(&store, Path::new(csv)).await {
            tracing::error!("Failed to seed facts from {}: {}", csv, e);
        }
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Import { csv } => {
            let count = import::import_csv(&store, &csv).await?;
            println!("Imported {} facts from {}", count, csv.display());
        }
        Command::Results { json } => {
            if json {
                let results = store.list_results().await?;
                let body = serde_json::to_string_pretty(&results)
                    .map_err(|e| QuizError::Storage(e.to_string()))?;
                println!("{}", body);
            } else {
                let lines = history::past_results(&store, config.question_count).await?;
                if lines.is_empty() {
                    println!("No quizzes taken yet.");
                }
                for line in lines {
                    println!("{}", line);
                }
            }
        }
        Command::Play => {
            let state = AppState::from_sqlite(store, config);
            play(&state).await?;
        }
    }

    Ok(())
}

/// Runs one quiz session on stdin/stdout.
async fn play(state: &AppState) -> Result<(), QuizError> {
    let mut session = QuizSession::new(state);
    let quiz = session.start().await?;

    let prompts: Vec<(String, Vec<String>)> = quiz
        .questions()
        .iter()
        .map(|q| (q.fact().entity().to_string(), q.options().to_vec()))
        .collect();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    for (index, (entity, options)) in prompts.iter().enumerate() {
        println!("\nQuestion {}/{}: Which continent is {} in?", index + 1, prompts.len(), entity);
        for (n, option) in options.iter().enumerate() {
            println!("  {}) {}", n + 1, option);
        }

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Failed to read answer: {}", e);
                break;
            }
        };

        let choice = line.trim();
        if choice.is_empty() {
            continue;
        }

        // Accept either the option number or the option text
        let answer = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
            .cloned()
            .unwrap_or_else(|| choice.to_string());

        session.record_answer(index, answer)?;
    }

    let summary = session.finish()?;

    println!("\nYou scored {}/{}", summary.score, summary.total);
    for item in &summary.review {
        let given = item.user_answer.as_deref().unwrap_or("no answer");
        if item.is_correct {
            println!("  {}: {} (correct)", item.entity, given);
        } else {
            println!("  {}: {} (correct answer: {})", item.entity, given, item.correct_answer);
        }
    }

    if let Some(save) = summary.save {
        if let Err(e) = save.await {
            tracing::warn!("Result save task failed: {}", e);
        }
    }

    Ok(())
}
