//! Command-line front end for the assessment engine.
//!
//! Usage:
//!   mbti-engine quiz --user <id> [--retake] [--offline]
//!   mbti-engine types
//!   mbti-engine show INTJ
//!   mbti-engine latest --user <id> [--json]
//!   mbti-engine access --user <id>
//!   mbti-engine init-schema

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mbti_engine::assessment::{Choice, PersonalityType, QUESTION_COUNT, SessionState, profile_for};
use mbti_engine::config::{Config, DEFAULT_LOG_FILTER};
use mbti_engine::presentation::{PreviousResultSummary, ResultView};
use mbti_engine::store::{MemoryStore, ResultStore, SurrealStore};
use mbti_engine::{AccessGate, AccessStatus, AssessmentEngine};
use prettytable::{Table, row};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mbti-engine")]
#[command(about = "MBTI personality assessment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the 48-question assessment interactively
    Quiz {
        /// User id; results are only stored when present
        #[arg(long)]
        user: Option<String>,
        /// Update the existing result instead of creating one
        #[arg(long)]
        retake: bool,
        /// Use an in-memory store instead of SurrealDB
        #[arg(long)]
        offline: bool,
    },
    /// List the 16 types
    Types,
    /// Show the profile of one type
    Show { code: String },
    /// Show a user's latest stored result
    Latest {
        #[arg(long)]
        user: String,
        /// Print the stored record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a user may take the assessment
    Access {
        #[arg(long)]
        user: Option<String>,
    },
    /// Define the assessment tables
    InitSchema,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("failed to load configuration")?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Quiz {
            user,
            retake,
            offline,
        } => quiz(&config, user.as_deref(), retake, offline).await,
        Commands::Types => {
            list_types();
            Ok(())
        }
        Commands::Show { code } => show_type(&code),
        Commands::Latest { user, json } => latest(&config, &user, json).await,
        Commands::Access { user } => access(&config, user.as_deref()).await,
        Commands::InitSchema => {
            let store = SurrealStore::connect(&config).await?;
            store.initialize_schema().await?;
            println!("✅ Schema initialized");
            Ok(())
        }
    }
}

async fn build_engine(config: &Config, offline: bool) -> Result<AssessmentEngine> {
    if offline {
        info!("Using in-memory store");
        return Ok(AssessmentEngine::from_store(
            config,
            Arc::new(MemoryStore::new()),
        ));
    }
    let store = SurrealStore::connect(config).await?;
    Ok(AssessmentEngine::from_store(config, Arc::new(store)))
}

async fn quiz(config: &Config, user: Option<&str>, retake: bool, offline: bool) -> Result<()> {
    let engine = build_engine(config, offline).await?;
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = SessionState::start(retake);

    while let Some(question) = state.current_question() {
        let index = state.index().unwrap_or_default();
        println!(
            "\nQuestion {} of {} ({:.0}%)",
            index + 1,
            QUESTION_COUNT,
            state.progress_percent()
        );
        println!("{}", question.prompt);
        let marker = |c: Choice| {
            if state.recorded_answer(index) == Some(c) {
                "*"
            } else {
                " "
            }
        };
        println!(" {}a) {}", marker(Choice::A), question.option_a);
        println!(" {}b) {}", marker(Choice::B), question.option_b);
        print!("[a/b/back/quit] > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\nInput closed; quiz abandoned.");
            return Ok(());
        };
        let input = line?.trim().to_ascii_lowercase();
        state = match input.as_str() {
            "quit" | "q" => {
                println!("Quiz abandoned; nothing was saved.");
                return Ok(());
            }
            "back" => state.previous()?,
            other => match other.parse::<Choice>() {
                Ok(choice) => engine.submit(&state, choice, user).await?,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
        };
    }

    if state.is_scoring() {
        state = engine.complete(&state, user).await?;
    }
    if let Some(completion) = state.completion() {
        print_result(&ResultView::from_completion(completion));
        for warning in &completion.warnings {
            eprintln!("⚠️  {warning}");
        }
    }
    Ok(())
}

fn print_result(view: &ResultView) {
    println!("\n🎉 {}", view.headline.title);
    println!("{}\n", view.headline.description);
    println!("{} · {}", view.personality_type, view.profile.title);
    println!("{}\n", view.profile.description);

    let mut table = Table::new();
    table.add_row(row!["Dimension", "Split", "Percent"]);
    for d in &view.dimensions {
        table.add_row(row![
            d.dimension.label(),
            format!("{} {} / {} {}", d.first, d.first_count, d.second, d.second_count),
            format!("{}% {}", d.first_percent, d.first)
        ]);
    }
    table.printstd();

    println!("\nTraits: {}", view.profile.traits.join(", "));
    println!("Strengths: {}", view.profile.strengths.join("; "));
    println!("Challenges: {}", view.profile.challenges.join("; "));
    println!("Work style: {}", view.profile.work_style);

    if !view.careers.is_empty() {
        let mut careers = Table::new();
        careers.add_row(row!["Career", "Industry", "Description"]);
        for c in &view.careers {
            careers.add_row(row![c.title, c.industry, c.description]);
        }
        println!("\nRecommended careers");
        careers.printstd();
    }
    if !view.courses.is_empty() {
        let mut courses = Table::new();
        courses.add_row(row!["Course", "Category", "Description"]);
        for c in &view.courses {
            courses.add_row(row![c.title, c.category, c.description]);
        }
        println!("\nRecommended courses");
        courses.printstd();
    }
}

fn list_types() {
    let mut table = Table::new();
    table.add_row(row!["Type", "Title", "Description"]);
    for t in PersonalityType::ALL {
        let profile = profile_for(t);
        table.add_row(row![t.code(), profile.title, profile.description]);
    }
    table.printstd();
}

fn show_type(code: &str) -> Result<()> {
    let t: PersonalityType = code.parse()?;
    let profile = profile_for(t);
    println!("{} · {}", t, profile.title);
    println!("{}", profile.description);
    println!("\nTraits: {}", profile.traits.join(", "));
    println!("Strengths:");
    for s in profile.strengths {
        println!("  - {s}");
    }
    println!("Challenges:");
    for c in profile.challenges {
        println!("  - {c}");
    }
    println!("Work style: {}", profile.work_style);
    Ok(())
}

async fn latest(config: &Config, user: &str, json: bool) -> Result<()> {
    let store = SurrealStore::connect(config).await?;
    match store.latest_result(user).await? {
        Some(record) if json => println!("{}", serde_json::to_string_pretty(&record)?),
        Some(record) => print_previous(&PreviousResultSummary::from_record(&record)),
        None => println!("No stored result for {user}"),
    }
    Ok(())
}

fn print_previous(summary: &PreviousResultSummary) {
    println!(
        "{} · {} (completed {})",
        summary.personality_type,
        summary.title,
        summary.completed_at.format("%Y-%m-%d %H:%M UTC")
    );
    for line in summary.score_lines() {
        println!("  {line}");
    }
}

async fn access(config: &Config, user: Option<&str>) -> Result<()> {
    let store = Arc::new(SurrealStore::connect(config).await?);
    let gate = AccessGate::new(store.clone(), store, config.assessment.course_id.clone());
    let status = gate.check(user).await;
    match &status {
        AccessStatus::LoginRequired => println!("🔒 Please log in to take the assessment."),
        AccessStatus::PurchaseRequired => {
            println!("🛒 The assessment course ({}) must be purchased first.", gate.course_id())
        }
        AccessStatus::Granted { previous: None } => {
            println!("✅ Access granted; no previous result, the quiz starts immediately.")
        }
        AccessStatus::Granted {
            previous: Some(record),
        } => {
            println!("✅ Access granted. Previous result:");
            print_previous(&PreviousResultSummary::from_record(record));
        }
    }
    println!("auto_start={}", status.should_auto_start());
    Ok(())
}
