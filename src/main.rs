use std::io::{BufRead, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};

use slaystudy::catalog::Catalog;
use slaystudy::flashcards::FlashcardSession;
use slaystudy::pomodoro::{PomodoroTimer, TimerMode};
use slaystudy::quiz::{AnswerOutcome, Progress, QuizEngine};
use slaystudy::server::{serve, ServerConfig};
use slaystudy::stats::StatsStorage;

#[derive(Parser)]
#[command(
    name = "slaystudy",
    about = "Study tools: notes, quizzes, flashcards, a pomodoro timer, and an AI study chat",
    version
)]
struct Cli {
    /// Data directory for persisted stats (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (catalog API, stats, and the AI chat proxy)
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: SocketAddr,
        /// Directory with the static front-end, served at /
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Take a multiple-choice quiz on a subject
    Quiz {
        /// Subject, e.g. "biology" (unknown subjects get a generic quiz)
        subject: String,
    },

    /// Browse a flashcard deck interactively
    Cards {
        /// Deck key: science, history, math or literature
        #[arg(default_value = "science")]
        deck: String,
    },

    /// Run one pomodoro session to completion
    Pomodoro {
        /// Session mode
        #[arg(long, value_enum, default_value = "focus")]
        mode: ModeArg,
    },

    /// Print study notes for a topic
    Notes {
        /// Topic, e.g. "photosynthesis"
        topic: String,
    },

    /// Show persisted study statistics
    Stats,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Focus,
    Short,
    Long,
}

impl From<ModeArg> for TimerMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Focus => TimerMode::Focus,
            ModeArg::Short => TimerMode::ShortBreak,
            ModeArg::Long => TimerMode::LongBreak,
        }
    }
}

fn stats_storage(data_dir: Option<PathBuf>) -> anyhow::Result<StatsStorage> {
    let dir = data_dir
        .or_else(StatsStorage::default_data_dir)
        .ok_or_else(|| anyhow!("could not determine a data directory; pass --data-dir"))?;
    StatsStorage::new(dir).context("failed to initialize stats storage")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { addr, static_dir } => {
            let data_dir = cli
                .data_dir
                .or_else(StatsStorage::default_data_dir)
                .ok_or_else(|| anyhow!("could not determine a data directory; pass --data-dir"))?;
            serve(ServerConfig {
                addr,
                static_dir,
                data_dir,
            })
            .await
            .map_err(|e| anyhow!(e))?;
        }
        Command::Quiz { subject } => run_quiz(&subject)?,
        Command::Cards { deck } => run_cards(&deck, stats_storage(cli.data_dir)?)?,
        Command::Pomodoro { mode } => run_pomodoro(mode.into(), stats_storage(cli.data_dir)?).await?,
        Command::Notes { topic } => run_notes(&topic),
        Command::Stats => run_stats(stats_storage(cli.data_dir)?)?,
    }

    Ok(())
}

/// Read one trimmed line from stdin, or None at EOF.
fn read_line(prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn run_quiz(subject: &str) -> anyhow::Result<()> {
    let catalog = Catalog::new();
    let mut engine = QuizEngine::new();
    engine.start(subject, &catalog)?;

    loop {
        let session = engine.session().expect("quiz in progress");
        let number = session.current_index + 1;
        let total = session.questions.len();
        let question = engine.current_question().expect("quiz in progress").clone();

        println!("\nQuestion {}/{}: {}", number, total, question.prompt);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }

        // Keep asking until we get a usable answer
        let outcome = loop {
            let line = match read_line("Your answer (1-4): ")? {
                Some(line) => line,
                None => return Ok(()),
            };
            let choice = match line.parse::<usize>() {
                Ok(n) if n >= 1 => n - 1,
                _ => {
                    println!("Please enter a number between 1 and {}.", question.options.len());
                    continue;
                }
            };
            match engine.select_answer(choice) {
                Ok(outcome) => break outcome,
                Err(err) => println!("{}", err),
            }
        };

        match outcome {
            AnswerOutcome::Correct => println!("Correct! ✅"),
            AnswerOutcome::Incorrect => println!(
                "Incorrect. The answer was: {}",
                question.options[question.correct_index]
            ),
            AnswerOutcome::AlreadyAnswered => {}
        }

        if engine.advance()? == Progress::Completed {
            break;
        }
    }

    let results = engine.results()?;
    println!(
        "\nYou scored {}/{} ({:.0}%)",
        results.score, results.total, results.percentage
    );
    println!("{}", results.band.message());
    Ok(())
}

fn run_cards(deck_key: &str, storage: StatsStorage) -> anyhow::Result<()> {
    let catalog = Catalog::new();
    let mut stats = storage.load()?;
    let mut session = FlashcardSession::new(catalog.deck(deck_key), &mut stats)?;

    println!("Deck: {} ({} cards)", session.deck().name, session.deck().cards.len());
    println!("Commands: [f]lip, [n]ext, [p]revious, [s]huffle, [q]uit");

    loop {
        let card = session.current_card();
        let side = if session.is_flipped() {
            format!("A: {}", card.answer)
        } else {
            format!("Q: {}", card.question)
        };
        println!("\n[{}] {}", session.progress(), side);

        let command = match read_line("> ")? {
            Some(command) => command,
            None => break,
        };
        match command.as_str() {
            "f" => session.flip(),
            "n" | "" => {
                if !session.next(&mut stats) {
                    println!("End of deck.");
                }
            }
            "p" => {
                if !session.previous(&mut stats) {
                    println!("Start of deck.");
                }
            }
            "s" => {
                session.shuffle(&mut stats);
                println!("Deck shuffled.");
            }
            "q" => break,
            other => println!("Unknown command: {}", other),
        }
        storage.save(&stats)?;
    }

    storage.save(&stats)?;
    println!("Cards studied so far: {}", stats.cards_studied);
    Ok(())
}

async fn run_pomodoro(mode: TimerMode, storage: StatsStorage) -> anyhow::Result<()> {
    let mut stats = storage.load()?;
    let mut timer = PomodoroTimer::new();
    timer.switch_mode(mode);
    timer.start();

    println!("{} — {}", timer.mode().label(), timer.display());

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.tick().await; // first tick completes immediately

    let next = loop {
        interval.tick().await;
        if let Some(next) = timer.tick(&mut stats) {
            break next;
        }
        print!("\r{}  ", timer.display());
        std::io::stdout().flush()?;
    };

    storage.save(&stats)?;
    println!("\r{} complete! 🎉", mode.label());
    println!("Next up: {}", next.label());
    if mode == TimerMode::Focus {
        println!(
            "Sessions today: {} | Total focus: {} | Streak: {}",
            stats.sessions_today,
            stats.focus_time_display(),
            stats.current_streak
        );
    }
    Ok(())
}

fn run_notes(topic: &str) {
    let catalog = Catalog::new();
    let notes = catalog.notes(topic);
    println!("# {}\n", notes.title);
    println!("{}", notes.content_html);
}

fn run_stats(storage: StatsStorage) -> anyhow::Result<()> {
    let stats = storage.load()?;
    println!("Theme:            {}", stats.theme);
    println!("Cards studied:    {}", stats.cards_studied);
    println!("Sessions today:   {}", stats.sessions_today);
    println!("Total focus time: {}", stats.focus_time_display());
    println!("Current streak:   {}", stats.current_streak);
    println!("Last reset date:  {}", stats.last_reset_date);
    Ok(())
}
