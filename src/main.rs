use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;

use clap::Parser;
use clap::builder::TypedValueParser;
use tag_quiz::config::{
    DEFAULT_QUESTION_COUNT, DEFAULT_QUESTIONS_PATH, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT,
};
use tag_quiz::{QuestionDataset, Session, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Number of questions per quiz
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_QUESTION_COUNT,
        value_parser = clap::value_parser!(u16)
            .range(MIN_QUESTION_COUNT as i64..=MAX_QUESTION_COUNT as i64)
            .map(usize::from)
    )]
    count: usize,

    /// Pre-select a topic tag (repeatable)
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Keep questions in file order instead of shuffling
    #[arg(long)]
    no_shuffle: bool,

    /// Write logs to this file (the terminal is taken by the quiz)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> std::io::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tag_quiz=info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // Without a file, only log when explicitly asked to.
        None if std::env::var_os("RUST_LOG").is_some() => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.as_ref()) {
        eprintln!("Error opening log file: {}", e);
        process::exit(1);
    }

    let dataset = match QuestionDataset::open(&args.questions) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let settings = Settings {
        question_count: args.count,
        shuffle: !args.no_shuffle,
        tags: args.tags.into_iter().collect(),
    };

    if let Err(e) = Session::new(&dataset, settings).run() {
        eprintln!("Error running quiz: {}", e);
        process::exit(1);
    }
}
