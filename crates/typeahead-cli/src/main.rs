use std::fs;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use typeahead_core::ingest::normalize_word;
use typeahead_session::Predictor;

#[derive(Parser)]
#[command(name = "typeahead", about = "Predictive-text engine diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a phrase keystroke by keystroke and print suggestions
    Suggest {
        /// Path to the dictionary word list (one word per line)
        dict_file: String,
        /// Phrase to type, e.g. "the cat sat"
        phrase: String,
        /// Message corpus files used to train the bigram model (repeatable)
        #[arg(long)]
        corpus: Vec<String>,
    },

    /// Replay a message file and report how often the typed word was suggested
    Simulate {
        /// Path to the dictionary word list (one word per line)
        dict_file: String,
        /// Path to the message file to replay
        message_file: String,
        /// Message corpus files used to train the bigram model (repeatable)
        #[arg(long)]
        corpus: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct SimulateSummary {
    words: usize,
    keystrokes: usize,
    predicted_words: usize,
    predicted_rate: String,
    first_letter_hits: usize,
    keystrokes_saved: usize,
    saved_rate: String,
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path, e);
        process::exit(1);
    })
}

fn build_predictor(dict_file: &str, corpus: &[String]) -> Predictor {
    let mut predictor = Predictor::with_empty_lexicon();
    predictor.load(&read_file(dict_file), true);
    for path in corpus {
        predictor.load(&read_file(path), false);
    }

    let lexicon = predictor.lexicon();
    let (words, nodes) = lexicon
        .read()
        .map(|l| l.stats())
        .expect("lexicon lock poisoned");
    eprintln!("Loaded {} words ({} nodes)", words, nodes);

    predictor
}

fn run_suggest(predictor: &mut Predictor, phrase: &str) {
    for (word_index, raw) in phrase.split_whitespace().enumerate() {
        let Some(word) = normalize_word(raw) else {
            continue;
        };
        println!("word {}: {:?}", word_index, word);

        let mut found = false;
        for (pos, letter) in word.chars().enumerate() {
            let resp = predictor.guess(letter, pos, word_index);
            found |= resp.contains(&word);
            println!("  {} -> {}", letter, resp.join(" | "));
        }
        predictor.feedback(found, &word);
    }
}

fn run_simulate(predictor: &mut Predictor, messages: &str) -> SimulateSummary {
    let mut words = 0usize;
    let mut keystrokes = 0usize;
    let mut predicted_words = 0usize;
    let mut first_letter_hits = 0usize;
    let mut keystrokes_saved = 0usize;

    let mut word_index = 0usize;
    for line in messages.lines() {
        for raw in line.split_whitespace() {
            let Some(word) = normalize_word(raw) else {
                continue;
            };
            words += 1;

            let mut first_hit: Option<usize> = None;
            for (pos, letter) in word.chars().enumerate() {
                let resp = predictor.guess(letter, pos, word_index);
                keystrokes += 1;
                if first_hit.is_none() && resp.contains(&word) {
                    first_hit = Some(pos);
                }
            }

            if let Some(pos) = first_hit {
                predicted_words += 1;
                if pos == 0 {
                    first_letter_hits += 1;
                }
                keystrokes_saved += word.chars().count() - (pos + 1);
            }

            predictor.feedback(first_hit.is_some(), &word);
            word_index += 1;
        }
        // line boundary: clear the bigram anchor, as ingestion does
        predictor.guess('\n', 0, word_index);
    }

    let rate = |part: usize, whole: usize| {
        if whole > 0 {
            format!("{:.1}%", part as f64 / whole as f64 * 100.0)
        } else {
            "0.0%".to_string()
        }
    };

    SimulateSummary {
        words,
        keystrokes,
        predicted_words,
        predicted_rate: rate(predicted_words, words),
        first_letter_hits,
        keystrokes_saved,
        saved_rate: rate(keystrokes_saved, keystrokes),
    }
}

#[cfg(feature = "trace")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

#[cfg(not(feature = "trace"))]
fn init_tracing() {}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Suggest {
            dict_file,
            phrase,
            corpus,
        } => {
            let mut predictor = build_predictor(&dict_file, &corpus);
            run_suggest(&mut predictor, &phrase);
        }

        Command::Simulate {
            dict_file,
            message_file,
            corpus,
            json,
        } => {
            let mut predictor = build_predictor(&dict_file, &corpus);
            let messages = read_file(&message_file);
            let summary = run_simulate(&mut predictor, &messages);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).expect("JSON serialization failed")
                );
            } else {
                println!("=== Summary ===");
                println!("  Words:             {}", summary.words);
                println!("  Keystrokes:        {}", summary.keystrokes);
                println!(
                    "  Predicted:         {} ({})",
                    summary.predicted_words, summary.predicted_rate
                );
                println!("  First-letter hits: {}", summary.first_letter_hits);
                println!(
                    "  Keystrokes saved:  {} ({})",
                    summary.keystrokes_saved, summary.saved_rate
                );
            }
        }
    }
}
