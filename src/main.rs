use clap::Parser;
use serde::Serialize;
use std::error::Error;

use morsel::{
    annotate, build, encode_collection, factorize_all, factorize_strict, rank, representative,
    verify_automaton, Alphabet, Automaton, Piece, RankedSubword,
};

mod cli;
use cli::display::{self, Accent};
use cli::{AlphabetArg, Cli, Commands, InputArgs};

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Rank { input, limit, json } => run_rank(&input, limit, json),
        Commands::Factor {
            input,
            strict,
            json,
        } => run_factor(&input, strict, json),
        Commands::Inspect { input, json } => run_inspect(&input, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Gather the collection from positional args or `--input`, normalizing
/// unless `--raw` was given.
fn load_collection(input: &InputArgs) -> Result<Vec<String>, Box<dyn Error>> {
    let mut words = input.words.clone();
    if let Some(path) = &input.input {
        words.extend(morsel::read_words(path)?);
    }
    if !input.raw {
        words = words.iter().map(|w| morsel::normalize(w)).collect();
    }
    Ok(words)
}

fn alphabet_of(arg: AlphabetArg) -> Alphabet {
    match arg {
        AlphabetArg::Any => Alphabet::any(),
        AlphabetArg::Ascii => Alphabet::ascii(),
        AlphabetArg::Lowercase => Alphabet::lowercase(),
    }
}

/// Build and annotate the automaton once; both query paths share it.
fn build_annotated(words: &[String], alphabet: &Alphabet) -> Result<Automaton, Box<dyn Error>> {
    let encoded = encode_collection(words, alphabet)?;
    let mut automaton = build(&encoded);
    annotate(&mut automaton);
    Ok(automaton)
}

fn run_rank(input: &InputArgs, limit: usize, json: bool) -> Result<(), Box<dyn Error>> {
    let words = load_collection(input)?;
    let automaton = build_annotated(&words, &alphabet_of(input.alphabet))?;

    // Rank compactly, then materialize only what gets printed.
    let entries = rank(&automaton);
    let top: Vec<RankedSubword> = entries
        .iter()
        .take(limit)
        .map(|entry| RankedSubword {
            text: representative(&automaton, entry),
            occurrences: entry.occurrences,
            score: entry.score,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&top)?);
        return Ok(());
    }

    display::header(&format!(
        "top {} of {} subwords ({} words)",
        top.len(),
        display::format_count(entries.len()),
        words.len()
    ));
    println!(
        "{:>12}  {:>10}  {}",
        display::dim("score"),
        display::dim("count"),
        display::dim("subword")
    );
    for entry in &top {
        println!(
            "{:>12}  {:>10}  {}",
            display::paint(Accent::Green, &display::format_count(entry.score as usize)),
            display::format_count(entry.occurrences),
            display::bold(&entry.text)
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct FactorOutput {
    word: String,
    /// `None` only in strict mode, for words with no true factorization.
    pieces: Option<Vec<Piece>>,
}

fn run_factor(input: &InputArgs, strict: bool, json: bool) -> Result<(), Box<dyn Error>> {
    let words = load_collection(input)?;
    let automaton = build_annotated(&words, &alphabet_of(input.alphabet))?;

    let outputs: Vec<FactorOutput> = if strict {
        words
            .iter()
            .map(|word| FactorOutput {
                word: word.clone(),
                pieces: factorize_strict(&automaton, word),
            })
            .collect()
    } else {
        let all = factorize_all(&automaton, &words);
        words
            .iter()
            .zip(all)
            .map(|(word, pieces)| FactorOutput {
                word: word.clone(),
                pieces: Some(pieces),
            })
            .collect()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    for output in &outputs {
        match &output.pieces {
            Some(pieces) => {
                let rendered: Vec<String> = pieces
                    .iter()
                    .map(|p| {
                        if p.occurrences >= morsel::MIN_PIECE_OCCURRENCES {
                            display::paint(Accent::Blue, &p.text)
                        } else {
                            display::paint(Accent::Yellow, &p.text)
                        }
                    })
                    .collect();
                println!(
                    "{}  {}  {}",
                    display::bold(&output.word),
                    display::dim("="),
                    rendered.join(&display::dim("·"))
                );
            }
            None => {
                println!(
                    "{}  {}",
                    display::bold(&output.word),
                    display::paint(Accent::Red, "no factorization")
                );
            }
        }
    }
    Ok(())
}

fn run_inspect(input: &InputArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let words = load_collection(input)?;
    let automaton = build_annotated(&words, &alphabet_of(input.alphabet))?;
    let report = verify_automaton(&automaton)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    display::header("automaton");
    println!("  words             {}", display::format_count(words.len()));
    println!("  characters        {}", display::format_count(total_chars));
    println!("  states            {}", display::format_count(report.states));
    println!(
        "  transitions       {}",
        display::format_count(report.transitions)
    );
    println!("  clones            {}", display::format_count(report.clones));
    println!(
        "  sentinel states   {}",
        display::format_count(report.sentinel_states)
    );
    println!(
        "  reachable states  {}",
        display::format_count(report.reachable_states)
    );
    println!("  longest substring {}", display::format_count(report.max_len));
    println!(
        "  invariants        {}",
        display::paint(Accent::Green, "ok")
    );
    Ok(())
}
