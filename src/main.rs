use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use wordsift::{solve, Constraints, Dictionary};


/// file the solutions are written to with `--save`
const SOLUTIONS_FILE: &str = "solutions.txt";


/// Command-line app for solving Wordle problems
#[derive(Parser)]
#[clap(version)]
struct Args {
    /// Print intermediate results to ensure the application is running correctly
    #[clap(long)]
    debug: bool,

    /// Text file from which to read in words, one per line
    #[clap(long, default_value = "freebsd_words.txt")]
    dict: String,

    /// The length of the word to be found
    #[clap(long, default_value = "5")]
    length: usize,

    /// Letters known to not be in the word, separated by commas, e.g. `m,s,e`
    #[clap(long, default_value = "")]
    exclude: String,

    /// Letters known to be in the word at unknown positions, separated by commas, e.g. `m,s,e`
    #[clap(long, default_value = "")]
    include: String,

    /// Known positions and letters, separated by commas, e.g. `1m,2o,3u`
    #[clap(long, default_value = "")]
    known: String,

    /// Save the solutions to `solutions.txt` instead of printing them
    #[clap(long)]
    save: bool,
}


fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "wordsift=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let constraints = Constraints::parse(args.length, &args.exclude, &args.include, &args.known);
    if args.debug {
        print_constraints(&constraints).context("printing parsed constraints")?;
    }

    let dictionary = match Dictionary::load(&args.dict) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            println!("Failed to read in words from the text file.");
            eprintln!("wordsift: {:#}", anyhow::Error::new(err));
            return Ok(());
        }
    };
    log::debug!("loaded {} words from {}", dictionary.len(), args.dict);

    let words = solve(&constraints, &dictionary);

    if args.save {
        let file = File::create(SOLUTIONS_FILE).context("creating solutions file")?;
        write_words(BufWriter::new(file), &words).context("writing solutions file")?;
        log::debug!("saved {} words to {}", words.len(), SOLUTIONS_FILE);
    } else {
        write_words(io::stdout().lock(), &words).context("writing solutions")?;
    }
    Ok(())
}

fn write_words(mut out: impl Write, words: &[String]) -> io::Result<()> {
    for word in words {
        writeln!(out, "{word}")?;
    }
    out.flush()
}

fn print_constraints(constraints: &Constraints) -> io::Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "Letters to exclude:")?;
    for ch in constraints.excluded.iter() {
        writeln!(out, "{ch}")?;
    }
    writeln!(out)?;

    writeln!(out, "Valid letters:")?;
    for ch in constraints.allowed.iter() {
        writeln!(out, "{ch}")?;
    }
    writeln!(out)?;

    writeln!(out, "Required letters:")?;
    for ch in constraints.required.iter() {
        writeln!(out, "{ch}")?;
    }
    writeln!(out)?;

    writeln!(out, "Known letters:")?;
    for (i, ch) in constraints.known_positions() {
        writeln!(out, "{} = {ch}", i + 1)?;
    }
    writeln!(out)?;
    out.flush()
}
