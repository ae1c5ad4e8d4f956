use char_frequency::{
    prompt_non_empty_line, Error, SentenceParser, SENTENCE_PROMPT, TARGET_CHARS_PROMPT,
};
use clap::Parser;
use log::error;
use std::io::{self, Write};
use std::path::PathBuf;

/// Prints how often a set of characters occurs in each word shape of a sentence.
///
/// Without `--input` or `--sentence`/`--chars`, both values are read interactively.
#[derive(Parser, Debug)]
#[command(name = "char-frequency-cli", version)]
struct Args {
    /// File whose first line is the sentence and second line the set of characters
    #[arg(short, long, conflicts_with_all = ["sentence", "chars"])]
    input: Option<PathBuf>,

    /// Sentence to analyze
    #[arg(short, long, requires = "chars")]
    sentence: Option<String>,

    /// Set of characters to look for
    #[arg(short, long, requires = "sentence")]
    chars: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn build_parser(args: &Args) -> Result<SentenceParser, Error> {
    if let Some(input) = &args.input {
        return SentenceParser::from_file(input);
    }

    if let (Some(sentence), Some(chars)) = (&args.sentence, &args.chars) {
        return SentenceParser::new(sentence, chars);
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    let sentence = prompt_non_empty_line(&mut reader, &mut stdout, SENTENCE_PROMPT)?;
    let chars = prompt_non_empty_line(&mut reader, &mut stdout, TARGET_CHARS_PROMPT)?;
    writeln!(stdout)?;

    SentenceParser::new(&sentence, &chars)
}

fn run(args: &Args) -> Result<(), Error> {
    let sentence_parser = build_parser(args)?;

    match &args.output {
        Some(output) => {
            sentence_parser.write_report_to_file(output)?;
            println!("Report written to {}", output.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            sentence_parser.write_report(&mut stdout)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("Error analyzing sentence: {}", e);
        std::process::exit(1);
    }
}
