use char_frequency::{SentenceParser, DEMO_SENTENCE, DEMO_TARGET_CHARS};

fn main() {
    env_logger::init();

    let sentence_parser = SentenceParser::new(DEMO_SENTENCE, DEMO_TARGET_CHARS).unwrap();

    println!(
        "Frequencies of \"{}\" in the sentence \"{}\"",
        DEMO_TARGET_CHARS, DEMO_SENTENCE
    );
    for line in sentence_parser.report_lines().unwrap() {
        println!("{}", line);
    }
}
