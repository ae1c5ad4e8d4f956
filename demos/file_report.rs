use char_frequency::SentenceParser;
use std::path::PathBuf;

fn main() {
    env_logger::init();

    let input_path = PathBuf::from_iter(["demos", "data", "logic.txt"]);
    let output_path = PathBuf::from_iter(["target", "logic_output.txt"]);

    let sentence_parser = SentenceParser::from_file(&input_path).unwrap();

    match sentence_parser.write_report_to_file(&output_path) {
        Ok(()) => println!(
            "File with the output was created. Check {}!",
            output_path.display()
        ),
        Err(e) => eprintln!("Failed to write the report: {}", e),
    }
}
