use crate::Error;
use std::io::{BufRead, Write};

/// Writes `prompt` and reads lines from `reader` until a non-empty one arrives.
///
/// The trailing line ending is not part of the returned line.
///
/// # Errors
/// * `Error::IoError` if writing the prompt or reading a line fails.
/// * `Error::InvalidArgument` if the input ends before a non-empty line is read.
pub fn prompt_non_empty_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String, Error> {
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::InvalidArgument(
                "Input ended before a non-empty line was given".to_string(),
            ));
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if !line.is_empty() {
            return Ok(line.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reprompts_on_empty_lines() {
        let mut reader = "\n\r\nLOGIC\r\n".as_bytes();
        let mut output = Vec::new();

        let line = prompt_non_empty_line(&mut reader, &mut output, "> ").unwrap();

        assert_eq!(line, "LOGIC");
        assert_eq!(String::from_utf8(output).unwrap(), "> > > ");
    }

    #[test]
    fn test_end_of_input() {
        let mut reader = "\n".as_bytes();
        let mut output = Vec::new();

        assert!(matches!(
            prompt_non_empty_line(&mut reader, &mut output, "> "),
            Err(Error::InvalidArgument(_))
        ));
    }
}
