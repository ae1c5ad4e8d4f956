use crate::Error;
use std::io::BufRead;

/// Reads a sentence and a set of target characters from a two-line source.
///
/// The first line holds the sentence and the second line the characters.
///
/// # Errors
/// * `Error::IoError` if reading fails.
/// * `Error::InvalidArgument` if the source does not contain exactly two lines.
pub fn read_two_line_source<R: BufRead>(reader: R) -> Result<(String, String), Error> {
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;

    match <[String; 2]>::try_from(lines) {
        Ok([sentence, target_chars]) => Ok((sentence, target_chars)),
        Err(lines) => Err(Error::InvalidArgument(format!(
            "Given source must have exactly two lines, the first containing a phrase and \
             the second the set of characters (found {} lines)",
            lines.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_two_lines() {
        let (sentence, target_chars) =
            read_two_line_source("I love to work in global logic!\nLOGIC\n".as_bytes()).unwrap();

        assert_eq!(sentence, "I love to work in global logic!");
        assert_eq!(target_chars, "LOGIC");
    }

    #[test]
    fn test_rejects_wrong_line_count() {
        assert!(matches!(
            read_two_line_source("only one line".as_bytes()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            read_two_line_source("a\nb\nc".as_bytes()),
            Err(Error::InvalidArgument(_))
        ));
    }
}
