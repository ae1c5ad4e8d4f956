use crate::constants::{DEFAULT_REPORT_CONFIG, TOTAL_FREQUENCY_LABEL};
use crate::types::{Frequency, MatchCount, ReportLine, TargetChar, UnitFrequencyMap};
use crate::utils::{
    count_non_whitespace_chars, format_frequency, merge_equal_units, normalize_phrase,
    read_two_line_source, sort_units, split_words,
};
use crate::{Error, ReportConfig, WordUnit};

use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Parses a sentence against a set of target characters and groups its words
/// into units by word shape.
///
/// Punctuation is stripped from the sentence, which is then split into words on
/// whitespace. Each word is analyzed as a [`WordUnit`]; words without any target
/// character are dropped, the rest are sorted by match count, word length and
/// contained characters, and units of the same shape are merged.
///
/// A parser is fully built by its constructor and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct SentenceParser {
    phrase: String,
    target_chars: Vec<TargetChar>,
    total_match_count: MatchCount,
    units: Vec<WordUnit>,
}

impl SentenceParser {
    /// Parses `sentence` with the characters of `target_chars`.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if either input is empty, or if nothing but
    /// whitespace remains of the sentence once punctuation is stripped.
    pub fn new(sentence: &str, target_chars: &str) -> Result<Self, Error> {
        let target_chars: Vec<TargetChar> = target_chars.chars().collect();

        SentenceParser::from_chars(sentence, &target_chars)
    }

    /// Parses `sentence` with a slice of target characters.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if either input is empty, or if nothing but
    /// whitespace remains of the sentence once punctuation is stripped.
    pub fn from_chars(sentence: &str, target_chars: &[TargetChar]) -> Result<Self, Error> {
        if sentence.is_empty() || target_chars.is_empty() {
            return Err(Error::InvalidArgument(
                "Given phrase and characters can't be empty!".to_string(),
            ));
        }

        info!("Normalizing phrase...");
        let phrase = normalize_phrase(sentence);

        if count_non_whitespace_chars(&phrase) == 0 {
            return Err(Error::InvalidArgument(
                "Given phrase must contain at least one letter or digit".to_string(),
            ));
        }

        let (units, total_match_count) = SentenceParser::parse(&phrase, target_chars)?;

        Ok(SentenceParser {
            phrase,
            target_chars: target_chars.to_vec(),
            total_match_count,
            units,
        })
    }

    /// Parses a two-line source: the sentence on the first line and the target
    /// characters on the second.
    ///
    /// # Errors
    /// * `Error::IoError` if the source can't be read.
    /// * `Error::InvalidArgument` if the source doesn't have exactly two lines, or
    ///   if either line is rejected by [`SentenceParser::new`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let (sentence, target_chars) = read_two_line_source(reader)?;

        SentenceParser::new(&sentence, &target_chars)
    }

    /// Opens the file at `path` and parses it as a two-line source.
    ///
    /// # Errors
    /// See [`SentenceParser::from_reader`]. Failing to open the file is an
    /// `Error::IoError`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        info!("Reading {:?}...", path.as_ref());
        let file = File::open(path)?;

        SentenceParser::from_reader(BufReader::new(file))
    }

    /// Builds, filters, sorts and merges the units of a normalized phrase.
    ///
    /// # Returns
    /// * The final list of units along with the number of target-character
    ///   occurrences across every word of the phrase.
    fn parse(
        phrase: &str,
        target_chars: &[TargetChar],
    ) -> Result<(Vec<WordUnit>, MatchCount), Error> {
        let words = split_words(phrase);
        info!("Parsing {} words...", words.len());

        let mut total_match_count = 0;
        let mut units = Vec::with_capacity(words.len());

        for word in words {
            let unit = WordUnit::from_chars(word, target_chars)?;
            debug!("{} -> {} ({} matches)", word, unit, unit.match_count());

            total_match_count += unit.match_count();
            if unit.match_count() > 0 {
                units.push(unit);
            }
        }

        info!("Sorting units...");
        sort_units(&mut units);

        info!("Merging equal units...");
        let mut units = merge_equal_units(units);

        // Merged counts may have grown past their neighbours
        sort_units(&mut units);

        Ok((units, total_match_count))
    }

    /// The sentence with punctuation stripped.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The target characters as given by the caller.
    pub fn target_chars(&self) -> &[TargetChar] {
        &self.target_chars
    }

    /// The number of target-character occurrences across the whole phrase.
    pub fn total_match_count(&self) -> MatchCount {
        self.total_match_count
    }

    /// The length of the phrase once all whitespace is removed.
    pub fn stripped_phrase_len(&self) -> usize {
        count_non_whitespace_chars(&self.phrase)
    }

    /// Returns the share of target characters among all non-whitespace characters
    /// of the phrase.
    pub fn total_frequency(&self) -> Frequency {
        self.total_match_count as Frequency / self.stripped_phrase_len() as Frequency
    }

    /// Returns the unit at `index`.
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfRange` if `index` is not less than the number of units.
    pub fn unit(&self, index: usize) -> Result<&WordUnit, Error> {
        self.units.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.units.len(),
        })
    }

    /// Returns every unit, in sorted order.
    pub fn all_units(&self) -> &[WordUnit] {
        &self.units
    }

    /// Maps every unit to its frequency relative to the total match count.
    pub fn units_with_frequencies(&self) -> Result<UnitFrequencyMap, Error> {
        let mut unit_frequency_map = UnitFrequencyMap::with_capacity(self.units.len());

        for unit in &self.units {
            unit_frequency_map.insert(unit.clone(), unit.frequency(self.total_match_count)?);
        }

        Ok(unit_frequency_map)
    }

    /// Formats the report line of `unit`, e.g. `{(t), 4} = 0.50 (2/4)`.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if the phrase has no target characters at all.
    pub fn report_line(&self, unit: &WordUnit) -> Result<ReportLine, Error> {
        self.report_line_with_config(DEFAULT_REPORT_CONFIG, unit)
    }

    /// Formats the report line of the unit at `index`.
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfRange` if `index` is not less than the number of units.
    pub fn report_line_at(&self, index: usize) -> Result<ReportLine, Error> {
        self.report_line(self.unit(index)?)
    }

    /// Formats the trailing summary line, e.g. `Total Frequency: 0.36 (4/11)`.
    pub fn summary_line(&self) -> ReportLine {
        self.summary_line_with_config(DEFAULT_REPORT_CONFIG)
    }

    /// Formats the full report: one line per unit followed by the summary line.
    pub fn report_lines(&self) -> Result<Vec<ReportLine>, Error> {
        self.report_lines_with_config(DEFAULT_REPORT_CONFIG)
    }

    pub fn report_line_with_config(
        &self,
        config: &ReportConfig,
        unit: &WordUnit,
    ) -> Result<ReportLine, Error> {
        let frequency = unit.frequency(self.total_match_count)?;

        Ok(format!(
            "{{{}}} = {} ({}/{})",
            unit,
            format_frequency(frequency, config.decimal_places),
            unit.match_count(),
            self.total_match_count
        ))
    }

    pub fn summary_line_with_config(&self, config: &ReportConfig) -> ReportLine {
        format!(
            "{}: {} ({}/{})",
            TOTAL_FREQUENCY_LABEL,
            format_frequency(self.total_frequency(), config.decimal_places),
            self.total_match_count,
            self.stripped_phrase_len()
        )
    }

    pub fn report_lines_with_config(
        &self,
        config: &ReportConfig,
    ) -> Result<Vec<ReportLine>, Error> {
        let mut lines = self
            .units
            .iter()
            .map(|unit| self.report_line_with_config(config, unit))
            .collect::<Result<Vec<_>, _>>()?;

        if config.include_summary {
            lines.push(self.summary_line_with_config(config));
        }

        Ok(lines)
    }

    /// Writes the report to `writer`, one line per unit and the summary line last.
    ///
    /// Lines are separated by `\n`; the last line is not terminated.
    ///
    /// # Errors
    /// Returns `Error::IoError` if writing fails.
    pub fn write_report<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        self.write_report_with_config(DEFAULT_REPORT_CONFIG, writer)
    }

    pub fn write_report_with_config<W: Write>(
        &self,
        config: &ReportConfig,
        writer: &mut W,
    ) -> Result<(), Error> {
        for (line_idx, line) in self.report_lines_with_config(config)?.iter().enumerate() {
            if line_idx > 0 {
                writeln!(writer)?;
            }
            write!(writer, "{}", line)?;
        }

        Ok(())
    }

    /// Creates (or truncates) the file at `path` and writes the report into it.
    ///
    /// # Errors
    /// Returns `Error::IoError` if the file can't be created or written, e.g. when
    /// `path` is a directory.
    pub fn write_report_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        info!("Writing report to {:?}...", path.as_ref());
        let mut writer = BufWriter::new(File::create(path)?);

        self.write_report(&mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
