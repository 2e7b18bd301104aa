use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};

use itertools::Itertools;
use thiserror::Error;

use secret_santa_entities::prelude::Participant;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RosterReaderConfig {
    name_column: Option<usize>,
    email_column: Option<usize>,
    delimiter: Option<u8>,
}

/// How headers are mapped to columns. `Exact` requires the literal
/// `Name`/`Email` headers, `Lenient` also accepts common variants like
/// `Employee Name` or `E-Mail Address`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HeaderMatching {
    Exact,
    Lenient,
}

#[derive(Error, Debug)]
pub enum RosterParseError {
    #[error("Error parsing roster: {0}")]
    Parse(#[from] csv::Error),
    #[error("Error reading roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("Row {row} has no value in column {index}")]
    IndexOutOfBounds { row: usize, index: usize },
    #[error("Could not find a {0} column in the input file")]
    MissingColumn(&'static str),
    #[error("Reader config is incomplete")]
    BadConfig,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
enum RosterField {
    Name,
    Email,
}

#[derive(Debug)]
pub struct ParseResult {
    pub participants: Vec<Participant>,
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug)]
pub enum ParseWarning {
    SkippedRowPartialEntry { index: usize },
}

impl RosterReaderConfig {
    pub fn default_from_file<R>(
        mut reader: R,
        matching: HeaderMatching,
    ) -> Result<RosterReaderConfig, RosterParseError>
    where
        R: std::io::Read,
    {
        let delimiter_candidates = [b',', b';', b'\t'];
        let mut delimiter_counts = [0; 3];
        let mut buffer = Vec::new();

        reader.read_to_end(&mut buffer)?;

        for char in buffer.iter() {
            for (i, delimiter) in delimiter_candidates.iter().enumerate() {
                if char == delimiter {
                    delimiter_counts[i] += 1;
                }
            }
        }

        let delimiter = delimiter_counts
            .into_iter()
            .enumerate()
            .max_by_key(|(_, c)| *c)
            .map(|(i, _)| delimiter_candidates[i])
            .unwrap_or(b',');
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_reader(&buffer[..]);
        let headers = reader.headers()?;

        let mut config = Self::propose_config_from_headers(headers.into_iter(), matching);
        config.delimiter = Some(delimiter);
        Ok(config)
    }

    fn propose_config_from_headers<'a, I>(headers: I, matching: HeaderMatching) -> RosterReaderConfig
    where
        I: Iterator<Item = &'a str>,
    {
        match matching {
            HeaderMatching::Exact => {
                let mut name_column = None;
                let mut email_column = None;

                for (header_idx, header) in headers.enumerate() {
                    let header = header.trim();
                    if header == "Name" && name_column == None {
                        name_column = Some(header_idx);
                    } else if header == "Email" && email_column == None {
                        email_column = Some(header_idx);
                    }
                }

                RosterReaderConfig {
                    name_column,
                    email_column,
                    delimiter: None,
                }
            }
            HeaderMatching::Lenient => {
                lazy_static! {
                    static ref FIELD_HEADER_PATTERNS: HashMap<RosterField, Regex> = {
                        let name_patterns: Vec<&str> =
                            vec!["^(participant[ _-]?|full[ _-]?|employee[ _-]?)?name$"];
                        let email_patterns: Vec<&str> =
                            vec!["^(participant[ _-]?|employee[ _-]?)?e-?mail( address)?$"];

                        let mut m = HashMap::new();
                        m.insert(RosterField::Name, name_patterns);
                        m.insert(RosterField::Email, email_patterns);

                        m.into_iter()
                            .map(|(key, patterns)| {
                                (
                                    key,
                                    RegexBuilder::new(&patterns.join("|"))
                                        .case_insensitive(true)
                                        .build()
                                        .unwrap(),
                                )
                            })
                            .collect()
                    };
                }

                let mut proposed_column_assignment = HashMap::new();
                for (header_idx, header) in headers.enumerate() {
                    for (field, pattern) in FIELD_HEADER_PATTERNS.iter() {
                        if pattern.is_match(header.trim())
                            && proposed_column_assignment.get(field) == None
                        {
                            proposed_column_assignment.insert(*field, header_idx);
                        }
                    }
                }

                RosterReaderConfig {
                    name_column: proposed_column_assignment.remove(&RosterField::Name),
                    email_column: proposed_column_assignment.remove(&RosterField::Email),
                    delimiter: None,
                }
            }
        }
    }

    pub fn parse<R>(&self, reader: R) -> Result<ParseResult, RosterParseError>
    where
        R: std::io::Read,
    {
        let delimiter = self.delimiter.ok_or(RosterParseError::BadConfig)?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let name_idx = self
            .name_column
            .ok_or(RosterParseError::MissingColumn("name"))?;
        let email_idx = self
            .email_column
            .ok_or(RosterParseError::MissingColumn("email"))?;

        let mut participants = vec![];
        let mut warnings = vec![];

        for (row_idx, row) in reader.records().enumerate() {
            let row = row?;

            let name = row.get(name_idx).ok_or(RosterParseError::IndexOutOfBounds {
                row: row_idx,
                index: name_idx,
            })?;
            let email = row.get(email_idx).ok_or(RosterParseError::IndexOutOfBounds {
                row: row_idx,
                index: email_idx,
            })?;

            if name.is_empty() && email.is_empty() {
                warnings.push(ParseWarning::SkippedRowPartialEntry { index: row_idx });
                continue;
            }

            participants.push(Participant {
                name: name.to_string(),
                email: email.to_string(),
            });
        }

        Ok(ParseResult {
            participants,
            warnings,
        })
    }
}

/// Reads the roster at `path`. A missing file and an empty file both give an
/// empty roster so the caller can decide how to proceed.
pub fn load_roster(
    path: &Path,
    matching: HeaderMatching,
) -> Result<Vec<Participant>, RosterParseError> {
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!(
                "No file found: {}. Ensure the input file exists.",
                path.display()
            );
            return Ok(vec![]);
        }
        Err(e) => return Err(e.into()),
    };

    let parsed = if content.iter().all(|c| c.is_ascii_whitespace()) {
        ParseResult {
            participants: vec![],
            warnings: vec![],
        }
    } else {
        let config = RosterReaderConfig::default_from_file(&content[..], matching)?;
        tracing::debug!(
            "Reading {} with delimiter {:?}",
            path.display(),
            config.delimiter.map(|d| d as char)
        );

        config.parse(&content[..])?
    };

    for warning in parsed.warnings.iter() {
        match warning {
            ParseWarning::SkippedRowPartialEntry { index } => {
                tracing::warn!("Skipped row {} without name and email", index);
            }
        }
    }

    println!(
        "Loaded participants: {:?}",
        parsed
            .participants
            .iter()
            .map(|p| (&p.name, &p.email))
            .collect_vec()
    );

    Ok(parsed.participants)
}
