use crate::tools::{log_message_and_return, normalize};
use derive_getters::Getters;
use dto::gala::NewGalaInvite;
use encoding::all::WINDOWS_1252;
use encoding::{DecoderTrap, Encoding};
use log::debug;
use std::collections::HashSet;
use thiserror::Error;

const HEADER_NAMES: [&str; 4] = ["nom", "name", "invite", "nom complet"];

#[derive(Debug, Error, PartialEq)]
pub enum ImportError {
    #[error("The invitees file is empty.")]
    EmptyFile,
    #[error("The invitees file is neither UTF-8 nor Windows-1252 encoded.")]
    WrongEncoding,
    #[error("The invitees file can't be read at line {0}.")]
    MalformedLine(u64),
}

/// Invitees read from a file, split between those to insert and those already known.
#[derive(Debug, Getters, PartialEq)]
pub struct ParsedInvites {
    invites: Vec<NewGalaInvite>,
    duplicates: Vec<String>,
    skipped: usize,
}

/// Read the invitees of a spreadsheet exported as CSV: one invitee per row,
/// as `name[;email[;phone]]`, with or without a header row.
///
/// Rows are read in file order. A row whose name matches, case and accents aside,
/// one of `existing_names` or one of the previous rows is reported as a duplicate.
pub fn parse_invites(content: &[u8], existing_names: &[String]) -> Result<ParsedInvites, ImportError> {
    let content = decode(content)?;
    if content.trim().is_empty() {
        return Err(ImportError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(&content))
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut known_names: HashSet<String> = existing_names.iter().map(|name| normalize(name)).collect();
    let mut invites = vec![];
    let mut duplicates = vec![];
    let mut skipped = 0;
    let mut first_row = true;
    for record in reader.records() {
        let record = record.map_err(|error| {
            let line = error.position().map_or(0, |position| position.line());
            log_message_and_return("Can't read invitees line", ImportError::MalformedLine(line))(error)
        })?;

        let name = record.get(0).unwrap_or_default();
        if name.is_empty() {
            skipped += 1;
            continue;
        }
        if first_row {
            first_row = false;
            if HEADER_NAMES.contains(&normalize(name).as_str()) {
                continue;
            }
        }

        if !known_names.insert(normalize(name)) {
            debug!("Duplicate invitee [name: {name}]");
            duplicates.push(name.to_owned());
            continue;
        }
        invites.push(NewGalaInvite::new(
            name.to_owned(),
            non_empty_field(&record, 1),
            non_empty_field(&record, 2),
        ));
    }

    Ok(ParsedInvites {
        invites,
        duplicates,
        skipped,
    })
}

/// Spreadsheets export either UTF-8 (possibly with a BOM) or the Windows code page.
fn decode(content: &[u8]) -> Result<String, ImportError> {
    match std::str::from_utf8(content) {
        Ok(content) => Ok(content.trim_start_matches('\u{feff}').to_owned()),
        Err(_) => WINDOWS_1252.decode(content, DecoderTrap::Strict).map_err(log_message_and_return(
            "Wrong encoding: expected UTF-8 or Windows-1252.",
            ImportError::WrongEncoding,
        )),
    }
}

/// French spreadsheets export with `;`, others with `,`.
fn detect_delimiter(content: &str) -> u8 {
    let first_line = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or_default();
    if first_line.matches(';').count() >= first_line.matches(',').count() {
        b';'
    } else {
        b','
    }
}

fn non_empty_field(record: &csv::StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .filter(|field| !field.is_empty())
        .map(str::to_owned)
}
