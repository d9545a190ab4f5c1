//! Aggregation and rendering of validation results

use std::io::{self, Write};

use crate::core::types::CredentialRecord;

/// Line styles, resolved to terminal escapes at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Valid,
    Invalid,
    Plain,
}

impl Style {
    fn escape(self) -> &'static str {
        match self {
            Style::Valid => "\x1b[32m",
            Style::Invalid => "\x1b[31m",
            Style::Plain => "",
        }
    }

    /// Wrap `text` in this style's escapes when `color` is on
    pub fn paint(self, text: &str, color: bool) -> String {
        if !color || self == Style::Plain {
            return text.to_string();
        }
        format!("{}{}\x1b[0m", self.escape(), text)
    }
}

/// How a [`Report`] is written out
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Show invalid entries and the invalid count
    pub debug: bool,
    pub color: bool,
}

/// All records of a run plus their tallies
#[derive(Debug, Clone, Default)]
pub struct Report {
    records: Vec<CredentialRecord>,
    valid: usize,
    invalid: usize,
}

impl Report {
    /// Tally records, keeping their arrival order
    pub fn from_records(records: Vec<CredentialRecord>) -> Self {
        let valid = records.iter().filter(|r| r.valid).count();
        let invalid = records.len() - valid;
        Self {
            records,
            valid,
            invalid,
        }
    }

    pub fn valid_count(&self) -> usize {
        self.valid
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid
    }

    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    pub fn render<W: Write>(&self, out: &mut W, options: &RenderOptions) -> io::Result<()> {
        for record in &self.records {
            if record.valid {
                writeln!(
                    out,
                    "{} {}\n{}\n{}\n",
                    Style::Valid.paint("Valid:", options.color),
                    record.access_key,
                    Style::Plain.paint("Details:", options.color),
                    record.details.as_deref().unwrap_or_default()
                )?;
            } else if options.debug {
                writeln!(
                    out,
                    "{} {}",
                    Style::Invalid.paint("Invalid:", options.color),
                    record.access_key
                )?;
            }
        }

        writeln!(
            out,
            "{} {}",
            Style::Valid.paint("Number of valid credentials:", options.color),
            self.valid
        )?;
        if options.debug {
            writeln!(
                out,
                "{} {}",
                Style::Invalid.paint("Number of invalid credentials:", options.color),
                self.invalid
            )?;
        }
        out.flush()
    }
}
