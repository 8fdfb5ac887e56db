//! Packaging generated passwords into their output shape.

use indexmap::IndexMap;
use serde::Serialize;

use super::generate::{Password, PasswordRecord};

/// What a generation call hands to the printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OutputShape {
    /// Exactly one password was requested.
    Single(Password),
    /// `"Password <i>"` to value, in generation order.
    Labeled(IndexMap<String, Password>),
    /// Records for tabular export.
    Records(Vec<PasswordRecord>),
}

impl OutputShape {
    /// Number of passwords carried.
    pub fn len(&self) -> usize {
        match self {
            OutputShape::Single(_) => 1,
            OutputShape::Labeled(map) => map.len(),
            OutputShape::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn label(number: usize) -> String {
    format!("Password {number}")
}

/// Pick the output shape from the record count and the export flag.
pub fn assemble(mut records: Vec<PasswordRecord>, exportable: bool) -> OutputShape {
    if records.len() == 1
        && let Some(record) = records.pop()
    {
        return OutputShape::Single(record.value);
    }

    if exportable {
        OutputShape::Records(records)
    } else {
        OutputShape::Labeled(
            records
                .into_iter()
                .map(|record| (label(record.number), record.value))
                .collect(),
        )
    }
}
