use color_print::cformat;
use indexmap::IndexMap;
use thiserror::Error;

use crate::msg::Msg;

/// Source position: (file, 0-based line index).
pub type Loc = (String, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Comp,
    Dest,
    Jump,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Comp => write!(f, "comp"),
            Field::Dest => write!(f, "dest"),
            Field::Jump => write!(f, "jump"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed line: `{text}`")]
    MalformedLine { loc: Loc, text: String },

    #[error("Unknown {field}: `{mnemonic}`")]
    UnresolvedMnemonic {
        loc: Loc,
        field: Field,
        mnemonic: String,
    },

    #[error("Address out of range: `{literal}` (must be 0..=32767)")]
    AddressOutOfRange { loc: Loc, literal: String },

    #[error("Input file given twice: {0}")]
    DuplicateInput(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to export symbols: {0}")]
    SymbolExport(String, #[source] serde_yaml::Error),
}

impl Error {
    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Error::MalformedLine { loc, .. }
            | Error::UnresolvedMnemonic { loc, .. }
            | Error::AddressOutOfRange { loc, .. } => Some(loc),
            _ => None,
        }
    }

    /// Print error with the file location and the raw source line it came from
    pub fn print_diag(&self, files: &IndexMap<String, Vec<String>>) {
        match self.loc() {
            Some((file, line_idx)) => {
                let raw = files
                    .get(file)
                    .and_then(|lines| lines.get(*line_idx))
                    .map(|s| s.as_str())
                    .unwrap_or("");
                Msg::Error(self.to_string()).diag(file, *line_idx, raw);
            }
            None => match std::error::Error::source(self) {
                Some(cause) => {
                    Msg::Error(cformat!("{}\n  <dim>caused by: {}</>", self, cause)).print()
                }
                None => Msg::Error(self.to_string()).print(),
            },
        }
    }
}
