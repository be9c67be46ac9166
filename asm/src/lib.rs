pub mod encode;
pub mod error;
pub mod label;
pub mod msg;
pub mod parser;
pub mod symbol;
pub mod util;

use arch::inst::Inst;
use indexmap::IndexMap;

use crate::error::Error;
use crate::label::Warning;
use crate::parser::Line;
use crate::symbol::SymbolTable;

/// Result of a successful run.
#[derive(Debug)]
pub struct Program {
    /// Resolved lines paired with their instruction, in address order
    pub code: Vec<(Line, Inst)>,
    pub symbols: SymbolTable,
    pub warnings: Vec<Warning>,
}

impl Program {
    pub fn words(&self) -> Vec<String> {
        self.code.iter().map(|(_, inst)| inst.to_word()).collect()
    }
}

/// Assemble `files` (path -> raw lines) as one program.
///
/// Each stage finishes before the next starts: labels need the full
/// instruction count before any address is final.
pub fn assemble(files: &IndexMap<String, Vec<String>>) -> Result<Program, Error> {
    let mut symbols = SymbolTable::new();
    let lines = parser::normalize(files);
    let (mut lines, warnings) = label::collect_labels(lines, &mut symbols)?;
    label::substitute_symbols(&mut lines, &mut symbols)?;

    let mut code = Vec::with_capacity(lines.len());
    for line in lines {
        let inst = encode::encode(&line)?;
        code.push((line, inst));
    }

    Ok(Program {
        code,
        symbols,
        warnings,
    })
}

/// Assemble a single in-memory source into binary words.
pub fn assemble_source(source: &str) -> Result<Vec<String>, Error> {
    let mut files = IndexMap::new();
    files.insert(
        "<source>".to_string(),
        source.lines().map(str::to_string).collect(),
    );
    assemble(&files).map(|program| program.words())
}
