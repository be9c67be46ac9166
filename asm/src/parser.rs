use indexmap::IndexMap;

use crate::error::{Error, Loc};

// ----------------------------------------------------------------------------
// Line

/// One significant source line with whitespace and comment removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub file: String,
    pub idx: usize,
    pub text: String,
}

impl Line {
    /// `None` when nothing but whitespace or a comment is left.
    pub fn normalize(file: &str, idx: usize, raw: &str) -> Option<Line> {
        let mut text: String = raw
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        if let Some(pos) = text.find("//") {
            text.truncate(pos);
        }
        if text.is_empty() {
            return None;
        }
        Some(Line {
            file: file.to_string(),
            idx,
            text,
        })
    }

    pub fn loc(&self) -> Loc {
        (self.file.clone(), self.idx)
    }

    fn malformed(&self) -> Error {
        Error::MalformedLine {
            loc: self.loc(),
            text: self.text.clone(),
        }
    }

    pub fn stmt(&self) -> Result<Stmt<'_>, Error> {
        let text = self.text.as_str();

        // (LOOP)
        if let Some(rest) = text.strip_prefix('(') {
            return match rest.strip_suffix(')') {
                Some(name) if !name.is_empty() && !name.contains(['(', ')']) => {
                    Ok(Stmt::Label(name))
                }
                _ => Err(self.malformed()),
            };
        }

        // @17, @LOOP
        if let Some(target) = text.strip_prefix('@') {
            if target.is_empty() {
                return Err(self.malformed());
            }
            return Ok(Stmt::Addr(target));
        }

        // dest=comp;jump
        let (head, jump) = match text.split_once(';') {
            Some((head, jump)) => (head, Some(jump)),
            None => (text, None),
        };
        let (dest, comp) = match head.split_once('=') {
            Some((dest, comp)) => (Some(dest), comp),
            None => (None, head),
        };
        if comp.is_empty() || dest == Some("") || jump == Some("") {
            return Err(self.malformed());
        }
        Ok(Stmt::Comp { dest, comp, jump })
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt<'a> {
    Label(&'a str),
    Addr(&'a str),
    Comp {
        dest: Option<&'a str>,
        comp: &'a str,
        jump: Option<&'a str>,
    },
}

/// Normalize every file in order, dropping blank and comment-only lines.
pub fn normalize(files: &IndexMap<String, Vec<String>>) -> Vec<Line> {
    let mut lines = vec![];
    for (path, raws) in files {
        for (idx, raw) in raws.iter().enumerate() {
            if let Some(line) = Line::normalize(path, idx, raw) {
                lines.push(line);
            }
        }
    }
    lines
}
