use arch::symbol::{PREDEFINED, VAR_BASE};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Loc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub kind: Kind,
    pub addr: u16,
    /// Where a label was declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// Name -> address, shared by predefined symbols, labels and variables.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
    next_var: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        let symbols = PREDEFINED
            .iter()
            .map(|(name, addr)| {
                let sym = Symbol {
                    kind: Kind::Predefined,
                    addr: *addr,
                    loc: None,
                };
                (name.to_string(), sym)
            })
            .collect();
        SymbolTable {
            symbols,
            next_var: VAR_BASE,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).map(|sym| sym.addr)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Bind `name` to an instruction address. A previous binding of the
    /// same name is replaced and returned.
    pub fn define_label(&mut self, name: &str, addr: u16, loc: Loc) -> Option<Symbol> {
        let sym = Symbol {
            kind: Kind::Label,
            addr,
            loc: Some(loc),
        };
        self.symbols.insert(name.to_string(), sym)
    }

    /// Address of `name`, allocating the next free RAM cell if it is new.
    pub fn define_variable(&mut self, name: &str) -> u16 {
        if let Some(addr) = self.lookup(name) {
            return addr;
        }
        let addr = self.next_var;
        self.symbols.insert(
            name.to_string(),
            Symbol {
                kind: Kind::Variable,
                addr,
                loc: None,
            },
        );
        // Past ADDR_MAX the encoder rejects the address anyway.
        self.next_var = self.next_var.saturating_add(1);
        addr
    }

    pub fn next_variable(&self) -> u16 {
        self.next_var
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
