use crate::error::{Error, Loc};
use crate::parser::{Line, Stmt};
use crate::symbol::{Symbol, SymbolTable};

/// Non-fatal findings reported alongside a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The label was bound before; the later declaration wins.
    RedefinedLabel { name: String, at: Loc, prev: Symbol },
}

/// Pass 1: bind every `(name)` to the index of the next instruction and
/// drop the declarations from the stream.
pub fn collect_labels(
    lines: Vec<Line>,
    symbols: &mut SymbolTable,
) -> Result<(Vec<Line>, Vec<Warning>), Error> {
    let mut code = Vec::with_capacity(lines.len());
    let mut warns = vec![];
    let mut pc: usize = 0;

    for line in lines {
        if let Stmt::Label(name) = line.stmt()? {
            let addr = u16::try_from(pc).map_err(|_| Error::AddressOutOfRange {
                loc: line.loc(),
                literal: pc.to_string(),
            })?;
            if let Some(prev) = symbols.define_label(name, addr, line.loc()) {
                warns.push(Warning::RedefinedLabel {
                    name: name.to_string(),
                    at: line.loc(),
                    prev,
                });
            }
            continue;
        }
        code.push(line);
        pc += 1;
    }

    Ok((code, warns))
}

/// Pass 2: rewrite every symbolic `@name` to `@<address>`, allocating
/// variables for names not seen before.
pub fn substitute_symbols(lines: &mut [Line], symbols: &mut SymbolTable) -> Result<(), Error> {
    for line in lines.iter_mut() {
        let addr = match line.stmt()? {
            Stmt::Addr(target) if is_literal(target) => continue,
            Stmt::Addr(target) => match symbols.lookup(target) {
                Some(addr) => addr,
                None => symbols.define_variable(target),
            },
            _ => continue,
        };
        line.text = format!("@{}", addr);
    }
    Ok(())
}

/// Every character must be a digit: `@12abc` names a symbol.
pub fn is_literal(target: &str) -> bool {
    !target.is_empty() && target.bytes().all(|b| b.is_ascii_digit())
}

#[test]
fn literal() {
    assert!(is_literal("0"));
    assert!(is_literal("32767"));
    assert!(is_literal("007"));
    assert!(!is_literal("12abc"));
    assert!(!is_literal("1_000"));
    assert!(!is_literal("LOOP"));
    assert!(!is_literal(""));
}
