use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump, symbol::ADDR_MAX};

use crate::error::{Error, Field};
use crate::label::is_literal;
use crate::parser::{Line, Stmt};

/// Translate one resolved line. Labels and symbolic `@name` must already
/// have been removed by the resolver.
pub fn encode(line: &Line) -> Result<Inst, Error> {
    match line.stmt()? {
        Stmt::Addr(target) => encode_addr(line, target),
        Stmt::Comp { dest, comp, jump } => {
            let unresolved = |field, mnemonic: &str| Error::UnresolvedMnemonic {
                loc: line.loc(),
                field,
                mnemonic: mnemonic.to_string(),
            };
            let comp = Comp::parse(comp).map_err(|_| unresolved(Field::Comp, comp))?;
            let dest = match dest {
                Some(d) => Dest::parse(d).map_err(|_| unresolved(Field::Dest, d))?,
                None => Dest::Null,
            };
            let jump = match jump {
                Some(j) => Jump::parse(j).map_err(|_| unresolved(Field::Jump, j))?,
                None => Jump::Null,
            };
            Ok(Inst::C(dest, comp, jump))
        }
        Stmt::Label(_) => Err(Error::MalformedLine {
            loc: line.loc(),
            text: line.text.clone(),
        }),
    }
}

/// `encode` rendered as a 16-character binary word.
pub fn encode_word(line: &Line) -> Result<String, Error> {
    encode(line).map(|inst| inst.to_word())
}

fn encode_addr(line: &Line, target: &str) -> Result<Inst, Error> {
    if !is_literal(target) {
        return Err(Error::MalformedLine {
            loc: line.loc(),
            text: line.text.clone(),
        });
    }
    match target.parse::<u16>() {
        Ok(value) if value <= ADDR_MAX => Ok(Inst::A(value)),
        _ => Err(Error::AddressOutOfRange {
            loc: line.loc(),
            literal: target.to_string(),
        }),
    }
}
