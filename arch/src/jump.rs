use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Jump condition field, `j1 j2 j3` = `<0 =0 >0`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum Jump {
    #[strum(to_string = "null")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(j) => Ok(j),
            Err(_) => Err(format!("Undefined jump: {s}")),
        }
    }
}

#[test]
fn codes() {
    let table = [
        ("null", 0b000),
        ("JGT", 0b001),
        ("JEQ", 0b010),
        ("JGE", 0b011),
        ("JLT", 0b100),
        ("JNE", 0b101),
        ("JLE", 0b110),
        ("JMP", 0b111),
    ];
    for (mnemonic, code) in table {
        assert_eq!(u8::from(Jump::parse(mnemonic).unwrap()), code, "{mnemonic}");
    }
}

#[test]
fn test() {
    use strum::IntoEnumIterator;
    assert_eq!(Jump::parse("JGT"), Ok(Jump::JGT));
    assert_eq!(Jump::parse("null"), Ok(Jump::Null));
    assert!(Jump::parse("jmp").is_err());
    assert!(Jump::parse("JMPX").is_err());
    for jump in Jump::iter() {
        assert_eq!(Jump::parse(&jump.to_string()), Ok(jump));
    }
}
