use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// ALU computation field. The discriminant is the 7-bit `a c1..c6` pattern.
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
pub enum Comp {
    #[strum(to_string = "0")]
    Zero = 0b0101010,
    #[strum(to_string = "1")]
    One = 0b0111111,
    #[strum(to_string = "-1")]
    MinusOne = 0b0111010,
    #[strum(to_string = "D")]
    D = 0b0001100,
    #[strum(to_string = "A")]
    A = 0b0110000,
    #[strum(to_string = "!D")]
    NotD = 0b0001101,
    #[strum(to_string = "!A")]
    NotA = 0b0110001,
    #[strum(to_string = "-D")]
    NegD = 0b0001111,
    #[strum(to_string = "-A")]
    NegA = 0b0110011,
    #[strum(to_string = "D+1", serialize = "1+D")]
    IncD = 0b0011111,
    #[strum(to_string = "A+1", serialize = "1+A")]
    IncA = 0b0110111,
    #[strum(to_string = "D-1")]
    DecD = 0b0001110,
    #[strum(to_string = "A-1")]
    DecA = 0b0110010,
    #[strum(to_string = "D+A", serialize = "A+D")]
    DPlusA = 0b0000010,
    #[strum(to_string = "D-A")]
    DMinusA = 0b0010011,
    #[strum(to_string = "A-D")]
    AMinusD = 0b0000111,
    #[strum(to_string = "D&A", serialize = "A&D")]
    DAndA = 0b0000000,
    #[strum(to_string = "D|A", serialize = "A|D")]
    DOrA = 0b0010101,

    // a = 1: the same operations with M in place of A
    #[strum(to_string = "M")]
    M = 0b1110000,
    #[strum(to_string = "!M")]
    NotM = 0b1110001,
    #[strum(to_string = "-M")]
    NegM = 0b1110011,
    #[strum(to_string = "M+1", serialize = "1+M")]
    IncM = 0b1110111,
    #[strum(to_string = "M-1")]
    DecM = 0b1110010,
    #[strum(to_string = "D+M", serialize = "M+D")]
    DPlusM = 0b1000010,
    #[strum(to_string = "D-M")]
    DMinusM = 0b1010011,
    #[strum(to_string = "M-D")]
    MMinusD = 0b1000111,
    #[strum(to_string = "D&M", serialize = "M&D")]
    DAndM = 0b1000000,
    #[strum(to_string = "D|M", serialize = "M|D")]
    DOrM = 0b1010101,
}

impl Comp {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(c) => Ok(c),
            Err(_) => Err(format!("Undefined comp: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes() {
        let table = [
            ("0", 0b0101010),
            ("1", 0b0111111),
            ("-1", 0b0111010),
            ("D", 0b0001100),
            ("A", 0b0110000),
            ("!D", 0b0001101),
            ("!A", 0b0110001),
            ("-D", 0b0001111),
            ("-A", 0b0110011),
            ("D+1", 0b0011111),
            ("A+1", 0b0110111),
            ("D-1", 0b0001110),
            ("A-1", 0b0110010),
            ("D+A", 0b0000010),
            ("D-A", 0b0010011),
            ("A-D", 0b0000111),
            ("D&A", 0b0000000),
            ("D|A", 0b0010101),
            ("M", 0b1110000),
            ("!M", 0b1110001),
            ("-M", 0b1110011),
            ("M+1", 0b1110111),
            ("M-1", 0b1110010),
            ("D+M", 0b1000010),
            ("D-M", 0b1010011),
            ("M-D", 0b1000111),
            ("D&M", 0b1000000),
            ("D|M", 0b1010101),
        ];
        assert_eq!(table.len(), Comp::iter().count());
        for (mnemonic, code) in table {
            assert_eq!(u8::from(Comp::parse(mnemonic).unwrap()), code, "{mnemonic}");
        }
    }

    #[test]
    fn commutative_forms_share_a_code() {
        for (a, b) in [
            ("D+1", "1+D"),
            ("A+1", "1+A"),
            ("M+1", "1+M"),
            ("D+A", "A+D"),
            ("D&A", "A&D"),
            ("D|A", "A|D"),
            ("D+M", "M+D"),
            ("D&M", "M&D"),
            ("D|M", "M|D"),
        ] {
            assert_eq!(Comp::parse(a), Comp::parse(b));
        }
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(Comp::parse("1+M").unwrap().to_string(), "M+1");
        assert_eq!(Comp::parse("A&D").unwrap().to_string(), "D&A");
    }

    #[test]
    fn codes_decode_back() {
        for comp in Comp::iter() {
            let code: u8 = comp.into();
            assert!(code < 0x80);
            assert_eq!(Comp::try_from(code).unwrap(), comp);
            assert_eq!(Comp::parse(&comp.to_string()), Ok(comp));
        }
    }

    #[test]
    fn unknown() {
        assert!(Comp::parse("D*A").is_err());
        assert!(Comp::parse("").is_err());
        assert!(Comp::parse("d+a").is_err());
    }
}
