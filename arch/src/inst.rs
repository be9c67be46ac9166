use std::fmt;

use crate::{comp::Comp, dest::Dest, jump::Jump, symbol::ADDR_MAX};

use color_print::cformat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`, 0..=ADDR_MAX
    A(u16),
    /// `dest=comp;jump`
    C(Dest, Comp, Jump),
}

impl Inst {
    /// Encode as a machine word. An `A` value above `ADDR_MAX` would set
    /// the opcode bit, so only its low 15 bits are kept.
    pub fn to_bin(&self) -> u16 {
        match *self {
            Inst::A(value) => {
                debug_assert!(value <= ADDR_MAX, "address out of range: {value}");
                value & ADDR_MAX
            }
            Inst::C(dest, comp, jump) => {
                let comp: u8 = comp.into();
                let dest: u8 = dest.into();
                let jump: u8 = jump.into();
                0b111 << 13 | (comp as u16) << 6 | (dest as u16) << 3 | jump as u16
            }
        }
    }

    /// Reverse of `to_bin`. `None` for C-words with unused prefix bits or
    /// an undefined comp pattern.
    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin & 0x8000 == 0 {
            return Some(Inst::A(bin));
        }
        if bin >> 13 != 0b111 {
            return None;
        }
        let comp = Comp::try_from(((bin >> 6) & 0x7F) as u8).ok()?;
        let dest = Dest::try_from(((bin >> 3) & 0b111) as u8).ok()?;
        let jump = Jump::try_from((bin & 0b111) as u8).ok()?;
        Some(Inst::C(dest, comp, jump))
    }

    /// 16 characters of `0`/`1`, MSB first.
    pub fn to_word(&self) -> String {
        format!("{:016b}", self.to_bin())
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::A(value) => write!(f, "@{}", value),
            Inst::C(dest, comp, jump) => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<r>@</><y>{:<6}</>", value),
            Inst::C(dest, comp, jump) => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    d => format!("{}=", d),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    j => format!(";{}", j),
                };
                cformat!("<b>{:>4}</><r>{:<3}</><g>{:<4}</>", dest, comp, jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $word:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    assert_eq!(inst.to_word(), $word);
                    let inst_back = Inst::from_bin(inst.to_bin());
                    assert_eq!(Some(inst), inst_back);
                }
            )*
        }
    }

    test_inst! {
        test_a_zero: Inst::A(0) => "0000000000000000",
        test_a_two: Inst::A(2) => "0000000000000010",
        test_a_max: Inst::A(32767) => "0111111111111111",
        test_a_screen: Inst::A(16384) => "0100000000000000",
        test_d_eq_a: Inst::C(Dest::D, Comp::A, Jump::Null) => "1110110000010000",
        test_d_eq_d_plus_a: Inst::C(Dest::D, Comp::DPlusA, Jump::Null) => "1110000010010000",
        test_m_eq_d: Inst::C(Dest::M, Comp::D, Jump::Null) => "1110001100001000",
        test_md_inc_jgt: Inst::C(Dest::MD, Comp::IncD, Jump::JGT) => "1110011111011001",
        test_jmp: Inst::C(Dest::Null, Comp::Zero, Jump::JMP) => "1110101010000111",
        test_amd_m_minus_d: Inst::C(Dest::AMD, Comp::MMinusD, Jump::JLE) => "1111000111111110",
    }

    #[test]
    fn rejects_bad_prefix() {
        // bit 14 cleared
        assert_eq!(Inst::from_bin(0b1010_1010_1000_0111), None);
        // undefined comp pattern 1111111
        assert_eq!(Inst::from_bin(0b1111_1111_1100_0000), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "address out of range")]
    fn a_value_over_15_bits() {
        Inst::A(40000).to_bin();
    }

    #[test]
    fn display() {
        assert_eq!(Inst::A(17).to_string(), "@17");
        assert_eq!(Inst::C(Dest::Null, Comp::Zero, Jump::JMP).to_string(), "0;JMP");
        assert_eq!(Inst::C(Dest::MD, Comp::IncD, Jump::JGT).to_string(), "MD=D+1;JGT");
        assert_eq!(Inst::C(Dest::D, Comp::A, Jump::Null).to_string(), "D=A");
    }
}
