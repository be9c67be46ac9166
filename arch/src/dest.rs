use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Destination field. Bits are `d1 d2 d3` = `A D M`.
///
/// Letters may be written in any order, so every permutation parses to
/// the same variant.
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
pub enum Dest {
    #[strum(to_string = "null")]
    Null = 0b000,
    #[strum(to_string = "M")]
    M = 0b001,
    #[strum(to_string = "D")]
    D = 0b010,
    #[strum(to_string = "MD", serialize = "DM")]
    MD = 0b011,
    #[strum(to_string = "A")]
    A = 0b100,
    #[strum(to_string = "AM", serialize = "MA")]
    AM = 0b101,
    #[strum(to_string = "AD", serialize = "DA")]
    AD = 0b110,
    #[strum(
        to_string = "AMD",
        serialize = "ADM",
        serialize = "DAM",
        serialize = "DMA",
        serialize = "MAD",
        serialize = "MDA"
    )]
    AMD = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(d) => Ok(d),
            Err(_) => Err(format!("Undefined dest: {s}")),
        }
    }
}
