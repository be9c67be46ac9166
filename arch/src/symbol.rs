use indexmap::IndexMap;
use once_cell::sync::Lazy;

// ----------------------------------------------------------------------------
// Address space

/// Largest value an A-instruction can carry (15 bits).
pub const ADDR_MAX: u16 = 0x7FFF;

/// First RAM address handed out to variables.
pub const VAR_BASE: u16 = 16;

pub const SCREEN: u16 = 0x4000;
pub const KBD: u16 = 0x6000;

// ----------------------------------------------------------------------------
// Predefined symbols

/// Built-in symbols in declaration order.
///
/// `SP`..`THAT` alias `R0`..`R4`.
pub static PREDEFINED: Lazy<IndexMap<&'static str, u16>> = Lazy::new(|| {
    const REGS: [&str; 16] = [
        "R0", "R1", "R2", "R3", "R4", "R5", "R6", "R7", "R8", "R9", "R10", "R11", "R12", "R13",
        "R14", "R15",
    ];
    let mut map = IndexMap::new();
    for (addr, name) in REGS.into_iter().enumerate() {
        map.insert(name, addr as u16);
    }
    map.insert("SP", 0);
    map.insert("LCL", 1);
    map.insert("ARG", 2);
    map.insert("THIS", 3);
    map.insert("THAT", 4);
    map.insert("SCREEN", SCREEN);
    map.insert("KBD", KBD);
    map
});
