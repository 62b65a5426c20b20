use strum_macros::{Display, EnumString};

/// Functional position. Determines the position allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Jabatan {
    #[strum(serialize = "Asisten Ahli")]
    AsistenAhli,
    #[strum(serialize = "Lektor")]
    Lektor,
    #[strum(serialize = "Lektor Kepala")]
    LektorKepala,
    #[strum(serialize = "Guru Besar")]
    GuruBesar,
}

impl Jabatan {
    /// Position allowance in whole rupiah. Guru Besar is the only
    /// position whose allowance scales with the base salary.
    pub fn tunjangan(self, gaji_pokok: i64) -> i64 {
        match self {
            Jabatan::AsistenAhli => 300_000,
            Jabatan::Lektor => 700_000,
            Jabatan::LektorKepala => 1_300_000,
            Jabatan::GuruBesar => gaji_pokok * 3,
        }
    }
}
