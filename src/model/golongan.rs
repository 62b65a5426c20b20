use strum_macros::{Display, EnumString};

/// Civil-service pay grade. Determines the base salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Golongan {
    IIIA,
    IIIB,
    IIIC,
    IIID,
}

impl Golongan {
    /// Base salary in whole rupiah.
    pub fn gaji_pokok(self) -> i64 {
        match self {
            Golongan::IIIA => 3_000_000,
            Golongan::IIIB => 3_500_000,
            Golongan::IIIC => 4_000_000,
            Golongan::IIID => 4_500_000,
        }
    }
}
