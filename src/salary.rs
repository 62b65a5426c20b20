use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::model::golongan::Golongan;
use crate::model::jabatan::Jabatan;

/// The five computed salary components, in whole rupiah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Breakdown {
    #[schema(example = 4_000_000)]
    pub gaji_pokok: i64,
    #[schema(example = 400_000)]
    pub tunjangan_keluarga: i64,
    #[schema(example = 320_000)]
    pub tunjangan_anak: i64,
    #[schema(example = 700_000)]
    pub tunjangan_jabatan: i64,
    #[schema(example = 5_420_000)]
    pub gaji_bersih: i64,
}

/// Child-allowance rate in percent, keyed by exact child count.
/// Any other count, including 0 and anything above 3, earns nothing.
fn tunjangan_anak_percent(jumlah_anak: u32) -> i64 {
    match jumlah_anak {
        1 => 5,
        2 => 8,
        3 => 12,
        _ => 0,
    }
}

/// Compute the salary breakdown for one employee.
///
/// Unrecognised grades, positions, and child counts contribute zero
/// rather than failing; callers get a breakdown for every input.
pub fn calculate(
    golongan: &str,
    status_keluarga: &str,
    jumlah_anak: u32,
    jabatan: &str,
) -> Breakdown {
    let gaji_pokok = Golongan::from_str(golongan)
        .map(|g| g.gaji_pokok())
        .unwrap_or(0);

    let tunjangan_keluarga = if status_keluarga == "Nikah" {
        gaji_pokok / 10
    } else {
        0
    };

    let tunjangan_anak = gaji_pokok * tunjangan_anak_percent(jumlah_anak) / 100;

    let tunjangan_jabatan = Jabatan::from_str(jabatan)
        .map(|j| j.tunjangan(gaji_pokok))
        .unwrap_or(0);

    let gaji_bersih = gaji_pokok + tunjangan_keluarga + tunjangan_anak + tunjangan_jabatan;

    Breakdown {
        gaji_pokok,
        tunjangan_keluarga,
        tunjangan_anak,
        tunjangan_jabatan,
        gaji_bersih,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn married_lektor_with_two_children() {
        let b = calculate("IIIC", "Nikah", 2, "Lektor");
        assert_eq!(b.gaji_pokok, 4_000_000);
        assert_eq!(b.tunjangan_keluarga, 400_000);
        assert_eq!(b.tunjangan_anak, 320_000);
        assert_eq!(b.tunjangan_jabatan, 700_000);
        assert_eq!(b.gaji_bersih, 5_420_000);
    }

    #[test]
    fn unmarried_guru_besar_without_children() {
        let b = calculate("IIID", "Belum Nikah", 0, "Guru Besar");
        assert_eq!(b.gaji_pokok, 4_500_000);
        assert_eq!(b.tunjangan_keluarga, 0);
        assert_eq!(b.tunjangan_anak, 0);
        assert_eq!(b.tunjangan_jabatan, 13_500_000);
        assert_eq!(b.gaji_bersih, 18_000_000);
    }

    #[test]
    fn unrecognised_inputs_default_to_zero() {
        let b = calculate("X", "Nikah", 5, "Unknown");
        assert_eq!(b.gaji_pokok, 0);
        assert_eq!(b.tunjangan_keluarga, 0);
        assert_eq!(b.tunjangan_anak, 0);
        assert_eq!(b.tunjangan_jabatan, 0);
        assert_eq!(b.gaji_bersih, 0);
    }

    #[test]
    fn child_allowance_is_keyed_by_exact_count() {
        // 0 and >3 children earn nothing; 1..=3 follow the rate table.
        assert_eq!(calculate("IIIA", "Nikah", 0, "Lektor").tunjangan_anak, 0);
        assert_eq!(
            calculate("IIIA", "Nikah", 1, "Lektor").tunjangan_anak,
            150_000
        );
        assert_eq!(
            calculate("IIIA", "Nikah", 3, "Lektor").tunjangan_anak,
            360_000
        );
        assert_eq!(calculate("IIIA", "Nikah", 4, "Lektor").tunjangan_anak, 0);
    }

    #[test]
    fn gaji_bersih_is_always_the_component_sum() {
        let grades = ["IIIA", "IIIB", "IIIC", "IIID", "X", ""];
        let statuses = ["Nikah", "Belum Nikah", ""];
        let positions = [
            "Asisten Ahli",
            "Lektor",
            "Lektor Kepala",
            "Guru Besar",
            "Unknown",
        ];
        for golongan in grades {
            for status in statuses {
                for anak in 0..=5 {
                    for jabatan in positions {
                        let b = calculate(golongan, status, anak, jabatan);
                        assert_eq!(
                            b.gaji_bersih,
                            b.gaji_pokok
                                + b.tunjangan_keluarga
                                + b.tunjangan_anak
                                + b.tunjangan_jabatan,
                            "identity broken for ({golongan}, {status}, {anak}, {jabatan})"
                        );
                        assert!(b.gaji_pokok >= 0 && b.gaji_bersih >= 0);
                    }
                }
            }
        }
    }
}
