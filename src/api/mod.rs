pub mod dashboard;
pub mod export;
pub mod pegawai;
pub mod salary;
