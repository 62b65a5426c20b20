pub mod nik_cache;
pub mod nik_filter;
