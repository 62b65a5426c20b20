use crate::api::dashboard::SummaryResponse;
use crate::api::pegawai::{CreatePegawai, PegawaiListResponse, SearchQuery};
use crate::api::salary::SalaryQuery;
use crate::model::pegawai::Pegawai;
use crate::salary::Breakdown;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aplikasi Gaji Pegawai API",
        version = "1.0.0",
        description = r#"
## Employee Payroll Entry & Reporting

Single-user payroll service for civil-service employees, backed by an
on-device SQLite database.

### 🔹 Key Features
- **Entry**
  - Save employee records with a salary breakdown computed from fixed
    rank, family, child, and position allowance tables
- **Reporting**
  - Full tabular listing, dashboard summary, and CSV export
- **Search**
  - Case-insensitive substring search by NIK or name
- **Delete**
  - Remove records by id (idempotent)

### 📦 Response Format
- JSON-based RESTful responses; CSV for the export endpoint

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::pegawai::create_pegawai,
        crate::api::pegawai::list_pegawai,
        crate::api::pegawai::search_pegawai,
        crate::api::pegawai::delete_pegawai,

        crate::api::dashboard::summary,
        crate::api::export::export_csv,

        crate::api::salary::preview_salary
    ),
    components(
        schemas(
            Pegawai,
            CreatePegawai,
            PegawaiListResponse,
            SearchQuery,
            SummaryResponse,
            SalaryQuery,
            Breakdown
        )
    ),
    tags(
        (name = "Pegawai", description = "Employee record entry, listing, search, and delete APIs"),
        (name = "Dashboard", description = "Dashboard summary APIs"),
        (name = "Export", description = "CSV export APIs"),
        (name = "Salary", description = "Salary breakdown preview APIs"),
    )
)]
pub struct ApiDoc;
