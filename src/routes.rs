use crate::{
    api::{dashboard, export, pegawai, salary},
    config::Config,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/pegawai")
                    // /pegawai
                    .service(
                        web::resource("")
                            .route(web::post().to(pegawai::create_pegawai))
                            .route(web::get().to(pegawai::list_pegawai)),
                    )
                    // literal routes must come before /{id}
                    .service(
                        web::resource("/search").route(web::get().to(pegawai::search_pegawai)),
                    )
                    .service(web::resource("/summary").route(web::get().to(dashboard::summary)))
                    .service(web::resource("/export").route(web::get().to(export::export_csv)))
                    // /pegawai/{id}
                    .service(
                        web::resource("/{id}").route(web::delete().to(pegawai::delete_pegawai)),
                    ),
            )
            .service(
                web::scope("/salary")
                    .service(web::resource("").route(web::get().to(salary::preview_salary))),
            ),
    );
}
