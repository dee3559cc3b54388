use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;

mod config;

use config::SiteConfig;

/// Any unknown path gets the SPA shell; the router sorts it out client-side.
async fn spa(cfg: web::Data<SiteConfig>) -> std::io::Result<NamedFile> {
    NamedFile::open(cfg.index_file())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cfg = SiteConfig::from_env()?;
    log::info!(
        "serving {} on http://{}:{}",
        cfg.dist_dir.display(),
        cfg.host,
        cfg.port
    );

    let bind = (cfg.host.clone(), cfg.port);
    let data = web::Data::new(cfg);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            // top-level static assets first, so the bundle root can't shadow them
            .service(Files::new("/assets", &data.assets_dir))
            .service(Files::new("/", &data.dist_dir).index_file("index.html"))
            .default_service(web::get().to(spa))
    })
    .bind(bind.clone())
    .with_context(|| format!("binding {}:{}", bind.0, bind.1))?
    .run()
    .await
    .context("server exited")
}
