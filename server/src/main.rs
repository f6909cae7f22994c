use actix_web::{web::Data, App, HttpServer};
use colored::*;
use frontend::Dist;

mod cli;
mod frontend;
mod logger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = cli::get_args();

    logger::init(config.log_level);

    log::info!(
        "Starting service: \"chessbet\", serving: {}, listening on: {}",
        config.dist.display().to_string().blue(),
        config.addr.blue()
    );

    if !config.dist.join("index.html").is_file() {
        log::warn!(
            "No index.html in {}; run `trunk build` in frontend/ first",
            config.dist.display()
        );
    }

    let dist = Data::new(Dist(config.dist));

    HttpServer::new(move || {
        App::new()
            .app_data(dist.clone())
            .service(frontend::assets)
    })
    .bind(&config.addr)?
    .run()
    .await
}
