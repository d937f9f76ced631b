use actix_web::{web, App, HttpServer, ResponseError};
use anyhow::Context;
use sea_orm::Database;

use migration::MigratorTrait;

use crate::config::Config;
use crate::handlers::get_create_game::get_create_game;
use crate::handlers::get_create_rating::get_create_rating;
use crate::handlers::get_edit_game::get_edit_game;
use crate::handlers::get_edit_rating::get_edit_rating;
use crate::handlers::get_game::get_game;
use crate::handlers::get_games::get_games;
use crate::handlers::post_create_game::post_create_game;
use crate::handlers::post_create_rating::post_create_rating;
use crate::handlers::post_delete_game::post_delete_game;
use crate::handlers::post_delete_rating::post_delete_rating;
use crate::handlers::post_edit_game::post_edit_game;
use crate::handlers::post_edit_rating::post_edit_rating;
use crate::http_types::AppHttpError;
use crate::server_state::ServerState;

pub struct Handle {
    pub server: actix_web::dev::Server,
    pub addrs: Vec<std::net::SocketAddr>,
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let handle = create(config).await?;
    handle.server.await?;
    Ok(())
}

pub async fn create(config: Config) -> anyhow::Result<Handle> {
    let mut db_options = sea_orm::ConnectOptions::new(&config.db_path);
    db_options.max_connections(32);
    let db = Database::connect(db_options).await?;
    migration::Migrator::up(&db, None)
        .await
        .context("Applying database migrations failed")?;
    let mut tmpl = handlebars::Handlebars::new();
    tmpl.set_strict_mode(true);
    let tf = |t: &str| -> std::path::PathBuf {
        std::path::Path::new(&config.server_config.fs_root_dir)
            .join("templates")
            .join(format!("{t}.hbs"))
    };
    tmpl.register_template_file("games", tf("games"))
        .context("Failed to register games template")?;
    tmpl.register_template_file("game", tf("game"))
        .context("Failed to register game template")?;
    tmpl.register_template_file("edit_game", tf("edit_game"))
        .context("Failed to register edit_game template")?;
    tmpl.register_template_file("edit_rating", tf("edit_rating"))
        .context("Failed to register edit_rating template")?;
    let port = config.server_config.port;

    let app_state = ServerState {
        tmpl,
        db,
        config: config.server_config,
    };

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(web::FormConfig::default().error_handler(|err, _req| {
                actix_web::error::InternalError::from_response(
                    err,
                    AppHttpError::BadClientData.error_response(),
                )
                .into()
            }))
            .service(get_games)
            // The fixed /games/create route has to land before the
            // {game_id} capture.
            .service(get_create_game)
            .service(post_create_game)
            .service(get_edit_game)
            .service(post_edit_game)
            .service(post_delete_game)
            .service(get_game)
            .service(get_create_rating)
            .service(post_create_rating)
            .service(get_edit_rating)
            .service(post_edit_rating)
            .service(post_delete_rating)
            .service(actix_files::Files::new(
                "/static",
                std::path::Path::new(&app_state.config.fs_root_dir).join("static"),
            ))
    })
    .workers(8)
    .bind(("::", port))?;
    let addrs = server.addrs();
    let server = server.run(); // Does not actually run the server but creates a future.
    Ok(Handle { server, addrs })
}
