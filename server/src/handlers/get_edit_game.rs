use crate::handlers::prelude::*;

#[get("/games/edit/{game_id}")]
pub async fn get_edit_game(req: HttpRequest, path: web::Path<i64>) -> HttpResult {
    let game_id = *path;
    let state = server_state(&req)?;
    let game = db::games::Entity::find_by_id(game_id)
        .one(&state.db)
        .await
        .map_err(|e| {
            log::error!("get_edit_game: Failed to fetch game {game_id}: {e}.");
            AppHttpError::Internal
        })?;
    let Some(game) = game else {
        log::warn!("get_edit_game: Game {game_id} not found");
        return Err(AppHttpError::NotFound);
    };
    let data = EditGameTmplData {
        base_url_path: &state.config.site_base_url_path,
        title: "Edit Game".to_owned(),
        action_url: format!("{}/games/edit/{game_id}", state.config.site_base_url_path),
        name: game.name,
        genre: game.genre,
        developer: game.developer,
    };
    let html = state.tmpl.render("edit_game", &data).map_err(|e| {
        log::error!("Failed to render edit_game: {e}");
        AppHttpError::Internal
    })?;
    Ok(HttpResponse::Ok()
        .append_header(ContentType(mime::TEXT_HTML))
        .body(html))
}
