use crate::handlers::prelude::*;

#[get("/ratings/create/{game_id}")]
pub async fn get_create_rating(req: HttpRequest, path: web::Path<i64>) -> HttpResult {
    let game_id = *path;
    let state = server_state(&req)?;
    // The form is bound to one game; refuse to render it for a missing one.
    let game = db::games::Entity::find_by_id(game_id)
        .one(&state.db)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch game {game_id} from db: {e}");
            AppHttpError::Internal
        })?;
    if game.is_none() {
        return Err(AppHttpError::NotFound);
    }
    let data = EditRatingTmplData {
        base_url_path: &state.config.site_base_url_path,
        title: "Add Rating".to_owned(),
        action_url: format!(
            "{}/ratings/create/{game_id}",
            state.config.site_base_url_path
        ),
        user: String::new(),
        stars: String::new(),
        description: String::new(),
    };
    let html = state.tmpl.render("edit_rating", &data).map_err(|e| {
        log::error!("Failed to render edit_rating: {e}");
        AppHttpError::Internal
    })?;
    Ok(HttpResponse::Ok()
        .append_header(ContentType(mime::TEXT_HTML))
        .body(html))
}
