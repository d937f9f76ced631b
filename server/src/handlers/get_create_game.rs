use crate::handlers::prelude::*;

#[get("/games/create")]
pub async fn get_create_game(req: HttpRequest) -> HttpResult {
    let state = server_state(&req)?;
    let data = EditGameTmplData {
        base_url_path: &state.config.site_base_url_path,
        title: "Add Game".to_owned(),
        action_url: format!("{}/games/create", state.config.site_base_url_path),
        name: String::new(),
        genre: String::new(),
        developer: String::new(),
    };
    let html = state.tmpl.render("edit_game", &data).map_err(|e| {
        log::error!("Failed to render edit_game: {e}");
        AppHttpError::Internal
    })?;
    Ok(HttpResponse::Ok()
        .append_header(ContentType(mime::TEXT_HTML))
        .body(html))
}
