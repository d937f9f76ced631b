use crate::handlers::prelude::*;

#[get("/ratings/edit/{rating_id}")]
pub async fn get_edit_rating(req: HttpRequest, path: web::Path<i64>) -> HttpResult {
    let rating_id = *path;
    let state = server_state(&req)?;
    let rating = db::ratings::Entity::find_by_id(rating_id)
        .one(&state.db)
        .await
        .map_err(|e| {
            log::error!("get_edit_rating: Failed to fetch rating {rating_id}: {e}.");
            AppHttpError::Internal
        })?;
    let Some(rating) = rating else {
        log::warn!("get_edit_rating: Rating {rating_id} not found");
        return Err(AppHttpError::NotFound);
    };
    let data = EditRatingTmplData {
        base_url_path: &state.config.site_base_url_path,
        title: "Edit Rating".to_owned(),
        action_url: format!(
            "{}/ratings/edit/{rating_id}",
            state.config.site_base_url_path
        ),
        user: rating.user,
        stars: rating.stars.to_string(),
        description: rating.description.unwrap_or_default(),
    };
    let html = state.tmpl.render("edit_rating", &data).map_err(|e| {
        log::error!("Failed to render edit_rating: {e}");
        AppHttpError::Internal
    })?;
    Ok(HttpResponse::Ok()
        .append_header(ContentType(mime::TEXT_HTML))
        .body(html))
}
