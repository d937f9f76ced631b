use crate::handlers::prelude::*;

#[post("/games/delete/{game_id}")]
pub async fn post_delete_game(req: HttpRequest, path: web::Path<i64>) -> impl Responder {
    let game_id = *path;
    let state = server_state(&req)?;
    // Deleting a missing id is a no-op. The schema cascade removes the
    // game's ratings.
    db::games::Entity::delete_by_id(game_id)
        .exec(&state.db)
        .await
        .map_err(|e| {
            log::error!("Failed to delete game {game_id}: {e}");
            AppHttpError::Internal
        })?;
    Ok::<_, AppHttpError>(
        web::Redirect::to(format!("{}/", state.config.site_base_url_path))
            .see_other()
            .respond_to(&req),
    )
}
