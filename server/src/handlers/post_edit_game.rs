use crate::handlers::prelude::*;
use sea_orm::Set;

#[derive(Deserialize)]
struct GameForm {
    name: String,
    genre: String,
    developer: String,
}

#[post("/games/edit/{game_id}")]
pub async fn post_edit_game(
    req: HttpRequest,
    path: web::Path<i64>,
    form: web::Form<GameForm>,
) -> impl Responder {
    let game_id = *path;
    let state = server_state(&req)?;
    let form = form.into_inner();
    let update = db::games::ActiveModel {
        id: Set(game_id),
        name: Set(form.name),
        genre: Set(form.genre),
        developer: Set(form.developer),
    };
    db::games::Entity::update(update)
        .exec(&state.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => AppHttpError::NotFound,
            e => {
                log::error!("Failed to update game {game_id}: {e}");
                AppHttpError::Internal
            }
        })?;
    Ok::<_, AppHttpError>(
        web::Redirect::to(format!("{}/", state.config.site_base_url_path))
            .see_other()
            .respond_to(&req),
    )
}
