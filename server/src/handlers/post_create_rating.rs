use crate::handlers::prelude::*;
use sea_orm::Set;

#[derive(Deserialize)]
struct RatingForm {
    user: String,
    stars: i32,
    description: Option<String>,
}

#[post("/ratings/create/{game_id}")]
pub async fn post_create_rating(
    req: HttpRequest,
    path: web::Path<i64>,
    form: web::Form<RatingForm>,
) -> impl Responder {
    let game_id = *path;
    let state = server_state(&req)?;
    let form = form.into_inner();
    let insert = db::ratings::ActiveModel {
        user: Set(form.user),
        stars: Set(form.stars),
        description: Set(form.description),
        game_id: Set(game_id),
        ..Default::default()
    };
    // The game's existence is not checked up front; the foreign key
    // rejects the insert when it is gone.
    db::ratings::Entity::insert(insert)
        .exec(&state.db)
        .await
        .map_err(|e| {
            if let Some(sea_orm::error::SqlErr::ForeignKeyConstraintViolation(_)) = e.sql_err() {
                return AppHttpError::GameMissing;
            }
            if e.to_string().contains("CHECK constraint failed") {
                return AppHttpError::StarsOutOfRange;
            }
            log::error!("Failed to insert rating for game {game_id}: {e}");
            AppHttpError::Internal
        })?;
    Ok::<_, AppHttpError>(
        web::Redirect::to(format!(
            "{}/games/{game_id}",
            state.config.site_base_url_path
        ))
        .see_other()
        .respond_to(&req),
    )
}
