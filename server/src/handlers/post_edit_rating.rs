use crate::handlers::prelude::*;
use sea_orm::Set;

#[derive(Deserialize)]
struct RatingForm {
    user: String,
    stars: i32,
    description: Option<String>,
}

#[post("/ratings/edit/{rating_id}")]
pub async fn post_edit_rating(
    req: HttpRequest,
    path: web::Path<i64>,
    form: web::Form<RatingForm>,
) -> impl Responder {
    let rating_id = *path;
    let state = server_state(&req)?;
    let form = form.into_inner();
    // game_id stays untouched; the redirect below relies on the updated
    // row still naming its owner.
    let update = db::ratings::ActiveModel {
        id: Set(rating_id),
        user: Set(form.user),
        stars: Set(form.stars),
        description: Set(form.description),
        ..Default::default()
    };
    let rating = db::ratings::Entity::update(update)
        .exec(&state.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => AppHttpError::NotFound,
            e if e.to_string().contains("CHECK constraint failed") => {
                AppHttpError::StarsOutOfRange
            }
            e => {
                log::error!("Failed to update rating {rating_id}: {e}");
                AppHttpError::Internal
            }
        })?;
    Ok::<_, AppHttpError>(
        web::Redirect::to(format!(
            "{}/games/{}",
            state.config.site_base_url_path, rating.game_id
        ))
        .see_other()
        .respond_to(&req),
    )
}
