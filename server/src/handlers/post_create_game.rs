use crate::handlers::prelude::*;
use sea_orm::Set;

#[derive(Deserialize)]
struct GameForm {
    name: String,
    genre: String,
    developer: String,
}

#[post("/games/create")]
pub async fn post_create_game(req: HttpRequest, form: web::Form<GameForm>) -> impl Responder {
    let state = server_state(&req)?;
    let form = form.into_inner();
    let insert = db::games::ActiveModel {
        name: Set(form.name),
        genre: Set(form.genre),
        developer: Set(form.developer),
        ..Default::default()
    };
    db::games::Entity::insert(insert)
        .exec(&state.db)
        .await
        .map_err(|e| {
            log::error!("Failed to insert new game: {e}");
            AppHttpError::Internal
        })?;
    Ok::<_, AppHttpError>(
        web::Redirect::to(format!("{}/", state.config.site_base_url_path))
            .see_other()
            .respond_to(&req),
    )
}
