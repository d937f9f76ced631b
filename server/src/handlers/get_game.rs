use crate::handlers::prelude::*;

#[derive(Serialize)]
struct GameTmplData<'a> {
    base_url_path: &'a str,
    game_id: i64,
    name: String,
    genre: String,
    developer: String,
    average: String,
    ratings: Vec<RatingTmplData>,
}

#[get("/games/{game_id}")]
pub async fn get_game(req: HttpRequest, path: web::Path<i64>) -> HttpResult {
    let game_id = *path;
    let state = server_state(&req)?;
    let Some(game) = db::games::Entity::find_by_id(game_id)
        .one(&state.db)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch game {game_id} from db: {e:?}");
            AppHttpError::Internal
        })?
    else {
        return Err(AppHttpError::NotFound);
    };
    let ratings = db_game_ratings(&state.db, game_id).await.map_err(|e| {
        log::error!("Failed to fetch ratings for game {game_id} from db: {e:?}");
        AppHttpError::Internal
    })?;
    let average = format_average(average_stars(ratings.iter().map(|r| r.stars)));
    let ratings = ratings.into_iter().map(rating_tmpl_data).collect();
    let html = state
        .tmpl
        .render(
            "game",
            &GameTmplData {
                base_url_path: &state.config.site_base_url_path,
                game_id: game.id,
                name: game.name,
                genre: game.genre,
                developer: game.developer,
                average,
                ratings,
            },
        )
        .map_err(|e| {
            log::error!("Failed to render 'game' template: {e:?}");
            AppHttpError::Internal
        })?;
    Ok(HttpResponse::Ok()
        .append_header(ContentType(mime::TEXT_HTML))
        .body(html))
}
