use crate::handlers::prelude::*;

#[derive(Serialize)]
struct GamesTmplData<'a> {
    base_url_path: &'a str,
    games: Vec<GameRowTmplData>,
}

#[derive(Serialize, Clone)]
struct GameRowTmplData {
    game_id: i64,
    name: String,
    genre: String,
    developer: String,
    average: String,
    url: String,
}

#[get("/")]
pub async fn get_games(req: HttpRequest) -> HttpResult {
    let state = server_state(&req)?;

    let games = db::prelude::Games::find()
        .order_by_asc(db::games::Column::Id)
        .all(&state.db)
        .await
        .map_err(|e| {
            log::error!("Failed to select games from db: {e}");
            AppHttpError::Internal
        })?;
    let rating_stars: Vec<(i64, i32)> = db::prelude::Ratings::find()
        .select_only()
        .column(db::ratings::Column::GameId)
        .column(db::ratings::Column::Stars)
        .into_tuple()
        .all(&state.db)
        .await
        .map_err(|e| {
            log::error!("Failed to select ratings from db: {e}");
            AppHttpError::Internal
        })?;
    let mut stars_by_game = HashMap::<i64, Vec<i32>>::new();
    for (game_id, stars) in rating_stars {
        stars_by_game.entry(game_id).or_default().push(stars);
    }

    let games: Vec<GameRowTmplData> = games
        .into_iter()
        .map(|g| GameRowTmplData {
            game_id: g.id,
            url: format!("{}/games/{}", state.config.site_base_url_path, g.id),
            average: format_average(
                stars_by_game
                    .get(&g.id)
                    .and_then(|s| average_stars(s.iter().copied())),
            ),
            name: g.name,
            genre: g.genre,
            developer: g.developer,
        })
        .collect();
    let html = state
        .tmpl
        .render(
            "games",
            &GamesTmplData {
                base_url_path: &state.config.site_base_url_path,
                games,
            },
        )
        .map_err(|e| {
            log::error!("Failed to render games template: {e}");
            AppHttpError::Internal
        })?;
    Ok(HttpResponse::Ok()
        .append_header(ContentType(mime::TEXT_HTML))
        .body(html))
}
