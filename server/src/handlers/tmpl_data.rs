use crate::handlers::prelude::*;

#[derive(Serialize, Clone, Debug)]
pub struct RatingTmplData {
    pub rating_id: i64,
    pub user: String,
    pub stars: i32,
    pub description: String,
}

/// Form page data shared by the game create and edit views.
#[derive(Serialize)]
pub struct EditGameTmplData<'a> {
    pub base_url_path: &'a str,
    pub title: String,
    pub action_url: String,
    pub name: String,
    pub genre: String,
    pub developer: String,
}

/// Form page data shared by the rating create and edit views.
#[derive(Serialize)]
pub struct EditRatingTmplData<'a> {
    pub base_url_path: &'a str,
    pub title: String,
    pub action_url: String,
    pub user: String,
    pub stars: String,
    pub description: String,
}

pub fn rating_tmpl_data(r: db::ratings::Model) -> RatingTmplData {
    RatingTmplData {
        rating_id: r.id,
        user: r.user,
        stars: r.stars,
        description: r.description.unwrap_or_default(),
    }
}

pub async fn db_game_ratings(
    db: &DatabaseConnection,
    game_id: i64,
) -> Result<Vec<db::ratings::Model>, DbErr> {
    db::prelude::Ratings::find()
        .filter(db::ratings::Column::GameId.eq(game_id))
        .order_by_asc(db::ratings::Column::Id)
        .all(db)
        .await
}

pub fn average_stars(stars: impl ExactSizeIterator<Item = i32>) -> Option<f64> {
    let count = stars.len();
    if count == 0 {
        return None;
    }
    let total: i64 = stars.map(i64::from).sum();
    Some(total as f64 / count as f64)
}

pub fn format_average(stars: Option<f64>) -> String {
    stars.map_or("N/A".to_owned(), |s| format!("{s:.2}"))
}
