use crate::handlers::prelude::*;

#[post("/ratings/delete/{rating_id}")]
pub async fn post_delete_rating(req: HttpRequest, path: web::Path<i64>) -> impl Responder {
    let rating_id = *path;
    let state = server_state(&req)?;
    let game_id = state
        .db
        .transaction(|txn| {
            Box::pin(async move {
                let game_id: Option<i64> = db::prelude::Ratings::find_by_id(rating_id)
                    .select_only()
                    .column(db::ratings::Column::GameId)
                    .into_tuple()
                    .one(txn)
                    .await
                    .map_err(|e| {
                        log::error!("Failed to fetch rating {rating_id}: {e}");
                        AppHttpError::Internal
                    })?;
                if game_id.is_some() {
                    db::ratings::Entity::delete_by_id(rating_id)
                        .exec(txn)
                        .await
                        .map_err(|e| {
                            log::error!("Failed to delete rating {rating_id}: {e}");
                            AppHttpError::Internal
                        })?;
                }
                Ok(game_id)
            })
        })
        .await
        .map_err(|e| match e {
            sea_orm::TransactionError::Connection(_) => AppHttpError::Internal,
            sea_orm::TransactionError::Transaction(e) => e,
        })?;
    // A rating that is already gone leaves the owning game unknown; fall
    // back to the game list.
    let target = match game_id {
        Some(game_id) => format!("{}/games/{game_id}", state.config.site_base_url_path),
        None => format!("{}/", state.config.site_base_url_path),
    };
    Ok::<_, AppHttpError>(web::Redirect::to(target).see_other().respond_to(&req))
}
