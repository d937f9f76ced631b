pub use std::collections::HashMap;

pub use actix_web::http::header::ContentType;
pub use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
pub use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
pub use serde::{Deserialize, Serialize};

pub use gameshelf_db as db;

pub use crate::handlers::tmpl_data::*;
pub use crate::http_types::*;
pub use crate::server_state::*;
