pub mod prelude; // TODO: not pub
pub mod tmpl_data; // TODO: not pub

pub mod get_create_game;
pub mod get_create_rating;
pub mod get_edit_game;
pub mod get_edit_rating;
pub mod get_game;
pub mod get_games;
pub mod post_create_game;
pub mod post_create_rating;
pub mod post_delete_game;
pub mod post_delete_rating;
pub mod post_edit_game;
pub mod post_edit_rating;
