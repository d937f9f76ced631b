use gameshelf_db::{games, prelude::*, ratings};
use sea_orm::{EntityTrait, Set};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn idx<E: EntityTrait>(s: &sea_orm::Schema, e: E) -> Vec<IndexCreateStatement> {
    s.create_index_from_entity(e)
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        let s = sea_orm::Schema::new(m.get_database_backend());
        m.create_table(s.create_table_from_entity(Games)).await?;
        // The stars range check is not expressible on the entity, so this
        // table is spelled out.
        m.create_table(
            Table::create()
                .table(Ratings)
                .col(
                    ColumnDef::new(ratings::Column::Id)
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(ratings::Column::User).string().not_null())
                .col(
                    ColumnDef::new(ratings::Column::Stars)
                        .integer()
                        .not_null()
                        .check(Expr::col(ratings::Column::Stars).between(1, 5)),
                )
                .col(ColumnDef::new(ratings::Column::Description).string())
                .col(
                    ColumnDef::new(ratings::Column::GameId)
                        .big_integer()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk-ratings-game_id")
                        .from(Ratings, ratings::Column::GameId)
                        .to(Games, games::Column::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;
        let s = &s;
        let all_idx = [idx(s, Games), idx(s, Ratings)].into_iter().flatten();
        for i in all_idx {
            m.create_index(i).await?;
        }
        if std::env::var("GAMESHELF_POPULATE_DATABASE").is_ok() {
            populate_database(m).await?;
        }
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Ratings).if_exists().to_owned())
            .await
            .inspect_err(log_err("drop ratings"))?;
        m.drop_table(Table::drop().table(Games).if_exists().to_owned())
            .await
            .inspect_err(log_err("drop games"))?;
        Ok(())
    }
}

fn log_err<'a>(ctx: &'a str) -> impl FnOnce(&DbErr) + 'a {
    move |e| {
        eprintln!("{ctx}: {e}");
    }
}

async fn populate_database<'a>(m: &'a SchemaManager<'a>) -> Result<(), DbErr> {
    let db = m.get_connection();
    let game = games::ActiveModel {
        name: Set("Chrono Trigger".to_owned()),
        genre: Set("RPG".to_owned()),
        developer: Set("Square".to_owned()),
        ..Default::default()
    };
    let game_id = games::Entity::insert(game).exec(db).await?.last_insert_id;
    let rating = ratings::ActiveModel {
        user: Set("alice".to_owned()),
        stars: Set(5),
        description: Set(Some("Timeless.".to_owned())),
        game_id: Set(game_id),
        ..Default::default()
    };
    ratings::Entity::insert(rating).exec(db).await?;
    let game = games::ActiveModel {
        name: Set("Outer Wilds".to_owned()),
        genre: Set("Adventure".to_owned()),
        developer: Set("Mobius Digital".to_owned()),
        ..Default::default()
    };
    games::Entity::insert(game).exec(db).await?;
    Ok(())
}
