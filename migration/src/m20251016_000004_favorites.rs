use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251016_000001_user::User, m20251016_000002_planet::Planet,
    m20251016_000003_person::Person,
};

static IDX_FAVORITES_USER_ID: &str = "idx_favorites_user_id";
static FK_FAVORITES_USER_ID: &str = "fk_favorites_user_id";
static FK_FAVORITES_PERSON_ID: &str = "fk_favorites_person_id";
static FK_FAVORITES_HOMEWORLD_ID: &str = "fk_favorites_homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline since SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::PersonId))
                    .col(integer_null(Favorites::HomeworldId))
                    // A favorite points at exactly one person or one planet
                    .check(Expr::cust(
                        "(person_id IS NULL) <> (homeworld_id IS NULL)",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_PERSON_ID)
                            .from(Favorites::Table, Favorites::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_HOMEWORLD_ID)
                            .from(Favorites::Table, Favorites::HomeworldId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_ID)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PersonId,
    HomeworldId,
}
