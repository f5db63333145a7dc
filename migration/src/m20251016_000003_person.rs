use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string_len_uniq(Person::Name, 30))
                    .col(string(Person::BirthYear))
                    .col(string(Person::EyeColor))
                    .col(string(Person::Gender))
                    .col(string(Person::HairColor))
                    .col(string(Person::Height))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    Name,
    BirthYear,
    EyeColor,
    Gender,
    HairColor,
    Height,
}
