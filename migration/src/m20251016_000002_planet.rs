use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len_uniq(Planet::Name, 30))
                    .col(string(Planet::Diameter))
                    .col(string(Planet::RotationPeriod))
                    .col(string(Planet::OrbitalPeriod))
                    .col(string(Planet::Population))
                    .col(string(Planet::Terrain))
                    .col(string(Planet::SurfaceWater))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Population,
    Terrain,
    SurfaceWater,
}
