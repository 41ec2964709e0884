//! Миграция: создание таблицы ships.

use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m001_create_ships"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ships::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ships::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Ships::Planet).string_len(50).not_null())
                    .col(ColumnDef::new(Ships::ShipType).string_len(16).null())
                    .col(ColumnDef::new(Ships::ProdDate).date().not_null())
                    .col(
                        ColumnDef::new(Ships::IsUsed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Ships::Speed).double().not_null())
                    .col(ColumnDef::new(Ships::CrewSize).integer().not_null())
                    .col(ColumnDef::new(Ships::Rating).double().not_null())
                    .to_owned(),
            )
            .await?;

        // Индекс по prod_date для выборок по диапазону дат
        manager
            .create_index(
                Index::create()
                    .table(Ships::Table)
                    .col(Ships::ProdDate)
                    .name("idx_ships_prod_date")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ships::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Ships {
    Table,
    Id,
    Name,
    Planet,
    ShipType,
    ProdDate,
    IsUsed,
    Speed,
    CrewSize,
    Rating,
}
