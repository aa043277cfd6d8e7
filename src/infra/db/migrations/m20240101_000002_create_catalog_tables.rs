//! Migration: Create the catalog tables (titles, people, credits).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Titles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Titles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Titles::Name).string().not_null())
                    .col(ColumnDef::new(Titles::Year).integer().not_null())
                    .col(ColumnDef::new(Titles::Plot).text().null())
                    .col(ColumnDef::new(Titles::RuntimeMinutes).integer().null())
                    .col(ColumnDef::new(Titles::Genres).json_binary().not_null())
                    .col(ColumnDef::new(Titles::PosterUrl).string().null())
                    .col(
                        ColumnDef::new(Titles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Titles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Name search drives the catalog listing
        manager
            .create_index(
                Index::create()
                    .name("idx_titles_name")
                    .table(Titles::Table)
                    .col(Titles::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(People::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(People::Name).string().not_null())
                    .col(ColumnDef::new(People::BirthYear).integer().null())
                    .col(ColumnDef::new(People::Bio).text().null())
                    .col(
                        ColumnDef::new(People::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(People::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_people_name")
                    .table(People::Table)
                    .col(People::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Credits::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Credits::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Credits::TitleId).uuid().not_null())
                    .col(ColumnDef::new(Credits::PersonId).uuid().not_null())
                    .col(ColumnDef::new(Credits::Character).string().not_null())
                    .col(
                        ColumnDef::new(Credits::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_credits_title")
                            .from(Credits::Table, Credits::TitleId)
                            .to(Titles::Table, Titles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_credits_person")
                            .from(Credits::Table, Credits::PersonId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_credits_title_id")
                    .table(Credits::Table)
                    .col(Credits::TitleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_credits_person_id")
                    .table(Credits::Table)
                    .col(Credits::PersonId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Credits::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Titles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Titles {
    Table,
    Id,
    Name,
    Year,
    Plot,
    RuntimeMinutes,
    Genres,
    PosterUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum People {
    Table,
    Id,
    Name,
    BirthYear,
    Bio,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Credits {
    Table,
    Id,
    TitleId,
    PersonId,
    Character,
    CreatedAt,
}
