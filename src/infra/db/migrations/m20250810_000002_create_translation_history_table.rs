//! Migration: Create the translation_history table.
//!
//! `abha_id` references users.abha_id but is intentionally not a foreign
//! key; orphaned history entries are tolerated.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TranslationHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TranslationHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TranslationHistory::AbhaId).string().not_null())
                    .col(
                        ColumnDef::new(TranslationHistory::SourceSystem)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TranslationHistory::SourceCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TranslationHistory::TargetSystem)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TranslationHistory::TargetCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TranslationHistory::SnomedCtCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TranslationHistory::LoincCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TranslationHistory::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // History is always read per user, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_translation_history_abha_id")
                    .table(TranslationHistory::Table)
                    .col(TranslationHistory::AbhaId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TranslationHistory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TranslationHistory {
    Table,
    Id,
    AbhaId,
    SourceSystem,
    SourceCode,
    TargetSystem,
    TargetCode,
    SnomedCtCode,
    LoincCode,
    Timestamp,
}
