use sea_orm_migration::prelude::*;

/// 用户表
#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Email,
    Mobile,
    Password,
    CreatedTime,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 主键由应用生成 (12 位十六进制)，不使用自增
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .string_len(128)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(User::Email)
                            .string_len(128)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(User::Mobile).string_len(128).null())
                    .col(ColumnDef::new(User::Password).string_len(128).not_null())
                    .col(
                        ColumnDef::new(User::CreatedTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_user_email_password")
                    .table(User::Table)
                    .col(User::Email)
                    .col(User::Password)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_user_created_time")
                    .table(User::Table)
                    .col(User::CreatedTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(User::Table).to_owned())
            .await
    }
}
