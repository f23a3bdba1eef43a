//! 通用 CRUD 扩展
//!
//! 为所有 sea-orm `ActiveModel` 提供 create / update / save / delete，
//! 为所有 `Entity` 提供 `get_by_id`。`db` 可以是连接池也可以是事务：
//! 传入事务时由调用方决定何时提交。

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};

use crate::error::AppResult;

pub type ModelOf<A> = <<A as ActiveModelTrait>::Entity as EntityTrait>::Model;

#[async_trait]
pub trait CrudExt: ActiveModelTrait + ActiveModelBehavior + Send + 'static
where
    ModelOf<Self>: IntoActiveModel<Self>,
{
    /// 插入新记录并返回写入后的数据
    async fn create<C>(self, db: &C) -> AppResult<ModelOf<Self>>
    where
        C: ConnectionTrait,
    {
        let model = self.insert(db).await?;
        Ok(model)
    }

    /// 只更新已修改 (Set) 的字段
    async fn update_record<C>(self, db: &C) -> AppResult<ModelOf<Self>>
    where
        C: ConnectionTrait,
    {
        let model = self.update(db).await?;
        Ok(model)
    }

    /// 主键未设置时插入，否则更新
    async fn save_record<C>(self, db: &C) -> AppResult<Self>
    where
        C: ConnectionTrait,
    {
        let saved = self.save(db).await?;
        Ok(saved)
    }

    /// 删除记录，返回受影响的行数
    async fn delete_record<C>(self, db: &C) -> AppResult<u64>
    where
        C: ConnectionTrait,
    {
        let result = self.delete(db).await?;
        Ok(result.rows_affected)
    }
}

impl<A> CrudExt for A
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    ModelOf<A>: IntoActiveModel<A>,
{
}

#[async_trait]
pub trait FindById: EntityTrait {
    async fn get_by_id<C, K>(db: &C, id: K) -> AppResult<Option<Self::Model>>
    where
        C: ConnectionTrait,
        K: Into<<Self::PrimaryKey as PrimaryKeyTrait>::ValueType> + Send,
    {
        let model = Self::find_by_id(id).one(db).await?;
        Ok(model)
    }
}

impl<E: EntityTrait> FindById for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::user_entity as users;
    use chrono::DateTime;
    use sea_orm::{
        ActiveValue, DatabaseBackend, MockDatabase, MockExecResult, Set, TransactionTrait,
    };

    fn sample_user(id: &str) -> users::Model {
        users::Model {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            mobile: None,
            password: "hashed".to_string(),
            created_time: DateTime::parse_from_rfc3339("2024-01-01T00:00:00+00:00").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_inserted_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_user("a1b2c3d4e5f6")]])
            .into_connection();

        let created = users::ActiveModel {
            id: Set("a1b2c3d4e5f6".to_string()),
            email: Set("a1b2c3d4e5f6@example.com".to_string()),
            mobile: Set(None),
            password: Set("hashed".to_string()),
            ..Default::default()
        }
        .create(&db)
        .await
        .unwrap();

        assert_eq!(created, sample_user("a1b2c3d4e5f6"));
    }

    #[tokio::test]
    async fn test_update_record() {
        let mut updated = sample_user("a1b2c3d4e5f6");
        updated.mobile = Some("13800000000".to_string());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![updated.clone()]])
            .into_connection();

        let mut active: users::ActiveModel = sample_user("a1b2c3d4e5f6").into();
        active.mobile = Set(Some("13800000000".to_string()));
        let result = active.update_record(&db).await.unwrap();

        assert_eq!(result, updated);
    }

    #[tokio::test]
    async fn test_save_record_updates_when_key_is_set() {
        let mut updated = sample_user("a1b2c3d4e5f6");
        updated.mobile = Some("13800000000".to_string());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![updated]])
            .into_connection();

        let mut active: users::ActiveModel = sample_user("a1b2c3d4e5f6").into();
        active.mobile = Set(Some("13800000000".to_string()));
        let saved = active.save_record(&db).await.unwrap();

        assert_eq!(
            saved.mobile,
            ActiveValue::Unchanged(Some("13800000000".to_string()))
        );
    }

    #[tokio::test]
    async fn test_delete_record_reports_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let active: users::ActiveModel = sample_user("a1b2c3d4e5f6").into();
        assert_eq!(active.delete_record(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_user("a1b2c3d4e5f6")]])
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();

        let found = users::Entity::get_by_id(&db, "a1b2c3d4e5f6".to_string())
            .await
            .unwrap();
        assert_eq!(found, Some(sample_user("a1b2c3d4e5f6")));

        let missing = users::Entity::get_by_id(&db, "000000000000".to_string())
            .await
            .unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_create_inside_transaction() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_user("a1b2c3d4e5f6")]])
            .into_connection();

        let txn = db.begin().await.unwrap();
        let created = users::ActiveModel {
            id: Set("a1b2c3d4e5f6".to_string()),
            email: Set("a1b2c3d4e5f6@example.com".to_string()),
            password: Set("hashed".to_string()),
            ..Default::default()
        }
        .create(&txn)
        .await
        .unwrap();
        txn.commit().await.unwrap();

        assert_eq!(created.id, "a1b2c3d4e5f6");
        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("COMMIT"));
    }

    #[tokio::test]
    async fn test_transaction_defers_commit_to_caller() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_user("a1b2c3d4e5f6")]])
            .into_connection();

        let txn = db.begin().await.unwrap();
        users::ActiveModel {
            id: Set("a1b2c3d4e5f6".to_string()),
            email: Set("a1b2c3d4e5f6@example.com".to_string()),
            password: Set("hashed".to_string()),
            ..Default::default()
        }
        .create(&txn)
        .await
        .unwrap();
        txn.rollback().await.unwrap();

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let log = format!("{:?}", log);
        assert!(log.contains("INSERT INTO"));
        assert!(log.contains("ROLLBACK"));
        assert!(!log.contains("COMMIT"));
    }
}
