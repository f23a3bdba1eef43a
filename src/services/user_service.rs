use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{generate_id, hash_password, normalize_email, validate_mobile, validate_password};
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

pub struct UserService {
    pool: DatabaseConnection,
}

impl UserService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 用户总数
    pub async fn count(&self) -> AppResult<u64> {
        let total = users::Entity::find().count(&self.pool).await?;
        Ok(total)
    }

    /// 按创建时间倒序取一页用户
    pub async fn list(&self, offset: u64, limit: u64) -> AppResult<Vec<UserResponse>> {
        let models = users::Entity::find()
            .order_by_desc(users::Column::CreatedTime)
            .offset(offset)
            .limit(limit)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        let user = users::Entity::get_by_id(&self.pool, id.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(user.into())
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let email = normalize_email(&request.email)?;
        validate_password(&request.password)?;
        if let Some(mobile) = &request.mobile {
            validate_mobile(mobile)?;
        }

        let exists = users::Entity::find()
            .filter(users::Column::Email.eq(email.as_str()))
            .count(&self.pool)
            .await?;
        if exists > 0 {
            return Err(AppError::ValidationError(
                "Email is already registered".to_string(),
            ));
        }

        let user = users::ActiveModel {
            id: Set(generate_id()),
            email: Set(email),
            mobile: Set(request.mobile),
            password: Set(hash_password(&request.password)?),
            created_time: NotSet,
        }
        .create(&self.pool)
        .await?;

        log::info!("Created user {}", user.id);
        Ok(user.into())
    }

    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        if let Some(mobile) = &request.mobile {
            validate_mobile(mobile)?;
        }

        let mut model = users::Entity::get_by_id(&self.pool, id.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?
            .into_active_model();
        model.mobile = Set(request.mobile);
        let updated = model.update_record(&self.pool).await?;

        Ok(updated.into())
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let rows = users::ActiveModel {
            id: Set(id.to_string()),
            ..Default::default()
        }
        .delete_record(&self.pool)
        .await?;

        if rows == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        log::info!("Deleted user {id}");
        Ok(())
    }
}
