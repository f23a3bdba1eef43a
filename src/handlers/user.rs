use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, http::header::ContentType, web};

use crate::config::PagerConfig;
use crate::error::AppResult;
use crate::models::*;
use crate::services::UserService;
use crate::templates::UserListTemplate;
use crate::utils::Pager;
use askama::Template;

/// 统计总数并取出当前页的用户
async fn load_page(
    user_service: &UserService,
    pager_config: &PagerConfig,
    req: &HttpRequest,
) -> AppResult<(Vec<UserResponse>, Pager)> {
    let total = user_service.count().await?;
    let pager = Pager::from_request(req, Some(total), pager_config.per_page);
    let users = user_service.list(pager.offset(), pager.per_page()).await?;
    log::debug!(
        "Loaded user page {}/{} ({} of {} users)",
        pager.current_page(),
        pager.pages(),
        users.len(),
        total
    );
    Ok((users, pager))
}

async fn render_user_list(
    user_service: &UserService,
    pager_config: &PagerConfig,
    req: &HttpRequest,
) -> AppResult<String> {
    let (users, pager) = load_page(user_service, pager_config, req).await?;
    let page = UserListTemplate::new(users, &pager)?;
    Ok(page.render()?)
}

/// 用户列表页 (HTML)
pub async fn list_users(
    user_service: web::Data<UserService>,
    pager_config: web::Data<PagerConfig>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    match render_user_list(&user_service, &pager_config, &req).await {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/user.json",
    tag = "user",
    params(
        ("page" = Option<String>, Query, description = "页码，无效值按第 1 页处理")
    ),
    responses(
        (status = 200, description = "获取用户列表成功", body = UserPage)
    )
)]
pub async fn list_users_json(
    user_service: web::Data<UserService>,
    pager_config: web::Data<PagerConfig>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    match load_page(&user_service, &pager_config, &req).await {
        Ok((users, pager)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PaginatedResponse::new(users, &pager),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "创建用户成功", body = UserResponse),
        (status = 400, description = "请求参数错误")
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    match user_service.create_user(request.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            user,
            "User created",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "user",
    params(
        ("id" = String, Path, description = "用户ID")
    ),
    responses(
        (status = 200, description = "获取用户成功", body = UserResponse),
        (status = 404, description = "用户不存在")
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match user_service.get_user(&path.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(user))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "user",
    request_body = UpdateUserRequest,
    params(
        ("id" = String, Path, description = "用户ID")
    ),
    responses(
        (status = 200, description = "更新用户成功", body = UserResponse),
        (status = 404, description = "用户不存在")
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse> {
    match user_service
        .update_user(&path.into_inner(), request.into_inner())
        .await
    {
        Ok(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(user))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "user",
    params(
        ("id" = String, Path, description = "用户ID")
    ),
    responses(
        (status = 204, description = "删除用户成功"),
        (status = 404, description = "用户不存在")
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match user_service.delete_user(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/user", web::get().to(list_users))
        .route("/user", web::post().to(create_user))
        .route("/user.json", web::get().to(list_users_json))
        .route("/user/{id}", web::get().to(get_user))
        .route("/user/{id}", web::put().to(update_user))
        .route("/user/{id}", web::delete().to(delete_user));
}
