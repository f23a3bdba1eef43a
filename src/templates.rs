//! HTML 模板 (askama，编译期检查)

use askama::Template;

use crate::error::AppResult;
use crate::models::UserResponse;
use crate::utils::Pager;

/// 分页控件，渲染结果可直接嵌入其它模板 (`|safe`)
#[derive(Template)]
#[template(path = "pager.html")]
pub struct PagerTemplate<'a> {
    pub pager: &'a Pager,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}

impl<'a> PagerTemplate<'a> {
    pub fn new(pager: &'a Pager) -> Self {
        Self {
            pager,
            prev_url: pager.prev_page().map(|page| pager.url_for(page)),
            next_url: pager.next_page().map(|page| pager.url_for(page)),
        }
    }
}

impl Pager {
    pub fn render(&self) -> AppResult<String> {
        Ok(PagerTemplate::new(self).render()?)
    }
}

pub struct UserRow {
    pub id: String,
    pub email: String,
    pub mobile: String,
    pub created_time: String,
}

impl From<UserResponse> for UserRow {
    fn from(user: UserResponse) -> Self {
        Self {
            id: user.id,
            email: user.email,
            mobile: user.mobile.unwrap_or_default(),
            created_time: user.created_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "user.html")]
pub struct UserListTemplate {
    pub users: Vec<UserRow>,
    pub total: u64,
    pub pager_html: String,
}

impl UserListTemplate {
    pub fn new(users: Vec<UserResponse>, pager: &Pager) -> AppResult<Self> {
        Ok(Self {
            users: users.into_iter().map(UserRow::from).collect(),
            total: pager.total_count().unwrap_or_default(),
            pager_html: pager.render()?,
        })
    }
}
