//! 项目数据库模型
//!
//! 定义项目作品集相关的数据库模型结构体

use uuid::Uuid;

/// 项目信息结构体
///
/// `id` 由数据库在插入时生成，之后不可变更。
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectInfo {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub client_name: String,
    pub date: String,
    pub live_link: String,
    pub category: String,
    pub key_points: String,
    pub key_insights: String,
    pub about_project: String,
    pub image: String,
    pub image_two: String,
}

/// 项目创建参数
///
/// `image` 和 `image_two` 是上传服务返回的存储地址，在持久化之前由服务层填充。
#[derive(Debug, Clone)]
pub struct ProjectCreate {
    pub name: String,
    pub description: String,
    pub client_name: String,
    pub date: String,
    pub live_link: String,
    pub category: String,
    pub key_points: String,
    pub key_insights: String,
    pub about_project: String,
    pub image: String,
    pub image_two: String,
}
