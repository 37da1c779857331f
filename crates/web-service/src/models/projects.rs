//! 项目相关的请求/响应模型
//!
//! 对外的JSON字段统一使用camelCase，与既有前端保持一致。

use database::ProjectInfo;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// 创建项目时的九个文本字段
///
/// 从multipart表单中收集，所有字段都必须非空。
/// 两个图片文件不在这里，它们在handler中按出现顺序单独提取。
#[derive(Debug, Default, Clone, Validate, ToSchema)]
pub struct ProjectDraft {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(min = 1))]
    pub client_name: String,

    #[validate(length(min = 1))]
    pub date: String,

    #[validate(length(min = 1))]
    pub live_link: String,

    /// 自由文本分类，写入时不做枚举约束，读取时按精确匹配过滤
    #[validate(length(min = 1))]
    pub category: String,

    #[validate(length(min = 1))]
    pub key_points: String,

    #[validate(length(min = 1))]
    pub key_insights: String,

    #[validate(length(min = 1))]
    pub about_project: String,
}

/// 对外返回的完整项目信息
#[derive(Deserialize, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
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

impl From<ProjectInfo> for ProjectDto {
    fn from(info: ProjectInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            description: info.description,
            client_name: info.client_name,
            date: info.date,
            live_link: info.live_link,
            category: info.category,
            key_points: info.key_points,
            key_insights: info.key_insights,
            about_project: info.about_project,
            image: info.image,
            image_two: info.image_two,
        }
    }
}

/// 分类过滤列表中的项目摘要
///
/// 只保留列表页需要的字段，`description` 截断到前200个词。
#[derive(Deserialize, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub name: String,
    pub category: String,
    pub image: String,
    pub description: String,
}

/// 按 ID 查询时返回单个项目（未命中为null），不带 ID 时返回全量列表
#[derive(Deserialize, Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ProjectFetch {
    One(Option<ProjectDto>),
    Many(Vec<ProjectDto>),
}

/// 分类过滤查询的结果
///
/// 带 ID 时和 [`ProjectFetch::One`] 一致（返回完整项目），
/// 不带 ID 时返回摘要列表。
#[derive(Deserialize, Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum FilteredFetch {
    One(Option<ProjectDto>),
    Summaries(Vec<ProjectSummary>),
}

/// 创建项目的成功响应
#[derive(Deserialize, Debug, Serialize, ToSchema)]
pub struct CreateReply {
    pub success: bool,
    pub message: String,
    pub project: ProjectDto,
}

/// 查询项目的成功响应
#[derive(Deserialize, Debug, Serialize, ToSchema)]
pub struct ProjectReply {
    pub success: bool,
    pub message: String,
    pub project: ProjectFetch,
}

/// 分类过滤查询的成功响应
///
/// 注意：这里的键是 `projects`，与全量查询的 `project` 不同，沿用既有契约。
#[derive(Deserialize, Debug, Serialize, ToSchema)]
pub struct FilteredReply {
    pub success: bool,
    pub message: String,
    pub projects: FilteredFetch,
}

/// 删除项目的响应，命中与未命中都是200
#[derive(Deserialize, Debug, Serialize, ToSchema)]
pub struct DeleteReply {
    pub success: bool,
    pub message: String,
}

/// 查询项目的请求参数
#[derive(Deserialize, Debug, IntoParams)]
pub struct ProjectQuery {
    /// 项目 ID，省略时返回全部项目
    pub id: Option<String>,
}

/// 删除项目的请求参数
#[derive(Deserialize, Debug, IntoParams)]
pub struct DeleteQuery {
    /// 项目 ID
    pub id: String,
}
