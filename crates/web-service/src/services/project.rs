//! 项目服务
//!
//! 提供项目作品集相关的业务逻辑操作：创建（含两张图片上传）、查询、
//! 分类过滤查询和删除。

use crate::models::err::AppError;
use crate::models::projects::{FilteredFetch, ProjectDraft, ProjectDto, ProjectFetch, ProjectSummary};
use crate::services::traits::ProjectServiceTrait;
use database::{ProjectCreate, ProjectInfo, ProjectRepositoryTrait};
use storage::{UploadFile, UploadServiceTrait};
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

/// 摘要中description保留的最大词数
pub(crate) const SUMMARY_WORD_LIMIT: usize = 200;

/// 把文本截断到前`limit`个词
///
/// 词按空白字符切分，重新用单个空格连接。原文中的连续空格、
/// 制表符等不会按字节保留，这是截断算法的既定副作用。
/// 不足`limit`个词时全部保留（但同样会被重新连接）。
pub fn truncate_words(text: &str, limit: usize) -> String {
    text.split_whitespace().take(limit).collect::<Vec<_>>().join(" ")
}

/// 把完整项目整形为列表页使用的摘要
fn summarize_project(project: ProjectInfo) -> ProjectSummary {
    ProjectSummary {
        name: project.name,
        category: project.category,
        image: project.image,
        description: truncate_words(&project.description, SUMMARY_WORD_LIMIT),
    }
}

#[derive(Debug, Clone)]
pub struct ProjectService<PR: ProjectRepositoryTrait, US: UploadServiceTrait> {
    repository: PR,
    uploader: US,
}

impl<PR: ProjectRepositoryTrait, US: UploadServiceTrait> ProjectService<PR, US> {
    pub fn new(repository: PR, uploader: US) -> Self {
        Self { repository, uploader }
    }
}

#[async_trait::async_trait]
impl<PR: ProjectRepositoryTrait, US: UploadServiceTrait> ProjectServiceTrait for ProjectService<PR, US> {
    /// 创建新项目
    ///
    /// 处理顺序：校验文本字段 → 上传第一张图片 → 上传第二张图片 → 持久化。
    async fn create_project(
        &self,
        draft: ProjectDraft,
        file: UploadFile,
        file_two: UploadFile,
    ) -> Result<ProjectDto, AppError> {
        debug!("📝 创建项目: {}", draft.name);

        // 九个文本字段必须全部非空，任何一个为空都直接拒绝，
        // 不触发任何上传和持久化调用
        draft.validate().map_err(|_| AppError::Validation)?;

        // 两次上传严格串行，第二次在第一次成功后才开始。
        // 第二次失败时不会持久化，第一张已上传的图片会遗留在存储中，
        // 这里不做补偿删除。
        let image = self.uploader.upload(file).await?;
        let image_two = self.uploader.upload(file_two).await?;

        let project = self
            .repository
            .create_project(ProjectCreate {
                name: draft.name,
                description: draft.description,
                client_name: draft.client_name,
                date: draft.date,
                live_link: draft.live_link,
                category: draft.category,
                key_points: draft.key_points,
                key_insights: draft.key_insights,
                about_project: draft.about_project,
                image,
                image_two,
            })
            .await?;

        debug!("✅ 项目创建成功: {}", project.id);
        Ok(project.into())
    }

    /// 查询项目
    async fn get_project(&self, id: Option<String>) -> Result<ProjectFetch, AppError> {
        match id {
            Some(id) => {
                // 非法的ID和数据库错误一样走查询错误
                let id = Uuid::parse_str(&id).map_err(AppError::query)?;
                let project = self.repository.get_project_by_id(id).await.map_err(AppError::query)?;
                Ok(ProjectFetch::One(project.map(Into::into)))
            }
            None => {
                let projects = self.repository.list_projects().await.map_err(AppError::query)?;
                Ok(ProjectFetch::Many(projects.into_iter().map(Into::into).collect()))
            }
        }
    }

    /// 按分类查询项目
    async fn get_filtered_project(&self, category: &str, id: Option<String>) -> Result<FilteredFetch, AppError> {
        match id {
            Some(id) => {
                // 按 ID 查询时分类过滤不生效，返回完整项目。
                // 即使该项目不属于当前分类也一样返回。
                let id = Uuid::parse_str(&id).map_err(AppError::query)?;
                let project = self.repository.get_project_by_id(id).await.map_err(AppError::query)?;
                Ok(FilteredFetch::One(project.map(Into::into)))
            }
            None => {
                let projects = self
                    .repository
                    .list_projects_by_category(category)
                    .await
                    .map_err(AppError::query)?;
                Ok(FilteredFetch::Summaries(projects.into_iter().map(summarize_project).collect()))
            }
        }
    }

    /// 删除项目
    async fn delete_project(&self, id: String) -> Result<bool, AppError> {
        let id = Uuid::parse_str(&id).map_err(AppError::deletion)?;
        let deleted = self.repository.delete_project(id).await.map_err(AppError::deletion)?;
        Ok(deleted)
    }
}
