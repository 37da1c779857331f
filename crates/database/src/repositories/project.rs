//! 项目仓库
//!
//! 负责项目相关的数据库操作

use crate::models::project::{ProjectCreate, ProjectInfo};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

/// 项目查询时使用的统一列清单
const PROJECT_COLUMNS: &str = "id, name, description, client_name, date, live_link, category, \
                               key_points, key_insights, about_project, image, image_two";

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    /// 创建新项目
    ///
    /// 根据服务层传入的参数插入项目记录，`id` 由数据库生成并随结果返回。
    ///
    /// # 参数
    /// - `project`: 项目创建信息（图片地址已由服务层填充）
    ///
    /// # 返回值
    /// 返回创建的项目信息
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        debug!("📝 创建项目: {}", project.name);

        // 这里使用sqlx的运行时查询接口而不是query!宏，
        // 避免构建时依赖一个可访问的数据库实例
        let sql = format!(
            r#"
            INSERT INTO projects (name, description, client_name, date, live_link, category,
                                  key_points, key_insights, about_project, image, image_two)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {PROJECT_COLUMNS};
            "#
        );

        let project_info = sqlx::query_as::<_, ProjectInfo>(&sql)
            .bind(&project.name)
            .bind(&project.description)
            .bind(&project.client_name)
            .bind(&project.date)
            .bind(&project.live_link)
            .bind(&project.category)
            .bind(&project.key_points)
            .bind(&project.key_insights)
            .bind(&project.about_project)
            .bind(&project.image)
            .bind(&project.image_two)
            .fetch_one(&self.pool)
            .await?;

        debug!("✅ 项目创建成功: {}", project_info.id);
        Ok(project_info)
    }

    /// 根据 ID 获取项目信息
    ///
    /// # 参数
    /// - `id`: 项目 ID
    ///
    /// # 返回值
    /// 命中时返回项目信息，未命中时返回 `None`
    async fn get_project_by_id(&self, id: Uuid) -> DatabaseResult<Option<ProjectInfo>> {
        debug!("🔍 根据 ID 获取项目: {}", id);

        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1 LIMIT 1");

        let project = sqlx::query_as::<_, ProjectInfo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        debug!("✅ 项目查询完成 - 命中: {}", project.is_some());
        Ok(project)
    }

    /// 获取全部项目
    ///
    /// 不做分页，作品集的数据量级由录入方控制
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 获取全部项目");

        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects");

        let projects = sqlx::query_as::<_, ProjectInfo>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!("✅ 获取完成 - 共 {} 个项目", projects.len());
        Ok(projects)
    }

    /// 按分类获取项目
    ///
    /// # 参数
    /// - `category`: 分类名称，精确匹配（例如 "Mobile App"）
    async fn list_projects_by_category(&self, category: &str) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 按分类获取项目: {}", category);

        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE category = $1");

        let projects = sqlx::query_as::<_, ProjectInfo>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;

        debug!("✅ 获取完成 - 分类 {} 下共 {} 个项目", category, projects.len());
        Ok(projects)
    }

    /// 删除项目
    ///
    /// # 参数
    /// - `id`: 项目 ID
    ///
    /// # 返回值
    /// 删除了一条记录返回 `true`，没有匹配记录返回 `false`
    async fn delete_project(&self, id: Uuid) -> DatabaseResult<bool> {
        debug!("🗑️ 删除项目: {}", id);

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        debug!("✅ 删除完成 - 实际删除: {}", deleted);
        Ok(deleted)
    }
}
