//! 项目仓库 trait 定义
//!
//! 定义项目数据库操作的抽象接口

use crate::models::project::{ProjectCreate, ProjectInfo};
use crate::DatabaseResult;
use uuid::Uuid;

/// 项目仓库trait定义
///
/// 定义了项目相关的数据库操作接口，支持：
/// - 项目创建
/// - 项目查询（按 ID / 全量 / 按分类）
/// - 项目删除
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 项目创建信息
    ///
    /// # 返回值
    /// 返回创建的项目信息（包含数据库分配的 ID）
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo>;

    /// 根据 ID 获取项目信息
    ///
    /// # 参数
    /// - `id`: 项目 ID
    ///
    /// # 返回值
    /// 命中时返回项目信息，未命中时返回 `None`（不是错误）
    async fn get_project_by_id(&self, id: Uuid) -> DatabaseResult<Option<ProjectInfo>>;

    /// 获取全部项目
    ///
    /// # 返回值
    /// 返回所有项目，顺序由数据库默认决定
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 按分类获取项目
    ///
    /// # 参数
    /// - `category`: 分类名称，精确匹配
    ///
    /// # 返回值
    /// 返回分类完全一致的项目列表
    async fn list_projects_by_category(&self, category: &str) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 删除项目
    ///
    /// # 参数
    /// - `id`: 项目 ID
    ///
    /// # 返回值
    /// 删除了一条记录返回 `true`，没有匹配记录返回 `false`
    async fn delete_project(&self, id: Uuid) -> DatabaseResult<bool>;
}
