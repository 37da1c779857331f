//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use crate::models::err::AppError;
use crate::models::projects::{FilteredFetch, ProjectDraft, ProjectDto, ProjectFetch};
use storage::UploadFile;

/// 项目服务 trait 定义
///
/// 定义了项目相关的业务逻辑接口，作为应用层的端口(Port)。
/// 每个方法对应一次请求范围内的处理流程：验证输入 → 调用一到两个外部服务 →
/// 把结果整形为响应数据。服务自身不持有任何可变状态。
///
/// 该 trait 作为业务逻辑的抽象接口，具体实现由 [`ProjectService`](crate::services::ProjectService) 提供
#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync + 'static {
    /// 创建新项目
    ///
    /// 先校验九个文本字段，然后按顺序上传两张图片，最后持久化。
    /// 任何一步失败都不会继续后面的步骤。
    ///
    /// # 参数
    /// - `draft`: 九个文本字段
    /// - `file`: 第一张图片，对应 `image`
    /// - `file_two`: 第二张图片，对应 `imageTwo`
    ///
    /// # 返回值
    /// 返回持久化后的完整项目信息（包含分配的 ID）
    async fn create_project(
        &self,
        draft: ProjectDraft,
        file: UploadFile,
        file_two: UploadFile,
    ) -> Result<ProjectDto, AppError>;

    /// 查询项目
    ///
    /// # 参数
    /// - `id`: 可选的项目 ID。给定时按 ID 查询单个项目（未命中返回null），
    ///   省略时返回全部项目
    async fn get_project(&self, id: Option<String>) -> Result<ProjectFetch, AppError>;

    /// 按分类查询项目
    ///
    /// # 参数
    /// - `category`: 分类名称，精确匹配
    /// - `id`: 可选的项目 ID。给定时行为与 [`get_project`](Self::get_project)
    ///   完全一致，分类过滤不生效；省略时返回该分类下的项目摘要列表
    async fn get_filtered_project(&self, category: &str, id: Option<String>) -> Result<FilteredFetch, AppError>;

    /// 删除项目
    ///
    /// # 参数
    /// - `id`: 项目 ID
    ///
    /// # 返回值
    /// 删除了一条记录返回 `true`，没有匹配记录返回 `false`（不是错误）
    async fn delete_project(&self, id: String) -> Result<bool, AppError>;
}
