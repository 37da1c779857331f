//! 测试辅助模块
//!
//! 提供实现了仓库/上传trait的内存版本，供服务层和路由层测试注入使用。

use crate::models::projects::ProjectDraft;
use crate::services::ProjectService;
use bytes::Bytes;
use database::{DatabaseResult, ProjectCreate, ProjectInfo, ProjectRepositoryTrait};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use storage::{StorageError, StorageResult, UploadFile, UploadServiceTrait};
use uuid::Uuid;

/// 内存版项目仓库
///
/// 内部用`Arc`共享存储，clone一份交给服务后仍然可以在测试中检查状态。
#[derive(Default, Clone)]
pub struct MemoryRepository {
    pub projects: Arc<Mutex<Vec<ProjectInfo>>>,
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for MemoryRepository {
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        let info = ProjectInfo {
            id: Uuid::new_v4(),
            name: project.name,
            description: project.description,
            client_name: project.client_name,
            date: project.date,
            live_link: project.live_link,
            category: project.category,
            key_points: project.key_points,
            key_insights: project.key_insights,
            about_project: project.about_project,
            image: project.image,
            image_two: project.image_two,
        };
        self.projects.lock().unwrap().push(info.clone());
        Ok(info)
    }

    async fn get_project_by_id(&self, id: Uuid) -> DatabaseResult<Option<ProjectInfo>> {
        Ok(self.projects.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn list_projects_by_category(&self, category: &str) -> DatabaseResult<Vec<ProjectInfo>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn delete_project(&self, id: Uuid) -> DatabaseResult<bool> {
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() < before)
    }
}

/// 内存版上传服务
///
/// 记录调用次数，可以配置在第N次调用时失败。
#[derive(Default, Clone)]
pub struct MockUploader {
    pub calls: Arc<AtomicUsize>,
    fail_on_call: Option<usize>,
}

impl MockUploader {
    /// 创建一个在第`call`次调用（从1开始）时失败的上传服务
    pub fn failing_on_call(call: usize) -> Self {
        Self {
            calls: Arc::default(),
            fail_on_call: Some(call),
        }
    }
}

#[async_trait::async_trait]
impl UploadServiceTrait for MockUploader {
    async fn upload(&self, file: UploadFile) -> StorageResult<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_call == Some(call) {
            return Err(StorageError::config("storage offline"));
        }
        Ok(format!("https://cdn.example.com/{}-{}", call, file.file_name))
    }
}

/// 构造一个注入了内存实现的项目服务，同时返回可检查的仓库和上传服务句柄
pub fn service_with_mocks() -> (
    ProjectService<MemoryRepository, MockUploader>,
    MemoryRepository,
    MockUploader,
) {
    let repo = MemoryRepository::default();
    let uploader = MockUploader::default();
    let service = ProjectService::new(repo.clone(), uploader.clone());
    (service, repo, uploader)
}

/// 九个文本字段全部填充的创建参数
pub fn sample_draft(category: &str) -> ProjectDraft {
    ProjectDraft {
        name: "Portfolio Site".to_string(),
        description: "A portfolio website for a design studio".to_string(),
        client_name: "Acme Studio".to_string(),
        date: "2024-06-01".to_string(),
        live_link: "https://acme.example.com".to_string(),
        category: category.to_string(),
        key_points: "Fast, responsive, accessible".to_string(),
        key_insights: "Mobile traffic dominates".to_string(),
        about_project: "Built over six weeks with weekly demos".to_string(),
    }
}

/// 一份待上传的图片文件
pub fn sample_file(name: &str) -> UploadFile {
    UploadFile {
        file_name: name.to_string(),
        content_type: "image/png".to_string(),
        bytes: Bytes::from_static(b"fake image bytes"),
    }
}
