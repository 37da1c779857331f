//! 项目相关接口
//!
//! 每个handler都通过泛型参数访问 [`ProjectServiceTrait`]，
//! 返回值统一是 `Result<Json<T>, AppError>`：
//!
//! - [`Json`] 会对内部类型进行json序列化，保证返回的数据是一个合法的json字符串
//! - [`AppError`] 是错误时返回的Error类型，会根据错误分类转换为400/500响应
//!
//! 注意：**强烈建议**在handler上开启 [`axum::debug_handler`] 宏排查签名问题，
//! 否则错误提示信息可能不是很明确。

use crate::models::err::AppError;
use crate::models::projects::{
    CreateReply, DeleteQuery, DeleteReply, FilteredReply, ProjectDraft, ProjectQuery, ProjectReply,
};
use crate::services::ProjectServiceTrait;
use crate::AppState;
use axum::extract::{Multipart, Query, State};
use axum::Json;
use storage::UploadFile;
use tracing::debug;

/// 分类过滤接口绑定的两个分类
pub const MOBILE_APP_CATEGORY: &str = "Mobile App";
pub const WEB_APP_CATEGORY: &str = "Web App";

// 响应文案沿用既有契约，前端按原样展示。
// "Succcessfully"的拼写也是契约的一部分，不要修正。
const SAVED_MESSAGE: &str = "Saved Succcessfully";
const FETCHED_MESSAGE: &str = "Fetched Successfully";
const DELETED_MESSAGE: &str = "Deleted Successfully";
const DELETE_MISS_MESSAGE: &str = "Didn't find a matching query";

/// 从multipart表单中读出九个文本字段和按出现顺序排列的文件
///
/// 文件按位置识别（带filename的part），与字段名无关。
/// 格式损坏的multipart和文本字段缺失走同一个验证错误。
async fn read_create_request(mut multipart: Multipart) -> Result<(ProjectDraft, Vec<UploadFile>), AppError> {
    let mut draft = ProjectDraft::default();
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|_| AppError::Validation)? {
        if field.file_name().is_some() {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field.bytes().await.map_err(|_| AppError::Validation)?;
            files.push(UploadFile {
                file_name,
                content_type,
                bytes,
            });
            continue;
        }

        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.map_err(|_| AppError::Validation)?;
        match name.as_str() {
            "name" => draft.name = value,
            "description" => draft.description = value,
            "clientName" => draft.client_name = value,
            "date" => draft.date = value,
            "liveLink" => draft.live_link = value,
            "category" => draft.category = value,
            "keyPoints" => draft.key_points = value,
            "keyInsights" => draft.key_insights = value,
            "aboutProject" => draft.about_project = value,
            // 未知字段直接忽略
            _ => {}
        }
    }

    Ok((draft, files))
}

/// 创建项目
///
/// multipart表单提交：九个文本字段加两个图片文件。
/// 文本字段为空、文件不足两个都会返回400（文件必须提交是这里的显式决定，
/// 不允许图片字段为空的项目入库）。
#[utoipa::path(post,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Create project result", body = CreateReply),
        (status = 400, description = "Empty fields", body = crate::models::common::ErrorReply)
    ),
)]
pub async fn create_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    multipart: Multipart,
) -> Result<Json<CreateReply>, AppError> {
    let (draft, files) = read_create_request(multipart).await?;

    debug!("📝 创建项目请求: {} (附带 {} 个文件)", draft.name, files.len());

    // 两个文件按在请求中的出现顺序取：第一个对应image，第二个对应imageTwo
    let mut files = files.into_iter();
    let (file, file_two) = match (files.next(), files.next()) {
        (Some(file), Some(file_two)) => (file, file_two),
        _ => return Err(AppError::Validation),
    };

    let project = state.project_service.create_project(draft, file, file_two).await?;

    Ok(Json(CreateReply {
        success: true,
        message: SAVED_MESSAGE.to_string(),
        project,
    }))
}

/// 查询项目
///
/// 带`id`参数时返回单个项目（未命中为null），省略时返回全部项目。
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    params(ProjectQuery),
    responses(
        (status = 200, description = "Fetch result", body = ProjectReply)
    ),
)]
pub async fn get_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<ProjectReply>, AppError> {
    debug!("🔍 查询项目: {:?}", query.id);

    let project = state.project_service.get_project(query.id).await?;

    Ok(Json(ProjectReply {
        success: true,
        message: FETCHED_MESSAGE.to_string(),
        project,
    }))
}

/// 查询 Mobile App 分类的项目
///
/// 不带`id`时返回该分类下的摘要列表（description截断到前200个词）。
/// 带`id`时与 [`get_project`] 的单个查询一致，分类过滤不生效。
#[utoipa::path(get,
    path = "/projects/mobile-app",
    tag = "projects",
    params(ProjectQuery),
    responses(
        (status = 200, description = "Fetch result", body = FilteredReply)
    ),
)]
pub async fn get_mobile_app_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<FilteredReply>, AppError> {
    debug!("🔍 查询 Mobile App 项目: {:?}", query.id);

    let projects = state
        .project_service
        .get_filtered_project(MOBILE_APP_CATEGORY, query.id)
        .await?;

    Ok(Json(FilteredReply {
        success: true,
        message: FETCHED_MESSAGE.to_string(),
        projects,
    }))
}

/// 查询 Web App 分类的项目
///
/// 行为与 [`get_mobile_app_project`] 相同，仅分类不同。
#[utoipa::path(get,
    path = "/projects/web-app",
    tag = "projects",
    params(ProjectQuery),
    responses(
        (status = 200, description = "Fetch result", body = FilteredReply)
    ),
)]
pub async fn get_web_app_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<FilteredReply>, AppError> {
    debug!("🔍 查询 Web App 项目: {:?}", query.id);

    let projects = state
        .project_service
        .get_filtered_project(WEB_APP_CATEGORY, query.id)
        .await?;

    Ok(Json(FilteredReply {
        success: true,
        message: FETCHED_MESSAGE.to_string(),
        projects,
    }))
}

/// 删除指定的项目
///
/// 命中与未命中都返回200，用`success`区分。
#[utoipa::path(delete,
    path = "/projects",
    tag = "projects",
    params(DeleteQuery),
    responses(
        (status = 200, description = "Delete result", body = DeleteReply)
    ),
)]
pub async fn delete_project<PS: ProjectServiceTrait>(
    State(state): State<AppState<PS>>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<DeleteReply>, AppError> {
    debug!("🗑️ 删除项目: {}", query.id);

    let deleted = state.project_service.delete_project(query.id).await?;

    let message = if deleted { DELETED_MESSAGE } else { DELETE_MISS_MESSAGE };

    Ok(Json(DeleteReply {
        success: deleted,
        message: message.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_app_router;
    use crate::test_support::{service_with_mocks, MemoryRepository};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use database::ProjectInfo;
    use serde_json::Value;
    use std::sync::Arc;
    use uuid::Uuid;

    const BOUNDARY: &str = "XBOUNDARYX";

    fn test_server() -> (TestServer, MemoryRepository) {
        let (service, repo, _uploader) = service_with_mocks();
        let state = AppState {
            project_service: Arc::new(service),
        };
        let server = TestServer::new(create_app_router(state)).unwrap();
        (server, repo)
    }

    /// 手工拼一个multipart请求体
    fn multipart_body(fields: &[(&str, &str)], file_count: usize) -> Vec<u8> {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        for i in 0..file_count {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"shot-{i}.png\"\r\nContent-Type: image/png\r\n\r\nfake image bytes\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body.into_bytes()
    }

    fn all_fields() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Portfolio Site"),
            ("description", "A portfolio website for a design studio"),
            ("clientName", "Acme Studio"),
            ("date", "2024-06-01"),
            ("liveLink", "https://acme.example.com"),
            ("category", "Web App"),
            ("keyPoints", "Fast, responsive, accessible"),
            ("keyInsights", "Mobile traffic dominates"),
            ("aboutProject", "Built over six weeks with weekly demos"),
        ]
    }

    fn seeded_project(category: &str, description: &str) -> ProjectInfo {
        ProjectInfo {
            id: Uuid::new_v4(),
            name: "Seeded".to_string(),
            description: description.to_string(),
            client_name: "Acme Studio".to_string(),
            date: "2024-06-01".to_string(),
            live_link: "https://acme.example.com".to_string(),
            category: category.to_string(),
            key_points: "k".to_string(),
            key_insights: "i".to_string(),
            about_project: "a".to_string(),
            image: "https://cdn.example.com/seeded.png".to_string(),
            image_two: "https://cdn.example.com/seeded-two.png".to_string(),
        }
    }

    async fn post_create(server: &TestServer, fields: &[(&str, &str)], file_count: usize) -> axum_test::TestResponse {
        server
            .post("/api/v1/projects")
            .content_type(&format!("multipart/form-data; boundary={BOUNDARY}"))
            .bytes(multipart_body(fields, file_count).into())
            .await
    }

    #[tokio::test]
    async fn create_project_saves_and_returns_the_record() {
        let (server, repo) = test_server();

        let response = post_create(&server, &all_fields(), 2).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let json: Value = response.json();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Saved Succcessfully");
        assert_eq!(json["project"]["image"], "https://cdn.example.com/1-shot-0.png");
        assert_eq!(json["project"]["imageTwo"], "https://cdn.example.com/2-shot-1.png");
        assert_eq!(repo.projects.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_project_with_missing_field_returns_empty_fields() {
        let (server, repo) = test_server();

        let mut fields = all_fields();
        fields.retain(|(name, _)| *name != "clientName");

        let response = post_create(&server, &fields, 2).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let json: Value = response.json();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Empty Fields");
        assert!(repo.projects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_project_with_one_file_is_rejected() {
        let (server, repo) = test_server();

        let response = post_create(&server, &all_fields(), 1).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(repo.projects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_projects_returns_the_full_list() {
        let (server, repo) = test_server();
        repo.projects.lock().unwrap().push(seeded_project("Web App", "short description"));

        let response = server.get("/api/v1/projects").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let json: Value = response.json();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Fetched Successfully");
        assert_eq!(json["project"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_project_by_unknown_id_returns_null() {
        let (server, _repo) = test_server();

        let response = server
            .get("/api/v1/projects")
            .add_query_param("id", Uuid::new_v4().to_string())
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let json: Value = response.json();
        assert_eq!(json["success"], true);
        assert!(json["project"].is_null());
    }

    #[tokio::test]
    async fn get_project_with_malformed_id_is_a_server_error() {
        let (server, _repo) = test_server();

        let response = server.get("/api/v1/projects").add_query_param("id", "not-a-uuid").await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: Value = response.json();
        assert_eq!(json["success"], false);
        assert!(json["message"]
            .as_str()
            .unwrap()
            .starts_with("There is some error getting projects from backend for ref."));
    }

    #[tokio::test]
    async fn mobile_app_listing_returns_truncated_summaries() {
        let (server, repo) = test_server();

        let long_description: Vec<String> = (0..250).map(|i| format!("w{i}")).collect();
        {
            let mut projects = repo.projects.lock().unwrap();
            projects.push(seeded_project("Mobile App", &long_description.join(" ")));
            projects.push(seeded_project("Web App", "not in this listing"));
        }

        let response = server.get("/api/v1/projects/mobile-app").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let json: Value = response.json();
        let summaries = json["projects"].as_array().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0]["category"], "Mobile App");
        assert_eq!(
            summaries[0]["description"].as_str().unwrap(),
            long_description[..200].join(" ")
        );
        // 摘要不携带完整项目的其余字段
        assert!(summaries[0].get("aboutProject").is_none());
    }

    #[tokio::test]
    async fn web_app_listing_by_id_returns_the_full_project() {
        let (server, repo) = test_server();

        let project = seeded_project("Mobile App", "wrong category on purpose");
        let id = project.id;
        repo.projects.lock().unwrap().push(project);

        let response = server
            .get("/api/v1/projects/web-app")
            .add_query_param("id", id.to_string())
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let json: Value = response.json();
        // 按ID查询时分类过滤不生效
        assert_eq!(json["projects"]["id"], id.to_string());
        assert_eq!(json["projects"]["category"], "Mobile App");
    }

    #[tokio::test]
    async fn delete_project_reports_found_and_not_found() {
        let (server, repo) = test_server();

        let project = seeded_project("Web App", "to be deleted");
        let id = project.id;
        repo.projects.lock().unwrap().push(project);

        let response = server
            .delete("/api/v1/projects")
            .add_query_param("id", id.to_string())
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let json: Value = response.json();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Deleted Successfully");

        let response = server
            .delete("/api/v1/projects")
            .add_query_param("id", id.to_string())
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let json: Value = response.json();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Didn't find a matching query");
    }
}
