//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::projects::__path_create_project;
use crate::routes::projects::__path_delete_project;
use crate::routes::projects::__path_get_mobile_app_project;
use crate::routes::projects::__path_get_project;
use crate::routes::projects::__path_get_web_app_project;
use crate::routes::projects::{
    create_project, delete_project, get_mobile_app_project, get_project, get_web_app_project,
};
use crate::{services::ProjectServiceTrait, AppState};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod projects;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。存放项目服务实例。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，同一个宏调用里的handler必须属于同一个path，
/// 不同path需要拆开调用。
fn routers<PS: ProjectServiceTrait>(state: AppState<PS>) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_project, create_project, delete_project))
        .routes(routes!(get_mobile_app_project))
        .routes(routes!(get_web_app_project))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router<PS: ProjectServiceTrait>(shared_state: AppState<PS>) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "projects", description = r#"
项目作品集后端，覆盖场景：

- 项目创建（含两张图片上传）
- 项目查询与分类过滤查询
- 项目删除
- OpenAPI文档
            "#)
        ),
    )]
    struct ApiDoc;

    // 使用`utoipa_axum`提供的OpenApiRouter来创建路由。
    // 同时传递共享状态数据到路由中供使用。
    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router
        .merge(Scalar::with_url("/docs", api))
        .route("/", get(root))
        .route("/health", get(health_check))
}

#[instrument]
async fn root() -> Json<Value> {
    Json(json!({
        "service": "web-service",
        "status": "running",
    }))
}

#[instrument]
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "web-service"
    }))
}
