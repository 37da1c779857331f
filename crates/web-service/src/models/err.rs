use crate::models::common::ErrorReply;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DatabaseError;
use storage::StorageError;
use thiserror::Error;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
///
/// 每个操作把外部调用的失败恰好转换为一个错误响应，不重试也不吞掉。
/// 5xx 的错误信息中会嵌入底层原因，仅用于诊断。
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误都是用户参数不正确导致的，固定转换为400和固定文案
    #[error("Empty Fields")]
    Validation,

    /// 图片上传失败
    #[error("There is some error uploading your image to storage for ref. {0}")]
    Upload(#[from] StorageError),

    /// 项目保存失败
    #[error("There is some error saving your project with backend for ref. {0}")]
    Persistence(#[from] DatabaseError),

    /// 项目查询失败（包含非法的项目ID）
    #[error("There is some error getting projects from backend for ref. {0}")]
    Query(String),

    /// 项目删除失败（包含非法的项目ID）
    #[error("Error While deleting for ref.{0}")]
    Deletion(String),
}

impl AppError {
    /// 创建查询错误
    pub fn query<T: ToString>(cause: T) -> Self {
        Self::Query(cause.to_string())
    }

    /// 创建删除错误
    pub fn deletion<T: ToString>(cause: T) -> Self {
        Self::Deletion(cause.to_string())
    }
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorReply {
            success: false,
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
