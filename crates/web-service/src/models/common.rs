use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 统一的错误响应体
///
/// 所有失败响应（4xx/5xx）都使用这个形状，`message` 仅用于日志和展示，
/// 调用方不应该对其内容做程序化解析。
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ErrorReply {
    pub success: bool,
    pub message: String,
}
