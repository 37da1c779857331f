//! 上传服务客户端
//!
//! 上传服务的契约很小：`POST {base}/files` 提交一份文件的原始字节，
//! 成功时返回 `{"location": "..."}`，其中 location 是可直接引用的存储地址。

use crate::{StorageError, StorageResult};
use bytes::Bytes;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use shared_lib::models::config::StorageConfig;
use std::time::Duration;
use tracing::debug;

/// 待上传的文件内容
///
/// 从multipart请求中提取出来的一份文件，已完整读入内存。
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// 原始文件名
    pub file_name: String,
    /// MIME类型，未知时为 `application/octet-stream`
    pub content_type: String,
    /// 文件内容
    pub bytes: Bytes,
}

/// 上传服务trait定义
///
/// 作为服务层的抽象接口，生产环境由 [`UploadClient`] 实现，
/// 测试环境可以注入内存实现。
#[async_trait::async_trait]
pub trait UploadServiceTrait: Send + Sync + 'static {
    /// 上传一份文件
    ///
    /// # 参数
    /// - `file`: 文件内容
    ///
    /// # 返回值
    /// 返回上传服务分配的存储地址字符串
    async fn upload(&self, file: UploadFile) -> StorageResult<String>;
}

/// 上传服务响应体
#[derive(Debug, Deserialize)]
struct UploadReply {
    location: String,
}

/// 基于HTTP的上传服务客户端
#[derive(Clone)]
pub struct UploadClient {
    http_client: HttpClient,
    base_url: String,
}

impl std::fmt::Debug for UploadClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadClient").field("base_url", &self.base_url).finish()
    }
}

impl UploadClient {
    /// 根据配置创建上传客户端
    ///
    /// 超时时间作用于单次上传请求整体，包含连接与响应读取。
    pub fn new(config: &StorageConfig) -> StorageResult<Self> {
        if config.upload_service_url.is_empty() {
            return Err(StorageError::config("upload_service_url 不能为空"));
        }

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.upload_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.upload_service_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl UploadServiceTrait for UploadClient {
    /// 上传一份文件
    ///
    /// 非2xx响应会连同响应体一起转换为 [`StorageError::UploadRejected`]，
    /// 方便上层把底层原因带进错误信息。
    async fn upload(&self, file: UploadFile) -> StorageResult<String> {
        debug!("📤 上传文件: {} ({} bytes)", file.file_name, file.bytes.len());

        let response = self
            .http_client
            .post(format!("{}/files", self.base_url))
            .header("content-type", &file.content_type)
            .header("x-file-name", &file.file_name)
            .body(file.bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::UploadRejected {
                status: status.as_u16(),
                body,
            });
        }

        let reply: UploadReply = response.json().await?;

        debug!("✅ 上传完成: {}", reply.location);
        Ok(reply.location)
    }
}
