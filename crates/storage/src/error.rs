use thiserror::Error;

/// 存储操作错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// HTTP 请求错误（连接失败、超时、响应体解析失败等）
    #[error("上传请求错误: {0}")]
    RequestError(#[from] reqwest::Error),

    /// 上传服务明确拒绝了请求
    #[error("上传服务返回 {status}: {body}")]
    UploadRejected { status: u16, body: String },

    /// 客户端配置错误
    #[error("存储客户端配置错误: {0}")]
    ConfigError(String),
}

impl StorageError {
    /// 创建配置错误
    pub fn config<T: ToString>(msg: T) -> Self {
        Self::ConfigError(msg.to_string())
    }
}
