//! 程序配置
//!
//! 所有配置都通过环境变量注入，本地开发时可以放在`.env`文件中。

use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::sync::Arc;

/// 对象存储服务配置
pub struct StorageConfig {
    /// 上传服务的基础地址，例如 `http://storage-gateway:9000`
    pub upload_service_url: String,

    /// 单次上传请求的超时时间（秒）
    ///
    /// 可通过环境变量 `UPLOAD_TIMEOUT_SECS` 来调整
    pub upload_timeout_secs: u64,
}

/// 程序配置
pub struct AppConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// web服务监听地址
    ///
    /// 可通过环境变量 `LISTEN_ADDR` 来调整，默认 `0.0.0.0:8080`
    pub listen_addr: String,

    /// 对象存储服务配置
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        let _ = dotenvy::dotenv();

        // 读取数据库地址信息（仅支持postgresql）
        let db_url = std::env::var("DATABASE_URL")
            .context("Can not load DATABASE_URL in environment")
            .suggestion("设置 DATABASE_URL 环境变量")?;

        // 图片上传服务地址
        let upload_url = std::env::var("UPLOAD_SERVICE_URL")
            .context("Can not load UPLOAD_SERVICE_URL in environment")
            .suggestion("设置 UPLOAD_SERVICE_URL 环境变量")?;

        let config = AppConfig {
            postgresql_conn_str: db_url,
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            storage: StorageConfig {
                upload_service_url: upload_url,
                upload_timeout_secs: std::env::var("UPLOAD_TIMEOUT_SECS")
                    .map_or(30, |s| s.parse().unwrap_or(30)),
            },
        };
        Ok(Arc::new(config))
    }
}
