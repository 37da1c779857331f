//! 对象存储模块
//!
//! 封装外部二进制对象存储服务的上传能力。
//!
//! 上传服务本身不属于这个系统，这里只消费它的契约：
//! 提交一份原始文件内容，换回一个稳定的存储地址字符串。

pub mod client;
pub mod error;

pub use client::{UploadClient, UploadFile, UploadServiceTrait};
pub use error::StorageError;

/// 存储操作结果类型
pub type StorageResult<T> = Result<T, StorageError>;
