//! Web层数据模型
//!
//! 定义对外的请求/响应结构体和错误类型

pub mod common;
pub mod err;
pub mod projects;
