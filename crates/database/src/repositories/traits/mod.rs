//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都应该遵循统一的设计模式，实现以下 trait 约束：
//!
//! ```text
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` / `Sync`：Repository 实例作为共享服务被多个并发请求访问，
//!   异步方法返回的 `Future` 需要跨线程传递
//! - `'static`：Repository 作为应用服务长期运行，不依赖于短期引用
//!
//! 这使得 handler 可以通过泛型参数注入不同实现（生产环境为 PostgreSQL 实现，
//! 测试环境可以注入内存实现），而不需要 trait object。

pub mod project;

// 重新导出
pub use project::ProjectRepositoryTrait;
