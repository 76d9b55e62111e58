//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用装配
//! - 加载设置、创建 HTTP 客户端和入围记录
//! - 把取消信号交给爬取器
//!
//! ### `crawler` - 排行榜爬取器
//! - 从起始页倒序遍历到第 0 页（Vec<Page>）
//! - 每页读取当前设置快照
//! - 页级错误恢复、凭证失效终止
//! - 输出全局统计信息
//!
//! ### `page_processor` - 单页处理器
//! - 遍历单页的经理和职员（Vec<CandidateRef>）
//! - 角色筛选、提前结束本页
//!
//! ## 层次关系
//!
//! ```text
//! crawler (处理所有页)
//!     ↓
//! page_processor (处理一页的候选人)
//!     ↓
//! workflow::CandidateFlow (处理单个职员)
//!     ↓
//! services (能力层：解析 / 评估 / 记录)
//!     ↓
//! clients + infrastructure (HTTP、限速、设置、取消)
//! ```

pub mod app;
pub mod crawler;
pub mod page_processor;

pub use app::App;
pub use crawler::{CrawlSummary, Crawler};
pub use page_processor::{process_page, PageEnd, PageStats};
