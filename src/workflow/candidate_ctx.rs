//! 候选人处理上下文
//!
//! 封装"我正在处理哪一页、哪位经理名下的哪位职员"这一信息

use std::fmt::Display;

use crate::models::Role;

#[derive(Debug, Clone)]
pub struct CandidateCtx {
    /// 排行榜页码
    pub page: u32,

    /// 经理ID
    pub manager_id: String,

    /// 触发抓取的角色
    pub role: Role,

    /// 职员ID
    pub staff_id: String,
}

impl CandidateCtx {
    pub fn new(page: u32, manager_id: String, role: Role, staff_id: String) -> Self {
        Self {
            page,
            manager_id,
            role,
            staff_id,
        }
    }
}

impl Display for CandidateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[第 {} 页 经理#{} {}#{}]",
            self.page, self.manager_id, self.role, self.staff_id
        )
    }
}
