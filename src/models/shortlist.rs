use std::fmt;

/// 入围类别，对应远程接口的 `eType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortlistCategory {
    /// 非车手职员
    Staff = 2,
    Driver = 3,
}

impl ShortlistCategory {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ShortlistCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortlistCategory::Staff => write!(f, "职员({})", self.code()),
            ShortlistCategory::Driver => write!(f, "车手({})", self.code()),
        }
    }
}

/// 入围操作目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortlistTarget {
    pub profile_id: String,
    pub category: ShortlistCategory,
}
