//! 资格评估服务 - 业务能力层
//!
//! 对单个职员按角色应用门槛规则，不跨候选人保存状态。
//!
//! 判定顺序：
//! 1. 选项中没有入围图标 → [`Verdict::AbortPage`]
//! 2. 角色按数据形态判定：有体重字段即车手，否则技能表非空即设计师，否则为一般职员
//! 3. 等级、合同上限对所有角色生效
//! 4. 车手：天赋下限、体重上限、年龄上限
//! 5. 非车手：等级下限；设计师再检查强项/弱项白名单
//!
//! 所有门槛等于边界值时通过，严格越界才拒绝。

use crate::error::ParseError;
use crate::models::{
    CandidateRef, Criteria, DesignAttribute, DriverStats, ProfileAttributes, ShortlistCategory,
    ShortlistTarget, StaffProfile,
};
use crate::services::attribute_parser::{has_shortlist_marker, parse_attributes};
use std::fmt;

/// 按数据形态判定出的角色
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Driver(DriverStats),
    Designer {
        strength: DesignAttribute,
        weakness: DesignAttribute,
    },
    GenericStaff,
}

impl Classification {
    pub fn of(attrs: &ProfileAttributes) -> Self {
        if let Some(stats) = attrs.driver {
            return Classification::Driver(stats);
        }
        match attrs.skills.as_deref() {
            Some([first, .., last]) => Classification::Designer {
                strength: *first,
                weakness: *last,
            },
            Some([only]) => Classification::Designer {
                strength: *only,
                weakness: *only,
            },
            _ => Classification::GenericStaff,
        }
    }
}

/// 拒绝原因（仅用于日志）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    LevelAboveMaximum { level: u32 },
    ContractAboveMaximum { remaining: u32 },
    TalentBelowMinimum { talent: u32 },
    WeightAboveMaximum { weight: u32 },
    AgeAboveMaximum { age: u32 },
    LevelBelowMinimum { level: u32 },
    DesignerTraits {
        strength: DesignAttribute,
        weakness: DesignAttribute,
    },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::LevelAboveMaximum { level } => write!(f, "等级 {} 超过上限", level),
            RejectReason::ContractAboveMaximum { remaining } => {
                write!(f, "剩余合同 {} 场超过上限", remaining)
            }
            RejectReason::TalentBelowMinimum { talent } => write!(f, "天赋 {} 低于下限", talent),
            RejectReason::WeightAboveMaximum { weight } => write!(f, "体重 {} 超过上限", weight),
            RejectReason::AgeAboveMaximum { age } => write!(f, "年龄 {} 超过上限", age),
            RejectReason::LevelBelowMinimum { level } => write!(f, "等级 {} 低于下限", level),
            RejectReason::DesignerTraits { strength, weakness } => {
                write!(f, "强项 {} / 弱项 {} 不在白名单", strength, weakness)
            }
        }
    }
}

/// 评估结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accept(ShortlistTarget),
    Reject(RejectReason),
    /// 已入围过，停止处理本页剩余候选人
    AbortPage,
}

/// 资格评估器，持有本页的筛选条件
pub struct EligibilityEvaluator<'a> {
    criteria: &'a Criteria,
}

impl<'a> EligibilityEvaluator<'a> {
    pub fn new(criteria: &'a Criteria) -> Self {
        Self { criteria }
    }

    /// 从原始资料评估
    ///
    /// 入围图标在其余字段解析之前检查，已入围的资料即便字段异常也返回 AbortPage
    pub fn evaluate(
        &self,
        candidate: &CandidateRef,
        profile: &StaffProfile,
    ) -> Result<Verdict, ParseError> {
        if !has_shortlist_marker(&profile.options) {
            return Ok(Verdict::AbortPage);
        }
        let attrs = parse_attributes(profile)?;
        Ok(self.judge(&candidate.id, &attrs))
    }

    /// 对已解析的属性应用规则
    pub fn judge(&self, profile_id: &str, attrs: &ProfileAttributes) -> Verdict {
        if !attrs.shortlist_offered {
            return Verdict::AbortPage;
        }

        let criteria = self.criteria;
        if attrs.level > criteria.maximum_level {
            return Verdict::Reject(RejectReason::LevelAboveMaximum { level: attrs.level });
        }
        if attrs.contract_remaining > criteria.maximum_contract_remaining {
            return Verdict::Reject(RejectReason::ContractAboveMaximum {
                remaining: attrs.contract_remaining,
            });
        }

        let category = match Classification::of(attrs) {
            Classification::Driver(stats) => {
                if let Some(reason) = self.check_driver(&stats) {
                    return Verdict::Reject(reason);
                }
                ShortlistCategory::Driver
            }
            staff => {
                if attrs.level < criteria.minimum_staff_level {
                    return Verdict::Reject(RejectReason::LevelBelowMinimum { level: attrs.level });
                }
                if let Classification::Designer { strength, weakness } = staff {
                    if !criteria.good_strengths.contains(&strength)
                        || !criteria.good_weaknesses.contains(&weakness)
                    {
                        return Verdict::Reject(RejectReason::DesignerTraits { strength, weakness });
                    }
                }
                ShortlistCategory::Staff
            }
        };

        Verdict::Accept(ShortlistTarget {
            profile_id: profile_id.to_string(),
            category,
        })
    }

    fn check_driver(&self, stats: &DriverStats) -> Option<RejectReason> {
        let criteria = self.criteria;
        if stats.talent < criteria.minimum_driver_talent {
            Some(RejectReason::TalentBelowMinimum { talent: stats.talent })
        } else if stats.weight > criteria.maximum_driver_weight {
            Some(RejectReason::WeightAboveMaximum { weight: stats.weight })
        } else if stats.age > criteria.maximum_driver_age {
            Some(RejectReason::AgeAboveMaximum { age: stats.age })
        } else {
            None
        }
    }
}
