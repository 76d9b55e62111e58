use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::models::profile::{DesignAttribute, Role};

/// 可热加载的设置文件内容
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub criteria: Criteria,
    pub identity: Identity,
}

/// 筛选条件
///
/// 每页开始时从当前快照读取，页内不变
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Criteria {
    pub include_drivers: bool,
    pub include_designers: bool,
    pub include_engineers: bool,
    pub include_doctors: bool,
    /// 起始页（从该页倒序处理到第 0 页）
    pub starting_page: u32,
    pub minimum_staff_level: u32,
    pub minimum_driver_talent: u32,
    /// 解析但不参与判断
    pub minimum_driver_stamina: u32,
    pub maximum_driver_weight: u32,
    pub maximum_driver_age: u32,
    pub maximum_contract_remaining: u32,
    pub maximum_level: u32,
    /// 每次远程请求前的固定延迟（毫秒）
    pub request_delay_ms: u64,
    /// 排行榜类别
    pub hof_category: String,
    /// 设计师可接受的强项
    pub good_strengths: Vec<DesignAttribute>,
    /// 设计师可接受的弱项
    pub good_weaknesses: Vec<DesignAttribute>,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            include_drivers: true,
            include_designers: true,
            include_engineers: true,
            include_doctors: true,
            starting_page: 0,
            minimum_staff_level: 0,
            minimum_driver_talent: 0,
            minimum_driver_stamina: 0,
            maximum_driver_weight: 99,
            maximum_driver_age: 99,
            maximum_contract_remaining: 99,
            maximum_level: 99,
            request_delay_ms: 1000,
            hof_category: "level".to_string(),
            good_strengths: vec![DesignAttribute::Acceleration],
            good_weaknesses: vec![DesignAttribute::Reliability, DesignAttribute::Cooling],
        }
    }
}

impl Criteria {
    /// 该角色是否在本轮处理范围内
    pub fn includes(&self, role: Role) -> bool {
        match role {
            Role::Driver => self.include_drivers,
            Role::Designer => self.include_designers,
            Role::Engineer => self.include_engineers,
            Role::Doctor => self.include_doctors,
        }
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

/// 会话身份（cookie）
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub uc1: String,
    pub uc2: String,
    #[serde(rename = "PHPSESSID", alias = "phpsessid")]
    pub phpsessid: String,
}

impl Identity {
    /// 拼接为单个 Cookie 请求头
    pub fn cookie_header(&self) -> String {
        format!(
            "uc1={}; uc2={}; PHPSESSID={}; dst=0; cookies=1",
            self.uc1, self.uc2, self.phpsessid
        )
    }
}

// 不把会话内容打到日志里
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("uc1", &redact(&self.uc1))
            .field("uc2", &redact(&self.uc2))
            .field("phpsessid", &redact(&self.phpsessid))
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<empty>"
    } else {
        "***"
    }
}

/// 带版本号的设置快照
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub version: u64,
    pub settings: Arc<Settings>,
}

impl Snapshot {
    pub fn new(version: u64, settings: Settings) -> Self {
        Self {
            version,
            settings: Arc::new(settings),
        }
    }

    pub fn criteria(&self) -> &Criteria {
        &self.settings.criteria
    }

    pub fn identity(&self) -> &Identity {
        &self.settings.identity
    }
}
