use serde::Deserialize;
use std::fmt;

/// 职员角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Driver,
    Designer,
    Engineer,
    Doctor,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::Driver => "车手",
            Role::Designer => "设计师",
            Role::Engineer => "技术总监",
            Role::Doctor => "医生",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 设计师技能表中出现的属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum DesignAttribute {
    Acceleration,
    Braking,
    Cooling,
    #[serde(rename = "Fuel economy")]
    FuelEconomy,
    Handling,
    Downforce,
    Reliability,
    #[serde(rename = "Tyre economy")]
    TyreEconomy,
}

impl DesignAttribute {
    /// 页面上显示的名称
    pub fn label(self) -> &'static str {
        match self {
            DesignAttribute::Acceleration => "Acceleration",
            DesignAttribute::Braking => "Braking",
            DesignAttribute::Cooling => "Cooling",
            DesignAttribute::FuelEconomy => "Fuel economy",
            DesignAttribute::Handling => "Handling",
            DesignAttribute::Downforce => "Downforce",
            DesignAttribute::Reliability => "Reliability",
            DesignAttribute::TyreEconomy => "Tyre economy",
        }
    }
}

impl fmt::Display for DesignAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 排行榜页面中的经理引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerRef {
    /// 资料查询片段，如 `d=profile&manager=123`
    pub query: String,
    pub id: String,
}

/// 待评估的职员引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRef {
    /// 触发抓取的角色（仅用于筛选开关，判定以资料内容为准）
    pub role: Role,
    /// 资料查询片段，如 `d=driver&id=456`
    pub query: String,
    /// 入围操作使用的职员 ID
    pub id: String,
}

/// `{"vars": {...}}` 外层结构
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub vars: T,
}

/// 经理资料中的职员栏位
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManagerRoster {
    #[serde(deserialize_with = "deserialize_text")]
    pub design: String,
    /// 医生
    #[serde(deserialize_with = "deserialize_text")]
    pub train: String,
    /// 技术总监
    #[serde(deserialize_with = "deserialize_text")]
    pub engineer: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub driver1: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub driver2: String,
}

/// 职员资料原始文本字段
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StaffProfile {
    #[serde(deserialize_with = "deserialize_text")]
    pub starrating: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub skilltable: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub options: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub contract: String,
    #[serde(rename = "sTalent", deserialize_with = "deserialize_text")]
    pub talent: String,
    #[serde(rename = "sStamina", deserialize_with = "deserialize_text")]
    pub stamina: String,
    #[serde(rename = "sWeight", deserialize_with = "deserialize_text")]
    pub weight: String,
    #[serde(rename = "sAge", deserialize_with = "deserialize_text")]
    pub age: String,
}

/// 车手数值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverStats {
    pub talent: u32,
    pub stamina: Option<u32>,
    pub weight: u32,
    pub age: u32,
}

/// 解析后的职员属性，每个候选人构建一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileAttributes {
    pub level: u32,
    pub contract_remaining: u32,
    /// 技能表为空时为 None
    pub skills: Option<Vec<DesignAttribute>>,
    /// 体重字段存在时才有
    pub driver: Option<DriverStats>,
    /// 选项中仍提供入围操作
    pub shortlist_offered: bool,
}

// 字段可能是字符串、数字或 null，统一当作文本
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number, boolean or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(String::new())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}
