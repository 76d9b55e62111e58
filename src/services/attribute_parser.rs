//! 属性解析服务 - 业务能力层
//!
//! 远程资料接口没有稳定结构，字段是夹杂 HTML 和标记的字符串，
//! 所以这里全部按模式提取，每个函数返回确定类型或明确的"缺失"。
//!
//! - 等级、合同、车手数值缺少标记时返回 [`ParseError`]，说明数据异常
//! - 技能表、车手字段为空时返回 `None`，这是角色判定的依据而不是错误
//!
//! 整数提取只取第一个匹配。

use crate::error::ParseError;
use crate::models::profile::Envelope;
use crate::models::{
    CandidateRef, DesignAttribute, DriverStats, ManagerRef, ManagerRoster, ProfileAttributes,
    Role, StaffProfile,
};
use crate::utils::logging::truncate_text;
use phf::phf_map;
use regex::Regex;
use std::sync::LazyLock;

/// 选项中仍提供入围操作时出现的图标
pub const SHORTLIST_MARKER: &str = "&#xf359;";

/// 技能表词汇
pub static SKILL_VOCABULARY: phf::Map<&'static str, DesignAttribute> = phf_map! {
    "Acceleration" => DesignAttribute::Acceleration,
    "Braking" => DesignAttribute::Braking,
    "Cooling" => DesignAttribute::Cooling,
    "Fuel economy" => DesignAttribute::FuelEconomy,
    "Handling" => DesignAttribute::Handling,
    "Downforce" => DesignAttribute::Downforce,
    "Reliability" => DesignAttribute::Reliability,
    "Tyre economy" => DesignAttribute::TyreEconomy,
};

static MANAGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"d=profile&manager=([0-9]+)").expect("manager pattern"));
static STAFF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"d=[^&"'\s]+&id=([0-9]+)"#).expect("staff pattern"));
static STAR_LEVEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9]+)\)").expect("star level pattern"));
static CONTRACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+) race").expect("contract pattern"));
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("number pattern"));
static SKILL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let words: Vec<String> = SKILL_VOCABULARY.keys().map(|w| regex::escape(w)).collect();
    Regex::new(&format!("({})", words.join("|"))).expect("skill pattern")
});

/// 车手数值字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStat {
    Talent,
    Stamina,
    Weight,
    Age,
}

impl DriverStat {
    pub fn field(self) -> &'static str {
        match self {
            DriverStat::Talent => "sTalent",
            DriverStat::Stamina => "sStamina",
            DriverStat::Weight => "sWeight",
            DriverStat::Age => "sAge",
        }
    }
}

/// 排行榜页面中的经理引用，按文档顺序惰性产出，不去重
pub fn manager_refs(page_text: &str) -> impl Iterator<Item = ManagerRef> + '_ {
    MANAGER_RE.captures_iter(page_text).map(|caps| ManagerRef {
        query: caps[0].to_string(),
        id: caps[1].to_string(),
    })
}

/// 解析经理资料 JSON
pub fn decode_roster(text: &str) -> Result<ManagerRoster, ParseError> {
    let envelope: Envelope<ManagerRoster> = serde_json::from_str(text)?;
    Ok(envelope.vars)
}

/// 解析职员资料 JSON
pub fn decode_staff(text: &str) -> Result<StaffProfile, ParseError> {
    let envelope: Envelope<StaffProfile> = serde_json::from_str(text)?;
    Ok(envelope.vars)
}

/// 经理名下的职员引用
///
/// 顺序：设计师、医生、技术总监、车手1、车手2；空栏位不产出
pub fn candidate_refs(roster: &ManagerRoster) -> Vec<CandidateRef> {
    [
        (Role::Designer, &roster.design),
        (Role::Doctor, &roster.train),
        (Role::Engineer, &roster.engineer),
        (Role::Driver, &roster.driver1),
        (Role::Driver, &roster.driver2),
    ]
    .into_iter()
    .filter_map(|(role, field)| {
        STAFF_RE.captures(field).map(|caps| CandidateRef {
            role,
            query: caps[0].to_string(),
            id: caps[1].to_string(),
        })
    })
    .collect()
}

/// 星级：第一个括号内的整数
pub fn extract_star_level(text: &str) -> Result<u32, ParseError> {
    first_capture(&STAR_LEVEL_RE, text, "starrating")
}

/// 剩余合同场数：`N race` 中的 N
pub fn extract_contract_remaining(text: &str) -> Result<u32, ParseError> {
    first_capture(&CONTRACT_RE, text, "contract")
}

/// 技能表中的属性词，按出现顺序
///
/// 技能表为空时返回 None（没有技能表就不是设计师）
pub fn extract_skill_tokens(text: &str) -> Option<Vec<DesignAttribute>> {
    if text.trim().is_empty() {
        return None;
    }
    Some(
        SKILL_RE
            .find_iter(text)
            .filter_map(|m| SKILL_VOCABULARY.get(m.as_str()).copied())
            .collect(),
    )
}

/// 车手数值字段中的第一个整数
///
/// 字段为空返回 `Ok(None)`（体重为空即判定为非车手）
pub fn extract_driver_stat(text: &str, stat: DriverStat) -> Result<Option<u32>, ParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let m = NUMBER_RE.find(text).ok_or_else(|| ParseError::MissingMarker {
        field: stat.field(),
        snippet: truncate_text(text, 40),
    })?;
    parse_number(m.as_str(), stat.field()).map(Some)
}

/// 选项中是否仍提供入围操作
pub fn has_shortlist_marker(options: &str) -> bool {
    options.contains(SHORTLIST_MARKER)
}

/// 构建职员属性
pub fn parse_attributes(profile: &StaffProfile) -> Result<ProfileAttributes, ParseError> {
    let shortlist_offered = has_shortlist_marker(&profile.options);
    let level = extract_star_level(&profile.starrating)?;
    let contract_remaining = extract_contract_remaining(&profile.contract)?;
    let skills = extract_skill_tokens(&profile.skilltable);
    let driver = parse_driver_stats(profile)?;

    Ok(ProfileAttributes {
        level,
        contract_remaining,
        skills,
        driver,
        shortlist_offered,
    })
}

fn parse_driver_stats(profile: &StaffProfile) -> Result<Option<DriverStats>, ParseError> {
    let Some(weight) = extract_driver_stat(&profile.weight, DriverStat::Weight)? else {
        return Ok(None);
    };
    let required = |text: &str, stat: DriverStat| {
        extract_driver_stat(text, stat)?.ok_or(ParseError::MissingDriverField { field: stat.field() })
    };

    Ok(Some(DriverStats {
        talent: required(&profile.talent, DriverStat::Talent)?,
        // 体力不参与判断，无法识别时记为缺失
        stamina: extract_driver_stat(&profile.stamina, DriverStat::Stamina)
            .ok()
            .flatten(),
        weight,
        age: required(&profile.age, DriverStat::Age)?,
    }))
}

fn first_capture(re: &Regex, text: &str, field: &'static str) -> Result<u32, ParseError> {
    let caps = re.captures(text).ok_or_else(|| ParseError::MissingMarker {
        field,
        snippet: truncate_text(text, 40),
    })?;
    parse_number(&caps[1], field)
}

fn parse_number(digits: &str, field: &'static str) -> Result<u32, ParseError> {
    digits.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: digits.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_refs_in_document_order_without_dedup() {
        let page = r#"<a href="?d=profile&manager=11">A</a>
            <a href="?d=profile&manager=22">B</a>
            <a href="?d=profile&manager=11">A again</a>"#;
        let ids: Vec<String> = manager_refs(page).map(|m| m.id).collect();
        assert_eq!(ids, vec!["11", "22", "11"]);

        let first = manager_refs(page).next().unwrap();
        assert_eq!(first.query, "d=profile&manager=11");
    }

    #[test]
    fn test_manager_refs_empty_page() {
        assert_eq!(manager_refs("<table></table>").count(), 0);
    }

    #[test]
    fn test_candidate_refs_tag_roles_and_skip_empty() {
        let roster = ManagerRoster {
            design: r#"<a href="?d=staff&id=100">x</a>"#.into(),
            train: String::new(),
            engineer: r#"<a href="?d=staff&id=300">y</a>"#.into(),
            driver1: r#"<a href="?d=driver&id=401">z</a>"#.into(),
            driver2: "no link".into(),
        };
        let refs = candidate_refs(&roster);
        let summary: Vec<(Role, &str, &str)> = refs
            .iter()
            .map(|c| (c.role, c.query.as_str(), c.id.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Role::Designer, "d=staff&id=100", "100"),
                (Role::Engineer, "d=staff&id=300", "300"),
                (Role::Driver, "d=driver&id=401", "401"),
            ]
        );
    }

    #[test]
    fn test_candidate_refs_train_slot_is_doctor() {
        let roster = ManagerRoster {
            train: r#"<a href="?d=staff&id=200">doc</a>"#.into(),
            ..Default::default()
        };
        let refs = candidate_refs(&roster);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].role, Role::Doctor);
        assert_eq!(refs[0].id, "200");
    }

    #[test]
    fn test_star_level_first_match_wins() {
        assert_eq!(extract_star_level("<span>Level (12)</span> (3)").unwrap(), 12);
        assert_eq!(extract_star_level("((4))").unwrap(), 4);
        assert_eq!(extract_star_level("Lv 2 (x) (7)").unwrap(), 7);
    }

    #[test]
    fn test_star_level_missing_is_error() {
        let err = extract_star_level("no stars here").unwrap_err();
        assert!(matches!(err, ParseError::MissingMarker { field: "starrating", .. }));
    }

    #[test]
    fn test_contract_remaining() {
        assert_eq!(extract_contract_remaining("<b>14 races</b>").unwrap(), 14);
        assert_eq!(extract_contract_remaining("1 race, 30 races").unwrap(), 1);
        assert!(extract_contract_remaining("expired").is_err());
    }

    #[test]
    fn test_oversized_number_is_invalid() {
        let err = extract_star_level("(99999999999)").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn test_skill_tokens_in_order() {
        let table = "<td>Acceleration</td><td>Fuel economy</td><td>Tyre economy</td><td>Reliability</td>";
        assert_eq!(
            extract_skill_tokens(table),
            Some(vec![
                DesignAttribute::Acceleration,
                DesignAttribute::FuelEconomy,
                DesignAttribute::TyreEconomy,
                DesignAttribute::Reliability,
            ])
        );
    }

    #[test]
    fn test_skill_tokens_absent_vs_empty() {
        assert_eq!(extract_skill_tokens(""), None);
        assert_eq!(extract_skill_tokens("   "), None);
        assert_eq!(extract_skill_tokens("<table></table>"), Some(vec![]));
    }

    #[test]
    fn test_driver_stat() {
        assert_eq!(extract_driver_stat("<span>72 kg</span>", DriverStat::Weight).unwrap(), Some(72));
        assert_eq!(extract_driver_stat("", DriverStat::Weight).unwrap(), None);
        assert!(extract_driver_stat("n/a", DriverStat::Age).is_err());
    }

    #[test]
    fn test_shortlist_marker() {
        assert!(has_shortlist_marker(r#"<a class="btn">&#xf359; Shortlist</a>"#));
        assert!(!has_shortlist_marker(r#"<a class="btn">&#xf00c; Shortlisted</a>"#));
    }

    #[test]
    fn test_decode_staff_accepts_numbers_and_missing_fields() {
        let text = r#"{"vars":{"starrating":"(3)","contract":"5 races","sWeight":70,"sTalent":null}}"#;
        let staff = decode_staff(text).unwrap();
        assert_eq!(staff.starrating, "(3)");
        assert_eq!(staff.weight, "70");
        assert_eq!(staff.talent, "");
        assert_eq!(staff.options, "");
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(matches!(decode_roster("<html>login</html>"), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_attributes_driver_requires_talent_and_age() {
        let staff = StaffProfile {
            starrating: "(2)".into(),
            contract: "3 races".into(),
            weight: "70".into(),
            age: "25".into(),
            ..Default::default()
        };
        let err = parse_attributes(&staff).unwrap_err();
        assert_eq!(err, ParseError::MissingDriverField { field: "sTalent" });
    }

    #[test]
    fn test_parse_attributes_tolerates_unreadable_stamina() {
        let staff = StaffProfile {
            starrating: "(2)".into(),
            contract: "3 races".into(),
            options: SHORTLIST_MARKER.into(),
            talent: "60".into(),
            stamina: "?".into(),
            weight: "70".into(),
            age: "25".into(),
            ..Default::default()
        };
        let attrs = parse_attributes(&staff).unwrap();
        assert_eq!(
            attrs.driver,
            Some(DriverStats {
                talent: 60,
                stamina: None,
                weight: 70,
                age: 25,
            })
        );
    }

    #[test]
    fn test_parse_attributes_staff_without_driver_fields() {
        let staff = StaffProfile {
            starrating: "(4)".into(),
            contract: "8 races".into(),
            options: SHORTLIST_MARKER.into(),
            ..Default::default()
        };
        let attrs = parse_attributes(&staff).unwrap();
        assert_eq!(attrs.level, 4);
        assert_eq!(attrs.contract_remaining, 8);
        assert_eq!(attrs.skills, None);
        assert_eq!(attrs.driver, None);
        assert!(attrs.shortlist_offered);
    }
}
