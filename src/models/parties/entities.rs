use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 会话参与方类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "party.ts")]
pub enum PartyKind {
    Student, // 学生
    Admin,   // 管理员
}

impl PartyKind {
    pub const STUDENT: &'static str = "student";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_kinds() -> &'static [&'static PartyKind] {
        &[&Self::Admin]
    }
}

impl std::fmt::Display for PartyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartyKind::Student => write!(f, "{}", PartyKind::STUDENT),
            PartyKind::Admin => write!(f, "{}", PartyKind::ADMIN),
        }
    }
}

impl std::str::FromStr for PartyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PartyKind::STUDENT => Ok(PartyKind::Student),
            PartyKind::ADMIN => Ok(PartyKind::Admin),
            _ => Err(format!("Invalid party kind: {s}")),
        }
    }
}

/// 学生或管理员的统一视图
///
/// 学生与管理员分表存储且编号空间互不重叠，消息的发送者/接收者只记录编号，
/// 通过 `Storage::find_party` 先查学生表再查管理员表得到具体身份。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "party.ts")]
pub struct Party {
    #[serde(rename = "account_id")]
    pub id: String,
    #[serde(rename = "account_name")]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PartyKind,
}

impl Party {
    pub fn student(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: PartyKind::Student,
        }
    }

    pub fn admin(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: PartyKind::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.kind == PartyKind::Admin
    }
}

/// 收件人下拉列表项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "party.ts")]
pub struct Recipient {
    pub receiver_id: String,
    pub receiver_name: String,
    #[serde(rename = "type")]
    pub kind: PartyKind,
}

impl From<Party> for Recipient {
    fn from(party: Party) -> Self {
        Self {
            receiver_id: party.id,
            receiver_name: party.name,
            kind: party.kind,
        }
    }
}

/// 显示名：`名 中间名首字母. 姓`，没有中间名时省略
pub fn display_name(first: &str, middle: Option<&str>, last: &str) -> String {
    let initial = middle
        .map(str::trim)
        .and_then(|m| m.chars().next())
        .map(|c| format!("{}.", c.to_uppercase()));

    [Some(first.trim().to_string()), initial, Some(last.trim().to_string())]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_with_middle_initial() {
        assert_eq!(
            display_name("Juan", Some("santos"), "Dela Cruz"),
            "Juan S. Dela Cruz"
        );
    }

    #[test]
    fn test_display_name_without_middle() {
        assert_eq!(display_name("Maria", None, "Clara"), "Maria Clara");
        assert_eq!(display_name("Maria", Some("  "), "Clara"), "Maria Clara");
        assert_eq!(display_name(" Jose ", None, " Rizal"), "Jose Rizal");
    }

    #[test]
    fn test_party_wire_shape() {
        let json = serde_json::to_value(Party::admin("ADM-1", "Ana Reyes")).unwrap();
        assert_eq!(json["account_id"], "ADM-1");
        assert_eq!(json["account_name"], "Ana Reyes");
        assert_eq!(json["type"], "admin");

        let back: Party = serde_json::from_value(json).unwrap();
        assert!(back.is_admin());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("student".parse::<PartyKind>().unwrap(), PartyKind::Student);
        assert!("registrar".parse::<PartyKind>().is_err());
    }
}
