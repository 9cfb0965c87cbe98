//! Layout: room-count band, lifestyle suggestion and requested facilities

use serde::{Deserialize, Serialize};

const COMPACT_LAYOUT: &str = "コンパクトで効率的な動線を重視した間取り";
const BALANCED_LAYOUT: &str = "家族のプライバシーと共有スペースのバランスが取れた間取り";
const SPACIOUS_LAYOUT: &str = "ゆとりある空間配置で、各部屋に十分な広さを確保した間取り";

const REMOTE_WORK: &str =
    "独立した書斎スペースや、集中できるワークエリアを設けることをおすすめします。";
const FAMILY_TIME: &str = "広々としたLDKで、家族が自然と集まる開放的な空間がおすすめです。";
const HOBBY_SPACE: &str =
    "趣味に没頭できる専用スペースや、収納豊富な多目的ルームを設けると良いでしょう。";
const PRIVACY: &str = "各個室にゆとりを持たせ、プライベート空間を大切にした設計がおすすめです。";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSuggestion {
    pub concept: String,
    pub lifestyle: String,
    /// Requested facilities, verbatim; empty when none were chosen
    pub facilities: Vec<String>,
    /// Priorities as answered, carried for display
    pub priorities: Vec<String>,
}

pub fn layout_concept(rooms: &str) -> &'static str {
    match rooms {
        "1LDK" | "2LDK" => COMPACT_LAYOUT,
        "3LDK" => BALANCED_LAYOUT,
        _ => SPACIOUS_LAYOUT,
    }
}

pub fn lifestyle_suggestion(lifestyle: &str) -> &'static str {
    match lifestyle {
        "在宅ワーク重視" => REMOTE_WORK,
        "家族団らん重視" => FAMILY_TIME,
        "趣味の空間重視" => HOBBY_SPACE,
        // プライバシー重視 and anything unrecognised
        _ => PRIVACY,
    }
}

pub fn derive_layout(
    rooms: &str,
    priorities: &[String],
    facilities: &[String],
    lifestyle: &str,
) -> LayoutSuggestion {
    LayoutSuggestion {
        concept: layout_concept(rooms).to_string(),
        lifestyle: lifestyle_suggestion(lifestyle).to_string(),
        facilities: facilities.to_vec(),
        priorities: priorities.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_bands() {
        assert_eq!(layout_concept("1LDK"), COMPACT_LAYOUT);
        assert_eq!(layout_concept("2LDK"), COMPACT_LAYOUT);
        assert_eq!(layout_concept("3LDK"), BALANCED_LAYOUT);
        assert_eq!(layout_concept("4LDK"), SPACIOUS_LAYOUT);
        assert_eq!(layout_concept("5LDK以上"), SPACIOUS_LAYOUT);
    }

    #[test]
    fn test_lifestyles() {
        assert_eq!(lifestyle_suggestion("在宅ワーク重視"), REMOTE_WORK);
        assert_eq!(lifestyle_suggestion("家族団らん重視"), FAMILY_TIME);
        assert_eq!(lifestyle_suggestion("趣味の空間重視"), HOBBY_SPACE);
        assert_eq!(lifestyle_suggestion("プライバシー重視"), PRIVACY);
        assert_eq!(lifestyle_suggestion("その他"), PRIVACY);
    }

    #[test]
    fn test_facilities_verbatim() {
        let facilities = vec!["書斎".to_string(), "ロフト".to_string()];
        let layout = derive_layout("3LDK", &[], &facilities, "在宅ワーク重視");
        assert_eq!(layout.facilities, facilities);
        assert!(layout.priorities.is_empty());
    }
}
