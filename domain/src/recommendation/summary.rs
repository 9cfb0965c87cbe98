//! Summary: family-type clause combined with style and budget

use serde::{Deserialize, Serialize};

const SINGLE_CLAUSE: &str = "一人暮らしに最適な、効率的でスタイリッシュな空間";
const COUPLE_CLAUSE: &str = "夫婦二人でゆったり暮らせる、落ち着いた空間";
const CHILDREN_CLAUSE: &str = "家族が快適に暮らせる、機能的で温かみのある空間";
const MULTI_GENERATION_CLAUSE: &str = "複数世代が快適に暮らせる、ゆとりある空間";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub family_type: String,
    pub rooms: String,
    pub budget: String,
    pub style: String,
    pub narrative: String,
}

/// Clause for a family type.
///
/// `単身` and `夫婦2人` match exactly; any value containing `子供` takes the
/// family clause; everything else (二世帯住宅 included) the multi-generation one.
pub fn family_clause(family_type: &str) -> &'static str {
    if family_type == "単身" {
        SINGLE_CLAUSE
    } else if family_type == "夫婦2人" {
        COUPLE_CLAUSE
    } else if family_type.contains("子供") {
        CHILDREN_CLAUSE
    } else {
        MULTI_GENERATION_CLAUSE
    }
}

pub fn derive_summary(family_type: &str, rooms: &str, budget: &str, style: &str) -> Summary {
    let narrative = format!(
        "{}で、{}テイストを基調とした住まいがおすすめです。",
        family_clause(family_type),
        style
    );
    Summary {
        family_type: family_type.to_string(),
        rooms: rooms.to_string(),
        budget: budget.to_string(),
        style: style.to_string(),
        narrative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_family_matches() {
        assert_eq!(family_clause("単身"), SINGLE_CLAUSE);
        assert_eq!(family_clause("夫婦2人"), COUPLE_CLAUSE);
    }

    #[test]
    fn test_children_is_substring_match() {
        assert_eq!(family_clause("夫婦+子供1人"), CHILDREN_CLAUSE);
        assert_eq!(family_clause("夫婦+子供2人以上"), CHILDREN_CLAUSE);
        assert_eq!(family_clause("子供と二人"), CHILDREN_CLAUSE);
    }

    #[test]
    fn test_other_family_types_fall_through() {
        assert_eq!(family_clause("二世帯住宅"), MULTI_GENERATION_CLAUSE);
        // exact match only, so a near miss is not the single clause
        assert_eq!(family_clause("単身赴任"), MULTI_GENERATION_CLAUSE);
    }

    #[test]
    fn test_narrative_includes_style_verbatim() {
        let summary = derive_summary("夫婦2人", "2LDK", "1500-2500万円", "北欧風");
        assert_eq!(
            summary.narrative,
            "夫婦二人でゆったり暮らせる、落ち着いた空間で、北欧風テイストを基調とした住まいがおすすめです。"
        );
        assert_eq!(summary.budget, "1500-2500万円");
        assert_eq!(summary.rooms, "2LDK");
    }
}
