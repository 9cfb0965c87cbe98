//! Budget: floor-area band by room count plus a fixed advisory

use serde::{Deserialize, Serialize};

/// Shown with every estimate
pub const BUDGET_ADVICE: &str = "建物本体価格に加えて、外構工事、地盤改良、諸経費なども考慮し、総予算の70〜80%程度を建物本体に充てるのが一般的です。";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEstimate {
    pub budget: String,
    /// Recommended floor area in 坪
    pub floor_area: String,
    pub advice: String,
}

pub fn floor_area(rooms: &str) -> &'static str {
    match rooms {
        "1LDK" => "20〜25坪",
        "2LDK" => "25〜30坪",
        "3LDK" => "30〜35坪",
        "4LDK" => "35〜40坪",
        _ => "40坪以上",
    }
}

/// `_family_type` does not influence the estimate.
pub fn derive_budget_estimate(budget: &str, rooms: &str, _family_type: &str) -> BudgetEstimate {
    BudgetEstimate {
        budget: budget.to_string(),
        floor_area: floor_area(rooms).to_string(),
        advice: BUDGET_ADVICE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_area_table() {
        assert_eq!(floor_area("1LDK"), "20〜25坪");
        assert_eq!(floor_area("2LDK"), "25〜30坪");
        assert_eq!(floor_area("3LDK"), "30〜35坪");
        assert_eq!(floor_area("4LDK"), "35〜40坪");
        assert_eq!(floor_area("5LDK以上"), "40坪以上");
        assert_eq!(floor_area("6LDK"), "40坪以上");
    }

    #[test]
    fn test_family_type_does_not_change_estimate() {
        let a = derive_budget_estimate("2500-3500万円", "3LDK", "単身");
        let b = derive_budget_estimate("2500-3500万円", "3LDK", "二世帯住宅");
        assert_eq!(a, b);
        assert_eq!(a.floor_area, "30〜35坪");
        assert_eq!(a.budget, "2500-3500万円");
        assert_eq!(a.advice, BUDGET_ADVICE);
    }
}
