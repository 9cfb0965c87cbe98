//! Image-generation prompts derived from the answers
//!
//! Image models respond better to English, so the Japanese option labels are
//! translated through small tables. Labels without an entry are passed through
//! verbatim.

use super::inputs::RecommendationInputs;
use serde::{Deserialize, Serialize};

/// The two image slots on the result page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSlot {
    Exterior,
    FloorPlan,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 2] = [ImageSlot::Exterior, ImageSlot::FloorPlan];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSlot::Exterior => "exterior",
            ImageSlot::FloorPlan => "floor-plan",
        }
    }

    /// Japanese caption shown above the image
    pub fn caption(&self) -> &'static str {
        match self {
            ImageSlot::Exterior => "外観イメージ",
            ImageSlot::FloorPlan => "間取りイメージ",
        }
    }
}

impl std::fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ImageSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exterior" => Ok(ImageSlot::Exterior),
            "floor-plan" | "floor_plan" | "floorplan" => Ok(ImageSlot::FloorPlan),
            _ => Err(format!(
                "Unknown image slot: {}. Valid: exterior, floor-plan",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePrompts {
    pub exterior: String,
    pub floor_plan: String,
}

impl ImagePrompts {
    pub fn from_inputs(inputs: &RecommendationInputs) -> Self {
        Self {
            exterior: exterior_prompt(inputs),
            floor_plan: floor_plan_prompt(inputs),
        }
    }

    pub fn get(&self, slot: ImageSlot) -> &str {
        match slot {
            ImageSlot::Exterior => &self.exterior,
            ImageSlot::FloorPlan => &self.floor_plan,
        }
    }
}

fn style_en(style: &str) -> &str {
    match style {
        "モダン" => "modern",
        "和モダン" => "Japanese modern (wa-modern)",
        "北欧風" => "Scandinavian",
        "南欧風" => "Southern European",
        "シンプル" => "minimalist",
        "ナチュラル" => "natural wood",
        other => other,
    }
}

fn family_en(family_type: &str) -> &str {
    match family_type {
        "単身" => "for a single person",
        "夫婦2人" => "for a couple",
        "夫婦+子供1人" => "for a couple with one child",
        "夫婦+子供2人以上" => "for a family with children",
        "二世帯住宅" => "two-generation family home",
        other => other,
    }
}

fn garden_en(garden: &str) -> &str {
    match garden {
        "広い庭が欲しい" => "large green garden",
        "最小限でOK" => "compact low-maintenance front yard",
        "ウッドデッキが欲しい" => "wooden deck terrace",
        "駐車場重視" => "spacious driveway and carport",
        "こだわらない" => "simple landscaping",
        other => other,
    }
}

fn facility_en(facility: &str) -> &str {
    match facility {
        "対面キッチン" => "open kitchen facing the living room",
        "ウォークインクローゼット" => "walk-in closet",
        "書斎" => "study room",
        "パントリー" => "pantry",
        "吹き抜け" => "double-height atrium",
        "ロフト" => "loft",
        other => other,
    }
}

pub fn exterior_prompt(inputs: &RecommendationInputs) -> String {
    format!(
        "A beautiful {} style Japanese house exterior, {}, {}, architectural photography, \
         natural daylight, high quality, photorealistic",
        style_en(&inputs.style),
        family_en(&inputs.family_type),
        garden_en(&inputs.garden),
    )
}

pub fn floor_plan_prompt(inputs: &RecommendationInputs) -> String {
    let mut prompt = format!(
        "Architectural floor plan of a {} Japanese house, {} interior",
        inputs.rooms,
        style_en(&inputs.style),
    );
    if !inputs.facilities.is_empty() {
        let facilities: Vec<&str> = inputs.facilities.iter().map(|f| facility_en(f)).collect();
        prompt.push_str(", with ");
        prompt.push_str(&facilities.join(", "));
    }
    prompt.push_str(", top-down view, clean lines, labeled rooms, white background");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> RecommendationInputs {
        RecommendationInputs {
            family_type: "夫婦2人".to_string(),
            rooms: "2LDK".to_string(),
            budget: "1500-2500万円".to_string(),
            style: "北欧風".to_string(),
            priorities: vec!["断熱性".to_string()],
            facilities: vec!["書斎".to_string(), "ロフト".to_string()],
            garden: "ウッドデッキが欲しい".to_string(),
            lifestyle: "在宅ワーク重視".to_string(),
        }
    }

    #[test]
    fn test_exterior_prompt() {
        let prompt = exterior_prompt(&inputs());
        assert!(prompt.starts_with("A beautiful Scandinavian style Japanese house exterior"));
        assert!(prompt.contains("for a couple"));
        assert!(prompt.contains("wooden deck terrace"));
    }

    #[test]
    fn test_floor_plan_prompt_lists_facilities() {
        let prompt = floor_plan_prompt(&inputs());
        assert!(prompt.contains("2LDK"));
        assert!(prompt.contains("with study room, loft"));
    }

    #[test]
    fn test_floor_plan_prompt_without_facilities() {
        let mut inputs = inputs();
        inputs.facilities.clear();
        assert!(!floor_plan_prompt(&inputs).contains(", with "));
    }

    #[test]
    fn test_unknown_labels_pass_through() {
        let mut inputs = inputs();
        inputs.style = "ログハウス".to_string();
        assert!(exterior_prompt(&inputs).contains("ログハウス style"));
    }

    #[test]
    fn test_slot_parse() {
        assert_eq!("floor-plan".parse::<ImageSlot>(), Ok(ImageSlot::FloorPlan));
        assert_eq!("Exterior".parse::<ImageSlot>(), Ok(ImageSlot::Exterior));
        assert!("roof".parse::<ImageSlot>().is_err());
    }
}
