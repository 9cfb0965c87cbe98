//! House-maker profiles and the shortlist filter

use serde::Serialize;

/// Maximum number of vendors in a shortlist
pub const SHORTLIST_SIZE: usize = 3;

/// Static reference record describing a house-building company
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub styles: &'static [&'static str],
    pub budgets: &'static [&'static str],
}

impl VendorProfile {
    pub fn matches_style(&self, style: &str) -> bool {
        self.styles.contains(&style)
    }

    pub fn matches_budget(&self, budget: &str) -> bool {
        self.budgets.contains(&budget)
    }
}

const VENDORS: [VendorProfile; 5] = [
    VendorProfile {
        name: "積水ハウス",
        description: "業界トップクラスの実績と技術力。耐震性能と自由設計が強み。",
        features: &["高耐震", "自由設計", "充実保証"],
        styles: &["モダン", "シンプル"],
        budgets: &["3500-5000万円", "5000万円以上"],
    },
    VendorProfile {
        name: "住友林業",
        description: "木造建築の専門家。自然素材を活かした温かみのある住まい。",
        features: &["木造", "ナチュラル", "高断熱"],
        styles: &["ナチュラル", "和モダン", "北欧風"],
        budgets: &["2500-3500万円", "3500-5000万円"],
    },
    VendorProfile {
        name: "タマホーム",
        description: "コストパフォーマンスに優れた高品質住宅。適正価格での家づくりを実現。",
        features: &["適正価格", "高品質", "短工期"],
        styles: &["シンプル", "モダン"],
        budgets: &["1500万円以下", "1500-2500万円", "2500-3500万円"],
    },
    VendorProfile {
        name: "ヘーベルハウス",
        description: "独自のALC構造で高い耐久性。都市型住宅に強み。",
        features: &["高耐久", "防災", "都市型"],
        styles: &["モダン", "シンプル"],
        budgets: &["3500-5000万円", "5000万円以上"],
    },
    VendorProfile {
        name: "セキスイハイム",
        description: "工場生産による高品質と快適性能。スマートハウスに強み。",
        features: &["高品質", "高気密高断熱", "スマートハウス"],
        styles: &["モダン", "シンプル"],
        budgets: &["2500-3500万円", "3500-5000万円"],
    },
];

/// The vendor table in declaration order
pub fn vendor_catalog() -> &'static [VendorProfile] {
    &VENDORS
}

/// Shortlist vendors for a style and budget.
///
/// A vendor qualifies when its styles contain `style` or its budget bands
/// contain `budget`. The first [`SHORTLIST_SIZE`] qualifying vendors are
/// returned in table order; with none qualifying, the first
/// [`SHORTLIST_SIZE`] table entries are returned instead. `_priorities` does
/// not take part in the filter.
pub fn select_vendors(
    style: &str,
    budget: &str,
    _priorities: &[String],
) -> Vec<&'static VendorProfile> {
    select_from(vendor_catalog(), style, budget)
}

fn select_from<'a>(table: &'a [VendorProfile], style: &str, budget: &str) -> Vec<&'a VendorProfile> {
    let matched: Vec<_> = table
        .iter()
        .filter(|v| v.matches_style(style) || v.matches_budget(budget))
        .take(SHORTLIST_SIZE)
        .collect();

    if matched.is_empty() {
        table.iter().take(SHORTLIST_SIZE).collect()
    } else {
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(vendors: &[&VendorProfile]) -> Vec<&'static str> {
        vendors.iter().map(|v| v.name).collect()
    }

    #[test]
    fn test_natural_style_includes_sumitomo() {
        let vendors = select_vendors("ナチュラル", "2500-3500万円", &[]);
        assert!(vendors.len() <= SHORTLIST_SIZE);
        assert!(names(&vendors).contains(&"住友林業"));
        // budget match counts too: タマホーム and セキスイハイム both list 2500-3500万円
        assert_eq!(names(&vendors), vec!["住友林業", "タマホーム", "セキスイハイム"]);
    }

    #[test]
    fn test_modern_top_budget_is_or_filter_capped_in_table_order() {
        let vendors = select_vendors("モダン", "5000万円以上", &[]);
        let expected: Vec<_> = vendor_catalog()
            .iter()
            .filter(|v| v.styles.contains(&"モダン") || v.budgets.contains(&"5000万円以上"))
            .take(3)
            .map(|v| v.name)
            .collect();
        assert_eq!(names(&vendors), expected);
        assert_eq!(names(&vendors), vec!["積水ハウス", "タマホーム", "ヘーベルハウス"]);
    }

    #[test]
    fn test_fewer_than_three_matches_are_not_padded() {
        let vendors = select_vendors("南欧風", "1500万円以下", &[]);
        assert_eq!(names(&vendors), vec!["タマホーム"]);
    }

    #[test]
    fn test_no_match_falls_back_to_first_three() {
        let first = select_vendors("南欧風", "9999万円", &[]);
        assert_eq!(names(&first), vec!["積水ハウス", "住友林業", "タマホーム"]);
        for _ in 0..5 {
            assert_eq!(select_vendors("南欧風", "9999万円", &[]), first);
        }
    }

    #[test]
    fn test_priorities_do_not_affect_selection() {
        let priorities = vec!["耐震性".to_string(), "日当たり".to_string()];
        assert_eq!(
            select_vendors("北欧風", "1500-2500万円", &priorities),
            select_vendors("北欧風", "1500-2500万円", &[])
        );
    }

    #[test]
    fn test_small_table_fallback() {
        let table = &VENDORS[..2];
        assert_eq!(select_from(table, "?", "?").len(), 2);
    }
}
