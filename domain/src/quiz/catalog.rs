//! Built-in 家づくり診断 questionnaire

use super::question::{Question, QuestionId, QuestionKind, Questionnaire};

/// Role of each built-in question, as consumed by the recommendation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionSlot {
    FamilyType,
    Rooms,
    Budget,
    Style,
    Priorities,
    Facilities,
    Garden,
    Lifestyle,
}

impl QuestionSlot {
    pub const ALL: [QuestionSlot; 8] = [
        QuestionSlot::FamilyType,
        QuestionSlot::Rooms,
        QuestionSlot::Budget,
        QuestionSlot::Style,
        QuestionSlot::Priorities,
        QuestionSlot::Facilities,
        QuestionSlot::Garden,
        QuestionSlot::Lifestyle,
    ];

    /// Id of the question filling this slot
    pub const fn id(&self) -> QuestionId {
        QuestionId::new(match self {
            QuestionSlot::FamilyType => 1,
            QuestionSlot::Rooms => 2,
            QuestionSlot::Budget => 3,
            QuestionSlot::Style => 4,
            QuestionSlot::Priorities => 5,
            QuestionSlot::Facilities => 6,
            QuestionSlot::Garden => 7,
            QuestionSlot::Lifestyle => 8,
        })
    }
}

/// The eight-question questionnaire shipped with the tool
pub fn default_questionnaire() -> Questionnaire {
    use QuestionKind::{Multiple, Single};

    Questionnaire::from_trusted(vec![
        Question::new(
            1,
            "家族構成を教えてください",
            Single,
            ["単身", "夫婦2人", "夫婦+子供1人", "夫婦+子供2人以上", "二世帯住宅"],
        ),
        Question::new(
            2,
            "希望する部屋数は？",
            Single,
            ["1LDK", "2LDK", "3LDK", "4LDK", "5LDK以上"],
        ),
        Question::new(
            3,
            "建築予算の目安を教えてください",
            Single,
            [
                "1500万円以下",
                "1500-2500万円",
                "2500-3500万円",
                "3500-5000万円",
                "5000万円以上",
            ],
        ),
        Question::new(
            4,
            "好みの外観スタイルは？",
            Single,
            ["モダン", "和モダン", "北欧風", "南欧風", "シンプル", "ナチュラル"],
        ),
        Question::new(
            5,
            "重視するポイントを選んでください（複数選択可）",
            Multiple,
            ["耐震性", "断熱性", "デザイン性", "収納力", "動線", "日当たり"],
        ),
        Question::new(
            6,
            "希望する設備を選んでください（複数選択可）",
            Multiple,
            [
                "対面キッチン",
                "ウォークインクローゼット",
                "書斎",
                "パントリー",
                "吹き抜け",
                "ロフト",
            ],
        ),
        Question::new(
            7,
            "庭・外構の希望は？",
            Single,
            [
                "広い庭が欲しい",
                "最小限でOK",
                "ウッドデッキが欲しい",
                "駐車場重視",
                "こだわらない",
            ],
        ),
        Question::new(
            8,
            "ライフスタイルで当てはまるものは？",
            Single,
            ["在宅ワーク重視", "家族団らん重視", "趣味の空間重視", "プライバシー重視"],
        ),
    ])
}
