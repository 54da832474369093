//! Article data model, drafts, and the fixed seed set.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use vitrans_common::{trimmed_non_empty, ArticleId};

use crate::error::{NewsError, NewsResult};

/// Fixed article categories.
///
/// Wire names match the values already persisted by earlier versions of
/// the site; anything unrecognized deserializes as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Language and translation topics (`ngon-ngu`)
    #[serde(rename = "ngon-ngu")]
    Language,
    /// Events and conferences (`su-kien`)
    #[serde(rename = "su-kien")]
    Events,
    /// Training courses (`dao-tao`)
    #[serde(rename = "dao-tao")]
    Training,
    /// Everything else (`khac`)
    #[serde(rename = "khac", other)]
    Other,
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}

impl Category {
    /// Wire name used in persisted data and form values.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Language => "ngon-ngu",
            Self::Events => "su-kien",
            Self::Training => "dao-tao",
            Self::Other => "khac",
        }
    }

    /// Dictionary key path for this category's display label.
    pub fn dictionary_key(&self) -> &'static str {
        match self {
            Self::Language => "news.categories.language",
            Self::Events => "news.categories.events",
            Self::Training => "news.categories.training",
            Self::Other => "news.categories.other",
        }
    }

    /// Hardcoded Vietnamese label used when no dictionary is available.
    pub fn fallback_label(&self) -> &'static str {
        match self {
            Self::Language => "Ngôn ngữ",
            Self::Events => "Sự kiện",
            Self::Training => "Đào tạo",
            Self::Other => "Khác",
        }
    }

    /// All fixed categories.
    pub fn all() -> Vec<Self> {
        vec![Self::Language, Self::Events, Self::Training, Self::Other]
    }

    /// Parses user input; anything outside the fixed set is `Other`.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "ngon-ngu" | "language" => Self::Language,
            "su-kien" | "events" => Self::Events,
            "dao-tao" | "training" => Self::Training,
            _ => Self::Other,
        }
    }
}

/// One news item.
///
/// `id` and `date` are immutable once created. Older persisted records
/// may lack fields added later, so everything optional-ish carries a
/// serde default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier within the article set
    pub id: ArticleId,
    /// Headline
    pub title: String,
    /// Category, `Other` for unknown persisted values
    #[serde(default)]
    pub category: Category,
    /// Body text
    pub content: String,
    /// Image URL, placeholder-generated when not supplied
    #[serde(default)]
    pub image: String,
    /// Author display name
    #[serde(default)]
    pub author: String,
    /// Creation timestamp (ISO-8601 on the wire)
    pub date: DateTime<Utc>,
}

/// Validated input fields for a new article.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    /// Headline (required)
    pub title: String,
    /// Category
    pub category: Category,
    /// Body text (required)
    pub content: String,
    /// Optional image URL; empty means "generate a placeholder"
    pub image: Option<String>,
    /// Author display name (required)
    pub author: String,
}

impl ArticleDraft {
    /// Checks that title, content, and author are non-empty after
    /// trimming whitespace.
    ///
    /// # Errors
    /// `NewsError::Validation` naming every empty required field.
    pub fn validate(&self) -> NewsResult<()> {
        let mut empty = Vec::new();
        if trimmed_non_empty(&self.title).is_none() {
            empty.push("title".to_string());
        }
        if trimmed_non_empty(&self.content).is_none() {
            empty.push("content".to_string());
        }
        if trimmed_non_empty(&self.author).is_none() {
            empty.push("author".to_string());
        }
        if empty.is_empty() {
            Ok(())
        } else {
            Err(NewsError::Validation { fields: empty })
        }
    }
}

/// Deterministic placeholder image URL for an article id.
pub fn placeholder_image(id: ArticleId) -> String {
    format!("https://picsum.photos/seed/news{id}/400/250.jpg")
}

/// The fixed sample articles shown when no persisted data exists.
///
/// These are not written to storage until the first mutation.
pub fn seed_articles() -> Vec<Article> {
    vec![
        Article {
            id: ArticleId(1),
            title: "Khởi động khóa học phiên dịch mùa thu 2025".to_string(),
            category: Category::Training,
            content: "Chúng tôi vui mừng thông báo khai giảng khóa học phiên dịch chuyên nghiệp \
                      mới với nhiều cải tiến trong chương trình giảng dạy."
                .to_string(),
            image: "https://picsum.photos/seed/news1/400/250.jpg".to_string(),
            author: "Admin".to_string(),
            date: Utc.with_ymd_and_hms(2025, 10, 15, 0, 0, 0).unwrap(),
        },
        Article {
            id: ArticleId(2),
            title: "Thành công tại hội thảo quốc tế về biến đổi khí hậu".to_string(),
            category: Category::Events,
            content: "Đội ngũ phiên dịch viên của chúng tôi đã hoàn thành xuất sắc nhiệm vụ tại \
                      hội thảo quốc tế về biến đổi khí hậu với sự tham gia của 30 quốc gia."
                .to_string(),
            image: "https://picsum.photos/seed/news2/400/250.jpg".to_string(),
            author: "Admin".to_string(),
            date: Utc.with_ymd_and_hms(2025, 10, 10, 0, 0, 0).unwrap(),
        },
        Article {
            id: ArticleId(3),
            title: "Công nghệ AI trong phiên dịch: Xu hướng tương lai".to_string(),
            category: Category::Language,
            content: "Bài viết phân tích xu hướng ứng dụng trí tuệ nhân tạo trong ngành phiên \
                      dịch và cơ hội cho các phiên dịch viên."
                .to_string(),
            image: "https://picsum.photos/seed/news3/400/250.jpg".to_string(),
            author: "Admin".to_string(),
            date: Utc.with_ymd_and_hms(2025, 10, 5, 0, 0, 0).unwrap(),
        },
    ]
}
