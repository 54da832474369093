//! Test utilities and shared test helpers for the ViTrans workspace.
//!
//! This module provides common fixtures and helper functions used across
//! all crates in the workspace for unit and integration testing.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// Test fixture for creating a timestamp at midnight UTC.
pub fn mock_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Dictionary fixtures matching the shape of the shipped translation files.
pub mod dictionary_fixtures {
    /// Minimal Vietnamese dictionary document.
    pub fn vi_json() -> &'static str {
        r#"{
            "meta": {
                "title": "ViTrans - Dịch vụ phiên dịch chuyên nghiệp",
                "description": "Phiên dịch hội thảo, sự kiện và đào tạo"
            },
            "form": {
                "alert": "Đây là mẫu giao diện. Hãy kết nối backend/email theo nhu cầu của bạn."
            },
            "news": {
                "viewMore": "Xem thêm",
                "delete": "Xóa",
                "authorPrefix": "Tác giả:",
                "categories": {
                    "language": "Ngôn ngữ",
                    "events": "Sự kiện",
                    "training": "Đào tạo",
                    "other": "Khác"
                },
                "messages": {
                    "added": "Tin tức đã được thêm thành công!",
                    "deleted": "Tin tức đã được xóa!",
                    "confirmDelete": "Bạn có chắc chắn muốn xóa tin tức này?"
                }
            }
        }"#
    }

    /// Minimal English dictionary document.
    pub fn en_json() -> &'static str {
        r#"{
            "meta": {
                "title": "ViTrans - Professional Interpreting Services",
                "description": "Conference, event, and training interpreting"
            },
            "form": {
                "alert": "This is a template. Connect a backend/email as needed."
            },
            "news": {
                "viewMore": "View more",
                "delete": "Delete",
                "authorPrefix": "Author:",
                "categories": {
                    "language": "Language",
                    "events": "Events",
                    "training": "Training",
                    "other": "Other"
                },
                "messages": {
                    "added": "News added successfully!",
                    "deleted": "News deleted!",
                    "confirmDelete": "Are you sure you want to delete this news item?"
                }
            }
        }"#
    }

    /// Minimal Chinese dictionary document.
    pub fn zh_json() -> &'static str {
        r#"{
            "meta": {
                "title": "ViTrans - 专业口译服务",
                "description": "会议、活动和培训口译"
            },
            "form": {
                "alert": "这是一个界面模板。请按需要连接后端/邮件。"
            },
            "news": {
                "viewMore": "查看更多",
                "delete": "删除",
                "authorPrefix": "作者：",
                "categories": {
                    "language": "语言",
                    "events": "活动",
                    "training": "培训",
                    "other": "其他"
                },
                "messages": {
                    "added": "新闻添加成功！",
                    "deleted": "新闻已删除！",
                    "confirmDelete": "您确定要删除这条新闻吗？"
                }
            }
        }"#
    }

    /// English dictionary with the news categories removed, for fallback tests.
    pub fn en_without_categories_json() -> &'static str {
        r#"{
            "news": {
                "viewMore": "View more",
                "delete": "Delete"
            }
        }"#
    }
}
