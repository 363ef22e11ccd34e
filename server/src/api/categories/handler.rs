//! Category API Handlers

use axum::Json;

/// 市场分类是固定清单, 不入库
const CATEGORIES: [&str; 10] = [
    "Apparel & Fashion",
    "Electronics & Gadgets",
    "Home & Garden",
    "Automotive",
    "Services",
    "Books & Media",
    "Custom Items",
    "Food & Beverages",
    "Health & Beauty",
    "Sports & Recreation",
];

/// GET /api/categories - 获取所有分类
pub async fn list() -> Json<Vec<&'static str>> {
    Json(CATEGORIES.to_vec())
}
