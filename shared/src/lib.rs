//! Vitrine 共享核心
//!
//! 平台无关的领域模型与业务状态，前端 (WASM) 与本地单元测试共用：
//! - `protocol`: 远端 Maestro API 的端点定义与传输结构
//! - `request`: HTTP 抽象层（由前端注入 fetch 实现）
//! - `api`: 基于 `HttpClient` 的 API 客户端
//! - `pagination` / `slots` / `filter` / `editor`: 页面本地状态

use serde::{Deserialize, Serialize};

pub mod api;
pub mod config;
pub mod date;
pub mod deletion;
pub mod editor;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod protocol;
pub mod request;
pub mod session;
pub mod slots;

pub use api::MaestroApi;
pub use config::ApiConfig;
pub use date::Timestamp;
pub use error::{ApiError, Result};
pub use session::Session;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 集合列表每页条数
pub const COLLECTIONS_PAGE_SIZE: usize = 5;
/// 固定槽位 (Sabitler) 容量
pub const CONSTANT_SLOT_CAPACITY: usize = 24;
/// 固定槽位每页显示数量
pub const SLOTS_PER_PAGE: usize = 6;
/// 编辑器商品目录单次拉取数量
pub const CATALOG_PAGE_SIZE: u32 = 36;
/// 仓库筛选项的 id，depot 下拉框从中取值
pub const WAREHOUSE_FILTER_ID: &str = "warehouse";
/// 服务端筛选比较类型：等于
pub const COMPARISON_EQUALS: u8 = 0;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 集合上的展示性筛选条件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionFilter {
    pub title: String,
    pub value_name: String,
}

impl CollectionFilter {
    /// 列表中展示的条件语句
    pub fn statement(&self) -> String {
        format!("Ürün {} bilgisi Şuna Eşit: {}", self.title, self.value_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub filters: Vec<CollectionFilter>,
    pub sales_channel_id: i64,
}

impl Collection {
    /// 服务端未返回名称时使用的占位名
    pub fn fallback_name(id: i64) -> String {
        format!("Koleksiyon #{}", id)
    }

    pub fn sales_channel_label(&self) -> String {
        format!("Satış Kanalı - {}", self.sales_channel_id)
    }
}

/// 商品目录中的一项
///
/// `id` 与 `code` 都取自服务端的 `productCode`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub code: String,
    pub image: String,
    pub category: String,
    pub price: f64,
}

impl Product {
    pub fn new(code: impl Into<String>, name: Option<String>, image: Option<String>) -> Self {
        let code = code.into();
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Ürün {}", code));
        Self {
            id: code.clone(),
            name,
            code,
            image: image.unwrap_or_default(),
            category: "Unknown".to_string(),
            price: 0.0,
        }
    }
}

/// 筛选项的一个可选值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterValue {
    #[serde(deserialize_with = "protocol::lenient_string")]
    pub value: String,
    #[serde(default)]
    pub value_name: Option<String>,
}

impl FilterValue {
    pub fn label(&self) -> &str {
        self.value_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.value)
    }
}

/// 可选筛选项的元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    #[serde(deserialize_with = "protocol::lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "protocol::lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "protocol::null_as_default")]
    pub values: Vec<FilterValue>,
}

impl FilterOption {
    pub fn find_value(&self, value: &str) -> Option<&FilterValue> {
        self.values.iter().find(|v| v.value == value)
    }
}

/// 已应用筛选条件的展示标签 (chip)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilter {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// 发送给服务端的附加筛选条件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalFilter {
    pub id: String,
    pub value: String,
    pub comparison_type: u8,
}

impl AdditionalFilter {
    pub fn equals(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            comparison_type: COMPARISON_EQUALS,
        }
    }
}

/// 商品目录查询体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub additional_filters: Vec<AdditionalFilter>,
    pub page: u32,
    pub page_size: u32,
}

impl ProductQuery {
    pub fn new(additional_filters: Vec<AdditionalFilter>) -> Self {
        Self {
            additional_filters,
            page: 1,
            page_size: CATALOG_PAGE_SIZE,
        }
    }

    pub fn unfiltered() -> Self {
        Self::new(Vec::new())
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::unfiltered()
    }
}

/// 保存操作组装的请求体（仅预览，不发送）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePayload {
    pub order: Vec<String>,
    pub constants: Vec<String>,
    pub filters: Vec<AppliedFilter>,
}

impl SavePayload {
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ApiError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name_falls_back_to_code() {
        let p = Product::new("P-100", None, None);
        assert_eq!(p.id, "P-100");
        assert_eq!(p.code, "P-100");
        assert_eq!(p.name, "Ürün P-100");
        assert_eq!(p.category, "Unknown");

        let blank = Product::new("P-101", Some("  ".into()), Some("img".into()));
        assert_eq!(blank.name, "Ürün P-101");
        assert_eq!(blank.image, "img");
    }

    #[test]
    fn test_collection_filter_statement() {
        let f = CollectionFilter {
            title: "Renk".into(),
            value_name: "Siyah".into(),
        };
        assert_eq!(f.statement(), "Ürün Renk bilgisi Şuna Eşit: Siyah");
    }

    #[test]
    fn test_filter_value_label_prefers_name() {
        let named = FilterValue {
            value: "W1".into(),
            value_name: Some("Depo 1".into()),
        };
        let bare = FilterValue {
            value: "W2".into(),
            value_name: None,
        };
        assert_eq!(named.label(), "Depo 1");
        assert_eq!(bare.label(), "W2");
    }

    #[test]
    fn test_additional_filter_wire_shape() {
        let json = serde_json::to_value(AdditionalFilter::equals("warehouse", "W1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "warehouse", "value": "W1", "comparisonType": 0})
        );
    }

    #[test]
    fn test_product_query_defaults() {
        let json = serde_json::to_value(ProductQuery::unfiltered()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"additionalFilters": [], "page": 1, "pageSize": 36})
        );
    }

    #[test]
    fn test_save_payload_uses_type_key() {
        let payload = SavePayload {
            order: vec!["A".into()],
            constants: vec![],
            filters: vec![AppliedFilter {
                kind: "Depo".into(),
                value: "Merkez".into(),
            }],
        };
        let text = payload.to_pretty_json().unwrap();
        assert!(text.contains("\"type\": \"Depo\""));
    }
}
