//! Maestro API 端点定义
//!
//! 每个请求类型通过 `ApiRequest` 描述其方法、路径与响应类型；
//! 响应结构 (`*Dto`) 只在这里出现，进入业务层前转换为领域模型。

use crate::error::{ApiError, Result};
use crate::request::HttpMethod;
use crate::{Collection, CollectionFilter, FilterOption, Product, ProductQuery};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =========================================================
// 宽松解码
// =========================================================

/// 文本字段：数字按十进制文本保留，`null` 视为空串
pub(crate) fn lenient_string<'de, D>(de: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// `null` 与缺失同样按默认值处理
pub(crate) fn null_as_default<'de, D, T>(de: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// 定义端点的请求-响应关系与元数据
pub trait ApiRequest: Serialize {
    /// 该请求的响应类型
    type Response: DeserializeOwned;
    /// HTTP 方法
    const METHOD: HttpMethod;
    /// 路径（可能包含路径参数）
    fn path(&self) -> String;
}

// =========================================================
// 响应信封
// =========================================================

/// `{ data: T }` 形式的响应
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Option<T>,
}

/// `{ status, message, data }` 形式的响应，成功与否由 `status` 决定
#[derive(Debug, Deserialize)]
pub struct StatusEnvelope<T> {
    pub status: i64,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T: Default> StatusEnvelope<T> {
    pub fn into_data(self) -> Result<T> {
        if self.status != 200 {
            return Err(ApiError::Rejected {
                status: self.status,
                message: self.message.unwrap_or_default(),
            });
        }
        Ok(self.data.unwrap_or_default())
    }
}

// =========================================================
// POST /Auth/Login
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
}

impl ApiRequest for LoginRequest {
    type Response = DataEnvelope<LoginData>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/Auth/Login".to_string()
    }
}

// =========================================================
// GET /Collection/GetAll
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListCollectionsRequest;

#[derive(Debug, Default, Deserialize)]
pub struct CollectionInfoDto {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionFilterDto {
    pub title: Option<String>,
    pub value_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CollectionFilterSetDto {
    pub filters: Option<Vec<CollectionFilterDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDto {
    pub id: i64,
    pub info: Option<CollectionInfoDto>,
    pub filters: Option<CollectionFilterSetDto>,
    pub sales_channel_id: Option<i64>,
}

impl From<CollectionDto> for Collection {
    fn from(dto: CollectionDto) -> Self {
        let name = dto
            .info
            .and_then(|info| info.name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| Collection::fallback_name(dto.id));
        let filters = dto
            .filters
            .and_then(|set| set.filters)
            .unwrap_or_default()
            .into_iter()
            .map(|f| CollectionFilter {
                title: f.title.unwrap_or_default(),
                value_name: f.value_name.unwrap_or_default(),
            })
            .collect();
        Collection {
            id: dto.id,
            name,
            filters,
            sales_channel_id: dto.sales_channel_id.unwrap_or_default(),
        }
    }
}

impl ApiRequest for ListCollectionsRequest {
    type Response = DataEnvelope<Vec<CollectionDto>>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/Collection/GetAll".to_string()
    }
}

// =========================================================
// GET /Collection/{id}/GetFiltersForConstants
// =========================================================

#[derive(Debug, Serialize)]
pub struct FiltersForConstantsRequest {
    #[serde(skip)]
    pub collection_id: i64,
}

impl ApiRequest for FiltersForConstantsRequest {
    type Response = StatusEnvelope<Vec<FilterOption>>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/Collection/{}/GetFiltersForConstants", self.collection_id)
    }
}

// =========================================================
// POST /Collection/{id}/GetProductsForConstants
// =========================================================

#[derive(Debug, Serialize)]
pub struct ProductsForConstantsRequest<'a> {
    #[serde(skip)]
    pub collection_id: i64,
    #[serde(flatten)]
    pub query: &'a ProductQuery,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_code: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product::new(dto.product_code, dto.name, dto.image_url)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductPageDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<ProductDto>,
}

impl ApiRequest for ProductsForConstantsRequest<'_> {
    type Response = StatusEnvelope<ProductPageDto>;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/Collection/{}/GetProductsForConstants", self.collection_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdditionalFilter;
    use serde_json::json;

    #[test]
    fn test_collection_dto_fallbacks() {
        let dto: CollectionDto = serde_json::from_value(json!({
            "id": 7,
            "info": null,
            "salesChannelId": 3
        }))
        .unwrap();
        let collection = Collection::from(dto);
        assert_eq!(collection.name, "Koleksiyon #7");
        assert!(collection.filters.is_empty());
        assert_eq!(collection.sales_channel_label(), "Satış Kanalı - 3");
    }

    #[test]
    fn test_collection_dto_filters() {
        let dto: CollectionDto = serde_json::from_value(json!({
            "id": 1,
            "info": {"name": "Yaz"},
            "filters": {"filters": [{"title": "Renk", "valueName": "Mavi"}]},
            "salesChannelId": 2
        }))
        .unwrap();
        let collection = Collection::from(dto);
        assert_eq!(collection.name, "Yaz");
        assert_eq!(collection.filters[0].value_name, "Mavi");
    }

    #[test]
    fn test_products_request_body_is_flattened_query() {
        let query = ProductQuery::new(vec![AdditionalFilter::equals("warehouse", "W1")]);
        let req = ProductsForConstantsRequest {
            collection_id: 42,
            query: &query,
        };
        assert_eq!(req.path(), "/Collection/42/GetProductsForConstants");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "additionalFilters": [{"id": "warehouse", "value": "W1", "comparisonType": 0}],
                "page": 1,
                "pageSize": 36
            })
        );
    }

    #[test]
    fn test_status_envelope_rejects_non_200() {
        let env: StatusEnvelope<Vec<FilterOption>> =
            serde_json::from_value(json!({"status": 500, "message": "boom"})).unwrap();
        match env.into_data() {
            Err(ApiError::Rejected { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_filter_options_tolerate_numeric_and_null_values() {
        let env: StatusEnvelope<Vec<FilterOption>> = serde_json::from_value(json!({
            "status": 200,
            "data": [
                {"id": "warehouse", "title": "Depo", "values": [{"value": "W1", "valueName": "Merkez"}]},
                {"id": "year", "title": "Yıl", "values": [{"value": 2024}]},
                {"id": "season", "title": "Sezon", "values": null}
            ]
        }))
        .unwrap();
        let options = env.into_data().unwrap();

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].values[0].label(), "Merkez");
        assert_eq!(options[1].values[0].value, "2024");
        assert_eq!(options[1].values[0].label(), "2024");
        assert!(options[2].values.is_empty());
    }

    #[test]
    fn test_product_page_tolerates_null_and_numeric_codes() {
        let env: StatusEnvelope<ProductPageDto> = serde_json::from_value(json!({
            "status": 200,
            "data": {"data": [
                {"productCode": "A1", "name": "Elbise"},
                {"productCode": null, "name": "Kodsuz"},
                {"productCode": 778, "name": null}
            ]}
        }))
        .unwrap();
        let page = env.into_data().unwrap();

        let codes: Vec<&str> = page.data.iter().map(|p| p.product_code.as_str()).collect();
        assert_eq!(codes, vec!["A1", "", "778"]);
        assert_eq!(Product::from(page.data.into_iter().nth(2).unwrap()).name, "Ürün 778");
    }

    #[test]
    fn test_product_page_null_data_is_empty() {
        let env: StatusEnvelope<ProductPageDto> =
            serde_json::from_value(json!({"status": 200, "data": {"data": null}})).unwrap();
        assert!(env.into_data().unwrap().data.is_empty());
    }
}
