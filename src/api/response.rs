use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

/// Wrapper for successful API responses using the standard envelope:
/// `{"data": <payload>, "errors": []}`.
///
/// Failures never construct this type; they go through `ApiError`, which
/// renders the same envelope with `data: null` and a non-empty `errors` list.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response (always 200 OK)
    pub fn success(data: T) -> Self {
        Self { data }
    }
}

/// Empty-bodied success, `{"data": null, "errors": []}`
pub fn empty() -> ApiResponse<()> {
    ApiResponse::success(())
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "data": null,
                        "errors": ["Erro interno no servidor"]
                    })),
                )
                    .into_response();
            }
        };

        let envelope = json!({
            "data": data_value,
            "errors": [],
        });

        (StatusCode::OK, Json(envelope)).into_response()
    }
}

/// One page of results plus the counts clients page with.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T: Serialize> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub page: i64,
    pub size: i64,
}

impl<T: Serialize> Page<T> {
    pub fn new(content: Vec<T>, page: i64, size: i64, total_elements: i64) -> Self {
        let total_pages = if size > 0 {
            (total_elements + size - 1) / size
        } else {
            0
        };
        Self { content, total_elements, total_pages, page, size }
    }

    /// Rebuild the page with converted elements, keeping every count.
    pub fn map<U: Serialize>(&self, f: impl FnMut(&T) -> U) -> Page<U> {
        Page {
            content: self.content.iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
        }
    }
}

// Convenience type alias for handler signatures
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_counts() {
        let page: Page<i32> = Page::new(vec![1, 2, 3], 0, 25, 52);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 52);
        assert_eq!(page.size, 25);
    }

    #[test]
    fn test_page_exact_multiple() {
        let page: Page<i32> = Page::new(vec![], 1, 25, 50);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page: Page<i32> = Page::new(vec![7], 0, 25, 1);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["totalElements"], 1);
        assert_eq!(value["totalPages"], 1);
        assert_eq!(value["content"][0], 7);
    }

    #[test]
    fn test_empty_envelope_data_is_null() {
        let value = serde_json::to_value(()).unwrap();
        assert!(value.is_null());
    }
}
