//! HTTP 接口
//!
//! - `GET /get`：固定返回拒绝信息
//! - `POST /get`：表单字段 `file` 指定服务器本地文件，返回 `{"data": [...]}`，
//!   支持 urlencoded 和 multipart 两种表单编码
//! - `GET /health`：存活检查

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{Router, routing::get};
use keyword_core::KeywordEngine;
use tower_http::trace::TraceLayer;

/// 创建应用路由
pub fn routes(engine: Arc<KeywordEngine>) -> Router {
    Router::new()
        .route("/get", get(handlers::reject).post(handlers::extract))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use axum_test::multipart::MultipartForm;
    use handlers::{KeywordResponse, REJECT_MESSAGE};
    use keyword_core::{ExtractConfig, ResourceConfig, Resources};
    use once_cell::sync::Lazy;
    use rstest::rstest;
    use std::io::Write;

    static ENGINE: Lazy<Arc<KeywordEngine>> = Lazy::new(|| {
        let resources = Resources::load(&ResourceConfig::default()).unwrap();
        Arc::new(KeywordEngine::new(resources, ExtractConfig::default()))
    });

    fn server() -> TestServer {
        TestServer::new(routes(ENGINE.clone())).unwrap()
    }

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[rstest]
    #[case(None)]
    #[case(Some(("file", "/etc/passwd")))]
    #[case(Some(("topk", "5")))]
    #[tokio::test]
    async fn get_is_rejected_with_fixed_message(#[case] query: Option<(&str, &str)>) {
        let server = server();
        let mut request = server.get("/get");
        if let Some((key, value)) = query {
            request = request.add_query_param(key, value);
        }

        let response = request.await;
        response.assert_status_ok();
        assert_eq!(response.text(), REJECT_MESSAGE);
        assert!(response.header("content-type").to_str().unwrap().starts_with("text/plain"));
    }

    #[tokio::test]
    async fn post_returns_keywords_from_file() {
        let file = write_temp("测试,文本\n关键词提取");
        let path = file.path().to_string_lossy().to_string();

        let response = server().post("/get").form(&[("file", path.as_str())]).await;
        response.assert_status_ok();

        let body: KeywordResponse = response.json();
        assert!(!body.data.is_empty());
        assert!(body.data.len() <= 10);
        for keyword in &body.data {
            assert!("测试文本关键词提取".contains(keyword.as_str()), "{keyword} not in input");
        }
    }

    #[tokio::test]
    async fn multipart_post_returns_same_keywords_as_urlencoded() {
        let file = write_temp("央行宣布下调存款准备金率，释放长期资金。");
        let path = file.path().to_string_lossy().to_string();
        let server = server();

        let multipart = MultipartForm::new().add_text("note", "x").add_text("file", path.clone());
        let response = server.post("/get").multipart(multipart).await;
        response.assert_status_ok();

        let urlencoded: KeywordResponse = server.post("/get").form(&[("file", path.as_str())]).await.json();
        let body: KeywordResponse = response.json();
        assert!(!body.data.is_empty());
        assert_eq!(body.data, urlencoded.data);
    }

    #[tokio::test]
    async fn multipart_post_without_file_is_bad_request() {
        let multipart = MultipartForm::new().add_text("other", "x");
        let response = server().post("/get").multipart(multipart).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<serde_json::Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn file_path_is_used_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("input.txt "), "央行宣布下调存款准备金率").unwrap();
        let padded = dir.path().join("input.txt ").to_string_lossy().to_string();
        let trimmed = padded.trim_end().to_string();

        let server = server();
        let response = server.post("/get").form(&[("file", padded.as_str())]).await;
        response.assert_status_ok();
        assert!(!response.json::<KeywordResponse>().data.is_empty());

        let response = server.post("/get").form(&[("file", trimmed.as_str())]).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_emits_unescaped_unicode() {
        let file = write_temp("央行宣布下调存款准备金率，释放长期资金。");
        let path = file.path().to_string_lossy().to_string();

        let response = server().post("/get").form(&[("file", path.as_str())]).await;
        response.assert_status_ok();

        let text = response.text();
        assert!(text.starts_with(r#"{"data":["#));
        assert!(!text.contains("\\u"));
        assert!(text.chars().any(|c| ('\u{4E00}'..='\u{9FD5}').contains(&c)));
    }

    #[tokio::test]
    async fn repeated_posts_return_identical_keywords() {
        let file = write_temp("存款准备金率下调释放流动性\n市场预期稳定，融资成本下降");
        let path = file.path().to_string_lossy().to_string();
        let server = server();

        let first: KeywordResponse = server.post("/get").form(&[("file", path.as_str())]).await.json();
        let second: KeywordResponse = server.post("/get").form(&[("file", path.as_str())]).await.json();
        assert_eq!(first.data, second.data);
    }

    #[tokio::test]
    async fn post_with_non_chinese_file_returns_empty_list() {
        let file = write_temp("hello, world\n12345");
        let path = file.path().to_string_lossy().to_string();

        let response = server().post("/get").form(&[("file", path.as_str())]).await;
        response.assert_status_ok();
        assert!(response.json::<KeywordResponse>().data.is_empty());
    }

    #[rstest]
    #[case(&[("other", "x")])]
    #[case(&[("file", "")])]
    #[case(&[("file", "   ")])]
    #[tokio::test]
    async fn post_without_file_is_bad_request(#[case] form: &[(&str, &str)]) {
        let response = server().post("/get").form(form).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<serde_json::Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn post_with_missing_path_is_not_found() {
        let response = server()
            .post("/get")
            .form(&[("file", "/nonexistent/keyword-server/input.txt")])
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.json::<serde_json::Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = server().get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "ok");
    }
}
