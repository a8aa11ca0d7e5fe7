use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use keyword_core::KeywordError;
use serde_json::json;

/// 请求本身不合法
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("缺少表单字段 file")]
    MissingFile,
    #[error("无法解析表单: {0}")]
    InvalidForm(String),
}

/// 接口错误，统一以 `{"error": "..."}` 返回
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl ApiError {
    fn status(&self) -> StatusCode {
        if self.0.downcast_ref::<RequestError>().is_some() {
            return StatusCode::BAD_REQUEST;
        }

        match self.0.downcast_ref::<KeywordError>() {
            Some(err) if err.io_kind() == Some(std::io::ErrorKind::NotFound) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!("请求处理失败: {:#}", self.0);
        } else {
            tracing::warn!("请求被拒绝: {}", error_message);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io;

    fn io_error(kind: io::ErrorKind) -> ApiError {
        ApiError::from(KeywordError::Io {
            path: "/data/a.txt".into(),
            source: io::Error::from(kind),
        })
    }

    #[rstest]
    #[case(io::ErrorKind::NotFound, StatusCode::NOT_FOUND)]
    #[case(io::ErrorKind::PermissionDenied, StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(io::ErrorKind::InvalidData, StatusCode::INTERNAL_SERVER_ERROR)]
    fn io_errors_map_to_status(#[case] kind: io::ErrorKind, #[case] expected: StatusCode) {
        assert_eq!(io_error(kind).status(), expected);
    }

    #[rstest]
    #[case(RequestError::MissingFile)]
    #[case(RequestError::InvalidForm("bad".to_string()))]
    fn request_errors_are_bad_request(#[case] err: RequestError) {
        assert_eq!(ApiError::from(err).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_errors_are_internal() {
        let err = ApiError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
