use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
};
use keyword_core::KeywordEngine;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{ApiError, RequestError};

/// GET /get 的固定回复
pub const REJECT_MESSAGE: &str = "错了";

#[derive(Debug, Deserialize)]
pub struct ExtractForm {
    /// 服务器本地的文本文件路径
    pub file: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordResponse {
    pub data: Vec<String>,
}

pub async fn reject() -> &'static str {
    REJECT_MESSAGE
}

pub async fn health() -> &'static str {
    "ok"
}

/// 表单同时支持 `application/x-www-form-urlencoded` 和 `multipart/form-data`
pub async fn extract(
    State(engine): State<Arc<KeywordEngine>>,
    request: Request,
) -> Result<Json<KeywordResponse>, ApiError> {
    // 路径原样使用，空白只用于判断字段是否为空
    let path = read_file_field(request)
        .await?
        .filter(|file| !file.trim().is_empty())
        .map(PathBuf::from)
        .ok_or(RequestError::MissingFile)?;

    info!("收到关键词提取请求: {:?}", path);

    // 文件读取和分词都是阻塞操作
    let keywords = tokio::task::spawn_blocking(move || engine.extract_from_file(&path)).await??;

    let data: Vec<String> = keywords.into_iter().map(|k| k.keyword).collect();
    info!("提取完成，关键词 {} 个", data.len());

    Ok(Json(KeywordResponse { data }))
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

/// 读取表单字段 `file`，字段不存在时返回 `None`
async fn read_file_field(request: Request) -> Result<Option<String>, RequestError> {
    if !is_multipart(&request) {
        let Form(form) = Form::<ExtractForm>::from_request(request, &())
            .await
            .map_err(|e| RequestError::InvalidForm(e.body_text()))?;
        return Ok(form.file);
    }

    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| RequestError::InvalidForm(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| RequestError::InvalidForm(e.body_text()))?
    {
        if field.name() == Some("file") {
            let file = field
                .text()
                .await
                .map_err(|e| RequestError::InvalidForm(e.body_text()))?;
            return Ok(Some(file));
        }
    }

    Ok(None)
}
