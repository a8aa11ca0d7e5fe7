//! 启动与命令行层的错误类型，HTTP 层的错误见 [`crate::http::error`]

pub type Result<T> = color_eyre::Result<T>;

pub use color_eyre::eyre::WrapErr;
