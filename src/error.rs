use thiserror::Error;

/// 库的错误类型
///
/// 解析与渲染本身不会失败，这里只覆盖调用边界上的错误：请求格式、配置文件和 IO。
#[derive(Error, Debug)]
pub enum FountainError {
    #[error("请求中缺少 'screenplay' 字段，或者内容为空")]
    MissingScreenplay,

    #[error("不支持的请求方法: {0}")]
    UnsupportedMethod(String),

    #[error("无效的 JSON: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 库的结果类型
pub type FountainResult<T> = Result<T, FountainError>;
