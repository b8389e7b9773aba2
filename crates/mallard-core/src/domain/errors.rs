//! Errors - エラー型と分類

use std::path::PathBuf;

use thiserror::Error;

/// ErrorKind は MallardError の運用分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 呼び出し側の入力が不正（未知の flight kind など）
    InvalidArgument,
    /// roster ファイルの読み込み・解析の失敗
    Config,
    /// 結果の出力（JSON エンコード）の失敗
    Output,
}

#[derive(Debug, Error)]
pub enum MallardError {
    #[error("invalid argument: {field}={value:?}")]
    InvalidArgument { field: &'static str, value: String },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl MallardError {
    pub fn invalid_argument(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::ConfigRead { .. } | Self::ConfigParse { .. } => ErrorKind::Config,
            Self::Encode(_) => ErrorKind::Output,
        }
    }
}
