// 並列変換処理専用のカスタムエラー型定義

use thiserror::Error;

/// 並列変換処理固有のエラー型
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("プールは既に閉じられています")]
    PoolClosed,

    #[error("変換タスクエラー: {source}")]
    TaskExecution {
        #[source]
        source: anyhow::Error,
    },

    #[error("結果待機が中断されました: {message}")]
    CollectionInterrupted { message: String },

    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("ワーカー終了エラー: {source}")]
    WorkerJoin {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("ワーカー内部エラー: {source}")]
    WorkerFailed {
        #[source]
        source: anyhow::Error,
    },
}

impl ConversionError {
    /// 変換タスクエラーの作成
    pub fn task_execution(source: anyhow::Error) -> Self {
        Self::TaskExecution { source }
    }

    /// 結果待機中断エラーの作成
    pub fn collection_interrupted(message: impl Into<String>) -> Self {
        Self::CollectionInterrupted {
            message: message.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// ワーカー終了エラーの作成
    pub fn worker_join(source: tokio::task::JoinError) -> Self {
        Self::WorkerJoin { source }
    }

    /// ワーカー内部エラーの作成
    pub fn worker_failed(source: anyhow::Error) -> Self {
        Self::WorkerFailed { source }
    }

    /// バッチ全体を中断すべきエラーかどうかを判定
    ///
    /// アイテム単位のエラー（タスク失敗・待機中断）は該当する行にのみ
    /// 表示され、バッチは継続する。それ以外はバッチ自体の異常。
    pub fn is_fatal_to_batch(&self) -> bool {
        !matches!(
            self,
            Self::TaskExecution { .. } | Self::CollectionInterrupted { .. }
        )
    }
}

impl From<tokio::task::JoinError> for ConversionError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::WorkerJoin { source: error }
    }
}

/// 並列変換処理の結果型
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
