// 並列変換処理のモジュール
// 機能別フォルダ構造によるアーキテクチャ

// コアモジュール
pub mod types; // データ構造定義

// 機能モジュール
pub mod config; // 設定管理
pub mod engine; // バッチ処理のオーケストレーション
pub mod error; // エラー型定義
pub mod pool; // ワーカープール
pub mod rendering; // 結果テーブルの描画
pub mod reporting; // 進捗報告・監視

// 公開API - 各機能から再エクスポート
pub use config::{DefaultPoolConfig, PoolConfig};
pub use engine::ConversionEngine;
pub use error::{ConversionError, ConversionResult};
pub use pool::{PoolState, WorkerPool};
pub use rendering::{ConsoleTableRenderer, MemoryTableRenderer, TableRenderer};
pub use reporting::{ConsoleProgressReporter, NoOpProgressReporter, ProgressReporter};
pub use types::{BatchSummary, TaskHandle, TaskOutcome, WorkItem};
