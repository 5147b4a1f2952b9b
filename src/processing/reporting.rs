// 進捗報告・監視

use super::types::WorkItem;
use async_trait::async_trait;

/// 進捗報告の抽象化トレイト
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_items: usize);

    /// エラー発生時の報告
    async fn report_error(&self, item: &WorkItem, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, converted: usize, errors: usize);
}

/// コンソール出力による進捗報告実装
///
/// 開始バナーと完了行は標準出力へ、アイテム単位のエラーは
/// 標準エラー出力へ書き込む。
#[derive(Debug, Default)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, _total_items: usize) {
        if !self.quiet {
            println!("\n=== CONVERSOR DE TEMPERATURAS PARALELO ===\n");
        }
    }

    async fn report_error(&self, item: &WorkItem, error: &str) {
        if !self.quiet {
            eprintln!("❌ 変換失敗 [{}] {:.1}°C: {error}", item.index, item.celsius);
        }
    }

    async fn report_completed(&self, _converted: usize, _errors: usize) {
        if !self.quiet {
            println!("✅ Conversión completada\n");
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_items: usize) {
        // 何もしない
    }

    async fn report_error(&self, _item: &WorkItem, _error: &str) {
        // 何もしない
    }

    async fn report_completed(&self, _converted: usize, _errors: usize) {
        // 何もしない
    }
}
