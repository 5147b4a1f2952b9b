// ConversionEngine - 依存性注入による並列変換エンジン

use super::config::PoolConfig;
use super::error::ConversionResult;
use super::pool::WorkerPool;
use super::rendering::TableRenderer;
use super::reporting::ProgressReporter;
use super::types::{BatchSummary, TaskOutcome, WorkItem};
use crate::conversion::ConversionBackend;
use std::sync::Arc;
use std::time::Instant;

/// 依存性注入による並列変換エンジン
///
/// バックエンド・設定・進捗報告・描画の全てをコンストラクタで注入する。
/// 1回の`convert_batch`呼び出しがプールの生成からシャットダウンまでの
/// ライフサイクル全体を管理する。
pub struct ConversionEngine<B, C, R, T> {
    backend: Arc<B>,
    config: C,
    reporter: R,
    renderer: T,
}

impl<B, C, R, T> ConversionEngine<B, C, R, T>
where
    B: ConversionBackend + 'static,
    C: PoolConfig,
    R: ProgressReporter,
    T: TableRenderer,
{
    /// 新しい変換エンジンを作成
    pub fn new(backend: B, config: C, reporter: R, renderer: T) -> Self {
        Self {
            backend: Arc::new(backend),
            config,
            reporter,
            renderer,
        }
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    /// 温度リストを並列変換し、投入順にテーブルへ描画する
    ///
    /// 流れ: 投入ループで全アイテムをプールへ送り、ハンドルを投入順に
    /// 保持する。収集はハンドルを先頭から順に待つため、完了順に
    /// 関係なく出力順序は入力順と一致する。アイテム単位の失敗は
    /// エラー行として描画され、バッチは継続する。
    pub async fn convert_batch(&self, temperatures: &[f64]) -> ConversionResult<BatchSummary> {
        let start_time = Instant::now();
        let total_items = temperatures.len();

        self.reporter.report_started(total_items).await;

        let mut pool = WorkerPool::new(self.backend.clone(), &self.config)?;

        // 投入ループ: ハンドルのインデックスは入力のインデックスと1:1対応
        let mut handles = Vec::with_capacity(total_items);
        for (index, &celsius) in temperatures.iter().enumerate() {
            let handle = pool.submit(WorkItem::new(index, celsius)).await?;
            handles.push(handle);
        }

        // 収集ループ: 投入順にブロックしながら1行ずつ描画
        self.renderer.render_header().await;

        let mut converted_items = 0;
        let mut error_count = 0;
        for handle in handles {
            let outcome = handle.wait().await;
            match &outcome {
                TaskOutcome::Converted { .. } => converted_items += 1,
                TaskOutcome::Failed { item, error } => {
                    error_count += 1;
                    self.reporter.report_error(item, &error.to_string()).await;
                }
            }
            self.renderer.render_row(&outcome).await;
        }

        self.renderer.render_footer().await;

        // 全結果の収集後にプールを閉じ、ワーカーの終了を待つ
        pool.shutdown().await?;

        self.reporter
            .report_completed(converted_items, error_count)
            .await;

        let total_time_ms = start_time.elapsed().as_millis() as u64;
        let average_time_per_item_ms = if total_items > 0 {
            total_time_ms as f64 / total_items as f64
        } else {
            0.0
        };

        Ok(BatchSummary {
            total_items,
            converted_items,
            error_count,
            total_time_ms,
            average_time_per_item_ms,
        })
    }
}
