// WorkerPool - 固定サイズワーカープールとライフサイクル管理
// 共有キューからワーカーが作業を取り出すConsumerパターン

pub(crate) mod worker;

use self::worker::{spawn_workers, WorkRequest};
use super::config::PoolConfig;
use super::error::{ConversionError, ConversionResult};
use super::types::{TaskHandle, WorkItem};
use crate::conversion::ConversionBackend;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Semaphore};

/// プールのライフサイクル状態
///
/// Open → ShuttingDown → Closed の一方向にのみ遷移する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    /// 投入受付中
    Open,
    /// シャットダウン要求済み。新規投入は拒否、投入済みの作業は完走する
    ShuttingDown,
    /// 全ワーカー終了済み
    Closed,
}

/// 固定サイズのワーカープール
///
/// 作成時にワーカータスクを起動し、共有キュー経由で作業を配る。
/// 同時実行数はワーカー数とセマフォの両方で制限される。
#[derive(Debug)]
pub struct WorkerPool {
    work_tx: Option<mpsc::Sender<WorkRequest>>,
    workers: Vec<tokio::task::JoinHandle<anyhow::Result<()>>>,
    state: PoolState,
}

impl WorkerPool {
    /// ワーカーを起動してプールを作成
    pub fn new<B, C>(backend: Arc<B>, config: &C) -> ConversionResult<Self>
    where
        B: ConversionBackend + 'static,
        C: PoolConfig,
    {
        if config.worker_count() == 0 {
            return Err(ConversionError::configuration(
                "ワーカー数は1以上である必要があります",
            ));
        }
        if config.channel_buffer_size() == 0 {
            return Err(ConversionError::configuration(
                "バッファサイズは1以上である必要があります",
            ));
        }

        let (work_tx, work_rx) = mpsc::channel::<WorkRequest>(config.channel_buffer_size());
        let semaphore = Arc::new(Semaphore::new(config.worker_count()));
        let workers = spawn_workers(backend, work_rx, semaphore, config.worker_count());

        Ok(Self {
            work_tx: Some(work_tx),
            workers,
            state: PoolState::Open,
        })
    }

    /// 現在のプール状態を取得
    pub fn state(&self) -> PoolState {
        self.state
    }

    /// 作業を投入し、結果待機ハンドルを返す
    ///
    /// シャットダウン要求後の投入はエラーになる。
    pub async fn submit(&self, item: WorkItem) -> ConversionResult<TaskHandle> {
        let work_tx = match (&self.state, &self.work_tx) {
            (PoolState::Open, Some(work_tx)) => work_tx,
            _ => return Err(ConversionError::PoolClosed),
        };

        let (result_tx, result_rx) = oneshot::channel();
        work_tx
            .send((item, result_tx))
            .await
            .map_err(|_| ConversionError::PoolClosed)?;

        Ok(TaskHandle::new(item, result_rx))
    }

    /// シャットダウンを要求し、全ワーカーの終了を待つ
    ///
    /// 投入済みの作業が完走してから Closed に遷移する。複数回呼んでも
    /// 安全で、2回目以降は何もしない。
    pub async fn shutdown(&mut self) -> ConversionResult<()> {
        if self.state == PoolState::Closed {
            return Ok(());
        }
        self.state = PoolState::ShuttingDown;

        // 送信側を破棄してワーカーに終了を通知
        self.work_tx.take();

        for worker in self.workers.drain(..) {
            worker
                .await
                .map_err(ConversionError::worker_join)?
                .map_err(ConversionError::worker_failed)?;
        }

        self.state = PoolState::Closed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::CelsiusToFahrenheit;
    use crate::processing::config::DefaultPoolConfig;
    use crate::processing::types::TaskOutcome;

    fn instant_pool(config: &DefaultPoolConfig) -> WorkerPool {
        WorkerPool::new(Arc::new(CelsiusToFahrenheit::instant()), config).unwrap()
    }

    #[tokio::test]
    async fn test_submit_and_collect_single_item() {
        let config = DefaultPoolConfig::default();
        let mut pool = instant_pool(&config);

        let handle = pool.submit(WorkItem::new(0, 100.0)).await.unwrap();
        let outcome = handle.wait().await;

        match outcome {
            TaskOutcome::Converted { fahrenheit, .. } => assert_eq!(fahrenheit, 212.0),
            TaskOutcome::Failed { .. } => panic!("成功結果が期待されます"),
        }

        pool.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_state_transitions() {
        let config = DefaultPoolConfig::default();
        let mut pool = instant_pool(&config);

        assert_eq!(pool.state(), PoolState::Open);

        pool.shutdown().await.unwrap();
        assert_eq!(pool.state(), PoolState::Closed);
    }

    #[tokio::test]
    async fn test_submit_after_shutdown_is_rejected() {
        let config = DefaultPoolConfig::default();
        let mut pool = instant_pool(&config);

        pool.shutdown().await.unwrap();

        let result = pool.submit(WorkItem::new(0, 0.0)).await;
        assert!(matches!(result, Err(ConversionError::PoolClosed)));
    }

    #[tokio::test]
    async fn test_shutdown_is_idempotent() {
        let config = DefaultPoolConfig::default();
        let mut pool = instant_pool(&config);

        pool.shutdown().await.unwrap();
        pool.shutdown().await.unwrap();

        assert_eq!(pool.state(), PoolState::Closed);
    }

    #[tokio::test]
    async fn test_queued_items_drain_during_shutdown() {
        let config = DefaultPoolConfig::default();
        let mut pool = instant_pool(&config);

        let mut handles = Vec::new();
        for index in 0..6 {
            handles.push(
                pool.submit(WorkItem::new(index, index as f64))
                    .await
                    .unwrap(),
            );
        }

        // シャットダウン後も投入済みの作業は全件結果を返す
        pool.shutdown().await.unwrap();

        for (index, handle) in handles.into_iter().enumerate() {
            let outcome = handle.wait().await;
            assert!(outcome.is_converted());
            assert_eq!(outcome.item().index, index);
        }
    }

    #[tokio::test]
    async fn test_zero_worker_config_is_rejected() {
        let config = DefaultPoolConfig::new().with_worker_count(0);

        let result = WorkerPool::new(Arc::new(CelsiusToFahrenheit::instant()), &config);

        assert!(matches!(result, Err(ConversionError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_zero_buffer_config_is_rejected() {
        let config = DefaultPoolConfig::new().with_buffer_size(0);

        let result = WorkerPool::new(Arc::new(CelsiusToFahrenheit::instant()), &config);

        assert!(matches!(result, Err(ConversionError::Configuration { .. })));
    }
}
