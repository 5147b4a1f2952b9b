// Worker - 並列ワーカー機能

use crate::conversion::ConversionBackend;
use crate::processing::error::ConversionError;
use crate::processing::types::{TaskOutcome, WorkItem};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Semaphore};

/// 作業キューを流れる1件分のリクエスト
///
/// ワーカーは結果を対応するoneshotチャンネルへ一度だけ書き込む。
pub(crate) type WorkRequest = (WorkItem, oneshot::Sender<TaskOutcome>);

/// 単一ワーカータスク
pub(crate) fn spawn_single_worker<B>(
    backend: Arc<B>,
    work_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<WorkRequest>>>,
    semaphore: Arc<Semaphore>,
) -> tokio::task::JoinHandle<Result<()>>
where
    B: ConversionBackend + 'static,
{
    tokio::spawn(async move {
        loop {
            // 次の作業を取得
            let (item, result_tx) = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(request) => request,
                    None => break, // チャンネル終了
                }
            };

            // セマフォで同時実行数制御
            let _permit = semaphore
                .acquire()
                .await
                .map_err(|e| anyhow::anyhow!("セマフォエラー: {e}"))?;

            // 変換実行。失敗してもワーカーは止めず、失敗結果として書き込む
            let outcome = match backend.convert(item.celsius).await {
                Ok(fahrenheit) => TaskOutcome::Converted { item, fahrenheit },
                Err(error) => TaskOutcome::Failed {
                    item,
                    error: ConversionError::task_execution(error),
                },
            };

            // 結果送信。待機側がハンドルを破棄していた場合は次の作業へ
            let _ = result_tx.send(outcome);
        }
        Ok(())
    })
}

/// ワーカープール分のタスクを起動
pub(crate) fn spawn_workers<B>(
    backend: Arc<B>,
    work_rx: mpsc::Receiver<WorkRequest>,
    semaphore: Arc<Semaphore>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<Result<()>>>
where
    B: ConversionBackend + 'static,
{
    let work_rx = Arc::new(tokio::sync::Mutex::new(work_rx));
    let mut handles = Vec::new();

    for _ in 0..worker_count {
        let handle = spawn_single_worker(backend.clone(), work_rx.clone(), semaphore.clone());
        handles.push(handle);
    }

    handles
}
