// 並列変換処理のデータ構造定義

use super::error::ConversionError;
use tokio::sync::oneshot;

/// プールに投入される1件分の作業
///
/// 投入時に割り当てられるインデックスは出力順序の基準となる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkItem {
    /// 投入順のインデックス（0始まり）
    pub index: usize,
    /// 入力温度（摂氏）
    pub celsius: f64,
}

impl WorkItem {
    pub fn new(index: usize, celsius: f64) -> Self {
        Self { index, celsius }
    }
}

/// 1件分の作業の最終結果
///
/// ワーカーが一度だけ書き込み、コレクタが一度だけ読み取る。
#[derive(Debug)]
pub enum TaskOutcome {
    /// 変換成功
    Converted { item: WorkItem, fahrenheit: f64 },
    /// 変換失敗（エラー内容つき）
    Failed {
        item: WorkItem,
        error: ConversionError,
    },
}

impl TaskOutcome {
    /// 対応する作業アイテムを取得
    pub fn item(&self) -> WorkItem {
        match self {
            Self::Converted { item, .. } => *item,
            Self::Failed { item, .. } => *item,
        }
    }

    /// 成功したかどうか
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// 投入時に返される結果待機ハンドル
///
/// `wait`はワーカーが結果を書き込むまでブロックする。投入順に
/// `wait`することで、完了順に関係なく出力順序が保たれる。
#[derive(Debug)]
pub struct TaskHandle {
    item: WorkItem,
    result_rx: oneshot::Receiver<TaskOutcome>,
}

impl TaskHandle {
    pub(crate) fn new(item: WorkItem, result_rx: oneshot::Receiver<TaskOutcome>) -> Self {
        Self { item, result_rx }
    }

    /// 対応する作業アイテムを取得
    pub fn item(&self) -> WorkItem {
        self.item
    }

    /// 結果が書き込まれるまで待機する
    ///
    /// ワーカーが結果を返さずに消えた場合は、バッチを止めずに
    /// 待機中断エラーを持つ失敗結果に変換する。
    pub async fn wait(self) -> TaskOutcome {
        match self.result_rx.await {
            Ok(outcome) => outcome,
            Err(_) => TaskOutcome::Failed {
                item: self.item,
                error: ConversionError::collection_interrupted(
                    "ワーカーが結果を返さずに終了しました",
                ),
            },
        }
    }
}

/// バッチ処理全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub total_items: usize,
    pub converted_items: usize,
    pub error_count: usize,
    pub total_time_ms: u64,
    pub average_time_per_item_ms: f64,
}
