// 結果テーブルの描画

use super::types::TaskOutcome;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// テーブルの罫線・見出し行（全行27文字幅）
pub const TABLE_TOP: &str = "╔═══════════╦═════════════╗";
pub const TABLE_HEADING: &str = "║  Celsius  ║  Fahrenheit ║";
pub const TABLE_SEPARATOR: &str = "╠═══════════╬═════════════╣";
pub const TABLE_BOTTOM: &str = "╚═══════════╩═════════════╝";

/// 成功した変換の1行を整形（両列とも右寄せ・小数1桁）
pub fn format_table_row(celsius: f64, fahrenheit: f64) -> String {
    format!("║   {celsius:>6.1}  ║    {fahrenheit:>6.1}   ║")
}

/// 失敗したアイテムのエラー行を整形
pub fn format_error_row(message: &str) -> String {
    format!("Error al obtener el resultado: {message}")
}

/// 結果の表示先を切り替える行単位の出力
fn format_outcome(outcome: &TaskOutcome) -> String {
    match outcome {
        TaskOutcome::Converted { item, fahrenheit } => {
            format_table_row(item.celsius, *fahrenheit)
        }
        TaskOutcome::Failed { error, .. } => format_error_row(&error.to_string()),
    }
}

/// 結果テーブル描画の抽象化トレイト
///
/// コレクタが投入順に1行ずつ呼び出す。
#[async_trait]
pub trait TableRenderer: Send + Sync {
    /// 見出し部分の描画
    async fn render_header(&self);

    /// 1アイテム分の行の描画
    async fn render_row(&self, outcome: &TaskOutcome);

    /// 罫線下部の描画
    async fn render_footer(&self);
}

/// 標準出力へのテーブル描画実装
#[derive(Debug, Default)]
pub struct ConsoleTableRenderer;

impl ConsoleTableRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TableRenderer for ConsoleTableRenderer {
    async fn render_header(&self) {
        println!("{TABLE_TOP}");
        println!("{TABLE_HEADING}");
        println!("{TABLE_SEPARATOR}");
    }

    async fn render_row(&self, outcome: &TaskOutcome) {
        println!("{}", format_outcome(outcome));
    }

    async fn render_footer(&self) {
        println!("{TABLE_BOTTOM}\n");
    }
}

/// メモリ内に行を蓄積する描画実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct MemoryTableRenderer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryTableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// これまでに描画された行を取得
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// 見出しと罫線を除いた結果行のみを取得
    pub fn body_lines(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| {
                line != TABLE_TOP
                    && line != TABLE_HEADING
                    && line != TABLE_SEPARATOR
                    && line != TABLE_BOTTOM
            })
            .collect()
    }
}

#[async_trait]
impl TableRenderer for MemoryTableRenderer {
    async fn render_header(&self) {
        let mut lines = self.lines.lock().unwrap();
        lines.push(TABLE_TOP.to_string());
        lines.push(TABLE_HEADING.to_string());
        lines.push(TABLE_SEPARATOR.to_string());
    }

    async fn render_row(&self, outcome: &TaskOutcome) {
        self.lines.lock().unwrap().push(format_outcome(outcome));
    }

    async fn render_footer(&self) {
        self.lines.lock().unwrap().push(TABLE_BOTTOM.to_string());
    }
}
