// 温度リストを固定サイズのワーカープールで並列変換するライブラリ
// 変換バックエンドと処理パイプラインをトレイトで分離した構成

pub mod conversion;
pub mod processing;

pub use conversion::{celsius_to_fahrenheit, CelsiusToFahrenheit, ConversionBackend};
pub use processing::{
    BatchSummary, ConsoleProgressReporter, ConsoleTableRenderer, ConversionEngine,
    ConversionError, ConversionResult, DefaultPoolConfig, MemoryTableRenderer,
    NoOpProgressReporter, PoolConfig, PoolState, ProgressReporter, TableRenderer, TaskHandle,
    TaskOutcome, WorkItem, WorkerPool,
};
