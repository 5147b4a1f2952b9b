// プール設定の管理

/// ワーカープール設定を抽象化するトレイト
pub trait PoolConfig: Send + Sync {
    /// ワーカータスク数を取得
    fn worker_count(&self) -> usize;

    /// 作業キューのバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;
}

/// デフォルト設定実装
///
/// ワーカー数は2で固定的に始まり、必要に応じてビルダーで変更できる。
#[derive(Debug, Clone)]
pub struct DefaultPoolConfig {
    worker_count: usize,
    buffer_size: usize,
}

impl DefaultPoolConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }
}

impl Default for DefaultPoolConfig {
    fn default() -> Self {
        Self {
            worker_count: 2,
            buffer_size: 32,
        }
    }
}

impl PoolConfig for DefaultPoolConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }
}
