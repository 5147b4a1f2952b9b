use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

pub mod fahrenheit;

pub use fahrenheit::{celsius_to_fahrenheit, CelsiusToFahrenheit};

/// 温度変換バックエンドのトレイト
#[automock]
#[async_trait]
pub trait ConversionBackend: Send + Sync {
    /// 摂氏温度を華氏温度に変換する
    async fn convert(&self, celsius: f64) -> Result<f64>;
}

// ConversionBackend for Box<dyn ConversionBackend>
#[async_trait]
impl ConversionBackend for Box<dyn ConversionBackend> {
    async fn convert(&self, celsius: f64) -> Result<f64> {
        self.as_ref().convert(celsius).await
    }
}
