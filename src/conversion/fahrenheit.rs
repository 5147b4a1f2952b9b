// 摂氏から華氏への変換バックエンド

use super::ConversionBackend;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 変換の計算時間をシミュレートするデフォルトの遅延
pub const DEFAULT_WORK_DELAY: Duration = Duration::from_millis(100);

/// 変換式: F = C * 9/5 + 32
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// 摂氏→華氏の変換バックエンド
///
/// 実際の計算コストを模擬するため、変換前に固定遅延を挟む。
/// 遅延は設定パラメータであり、変換結果には影響しない。
#[derive(Debug, Clone)]
pub struct CelsiusToFahrenheit {
    work_delay: Duration,
}

impl CelsiusToFahrenheit {
    /// デフォルト遅延(100ms)のバックエンドを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した遅延のバックエンドを作成
    pub fn with_delay(work_delay: Duration) -> Self {
        Self { work_delay }
    }

    /// 遅延なしのバックエンドを作成（テスト・ベンチマーク用）
    pub fn instant() -> Self {
        Self {
            work_delay: Duration::ZERO,
        }
    }

    /// 設定されている遅延を取得
    pub fn work_delay(&self) -> Duration {
        self.work_delay
    }
}

impl Default for CelsiusToFahrenheit {
    fn default() -> Self {
        Self {
            work_delay: DEFAULT_WORK_DELAY,
        }
    }
}

#[async_trait]
impl ConversionBackend for CelsiusToFahrenheit {
    async fn convert(&self, celsius: f64) -> Result<f64> {
        if !self.work_delay.is_zero() {
            tokio::time::sleep(self.work_delay).await;
        }
        Ok(celsius_to_fahrenheit(celsius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_known_values() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(10.0), 50.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        // -40度は摂氏と華氏が一致する点
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_formula_fractional_input() {
        let result = celsius_to_fahrenheit(37.0);
        assert!((result - 98.6).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_backend_returns_formula_value() {
        let backend = CelsiusToFahrenheit::instant();

        let result = backend.convert(20.0).await.unwrap();

        assert_eq!(result, 68.0);
    }

    #[tokio::test]
    async fn test_backend_applies_configured_delay() {
        let backend = CelsiusToFahrenheit::with_delay(Duration::from_millis(20));
        let start = std::time::Instant::now();

        let result = backend.convert(0.0).await.unwrap();

        assert_eq!(result, 32.0);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_backend_constructors() {
        assert_eq!(CelsiusToFahrenheit::new().work_delay(), DEFAULT_WORK_DELAY);
        assert_eq!(CelsiusToFahrenheit::instant().work_delay(), Duration::ZERO);
        assert_eq!(
            CelsiusToFahrenheit::with_delay(Duration::from_millis(5)).work_delay(),
            Duration::from_millis(5)
        );
    }
}
