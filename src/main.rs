use temp_converter::{
    CelsiusToFahrenheit, ConsoleProgressReporter, ConsoleTableRenderer, ConversionEngine,
    DefaultPoolConfig,
};

/// 変換対象の温度リスト（摂氏）
const TEMPERATURAS_CELSIUS: [f64; 7] = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 100.0];

#[tokio::main]
async fn main() {
    // 変換エンジン構築: ワーカー2つの固定プール、行単位のコンソール出力
    let engine = ConversionEngine::new(
        CelsiusToFahrenheit::new(),
        DefaultPoolConfig::default(),
        ConsoleProgressReporter::new(),
        ConsoleTableRenderer::new(),
    );

    if let Err(error) = engine.convert_batch(&TEMPERATURAS_CELSIUS).await {
        eprintln!("❌ エラー: {error}");
        std::process::exit(1);
    }
}
