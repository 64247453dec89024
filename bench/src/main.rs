use clap::Parser;
use consistency_bench::args::BenchArgs;
use consistency_bench::bench_error::BenchError;
use consistency_bench::benchmark_runner::BenchmarkRunner;
use consistency_bench::log::init_logging;
use figlet_rs::FIGfont;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), BenchError> {
    let args = BenchArgs::parse();
    let _log_guard = init_logging();

    if let Ok(standard_font) = FIGfont::standard() {
        if let Some(figure) = standard_font.convert("Consistency Bench") {
            eprintln!("{figure}");
        }
    }

    info!("Starting the benchmark...");
    BenchmarkRunner::new(args).run().await?;
    info!("Finished the benchmark.");
    Ok(())
}
