use clap::Parser;
use vacancy_stats::adapters::http::build_client;
use vacancy_stats::utils::logger;
use vacancy_stats::{
    CliConfig, HeadHunterProvider, StatsConfig, StatsEngine, StatsError, SuperJobProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 只補上尚未設定的環境變數，必須在解析參數前載入
    dotenv::dotenv().ok();

    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting vacancy-stats");

    // 驗證配置，缺少 SJ_API_KEY 時在任何請求之前結束
    let config = match StatsConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    tracing::debug!(
        "Languages: {:?}, concurrency: {}, timeout: {:?}",
        config.languages,
        config.concurrent_requests,
        config.request_timeout_seconds
    );

    if let Err(e) = run(config).await {
        exit_with(e);
    }

    tracing::info!("✅ Both reports printed");
    Ok(())
}

async fn run(config: StatsConfig) -> vacancy_stats::Result<()> {
    let client = build_client(&config)?;
    let headhunter = HeadHunterProvider::new(client.clone(), config.headhunter.clone());
    let superjob = SuperJobProvider::new(client, config.superjob.clone())?;

    let engine = StatsEngine::new(config);
    let mut stdout = std::io::stdout();

    // HeadHunter 的表格先印出，SuperJob 失敗時不會遺失
    engine.report(&headhunter, &mut stdout).await?;
    engine.report(&superjob, &mut stdout).await?;

    Ok(())
}

fn exit_with(e: StatsError) -> ! {
    tracing::error!(
        "❌ vacancy-stats failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
