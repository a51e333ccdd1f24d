use clap::Parser;
use coffee_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 和配置
    dotenv::dotenv().ok();
    let config = Config::parse();
    config.validate()?;

    // 2. 初始化日志
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );

    print_banner();
    tracing::info!(environment = %config.environment, "☕ Coffee server starting...");

    // 3. 打开数据目录并初始化服务器状态
    let state = ServerState::initialize(config.clone())?;

    // 4. 启动 HTTP 服务器
    if let Err(e) = Server::new(config, state).run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
