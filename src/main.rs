//! Hieroko - 한국어→상형문자 변환 게이트웨이 서버

use hieroko::config::{load_config, server_addr, GatewayConfig};
use hieroko::gateway::run_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 로깅 초기화 (기본 info 레벨)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 설정 로드
    let config = load_config();
    let gateway = GatewayConfig::from_env();
    if gateway.api_key.is_none() {
        log::warn!("DEEPL_API_KEY가 설정되지 않아 번역 요청이 거부됩니다");
    }

    run_server(gateway, config.request_timeout(), server_addr()).await
}
