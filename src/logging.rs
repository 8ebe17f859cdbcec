use tracing_subscriber::EnvFilter;

/// `RUST_LOG`가 있으면 그대로, 없으면 verbose 여부와 설정값으로 필터를 정한다.
pub fn filter_directive(verbose: bool, config_level: &str) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "fryflip=debug".to_string()
        } else {
            format!("fryflip={config_level}")
        }
    })
}

/// 전역 로그 구독자를 설치한다. 이미 설치되어 있으면 무시한다.
pub fn init(verbose: bool, config_level: &str) {
    let directive = filter_directive(verbose, config_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("fryflip=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
