use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 로그 구독자를 초기화한다. `RUST_LOG`가 있으면 그 값을 우선한다.
/// 출력은 stderr로 보내 CLI 결과(stdout)와 섞이지 않게 한다.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "rent_buy_calculator=debug,info"
    } else {
        "rent_buy_calculator=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
