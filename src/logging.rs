use std::io::Write;

/// env_logger を初期化（RUST_LOG があればそちらを優先）
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}] {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if let Err(e) = result {
        eprintln!("logger already initialized: {}", e);
    }
}
