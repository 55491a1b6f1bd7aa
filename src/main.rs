use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use text_grabber::{cli, config, error, extractor, interactive, logging, preview, session, ui};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, TextGrabberError};
use extractor::HttpExtractor;
use session::Session;
use text_grabber_common::{EndpointConfig, ExtractionResult, NoPreview, BASE_URL_ENV};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", ui::format_error(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // 環境変数は起動時に一度だけ読む
    let config = Config::load()?.with_env_override(std::env::var(BASE_URL_ENV).ok());

    match cli.command {
        Commands::Extract { image, json, timeout } => {
            let endpoint = endpoint_with_timeout(&config, timeout)?;
            let mut session = Session::new(
                HttpExtractor::new(endpoint.clone()),
                NoPreview,
                endpoint.timeout,
            );

            let selected = session.select_path(&image);
            ui::print_notifications(&session.take_notifications());
            selected?;

            let pb = if json { None } else { Some(ui::spinner("Extracting...")) };
            session.extract().await;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            let result = session
                .result()
                .cloned()
                .ok_or_else(|| TextGrabberError::Extraction("結果がありません".into()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                ui::print_notifications(&session.take_notifications());
                ui::print_result(&result);
            }

            if let ExtractionResult::Failed { message } = result {
                return Err(TextGrabberError::Extraction(message));
            }
        }

        Commands::Interactive { timeout } => {
            println!("📝 text-grabber - 対話モード\n");

            let endpoint = endpoint_with_timeout(&config, timeout)?;
            println!("抽出API: {}\n", endpoint.endpoint_url());

            let previews = preview::ThumbnailPreviews::in_temp_dir()?;
            println!("プレビュー保存先: {}\n", previews.dir().display());
            let mut session = Session::new(
                HttpExtractor::new(endpoint.clone()),
                previews,
                endpoint.timeout,
            );
            interactive::run_interactive(&mut session).await?;
        }

        Commands::Config { set_base_url, set_timeout, show } => {
            let mut config = Config::load()?;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                changed = true;
                println!("✔ ベースURLを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                changed = true;
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show {
                let env_url = std::env::var(BASE_URL_ENV).ok();
                println!("設定:");
                println!("  ベースURL: {}", config.base_url.as_deref().unwrap_or("未設定"));
                if let Some(url) = env_url {
                    println!("  ベースURL（{}）: {}", BASE_URL_ENV, url);
                }
                println!("  パス: {}", config.extract_path);
                println!("  フィールド名: {}", config.field_name);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

fn endpoint_with_timeout(config: &Config, timeout: Option<u64>) -> Result<EndpointConfig> {
    let endpoint = config.endpoint()?;
    Ok(match timeout {
        Some(seconds) => endpoint.with_timeout(Duration::from_secs(seconds.max(1))),
        None => endpoint,
    })
}
