use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "text-grabber")]
#[command(about = "画像からテキストと説明を抽出するOCRクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像1枚からテキストと説明を抽出
    Extract {
        /// 画像ファイル（JPG/PNG/WEBP、最大5MB）
        #[arg(required = true)]
        image: PathBuf,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// タイムアウト秒数（省略時は設定値）
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// 対話式で画像の選択・抽出・クリアを行う
    Interactive {
        /// タイムアウト秒数（省略時は設定値）
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// 設定を表示/編集
    Config {
        /// 抽出APIのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
