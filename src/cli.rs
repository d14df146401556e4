use crate::matcher::TopK;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "company-matcher")]
#[command(about = "社名の表記揺れを参照辞書で正式名称に照合するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 社名リスト（JSON）を一括照合
    Match {
        /// 入力JSONファイル（[{"id": ..., "name": ...}, ...]）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（デフォルト: 入力ファイル名.matched.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 1社あたりの候補数
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        topk: Option<TopK>,

        /// カタログファイル（CSV/Excel）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// 対話的に1社ずつ照合
    Lookup {
        /// 1社あたりの候補数
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        topk: Option<TopK>,

        /// カタログファイル（CSV/Excel）
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 社名の正規化結果を表示
    Normalize {
        /// 社名
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// カタログ管理
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のカタログファイルを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 既定の候補数を設定
        #[arg(long, allow_negative_numbers = true)]
        set_topk: Option<i64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogAction {
    /// カタログの件数・フィンガープリントを表示
    Info {
        /// カタログファイル（CSV/Excel）
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// ディレクトリ内のカタログファイル一覧
    List {
        /// 対象ディレクトリ（省略時は data）
        dir: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "excel" | "xlsx" => Ok(OutputFormat::Excel),
            "both" => Ok(OutputFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Excel => write!(f, "excel"),
            OutputFormat::Both => write!(f, "both"),
        }
    }
}
