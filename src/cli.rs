use clap::{Parser, Subcommand};
use inspection_report_common::ParsePolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inspection-report")]
#[command(about = "点検写真ZIPから住戸ごとの点検記録(docx)を生成するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ZIPを展開・解析し、レビュー後に点検記録ZIPを生成
    Run {
        /// 写真ZIPファイル
        #[arg(required = true)]
        archive: PathBuf,

        /// 出力ZIP（デフォルト: 設定の output_name）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ファイル名の解析ルール (basic/short-forms/placeholder)
        #[arg(short, long)]
        policy: Option<ParsePolicy>,

        /// 生成前に表を対話式で確認・編集
        #[arg(short, long)]
        review: bool,

        /// ドキュメントタイトル
        #[arg(short, long)]
        title: Option<String>,

        /// 写真の表示幅（inch）
        #[arg(long)]
        image_width: Option<f32>,

        /// 最終的な表をJSONで保存
        #[arg(long)]
        table_out: Option<PathBuf>,
    },

    /// ファイル名の解析結果を表示
    Parse {
        /// ファイル名
        #[arg(required = true)]
        filenames: Vec<String>,

        /// 解析ルール (basic/short-forms/placeholder)
        #[arg(short, long)]
        policy: Option<ParsePolicy>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 空のテンプレート(docx)を書き出す
    Template {
        /// 出力ファイル
        #[arg(short, long, default_value = "template.docx")]
        output: PathBuf,

        /// ドキュメントタイトル
        #[arg(short, long)]
        title: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 解析ルールを保存
        #[arg(long)]
        set_policy: Option<ParsePolicy>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
