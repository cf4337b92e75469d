//! リバーシ端末ゲームのエントリポイント
//! 設定読み込み、セッション作成、対話ループ起動を行う。

use std::io;

use reversegam::cli::GameSession;
use reversegam::config::Config;

/// メイン関数 - セッションの初期化と起動を担当
fn main() {
    // 設定ファイルと環境変数から統合設定を読み込み
    let config = Config::load();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = GameSession::new(config);
    if let Err(e) = session.run(&mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}
