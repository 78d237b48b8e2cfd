//! 点検記録ジェネレータ
//!
//! 写真ZIP → ファイル名解析 → レビュー → 住戸ごとのdocx → ZIP

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod review;
pub mod scanner;
pub mod session;
