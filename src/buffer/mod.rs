mod store;

pub use store::{ByteStore, GROWTH_FILL};

use thiserror::Error;

use crate::hex::HexError;

/// バッファ操作のエラー
#[derive(Debug, Error)]
pub enum BufferError {
    /// ファイルI/Oの失敗
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 範囲外への書き込み（Strictポリシー時のみ）
    #[error("write past end of buffer: offset {0:#X}")]
    OutOfBounds(usize),
    /// 入力の書式エラー
    #[error(transparent)]
    Format(#[from] HexError),
}

/// 範囲外書き込みの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// バッファを自動拡張する（隙間はゼロ埋め）
    #[default]
    Extend,
    /// 範囲外への書き込みをエラーにする
    Strict,
}
