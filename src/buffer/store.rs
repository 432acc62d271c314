use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use super::{BufferError, GrowthPolicy};
use crate::hex::{self, HexLike};

/// 自動拡張時に隙間を埋めるバイト値
pub const GROWTH_FILL: u8 = 0x00;

/// メモリ上のバイトバッファとファイルI/Oを所有する構造体
pub struct ByteStore {
    /// バッファデータ
    data: Vec<u8>,
    /// 表示用の開始アドレス（常に0、インデックスには影響しない）
    start_address: usize,
    /// 範囲外書き込みのポリシー
    growth: GrowthPolicy,
    /// 変更フラグ
    modified: bool,
}

impl ByteStore {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// ポリシーを指定して空のストアを作成
    pub fn with_policy(growth: GrowthPolicy) -> Self {
        Self {
            data: Vec::new(),
            start_address: 0,
            growth,
            modified: false,
        }
    }

    /// バイト列から作成
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            data,
            start_address: 0,
            growth: GrowthPolicy::default(),
            modified: false,
        }
    }

    /// ファイル全体を読み込み、バッファを丸ごと差し替える
    ///
    /// 未保存の編集は破棄される。
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), BufferError> {
        let mut file = File::open(path.as_ref())?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        self.data = data;
        self.modified = false;
        Ok(())
    }

    /// 指定アドレスから`length`バイトを読み、HEX文字列で返す
    ///
    /// 範囲がバッファ末尾を超える場合は存在するバイトだけに切り詰める
    /// （エラーにもパディングにもしない）。
    pub fn read(
        &self,
        address: impl Into<HexLike>,
        length: impl Into<HexLike>,
    ) -> Result<String, BufferError> {
        let addr = address.into().to_offset()?;
        let len = length.into().to_offset()?;
        let start = addr.min(self.data.len());
        let end = addr.saturating_add(len).min(self.data.len());
        Ok(hex::encode_hex(&self.data[start..end]))
    }

    /// 指定アドレスへデータを書き込む
    ///
    /// `data`は整数またはHEX文字列。書き込まれるバイト幅は数値の
    /// 最小ビッグエンディアン表現で決まる（先頭のゼロバイトは落ちる）。
    pub fn write(
        &mut self,
        address: impl Into<HexLike>,
        data: impl Into<HexLike>,
    ) -> Result<(), BufferError> {
        let addr = address.into().to_offset()?;
        let bytes = data.into().to_payload()?;
        self.write_bytes(addr, &bytes)
    }

    /// 指定アドレスへバイト列をそのままの幅で書き込む
    ///
    /// 範囲が末尾を超えた場合はポリシーに従う: Extendなら隙間を
    /// [`GROWTH_FILL`]で埋めて拡張、Strictなら変更せずエラー。
    pub fn write_bytes(&mut self, address: usize, bytes: &[u8]) -> Result<(), BufferError> {
        if bytes.is_empty() {
            return Ok(());
        }
        let end = address
            .checked_add(bytes.len())
            .ok_or(BufferError::OutOfBounds(address))?;
        if end > self.data.len() {
            match self.growth {
                GrowthPolicy::Extend => self.data.resize(end, GROWTH_FILL),
                GrowthPolicy::Strict => return Err(BufferError::OutOfBounds(end)),
            }
        }
        self.data[address..end].copy_from_slice(bytes);
        self.modified = true;
        Ok(())
    }

    /// バッファ全体をファイルへ書き出す（既存ファイルは上書き）
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), BufferError> {
        let mut file = File::create(path.as_ref())?;
        file.write_all(&self.data)?;
        self.modified = false;
        Ok(())
    }

    /// データの長さを取得
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// データが空かどうか
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 開始アドレスを取得（現状は常に0）
    pub fn start_address(&self) -> usize {
        self.start_address
    }

    /// 変更されているかどうか
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// 範囲外書き込みポリシーを取得
    pub fn policy(&self) -> GrowthPolicy {
        self.growth
    }

    /// 範囲外書き込みポリシーを設定
    pub fn set_policy(&mut self, growth: GrowthPolicy) {
        self.growth = growth;
    }

    /// 生データへの参照を取得
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Default for ByteStore {
    fn default() -> Self {
        Self::new()
    }
}
