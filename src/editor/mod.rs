use std::path::{Path, PathBuf};

use crate::buffer::{BufferError, ByteStore, GrowthPolicy};
use crate::hex::HexLike;

/// 1つのファイルに束縛された編集用ファサード
///
/// 構築時にファイルを読み込み、書き込みのたびに保存する。
pub struct BinaryEditor {
    /// 読み込み元のファイルパス
    path: PathBuf,
    /// バイトストア
    store: ByteStore,
}

impl BinaryEditor {
    /// ファイルを開いてエディタを作成（読み込みに失敗したらエラー）
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BufferError> {
        Self::open_with_policy(path, GrowthPolicy::default())
    }

    /// 範囲外書き込みポリシーを指定して開く
    pub fn open_with_policy(
        path: impl Into<PathBuf>,
        growth: GrowthPolicy,
    ) -> Result<Self, BufferError> {
        let path = path.into();
        let mut store = ByteStore::with_policy(growth);
        store.load(&path)?;
        Ok(Self { path, store })
    }

    /// 開始アドレスを"0x"付き8桁HEXで返す（現状は常に"0x00000000"）
    pub fn start_address(&self) -> String {
        format!("0x{:08X}", self.store.start_address())
    }

    /// バッファの長さを取得
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// バッファが空かどうか
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// 指定アドレスから`length`バイトをHEX文字列で読む
    pub fn read(
        &self,
        address: impl Into<HexLike>,
        length: impl Into<HexLike>,
    ) -> Result<String, BufferError> {
        self.store.read(address, length)
    }

    /// 指定アドレスの1バイトをHEX文字列で読む
    pub fn read_at(&self, address: impl Into<HexLike>) -> Result<String, BufferError> {
        self.store.read(address, 1usize)
    }

    /// 書き込んで即保存する
    ///
    /// `output`が`None`なら読み込み元のファイルを上書きする。
    pub fn write(
        &mut self,
        address: impl Into<HexLike>,
        data: impl Into<HexLike>,
        output: Option<&Path>,
    ) -> Result<(), BufferError> {
        self.store.write(address, data)?;
        self.save_to(output)
    }

    /// バイト列をそのままの幅で書き込んで即保存する
    pub fn write_bytes(
        &mut self,
        address: usize,
        bytes: &[u8],
        output: Option<&Path>,
    ) -> Result<(), BufferError> {
        self.store.write_bytes(address, bytes)?;
        self.save_to(output)
    }

    /// 読み込み元のファイルパスを取得
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_to(&mut self, output: Option<&Path>) -> Result<(), BufferError> {
        match output {
            Some(p) => self.store.save(p),
            None => self.store.save(&self.path),
        }
    }
}
