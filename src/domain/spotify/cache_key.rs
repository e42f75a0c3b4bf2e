//! Spotify URL 缓存 key

use sha2::{Digest, Sha256};

pub const CACHE_KEY_PREFIX: &str = "spotify.url.";

/// 截取的摘要字节数（16 个十六进制字符）
const DIGEST_PREFIX_BYTES: usize = 8;

/// 生成缓存 key
///
/// sha256(lower(artist) \0 lower(title) \0 lower(album)) 取前 8 字节
pub fn derive_cache_key(artist: &str, title: &str, album: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(artist.to_lowercase().as_bytes());
    hasher.update([0u8]);
    hasher.update(title.to_lowercase().as_bytes());
    hasher.update([0u8]);
    hasher.update(album.to_lowercase().as_bytes());
    let digest = hasher.finalize();

    let hex: String = digest[..DIGEST_PREFIX_BYTES]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect();
    format!("{}{}", CACHE_KEY_PREFIX, hex)
}
