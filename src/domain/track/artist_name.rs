//! Artist Name Parser
//!
//! 将原始艺人字符串拆分为主艺人与 feat. 后缀，用于 Spotify 解析

/// 合作艺人标记（大小写不敏感，按顺序尝试）
const FEATURING_SEPARATORS: [&str; 3] = [" feat. ", " ft. ", " featuring "];

/// 并列艺人分隔符（大小写敏感）
const CO_ARTIST_SEPARATORS: [&str; 2] = [" & ", " / "];

/// 解析主艺人
///
/// 返回 `(primary, featuring)`:
/// - feat. / ft. / featuring 优先于 & 和 /，即使后者出现得更早
/// - featuring 保留原始大小写，从分隔符开始截取
/// - 按 & 或 / 拆分时 featuring 为空
pub fn parse_primary_artist(artist: &str) -> (&str, &str) {
    let artist = artist.trim();
    if artist.is_empty() {
        return ("", "");
    }

    for sep in FEATURING_SEPARATORS {
        if let Some(i) = find_ignore_ascii_case(artist, sep) {
            return (artist[..i].trim(), artist[i..].trim());
        }
    }

    for sep in CO_ARTIST_SEPARATORS {
        if let Some(i) = artist.find(sep) {
            return (artist[..i].trim(), "");
        }
    }

    (artist, "")
}

/// 分隔符均为 ASCII 且以空格开头，匹配位置必然落在字符边界上
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
