use std::{
    borrow::{Borrow, Cow},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use bytes::Bytes;

use crate::decode::utils::escape_string;

use super::TextEncoding;

/// bencoded 字符串
///
/// 存放原始字节以及用于显示的文本编码。相等、排序和哈希都只比较原始字节，
/// 按文本比较请使用 [`ByteString::eq_text`]。
#[derive(Clone, Default)]
pub struct ByteString {
    bytes: Bytes,
    encoding: TextEncoding,
}

impl ByteString {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self::with_encoding(bytes, TextEncoding::default())
    }

    pub fn with_encoding(bytes: impl Into<Bytes>, encoding: TextEncoding) -> Self {
        Self {
            bytes: bytes.into(),
            encoding,
        }
    }

    /// 按指定编码把文本转换为字符串，无法表示的字符写为 `?`
    pub fn from_text(text: &str, encoding: TextEncoding) -> Self {
        Self::with_encoding(encoding.encode(text), encoding)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_text(&self) -> Cow<'_, str> {
        self.encoding.decode(&self.bytes)
    }

    /// 按本字符串的编码与文本比较
    pub fn eq_text(&self, text: &str) -> bool {
        self.to_text() == text
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for ByteString {}

impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

// 与 Hash/Ord 一致，允许 BTreeMap<ByteString, _> 直接用 &[u8] 查找
impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool {
        self.eq_text(other)
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.eq_text(other)
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl From<&str> for ByteString {
    fn from(value: &str) -> Self {
        Self::new(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for ByteString {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl From<&[u8]> for ByteString {
    fn from(value: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(value))
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<Bytes> for ByteString {
    fn from(value: Bytes) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", escape_string(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_equality_over_bytes() {
        let a = ByteString::with_encoding(&b"spam"[..], TextEncoding::Utf8);
        let b = ByteString::with_encoding(&b"spam"[..], TextEncoding::Latin1);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_text_equality() {
        // "æøå" in latin1
        let latin1 = ByteString::with_encoding(vec![230, 248, 229], TextEncoding::Latin1);
        assert_eq!(latin1, ByteString::from_text("æøå", TextEncoding::Latin1));
        assert!(latin1.eq_text("æøå"));
        assert!(latin1 == "æøå");

        let utf8 = ByteString::with_encoding(vec![230, 248, 229], TextEncoding::Utf8);
        assert!(!utf8.eq_text("æøå"));
        assert_eq!(latin1, utf8);
    }

    #[test]
    fn test_ordering() {
        let mut keys = vec![
            ByteString::from("spam"),
            ByteString::from("cow"),
            ByteString::from("co"),
        ];
        keys.sort();
        assert_eq!(b"co", keys[0].as_bytes());
        assert_eq!(b"spam", keys[2].as_bytes());
    }

    #[test]
    fn test_debug_escapes() {
        let s = ByteString::from(vec![b'a', 0x04, b'"']);
        assert_eq!(r#"b"a\x04\x22""#, format!("{:?}", s));
        assert_eq!("0:", format!("{}:", ByteString::default().len()));
    }
}
