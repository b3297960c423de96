use std::borrow::Cow;

/// 字符串的文本编码
///
/// 只影响 [`ByteString`](crate::ByteString) 转为文本、以及按文本比较时的行为，
/// 不影响存储的原始字节，也不影响解析语法。
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1, 每个字节对应 U+0000..=U+00FF 中的一个字符
    Latin1,
    Ascii,
}

impl TextEncoding {
    /// 按当前编码把原始字节转为文本，无法解码的字节替换为 U+FFFD
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes),
            TextEncoding::Latin1 => {
                if bytes.is_ascii() {
                    // ascii 子集与 utf-8 相同
                    Cow::Borrowed(std::str::from_utf8(bytes).unwrap_or_default())
                } else {
                    Cow::Owned(bytes.iter().map(|b| char::from(*b)).collect())
                }
            }
            TextEncoding::Ascii => {
                if bytes.is_ascii() {
                    Cow::Borrowed(std::str::from_utf8(bytes).unwrap_or_default())
                } else {
                    Cow::Owned(
                        bytes
                            .iter()
                            .map(|b| if b.is_ascii() { char::from(*b) } else { char::REPLACEMENT_CHARACTER })
                            .collect(),
                    )
                }
            }
        }
    }

    /// 按当前编码把文本转为字节，无法表示的字符写为 `?`
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
            TextEncoding::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
        }
    }

    pub fn parse_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Some(TextEncoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Some(TextEncoding::Latin1),
            "ascii" | "us-ascii" => Some(TextEncoding::Ascii),
            _ => None,
        }
    }
}
