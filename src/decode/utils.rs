/// 从 start 开始跳过连续的 ascii 数字，返回第一个非数字字节的位置(可能等于 buffer 长度)
pub(crate) fn skip_digits(buffer: &[u8], start: usize) -> usize {
    buffer[start..]
        .iter()
        .position(|t| !t.is_ascii_digit())
        .map_or(buffer.len(), |offset| start + offset)
}

/// 解析一段全部为 ascii 数字的字节，溢出 u64 时返回 None
pub(crate) fn parse_uint(digits: &[u8]) -> Option<u64> {
    let mut val: u64 = 0;

    for t in digits {
        debug_assert!(t.is_ascii_digit());

        val = val.checked_mul(10)?.checked_add(u64::from(t - b'0'))?;
    }

    Some(val)
}

pub(crate) fn gen_blanks(span: usize) -> String {
    " ".repeat(span)
}

pub fn escape_char(byte: u8) -> String {
    match byte {
        b' ' => " ".into(),
        b'"' | b'\\' => format!("\\x{:02x}", byte),
        _ if byte.is_ascii_graphic() => format!("{}", byte as char),
        _ => format!("\\x{:02x}", byte),
    }
}

pub fn escape_string(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len());
    for c in bytes.iter() {
        result.push_str(&escape_char(*c));
    }

    result
}
