use bytes::Bytes;

use crate::{BdecodeError, BdecodeResult, ByteString, TextEncoding};

use super::{
    commons::limits::{MAX_LENGTH_DIGITS, MAX_STR_LEN, MIN_STR_ENCODED_LEN},
    utils::{parse_uint, skip_digits},
};

/// 解析 `<长度>:<内容>` 形式的字符串，成功后 pos 指向内容之后的第一个字节。
///
/// 内容之后多余的字节不做处理，交给调用方决定。
pub(crate) fn parse_str(
    buffer: &[u8],
    pos: &mut usize,
    encoding: TextEncoding,
) -> BdecodeResult<ByteString> {
    let start = *pos;
    let end = buffer.len();

    let Some(t) = buffer.get(start) else {
        return Err(BdecodeError::UnexpectedEof(start));
    };
    if !t.is_ascii_digit() {
        return Err(BdecodeError::ExpectedDigit(start));
    }

    if end - start < MIN_STR_ENCODED_LEN {
        return Err(BdecodeError::UnexpectedEof(end));
    }

    // eg: "10:abcdefghij2:kl"
    //      ^ ^^
    //      | |content_start(3)
    //      | colon(2)
    //      start(0)
    let colon = skip_digits(buffer, start);

    // 长度数字超过上限时不再看后面是否有 ':'
    let digits = colon - start;
    if digits > MAX_LENGTH_DIGITS {
        return Err(BdecodeError::LengthDigitsExceeded {
            pos: start,
            digits,
            limit: MAX_LENGTH_DIGITS,
        });
    }

    match buffer.get(colon) {
        Some(b':') => (),
        Some(_) => return Err(BdecodeError::ExpectedColon(colon)),
        None => return Err(BdecodeError::ExpectedColon(end)),
    }

    // 不超过 10 位数字，不会溢出 u64
    let len = parse_uint(&buffer[start..colon]).unwrap_or(u64::MAX);
    if len > MAX_STR_LEN {
        return Err(BdecodeError::LengthExceeded {
            pos: start,
            limit: MAX_STR_LEN as usize,
        });
    }
    let len = len as usize;

    let content_start = colon + 1;
    if end - content_start < len {
        return Err(BdecodeError::UnexpectedEof(end));
    }

    let content_end = content_start + len;
    *pos = content_end;

    Ok(ByteString::with_encoding(
        Bytes::copy_from_slice(&buffer[content_start..content_end]),
        encoding,
    ))
}
