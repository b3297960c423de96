use std::collections::BTreeMap;

use crate::{BdecodeError, BdecodeResult, ByteString, Value, ValueKind};

use super::{str::parse_str, Decoder};

/// 解析 `d(<字符串 key><值>)*e` 。
///
/// 默认要求 key 严格按字节序升序且不重复，可以通过 [`Strictness`](super::Strictness) 放宽。
pub(crate) fn parse_dict(
    decoder: &Decoder,
    buffer: &[u8],
    pos: &mut usize,
    depth: usize,
) -> BdecodeResult<BTreeMap<ByteString, Value>> {
    let start = *pos;

    match buffer.get(start) {
        Some(b'd') => (),
        Some(_) => {
            return Err(BdecodeError::ExpectedMarker {
                pos: start,
                kind: ValueKind::Dict,
            })
        }
        None => return Err(BdecodeError::UnexpectedEof(start)),
    }
    decoder.check_depth(start, depth)?;

    // skip 'd'
    *pos += 1;

    let strictness = decoder.strictness();
    let mut dict = BTreeMap::new();
    loop {
        let key_pos = *pos;
        match buffer.get(key_pos) {
            None => return Err(BdecodeError::UnexpectedEof(key_pos)),
            Some(b'e') => {
                *pos += 1;
                return Ok(dict);
            }
            // key 只能是字符串
            Some(t) if !t.is_ascii_digit() => return Err(BdecodeError::ExpectedDigit(key_pos)),
            Some(_) => (),
        }

        let key = parse_str(buffer, pos, decoder.encoding())?;

        // 只要一直校验顺序，最大的 key 就是上一个 key
        if strictness.sorted_keys() {
            if let Some((last, _)) = dict.last_key_value() {
                if key < *last {
                    return Err(BdecodeError::UnsortedKey(key_pos));
                }
            }
        }
        if strictness.unique_keys() && dict.contains_key(&key) {
            return Err(BdecodeError::DuplicateKey(key_pos));
        }

        let value = decoder.parse_value(buffer, pos, depth + 1)?;
        dict.insert(key, value);
    }
}
