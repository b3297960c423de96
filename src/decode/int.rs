use crate::{BdecodeError, BdecodeResult, ValueKind};

use super::{commons::limits::MAX_INT_DIGITS, utils::skip_digits};

/// 解析 `i<整数>e` ，成功后 pos 指向 'e' 之后的字节。
///
/// 只接受规范形式：不允许多余的前导零，不允许 `-0` 。
pub(crate) fn parse_int(buffer: &[u8], pos: &mut usize) -> BdecodeResult<i64> {
    let start = *pos;
    let end = buffer.len();

    match buffer.get(start) {
        Some(b'i') => (),
        Some(_) => {
            return Err(BdecodeError::ExpectedMarker {
                pos: start,
                kind: ValueKind::Int,
            })
        }
        None => return Err(BdecodeError::UnexpectedEof(start)),
    }

    // +1 is to skip the 'i'
    let mut digits_start = start + 1;
    let negative = buffer.get(digits_start) == Some(&b'-');
    if negative {
        digits_start += 1;
    }

    let digits_end = skip_digits(buffer, digits_start);
    match buffer.get(digits_end) {
        Some(b'e') => (),
        Some(_) => return Err(BdecodeError::ExpectedDigit(digits_end)),
        None => return Err(BdecodeError::UnexpectedEof(end)),
    }

    let digits = &buffer[digits_start..digits_end];
    if digits.is_empty() {
        // "ie" or "i-e"
        return Err(BdecodeError::ExpectedDigit(digits_end));
    }
    if digits[0] == b'0' && (digits.len() > 1 || negative) {
        return Err(BdecodeError::InvalidInteger(start));
    }
    if digits.len() > MAX_INT_DIGITS {
        return Err(BdecodeError::IntegerOverflow(start));
    }

    // 负数按负方向累加，这样 i64::MIN 也能表示
    let mut val: i64 = 0;
    for t in digits {
        let digit = i64::from(t - b'0');
        let next = val.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        });

        val = next.ok_or(BdecodeError::IntegerOverflow(start))?;
    }

    // skip 'e'
    *pos = digits_end + 1;

    Ok(val)
}
