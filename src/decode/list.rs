use crate::{BdecodeError, BdecodeResult, Value, ValueKind};

use super::Decoder;

/// 解析 `l<值>*e` ，元素类型可以不同，每个元素都交给 dispatcher 解析。
pub(crate) fn parse_list(
    decoder: &Decoder,
    buffer: &[u8],
    pos: &mut usize,
    depth: usize,
) -> BdecodeResult<Vec<Value>> {
    let start = *pos;

    match buffer.get(start) {
        Some(b'l') => (),
        Some(_) => {
            return Err(BdecodeError::ExpectedMarker {
                pos: start,
                kind: ValueKind::List,
            })
        }
        None => return Err(BdecodeError::UnexpectedEof(start)),
    }
    decoder.check_depth(start, depth)?;

    // skip 'l'
    *pos += 1;

    let mut items = vec![];
    loop {
        match buffer.get(*pos) {
            None => return Err(BdecodeError::UnexpectedEof(*pos)),
            Some(b'e') => {
                *pos += 1;
                return Ok(items);
            }
            Some(_) => items.push(decoder.parse_value(buffer, pos, depth + 1)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ByteString;

    use super::*;

    fn parse(buffer: &[u8]) -> BdecodeResult<Vec<Value>> {
        parse_list(&Decoder::new(), buffer, &mut 0, 0)
    }

    #[test]
    fn test_parse_list() {
        let items = parse(b"l4:spam4:eggse").unwrap();
        assert_eq!(
            vec![Value::Str(ByteString::from("spam")), Value::Str(ByteString::from("eggs"))],
            items
        );

        assert!(parse(b"le").unwrap().is_empty());

        // [19, "ab", [], {"k": -1}]
        let items = parse(b"li19e2:abled1:ki-1eee").unwrap();
        assert_eq!(4, items.len());
        assert_eq!(Some(19), items[0].as_int());
        assert_eq!(Some(0), items[2].as_list().map(|l| l.len()));
        assert_eq!(Some(-1), items[3].dict_find_as_int(b"k"));
    }

    #[test]
    fn test_position_after_list() {
        let mut pos = 0;
        parse_list(&Decoder::new(), b"li1eei2e", &mut pos, 0).unwrap();
        assert_eq!(5, pos);
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(BdecodeError::UnexpectedEof(1), parse(b"l").unwrap_err());
        assert_eq!(BdecodeError::UnexpectedEof(7), parse(b"l4:spam").unwrap_err());
        assert_eq!(BdecodeError::UnexpectedEof(9), parse(b"lli1ei2ee").unwrap_err());
    }

    #[test]
    fn test_child_error_propagates() {
        // 子元素的错误原样返回，位置不变
        assert_eq!(BdecodeError::InvalidInteger(4), parse(b"li1ei03ee").unwrap_err());
        assert_eq!(BdecodeError::ExpectedValue(1), parse(b"lxe").unwrap_err());
        assert_eq!(BdecodeError::ExpectedColon(2), parse(b"l4spame").unwrap_err());
    }

    #[test]
    fn test_depth_limit() {
        let decoder = Decoder::new().with_depth_limit(2);
        assert!(parse_list(&decoder, b"llee", &mut 0, 0).is_ok());

        let err = parse_list(&decoder, b"llleee", &mut 0, 0).unwrap_err();
        assert_eq!(BdecodeError::DepthExceeded { pos: 2, limit: 2 }, err);
    }
}
