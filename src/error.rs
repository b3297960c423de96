use thiserror::Error;

use crate::ValueKind;

/// 解析失败的类别
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    /// 输入不符合 bencoding 语法
    InvalidFormat,
    /// 输入合法，但超出了本实现愿意表示的范围
    Unsupported,
}

#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum BdecodeError {
    #[error("Unexpected end of file in bencoded string at position '{0}' .")]
    UnexpectedEof(usize),

    #[error("Expected value (list, dict, int or string) in bencoded string at position '{0}' .")]
    ExpectedValue(usize),

    #[error("Expected {kind} marker in bencoded string at position '{pos}' .")]
    ExpectedMarker { pos: usize, kind: ValueKind },

    #[error("Expected digit in bencoded string at position '{0}' .")]
    ExpectedDigit(usize),

    #[error("Expected colon in bencoded string at position '{0}' .")]
    ExpectedColon(usize),

    #[error("Non-canonical integer (leading zero or negative zero) at position '{0}' .")]
    InvalidInteger(usize),

    #[error("Dictionary key out of order at position '{0}' .")]
    UnsortedKey(usize),

    #[error("Duplicate dictionary key at position '{0}' .")]
    DuplicateKey(usize),

    #[error("Trailing data after bencoded value at position '{0}' .")]
    TrailingData(usize),

    #[error("String length at position '{pos}' has {digits} digits, more than '{limit}' are not supported.")]
    LengthDigitsExceeded { pos: usize, digits: usize, limit: usize },

    #[error("String length at position '{pos}' exceeds the limit '{limit}' .")]
    LengthExceeded { pos: usize, limit: usize },

    #[error("integer overflow at position '{0}' .")]
    IntegerOverflow(usize),

    #[error("bencoded recursion depth limit exceeded over '{limit}' at position '{pos}' .")]
    DepthExceeded { pos: usize, limit: usize },
}

impl BdecodeError {
    pub fn kind(&self) -> ErrorKind {
        use BdecodeError::*;

        match self {
            LengthDigitsExceeded { .. }
            | LengthExceeded { .. }
            | IntegerOverflow(_)
            | DepthExceeded { .. } => ErrorKind::Unsupported,
            _ => ErrorKind::InvalidFormat,
        }
    }

    /// 出错位置在输入 buffer 中的绝对偏移
    pub fn position(&self) -> usize {
        use BdecodeError::*;

        match *self {
            UnexpectedEof(pos)
            | ExpectedValue(pos)
            | ExpectedDigit(pos)
            | ExpectedColon(pos)
            | InvalidInteger(pos)
            | UnsortedKey(pos)
            | DuplicateKey(pos)
            | TrailingData(pos)
            | IntegerOverflow(pos) => pos,
            ExpectedMarker { pos, .. }
            | LengthDigitsExceeded { pos, .. }
            | LengthExceeded { pos, .. }
            | DepthExceeded { pos, .. } => pos,
        }
    }
}
