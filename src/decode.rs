mod commons;
mod dict;
mod int;
mod list;
mod str;
mod strictness;
pub(crate) mod utils;

use std::collections::BTreeMap;

use tracing::{debug, trace};

use dict::parse_dict;
use int::parse_int;
use list::parse_list;
use str::parse_str;

pub use commons::limits;
pub use strictness::*;

use crate::{BdecodeError, BdecodeResult, ByteString, TextEncoding, Value, ValueKind};

/// 解码配置
///
/// 只保存配置，不保存任何单次解析的状态，读取位置由各个解析函数通过 `pos` 传递，
/// 所以同一个 `Decoder` 可以被多个线程同时使用。
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    encoding: TextEncoding,
    depth_limit: usize,
    strictness: Strictness,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            encoding: TextEncoding::default(),
            depth_limit: limits::DEFAULT_DEPTH_LIMIT,
            strictness: Strictness::strict(),
        }
    }

    /// 设置字符串的文本编码，只影响文本转换和按文本比较，不影响原始字节
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// 设置 list 和 dict 的最大嵌套深度
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// 解析 buffer 中的一个完整的值。
    ///
    /// 值之后还有多余字节时返回 [`BdecodeError::TrailingData`] ，
    /// 除非关闭了 [`Strictness::reject_trailing`] 。
    pub fn decode(&self, buffer: &[u8]) -> BdecodeResult<Value> {
        let (value, consumed) = self.decode_prefix(buffer)?;

        if consumed != buffer.len() && self.strictness.reject_trailing() {
            let err = BdecodeError::TrailingData(consumed);
            debug!(error = %err, "bdecode failed");
            return Err(err);
        }

        Ok(value)
    }

    /// 解析 buffer 开头的一个值，同时返回消耗的字节数，便于在更长的 buffer 中连续解析。
    pub fn decode_prefix(&self, buffer: &[u8]) -> BdecodeResult<(Value, usize)> {
        let mut pos = 0;

        match self.parse_value(buffer, &mut pos, 0) {
            Ok(value) => Ok((value, pos)),
            Err(err) => {
                debug!(error = %err, kind = ?err.kind(), pos = err.position(), "bdecode failed");
                Err(err)
            }
        }
    }

    /// 解析 buffer 开头的字符串，之后的字节不做处理。
    pub fn decode_str(&self, buffer: &[u8]) -> BdecodeResult<ByteString> {
        parse_str(buffer, &mut 0, self.encoding)
    }

    /// 解析 buffer 开头的整数，之后的字节不做处理。
    pub fn decode_int(&self, buffer: &[u8]) -> BdecodeResult<i64> {
        parse_int(buffer, &mut 0)
    }

    /// 解析 buffer 开头的 list ，之后的字节不做处理。
    pub fn decode_list(&self, buffer: &[u8]) -> BdecodeResult<Vec<Value>> {
        parse_list(self, buffer, &mut 0, 0)
    }

    /// 解析 buffer 开头的 dict ，之后的字节不做处理。
    pub fn decode_dict(&self, buffer: &[u8]) -> BdecodeResult<BTreeMap<ByteString, Value>> {
        parse_dict(self, buffer, &mut 0, 0)
    }

    /// 根据 pos 处的字节选择对应类型的解析函数。
    ///
    /// depth 是当前值外层容器的数量，list 和 dict 解析元素时会递归调用这里。
    pub(crate) fn parse_value(
        &self,
        buffer: &[u8],
        pos: &mut usize,
        depth: usize,
    ) -> BdecodeResult<Value> {
        let Some(&t) = buffer.get(*pos) else {
            return Err(BdecodeError::ExpectedValue(*pos));
        };

        let Some(kind) = ValueKind::from_marker(t) else {
            return Err(BdecodeError::ExpectedValue(*pos));
        };

        trace!(%kind, pos = *pos, depth, "dispatch");

        match kind {
            ValueKind::Str => parse_str(buffer, pos, self.encoding).map(Value::Str),
            ValueKind::Int => parse_int(buffer, pos).map(Value::Int),
            ValueKind::List => parse_list(self, buffer, pos, depth).map(Value::List),
            ValueKind::Dict => parse_dict(self, buffer, pos, depth).map(Value::Dict),
        }
    }

    /// 进入一个新的 list 或 dict 之前检查嵌套深度
    pub(crate) fn check_depth(&self, pos: usize, depth: usize) -> BdecodeResult<()> {
        if depth >= self.depth_limit {
            return Err(BdecodeError::DepthExceeded {
                pos,
                limit: self.depth_limit,
            });
        }

        Ok(())
    }
}

/// 使用默认配置解析一个完整的值
pub fn decode(buffer: &[u8]) -> BdecodeResult<Value> {
    Decoder::new().decode(buffer)
}

/// 使用默认配置解析 buffer 开头的一个值，返回值和消耗的字节数
pub fn decode_prefix(buffer: &[u8]) -> BdecodeResult<(Value, usize)> {
    Decoder::new().decode_prefix(buffer)
}
