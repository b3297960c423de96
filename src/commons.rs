use std::fmt;

/// 节点类型
#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ValueKind {
    /// 字典
    Dict = b'd',
    /// 列表
    List = b'l',
    /// 字符串
    Str = b'0',
    /// 整型
    Int = b'i',
}

impl ValueKind {
    /// 根据未解析部分的第一个字节判断节点类型，字符串以长度数字开头。
    pub const fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            b'd' => Some(Self::Dict),
            b'l' => Some(Self::List),
            b'i' => Some(Self::Int),
            b'0'..=b'9' => Some(Self::Str),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Dict => "dict",
            Self::List => "list",
            Self::Str => "string",
            Self::Int => "int",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
