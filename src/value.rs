mod byte_string;
mod encoding;

use std::collections::BTreeMap;

pub use byte_string::ByteString;
pub use encoding::TextEncoding;

use crate::{
    decode::utils::{escape_string, gen_blanks},
    ValueKind,
};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Style {
    Compact,
    /// 带缩进的格式，参数为当前缩进的空格数
    Pretty(usize),
}

const INDENT: usize = 2;

/// 用于存放解析后的数据
///
/// 每次解析都生成一棵独立的值树，容器拥有自己的元素。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(ByteString),
    Int(i64),
    List(Vec<Value>),
    /// 按 key 的字节序排列
    Dict(BTreeMap<ByteString, Value>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::List(_) => ValueKind::List,
            Value::Dict(_) => ValueKind::Dict,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&ByteString> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&BTreeMap<ByteString, Value>> {
        match self {
            Value::Dict(v) => Some(v),
            _ => None,
        }
    }

    /// 获取当前 list or dict 节点的长度
    pub fn len(&self) -> usize {
        match self {
            Value::List(v) => v.len(),
            Value::Dict(v) => v.len(),
            _ => panic!("not a List or Dict node"),
        }
    }

    /// 字符串和整数不是容器，总是返回 false
    pub fn is_empty(&self) -> bool {
        match self {
            Value::List(v) => v.is_empty(),
            Value::Dict(v) => v.is_empty(),
            _ => false,
        }
    }

    /// 获取 list 中指定索引的节点
    pub fn list_item(&self, index: usize) -> Option<&Value> {
        self.as_list()?.get(index)
    }

    /// 在 dict 中查找 key 对应的 value
    pub fn dict_find(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }

    pub fn dict_find_as_str(&self, key: &[u8]) -> Option<&ByteString> {
        self.dict_find(key)?.as_str()
    }

    pub fn dict_find_as_int(&self, key: &[u8]) -> Option<i64> {
        self.dict_find(key)?.as_int()
    }

    pub fn dict_find_as_list(&self, key: &[u8]) -> Option<&[Value]> {
        self.dict_find(key)?.as_list()
    }

    pub fn dict_find_as_dict(&self, key: &[u8]) -> Option<&BTreeMap<ByteString, Value>> {
        self.dict_find(key)?.as_dict()
    }

    pub fn to_json_with_style(&self, style: Style) -> String {
        let mut sb = String::new();
        self.write_json(&mut sb, style);
        sb
    }

    pub fn to_json(&self) -> String {
        self.to_json_with_style(Style::Compact)
    }

    pub fn to_json_pretty(&self) -> String {
        self.to_json_with_style(Style::Pretty(0))
    }

    fn write_json(&self, sb: &mut String, style: Style) {
        match self {
            Value::Str(v) => {
                sb.push('"');
                sb.push_str(&escape_string(v.as_bytes()));
                sb.push('"');
            }
            Value::Int(v) => sb.push_str(&v.to_string()),
            Value::List(items) => {
                if items.is_empty() {
                    sb.push_str("[]");
                    return;
                }

                sb.push('[');
                let len = items.len();
                for (i, item) in items.iter().enumerate() {
                    let child_style = open_item(sb, style);
                    item.write_json(sb, child_style);
                    if i < len - 1 {
                        sb.push(',');
                        if style == Style::Compact {
                            sb.push(' ');
                        }
                    }
                }
                close(sb, style, ']');
            }
            Value::Dict(entries) => {
                if entries.is_empty() {
                    sb.push_str("{}");
                    return;
                }

                sb.push('{');
                let len = entries.len();
                for (i, (key, val)) in entries.iter().enumerate() {
                    let child_style = open_item(sb, style);
                    sb.push_str(&format!(r#""{}": "#, escape_string(key.as_bytes())));
                    val.write_json(sb, child_style);
                    if i < len - 1 {
                        sb.push(',');
                        if style == Style::Compact {
                            sb.push(' ');
                        }
                    }
                }
                close(sb, style, '}');
            }
        }
    }
}

/// 在 list 或 dict 的元素前换行缩进，返回元素自身使用的格式
fn open_item(sb: &mut String, style: Style) -> Style {
    match style {
        Style::Compact => Style::Compact,
        Style::Pretty(indent) => {
            sb.push('\n');
            sb.push_str(&gen_blanks(indent + INDENT));
            Style::Pretty(indent + INDENT)
        }
    }
}

fn close(sb: &mut String, style: Style, bracket: char) {
    if let Style::Pretty(indent) = style {
        sb.push('\n');
        sb.push_str(&gen_blanks(indent));
    }
    sb.push(bracket);
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value.into())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Str(value.into())
    }
}

impl From<ByteString> for Value {
    fn from(value: ByteString) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<BTreeMap<ByteString, Value>> for Value {
    fn from(value: BTreeMap<ByteString, Value>) -> Self {
        Value::Dict(value)
    }
}

// 转换失败时原样返回 Value
impl TryFrom<Value> for i64 {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl TryFrom<Value> for ByteString {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(v) => Ok(v.to_text().into_owned()),
            other => Err(other),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl TryFrom<Value> for BTreeMap<ByteString, Value> {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Dict(v) => Ok(v),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        // {"k1": "v1", "k2": [1, 2], "k3": {}}
        let mut dict: BTreeMap<ByteString, Value> = BTreeMap::new();
        dict.insert("k1".into(), "v1".into());
        dict.insert("k2".into(), vec![Value::Int(1), Value::Int(2)].into());
        dict.insert("k3".into(), Value::Dict(BTreeMap::new()));
        Value::Dict(dict)
    }

    #[test]
    fn test_dict_find() {
        let node = sample();
        assert_eq!(3, node.len());
        assert_eq!(ValueKind::Dict, node.kind());
        assert!(node.dict_find_as_str(b"k1").unwrap().eq_text("v1"));
        assert_eq!(2, node.dict_find_as_list(b"k2").unwrap().len());
        assert!(node.dict_find_as_dict(b"k3").unwrap().is_empty());
        assert_eq!(None, node.dict_find_as_int(b"k1"));
        assert_eq!(None, node.dict_find(b"k9"));
    }

    #[test]
    fn test_list_item() {
        let node = Value::List(vec![Value::Int(19), "ab".into()]);
        assert_eq!(Some(19), node.list_item(0).and_then(Value::as_int));
        assert!(node.list_item(1).and_then(Value::as_str).unwrap().eq_text("ab"));
        assert_eq!(None, node.list_item(2));
        assert_eq!(None, Value::Int(1).list_item(0));
    }

    #[test]
    fn test_is_empty() {
        assert!(Value::List(vec![]).is_empty());
        assert!(Value::Dict(BTreeMap::new()).is_empty());
        assert!(!Value::List(vec![Value::Int(0)]).is_empty());
        assert!(!Value::from("").is_empty());
        assert!(!Value::Int(0).is_empty());
    }

    #[test]
    #[should_panic(expected = "not a List or Dict node")]
    fn test_panic_len() {
        let _ = Value::Int(1).len();
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Ok(42), i64::try_from(Value::Int(42)));
        assert_eq!(Err(Value::Int(42)), String::try_from(Value::Int(42)));
        assert_eq!(Ok("spam".to_string()), String::try_from(Value::from("spam")));

        let list = Vec::<Value>::try_from(Value::List(vec![Value::Int(1)])).unwrap();
        assert_eq!(vec![Value::Int(1)], list);
    }

    #[test]
    fn test_to_json() {
        let node = sample();
        assert_eq!(r#"{"k1": "v1", "k2": [1, 2], "k3": {}}"#, node.to_json());

        let pretty = node.to_json_pretty();
        let expected = "{\n  \"k1\": \"v1\",\n  \"k2\": [\n    1,\n    2\n  ],\n  \"k3\": {}\n}";
        assert_eq!(expected, pretty);

        let node = Value::from(vec![b'v', 0x02].as_slice());
        assert_eq!(r#""v\x02""#, node.to_json());
    }
}
