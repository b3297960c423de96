use bytes::{BufMut, Bytes, BytesMut};

use crate::Value;

/// 把值编码为规范形式的 bencoding ，dict 的 key 按字节序输出
pub fn encode(value: &Value) -> Bytes {
    let mut buf = BytesMut::new();
    value.encode_into(&mut buf);
    buf.freeze()
}

impl Value {
    pub fn encode_into(&self, buf: &mut BytesMut) {
        match self {
            Value::Str(v) => encode_str(v.as_bytes(), buf),
            Value::Int(v) => {
                buf.put_u8(b'i');
                buf.put_slice(v.to_string().as_bytes());
                buf.put_u8(b'e');
            }
            Value::List(items) => {
                buf.put_u8(b'l');
                for item in items {
                    item.encode_into(buf);
                }
                buf.put_u8(b'e');
            }
            Value::Dict(entries) => {
                buf.put_u8(b'd');
                for (key, val) in entries {
                    encode_str(key.as_bytes(), buf);
                    val.encode_into(buf);
                }
                buf.put_u8(b'e');
            }
        }
    }
}

fn encode_str(bytes: &[u8], buf: &mut BytesMut) {
    buf.put_slice(bytes.len().to_string().as_bytes());
    buf.put_u8(b':');
    buf.put_slice(bytes);
}
