use bencode_core::{decode, encode, Decoder, TextEncoding};

fn main() {
    let buf = "d 3:k03 i3e 2:k1 2:v1 2:k2 l i1e i2e e 2:k4 d 2:k5 i5e 2:k6 i6e e e".replace(' ', "");

    let root_node = decode(buf.as_bytes()).unwrap();
    println!("{}", root_node.to_json());

    let k2_node = root_node.dict_find(b"k2").unwrap();
    println!("{}", k2_node.to_json());

    for i in 0..k2_node.len() {
        let val = k2_node.list_item(i).and_then(|v| v.as_int()).unwrap();
        println!("item_{} = {}", i, val)
    }

    assert_eq!(buf.as_bytes(), encode(&root_node).as_ref());

    // "3:æøå" in latin1
    let latin1 = Decoder::new()
        .with_encoding(TextEncoding::Latin1)
        .decode_str(&[51, 58, 230, 248, 229])
        .unwrap();
    println!("{} ({:?})", latin1, latin1);

    match decode(b"i03e") {
        Ok(_) => unreachable!(),
        Err(err) => println!("{:?}: {}", err.kind(), err),
    }
}
