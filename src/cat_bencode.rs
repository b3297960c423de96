use std::{env, fs};

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use bencode_core::{Decoder, TextEncoding};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 获取命令行参数
    let args: Vec<String> = env::args().collect();

    // 检查是否提供了文件路径作为参数
    if args.len() < 2 {
        bail!("Usage: {} <file_path> [utf8|latin1|ascii]", args[0]);
    }

    let encoding = match args.get(2) {
        Some(name) => TextEncoding::parse_name(name)
            .with_context(|| format!("unknown text encoding: {name}"))?,
        None => TextEncoding::default(),
    };

    // 获取文件路径
    let file_path = &args[1];
    let buffer = fs::read(file_path).with_context(|| format!("failed to read {file_path}"))?;

    let root_node = Decoder::new()
        .with_encoding(encoding)
        .decode(&buffer)
        .with_context(|| format!("failed to decode {file_path}"))?;
    println!("{}", &root_node.to_json_pretty());

    Ok(())
}
