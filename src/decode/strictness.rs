use bitfields::bitfield;

/// 解析时的严格程度开关，默认全部开启。
///
/// 关闭后解析器会接受不符合规范形式、但仍可无歧义读取的输入。
#[bitfield(u8)]
#[derive(Clone, Copy)]
pub struct Strictness {
    /// dict 的 key 必须按字节序升序排列
    #[bits(1, default = true)]
    pub sorted_keys: bool,

    /// dict 的 key 不允许重复，关闭时后出现的值覆盖先出现的值
    #[bits(1, default = true)]
    pub unique_keys: bool,

    /// 顶层值之后不允许有多余的字节
    #[bits(1, default = true)]
    pub reject_trailing: bool,

    #[bits(5)]
    _padding: u8,
}

impl Strictness {
    pub fn strict() -> Self {
        Self::new()
    }

    pub fn lenient() -> Self {
        StrictnessBuilder::new()
            .with_sorted_keys(false)
            .with_unique_keys(false)
            .with_reject_trailing(false)
            .build()
    }
}
