/// 阈值常量
pub mod limits {
    /// 字符串长度前缀最多允许的数字个数。
    pub const MAX_LENGTH_DIGITS: usize = 10;

    /// 字符串的最大长度，也就是 32 位有符号整数的最大值。
    pub const MAX_STR_LEN: u64 = i32::MAX as u64;

    /// 一个字符串编码后的最小长度，即 "0:" 。
    pub const MIN_STR_ENCODED_LEN: usize = 2;

    /// 整数最多允许的数字个数(不含符号)，超过一定会溢出 i64 。
    pub const MAX_INT_DIGITS: usize = 19;

    /// 解析时 dict 和 list 的最大嵌套深度限制。
    pub const DEFAULT_DEPTH_LIMIT: usize = 100;
}
