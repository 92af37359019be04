use thiserror::Error;

/// # Summary
/// 区间验证域错误枚举。
/// 规整化流水线本身是全函数（任何越界输入都被修复而非拒绝），
/// 唯一的致命错误是参照价格非法。
#[derive(Error, Debug)]
pub enum IntervalError {
    // 当前价格必须大于 0，否则所有百分比阈值失去意义
    #[error("current price must be positive, got {0}")]
    NonPositiveCurrentPrice(f64),
}
