use serde::{Deserialize, Serialize};

/// # Summary
/// 单边价格带实体，表示一个买入或卖出价格区域。
///
/// # Invariants
/// - 规整化完成后保证 `low < high` 且两端为正有限数；
///   原始输入（提取器或调用方给出）不做此假设。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    // 区间下限
    pub low: f64,
    // 区间上限
    pub high: f64,
}

impl Band {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// # Summary
    /// 由任意顺序的两个端点构造有序价格带（小者为下限）。
    pub fn sorted(a: f64, b: f64) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    // 区间绝对宽度（价格单位）
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// # Summary
/// 一份候选交易计划：买入带、卖出带和可选止损价。
/// 由文本提取器恢复或调用方直接构造，进入流水线后按值复制，原对象永不被修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInterval {
    // 买入区间
    pub buy: Band,
    // 卖出区间
    pub sell: Band,
    // 止损价（可选）
    pub stop_loss: Option<f64>,
}

impl PriceInterval {
    pub fn new(buy: Band, sell: Band, stop_loss: Option<f64>) -> Self {
        Self {
            buy,
            sell,
            stop_loss,
        }
    }
}

/// # Summary
/// 由最终区间重算出的五项汇总指标与达标判定。
///
/// # Invariants
/// - 各百分比字段已按一位小数舍入，仅用于呈现；
///   `meets_standards` 基于舍入前的原始值判定。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationMetrics {
    // 五项指标是否同时达到策略下限（逻辑与，无部分达标）
    pub meets_standards: bool,
    // 总区间宽度（卖出上限到买入下限）占当前价百分比
    pub total_width_percent: f64,
    // 买入区间宽度百分比
    pub buy_width_percent: f64,
    // 卖出区间宽度百分比
    pub sell_width_percent: f64,
    // 买入区间上限低于当前价的百分比
    pub below_current_percent: f64,
    // 卖出区间下限高于当前价的百分比
    pub above_current_percent: f64,
}

/// # Summary
/// 规整化流水线的终态产物：修复后的区间、按序追加的调整/警告审计日志
/// 及汇总指标。返回后不再变化，不存在任何持久化存储。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustedInterval {
    // 修复后的价格区间
    pub interval: PriceInterval,
    // 已自动执行的修复描述，按发生顺序追加，从不去重
    pub adjustments: Vec<String>,
    // 未强制修复的遗留关注点，按发生顺序追加
    pub warnings: Vec<String>,
    // 终态汇总指标
    pub validation: ValidationMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_sorted_reorders_endpoints() {
        let band = Band::sorted(90.2, 85.5);
        assert_eq!(band.low, 85.5);
        assert_eq!(band.high, 90.2);
    }

    #[test]
    fn test_interval_serde_roundtrip() {
        let interval = PriceInterval::new(
            Band::new(85.5, 90.2),
            Band::new(110.3, 118.5),
            Some(82.0),
        );
        let json = serde_json::to_string(&interval).expect("serialize");
        let back: PriceInterval = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, interval);
    }
}
