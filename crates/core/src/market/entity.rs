use serde::{Deserialize, Serialize};

/// # Summary
/// 个股行情快照实体，作为一次区间验证调用的市场参照系。
/// 由外部行情采集组件组装，验证期间保持不可变。
///
/// # Invariants
/// - `current_price` 必须大于 0，由验证入口强制检查。
/// - 其余字段均为可选增强信息，缺失时相关调整步骤静默跳过。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockContext {
    // 当前价格（所有百分比阈值的计算基准）
    pub current_price: f64,
    // 20日波动率（小数形式，0.03 即 3%）
    pub volatility_20d: Option<f64>,
    // 20日平均真实波幅（价格单位）
    pub atr_20d: Option<f64>,
    // 市值（亿元）
    pub market_cap: Option<f64>,
    // 行业名称，用于行业策略表查找
    pub industry: Option<String>,
    // 日振幅百分比
    pub daily_amplitude: Option<f64>,
    // 成交量
    pub volume: Option<f64>,
}

impl StockContext {
    /// # Summary
    /// 以当前价构造最小上下文，可选字段全部留空。
    pub fn with_price(current_price: f64) -> Self {
        Self {
            current_price,
            volatility_20d: None,
            atr_20d: None,
            market_cap: None,
            industry: None,
            daily_amplitude: None,
            volume: None,
        }
    }
}
