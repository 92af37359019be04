use boduan_core::interval::policy::IntervalPolicy;
use boduan_core::market::entity::StockContext;

/// # Summary
/// 依据行情特征推荐验证策略，服务于未显式给出策略的调用方。
///
/// # Logic
/// 从默认策略出发做独立、可叠加的分桶调整：
/// - 市值 < 50 亿（小盘）收紧五项下限，> 500 亿（大盘）放宽；
/// - 20日波动率 > 3% 时按波动幅度等比上调三项宽度阈值；
/// - 日振幅 > 5% 时对总宽度与上方距离加小幅固定增量。
/// 各分桶触及的字段互不冲突或只做累加，应用顺序无关。
pub fn recommend_policy(ctx: &StockContext) -> IntervalPolicy {
    let mut policy = IntervalPolicy::default();

    // 按市值调整
    if let Some(market_cap) = ctx.market_cap {
        if market_cap < 50.0 {
            // 小盘股：波动大，要求更宽的区间
            policy.min_total_width_percent += 3.0;
            policy.min_buy_width_percent += 1.0;
            policy.min_sell_width_percent += 1.0;
            policy.min_below_current_percent += 1.0;
            policy.min_above_current_percent += 2.0;
        } else if market_cap > 500.0 {
            // 大盘股：波动小，适当放宽
            policy.min_total_width_percent -= 2.0;
            policy.min_buy_width_percent -= 0.5;
            policy.min_sell_width_percent -= 0.5;
            policy.min_below_current_percent -= 1.0;
            policy.min_above_current_percent -= 1.0;
        }
    }

    // 按波动率调整（高波动率 > 3% 时等比上调）
    if let Some(volatility) = ctx.volatility_20d {
        if volatility > 0.03 {
            policy.min_total_width_percent += (volatility * 100.0 * 0.5).round();
            policy.min_buy_width_percent += (volatility * 100.0 * 0.2).round();
            policy.min_sell_width_percent += (volatility * 100.0 * 0.3).round();
        }
    }

    // 按日振幅调整
    if let Some(amplitude) = ctx.daily_amplitude {
        if amplitude > 5.0 {
            policy.min_total_width_percent += 2.0;
            policy.min_above_current_percent += 1.0;
        }
    }

    policy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(price: f64) -> StockContext {
        StockContext::with_price(price)
    }

    #[test]
    fn test_plain_context_returns_default() {
        let policy = recommend_policy(&context(100.0));
        assert_eq!(policy, IntervalPolicy::default());
    }

    #[test]
    fn test_small_cap_tightens_all_minima() {
        let mut ctx = context(100.0);
        ctx.market_cap = Some(30.0);
        let policy = recommend_policy(&ctx);
        assert_eq!(policy.min_total_width_percent, 15.0);
        assert_eq!(policy.min_buy_width_percent, 5.0);
        assert_eq!(policy.min_sell_width_percent, 6.0);
        assert_eq!(policy.min_below_current_percent, 7.0);
        assert_eq!(policy.min_above_current_percent, 12.0);
    }

    #[test]
    fn test_large_cap_loosens_minima() {
        let mut ctx = context(100.0);
        ctx.market_cap = Some(800.0);
        let policy = recommend_policy(&ctx);
        assert_eq!(policy.min_total_width_percent, 10.0);
        assert_eq!(policy.min_buy_width_percent, 3.5);
        assert_eq!(policy.min_sell_width_percent, 4.5);
        assert_eq!(policy.min_below_current_percent, 5.0);
        assert_eq!(policy.min_above_current_percent, 9.0);
    }

    #[test]
    fn test_high_volatility_scales_width_minima() {
        let mut ctx = context(100.0);
        ctx.volatility_20d = Some(0.076);
        let policy = recommend_policy(&ctx);
        // 7.6% 波动率: 总宽 +round(3.8)=4, 买入 +round(1.52)=2, 卖出 +round(2.28)=2
        assert_eq!(policy.min_total_width_percent, 16.0);
        assert_eq!(policy.min_buy_width_percent, 6.0);
        assert_eq!(policy.min_sell_width_percent, 7.0);
    }

    #[test]
    fn test_amplitude_bucket_adds_flat_increment() {
        let mut ctx = context(100.0);
        ctx.daily_amplitude = Some(6.5);
        let policy = recommend_policy(&ctx);
        assert_eq!(policy.min_total_width_percent, 14.0);
        assert_eq!(policy.min_above_current_percent, 11.0);
    }

    #[test]
    fn test_buckets_are_additive() {
        let mut ctx = context(100.0);
        ctx.market_cap = Some(30.0);
        ctx.daily_amplitude = Some(6.0);
        let policy = recommend_policy(&ctx);
        // 小盘 +3 与振幅 +2 叠加
        assert_eq!(policy.min_total_width_percent, 17.0);
        assert_eq!(policy.min_above_current_percent, 13.0);
    }
}
