use boduan_core::common::AgentRole;
use boduan_core::interval::entity::{AdjustedInterval, Band, PriceInterval, ValidationMetrics};
use boduan_core::interval::error::IntervalError;
use boduan_core::interval::policy::{IntervalPolicy, PolicyOverlay};
use boduan_core::market::entity::StockContext;
use tracing::debug;

/// # Summary
/// 区间验证流水线入口：解析生效策略，依次执行买入规整、卖出规整、
/// 重叠消解与止损归位，最后由终态区间重算汇总指标。
///
/// # Logic
/// 1. 校验 `current_price > 0`，否则立即返回致命错误。
/// 2. 按 默认 → 行业 → 角色 → 调用方覆盖 解析生效策略。
/// 3. 对买卖两带各取私有副本逐步修复，原入参永不被修改。
/// 4. 每个触发的修复步骤按序追加一条调整记录；仅提示不强制修复的
///    情形（如超出最大距价上限）记入警告。
///
/// # Arguments
/// * `interval`: 原始候选区间（提取器产物或调用方直接构造）。
/// * `ctx`: 行情快照，`current_price` 为必填参照价。
/// * `overrides`: 调用方部分策略覆盖，最后合并。
/// * `role`: 产出该候选的智能体角色，用于角色策略表查找。
///
/// # Returns
/// * `Result<AdjustedInterval, IntervalError>` - 除参照价非法外总是成功；
///   流水线对任何有限输入都输出全序、满足最小间隔的结果。
pub fn validate_and_adjust(
    interval: &PriceInterval,
    ctx: &StockContext,
    overrides: Option<&PolicyOverlay>,
    role: Option<AgentRole>,
) -> Result<AdjustedInterval, IntervalError> {
    let current_price = ctx.current_price;
    if current_price <= 0.0 {
        return Err(IntervalError::NonPositiveCurrentPrice(current_price));
    }

    let policy = IntervalPolicy::resolve(ctx.industry.as_deref(), role, overrides);

    // 取私有副本，避免修改调用方数据
    let mut buy = interval.buy;
    let mut sell = interval.sell;
    let mut adjustments: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    adjust_buy_band(
        &mut buy,
        current_price,
        &policy,
        ctx,
        &mut adjustments,
        &mut warnings,
    );
    adjust_sell_band(
        &mut sell,
        current_price,
        &policy,
        ctx,
        &mut adjustments,
        &mut warnings,
    );
    resolve_overlap(&buy, &mut sell, &mut adjustments);

    let stop_loss = interval
        .stop_loss
        .map(|sl| bind_stop_loss(sl, &buy, current_price, &mut adjustments, &mut warnings));

    let validation = compute_metrics(&buy, &sell, current_price, &policy);
    debug!(
        "区间验证完成: 调整{}项, 警告{}项, 达标={}",
        adjustments.len(),
        warnings.len(),
        validation.meets_standards
    );

    Ok(AdjustedInterval {
        interval: PriceInterval::new(buy, sell, stop_loss),
        adjustments,
        warnings,
        validation,
    })
}

/// # Summary
/// 买入带规整。各步骤基于前序步骤的结果重新取值判断，
/// 修复方向整体偏向远离当前价（下方），保留安全边际。
fn adjust_buy_band(
    band: &mut Band,
    current_price: f64,
    policy: &IntervalPolicy,
    ctx: &StockContext,
    adjustments: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    // 基本修复：颠倒与非正数各自独立检查，可能各记一条
    if band.low >= band.high {
        *band = Band::new(current_price * 0.85, current_price * 0.90);
        adjustments.push("买入区间上下限颠倒，已自动修正".to_string());
    }
    if band.low <= 0.0 || band.high <= 0.0 {
        *band = Band::new(current_price * 0.85, current_price * 0.90);
        adjustments.push("买入区间包含非正数，已自动修正".to_string());
    }

    // 宽度不足：向下扩 1.2 倍、向上扩 0.8 倍，偏向远离当前价
    let width_percent = band.width() / current_price * 100.0;
    if width_percent < policy.min_buy_width_percent {
        let target_width = policy.min_buy_width_percent * current_price / 100.0;
        let expand_by = (target_width - band.width()) / 2.0;
        band.low -= expand_by * 1.2;
        band.high += expand_by * 0.8;
        adjustments.push(format!(
            "买入区间宽度从{:.1}%扩大到{}%",
            width_percent, policy.min_buy_width_percent
        ));
    }

    // 距当前价不足：整体下移，下限移 0.7 倍、上限移 0.3 倍以免宽度塌缩
    let below_current_percent = (current_price - band.high) / current_price * 100.0;
    if below_current_percent < policy.min_below_current_percent {
        let target_below = policy.min_below_current_percent * current_price / 100.0;
        let adjust_amount = target_below - (current_price - band.high);
        band.low -= adjust_amount * 0.7;
        band.high -= adjust_amount * 0.3;
        adjustments.push(format!("买入区间下调{:.2}元以远离当前价", adjust_amount));
    }

    // 过于远离（仅当策略设有上限）：上提下限并仅记警告，不强制完全合规
    if let Some(max_below) = policy.max_below_current_percent {
        let buy_low_percent = (current_price - band.low) / current_price * 100.0;
        if buy_low_percent > max_below {
            let max_below_abs = max_below * current_price / 100.0;
            let adjust_amount = (current_price - band.low) - max_below_abs;
            band.low += adjust_amount * 0.8;
            warnings.push(format!(
                "买入区间下限过于远离当前价({:.1}%)，已上移",
                buy_low_percent
            ));
        }
    }

    // 波动率加宽：买入带以 2.5 倍 ATR 为宽度参考
    if let Some(atr) = ctx.atr_20d.filter(|v| *v > 0.0) {
        let atr_based_width = atr * 2.5;
        if band.width() < atr_based_width * 0.8 {
            let expand_by = (atr_based_width - band.width()) / 2.0;
            band.low -= expand_by * 1.2;
            band.high += expand_by * 0.8;
            adjustments.push(format!("基于ATR({:.2})调整买入区间宽度", atr));
        }
    }

    // 确保买入区间上限低于当前价
    if band.high >= current_price * 0.99 {
        band.high = current_price * 0.94;
        band.low = band.high * 0.95;
        adjustments.push("买入区间上限过于接近当前价，已下移".to_string());
    }

    // 最终安全限制：不低于当前价的50%，不高于当前价的96%
    band.low = band.low.max(current_price * 0.5);
    band.high = band.high.min(current_price * 0.96);
}

/// # Summary
/// 卖出带规整，与买入带镜像：修复方向偏向远离当前价（上方），
/// 波动率参考改用 3 倍 ATR。
fn adjust_sell_band(
    band: &mut Band,
    current_price: f64,
    policy: &IntervalPolicy,
    ctx: &StockContext,
    adjustments: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    if band.low >= band.high {
        *band = Band::new(current_price * 1.10, current_price * 1.15);
        adjustments.push("卖出区间上下限颠倒，已自动修正".to_string());
    }
    if band.low <= 0.0 || band.high <= 0.0 {
        *band = Band::new(current_price * 1.10, current_price * 1.15);
        adjustments.push("卖出区间包含非正数，已自动修正".to_string());
    }

    // 宽度不足：向上扩 1.2 倍、向下扩 0.8 倍
    let width_percent = band.width() / current_price * 100.0;
    if width_percent < policy.min_sell_width_percent {
        let target_width = policy.min_sell_width_percent * current_price / 100.0;
        let expand_by = (target_width - band.width()) / 2.0;
        band.low -= expand_by * 0.8;
        band.high += expand_by * 1.2;
        adjustments.push(format!(
            "卖出区间宽度从{:.1}%扩大到{}%",
            width_percent, policy.min_sell_width_percent
        ));
    }

    // 距当前价不足：整体上移，上限移 0.7 倍、下限移 0.3 倍
    let above_current_percent = (band.low - current_price) / current_price * 100.0;
    if above_current_percent < policy.min_above_current_percent {
        let target_above = policy.min_above_current_percent * current_price / 100.0;
        let adjust_amount = target_above - (band.low - current_price);
        band.low += adjust_amount * 0.3;
        band.high += adjust_amount * 0.7;
        adjustments.push(format!("卖出区间上移{:.2}元以远离当前价", adjust_amount));
    }

    // 过于远离：下压上限并仅记警告
    if let Some(max_above) = policy.max_above_current_percent {
        let sell_high_percent = (band.high - current_price) / current_price * 100.0;
        if sell_high_percent > max_above {
            let max_above_abs = max_above * current_price / 100.0;
            let adjust_amount = (band.high - current_price) - max_above_abs;
            band.high -= adjust_amount * 0.8;
            warnings.push(format!(
                "卖出区间上限过于远离当前价({:.1}%)，已下移",
                sell_high_percent
            ));
        }
    }

    // 波动率加宽：卖出带使用 3 倍 ATR
    if let Some(atr) = ctx.atr_20d.filter(|v| *v > 0.0) {
        let atr_based_width = atr * 3.0;
        if band.width() < atr_based_width * 0.8 {
            let expand_by = (atr_based_width - band.width()) / 2.0;
            band.low -= expand_by * 0.8;
            band.high += expand_by * 1.2;
            adjustments.push(format!("基于ATR({:.2})调整卖出区间宽度", atr));
        }
    }

    // 确保卖出区间下限高于当前价
    if band.low <= current_price * 1.01 {
        band.low = current_price * 1.06;
        band.high = band.low * 1.05;
        adjustments.push("卖出区间下限过于接近当前价，已上移".to_string());
    }

    // 最终安全限制：不低于当前价的104%，不高于当前价的200%
    band.low = band.low.max(current_price * 1.04);
    band.high = band.high.min(current_price * 2.0);
}

/// # Summary
/// 重叠消解：保证买卖两带之间至少留出
/// `max(买入上限的2%, 原始间隔的10%)` 的间隔。
///
/// # Logic
/// 间隔不足时将卖出带整体上移 `侵入量 + 2×最小间隔`，带宽保持不变。
/// 该混合公式按字面执行，不做额外"修正"。
pub fn resolve_overlap(buy: &Band, sell: &mut Band, adjustments: &mut Vec<String>) {
    let min_gap = (buy.high * 0.02).max((sell.low - buy.high) * 0.1);
    if buy.high >= sell.low - min_gap {
        let overlap = buy.high - (sell.low - min_gap);
        let shift = overlap + min_gap * 2.0;
        sell.low += shift;
        sell.high += shift;
        adjustments.push(format!("买入卖出区间过于接近，已增加间隔{:.2}元", shift));
    }
}

/// # Summary
/// 止损归位：止损必须低于最终买入下限；在带下限同侧但距离超过
/// 当前价 8% 的止损视为过于严格，收拢到下限的 97%。
pub fn bind_stop_loss(
    stop_loss: f64,
    buy: &Band,
    current_price: f64,
    adjustments: &mut Vec<String>,
    warnings: &mut Vec<String>,
) -> f64 {
    // 理想止损：低于买入下限5%
    let ideal_stop_loss = buy.low * 0.95;

    if stop_loss >= buy.low {
        warnings.push(format!(
            "止损价({})高于买入区间下限({})，已自动调整",
            stop_loss, buy.low
        ));
        return ideal_stop_loss;
    }

    let stop_loss_percent = (buy.low - stop_loss) / current_price * 100.0;
    if stop_loss_percent > 8.0 {
        adjustments.push(format!(
            "止损过于严格({:.1}%)，调整为低于买入下限3%",
            stop_loss_percent
        ));
        return buy.low * 0.97;
    }

    stop_loss
}

/// # Summary
/// 由终态区间重算五项汇总指标。达标判定使用舍入前的原始值，
/// 存储值按一位小数舍入仅用于呈现；上限阈值只产生警告，不参与判定。
pub fn compute_metrics(
    buy: &Band,
    sell: &Band,
    current_price: f64,
    policy: &IntervalPolicy,
) -> ValidationMetrics {
    let total_width_percent = (sell.high - buy.low) / current_price * 100.0;
    let buy_width_percent = buy.width() / current_price * 100.0;
    let sell_width_percent = sell.width() / current_price * 100.0;
    let below_current_percent = (current_price - buy.high) / current_price * 100.0;
    let above_current_percent = (sell.low - current_price) / current_price * 100.0;

    let meets_standards = total_width_percent >= policy.min_total_width_percent
        && buy_width_percent >= policy.min_buy_width_percent
        && sell_width_percent >= policy.min_sell_width_percent
        && below_current_percent >= policy.min_below_current_percent
        && above_current_percent >= policy.min_above_current_percent;

    ValidationMetrics {
        meets_standards,
        total_width_percent: round1(total_width_percent),
        buy_width_percent: round1(buy_width_percent),
        sell_width_percent: round1(sell_width_percent),
        below_current_percent: round1(below_current_percent),
        above_current_percent: round1(above_current_percent),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
