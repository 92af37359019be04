use boduan_core::interval::entity::{Band, PriceInterval};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

// 按"最具体优先"排列的买入区间模式：
// 加粗标签带可选方括号 → 纯标签 → 缩写标签 → 单价标签。
// 顺序即契约，提取行为依赖于此，调整时需同步更新测试。
static BUY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // **买入区间：** [27.80 - 28.80] 或 **买入区间：** 27.80 - 28.80
        r"\*{0,2}买入区间[：:]?\*{0,2}\s*\*{0,2}\[?\s*([\d.]+)\s*[-~—]\s*([\d.]+)\s*\]?\*{0,2}",
        // 买入区间：[27.80 - 28.80] 或 买入区间：27.80 - 28.80
        r"买入区间[：:]?\s*\[?\s*([\d.]+)\s*[-~—]\s*([\d.]+)\s*\]?",
        // 买入：[27.80 - 28.80]
        r"买入[：:]?\s*\[?\s*([\d.]+)\s*[-~—]\s*([\d.]+)\s*\]?",
        // 买入价：27.80 - 28.80
        r"买入价[：:]?\s*([\d.]+)\s*[-~—]\s*([\d.]+)",
    ])
});

// 卖出区间模式，与买入模式逐条对称
static SELL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\*{0,2}卖出区间[：:]?\*{0,2}\s*\*{0,2}\[?\s*([\d.]+)\s*[-~—]\s*([\d.]+)\s*\]?\*{0,2}",
        r"卖出区间[：:]?\s*\[?\s*([\d.]+)\s*[-~—]\s*([\d.]+)\s*\]?",
        r"卖出[：:]?\s*\[?\s*([\d.]+)\s*[-~—]\s*([\d.]+)\s*\]?",
        r"卖出价[：:]?\s*([\d.]+)\s*[-~—]\s*([\d.]+)",
    ])
});

// 止损为单一数值，同样按具体程度降序：加粗标签 → 止损价格 → 纯止损
static STOP_LOSS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\*{0,2}止损[：:]?\*{0,2}\s*([\d.]+)",
        r"止损价格?[：:]?\s*([\d.]+)",
        r"止损[：:]?\s*([\d.]+)",
    ])
});

// 模式均为编译期固定的字面量，编译失败属程序缺陷而非运行时输入问题
#[allow(clippy::expect_used)]
fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|s| Regex::new(s).expect("interval pattern must compile"))
        .collect()
}

/// # Summary
/// 从自由文本中提取价格区间候选。
///
/// # Logic
/// 买入与卖出各自独立地按序尝试模式列表，命中第一条即停；
/// 两侧必须同时命中，否则整体视为提取失败。命中后两端点重排为
/// `low = min, high = max`，不依赖文本书写顺序。止损为可选单值。
/// 任一数值解析失败（非数字）同样判定失败。
///
/// # Returns
/// * `Option<PriceInterval>` - 软失败语义：提取不到返回 `None`，从不报错。
pub fn extract_intervals(text: &str) -> Option<PriceInterval> {
    let buy_pair = find_pair(text, &BUY_PATTERNS, "买入");
    let sell_pair = find_pair(text, &SELL_PATTERNS, "卖出");

    let (Some(buy_pair), Some(sell_pair)) = (buy_pair, sell_pair) else {
        warn!(
            "区间提取失败: 买入匹配={}, 卖出匹配={}, 文本片段: {}",
            buy_pair.is_some(),
            sell_pair.is_some(),
            snippet(text)
        );
        return None;
    };

    let parsed = (
        buy_pair.0.parse::<f64>().ok(),
        buy_pair.1.parse::<f64>().ok(),
        sell_pair.0.parse::<f64>().ok(),
        sell_pair.1.parse::<f64>().ok(),
    );
    let (Some(buy_a), Some(buy_b), Some(sell_a), Some(sell_b)) = parsed else {
        warn!(
            "区间提取失败: 数值解析失败: 买入=({}, {}), 卖出=({}, {})",
            buy_pair.0, buy_pair.1, sell_pair.0, sell_pair.1
        );
        return None;
    };

    let stop_loss = find_single(text, &STOP_LOSS_PATTERNS).and_then(|s| s.parse::<f64>().ok());

    let interval = PriceInterval::new(
        Band::sorted(buy_a, buy_b),
        Band::sorted(sell_a, sell_b),
        stop_loss,
    );
    debug!("区间提取成功: {:?}", interval);
    Some(interval)
}

// 按序尝试区间模式，返回首个命中的两个数字捕获组原文
fn find_pair<'t>(text: &'t str, patterns: &[Regex], label: &str) -> Option<(&'t str, &'t str)> {
    for (idx, pattern) in patterns.iter().enumerate() {
        if let Some(caps) = pattern.captures(text) {
            debug!("区间提取: {}匹配成功, 使用模式 #{}", label, idx);
            let a = caps.get(1)?.as_str();
            let b = caps.get(2)?.as_str();
            return Some((a, b));
        }
    }
    None
}

// 按序尝试单值模式（止损），返回首个命中的捕获组原文
fn find_single<'t>(text: &'t str, patterns: &[Regex]) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// 失败日志只携带文本前缀，按字符截断避免落在 UTF-8 边界内
fn snippet(text: &str) -> String {
    text.chars().take(200).collect()
}
