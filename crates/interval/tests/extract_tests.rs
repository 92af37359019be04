use boduan_core::interval::entity::{Band, PriceInterval};
use boduan_interval::extract_intervals;

// 标准格式的总经理输出（加粗标签 + 全角冒号）
const GM_STANDARD: &str = "
### 🧭 最终指令
【🟢 买入】

### 📌 仓位
【60%】

### 📈 操作区间
- **买入区间：** 85.50 - 90.20
- **卖出区间：** 110.30 - 118.50

### 🛑 止损红线
**止损：** 82.00
";

#[test]
fn test_extract_decorated_labels() {
    let interval = extract_intervals(GM_STANDARD).expect("标准格式应当提取成功");
    assert_eq!(interval.buy, Band::new(85.5, 90.2));
    assert_eq!(interval.sell, Band::new(110.3, 118.5));
    assert_eq!(interval.stop_loss, Some(82.0));
}

#[test]
fn test_extract_loose_fallback_forms() {
    // 无空格短横线、半角冒号、止损价格 标签，走宽松回退模式
    let text = "
- 买入区间：88.5-92.3
- 卖出区间: 108.0 - 115.5
- 止损价格：85.0
";
    let interval = extract_intervals(text).expect("宽松格式应当提取成功");
    assert_eq!(interval.buy, Band::new(88.5, 92.3));
    assert_eq!(interval.sell, Band::new(108.0, 115.5));
    assert_eq!(interval.stop_loss, Some(85.0));
}

#[test]
fn test_loose_form_equals_decorated_form() {
    // 同值的宽松写法与装饰写法必须产出相同的结构化结果
    let decorated = "**买入区间：** [88.5 - 92.3]\n**卖出区间：** [108.0 - 115.5]\n**止损：** 85.0";
    let loose = "买入区间：88.5-92.3\n卖出区间: 108.0 - 115.5\n止损价格：85.0";
    let a = extract_intervals(decorated).expect("装饰格式");
    let b = extract_intervals(loose).expect("宽松格式");
    assert_eq!(a, b);
}

#[test]
fn test_extract_reorders_reversed_endpoints() {
    // 文本书写顺序不决定数值顺序
    let text = "买入区间：90.20 - 85.50\n卖出区间：118.50 - 110.30";
    let interval = extract_intervals(text).expect("颠倒端点应当提取成功");
    assert_eq!(interval.buy, Band::new(85.5, 90.2));
    assert_eq!(interval.sell, Band::new(110.3, 118.5));
    assert_eq!(interval.stop_loss, None);
}

#[test]
fn test_extract_tolerates_dash_variants() {
    for dash in ["-", "~", "—"] {
        let text = format!("买入区间：85.50 {dash} 90.20\n卖出区间：110.30 {dash} 118.50");
        let interval = extract_intervals(&text).expect("三种连接符均应匹配");
        assert_eq!(interval.buy, Band::new(85.5, 90.2));
    }
}

#[test]
fn test_extract_abbreviated_labels() {
    let text = "买入：[27.80 - 28.80]\n卖出价：33.50 - 35.50";
    let interval = extract_intervals(text).expect("缩写标签应当提取成功");
    assert_eq!(interval.buy, Band::new(27.8, 28.8));
    assert_eq!(interval.sell, Band::new(33.5, 35.5));
}

#[test]
fn test_extract_fails_without_sell_band() {
    // 单边命中视为整体失败
    let text = "买入区间：85.50 - 90.20\n长期看好，逢高减仓即可。";
    assert!(extract_intervals(text).is_none());
}

#[test]
fn test_extract_fails_without_buy_band() {
    let text = "卖出区间：110.30 - 118.50";
    assert!(extract_intervals(text).is_none());
}

#[test]
fn test_extract_fails_on_unparsable_number() {
    // [\d.]+ 能匹配 "1.2.3"，但它不是合法浮点数
    let text = "买入区间：85.50 - 90.20\n卖出区间：1.2.3 - 118.50";
    assert!(extract_intervals(text).is_none());
}

#[test]
fn test_extract_missing_stop_loss_is_not_fatal() {
    let text = "买入区间：85.50 - 90.20\n卖出区间：110.30 - 118.50";
    let interval = extract_intervals(text).expect("止损缺失不影响区间提取");
    assert_eq!(interval.stop_loss, None);
}

#[test]
fn test_extract_returns_plain_interval() {
    let interval = extract_intervals(GM_STANDARD).expect("标准格式");
    let expected = PriceInterval::new(
        Band::new(85.5, 90.2),
        Band::new(110.3, 118.5),
        Some(82.0),
    );
    assert_eq!(interval, expected);
}
