use crate::common::AgentRole;
use serde::{Deserialize, Serialize};

/// # Summary
/// 区间验证策略：一次验证调用生效的全部百分比阈值。
///
/// # Invariants
/// - 所有下限字段必须填满；两个上限字段可选，缺失表示该方向不设封顶。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalPolicy {
    // 总区间最小宽度百分比
    pub min_total_width_percent: f64,
    // 买入区间最小宽度百分比
    pub min_buy_width_percent: f64,
    // 卖出区间最小宽度百分比
    pub min_sell_width_percent: f64,
    // 买入区间低于当前价的最小百分比
    pub min_below_current_percent: f64,
    // 卖出区间高于当前价的最小百分比
    pub min_above_current_percent: f64,
    // 买入区间低于当前价的最大百分比（可选）
    pub max_below_current_percent: Option<f64>,
    // 卖出区间高于当前价的最大百分比（可选）
    pub max_above_current_percent: Option<f64>,
}

impl Default for IntervalPolicy {
    fn default() -> Self {
        Self {
            min_total_width_percent: 12.0,
            min_buy_width_percent: 4.0,
            min_sell_width_percent: 5.0,
            min_below_current_percent: 6.0,
            min_above_current_percent: 10.0,
            max_below_current_percent: Some(25.0),
            max_above_current_percent: Some(35.0),
        }
    }
}

/// # Summary
/// 策略叠加层：每个字段为 `None` 表示本层不覆盖该阈值，继续沿用下层取值。
/// 行业表、角色表和调用方覆盖统一用本类型表达，按序左折叠合并。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyOverlay {
    pub min_total_width_percent: Option<f64>,
    pub min_buy_width_percent: Option<f64>,
    pub min_sell_width_percent: Option<f64>,
    pub min_below_current_percent: Option<f64>,
    pub min_above_current_percent: Option<f64>,
    pub max_below_current_percent: Option<f64>,
    pub max_above_current_percent: Option<f64>,
}

impl PolicyOverlay {
    /// # Summary
    /// 以七个确定值构造一个全字段覆盖层（行业表专用）。
    #[allow(clippy::too_many_arguments)]
    fn full(
        total: f64,
        buy: f64,
        sell: f64,
        below: f64,
        above: f64,
        max_below: f64,
        max_above: f64,
    ) -> Self {
        Self {
            min_total_width_percent: Some(total),
            min_buy_width_percent: Some(buy),
            min_sell_width_percent: Some(sell),
            min_below_current_percent: Some(below),
            min_above_current_percent: Some(above),
            max_below_current_percent: Some(max_below),
            max_above_current_percent: Some(max_above),
        }
    }

    /// # Summary
    /// 仅覆盖五个下限阈值，上限沿用下层（角色表专用）。
    fn minima(total: f64, buy: f64, sell: f64, below: f64, above: f64) -> Self {
        Self {
            min_total_width_percent: Some(total),
            min_buy_width_percent: Some(buy),
            min_sell_width_percent: Some(sell),
            min_below_current_percent: Some(below),
            min_above_current_percent: Some(above),
            max_below_current_percent: None,
            max_above_current_percent: None,
        }
    }
}

impl IntervalPolicy {
    /// # Summary
    /// 应用一个叠加层，仅覆盖该层定义了的字段。
    pub fn apply(mut self, overlay: &PolicyOverlay) -> Self {
        if let Some(v) = overlay.min_total_width_percent {
            self.min_total_width_percent = v;
        }
        if let Some(v) = overlay.min_buy_width_percent {
            self.min_buy_width_percent = v;
        }
        if let Some(v) = overlay.min_sell_width_percent {
            self.min_sell_width_percent = v;
        }
        if let Some(v) = overlay.min_below_current_percent {
            self.min_below_current_percent = v;
        }
        if let Some(v) = overlay.min_above_current_percent {
            self.min_above_current_percent = v;
        }
        if let Some(v) = overlay.max_below_current_percent {
            self.max_below_current_percent = Some(v);
        }
        if let Some(v) = overlay.max_above_current_percent {
            self.max_above_current_percent = Some(v);
        }
        self
    }

    /// # Summary
    /// 解析一次验证调用的生效策略。
    ///
    /// # Logic
    /// 按 默认 → 行业 → 角色 → 调用方覆盖 的顺序左折叠，
    /// 每层只覆盖自己定义的字段；未知行业或未配置角色静默跳过。
    pub fn resolve(
        industry: Option<&str>,
        role: Option<AgentRole>,
        overrides: Option<&PolicyOverlay>,
    ) -> Self {
        let mut policy = Self::default();
        if let Some(overlay) = industry.and_then(industry_overlay) {
            policy = policy.apply(&overlay);
        }
        if let Some(overlay) = role.and_then(role_overlay) {
            policy = policy.apply(&overlay);
        }
        if let Some(overlay) = overrides {
            policy = policy.apply(overlay);
        }
        policy
    }
}

/// # Summary
/// 行业特定的区间策略表，按行业名精确匹配；未收录的行业返回 `None`。
/// 高波动行业要求更宽的区间与更大的安全边际，低波动行业相应收窄。
pub fn industry_overlay(industry: &str) -> Option<PolicyOverlay> {
    let overlay = match industry {
        // 高波动行业
        "科技" => PolicyOverlay::full(18.0, 6.0, 7.0, 8.0, 12.0, 30.0, 40.0),
        "医药" => PolicyOverlay::full(16.0, 5.0, 6.0, 7.0, 11.0, 28.0, 38.0),
        "新能源" => PolicyOverlay::full(15.0, 5.0, 6.0, 7.0, 10.0, 25.0, 35.0),
        // 中波动行业
        "消费" => PolicyOverlay::full(12.0, 4.0, 5.0, 6.0, 8.0, 20.0, 30.0),
        "制造" => PolicyOverlay::full(10.0, 3.5, 4.5, 5.0, 7.0, 18.0, 28.0),
        // 低波动行业
        "金融" => PolicyOverlay::full(8.0, 3.0, 4.0, 4.0, 6.0, 15.0, 25.0),
        "公用事业" => PolicyOverlay::full(7.0, 2.5, 3.5, 4.0, 5.0, 12.0, 20.0),
        _ => return None,
    };
    Some(overlay)
}

/// # Summary
/// 智能体角色的区间策略表；仅技术面与总经理角色有专属阈值，
/// 其余角色返回 `None` 沿用下层策略。
pub fn role_overlay(role: AgentRole) -> Option<PolicyOverlay> {
    let overlay = match role {
        AgentRole::Technical => PolicyOverlay::minima(10.0, 4.0, 5.0, 5.0, 8.0),
        AgentRole::Gm => PolicyOverlay::minima(12.0, 4.0, 5.0, 6.0, 10.0),
        _ => return None,
    };
    Some(overlay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_values() {
        let policy = IntervalPolicy::default();
        assert_eq!(policy.min_total_width_percent, 12.0);
        assert_eq!(policy.min_buy_width_percent, 4.0);
        assert_eq!(policy.min_sell_width_percent, 5.0);
        assert_eq!(policy.min_below_current_percent, 6.0);
        assert_eq!(policy.min_above_current_percent, 10.0);
        assert_eq!(policy.max_below_current_percent, Some(25.0));
        assert_eq!(policy.max_above_current_percent, Some(35.0));
    }

    #[test]
    fn test_unknown_layers_fall_through() {
        // 未知行业与未配置角色均不改变默认策略
        let policy = IntervalPolicy::resolve(Some("航运"), Some(AgentRole::Macro), None);
        assert_eq!(policy, IntervalPolicy::default());
    }

    #[test]
    fn test_industry_overlay_replaces_all_fields() {
        let policy = IntervalPolicy::resolve(Some("科技"), None, None);
        assert_eq!(policy.min_total_width_percent, 18.0);
        assert_eq!(policy.max_above_current_percent, Some(40.0));
    }

    #[test]
    fn test_role_overlay_keeps_lower_layer_maxima() {
        // 技术面角色只覆盖五个下限，行业层的上限继续生效
        let policy = IntervalPolicy::resolve(Some("科技"), Some(AgentRole::Technical), None);
        assert_eq!(policy.min_total_width_percent, 10.0);
        assert_eq!(policy.min_above_current_percent, 8.0);
        assert_eq!(policy.max_below_current_percent, Some(30.0));
        assert_eq!(policy.max_above_current_percent, Some(40.0));
    }

    #[test]
    fn test_caller_override_wins_last() {
        let overrides = PolicyOverlay {
            min_total_width_percent: Some(20.0),
            ..PolicyOverlay::default()
        };
        let policy =
            IntervalPolicy::resolve(Some("金融"), Some(AgentRole::Gm), Some(&overrides));
        assert_eq!(policy.min_total_width_percent, 20.0);
        // 其余字段由角色层（GM）决定
        assert_eq!(policy.min_above_current_percent, 10.0);
        // 上限仍来自行业层（金融）
        assert_eq!(policy.max_below_current_percent, Some(15.0));
    }
}
