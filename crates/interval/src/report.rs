use boduan_core::interval::entity::AdjustedInterval;

/// # Summary
/// 渲染区间验证报告。结构固定：验证结果与五项指标、调整后区间、
/// 自动调整项（为空省略）、警告信息（为空省略）、建议。
/// 下游按此结构解析展示，字段顺序与标题不可变更。
pub fn render_report(adjusted: &AdjustedInterval) -> String {
    let interval = &adjusted.interval;
    let metrics = &adjusted.validation;
    let mut report = String::new();

    report.push_str("## 📊 区间验证报告\n\n");

    let verdict = if metrics.meets_standards {
        "✅ 通过"
    } else {
        "⚠️ 未完全通过"
    };
    report.push_str(&format!("### 验证结果: {}\n", verdict));
    report.push_str(&format!("- 总区间宽度: {}%\n", metrics.total_width_percent));
    report.push_str(&format!("- 买入区间宽度: {}%\n", metrics.buy_width_percent));
    report.push_str(&format!("- 卖出区间宽度: {}%\n", metrics.sell_width_percent));
    report.push_str(&format!(
        "- 买入区间低于当前价: {}%\n",
        metrics.below_current_percent
    ));
    report.push_str(&format!(
        "- 卖出区间高于当前价: {}%\n\n",
        metrics.above_current_percent
    ));

    report.push_str("### 📈 调整后区间\n");
    report.push_str(&format!(
        "- **买入区间**: {:.2} - {:.2}\n",
        interval.buy.low, interval.buy.high
    ));
    report.push_str(&format!(
        "- **卖出区间**: {:.2} - {:.2}\n",
        interval.sell.low, interval.sell.high
    ));
    if let Some(stop_loss) = interval.stop_loss {
        report.push_str(&format!("- **止损价格**: {:.2}\n", stop_loss));
    }

    if !adjusted.adjustments.is_empty() {
        report.push_str("\n### 🔧 自动调整项\n");
        for adjustment in &adjusted.adjustments {
            report.push_str(&format!("- {}\n", adjustment));
        }
    }

    if !adjusted.warnings.is_empty() {
        report.push_str("\n### ⚠️ 警告信息\n");
        for warning in &adjusted.warnings {
            report.push_str(&format!("- {}\n", warning));
        }
    }

    report.push_str("\n### 📋 建议\n");
    if metrics.total_width_percent < 10.0 {
        report.push_str(&format!(
            "- ❗ 总区间宽度({}%)偏小，建议考虑波动率扩大区间\n",
            metrics.total_width_percent
        ));
    }
    if metrics.below_current_percent < 5.0 {
        report.push_str(&format!(
            "- ❗ 买入区间距离当前价较近({}%)，可能缺乏安全边际\n",
            metrics.below_current_percent
        ));
    }
    if metrics.above_current_percent < 8.0 {
        report.push_str(&format!(
            "- ❗ 卖出区间距离当前价较近({}%)，可能缺乏盈利空间\n",
            metrics.above_current_percent
        ));
    }

    if metrics.meets_standards
        && metrics.total_width_percent >= 12.0
        && metrics.below_current_percent >= 6.0
        && metrics.above_current_percent >= 10.0
    {
        report.push_str("- ✅ 区间设置合理，符合波段交易要求\n");
    }

    report
}
