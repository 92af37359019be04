use std::io::Read;
use std::path::PathBuf;

use boduan_core::common::AgentRole;
use boduan_core::market::entity::StockContext;
use boduan_interval::{extract_intervals, render_report, validate_and_adjust};
use clap::Parser;
use tracing::info;

/// 从智能体决策文本中提取买卖区间并做合规性验证
#[derive(Debug, Parser)]
#[command(name = "boduan", version)]
struct Args {
    /// 当前价格（所有百分比阈值的计算基准）
    #[arg(long)]
    price: f64,
    /// 决策文本文件路径，缺省时从标准输入读取
    #[arg(long)]
    file: Option<PathBuf>,
    /// 行业名称，用于行业策略表查找（如 科技、金融）
    #[arg(long)]
    industry: Option<String>,
    /// 产出文本的智能体角色（如 TECHNICAL、GM）
    #[arg(long)]
    role: Option<AgentRole>,
    /// 20日平均真实波幅
    #[arg(long)]
    atr: Option<f64>,
    /// 20日波动率（小数形式）
    #[arg(long)]
    volatility: Option<f64>,
    /// 市值（亿元）
    #[arg(long)]
    market_cap: Option<f64>,
    /// 日振幅百分比
    #[arg(long)]
    amplitude: Option<f64>,
}

/// # Summary
/// 演示入口：读入一段决策文本，跑完提取 → 验证 → 报告的完整流水线。
///
/// # Logic
/// 1. 初始化全局日志。
/// 2. 从文件或标准输入读取文本，组装行情快照。
/// 3. 提取失败属预期的软失败，提示后以非零码退出；
///    验证仅在参照价非法时报错。
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    info!("读入决策文本 {} 字符", text.chars().count());

    let ctx = StockContext {
        current_price: args.price,
        volatility_20d: args.volatility,
        atr_20d: args.atr,
        market_cap: args.market_cap,
        industry: args.industry,
        daily_amplitude: args.amplitude,
        volume: None,
    };

    let Some(interval) = extract_intervals(&text) else {
        // 软失败：文本里没有可识别的买卖区间，交由上游重试或原样展示
        eprintln!("未能从文本中提取到完整的买卖区间，请检查产出格式");
        std::process::exit(2);
    };

    let adjusted = validate_and_adjust(&interval, &ctx, None, args.role)?;
    print!("{}", render_report(&adjusted));

    Ok(())
}
