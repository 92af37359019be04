//! # `boduan-interval` - 区间验证引擎
//!
//! 本 crate 是对生成式文本产出的买卖区间做确定性后处理的引擎层：
//! 从自由文本恢复结构化区间，依据分层策略检查宽度、距价、重叠与止损位置，
//! 并对违规项做确定性修复，全过程记录审计日志。
//!
//! ## 架构职责
//! - `extract`：按序尝试多组文本模式，恢复 `PriceInterval` 候选
//! - `normalize`：买/卖规整、重叠消解、止损归位与指标重算的同步流水线
//! - `report`：渲染固定结构的验证报告文本
//! - `advisor`：依据行情特征推荐验证策略
//!
//! 所有操作均为纯同步函数，无网络、磁盘与全局可变状态，天然并发安全。

pub mod advisor;
pub mod extract;
pub mod normalize;
pub mod report;

pub use extract::extract_intervals;
pub use normalize::validate_and_adjust;
pub use report::render_report;
