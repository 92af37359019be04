//! # `boduan-core` - 波段交易区间领域层
//!
//! 本 crate 定义区间验证引擎的领域模型：价格区间实体、股票上下文、
//! 分层验证策略表及领域错误。
//!
//! ## 架构职责
//! - 提供 `PriceInterval` / `AdjustedInterval` 等纯数据实体
//! - 维护 默认 → 行业 → 角色 → 调用方 四层策略叠加规则
//! - 不包含任何 IO、网络或异步逻辑，所有类型均可安全跨线程共享

pub mod common;
pub mod interval;
pub mod market;
