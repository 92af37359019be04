use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// # Summary
/// 智能体角色枚举，标识产出决策文本的投研角色。
///
/// # Invariants
/// - 角色集合固定，策略表按角色键查找，未配置的角色静默回退默认策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    // 宏观分析
    Macro,
    // 行业分析
    Industry,
    // 技术面分析
    Technical,
    // 资金面分析
    Funds,
    // 基本面分析
    Fundamental,
    // 基本面经理
    ManagerFundamental,
    // 动量经理
    ManagerMomentum,
    // 系统性风控
    RiskSystem,
    // 组合风控
    RiskPortfolio,
    // 总经理（最终决策）
    Gm,
}

impl FromStr for AgentRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MACRO" => Ok(AgentRole::Macro),
            "INDUSTRY" => Ok(AgentRole::Industry),
            "TECHNICAL" => Ok(AgentRole::Technical),
            "FUNDS" => Ok(AgentRole::Funds),
            "FUNDAMENTAL" => Ok(AgentRole::Fundamental),
            "MANAGER_FUNDAMENTAL" => Ok(AgentRole::ManagerFundamental),
            "MANAGER_MOMENTUM" => Ok(AgentRole::ManagerMomentum),
            "RISK_SYSTEM" => Ok(AgentRole::RiskSystem),
            "RISK_PORTFOLIO" => Ok(AgentRole::RiskPortfolio),
            "GM" => Ok(AgentRole::Gm),
            _ => Err(format!("Unknown AgentRole: {}", s)),
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentRole::Macro => write!(f, "MACRO"),
            AgentRole::Industry => write!(f, "INDUSTRY"),
            AgentRole::Technical => write!(f, "TECHNICAL"),
            AgentRole::Funds => write!(f, "FUNDS"),
            AgentRole::Fundamental => write!(f, "FUNDAMENTAL"),
            AgentRole::ManagerFundamental => write!(f, "MANAGER_FUNDAMENTAL"),
            AgentRole::ManagerMomentum => write!(f, "MANAGER_MOMENTUM"),
            AgentRole::RiskSystem => write!(f, "RISK_SYSTEM"),
            AgentRole::RiskPortfolio => write!(f, "RISK_PORTFOLIO"),
            AgentRole::Gm => write!(f, "GM"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for s in [
            "MACRO",
            "INDUSTRY",
            "TECHNICAL",
            "FUNDS",
            "FUNDAMENTAL",
            "MANAGER_FUNDAMENTAL",
            "MANAGER_MOMENTUM",
            "RISK_SYSTEM",
            "RISK_PORTFOLIO",
            "GM",
        ] {
            let role: AgentRole = s.parse().expect("known role");
            assert_eq!(role.to_string(), s);
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("gm".parse::<AgentRole>(), Ok(AgentRole::Gm));
        assert!("CEO".parse::<AgentRole>().is_err());
    }
}
