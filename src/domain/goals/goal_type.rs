//! GoalType enum representing the 12 predefined financial goal categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The 12 financial goal categories, in selector order.
///
/// Serialized by display name, the same text the goal type field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalType {
    #[serde(rename = "Retirement Planning")]
    RetirementPlanning,
    #[serde(rename = "Education Funding")]
    EducationFunding,
    #[serde(rename = "Home Ownership")]
    HomeOwnership,
    #[serde(rename = "Wealth Accumulation")]
    WealthAccumulation,
    #[serde(rename = "Emergency Fund")]
    EmergencyFund,
    #[serde(rename = "Estate Planning")]
    EstatePlanning,
    #[serde(rename = "Health Care Planning")]
    HealthCarePlanning,
    #[serde(rename = "Debt Management")]
    DebtManagement,
    #[serde(rename = "Insurance Coverage")]
    InsuranceCoverage,
    #[serde(rename = "Tax Planning")]
    TaxPlanning,
    #[serde(rename = "Investment Strategy")]
    InvestmentStrategy,
    #[serde(rename = "Business Ownership")]
    BusinessOwnership,
}

impl GoalType {
    /// Returns all goal types in canonical order.
    pub fn all() -> &'static [GoalType] {
        &[
            GoalType::RetirementPlanning,
            GoalType::EducationFunding,
            GoalType::HomeOwnership,
            GoalType::WealthAccumulation,
            GoalType::EmergencyFund,
            GoalType::EstatePlanning,
            GoalType::HealthCarePlanning,
            GoalType::DebtManagement,
            GoalType::InsuranceCoverage,
            GoalType::TaxPlanning,
            GoalType::InvestmentStrategy,
            GoalType::BusinessOwnership,
        ]
    }

    /// The first category; the draft goal starts here.
    pub fn first() -> GoalType {
        GoalType::RetirementPlanning
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalType::RetirementPlanning => "Retirement Planning",
            GoalType::EducationFunding => "Education Funding",
            GoalType::HomeOwnership => "Home Ownership",
            GoalType::WealthAccumulation => "Wealth Accumulation",
            GoalType::EmergencyFund => "Emergency Fund",
            GoalType::EstatePlanning => "Estate Planning",
            GoalType::HealthCarePlanning => "Health Care Planning",
            GoalType::DebtManagement => "Debt Management",
            GoalType::InsuranceCoverage => "Insurance Coverage",
            GoalType::TaxPlanning => "Tax Planning",
            GoalType::InvestmentStrategy => "Investment Strategy",
            GoalType::BusinessOwnership => "Business Ownership",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for GoalType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalType::all()
            .iter()
            .copied()
            .find(|g| g.display_name() == s)
            .ok_or_else(|| ValidationError::unknown_option("goal_type", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_returns_12_distinct_types() {
        let all = GoalType::all();
        assert_eq!(all.len(), 12);
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), 12);
    }

    #[test]
    fn first_is_retirement_planning() {
        assert_eq!(GoalType::first(), GoalType::all()[0]);
        assert_eq!(GoalType::first().to_string(), "Retirement Planning");
    }

    #[test]
    fn display_names_parse_back() {
        for goal_type in GoalType::all() {
            assert_eq!(goal_type.display_name().parse::<GoalType>().unwrap(), *goal_type);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("Lottery Winnings".parse::<GoalType>().is_err());
        assert!("retirement planning".parse::<GoalType>().is_err());
    }

    #[test]
    fn serialized_name_is_the_display_name() {
        for goal_type in GoalType::all() {
            let json = serde_json::to_value(goal_type).unwrap();
            assert_eq!(json, goal_type.display_name());
            assert_eq!(json.as_str().unwrap().parse::<GoalType>().unwrap(), *goal_type);
        }
    }
}
