use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Percent;

/// Risk tier for a debt-to-income ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtiLevel {
    Healthy,
    Moderate,
    Caution,
    Urgent,
}

/// Guidance attached to a DTI tier. Suggestion order is meaningful: the
/// first entry is the primary recommended action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub level: DtiLevel,
    pub message: String,
    pub suggestions: Vec<String>,
}

/// Classify a DTI percentage into its tier. Total over all finite inputs;
/// tier upper bounds are inclusive (20 is healthy, 20.01 is moderate).
pub fn recommend_for_dti(dti: Percent) -> Recommendation {
    if dti <= dec!(20) {
        Recommendation {
            level: DtiLevel::Healthy,
            message: "Your debt-to-income ratio is healthy. Maintain good financial habits."
                .to_string(),
            suggestions: vec![
                "Continue building emergency fund".to_string(),
                "Consider investing surplus income".to_string(),
                "Maintain current payment schedule".to_string(),
            ],
        }
    } else if dti <= dec!(35) {
        Recommendation {
            level: DtiLevel::Moderate,
            message:
                "Your debt-to-income ratio is moderate. Focus on budgeting and building emergency fund."
                    .to_string(),
            suggestions: vec![
                "Create a strict monthly budget".to_string(),
                "Build 3-6 months emergency fund".to_string(),
                "Consider increasing debt payments if possible".to_string(),
                "Track expenses closely".to_string(),
            ],
        }
    } else if dti <= dec!(50) {
        Recommendation {
            level: DtiLevel::Caution,
            message:
                "Your debt-to-income ratio requires caution. Consider debt consolidation or refinancing."
                    .to_string(),
            suggestions: vec![
                "Implement debt snowball or avalanche method".to_string(),
                "Explore debt consolidation options".to_string(),
                "Negotiate lower interest rates with creditors".to_string(),
                "Cut non-essential spending".to_string(),
                "Consider balance transfer cards with 0% APR".to_string(),
            ],
        }
    } else {
        Recommendation {
            level: DtiLevel::Urgent,
            message: "Your debt-to-income ratio is critical. Immediate action required."
                .to_string(),
            suggestions: vec![
                "Contact creditors to negotiate payment plans".to_string(),
                "Consider debt consolidation or settlement".to_string(),
                "Pause all non-essential spending".to_string(),
                "Seek professional financial counseling".to_string(),
                "Explore debt management programs".to_string(),
                "Consider bankruptcy as last resort (consult attorney)".to_string(),
            ],
        }
    }
}
