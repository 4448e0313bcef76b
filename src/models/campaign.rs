//! Campaign snapshot as stored by the `campaign` module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{de, AccountAddress, ResourceData};

/// A data-collection bounty. Only ever a read-only snapshot of chain state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(deserialize_with = "de::identifier")]
    pub id: String,
    pub creator: AccountAddress,
    #[serde(deserialize_with = "de::decimal")]
    pub total_reward_pool: String,
    #[serde(deserialize_with = "de::utf8_bytes")]
    pub data_type: String,
    #[serde(deserialize_with = "de::integer")]
    pub quality_threshold: u8,
    #[serde(deserialize_with = "de::integer")]
    pub deadline: u64,
    #[serde(deserialize_with = "de::integer")]
    pub min_contributions: u64,
    #[serde(deserialize_with = "de::integer")]
    pub max_contributions: u64,
    #[serde(deserialize_with = "de::integer")]
    pub service_fee_percentage: u8,
    #[serde(deserialize_with = "de::integer")]
    pub status: u8,
}

impl Campaign {
    pub fn deadline_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::try_from(self.deadline).ok()?, 0)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.deadline_at().map(|deadline| deadline <= now).unwrap_or(false)
    }
}

impl ResourceData for Campaign {
    fn check(&self) -> Result<(), String> {
        if self.quality_threshold > 100 {
            return Err(format!(
                "quality_threshold {} exceeds 100",
                self.quality_threshold
            ));
        }
        if self.min_contributions > self.max_contributions {
            return Err(format!(
                "min_contributions {} exceeds max_contributions {}",
                self.min_contributions, self.max_contributions
            ));
        }
        Ok(())
    }
}

/// Parameters for `campaign::create_campaign`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_campaign_bounds"))]
pub struct CampaignParams {
    pub total_reward_pool: u64,
    #[validate(length(min = 1, max = 128))]
    pub data_type: String,
    #[validate(range(max = 100))]
    pub quality_threshold: u8,
    pub deadline: u64,
    pub min_contributions: u64,
    pub max_contributions: u64,
    #[validate(range(max = 100))]
    pub service_fee_percentage: u8,
}

fn validate_campaign_bounds(params: &CampaignParams) -> Result<(), ValidationError> {
    if params.total_reward_pool == 0 {
        return Err(ValidationError::new("empty_reward_pool"));
    }
    if params.min_contributions > params.max_contributions {
        return Err(ValidationError::new("min_contributions_exceeds_max"));
    }
    Ok(())
}
