//! Contributions and their verification proofs.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{de, AccountAddress, ResourceData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationProof {
    #[serde(deserialize_with = "de::identifier")]
    pub contribution_id: String,
    #[serde(deserialize_with = "de::identifier")]
    pub campaign_id: String,
    pub verifier: AccountAddress,
    pub verification_method: String,
    #[serde(deserialize_with = "de::integer")]
    pub authenticity_score: u8,
    #[serde(deserialize_with = "de::integer")]
    pub proof_timestamp: u64,
    pub additional_metadata: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    #[serde(deserialize_with = "de::identifier")]
    pub id: String,
    #[serde(deserialize_with = "de::identifier")]
    pub campaign_id: String,
    pub contributor: AccountAddress,
    pub data_hash: String,
    #[serde(deserialize_with = "de::integer")]
    pub quality_score: u8,
    pub is_verified: bool,
    #[serde(deserialize_with = "de::integer")]
    pub submission_time: u64,
    pub verification_proof: VerificationProof,
}

impl ResourceData for Contribution {
    fn check(&self) -> Result<(), String> {
        if self.quality_score > 100 {
            return Err(format!("quality_score {} exceeds 100", self.quality_score));
        }
        if self.verification_proof.authenticity_score > 100 {
            return Err(format!(
                "authenticity_score {} exceeds 100",
                self.verification_proof.authenticity_score
            ));
        }
        if self.verification_proof.contribution_id != self.id {
            return Err(format!(
                "verification proof belongs to contribution {}, not {}",
                self.verification_proof.contribution_id, self.id
            ));
        }
        Ok(())
    }
}

/// Body of a contribution submission.
///
/// Either `data_hash` or raw `data` must be present; raw data is hashed with
/// SHA-256 before it leaves the process.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_payload_present"))]
pub struct ContributionRequest {
    #[validate(length(min = 1, max = 64))]
    pub campaign_id: String,
    #[validate(custom = "validate_hex_hash")]
    pub data_hash: Option<String>,
    pub data: Option<String>,
}

fn validate_payload_present(request: &ContributionRequest) -> Result<(), ValidationError> {
    match (&request.data_hash, &request.data) {
        (Some(_), Some(_)) => Err(ValidationError::new("both_data_and_hash")),
        (None, None) => Err(ValidationError::new("missing_data")),
        _ => Ok(()),
    }
}

fn validate_hex_hash(hash: &str) -> Result<(), ValidationError> {
    if is_hex_hash(hash) {
        Ok(())
    } else {
        Err(ValidationError::new("data_hash_not_hex"))
    }
}

/// `0x`-optional, non-empty, even-length hex.
pub fn is_hex_hash(hash: &str) -> bool {
    let digits = hash.strip_prefix("0x").unwrap_or(hash);
    !digits.is_empty() && digits.len() % 2 == 0 && hex::decode(digits).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "id": "7",
            "campaign_id": "1",
            "contributor": "0xbeef",
            "data_hash": "0xdeadbeef",
            "quality_score": 91,
            "is_verified": true,
            "submission_time": "1700000100",
            "verification_proof": {
                "contribution_id": "7",
                "campaign_id": "1",
                "verifier": "0xcafe",
                "verification_method": "zk-attestation",
                "authenticity_score": 97,
                "proof_timestamp": "1700000200",
                "additional_metadata": ""
            }
        })
    }

    #[test]
    fn decodes_nested_proof() {
        let contribution: Contribution = serde_json::from_value(sample()).unwrap();
        assert!(contribution.is_verified);
        assert_eq!(contribution.verification_proof.verifier.as_str(), "0xcafe");
        assert!(contribution.check().is_ok());
    }

    #[test]
    fn string_fields_are_not_hex_decoded() {
        let mut raw = sample();
        raw["verification_proof"]["additional_metadata"] = json!("0x4142");
        let contribution: Contribution = serde_json::from_value(raw).unwrap();
        assert_eq!(contribution.verification_proof.additional_metadata, "0x4142");
    }

    #[test]
    fn mismatched_proof_fails_check() {
        let mut raw = sample();
        raw["verification_proof"]["contribution_id"] = json!("8");
        let contribution: Contribution = serde_json::from_value(raw).unwrap();
        assert!(contribution.check().is_err());
    }

    #[test]
    fn request_needs_exactly_one_payload() {
        let hashed = ContributionRequest {
            campaign_id: "1".to_string(),
            data_hash: Some("0xabcd".to_string()),
            data: None,
        };
        assert!(hashed.validate().is_ok());

        let neither = ContributionRequest {
            data_hash: None,
            ..hashed.clone()
        };
        assert!(neither.validate().is_err());

        let not_hex = ContributionRequest {
            data_hash: Some("0xnothex".to_string()),
            ..hashed
        };
        assert!(not_hex.validate().is_err());
    }

    #[test]
    fn hex_hash_shapes() {
        assert!(is_hex_hash("deadbeef"));
        assert!(is_hex_hash("0xdeadbeef"));
        assert!(!is_hex_hash("0x"));
        assert!(!is_hex_hash("0xabc"));
    }
}
