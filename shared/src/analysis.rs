use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialShare {
    pub name: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    pub co2_saved: String,
    pub water_saved: String,
    pub energy_saved: String,
}

/// Classification record for one analyzed waste image. Material percentages
/// are illustrative and are not required to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub waste_type: String,
    pub recyclable_percentage: u8,
    pub hazardous: bool,
    pub disposal_method: String,
    pub materials: Vec<MaterialShare>,
    pub environmental_impact: EnvironmentalImpact,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// The single canned classification served by the demo. Both the analyze
    /// endpoint and the upload flow attach this exact record.
    pub fn demo() -> Self {
        Self {
            waste_type: "Construction Debris".to_string(),
            recyclable_percentage: 65,
            hazardous: false,
            disposal_method: "Segregation and Recycling".to_string(),
            materials: vec![
                MaterialShare { name: "Concrete".into(), percentage: 40 },
                MaterialShare { name: "Wood".into(), percentage: 25 },
                MaterialShare { name: "Metal".into(), percentage: 20 },
                MaterialShare { name: "Plastic".into(), percentage: 10 },
                MaterialShare { name: "Other".into(), percentage: 5 },
            ],
            environmental_impact: EnvironmentalImpact {
                co2_saved: "120kg".into(),
                water_saved: "500L".into(),
                energy_saved: "200kWh".into(),
            },
            recommendations: vec![
                "Separate concrete for recycling into aggregate".into(),
                "Recover metal components for scrap recycling".into(),
                "Process wood for mulch or biomass fuel".into(),
                "Ensure proper disposal of any potentially hazardous materials".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub results: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_result_has_expected_shape() {
        let result = AnalysisResult::demo();
        assert_eq!(result.waste_type, "Construction Debris");
        assert_eq!(result.recyclable_percentage, 65);
        assert!(!result.hazardous);
        assert_eq!(result.materials.len(), 5);
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(AnalysisResult::demo()).unwrap();
        assert!(json.get("wasteType").is_some());
        assert!(json.get("recyclablePercentage").is_some());
        assert!(json.get("disposalMethod").is_some());
        assert!(json["environmentalImpact"].get("co2Saved").is_some());
    }
}
