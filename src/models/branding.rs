//! Branding model

use serde::{Deserialize, Serialize};

/// Business branding shown in the header band and footer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingInfo {
    #[serde(default)]
    pub business_name: String,
    #[serde(default, alias = "logo")]
    pub logo_url: Option<String>,
}

impl BrandingInfo {
    pub fn new(business_name: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            logo_url: None,
        }
    }

    /// Business name, or a neutral placeholder when blank
    pub fn display_name(&self) -> &str {
        let trimmed = self.business_name.trim();
        if trimmed.is_empty() {
            "Personal Training"
        } else {
            trimmed
        }
    }
}
