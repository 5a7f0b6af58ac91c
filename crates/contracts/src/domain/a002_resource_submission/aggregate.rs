use crate::enums::resource_category::ResourceCategory;
use serde::{Deserialize, Serialize};

/// Предложение нового ресурса из формы.
///
/// Данные никуда не отправляются и не попадают в хранилище.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSubmission {
    pub org_name: String,
    pub category: Option<ResourceCategory>,
    pub address: String,
    pub phone: Option<String>,
    pub contact_email: String,
    pub description: String,
}

impl ResourceSubmission {
    /// Пустые необязательные поля приводятся к `None`
    pub fn normalized(mut self) -> Self {
        self.org_name = self.org_name.trim().to_string();
        self.address = self.address.trim().to_string();
        self.contact_email = self.contact_email.trim().to_string();
        self.description = self.description.trim().to_string();
        self.phone = self
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_drops_blank_phone() {
        let submission = ResourceSubmission {
            org_name: "  Eastside Legal Clinic ".into(),
            category: Some(ResourceCategory::Legal),
            phone: Some("   ".into()),
            ..Default::default()
        }
        .normalized();

        assert_eq!(submission.org_name, "Eastside Legal Clinic");
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ResourceSubmission {
            org_name: "Hope Works".into(),
            category: Some(ResourceCategory::Employment),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(json["orgName"], "Hope Works");
        assert_eq!(json["category"], "employment");
    }
}
