use serde::Deserialize;

/// Body of `GET /api/v1/tenants/info`: what this tenant offers the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenantInfo {
    #[serde(default)]
    pub services: Vec<ServiceLink>,
    #[serde(default)]
    pub booking_url: Option<String>,
    #[serde(default)]
    pub numbers: Vec<String>,
}

/// A bookable service advertised by the tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceLink {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_sparse_payloads() {
        let info: TenantInfo = serde_json::from_str(r#"{"booking_url":"https://book.example"}"#)
            .unwrap();
        assert!(info.services.is_empty());
        assert!(info.numbers.is_empty());
        assert_eq!(info.booking_url.as_deref(), Some("https://book.example"));
    }
}
