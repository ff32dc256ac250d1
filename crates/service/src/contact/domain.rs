use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::pagination::{Pagination, DEFAULT_PAGE_SIZE};

/// Create/replace input. Optional fields may be omitted but not sent empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub last_name: Option<String>,
    #[validate(
        email(message = "must be a valid email"),
        length(max = 200, message = "must be at most 200 characters")
    )]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 20, message = "must be 1 to 20 characters"))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<models::contacts::Model> for Contact {
    fn from(m: models::contacts::Model) -> Self {
        Self { id: m.id, first_name: m.first_name, last_name: m.last_name, email: m.email, phone: m.phone }
    }
}

/// Validated field values handed to the repository; owner travels separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactData {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<ContactRequest> for ContactData {
    fn from(r: ContactRequest) -> Self {
        Self { first_name: r.first_name, last_name: r.last_name, email: r.email, phone: r.phone }
    }
}

fn default_page() -> u64 { 1 }
fn default_size() -> u64 { DEFAULT_PAGE_SIZE }

/// Query of `GET /api/contacts`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 1000000, message = "must be between 1 and 1000000"))]
    pub page: u64,
    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub size: u64,
}

impl Default for SearchContactRequest {
    fn default() -> Self {
        Self { name: None, email: None, phone: None, page: default_page(), size: default_size() }
    }
}

/// Normalized filters; each present one narrows the result (AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Trimmed only; case folding happens next to the column it is matched against.
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl SearchContactRequest {
    pub fn filter(&self) -> ContactFilter {
        fn present(v: &Option<String>) -> Option<String> {
            v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
        }
        ContactFilter {
            name: present(&self.name),
            email: present(&self.email),
            phone: present(&self.phone),
        }
    }

    pub fn pagination(&self) -> Pagination { Pagination::new(self.page, self.size) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn empty_filters_are_dropped_and_name_kept_verbatim() {
        let req = SearchContactRequest {
            name: Some(" Test 1 ".into()),
            email: Some("".into()),
            phone: None,
            ..SearchContactRequest::default()
        };
        assert_eq!(req.filter(), ContactFilter { name: Some("Test 1".into()), email: None, phone: None });
    }

    #[test]
    fn search_defaults() {
        let req: SearchContactRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.size, 10);
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn search_rejects_zero_page_and_oversized_pages() {
        let req = SearchContactRequest { page: 0, size: 1000, ..SearchContactRequest::default() };
        let Err(crate::ServiceError::Validation(v)) = validate(&req) else { panic!("expected validation error") };
        assert!(v.contains_field("page") && v.contains_field("size"));
    }

    #[test]
    fn search_rejects_page_beyond_limit() {
        let req = SearchContactRequest { page: u64::MAX, size: 100, ..SearchContactRequest::default() };
        let Err(crate::ServiceError::Validation(v)) = validate(&req) else { panic!("expected validation error") };
        assert!(v.contains_field("page"));
        assert!(!v.contains_field("size"));

        let last = SearchContactRequest { page: 1_000_000, size: 100, ..SearchContactRequest::default() };
        assert!(validate(&last).is_ok());
    }

    #[test]
    fn contact_request_collects_every_violation() {
        let req = ContactRequest {
            first_name: "".into(),
            last_name: Some("test".into()),
            email: Some("test".into()),
            phone: Some("0811111099999999999999999999999999999999999".into()),
        };
        let Err(crate::ServiceError::Validation(v)) = validate(&req) else { panic!("expected validation error") };
        assert!(v.contains_field("first_name"));
        assert!(v.contains_field("email"));
        assert!(v.contains_field("phone"));
        assert!(!v.contains_field("last_name"));
    }

    #[test]
    fn minimal_contact_is_valid() {
        let req: ContactRequest = serde_json::from_str(r#"{"first_name":"test","phone":"08111110"}"#).unwrap();
        assert!(validate(&req).is_ok());
        assert!(req.email.is_none());
    }
}
