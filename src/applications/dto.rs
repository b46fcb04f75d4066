use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::applications::repo_types::Application;
use crate::validation::{is_valid_email, ValidationErrors, Validator};

/// Request body for creating an application. Every field is optional so the
/// validator can report all missing ones at once.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub cdl_license: Option<String>,
    pub state: Option<String>,
    pub driving_experience: Option<String>,
    pub truck_types: Option<Vec<String>>,
    pub long_haul_trips: Option<String>,
    pub comments: Option<String>,
}

/// Validated application data, ready to persist.
#[derive(Debug)]
pub struct NewApplication {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub cdl_license: String,
    pub state: String,
    pub driving_experience: String,
    pub truck_types: Vec<String>,
    pub long_haul_trips: String,
    pub comments: Option<String>,
}

impl CreateApplicationRequest {
    pub fn validate(&self) -> Result<NewApplication, ValidationErrors> {
        let mut v = Validator::new();

        v.require("fullName", &self.full_name, "Full name is required");
        v.require("phoneNumber", &self.phone_number, "Phone number is required");
        if let Some(email) = v.require("email", &self.email, "Email is required") {
            if !is_valid_email(email) {
                v.fail("email", "Please enter a valid email address");
            }
        }
        v.require("cdlLicense", &self.cdl_license, "CDL license is required");
        v.require("state", &self.state, "State is required");
        v.require(
            "drivingExperience",
            &self.driving_experience,
            "Driving experience is required",
        );

        match self.truck_types.as_deref() {
            Some(types) if !types.is_empty() => {}
            _ => v.fail("truckTypes", "Truck types are required"),
        }

        match self.long_haul_trips.as_deref() {
            Some("yes") | Some("no") => {}
            Some(_) => v.fail(
                "longHaulTrips",
                "Long haul trips preference must be either 'yes' or 'no'",
            ),
            None => v.fail(
                "longHaulTrips",
                "Long haul trips preference is required",
            ),
        }

        v.finish()?;
        Ok(NewApplication {
            full_name: self.full_name.clone().unwrap_or_default(),
            phone_number: self.phone_number.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            cdl_license: self.cdl_license.clone().unwrap_or_default(),
            state: self.state.clone().unwrap_or_default(),
            driving_experience: self.driving_experience.clone().unwrap_or_default(),
            truck_types: self.truck_types.clone().unwrap_or_default(),
            long_haul_trips: self.long_haul_trips.clone().unwrap_or_default(),
            comments: self.comments.clone(),
        })
    }
}

/// Raw page/limit query parameters. Kept as strings so junk input falls back
/// to the defaults instead of a deserialization error.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        parse_clamped(self.page.as_deref(), 1)
    }

    pub fn limit(&self) -> i64 {
        parse_clamped(self.limit.as_deref(), 10)
    }
}

// Non-numeric and non-positive input both fall back to the default.
fn parse_clamped(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.parse::<i64>().ok())
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}

impl Pagination {
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        Self {
            total,
            page,
            limit,
            pages: (total + limit - 1) / limit,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApplicationPage {
    pub data: Vec<Application>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateApplicationRequest {
        CreateApplicationRequest {
            full_name: Some("John Smith".into()),
            phone_number: Some("+1234567890".into()),
            email: Some("john@example.com".into()),
            cdl_license: Some("CDL-12345".into()),
            state: Some("TX".into()),
            driving_experience: Some("5 years OTR".into()),
            truck_types: Some(vec!["flatbed".into(), "reefer".into()]),
            long_haul_trips: Some("yes".into()),
            comments: None,
        }
    }

    #[test]
    fn validate_accepts_complete_request() {
        let new = full_request().validate().expect("valid");
        assert_eq!(new.truck_types.len(), 2);
        assert_eq!(new.long_haul_trips, "yes");
        assert!(new.comments.is_none());
    }

    #[test]
    fn missing_cdl_license_reports_exactly_that_field() {
        let mut request = full_request();
        request.cdl_license = None;
        let errors = request.validate().unwrap_err();
        let fields: Vec<_> = errors.keys().cloned().collect();
        assert_eq!(fields, vec!["cdlLicense"]);
        assert_eq!(
            errors["cdlLicense"][0].message.as_deref(),
            Some("CDL license is required")
        );
    }

    #[test]
    fn empty_truck_types_is_rejected() {
        let mut request = full_request();
        request.truck_types = Some(vec![]);
        let errors = request.validate().unwrap_err();
        assert!(errors.contains_key("truckTypes"));
    }

    #[test]
    fn long_haul_must_be_yes_or_no() {
        let mut request = full_request();
        request.long_haul_trips = Some("sometimes".into());
        let errors = request.validate().unwrap_err();
        assert!(errors.contains_key("longHaulTrips"));

        let mut request = full_request();
        request.long_haul_trips = Some("no".into());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn page_query_clamps_junk_input() {
        let q = PageQuery {
            page: Some("abc".into()),
            limit: Some("-3".into()),
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 10);

        let q = PageQuery {
            page: Some("0".into()),
            limit: Some("0".into()),
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 10);

        let q = PageQuery::default();
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 10);

        let q = PageQuery {
            page: Some("3".into()),
            limit: Some("25".into()),
        };
        assert_eq!(q.page(), 3);
        assert_eq!(q.limit(), 25);
    }

    #[test]
    fn pagination_pages_is_ceiling_of_total_over_limit() {
        assert_eq!(Pagination::new(25, 1, 10).pages, 3);
        assert_eq!(Pagination::new(30, 1, 10).pages, 3);
        assert_eq!(Pagination::new(31, 1, 10).pages, 4);
        assert_eq!(Pagination::new(0, 1, 10).pages, 0);
        assert_eq!(Pagination::new(5, 1, 10).pages, 1);
    }
}
