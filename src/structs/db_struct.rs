use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/* -------------------------------------------------------------------------- */
/*                                      -                                     */
/* -------------------------------------------------------------------------- */
/* -------------------------------------------------------------------------- */
/*                                  SERVICES                                  */
/* -------------------------------------------------------------------------- */
/* -------------------------------------------------------------------------- */
/*                                      -                                     */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "service_category")]
pub enum ServiceCategory {
    Plumbing,
    Electrical,
    Cleaning,
    Carpentry,
    #[serde(rename = "HVAC")]
    #[sqlx(rename = "HVAC")]
    Hvac,
}

impl ServiceCategory {
    pub const ALL: [&'static str; 5] =
        ["Plumbing", "Electrical", "Cleaning", "Carpentry", "HVAC"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Plumbing" => Some(Self::Plumbing),
            "Electrical" => Some(Self::Electrical),
            "Cleaning" => Some(Self::Cleaning),
            "Carpentry" => Some(Self::Carpentry),
            "HVAC" => Some(Self::Hvac),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user_email: String,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub service_name: String,
    pub service_category: ServiceCategory,
    pub price: Decimal,
    pub service_area: String,
    pub service_description: String,
    pub service_image: String,
    pub provider_name: String,
    pub provider_email: String,
    pub provider_image: String,
    pub average_rating: f64,
    pub reviews: Json<Vec<Review>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateService {
    pub service_name: Option<String>,
    pub service_category: Option<String>,
    pub price: Option<Decimal>,
    pub service_area: Option<String>,
    pub service_description: Option<String>,
    pub service_image: Option<String>,
    pub provider_name: Option<String>,
    pub provider_email: Option<String>,
    pub provider_image: Option<String>,
}

/// A create payload that passed validation, ready to insert.
#[derive(Debug)]
pub struct NewService {
    pub service_name: String,
    pub service_category: ServiceCategory,
    pub price: Decimal,
    pub service_area: String,
    pub service_description: String,
    pub service_image: String,
    pub provider_name: String,
    pub provider_email: String,
    pub provider_image: String,
}

impl CreateService {
    /// Validates the payload, collecting every violation rather than
    /// stopping at the first one.
    pub fn validate(self) -> Result<NewService, Vec<String>> {
        let mut violations = Vec::new();

        let service_name = required_text(&self.service_name, "serviceName", &mut violations);
        let service_area = required_text(&self.service_area, "serviceArea", &mut violations);
        let service_description =
            required_text(&self.service_description, "serviceDescription", &mut violations);
        let service_image = required_text(&self.service_image, "serviceImage", &mut violations);
        let provider_name = required_text(&self.provider_name, "providerName", &mut violations);
        let provider_email = required_text(&self.provider_email, "providerEmail", &mut violations);

        let service_category = match self.service_category.as_deref().map(str::trim) {
            None => {
                violations.push("serviceCategory is required".to_string());
                None
            }
            Some(raw) => {
                let parsed = ServiceCategory::parse(raw);
                if parsed.is_none() {
                    violations.push(format!(
                        "serviceCategory must be one of: {}",
                        ServiceCategory::ALL.join(", ")
                    ));
                }
                parsed
            }
        };

        let price = match self.price {
            None => {
                violations.push("price is required".to_string());
                None
            }
            Some(value) if value < Decimal::ZERO => {
                violations.push("price must be zero or greater".to_string());
                None
            }
            Some(value) => Some(value),
        };

        match (
            service_name,
            service_category,
            price,
            service_area,
            service_description,
            service_image,
            provider_name,
            provider_email,
        ) {
            (
                Some(service_name),
                Some(service_category),
                Some(price),
                Some(service_area),
                Some(service_description),
                Some(service_image),
                Some(provider_name),
                Some(provider_email),
            ) if violations.is_empty() => Ok(NewService {
                service_name,
                service_category,
                price,
                service_area,
                service_description,
                service_image,
                provider_name,
                provider_email: provider_email.to_lowercase(),
                provider_image: self.provider_image.unwrap_or_default(),
            }),
            _ => Err(violations),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    pub service_name: Option<String>,
    pub service_category: Option<String>,
    pub price: Option<Decimal>,
    pub service_area: Option<String>,
    pub service_description: Option<String>,
    pub service_image: Option<String>,
    pub provider_name: Option<String>,
    pub provider_image: Option<String>,
}

/// Validated partial update. Absent fields keep their stored values.
#[derive(Debug)]
pub struct ServiceChanges {
    pub service_name: Option<String>,
    pub service_category: Option<ServiceCategory>,
    pub price: Option<Decimal>,
    pub service_area: Option<String>,
    pub service_description: Option<String>,
    pub service_image: Option<String>,
    pub provider_name: Option<String>,
    pub provider_image: Option<String>,
}

impl UpdateService {
    /// Provided fields are held to the same constraints as create.
    pub fn validate(self) -> Result<ServiceChanges, Vec<String>> {
        let mut violations = Vec::new();

        let service_name = match self.service_name.as_deref().map(str::trim) {
            Some("") => {
                violations.push("serviceName cannot be empty".to_string());
                None
            }
            other => other.map(str::to_string),
        };

        let service_category = match self.service_category.as_deref().map(str::trim) {
            None => None,
            Some(raw) => {
                let parsed = ServiceCategory::parse(raw);
                if parsed.is_none() {
                    violations.push(format!(
                        "serviceCategory must be one of: {}",
                        ServiceCategory::ALL.join(", ")
                    ));
                }
                parsed
            }
        };

        if matches!(self.price, Some(value) if value < Decimal::ZERO) {
            violations.push("price must be zero or greater".to_string());
        }

        if violations.is_empty() {
            Ok(ServiceChanges {
                service_name,
                service_category,
                price: self.price,
                service_area: self.service_area,
                service_description: self.service_description,
                service_image: self.service_image,
                provider_name: self.provider_name,
                provider_image: self.provider_image,
            })
        } else {
            Err(violations)
        }
    }
}

fn required_text(
    value: &Option<String>,
    field: &str,
    violations: &mut Vec<String>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Some(trimmed.to_string()),
        _ => {
            violations.push(format!("{} is required", field));
            None
        }
    }
}

/* -------------------------------------------------------------------------- */
/*                                      -                                     */
/* -------------------------------------------------------------------------- */
/* -------------------------------------------------------------------------- */
/*                                  BOOKINGS                                  */
/* -------------------------------------------------------------------------- */
/* -------------------------------------------------------------------------- */
/*                                      -                                     */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status")]
pub enum BookingStatus {
    Pending,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    Completed,
}

impl BookingStatus {
    pub const ALL: [&'static str; 3] = ["Pending", "In Progress", "Completed"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

#[derive(Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub service_image: String,
    pub service_price: Decimal,
    pub provider_email: String,
    pub provider_name: String,
    pub user_email: String,
    pub user_name: String,
    #[serde(rename = "currentDate")]
    pub request_date: String,
    pub service_taking_date: String,
    pub special_instruction: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub service_id: Option<Uuid>,
    pub service_name: Option<String>,
    pub service_image: Option<String>,
    pub service_price: Option<Decimal>,
    pub provider_email: Option<String>,
    pub provider_name: Option<String>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    #[serde(rename = "currentDate")]
    pub request_date: Option<String>,
    pub service_taking_date: Option<String>,
    pub special_instruction: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug)]
pub struct NewBooking {
    pub service_id: Uuid,
    pub service_name: String,
    pub service_image: String,
    pub service_price: Decimal,
    pub provider_email: String,
    pub provider_name: String,
    pub user_email: String,
    pub user_name: String,
    pub request_date: String,
    pub service_taking_date: String,
    pub special_instruction: String,
    pub status: BookingStatus,
}

impl CreateBooking {
    /// Wire names of every required field that is absent or blank, in
    /// declaration order. Clients rely on seeing the full list at once.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.service_id.is_none() {
            missing.push("serviceId");
        }
        if is_blank(&self.service_name) {
            missing.push("serviceName");
        }
        if is_blank(&self.service_image) {
            missing.push("serviceImage");
        }
        if self.service_price.is_none() {
            missing.push("servicePrice");
        }
        if is_blank(&self.provider_email) {
            missing.push("providerEmail");
        }
        if is_blank(&self.user_email) {
            missing.push("userEmail");
        }
        if is_blank(&self.user_name) {
            missing.push("userName");
        }
        if is_blank(&self.request_date) {
            missing.push("currentDate");
        }
        if is_blank(&self.service_taking_date) {
            missing.push("serviceTakingDate");
        }

        missing
    }

    pub fn validate(self) -> Result<NewBooking, Vec<String>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing
                .into_iter()
                .map(|field| format!("{} is required", field))
                .collect());
        }

        let status = match self.status.as_deref() {
            None => BookingStatus::Pending,
            Some(raw) => match BookingStatus::parse(raw) {
                Some(status) => status,
                None => {
                    return Err(vec![format!(
                        "Invalid status. Must be one of: {}",
                        BookingStatus::ALL.join(", ")
                    )]);
                }
            },
        };

        match (
            self.service_id,
            self.service_name,
            self.service_image,
            self.service_price,
            self.provider_email,
            self.user_email,
            self.user_name,
            self.request_date,
            self.service_taking_date,
        ) {
            (
                Some(service_id),
                Some(service_name),
                Some(service_image),
                Some(service_price),
                Some(provider_email),
                Some(user_email),
                Some(user_name),
                Some(request_date),
                Some(service_taking_date),
            ) => Ok(NewBooking {
                service_id,
                service_name,
                service_image,
                service_price,
                provider_email: provider_email.to_lowercase(),
                provider_name: self.provider_name.unwrap_or_default(),
                user_email: user_email.to_lowercase(),
                user_name,
                request_date,
                service_taking_date,
                special_instruction: self.special_instruction.unwrap_or_default(),
                status,
            }),
            _ => Err(vec!["Invalid booking payload".to_string()]),
        }
    }
}

#[derive(Deserialize, Default)]
pub struct UpdateBookingStatus {
    pub status: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/* -------------------------------------------------------------------------- */
/*                                      -                                     */
/* -------------------------------------------------------------------------- */
/* -------------------------------------------------------------------------- */
/*                                    USERS                                   */
/* -------------------------------------------------------------------------- */
/* -------------------------------------------------------------------------- */
/*                                      -                                     */
/* -------------------------------------------------------------------------- */

#[derive(Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub provider: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUser {
    pub uid: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub provider: Option<String>,
}

impl UpsertUser {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if is_blank(&self.uid) {
            missing.push("uid");
        }
        if is_blank(&self.email) {
            missing.push("email");
        }

        missing
    }
}

/* -------------------------------------------------------------------------- */
/*                                      -                                     */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn full_create_service() -> CreateService {
        CreateService {
            service_name: Some("  Leak Fix  ".to_string()),
            service_category: Some("Plumbing".to_string()),
            price: Some(Decimal::from(50)),
            service_area: Some("Downtown".to_string()),
            service_description: Some("Fixes leaks fast".to_string()),
            service_image: Some("https://img.example/leak.jpg".to_string()),
            provider_name: Some("Jo".to_string()),
            provider_email: Some("Jo@X.com".to_string()),
            provider_image: None,
        }
    }

    fn full_create_booking() -> CreateBooking {
        CreateBooking {
            service_id: Some(Uuid::new_v4()),
            service_name: Some("Leak Fix".to_string()),
            service_image: Some("https://img.example/leak.jpg".to_string()),
            service_price: Some(Decimal::from(50)),
            provider_email: Some("Jo@X.com".to_string()),
            provider_name: None,
            user_email: Some("Sam@Y.com".to_string()),
            user_name: Some("Sam".to_string()),
            request_date: Some("2026-08-07".to_string()),
            service_taking_date: Some("2026-08-14".to_string()),
            special_instruction: None,
            status: None,
        }
    }

    #[test]
    fn create_service_collects_every_violation() {
        let Err(violations) = CreateService::default().validate() else {
            panic!("empty payload must not validate");
        };

        assert_eq!(violations.len(), 8);
        assert!(violations.contains(&"serviceName is required".to_string()));
        assert!(violations.contains(&"serviceCategory is required".to_string()));
        assert!(violations.contains(&"price is required".to_string()));
        assert!(violations.contains(&"providerEmail is required".to_string()));
    }

    #[test]
    fn create_service_rejects_negative_price_and_unknown_category() {
        let payload = CreateService {
            price: Some(Decimal::from(-1)),
            service_category: Some("Gardening".to_string()),
            ..full_create_service()
        };

        let Err(violations) = payload.validate() else {
            panic!("payload must not validate");
        };

        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&"price must be zero or greater".to_string()));
        assert!(violations[1].contains("serviceCategory must be one of")
            || violations[0].contains("serviceCategory must be one of"));
    }

    #[test]
    fn create_service_trims_name_and_lowercases_email() {
        let record = match full_create_service().validate() {
            Ok(record) => record,
            Err(violations) => panic!("unexpected violations: {:?}", violations),
        };

        assert_eq!(record.service_name, "Leak Fix");
        assert_eq!(record.provider_email, "jo@x.com");
        assert_eq!(record.provider_image, "");
        assert_eq!(record.service_category, ServiceCategory::Plumbing);
    }

    #[test]
    fn update_service_rejects_blank_name() {
        let payload = UpdateService {
            service_name: Some("   ".to_string()),
            ..UpdateService::default()
        };

        let Err(violations) = payload.validate() else {
            panic!("blank name must not validate");
        };

        assert_eq!(violations, vec!["serviceName cannot be empty".to_string()]);
    }

    #[test]
    fn update_service_keeps_absent_fields_absent() {
        let payload = UpdateService {
            price: Some(Decimal::from(75)),
            ..UpdateService::default()
        };

        let changes = match payload.validate() {
            Ok(changes) => changes,
            Err(violations) => panic!("unexpected violations: {:?}", violations),
        };

        assert_eq!(changes.price, Some(Decimal::from(75)));
        assert!(changes.service_name.is_none());
        assert!(changes.service_category.is_none());
    }

    #[test]
    fn booking_missing_fields_lists_every_absent_field_by_wire_name() {
        assert_eq!(
            CreateBooking::default().missing_fields(),
            vec![
                "serviceId",
                "serviceName",
                "serviceImage",
                "servicePrice",
                "providerEmail",
                "userEmail",
                "userName",
                "currentDate",
                "serviceTakingDate",
            ]
        );
    }

    #[test]
    fn booking_blank_strings_count_as_missing() {
        let payload = CreateBooking {
            user_name: Some("   ".to_string()),
            ..full_create_booking()
        };

        assert_eq!(payload.missing_fields(), vec!["userName"]);
    }

    #[test]
    fn booking_validate_applies_defaults() {
        let booking = match full_create_booking().validate() {
            Ok(booking) => booking,
            Err(violations) => panic!("unexpected violations: {:?}", violations),
        };

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.provider_name, "");
        assert_eq!(booking.special_instruction, "");
        assert_eq!(booking.provider_email, "jo@x.com");
        assert_eq!(booking.user_email, "sam@y.com");
    }

    #[test]
    fn booking_validate_rejects_unknown_status() {
        let payload = CreateBooking {
            status: Some("Cancelled".to_string()),
            ..full_create_booking()
        };

        let Err(violations) = payload.validate() else {
            panic!("unknown status must not validate");
        };

        assert_eq!(
            violations,
            vec!["Invalid status. Must be one of: Pending, In Progress, Completed".to_string()]
        );
    }

    #[test]
    fn booking_status_parses_exact_labels_only() {
        assert_eq!(BookingStatus::parse("In Progress"), Some(BookingStatus::InProgress));
        assert_eq!(BookingStatus::parse("in progress"), None);
        assert_eq!(BookingStatus::parse("Cancelled"), None);
    }

    #[test]
    fn service_category_parses_hvac() {
        assert_eq!(ServiceCategory::parse("HVAC"), Some(ServiceCategory::Hvac));
        assert_eq!(ServiceCategory::parse("Hvac"), None);
    }

    #[test]
    fn upsert_user_requires_uid_and_email() {
        assert_eq!(UpsertUser::default().missing_fields(), vec!["uid", "email"]);

        let payload = UpsertUser {
            uid: Some("firebase-uid-1".to_string()),
            email: Some("sam@y.com".to_string()),
            ..UpsertUser::default()
        };

        assert!(payload.missing_fields().is_empty());
    }
}
