//! Booking submission pipeline: validate → create → (auto-approve) →
//! (mark-paid). The create step is fatal; the follow-up steps are
//! best-effort and individually captured, never silently swallowed.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::operating_hours::MAX_HOUR;
use crate::errors::AppError;
use crate::gql;
use crate::models::{Booking, BookingDetail, BookingStatus, PaymentStatus};
use crate::services::backend::BookingBackend;
use crate::validate;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub institution: Option<String>,
    pub surat_url: Option<String>,
    /// Trusted academic submissions are approved immediately after
    /// creation instead of waiting for staff review.
    #[serde(default)]
    pub is_academic: bool,
    #[serde(default)]
    pub details: Vec<BookingDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StepOutcome {
    /// Step not part of this submission variant.
    Skipped,
    Completed,
    Failed { reason: String },
}

impl StepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub booking: Booking,
    pub approve: StepOutcome,
    pub payment: StepOutcome,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateOutcome {
    pub booking_code: String,
    pub status: BookingStatus,
    /// Result of the compensating payment reset on cancellation.
    pub compensation: StepOutcome,
}

pub fn validate(req: &SubmissionRequest) -> Result<(), AppError> {
    if req.name.trim().is_empty() || req.contact.trim().is_empty() || req.email.trim().is_empty() {
        return Err(AppError::Validation(
            "name, contact and email are required".to_string(),
        ));
    }

    if !validate::is_valid_name(req.name.trim()) {
        return Err(AppError::Validation(format!(
            "invalid name: {}",
            req.name.trim()
        )));
    }

    if !validate::is_valid_phone(req.contact.trim()) {
        return Err(AppError::Validation(format!(
            "invalid contact number: {}",
            req.contact.trim()
        )));
    }

    if !validate::is_valid_email(req.email.trim()) {
        return Err(AppError::Validation(format!(
            "invalid email: {}",
            req.email.trim()
        )));
    }

    if req.details.is_empty() {
        return Err(AppError::Validation(
            "at least one booking detail is required".to_string(),
        ));
    }

    for detail in &req.details {
        if detail.start_hour > MAX_HOUR {
            return Err(AppError::Validation(format!(
                "invalid start hour: {}",
                detail.start_hour
            )));
        }
    }

    Ok(())
}

/// Run the submission saga. Creation failure propagates; each follow-up
/// failure is logged and captured in the outcome while the created
/// booking is still returned.
pub async fn submit(
    backend: &dyn BookingBackend,
    token: Option<&str>,
    req: &SubmissionRequest,
) -> Result<SubmissionOutcome, AppError> {
    validate(req)?;

    let data = backend
        .execute(
            gql::MUTATION_CREATE_BOOKING,
            json!({
                "name": req.name.trim(),
                "contact": req.contact.trim(),
                "email": req.email.trim(),
                "institution": req.institution,
                "suratUrl": req.surat_url,
                "isAcademic": req.is_academic,
                "details": req.details,
            }),
            token,
        )
        .await?;

    let booking: Booking = serde_json::from_value(data["createBooking"].clone())
        .map_err(|e| AppError::Upstream(format!("unexpected createBooking payload: {e}")))?;

    if !req.is_academic {
        return Ok(SubmissionOutcome {
            booking,
            approve: StepOutcome::Skipped,
            payment: StepOutcome::Skipped,
        });
    }

    let code = booking.booking_code.clone();

    let approve = match backend
        .execute(
            gql::MUTATION_UPDATE_BOOKING_STATUS,
            json!({ "bookingCode": code, "status": BookingStatus::Approved.as_str() }),
            token,
        )
        .await
    {
        Ok(_) => StepOutcome::Completed,
        Err(e) => {
            tracing::warn!(booking_code = %code, error = %e, "auto-approve step failed");
            StepOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    // Runs even when approval failed; the two follow-ups are independent.
    let payment = match backend
        .execute(
            gql::MUTATION_UPDATE_PAYMENT,
            json!({ "bookingCode": code, "paymentStatus": PaymentStatus::Unpaid.as_str() }),
            token,
        )
        .await
    {
        Ok(_) => StepOutcome::Completed,
        Err(e) => {
            tracing::warn!(booking_code = %code, error = %e, "payment-status step failed");
            StepOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    Ok(SubmissionOutcome {
        booking,
        approve,
        payment,
    })
}

/// Update a booking's status. Cancellation chains a best-effort payment
/// reset to UNPAID; its failure never fails the cancellation itself.
pub async fn update_status(
    backend: &dyn BookingBackend,
    token: Option<&str>,
    booking_code: &str,
    status: BookingStatus,
) -> Result<StatusUpdateOutcome, AppError> {
    backend
        .execute(
            gql::MUTATION_UPDATE_BOOKING_STATUS,
            json!({ "bookingCode": booking_code, "status": status.as_str() }),
            token,
        )
        .await?;

    let compensation = if status == BookingStatus::Cancelled {
        match backend
            .execute(
                gql::MUTATION_UPDATE_PAYMENT,
                json!({ "bookingCode": booking_code, "paymentStatus": PaymentStatus::Unpaid.as_str() }),
                token,
            )
            .await
        {
            Ok(_) => StepOutcome::Completed,
            Err(e) => {
                tracing::warn!(
                    booking_code,
                    error = %e,
                    "failed to reset payment status on cancel"
                );
                StepOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    } else {
        StepOutcome::Skipped
    };

    Ok(StatusUpdateOutcome {
        booking_code: booking_code.to_string(),
        status,
        compensation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_request() -> SubmissionRequest {
        SubmissionRequest {
            name: "Budi Santoso".to_string(),
            contact: "08123456789".to_string(),
            email: "budi@example.com".to_string(),
            institution: None,
            surat_url: None,
            is_academic: false,
            details: vec![BookingDetail {
                field_id: 1,
                booking_date: NaiveDate::from_ymd_opt(2025, 8, 9).unwrap(),
                start_hour: 9,
                price_per_hour: None,
                subtotal: None,
            }],
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate(&valid_request()).is_ok());
    }

    #[test]
    fn test_missing_contact_fails_fast() {
        let mut req = valid_request();
        req.contact = "".to_string();
        assert!(matches!(validate(&req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_empty_details_rejected() {
        let mut req = valid_request();
        req.details.clear();
        assert!(matches!(validate(&req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        assert!(validate(&req).is_err());
    }

    #[test]
    fn test_bad_phone_rejected() {
        let mut req = valid_request();
        req.contact = "12345".to_string();
        assert!(validate(&req).is_err());
    }

    #[test]
    fn test_out_of_range_hour_rejected() {
        let mut req = valid_request();
        req.details[0].start_hour = 24;
        assert!(validate(&req).is_err());
    }

    #[test]
    fn test_step_outcome_serializes_with_reason() {
        let failed = StepOutcome::Failed {
            reason: "timeout".to_string(),
        };
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["reason"], "timeout");

        let skipped = serde_json::to_value(StepOutcome::Skipped).unwrap();
        assert_eq!(skipped["status"], "skipped");
    }
}
