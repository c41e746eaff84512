use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::credits::{
    classify_country, countries_by_region, estimate_credits, find_country, validate_ects_form,
    CountryOption, CreditError, DegreeDetails, EctsEstimate, EctsFormSubmission,
};
use crate::eligibility::{
    validate_eligibility_form, EligibilityEngine, EligibilityForm, EligibilityFormDraft,
};
use crate::error::AppError;

/// Router builder exposing the credit estimator and the eligibility checker.
pub fn assessment_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/ects/countries", get(countries_handler))
        .route("/api/v1/ects/estimate", post(estimate_handler))
        .route("/api/v1/ects/validate", post(ects_validation_handler))
        .route(
            "/api/v1/eligibility/validate",
            post(eligibility_validation_handler),
        )
        .route("/api/v1/eligibility/check", post(eligibility_check_handler))
        .with_state(engine)
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EstimateRequest {
    pub(crate) country_code: String,
    pub(crate) degree_details: DegreeDetails,
}

#[derive(Debug, Serialize)]
pub(crate) struct EstimateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) country: Option<CountryOption>,
    pub(crate) estimate: EctsEstimate,
    pub(crate) summary: String,
}

pub(crate) async fn countries_handler() -> Response {
    let payload = json!({ "regions": countries_by_region() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn estimate_handler(
    payload: Result<axum::Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(axum::Json(request)) => request,
        Err(rejection) => return rejected_body(rejection),
    };
    let country = find_country(&request.country_code).copied();
    let country_type = classify_country(&request.country_code);

    match estimate_credits(country_type, &request.degree_details) {
        Ok(estimate) => {
            let summary = estimate.summary();
            let view = EstimateResponse {
                country,
                estimate,
                summary,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => {
            debug!(country_code = %request.country_code, %error, "rejected credit estimate");
            unprocessable(credit_messages(&error, country))
        }
    }
}

pub(crate) async fn ects_validation_handler(
    payload: Result<axum::Json<EctsFormSubmission>, JsonRejection>,
) -> Response {
    let form = match payload {
        Ok(axum::Json(form)) => form,
        Err(rejection) => return rejected_body(rejection),
    };
    validation_report(validate_ects_form(&form))
}

pub(crate) async fn eligibility_validation_handler(
    payload: Result<axum::Json<EligibilityFormDraft>, JsonRejection>,
) -> Response {
    let draft = match payload {
        Ok(axum::Json(draft)) => draft,
        Err(rejection) => return rejected_body(rejection),
    };
    validation_report(validate_eligibility_form(&draft))
}

pub(crate) async fn eligibility_check_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    payload: Result<axum::Json<EligibilityFormDraft>, JsonRejection>,
) -> Response {
    let draft = match payload {
        Ok(axum::Json(draft)) => draft,
        Err(rejection) => return rejected_body(rejection),
    };
    match EligibilityForm::try_from(&draft) {
        Ok(form) => (StatusCode::OK, axum::Json(engine.score(&form))).into_response(),
        Err(error) => {
            debug!(violations = error.messages().len(), "rejected eligibility draft");
            AppError::from(error).into_response()
        }
    }
}

fn credit_messages(error: &CreditError, country: Option<CountryOption>) -> Vec<String> {
    match (error, country) {
        (CreditError::CountryTypeMismatch { .. }, Some(country)) => vec![format!(
            "Degree details do not match the credit system for {}",
            country.name
        )],
        _ => error.messages(),
    }
}

fn validation_report(errors: Vec<String>) -> Response {
    let payload = json!({
        "valid": errors.is_empty(),
        "errors": errors,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

/// Bodies that fail to decode are reported in the same shape as field errors.
fn rejected_body(rejection: JsonRejection) -> Response {
    debug!(status = %rejection.status(), "rejected request body");
    let message = match rejection {
        JsonRejection::JsonDataError(error) => error.body_text(),
        JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON".to_string(),
        JsonRejection::MissingJsonContentType(_) => {
            "Request body must be sent as application/json".to_string()
        }
        other => other.body_text(),
    };
    unprocessable(vec![message])
}

fn unprocessable(errors: Vec<String>) -> Response {
    let payload = json!({ "errors": errors });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
