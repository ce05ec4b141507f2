use actix_web::{get, post, web, Responder};
use calorie_model::{CalorieRequest, CalorieResult};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ErrorBody},
    openapi,
};

pub const WELCOME_MESSAGE: &str = "Welcome to the Calorie Burn Calculator API";

#[derive(Serialize, ToSchema)]
pub struct Welcome {
    message: String,
}

#[utoipa::path(
    responses(
        (status = 200, description = "Welcome message", body = Welcome)
    )
)]
#[get("/")]
pub async fn index() -> impl Responder {
    web::Json(Welcome {
        message: WELCOME_MESSAGE.to_owned(),
    })
}

#[utoipa::path(
    summary = "Calculate Calories Burned",
    description = "Calculates the calories burned based on activity, duration, and weight using MET values",
    request_body = CalorieRequest,
    responses(
        (status = 200, description = "Calories burned", body = CalorieResult),
        (status = 400, description = "Duration or weight out of range", body = ErrorBody),
        (status = 422, description = "Request body does not match the schema", body = ErrorBody)
    )
)]
#[post("/calculate-calories")]
pub async fn calculate_calories(
    body: web::Json<Value>,
) -> Result<web::Json<CalorieResult>, ApiError> {
    let request = parse_request(body.into_inner())?;
    debug!("Received {:?}", request);

    let result = request.compute().map_err(|e| {
        warn!("Rejected {:?}: {}", request, e);
        e
    })?;

    info!(
        "{} for {} min at {} kg: {} kcal",
        result.activity, result.duration_minutes, result.weight_kg, result.calories_burned
    );
    Ok(web::Json(result))
}

/// Turns a JSON document into a request, naming the offending field when it
/// does not fit.
fn parse_request(body: Value) -> Result<CalorieRequest, ApiError> {
    serde_path_to_error::deserialize(body).map_err(|err| {
        let path = err.path().to_string();
        let detail = if path == "." {
            err.inner().to_string()
        } else {
            format!("{}: {}", path, err.inner())
        };
        warn!("Rejected request body: {}", detail);
        ApiError::Schema(detail)
    })
}

/// Body deserialization failures are reported as 422 so they can be told
/// apart from out of range values.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        ApiError::Schema(err.to_string()).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(index)
        .service(calculate_calories)
        .service(openapi::openapi_json);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn schema_detail(body: Value) -> String {
        match parse_request(body) {
            Err(ApiError::Schema(detail)) => detail,
            other => panic!("expected a schema error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_activity_names_the_field() {
        let detail = schema_detail(json!({
            "activity": "swimming",
            "duration_minutes": 30,
            "weight_kg": 60
        }));
        assert!(detail.starts_with("activity: "), "{}", detail);
        assert!(detail.contains("swimming"), "{}", detail);
    }

    #[test]
    fn wrong_weight_type_names_the_field() {
        let detail = schema_detail(json!({
            "activity": "running",
            "duration_minutes": 30,
            "weight_kg": "heavy"
        }));
        assert!(detail.starts_with("weight_kg: "), "{}", detail);
    }

    #[test]
    fn missing_field_is_named_in_the_message() {
        let detail = schema_detail(json!({ "activity": "running", "weight_kg": 60 }));
        assert!(detail.contains("duration_minutes"), "{}", detail);
    }

    #[test]
    fn valid_body_parses() {
        let request = parse_request(json!({
            "activity": "cycling",
            "duration_minutes": 45.0,
            "weight_kg": 80
        }))
        .unwrap();
        assert_eq!(request.duration_minutes, 45);
        assert_eq!(request.weight_kg, 80.0);
    }
}
