use actix_web::{get, web, Responder};
use calorie_model::{Activity, CalorieRequest, CalorieResult};
use utoipa::OpenApi;

use crate::{error::ErrorBody, routes};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calorie Burn Calculator",
        version = "1.0.0",
        description = "A simple API to calculate calories burned based on activity, duration, and weight"
    ),
    paths(routes::index, routes::calculate_calories),
    components(schemas(Activity, CalorieRequest, CalorieResult, ErrorBody, routes::Welcome))
)]
pub struct ApiDoc;

#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    web::Json(ApiDoc::openapi())
}
