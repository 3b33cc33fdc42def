use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use models::CarRecord;
use serde::Serialize;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::AppState;

/// Encode `value` as a JSON 200 response; encoding failures become a 500 carrying the error text.
fn json_response<T: Serialize + ?Sized>(value: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(value).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

/// POST /cars
pub async fn insert(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let car = CarRecord::from_json(&body)?;
    let known_status = car.has_known_status();
    let id = state.cars.insert(car).await;
    info!(car_id = %id, known_status, "car created");
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/cars/{id}"))]))
}

/// GET /cars/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, ApiError> {
    let car = state.cars.get(&id).await.ok_or(ApiError::NotFound)?;
    json_response(&car)
}

/// GET /cars
pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let cars = state.cars.list().await;
    info!(count = cars.len(), "list cars");
    json_response(&cars)
}

/// PUT /cars/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let car = CarRecord::from_json(&body)?;
    let known_status = car.has_known_status();
    state.cars.update(&id, car).await?;
    info!(car_id = %id, known_status, "car updated");
    Ok(StatusCode::OK)
}

/// DELETE /cars/:id; absent ids still answer 200.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let existed = state.cars.delete(&id).await;
    info!(car_id = %id, existed, "car deleted");
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request, Router};
    use serde::ser::Error as _;
    use service::cars::CarStore;
    use tower::ServiceExt;
    use tower_http::cors::CorsLayer;

    use super::*;
    use crate::routes::build_router;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("boom"))
        }
    }

    fn app(store: Arc<CarStore>) -> Router {
        build_router(AppState::new(store), CorsLayer::very_permissive())
    }

    async fn body_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn serialization_failure_is_500_with_error_text() {
        let err = json_response(&Unencodable).unwrap_err();
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(resp).await.contains("boom"));
    }

    #[tokio::test]
    async fn insert_without_content_type_still_decodes() {
        let store = Arc::new(CarStore::new());
        let req = Request::post("/cars")
            .body(Body::from(r#"{"brand":"mazda","model":"2","price":1,"status":"on the way","mileage":0}"#))
            .unwrap();
        let resp = app(store.clone()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert!(resp.headers().get(header::LOCATION).is_some());
        assert!(body_text(resp).await.is_empty());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn undecodable_put_is_400_before_lookup() {
        let store = Arc::new(CarStore::new());
        let req = Request::put("/cars/unknown").body(Body::from("{")).unwrap();
        let resp = app(store).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_sets_json_content_type() {
        let store = Arc::new(CarStore::new());
        let id = store.insert(CarRecord::seed()).await;
        let req = Request::get(format!("/cars/{id}")).body(Body::empty()).unwrap();
        let resp = app(store).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
        let car: CarRecord = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(car, CarRecord::seed());
    }

    #[tokio::test]
    async fn empty_inventory_lists_as_empty_array() {
        let req = Request::get("/cars").body(Body::empty()).unwrap();
        let resp = app(Arc::new(CarStore::new())).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "[]");
    }

    #[tokio::test]
    async fn null_body_and_null_fields_are_accepted() {
        let store = Arc::new(CarStore::new());
        let req = Request::post("/cars").body(Body::from("null")).unwrap();
        let resp = app(store.clone()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = Request::post("/cars")
            .body(Body::from(r#"{"brand":"kia","model":null,"price":1,"status":"in stock","mileage":2}"#))
            .unwrap();
        let resp = app(store.clone()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let mut cars = store.list().await;
        cars.sort_by(|a, b| a.brand.cmp(&b.brand));
        assert_eq!(cars[0], CarRecord::default());
        assert_eq!(cars[1], CarRecord::new("kia", "", 1, "in stock", 2));
    }

    #[tokio::test]
    async fn unrecognized_status_is_stored_verbatim() {
        let store = Arc::new(CarStore::new());
        let req = Request::post("/cars")
            .body(Body::from(r#"{"brand":"lada","status":"stolen"}"#))
            .unwrap();
        let resp = app(store.clone()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let cars = store.list().await;
        assert_eq!(cars[0].status, "stolen");
        assert!(!cars[0].has_known_status());
    }
}
