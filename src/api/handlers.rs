use crate::{
    api::models::{
        ApiError, CreateSupplyRequest, CreateTestimonialRequest, Envelope, HealthStatus,
        LoginRequest, LoginResponse, RegisterRequest,
    },
    models::{Supply, Testimonial},
    service::CompassService,
    storage::in_memory::InMemoryStorage,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::{Map, Value};
use std::sync::Arc;

pub type AppService = CompassService<InMemoryStorage>;

async fn health_check() -> impl IntoResponse {
    Json(HealthStatus {
        message: "Server is running smoothly".to_string(),
        timestamp: Utc::now(),
    })
}

// AUTH

async fn register(
    State(service): State<Arc<AppService>>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    service.register(req.name, req.email, req.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::<Value>::message_only("User registered successfully")),
    ))
}

async fn login(
    State(service): State<Arc<AppService>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let token = service.login(&req.email, &req.password).await?;
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
    }))
}

// SUPPLIES

async fn create_supply(
    State(service): State<Arc<AppService>>,
    Json(req): Json<CreateSupplyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let ack = service
        .create_supply(Supply {
            image: req.image,
            category: req.category,
            title: req.title,
            description: req.description,
            amount: req.amount,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data("Supply created successfully", ack)),
    ))
}

async fn list_supplies(
    State(service): State<Arc<AppService>>,
) -> Result<impl IntoResponse, ApiError> {
    let supplies = service.list_supplies().await?;
    Ok(Json(Envelope::with_data(
        "Supply retrieved successfully",
        supplies,
    )))
}

// Unknown and malformed ids both come back as a null payload with 200.
async fn get_supply(
    State(service): State<Arc<AppService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let supply = service.get_supply(&id).await?;
    Ok(Json(Envelope::with_data(
        "Supply retrieved successfully",
        supply.unwrap_or(Value::Null),
    )))
}

async fn delete_supply(
    State(service): State<Arc<AppService>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let ack = service.delete_supply(&id).await?;
    Ok(Json(Envelope::with_data("Supply delete successfully", ack)))
}

// TESTIMONIALS

async fn create_testimonial(
    State(service): State<Arc<AppService>>,
    Json(req): Json<CreateTestimonialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    service
        .create_testimonial(Testimonial {
            name: req.name,
            title: req.title,
            description: req.description,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::<Value>::message_only(
            "Testimonials created successfully",
        )),
    ))
}

// 201 on a GET is non-standard; kept for client compatibility.
async fn list_testimonials(
    State(service): State<Arc<AppService>>,
) -> Result<impl IntoResponse, ApiError> {
    let testimonials = service.list_testimonials().await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data(
            "Testimonials retrieved successfully",
            testimonials,
        )),
    ))
}

// VOLUNTEERS

async fn create_volunteer(
    State(service): State<Arc<AppService>>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    service.create_volunteer(fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::<Value>::message_only(
            "Volunteer created successfully",
        )),
    ))
}

async fn list_volunteers(
    State(service): State<Arc<AppService>>,
) -> Result<impl IntoResponse, ApiError> {
    let volunteers = service.list_volunteers().await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data(
            "Volunteers retrieved successfully",
            volunteers,
        )),
    ))
}

// COMMENTS

async fn create_comment(
    State(service): State<Arc<AppService>>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, ApiError> {
    service.create_comment(fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::<Value>::message_only("Comment created successfully")),
    ))
}

async fn list_comments(
    State(service): State<Arc<AppService>>,
) -> Result<impl IntoResponse, ApiError> {
    let comments = service.list_comments().await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data(
            "Comments retrieved successfully",
            comments,
        )),
    ))
}

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/v1/register", post(register))
        .route("/api/v1/login", post(login))
        .route("/api/v1/supplies", post(create_supply).get(list_supplies))
        .route(
            "/api/v1/supplies/{id}",
            get(get_supply).delete(delete_supply),
        )
        .route(
            "/api/v1/testimonials",
            post(create_testimonial).get(list_testimonials),
        )
        .route(
            "/api/v1/volunteers",
            post(create_volunteer).get(list_volunteers),
        )
        .route("/api/v1/comments", post(create_comment).get(list_comments))
        .with_state(service)
}
