use actix_web::{web, HttpRequest, HttpResponse};
use leptos::logging::log;

use crate::db::{Database, UserRow, VoteOutcome, Voter};
use crate::error::ApiError;
use crate::models::product::VoteReceipt;
use crate::models::review::ReviewDraft;

/// Registers the JSON API under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/products", web::get().to(get_products)) // GET /api/products
            .route("/products/{id}", web::get().to(get_product)) // GET /api/products/{id}
            .route("/products/{id}/reviews", web::post().to(create_review)) // POST /api/products/{id}/reviews
            .route(
                "/products/{id}/features/{feature_id}/vote",
                web::post().to(vote_feature),
            ), // POST /api/products/{id}/features/{feature_id}/vote
    );
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// User behind the request's bearer token, if any.
async fn session_user(req: &HttpRequest, db: &Database) -> Result<Option<UserRow>, ApiError> {
    match bearer_token(req) {
        Some(token) => Ok(db.user_by_token(token).await?),
        None => Ok(None),
    }
}

pub async fn get_products(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let products = db.get_products().await?;
    log!("[API] Returning {} products", products.len());
    Ok(HttpResponse::Ok().json(products))
}

pub async fn get_product(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    log!("[API] Received request for product: {}", id);
    match db.get_product(&id).await? {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => Err(ApiError::NotFound("Product not found".into())),
    }
}

pub async fn create_review(
    req: HttpRequest,
    db: web::Data<Database>,
    id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let product_id = id.into_inner();
    let user = session_user(&req, &db).await?.ok_or(ApiError::Unauthorized)?;
    log!("[API] Review request - product: {}, user: {}", product_id, user.id);

    if !db.product_exists(&product_id).await? {
        return Err(ApiError::NotFound("Product not found".into()));
    }
    if db.has_reviewed(&product_id, user.id).await? {
        return Err(ApiError::BadRequest("Product already reviewed".into()));
    }
    // Parsed only once the caller is known, so a bad body never hides a 401.
    let draft: ReviewDraft = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Invalid review body".into()))?;
    draft
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let review = db.insert_review(&product_id, &user, &draft).await?;
    log!("[API] Review {} added", review.id);
    Ok(HttpResponse::Ok().json(review))
}

pub async fn vote_feature(
    req: HttpRequest,
    db: web::Data<Database>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (product_id, feature_id) = path.into_inner();
    let voter = match session_user(&req, &db).await? {
        Some(user) => Voter::User(user.id),
        // The socket peer, never the client-supplied forwarding headers.
        None => Voter::Anonymous(
            req.peer_addr()
                .map(|addr| addr.ip().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        ),
    };
    log!("[API] Vote request - feature: {}, voter: {:?}", feature_id, voter);

    match db.record_vote(&product_id, &feature_id, &voter).await? {
        VoteOutcome::Counted(votes) => Ok(HttpResponse::Ok().json(VoteReceipt { id: feature_id, votes })),
        VoteOutcome::AlreadyVoted => Err(ApiError::BadRequest("Feature already voted".into())),
        VoteOutcome::AnonymousNotAllowed => Err(ApiError::Unauthorized),
        VoteOutcome::UnknownFeature => Err(ApiError::NotFound("Feature not found".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{NewFeature, NewProduct};
    use crate::models::product::{Product, ProductSummary};
    use crate::models::review::Review;
    use crate::models::ErrorDetail;
    use actix_web::{http::StatusCode, test, App};

    async fn test_db(allow_anonymous_vote: bool) -> web::Data<Database> {
        let db = Database::new(":memory:").unwrap();
        db.create_schema().await.unwrap();
        db.insert_product(&NewProduct {
            id: "p1".into(),
            name: "Widget".into(),
            description: None,
            logo: None,
            website_url: None,
            primary_color: None,
            secondary_color: None,
            allow_anonymous_vote,
            public: true,
        })
        .await
        .unwrap();
        let type_id = db.insert_feature_type("Feature", "#000").await.unwrap();
        db.insert_feature(&NewFeature {
            id: "f1".into(),
            product_id: "p1".into(),
            name: "Dark mode".into(),
            description: None,
            type_id: Some(type_id),
            status_id: None,
            public: true,
        })
        .await
        .unwrap();
        db.insert_user("Ann", "ann@example.com", "ann-token", false).await.unwrap();
        web::Data::new(db)
    }

    fn review_request(token: Option<&str>, rating: i64) -> test::TestRequest {
        let req = test::TestRequest::post()
            .uri("/api/products/p1/reviews")
            .set_json(ReviewDraft { rating, comment: "Solid".into() });
        match token {
            Some(token) => req.insert_header(("Authorization", format!("Bearer {}", token))),
            None => req,
        }
    }

    #[actix_web::test]
    async fn test_get_product_and_list() {
        let app = test::init_service(App::new().app_data(test_db(true).await).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/products").to_request();
        let products: Vec<ProductSummary> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(products.len(), 1);

        let req = test::TestRequest::get().uri("/api/products/p1").to_request();
        let product: Product = test::call_and_read_body_json(&app, req).await;
        assert_eq!(product.name, "Widget");
        assert_eq!(product.features.len(), 1);

        let req = test::TestRequest::get().uri("/api/products/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorDetail = test::read_body_json(resp).await;
        assert_eq!(body.detail, "Product not found");
    }

    #[actix_web::test]
    async fn test_review_rules() {
        let app = test::init_service(App::new().app_data(test_db(true).await).configure(configure)).await;

        let resp = test::call_service(&app, review_request(None, 4).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = test::call_service(&app, review_request(Some("forged"), 4).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = test::call_service(&app, review_request(Some("ann-token"), 0).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDetail = test::read_body_json(resp).await;
        assert_eq!(body.detail, "Please select a rating");

        let resp = test::call_service(&app, review_request(Some("ann-token"), 4).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let review: Review = test::read_body_json(resp).await;
        assert_eq!(review.rating, 4);
        assert_eq!(review.name.as_deref(), Some("Ann"));

        let resp = test::call_service(&app, review_request(Some("ann-token"), 5).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDetail = test::read_body_json(resp).await;
        assert_eq!(body.detail, "Product already reviewed");

        let req = test::TestRequest::get().uri("/api/products/p1").to_request();
        let product: Product = test::call_and_read_body_json(&app, req).await;
        assert_eq!(product.num_reviews, 1);
        assert_eq!(product.rating, Some(4.0));
    }

    #[actix_web::test]
    async fn test_anonymous_vote() {
        let app = test::init_service(App::new().app_data(test_db(true).await).configure(configure)).await;
        let vote = || {
            test::TestRequest::post()
                .uri("/api/products/p1/features/f1/vote")
                .peer_addr("10.1.2.3:4000".parse().unwrap())
                .to_request()
        };

        let receipt: VoteReceipt = test::call_and_read_body_json(&app, vote()).await;
        assert_eq!(receipt, VoteReceipt { id: "f1".into(), votes: 1 });

        let resp = test::call_service(&app, vote()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDetail = test::read_body_json(resp).await;
        assert_eq!(body.detail, "Feature already voted");
    }

    #[actix_web::test]
    async fn test_vote_requires_login_when_anonymous_disabled() {
        let app = test::init_service(App::new().app_data(test_db(false).await).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/products/p1/features/f1/vote")
            .peer_addr("10.1.2.3:4000".parse().unwrap())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/products/p1/features/f1/vote")
            .insert_header(("Authorization", "Bearer ann-token"))
            .to_request();
        let receipt: VoteReceipt = test::call_and_read_body_json(&app, req).await;
        assert_eq!(receipt.votes, 1);

        let req = test::TestRequest::post()
            .uri("/api/products/other/features/f1/vote")
            .insert_header(("Authorization", "Bearer ann-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_anonymous_voter_ignores_forwarded_headers() {
        let app = test::init_service(App::new().app_data(test_db(true).await).configure(configure)).await;

        let mut statuses = Vec::new();
        for n in 0..5 {
            let req = test::TestRequest::post()
                .uri("/api/products/p1/features/f1/vote")
                .peer_addr("10.1.2.3:4000".parse().unwrap())
                .insert_header(("X-Forwarded-For", format!("1.1.1.{}", n)))
                .insert_header(("Forwarded", format!("for=2.2.2.{}", n)))
                .to_request();
            statuses.push(test::call_service(&app, req).await.status());
        }
        assert_eq!(statuses[0], StatusCode::OK);
        assert!(statuses[1..].iter().all(|s| *s == StatusCode::BAD_REQUEST));

        let req = test::TestRequest::get().uri("/api/products/p1").to_request();
        let product: Product = test::call_and_read_body_json(&app, req).await;
        assert_eq!(product.features[0].votes, 1);
    }

    #[actix_web::test]
    async fn test_review_body_errors_keep_detail_contract() {
        let app = test::init_service(App::new().app_data(test_db(true).await).configure(configure)).await;
        let raw = |token: Option<&str>, body: &str| {
            let req = test::TestRequest::post()
                .uri("/api/products/p1/reviews")
                .insert_header(("Content-Type", "application/json"))
                .set_payload(body.to_string());
            let req = match token {
                Some(token) => req.insert_header(("Authorization", format!("Bearer {}", token))),
                None => req,
            };
            req.to_request()
        };

        // No token: 401 wins over an unparseable rating.
        let resp = test::call_service(&app, raw(None, r#"{"rating":300}"#)).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorDetail = test::read_body_json(resp).await;
        assert_eq!(body.detail, "Authentication credentials were not provided.");

        let resp = test::call_service(&app, raw(Some("ann-token"), r#"{"rating":300}"#)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDetail = test::read_body_json(resp).await;
        assert_eq!(body.detail, "Rating must be between 1 and 5");

        let resp = test::call_service(&app, raw(Some("ann-token"), "not json")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDetail = test::read_body_json(resp).await;
        assert_eq!(body.detail, "Invalid review body");
    }
}
