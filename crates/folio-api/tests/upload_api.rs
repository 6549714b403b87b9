//! HTTP-level integration tests for the multipart collections
//! (education, work, portfolios): image upload flow, extension
//! validation, image-preserving partial updates, and upload-failure
//! handling.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{
    auth_token, body_json, build_test_app, build_test_app_with_media, get, send_multipart,
    FailingMediaStore,
};
use sqlx::PgPool;

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00];

// ---------------------------------------------------------------------------
// Education
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_create_education_with_image(pool: PgPool) {
    let token = auth_token();
    let response = send_multipart(
        build_test_app(pool),
        Method::POST,
        "/api/education/",
        Some(&token),
        &[
            ("school", "State University"),
            ("degree", "BSc Computer Science"),
            ("years", "2015-2019"),
            ("ordinal", "1"),
        ],
        Some(("image", "diploma.png", PNG_BYTES)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["school"], "State University");
    assert_eq!(json["image"], "education/diploma");
    assert_eq!(
        json["image_url"],
        "https://media.test/demo/image/upload/education/diploma"
    );
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_create_education_without_image_has_null_url(pool: PgPool) {
    let token = auth_token();
    let response = send_multipart(
        build_test_app(pool),
        Method::POST,
        "/api/education/",
        Some(&token),
        &[
            ("school", "State University"),
            ("degree", "BSc"),
            ("years", "2015-2019"),
            ("ordinal", "1"),
        ],
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["image"].is_null());
    assert!(json["image_url"].is_null());
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_gif_upload_rejected_names_allowed_formats(pool: PgPool) {
    let token = auth_token();
    let response = send_multipart(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/education/",
        Some(&token),
        &[
            ("school", "State University"),
            ("degree", "BSc"),
            ("years", "2015-2019"),
            ("ordinal", "1"),
        ],
        Some(("image", "animation.gif", PNG_BYTES)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let message = json["fields"]["image"][0].as_str().unwrap();
    assert!(message.contains("png, jpg, jpeg"), "got: {message}");

    // No row was created.
    let list = body_json(get(build_test_app(pool), "/api/education/").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_patch_without_image_keeps_stored_reference(pool: PgPool) {
    let token = auth_token();
    let created = body_json(
        send_multipart(
            build_test_app(pool.clone()),
            Method::POST,
            "/api/education/",
            Some(&token),
            &[
                ("school", "State University"),
                ("degree", "BSc"),
                ("years", "2015-2019"),
                ("ordinal", "1"),
            ],
            Some(("image", "diploma.png", PNG_BYTES)),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    let url_before = created["image_url"].as_str().unwrap().to_string();

    let patched = send_multipart(
        build_test_app(pool),
        Method::PATCH,
        &format!("/api/education/{id}/"),
        Some(&token),
        &[("school", "Other University")],
        None,
    )
    .await;
    assert_eq!(patched.status(), StatusCode::OK);

    let json = body_json(patched).await;
    assert_eq!(json["school"], "Other University");
    assert_eq!(json["degree"], "BSc");
    assert_eq!(json["image_url"], url_before.as_str());
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_put_requires_all_text_fields(pool: PgPool) {
    let token = auth_token();
    let created = body_json(
        send_multipart(
            build_test_app(pool.clone()),
            Method::POST,
            "/api/education/",
            Some(&token),
            &[
                ("school", "State University"),
                ("degree", "BSc"),
                ("years", "2015-2019"),
                ("ordinal", "1"),
            ],
            None,
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // PUT without `degree` fails naming the field; PATCH with the same
    // body succeeds.
    let fields = [("school", "Elsewhere"), ("years", "2016-2020"), ("ordinal", "2")];
    let put = send_multipart(
        build_test_app(pool.clone()),
        Method::PUT,
        &format!("/api/education/{id}/"),
        Some(&token),
        &fields,
        None,
    )
    .await;
    assert_eq!(put.status(), StatusCode::BAD_REQUEST);
    let json = body_json(put).await;
    assert_eq!(json["fields"]["degree"][0], "This field is required.");

    let patch = send_multipart(
        build_test_app(pool),
        Method::PATCH,
        &format!("/api/education/{id}/"),
        Some(&token),
        &fields,
        None,
    )
    .await;
    assert_eq!(patch.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_bad_ordinal_rejected(pool: PgPool) {
    let token = auth_token();
    let response = send_multipart(
        build_test_app(pool),
        Method::POST,
        "/api/education/",
        Some(&token),
        &[
            ("school", "State University"),
            ("degree", "BSc"),
            ("years", "2015-2019"),
            ("ordinal", "first"),
        ],
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["ordinal"][0], "A valid integer is required.");
}

// ---------------------------------------------------------------------------
// Work
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_unauthenticated_work_create_rejected(pool: PgPool) {
    let response = send_multipart(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/work/",
        None,
        &[
            ("company", "Acme"),
            ("years", "2020-2023"),
            ("description", "Backend work"),
            ("ordinal", "1"),
        ],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The same caller can still list.
    let list = get(build_test_app(pool), "/api/work/").await;
    assert_eq!(list.status(), StatusCode::OK);
    assert_eq!(body_json(list).await.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_work_create_and_ordered_list(pool: PgPool) {
    let token = auth_token();
    for (company, ordinal) in [("Globex", "2"), ("Acme", "1")] {
        let response = send_multipart(
            build_test_app(pool.clone()),
            Method::POST,
            "/api/work/",
            Some(&token),
            &[
                ("company", company),
                ("years", "2020-2023"),
                ("description", "Backend work"),
                ("ordinal", ordinal),
            ],
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = body_json(get(build_test_app(pool), "/api/work/").await).await;
    let companies: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["company"].as_str().unwrap())
        .collect();
    assert_eq!(companies, vec!["Acme", "Globex"]);
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_portfolio_requires_image_on_create(pool: PgPool) {
    let token = auth_token();
    let response = send_multipart(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/portfolios/",
        Some(&token),
        &[
            ("title", "My Site"),
            ("description", "A website"),
            ("url", "https://example.com"),
            ("ordinal", "1"),
        ],
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["image"][0], "This field is required.");

    let list = body_json(get(build_test_app(pool), "/api/portfolios/").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_portfolio_create_with_image(pool: PgPool) {
    let token = auth_token();
    let response = send_multipart(
        build_test_app(pool),
        Method::POST,
        "/api/portfolios/",
        Some(&token),
        &[
            ("title", "My Site"),
            ("description", "A website"),
            ("url", "https://example.com"),
            ("years", "2024"),
            ("ordinal", "1"),
        ],
        Some(("image", "screenshot.jpg", PNG_BYTES)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "My Site");
    assert_eq!(json["image"], "portfolio/screenshot");
    assert_eq!(
        json["image_url"],
        "https://media.test/demo/image/upload/portfolio/screenshot"
    );
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_portfolio_invalid_url_rejected(pool: PgPool) {
    let token = auth_token();
    let response = send_multipart(
        build_test_app(pool),
        Method::POST,
        "/api/portfolios/",
        Some(&token),
        &[
            ("title", "My Site"),
            ("description", "A website"),
            ("url", "not a url"),
            ("ordinal", "1"),
        ],
        Some(("image", "screenshot.jpg", PNG_BYTES)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["url"][0], "Enter a valid URL.");
}

// ---------------------------------------------------------------------------
// Upload failure
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_failed_upload_leaves_no_row(pool: PgPool) {
    let token = auth_token();
    let response = send_multipart(
        build_test_app_with_media(pool.clone(), Arc::new(FailingMediaStore)),
        Method::POST,
        "/api/education/",
        Some(&token),
        &[
            ("school", "State University"),
            ("degree", "BSc"),
            ("years", "2015-2019"),
            ("ordinal", "1"),
        ],
        Some(("image", "diploma.png", PNG_BYTES)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPLOAD_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("media host unavailable"), "got: {message}");

    // The failed upload never produced a half-written row.
    let list = body_json(get(build_test_app(pool), "/api/education/").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}
