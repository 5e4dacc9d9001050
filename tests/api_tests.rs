use actix_web::{App, test, web};
use blog_api::presentation::handlers::{get_blog, greeting, post_blog, put_blog};

macro_rules! setup_test {
    () => {{
        test::init_service(
            App::new()
                .route("/", web::get().to(greeting))
                .route("/blog", web::post().to(post_blog))
                .route("/blog", web::put().to(put_blog))
                .route("/blog/{id}", web::get().to(get_blog)),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_greeting_returns_hello() {
    let app = setup_test!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(body, web::Bytes::from_static(b"Hello Hono!"));
}

#[actix_web::test]
async fn test_greeting_is_stateless() {
    let app = setup_test!();

    // Same response no matter what came before
    for _ in 0..3 {
        let req = test::TestRequest::post().uri("/blog").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body, web::Bytes::from_static(b"Hello Hono!"));
    }
}

#[actix_web::test]
async fn test_post_blog_returns_placeholder() {
    let app = setup_test!();

    let req = test::TestRequest::post().uri("/blog").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(body, web::Bytes::from_static(b"blog"));
}

#[actix_web::test]
async fn test_put_blog_returns_placeholder() {
    let app = setup_test!();

    let req = test::TestRequest::put().uri("/blog").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(body, web::Bytes::from_static(b"blog"));
}

#[actix_web::test]
async fn test_get_blog_echoes_path_id() {
    let app = setup_test!();

    let req = test::TestRequest::get().uri("/blog/123").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(body, web::Bytes::from_static(b"blog: 123"));
}

#[actix_web::test]
async fn test_get_blog_echoes_arbitrary_segment() {
    let app = setup_test!();

    let req = test::TestRequest::get().uri("/blog/not-a-number").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(body, web::Bytes::from_static(b"blog: not-a-number"));
}
