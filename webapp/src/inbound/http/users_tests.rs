//! Tests for the list and delete pages.

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;

use super::*;
use crate::domain::ports::{MockUserDirectory, UserDirectoryError};
use crate::inbound::http::test_utils::{page_text, test_state};
use crate::test_support::{alice, sample_users};

async fn call(
    directory: MockUserDirectory,
    request: actix_test::TestRequest,
) -> actix_web::dev::ServiceResponse {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(directory)))
            .service(list_users)
            .service(confirm_delete)
            .service(delete_user),
    )
    .await;
    actix_test::call_service(&app, request.to_request()).await
}

fn listing(users: Vec<User>) -> MockUserDirectory {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_list_users()
        .times(1)
        .return_once(move || Ok(users));
    directory
}

#[actix_web::test]
async fn list_renders_every_user_with_controls() {
    let response = call(listing(sample_users()), actix_test::TestRequest::get().uri("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = page_text(response).await;
    for name in ["Alice", "Bob", "Carol"] {
        assert!(body.contains(name), "{name} should be listed");
    }
    assert!(body.contains(r#"href="/user/view/2""#));
    assert!(body.contains(r#"href="/user/edit/2""#));
    assert!(body.contains(r#"href="/user/delete/2""#));
    assert!(body.contains(r#"href="/user/add""#));
    assert!(body.contains("<td>2</td>"));
    assert!(!body.contains("No data found!"));
}

#[actix_web::test]
async fn id_column_shows_user_id_not_row_number() {
    let users = vec![User::new(UserId::Text("u-7".to_owned()), "Carol", "carol@z.net")];
    let response = call(listing(users), actix_test::TestRequest::get().uri("/?q=car")).await;

    let body = page_text(response).await;
    assert!(body.contains("<td>u-7</td>"));
    assert!(!body.contains("<td>1</td>"));
}

#[actix_web::test]
async fn unmatched_search_shows_no_data_found() {
    let response = call(
        listing(vec![alice()]),
        actix_test::TestRequest::get().uri("/?q=bob"),
    )
    .await;

    let body = page_text(response).await;
    assert!(body.contains("No data found!"));
    assert!(!body.contains("a@x.com"));
    assert!(body.contains(r#"value="bob""#));
}

#[actix_web::test]
async fn search_filters_rows_and_threads_term_into_delete_links() {
    let response = call(
        listing(sample_users()),
        actix_test::TestRequest::get().uri("/?q=CAR"),
    )
    .await;

    let body = page_text(response).await;
    assert!(body.contains("Carol"));
    assert!(!body.contains("Alice"));
    assert!(body.contains(r#"href="/user/delete/3?q=CAR""#));
}

#[actix_web::test]
async fn list_failure_renders_service_unavailable_page() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_list_users()
        .return_once(|| Err(UserDirectoryError::transport("connection refused")));

    let response = call(directory, actix_test::TestRequest::get().uri("/")).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = page_text(response).await;
    assert!(body.contains("unavailable"));
    assert!(!body.contains("connection refused"));
}

#[actix_web::test]
async fn confirmation_page_names_the_user() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_get_user()
        .withf(|id| *id == UserId::Text("1".to_owned()))
        .return_once(|_| Ok(Some(alice())));

    let response = call(
        directory,
        actix_test::TestRequest::get().uri("/user/delete/1?q=al"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = page_text(response).await;
    assert!(body.contains("Are you sure you want to delete Alice (a@x.com)?"));
    assert!(body.contains(r#"name="confirm" value="yes""#));
    assert!(body.contains(r#"href="/?q=al""#));
}

#[actix_web::test]
async fn confirmation_for_missing_user_is_not_found() {
    let mut directory = MockUserDirectory::new();
    directory.expect_get_user().return_once(|_| Ok(None));

    let response = call(directory, actix_test::TestRequest::get().uri("/user/delete/9")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn confirmed_delete_removes_only_that_row() {
    let mut directory = listing(sample_users());
    directory
        .expect_delete_user()
        .withf(|id| *id == UserId::Number(2))
        .times(1)
        .return_once(|_| Ok(()));

    let response = call(
        directory,
        actix_test::TestRequest::post()
            .uri("/user/delete/2")
            .set_form(DeleteForm {
                confirm: Some("yes".into()),
                q: String::new(),
            }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = page_text(response).await;
    assert!(body.contains("User Bob deleted successfully!"));
    assert!(!body.contains("bob@y.org"));
    let alice_at = body.find("a@x.com").expect("Alice listed");
    let carol_at = body.find("carol@z.net").expect("Carol listed");
    assert!(alice_at < carol_at);
    assert!(body.contains(r#"http-equiv="refresh" content="3;url=/""#));
}

#[rstest]
#[case::numeric_looking_text(UserId::Text("2".to_owned()), "2")]
#[case::opaque_text(UserId::Text("b 2".to_owned()), "b%202")]
#[case::numeric(UserId::Number(2), "2")]
#[actix_rt::test]
async fn confirmed_delete_sends_listed_id(#[case] id: UserId, #[case] segment: &str) {
    let users = vec![alice(), User::new(id.clone(), "Bob", "bob@y.org")];
    let mut directory = listing(users);
    directory
        .expect_delete_user()
        .withf(move |requested| *requested == id)
        .times(1)
        .return_once(|_| Ok(()));

    let response = call(
        directory,
        actix_test::TestRequest::post()
            .uri(&format!("/user/delete/{segment}"))
            .set_form(DeleteForm {
                confirm: Some("yes".into()),
                q: String::new(),
            }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = page_text(response).await;
    assert!(body.contains("User Bob deleted successfully!"));
    assert!(!body.contains("bob@y.org"));
}

#[actix_web::test]
async fn confirmation_posts_to_stored_id() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_get_user()
        .withf(|id| *id == UserId::Text("2".to_owned()))
        .return_once(|_| Ok(Some(User::new(UserId::Text("2".to_owned()), "Bob", "bob@y.org"))));

    let response = call(
        directory,
        actix_test::TestRequest::get().uri("/user/delete/2"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = page_text(response).await;
    assert!(body.contains(r#"action="/user/delete/2""#));
}

#[actix_web::test]
async fn unconfirmed_delete_redirects_without_deleting() {
    let response = call(
        listing(sample_users()),
        actix_test::TestRequest::post()
            .uri("/user/delete/2")
            .set_form(DeleteForm {
                confirm: None,
                q: "bo".into(),
            }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/?q=bo")
    );
}

#[actix_web::test]
async fn failed_delete_keeps_row_and_shows_error() {
    let mut directory = listing(sample_users());
    directory
        .expect_delete_user()
        .return_once(|_| Err(UserDirectoryError::status(500_u16, "boom")));

    let response = call(
        directory,
        actix_test::TestRequest::post()
            .uri("/user/delete/2")
            .set_form(DeleteForm {
                confirm: Some("yes".into()),
                q: String::new(),
            }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = page_text(response).await;
    assert!(body.contains("Delete data failed"));
    assert!(body.contains("bob@y.org"));
}
