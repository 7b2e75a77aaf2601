//! Application router configuration with session-protected and open route definitions.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    session::require_session,
    transaction::{
        create_transaction_endpoint, get_summary_endpoint, get_transaction_endpoint,
        get_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .route(endpoints::TRANSACTIONS_API, get(get_transactions_endpoint))
        .route(
            endpoints::TRANSACTIONS_API_TRAILING_SLASH,
            get(get_transactions_endpoint),
        )
        .route(endpoints::TRANSACTIONS_SUMMARY, get(get_summary_endpoint))
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint))
        .route_layer(middleware::from_fn(require_session));

    // Creating a transaction starts a session if there is none.
    let open_routes = Router::new()
        .route(endpoints::TRANSACTIONS_API, post(create_transaction_endpoint))
        .route(
            endpoints::TRANSACTIONS_API_TRAILING_SLASH,
            post(create_transaction_endpoint),
        );

    session_routes
        .merge(open_routes)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_extra::extract::cookie::Cookie;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState, COOKIE_SESSION_ID, TransactionId, build_router,
        endpoints::{self, format_endpoint},
        transaction::{SummaryResponse, TransactionResponse, TransactionsResponse},
    };

    fn get_test_server() -> TestServer {
        let state = AppState::new(Connection::open_in_memory().unwrap())
            .expect("Could not create app state");

        TestServer::new(build_router(state)).expect("Could not create test server.")
    }

    /// Create a transaction and return the session cookie used for it.
    async fn post_transaction(
        server: &TestServer,
        session_cookie: Option<&Cookie<'static>>,
        body: serde_json::Value,
    ) -> Cookie<'static> {
        let mut request = server.post(endpoints::TRANSACTIONS_API).json(&body);
        if let Some(cookie) = session_cookie {
            request = request.add_cookie(cookie.clone());
        }

        let response = request.await;
        response.assert_status(StatusCode::CREATED);

        match session_cookie {
            Some(cookie) => cookie.clone(),
            None => response.cookie(COOKIE_SESSION_ID),
        }
    }

    #[tokio::test]
    async fn salary_scenario() {
        let server = get_test_server();

        let session_cookie = post_transaction(
            &server,
            None,
            json!({"title": "Salary", "amount": 5000, "type": "credit"}),
        )
        .await;

        let response = server
            .get(endpoints::TRANSACTIONS_API)
            .add_cookie(session_cookie)
            .await;

        response.assert_status_ok();
        let body: TransactionsResponse = response.json();
        assert_eq!(body.transactions.len(), 1);
        assert_eq!(body.transactions[0].title, "Salary");
        assert_eq!(body.transactions[0].amount, 5000.0);
    }

    #[tokio::test]
    async fn rent_and_bonus_scenario() {
        let server = get_test_server();
        let session_cookie = post_transaction(
            &server,
            None,
            json!({"title": "Rent", "amount": 1200, "type": "debit"}),
        )
        .await;
        post_transaction(
            &server,
            Some(&session_cookie),
            json!({"title": "Bonus", "amount": 300, "type": "credit"}),
        )
        .await;

        let response = server
            .get(endpoints::TRANSACTIONS_SUMMARY)
            .add_cookie(session_cookie)
            .await;

        response.assert_status_ok();
        let body: SummaryResponse = response.json();
        assert_eq!(body.summary.amount, -900.0);
    }

    #[tokio::test]
    async fn second_post_reuses_session() {
        let server = get_test_server();
        let session_cookie = post_transaction(
            &server,
            None,
            json!({"title": "First", "amount": 1, "type": "credit"}),
        )
        .await;

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .add_cookie(session_cookie.clone())
            .json(&json!({"title": "Second", "amount": 2, "type": "credit"}))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert!(response.maybe_cookie(COOKIE_SESSION_ID).is_none());
        let body: TransactionsResponse = server
            .get(endpoints::TRANSACTIONS_API)
            .add_cookie(session_cookie)
            .await
            .json();
        assert_eq!(body.transactions.len(), 2);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let server = get_test_server();
        let session_one = post_transaction(
            &server,
            None,
            json!({"title": "One", "amount": 10, "type": "credit"}),
        )
        .await;
        let session_two = post_transaction(
            &server,
            None,
            json!({"title": "Two", "amount": 20, "type": "debit"}),
        )
        .await;
        assert_ne!(session_one.value(), session_two.value());

        for (cookie, want_title) in [(session_one, "One"), (session_two, "Two")] {
            let body: TransactionsResponse = server
                .get(endpoints::TRANSACTIONS_API)
                .add_cookie(cookie.clone())
                .await
                .json();
            let titles: Vec<&str> = body.transactions.iter().map(|t| t.title.as_str()).collect();
            assert_eq!(titles, vec![want_title]);

            let own_id = body.transactions[0].id;
            let response = server
                .get(&format_endpoint(endpoints::TRANSACTION, own_id))
                .add_cookie(cookie)
                .await;
            response.assert_status_ok();
            let body: TransactionResponse = response.json();
            assert_eq!(body.transactions.map(|t| t.id), Some(own_id));
        }
    }

    #[tokio::test]
    async fn cannot_get_transaction_of_other_session() {
        let server = get_test_server();
        let owner = post_transaction(
            &server,
            None,
            json!({"title": "Mine", "amount": 10, "type": "credit"}),
        )
        .await;
        let intruder = post_transaction(
            &server,
            None,
            json!({"title": "Theirs", "amount": 10, "type": "credit"}),
        )
        .await;
        let body: TransactionsResponse = server
            .get(endpoints::TRANSACTIONS_API)
            .add_cookie(owner)
            .await
            .json();
        let owned_id = body.transactions[0].id;

        let response = server
            .get(&format_endpoint(endpoints::TRANSACTION, owned_id))
            .add_cookie(intruder)
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({}));
    }

    #[tokio::test]
    async fn get_transaction_with_invalid_id_is_bad_request() {
        let server = get_test_server();

        let response = server
            .get(&format_endpoint(endpoints::TRANSACTION, "not-a-uuid"))
            .add_cookie(Cookie::new(COOKIE_SESSION_ID, "some-session"))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn get_transaction_with_non_hyphenated_id_is_bad_request() {
        let server = get_test_server();
        let session_cookie = post_transaction(
            &server,
            None,
            json!({"title": "Salary", "amount": 5000, "type": "credit"}),
        )
        .await;
        let body: TransactionsResponse = server
            .get(endpoints::TRANSACTIONS_API)
            .add_cookie(session_cookie.clone())
            .await
            .json();
        let id = body.transactions[0].id.to_string();

        for id_text in [
            id.replace('-', ""),
            format!("%7B{id}%7D"),
            format!("urn:uuid:{id}"),
        ] {
            let response = server
                .get(&format_endpoint(endpoints::TRANSACTION, &id_text))
                .add_cookie(session_cookie.clone())
                .await;

            response.assert_status_bad_request();
        }
    }

    #[tokio::test]
    async fn transactions_route_accepts_trailing_slash() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API_TRAILING_SLASH)
            .json(&json!({"title": "Salary", "amount": 5000, "type": "credit"}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let session_cookie = response.cookie(COOKIE_SESSION_ID);
        let response = server
            .get(endpoints::TRANSACTIONS_API_TRAILING_SLASH)
            .add_cookie(session_cookie)
            .await;
        response.assert_status_ok();
        let body: TransactionsResponse = response.json();
        assert_eq!(body.transactions.len(), 1);
    }

    #[tokio::test]
    async fn summary_for_new_session_is_zero() {
        let server = get_test_server();

        let response = server
            .get(endpoints::TRANSACTIONS_SUMMARY)
            .add_cookie(Cookie::new(COOKIE_SESSION_ID, "empty-session"))
            .await;

        response.assert_status_ok();
        let body: SummaryResponse = response.json();
        assert_eq!(body.summary.amount, 0.0);
    }

    #[tokio::test]
    async fn reads_without_session_are_unauthorized() {
        let server = get_test_server();
        let transaction_path = format_endpoint(endpoints::TRANSACTION, TransactionId::generate());

        for path in [
            endpoints::TRANSACTIONS_API,
            endpoints::TRANSACTIONS_SUMMARY,
            transaction_path.as_str(),
        ] {
            let response = server.get(path).await;

            response.assert_status_unauthorized();
            response.assert_json(&json!({"error": "Unauthorized."}));
        }
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server.get("/foo").await.assert_status_not_found();
    }
}
