//! Unit tests for the session state machine and request wiring

use super::*;
use crate::{
    cli::types::ScoringPeriod,
    mfl::{http::RawResponse, request::EndpointKind},
};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One request as the session handed it to the transport.
#[derive(Debug, Clone)]
struct RecordedCall {
    url: String,
    form: Vec<(String, String)>,
    cookies: Vec<(String, String)>,
}

impl RecordedCall {
    fn field(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Replies with queued responses in order and records every call.
#[derive(Default)]
struct CannedTransport {
    responses: RefCell<VecDeque<RawResponse>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl CannedTransport {
    fn replying(responses: Vec<RawResponse>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl Transport for CannedTransport {
    async fn post(
        &self,
        url: &str,
        form: &[(String, String)],
        cookies: &[(String, String)],
    ) -> Result<RawResponse> {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            form: form.to_vec(),
            cookies: cookies.to_vec(),
        });
        Ok(self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| RawResponse::new(404, "no canned response")))
    }
}

/// Never answers, so a login against it can only end by being dropped.
struct StalledTransport;

impl Transport for StalledTransport {
    async fn post(
        &self,
        _url: &str,
        _form: &[(String, String)],
        _cookies: &[(String, String)],
    ) -> Result<RawResponse> {
        std::future::pending().await
    }
}

const LOGIN_OK: &str =
    r#"<?xml version="1.0" encoding="utf-8"?><status MFL_USER_ID="TOKEN123">OK</status>"#;

fn session(responses: Vec<RawResponse>) -> Session<CannedTransport> {
    Session::with_transport(
        CannedTransport::replying(responses),
        ApiConfig::default(),
        Year::new(2024),
        Some(LeagueId::new("35465")),
        Some(Credentials::new("owner", "hunter2")),
    )
}

#[cfg(test)]
mod login_tests {
    use super::*;

    #[test]
    fn test_new_session_is_unauthenticated() {
        let s = session(vec![]);
        assert_eq!(s.state(), &AuthState::Unauthenticated);
        assert!(!s.is_authenticated());
        assert_eq!(s.token(), None);
        assert_eq!(s.year(), Year::new(2024));
        assert_eq!(s.league_id(), Some(&LeagueId::new("35465")));
    }

    #[tokio::test]
    async fn test_login_success_records_token() {
        let mut s = session(vec![RawResponse::new(200, LOGIN_OK)]);
        s.login().await.unwrap();

        assert!(s.is_authenticated());
        assert_eq!(s.token(), Some("TOKEN123"));
        assert_eq!(
            s.state(),
            &AuthState::Authenticated {
                token: "TOKEN123".to_string()
            }
        );

        let calls = s.transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].url, "https://www67.myfantasyleague.com/2024/login");
        assert_eq!(calls[0].field("USERNAME"), Some("owner"));
        assert_eq!(calls[0].field("PASSWORD"), Some("hunter2"));
        assert_eq!(calls[0].field("XML"), Some("1"));
        assert!(calls[0].cookies.is_empty());
    }

    #[tokio::test]
    async fn test_login_without_token_stays_unauthenticated() {
        let mut s = session(vec![RawResponse::new(
            200,
            r#"<error>Invalid Password</error>"#,
        )]);
        let err = s.login().await.unwrap_err();

        assert!(matches!(err, MflError::Authentication { .. }));
        assert_eq!(s.state(), &AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_login_non_200_stays_unauthenticated() {
        let mut s = session(vec![RawResponse::new(403, LOGIN_OK)]);
        let err = s.login().await.unwrap_err();

        assert!(matches!(err, MflError::Authentication { .. }));
        assert!(!s.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_without_credentials() {
        let mut s = Session::with_transport(
            CannedTransport::default(),
            ApiConfig::default(),
            Year::new(2024),
            None,
            Credentials::from_parts(Some("owner".to_string()), None),
        );
        let err = s.login().await.unwrap_err();

        assert!(matches!(err, MflError::MissingCredentials));
        assert!(s.transport.calls().is_empty());
        assert_eq!(s.state(), &AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_login_twice_is_rejected() {
        let mut s = session(vec![
            RawResponse::new(200, LOGIN_OK),
            RawResponse::new(200, LOGIN_OK),
        ]);
        s.login().await.unwrap();
        let err = s.login().await.unwrap_err();

        assert!(matches!(err, MflError::AlreadyAuthenticated));
        assert_eq!(s.transport.calls().len(), 1);
        assert_eq!(s.token(), Some("TOKEN123"));
    }

    #[tokio::test]
    async fn test_reset_allows_new_login() {
        let mut s = session(vec![
            RawResponse::new(200, LOGIN_OK),
            RawResponse::new(200, r#"<status MFL_USER_ID="SECOND">OK</status>"#),
        ]);
        s.login().await.unwrap();
        s.reset();
        assert_eq!(s.state(), &AuthState::Unauthenticated);

        s.login().await.unwrap();
        assert_eq!(s.token(), Some("SECOND"));
    }

    #[tokio::test]
    async fn test_login_with_credentials_leaves_state_alone() {
        let s = session(vec![RawResponse::new(200, LOGIN_OK)]);
        let response = s.login_with_credentials("other", "pw").await.unwrap();

        assert_eq!(response.token().as_deref(), Some("TOKEN123"));
        assert_eq!(s.state(), &AuthState::Unauthenticated);
        assert_eq!(s.transport.calls()[0].field("USERNAME"), Some("other"));
    }

    #[tokio::test]
    async fn test_dropped_login_leaves_session_unauthenticated() {
        let mut s = Session::with_transport(
            StalledTransport,
            ApiConfig::default(),
            Year::new(2024),
            None,
            Some(Credentials::new("owner", "hunter2")),
        );

        tokio::select! {
            biased;
            _ = s.login() => panic!("stalled login should not complete"),
            _ = std::future::ready(()) => {}
        }

        assert_eq!(s.state(), &AuthState::Unauthenticated);
        assert!(!s.is_authenticated());
    }

    #[tokio::test]
    async fn test_dropped_login_can_be_retried() {
        let mut s = Session::with_transport(
            StalledTransport,
            ApiConfig::default(),
            Year::new(2024),
            None,
            Some(Credentials::new("owner", "hunter2")),
        );

        for _ in 0..2 {
            tokio::select! {
                biased;
                result = s.login() => panic!("stalled login returned {result:?}"),
                _ = std::future::ready(()) => {}
            }
            assert_eq!(s.state(), &AuthState::Unauthenticated);
        }
    }

    #[test]
    fn test_debug_hides_password() {
        let s = session(vec![]);
        let debug = format!("{:?}", s);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("owner"));
    }
}

#[cfg(test)]
mod export_tests {
    use super::*;

    #[tokio::test]
    async fn test_requests_carry_cookie_after_login() {
        let mut s = session(vec![
            RawResponse::new(200, LOGIN_OK),
            RawResponse::new(200, r#"{"league":{"franchises":{"franchise":[]}}}"#),
        ]);
        s.login().await.unwrap();
        s.league(None).await.unwrap();

        let calls = s.transport.calls();
        assert_eq!(
            calls[1].cookies,
            vec![("MFL_USER_ID".to_string(), "TOKEN123".to_string())]
        );
    }

    #[tokio::test]
    async fn test_requests_without_login_have_no_cookie() {
        let s = session(vec![RawResponse::new(200, r#"{"players":{}}"#)]);
        s.players(None, false, None, None).await.unwrap();

        assert!(s.transport.calls()[0].cookies.is_empty());
    }

    #[tokio::test]
    async fn test_reset_drops_cookie() {
        let mut s = session(vec![
            RawResponse::new(200, LOGIN_OK),
            RawResponse::new(200, r#"{"players":{}}"#),
        ]);
        s.login().await.unwrap();
        s.reset();
        s.players(None, false, None, None).await.unwrap();

        assert!(s.transport.calls()[1].cookies.is_empty());
    }

    #[tokio::test]
    async fn test_rosters_uses_session_league_and_normalizes() {
        let body = r#"{"rosters":{"franchise":[{"id":"0001","week":"5","player":[{"id":"9999","status":"ROSTER","salary":"1.0"}]}]}}"#;
        let s = session(vec![RawResponse::new(200, body)]);
        let response = s.rosters(None, None, Some(Week::new(5))).await.unwrap();

        let call = &s.transport.calls()[0];
        assert_eq!(call.url, "https://www67.myfantasyleague.com/2024/export");
        assert_eq!(call.field("TYPE"), Some("rosters"));
        assert_eq!(call.field("L"), Some("35465"));
        assert_eq!(call.field("W"), Some("5"));
        assert_eq!(call.field("JSON"), Some("1"));

        let rosters = response.normalized().unwrap();
        assert_eq!(rosters["0001"].week, "5");
        assert_eq!(rosters["0001"].players["9999"].salary, "1.0");
    }

    #[tokio::test]
    async fn test_explicit_league_overrides_session_league() {
        let s = session(vec![RawResponse::new(200, r#"{"rosters":{"franchise":[]}}"#)]);
        let other = LeagueId::new("11111");
        let franchise = FranchiseId::new("0002");
        s.rosters(Some(&other), Some(&franchise), None).await.unwrap();

        let call = &s.transport.calls()[0];
        assert_eq!(call.field("L"), Some("11111"));
        assert_eq!(call.field("FRANCHISE"), Some("0002"));
        assert_eq!(call.field("W"), None);
    }

    #[tokio::test]
    async fn test_league_scoped_exports_need_league() {
        let s = Session::with_transport(
            CannedTransport::default(),
            ApiConfig::default(),
            Year::new(2024),
            None,
            None,
        );

        assert!(matches!(
            s.rosters(None, None, None).await.unwrap_err(),
            MflError::MissingLeagueId { .. }
        ));
        assert!(matches!(
            s.league(None).await.unwrap_err(),
            MflError::MissingLeagueId { .. }
        ));
        assert!(matches!(
            s.live_scoring(None, None, false).await.unwrap_err(),
            MflError::MissingLeagueId { .. }
        ));
        assert!(s.transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_players_without_league() {
        let s = Session::with_transport(
            CannedTransport::replying(vec![RawResponse::new(200, r#"{"players":{}}"#)]),
            ApiConfig::default(),
            Year::new(2024),
            None,
            None,
        );
        let response = s.players(None, true, None, None).await.unwrap();

        assert!(response.normalized().unwrap().is_empty());
        let call = &s.transport.calls()[0];
        assert_eq!(call.field("L"), None);
        assert_eq!(call.field("DETAILS"), Some("1"));
    }

    #[tokio::test]
    async fn test_rosters_without_franchise_list_is_malformed() {
        let s = session(vec![RawResponse::new(200, r#"{"rosters":{}}"#)]);
        let response = s.rosters(None, None, None).await.unwrap();

        assert!(matches!(
            response.normalized().unwrap_err(),
            MflError::MalformedResponse { .. }
        ));
    }

    #[tokio::test]
    async fn test_non_json_export_is_invalid_format() {
        let s = session(vec![RawResponse::new(200, "<html>maintenance</html>")]);
        let err = s.league(None).await.unwrap_err();

        assert!(matches!(err, MflError::InvalidResponseFormat(_)));
    }

    #[tokio::test]
    async fn test_live_scoring_request() {
        let s = session(vec![RawResponse::new(
            200,
            r#"{"liveScoring":{"matchup":{"franchise":[{"id":"0001","score":"10"}]}}}"#,
        )]);
        let response = s.live_scoring(None, Some(Week::new(7)), true).await.unwrap();

        assert_eq!(response.kind(), EndpointKind::LiveScoring);
        assert_eq!(response.normalized().unwrap()["0001"].score, "10");
        let call = &s.transport.calls()[0];
        assert_eq!(call.field("TYPE"), Some("liveScoring"));
        assert_eq!(call.field("DETAILS"), Some("1"));
    }

    #[tokio::test]
    async fn test_player_scores_year_override() {
        let s = session(vec![RawResponse::new(
            200,
            r#"{"playerScores":{"playerScore":[]}}"#,
        )]);
        let query = PlayerScoresQuery {
            week: Some(ScoringPeriod::Average),
            year: Some(Year::new(2021)),
            players: Some(vec![PlayerId::new("13116")]),
            ..Default::default()
        };
        let response = s.player_scores(None, &query).await.unwrap();

        assert!(response.normalized().unwrap().is_empty());
        let call = &s.transport.calls()[0];
        assert_eq!(call.url, "https://www67.myfantasyleague.com/2021/export");
        assert_eq!(call.field("W"), Some("AVG"));
        assert_eq!(call.field("PLAYERS"), Some("13116"));
        assert_eq!(call.field("L"), Some("35465"));
    }

    #[tokio::test]
    async fn test_custom_config_changes_host() {
        let s = session(vec![RawResponse::new(200, r#"{"players":{}}"#)])
            .with_config(ApiConfig::new("http", "localhost:8080"));
        s.players(None, false, None, None).await.unwrap();

        assert_eq!(
            s.transport.calls()[0].url,
            "http://localhost:8080/2024/export"
        );
    }
}
