//! End-to-end contract tests: every route driven through the router with
//! the envelope, status codes, and payload shapes asserted.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestContext;

#[tokio::test]
async fn health_reports_ok() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn constitution_tree_is_ordered_and_localized() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/api/constitution").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let parts = body["data"]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 5);

    // Part III articles come back in string order: "21" < "21A" < "22"
    let part3 = &parts[2];
    assert_eq!(part3["number"], 3);
    let numbers: Vec<&str> = part3["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["number"].as_str().unwrap())
        .collect();
    let p21 = numbers.iter().position(|&n| n == "21").unwrap();
    assert_eq!(numbers[p21 + 1], "21A");
    assert_eq!(numbers[p21 + 2], "22");

    let (_, hindi) = ctx.get("/api/constitution?lang=hi").await;
    assert_eq!(hindi["data"]["parts"][2]["title"], "मौलिक अधिकार");
}

#[tokio::test]
async fn constitution_unknown_part_is_404() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/api/constitution?part=99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn unknown_lang_falls_back_to_english() {
    let ctx = TestContext::new();
    let (_, english) = ctx.get("/api/constitution?lang=en").await;
    let (status, other) = ctx.get("/api/constitution?lang=klingon").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        other["data"]["parts"][2]["title"],
        english["data"]["parts"][2]["title"]
    );
}

#[tokio::test]
async fn article_detail_carries_relations() {
    let ctx = TestContext::new();
    // id 11 is Article 21 in the seed catalogue
    let (status, body) = ctx.get("/api/articles/11").await;
    assert_eq!(status, StatusCode::OK);
    let article = &body["data"];
    assert_eq!(article["number"], "21");
    assert_eq!(article["part"]["number"], 3);
    assert!(!article["caseLaws"].as_array().unwrap().is_empty());
    assert!(article["simplifiedExplanation"].is_object());
}

#[tokio::test]
async fn article_detail_errors() {
    let ctx = TestContext::new();
    let (status, _) = ctx.get("/api/articles/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = ctx.get("/api/articles/twenty-one").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn amendments_stats_are_consistent() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/api/amendments").await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    let amendments = data["amendments"].as_array().unwrap();
    assert_eq!(data["stats"]["total"], amendments.len());
    assert_eq!(
        data["stats"]["byDecade"],
        data["timeline"].as_array().unwrap().len()
    );

    let (_, filtered) = ctx.get("/api/amendments?year=1976").await;
    assert_eq!(filtered["data"]["stats"]["total"], 1);
    assert_eq!(filtered["data"]["amendments"][0]["number"], 42);
}

#[tokio::test]
async fn rights_groups_article_14_under_equality() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/api/rights").await;
    assert_eq!(status, StatusCode::OK);
    let equality = &body["data"]["fundamentalRights"]["right_to_equality"]["articles"];
    assert!(equality
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a["number"] == "14"));

    let categories: Vec<&str> = body["data"]["emergencyGuides"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["category"].as_str().unwrap())
        .collect();
    assert!(categories
        .iter()
        .all(|c| ["arrest", "search", "detention"].contains(c)));
}

#[tokio::test]
async fn rights_rejects_unknown_category() {
    let ctx = TestContext::new();
    let (status, _) = ctx.get("/api/rights?category=privileges").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_requires_a_query_for_every_type() {
    let ctx = TestContext::new();
    for kind in ["all", "articles", "amendments", "guides"] {
        let (status, body) = ctx.get(&format!("/api/search?q=%20&type={kind}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "type={kind}");
        assert_eq!(body["success"], false);
    }
    let (status, _) = ctx.get("/api/search?q=equality&type=everything").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_puts_articles_first() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/api/search?q=equality").await;
    assert_eq!(status, StatusCode::OK);
    let results = body["data"]["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert_eq!(results[0]["type"], "article");
}

#[tokio::test]
async fn quiz_fetch_never_leaks_answers() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/api/quiz?limit=50").await;
    assert_eq!(status, StatusCode::OK);
    let questions = body["data"]["questions"].as_array().unwrap();
    assert!(!questions.is_empty());
    for question in questions {
        assert!(question.get("correctAnswer").is_none());
        assert!(question.get("explanation").is_none());
    }
    assert!(body["data"]["byDifficulty"].is_object());

    let (_, hard) = ctx.get("/api/quiz?difficulty=hard").await;
    for question in hard["data"]["questions"].as_array().unwrap() {
        assert_eq!(question["difficulty"], "hard");
    }

    let (status, _) = ctx.get("/api/quiz?difficulty=impossible").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn quiz_submit_grades_and_labels() {
    let ctx = TestContext::new();
    // question 1 expects A, question 2 expects B
    let (status, body) = ctx
        .post(
            "/api/quiz",
            json!({"answers": [
                {"questionId": 1, "selectedAnswer": "A"},
                {"questionId": 2, "selectedAnswer": "B"},
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["score"], 2);
    assert_eq!(body["data"]["percentage"], 100);
    assert_eq!(body["data"]["performance"], "Excellent");

    let (_, body) = ctx
        .post(
            "/api/quiz",
            json!({"answers": [
                {"questionId": 1, "selectedAnswer": "B"},
                {"questionId": 2, "selectedAnswer": "A"},
            ]}),
        )
        .await;
    assert_eq!(body["data"]["percentage"], 0);
    assert_eq!(body["data"]["performance"], "Need Improvement");
}

#[tokio::test]
async fn quiz_submit_validation() {
    let ctx = TestContext::new();
    let (status, _) = ctx.post("/api/quiz", json!({"answers": []})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = ctx
        .post(
            "/api/quiz",
            json!({"answers": [{"questionId": 1, "selectedAnswer": "E"}]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn quiz_submit_flags_unknown_questions() {
    let ctx = TestContext::new();
    let (_, body) = ctx
        .post(
            "/api/quiz",
            json!({"answers": [
                {"questionId": 1, "selectedAnswer": "A"},
                {"questionId": 9999, "selectedAnswer": "A"},
            ]}),
        )
        .await;
    assert_eq!(body["data"]["score"], 1);
    let review = body["data"]["review"].as_array().unwrap();
    assert_eq!(review[1]["found"], false);
    assert_eq!(review[1]["correct"], false);
}

#[tokio::test]
async fn quiz_attempt_is_logged_for_a_user() {
    let ctx = TestContext::new();
    let (status, _) = ctx
        .post(
            "/api/quiz",
            json!({
                "answers": [{"questionId": 1, "selectedAnswer": "A"}],
                "userId": "user-7",
                "timeSpent": 30,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = ctx.get("/api/quiz/history?userId=user-7").await;
    assert_eq!(status, StatusCode::OK);
    let attempts = body["data"].as_array().unwrap();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0]["score"], 1);

    let (status, _) = ctx.get("/api/quiz/history").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assistant_attaches_mentioned_articles() {
    let ctx = TestContext::with_reply(Some(
        "Article 21 protects life, and Article 14 guarantees equality. Article 21 is read widely.",
    ));
    let (status, body) = ctx
        .post("/api/ai-assistant", json!({"question": "What protects my life?"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["fallback"], false);
    let numbers: Vec<&str> = body["data"]["mentionedArticles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["number"].as_str().unwrap())
        .collect();
    // duplicates collapse, first-seen order kept
    assert_eq!(numbers, ["21", "14"]);
}

#[tokio::test]
async fn assistant_degrades_to_fallback_on_provider_failure() {
    let ctx = TestContext::with_reply(None);
    let (status, body) = ctx
        .post(
            "/api/ai-assistant",
            json!({"question": "What is Article 21?", "language": "hi"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["fallback"], true);
    assert!(!body["data"]["answer"].as_str().unwrap().is_empty());
    assert!(body["data"]["mentionedArticles"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn assistant_rejects_blank_question_and_logs_history() {
    let ctx = TestContext::new();
    let (status, _) = ctx.post("/api/ai-assistant", json!({"question": "  "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, _) = ctx
        .post(
            "/api/ai-assistant",
            json!({"question": "Tell me about Article 21", "userId": "user-3"}),
        )
        .await;
    let (status, body) = ctx.get("/api/ai-assistant?userId=user-3").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["question"], "Tell me about Article 21");

    let (status, _) = ctx.get("/api/ai-assistant").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tts_returns_wav_bytes_with_length() {
    let ctx = TestContext::new();
    let response = ctx
        .post_raw("/api/tts", json!({"text": "Article 21 protects life."}))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "audio/wav");
    let length: usize = response.headers()["content-length"]
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(length, bytes.len());
    assert!(bytes.starts_with(b"RIFF"));
}

#[tokio::test]
async fn tts_validates_speed_and_length() {
    let ctx = TestContext::new();
    for (speed, expected) in [
        (0.5, StatusCode::OK),
        (2.0, StatusCode::OK),
        (0.49, StatusCode::BAD_REQUEST),
        (2.01, StatusCode::BAD_REQUEST),
    ] {
        let response = ctx
            .post_raw("/api/tts", json!({"text": "hello", "speed": speed}))
            .await;
        assert_eq!(response.status(), expected, "speed={speed}");
    }

    let exactly = "a".repeat(1024);
    let response = ctx.post_raw("/api/tts", json!({"text": exactly})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let over = "a".repeat(1025);
    let response = ctx.post_raw("/api/tts", json!({"text": over})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tts_surfaces_provider_failure_as_500() {
    let ctx = TestContext::with_broken_speech();
    let (status, body) = ctx.post("/api/tts", json!({"text": "hello"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("synthesis failed"));
}

#[tokio::test]
async fn rti_validates_and_generates() {
    let ctx = TestContext::new();
    let (status, body) = ctx
        .post("/api/rti", json!({"applicantName": "Asha Devi"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("address"));
    assert!(message.contains("infoSought"));

    let (status, body) = ctx
        .post(
            "/api/rti",
            json!({
                "applicantName": "Asha Devi",
                "address": "12 Gandhi Road, Patna",
                "publicAuthority": "Municipal Corporation of Patna",
                "subject": "Street light expenditure",
                "infoSought": "Copies of work orders for Ward 7 in 2025",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let application = body["data"]["application"].as_str().unwrap();
    assert!(application.contains("Asha Devi"));
    assert!(!body["data"]["fees"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn sector_routes_serve_their_bundles() {
    let ctx = TestContext::new();
    let (status, body) = ctx
        .post(
            "/api/banking",
            json!({
                "applicantName": "Ravi Kumar",
                "issueDescription": "Unauthorised debit of Rs. 5000",
                "bankName": "State Bank",
                "accountType": "savings",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sector"], "banking");
    assert!(!body["data"]["authorities"].as_array().unwrap().is_empty());

    let (status, body) = ctx
        .post(
            "/api/banking",
            json!({"applicantName": "Ravi Kumar", "issueDescription": "debit"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("bankName"));

    let (status, _) = ctx
        .post(
            "/api/cyber",
            json!({
                "applicantName": "Meena",
                "issueDescription": "Phishing loss",
                "incidentType": "phishing",
                "incidentDate": "2026-08-01",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn settings_exclude_internal_keys() {
    let ctx = TestContext::new();
    let (status, body) = ctx.get("/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["app_name"], "Samvidhan");
    assert!(body["data"].get("schema_version").is_none());
}

#[tokio::test]
async fn seed_populates_once_then_fails() {
    let ctx = TestContext::unseeded();
    let (status, body) = ctx.post("/api/seed", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["articles"].as_u64().unwrap() > 0);

    let (status, body) = ctx.post("/api/seed", json!({})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);

    // store unchanged by the failed second run
    let (_, tree) = ctx.get("/api/constitution").await;
    assert_eq!(tree["data"]["totalParts"], 5);
}
