use axum::http::StatusCode;
use axum_test::TestServer;
use monarch_training::api::{create_router, ActionResponse, AppState, AvatarBody, GainExperienceInput};
use monarch_training::catalog::Catalog;
use monarch_training::cues::Cue;
use monarch_training::db::Database;
use monarch_training::models::*;
use monarch_training::tracker::Tracker;

fn setup() -> TestServer {
    let db = Database::open_memory().expect("Failed to create database");
    db.migrate().expect("Failed to migrate");
    let tracker = Tracker::load(db).expect("Failed to load tracker");
    let app = create_router(AppState::new(tracker, Catalog::offline()));
    TestServer::new(app).expect("Failed to create test server")
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup();
        let response = server.get("/api/v1/health").await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "status": "ok" }));
    }
}

mod status {
    use super::*;

    #[tokio::test]
    async fn starts_at_level_one() {
        let server = setup();
        let response = server.get("/api/v1/status").await;

        response.assert_status_ok();
        let status: StatusSnapshot = response.json();
        assert_eq!(status.level, 1);
        assert_eq!(status.experience, 0);
        assert_eq!(status.next_level_at, 100);
        assert_eq!(status.rank, Rank::E);
        assert_eq!(status.quests.len(), 5);
    }
}

mod experience {
    use super::*;

    #[tokio::test]
    async fn gain_returns_new_status_and_level_up_cues() {
        let server = setup();
        let response = server
            .post("/api/v1/xp")
            .json(&GainExperienceInput { amount: 650 })
            .await;

        response.assert_status_ok();
        let action: ActionResponse = response.json();
        assert_eq!(action.level_ups, 3);
        assert_eq!(action.status.level, 4);
        assert_eq!(action.status.experience, 50);
        assert_eq!(
            action.cues,
            vec![
                Cue::LevelUp { level: 2 },
                Cue::LevelUp { level: 3 },
                Cue::LevelUp { level: 4 },
            ]
        );
    }

    #[tokio::test]
    async fn largest_amount_returns_a_bounded_response() {
        let server = setup();
        let response = server
            .post("/api/v1/xp")
            .json(&GainExperienceInput { amount: i64::MAX })
            .await;

        response.assert_status_ok();
        assert!(response.text().len() < 4096);

        let action: ActionResponse = response.json();
        assert_eq!(action.level_ups, 429_496_729);
        assert_eq!(action.status.level, 429_496_730);
        assert!(action.status.experience < action.status.next_level_at);
        assert_eq!(
            action.cues,
            vec![Cue::LevelUps {
                from: 2,
                to: 429_496_730
            }]
        );
    }

    #[tokio::test]
    async fn negative_amount_is_a_bad_request() {
        let server = setup();
        let response = server
            .post("/api/v1/xp")
            .json(&GainExperienceInput { amount: -1 })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let status: StatusSnapshot = server.get("/api/v1/status").await.json();
        assert_eq!(status.experience, 0);
    }
}

mod quests {
    use super::*;

    #[tokio::test]
    async fn lists_the_default_daily_set() {
        let server = setup();
        let quests: Vec<Quest> = server.get("/api/v1/quests").await.json();

        assert_eq!(quests.len(), 5);
        assert_eq!(quests[0].description, "Do 30 push-ups");
        assert!(quests.iter().all(|q| !q.done && q.reward_experience == 50));
    }

    #[tokio::test]
    async fn completing_awards_once() {
        let server = setup();

        let first: ActionResponse = server.post("/api/v1/quests/0/complete").await.json();
        assert_eq!(first.experience_awarded, 50);
        assert_eq!(first.cues, vec![Cue::QuestComplete, Cue::Click]);
        assert!(first.status.quests[0].done);

        let second: ActionResponse = server.post("/api/v1/quests/0/complete").await.json();
        assert_eq!(second.experience_awarded, 0);
        assert_eq!(second.cues, vec![Cue::Click]);
        assert_eq!(second.status.experience, 50);
    }

    #[tokio::test]
    async fn unknown_index_is_not_found() {
        let server = setup();
        let response = server.post("/api/v1/quests/99/complete").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn reset_clears_flags_but_keeps_experience() {
        let server = setup();
        server.post("/api/v1/quests/1/complete").await.assert_status_ok();
        server.post("/api/v1/quests/2/complete").await.assert_status_ok();

        let response = server.post("/api/v1/quests/reset").await;
        response.assert_status_ok();
        let action: ActionResponse = response.json();

        assert!(action.status.quests.iter().all(|q| !q.done));
        assert_eq!(action.status.level, 2);
        assert_eq!(action.status.experience, 0);
        assert_eq!(action.experience_awarded, 0);
    }
}

mod stats {
    use super::*;

    #[tokio::test]
    async fn returns_default_attributes() {
        let server = setup();
        let response = server.get("/api/v1/stats").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "STR": 5, "AGI": 5, "VIT": 5, "INT": 5 }));
        assert_eq!(response.text(), r#"{"STR":5,"AGI":5,"VIT":5,"INT":5}"#);
    }
}

mod exercises {
    use super::*;

    #[tokio::test]
    async fn offline_catalog_serves_fallback() {
        let server = setup();
        let list: ExerciseList = server.get("/api/v1/exercises/back").await.json();

        assert_eq!(list.target, "back");
        assert_eq!(list.origin, CatalogOrigin::Fallback);
        assert_eq!(list.exercises.len(), 4);
        assert_eq!(list.exercises[3].name, "Bicep Curl");
    }

    #[tokio::test]
    async fn defaults_to_chest() {
        let server = setup();
        let list: ExerciseList = server.get("/api/v1/exercises").await.json();
        assert_eq!(list.target, "chest");
    }
}

mod avatar {
    use super::*;

    #[tokio::test]
    async fn round_trips_a_data_url() {
        let server = setup();
        let body = AvatarBody {
            data_url: Some("data:image/gif;base64,R0lGODlh".to_string()),
        };

        server
            .put("/api/v1/avatar")
            .json(&body)
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let stored: AvatarBody = server.get("/api/v1/avatar").await.json();
        assert_eq!(stored.data_url, body.data_url);
    }

    #[tokio::test]
    async fn rejects_non_image_data() {
        let server = setup();
        let response = server
            .put("/api/v1/avatar")
            .json(&AvatarBody {
                data_url: Some("https://example.com/me.png".to_string()),
            })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
