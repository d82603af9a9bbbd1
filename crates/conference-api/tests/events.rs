use std::collections::BTreeSet;

use actix_web::http::StatusCode;
use chrono::NaiveDate;
use serde_json::json;


#[tokio::test]
async fn no_events() -> anyhow::Result<()> {
    base::with_db(async |db| {
        let app = base::get_app(db).await;

        let (status, body) = base::get_json(&app, "/events").await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn list_events() -> anyhow::Result<()> {
    base::with_db(async |db| {
        base::insert_event(&db.sql_conn, 2, "RustFest", "Lyon").await?;
        base::insert_event(&db.sql_conn, 1, "DevConf", "Austin").await?;
        let app = base::get_app(db).await;

        let (status, body) = base::get_json(&app, "/events").await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": 1, "name": "DevConf", "location": "Austin"},
                {"id": 2, "name": "RustFest", "location": "Lyon"},
            ])
        );

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn event_sessions_scenario() -> anyhow::Result<()> {
    base::with_db(async |db| {
        base::insert_event(&db.sql_conn, 1, "DevConf", "Austin").await?;
        base::insert_session(&db.sql_conn, 10, "Intro", Some(1), None).await?;
        let app = base::get_app(db).await;

        let (status, body) = base::get_json(&app, "/events/1/sessions").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"id": 10, "title": "Intro", "start_time": null}])
        );

        let (status, body) = base::get_json(&app, "/events/999/sessions").await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Event not found"}));

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn event_sessions_only_of_the_event() -> anyhow::Result<()> {
    let start_time = NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap();

    base::with_db(async |db| {
        base::insert_event(&db.sql_conn, 1, "DevConf", "Austin").await?;
        base::insert_event(&db.sql_conn, 2, "RustFest", "Lyon").await?;
        base::insert_session(&db.sql_conn, 10, "Intro", Some(1), Some(start_time)).await?;
        base::insert_session(&db.sql_conn, 11, "Lunch", Some(1), None).await?;
        base::insert_session(&db.sql_conn, 20, "Keynote", Some(2), None).await?;
        base::insert_session(&db.sql_conn, 30, "Unscheduled", None, None).await?;
        let app = base::get_app(db).await;

        let (status, body) = base::get_json(&app, "/events/1/sessions").await?;
        assert_eq!(status, StatusCode::OK);

        let sessions = body.as_array().unwrap();
        let ids = sessions
            .iter()
            .map(|s| s["id"].as_i64().unwrap())
            .collect::<BTreeSet<_>>();
        assert_eq!(ids, BTreeSet::from([10, 11]));

        let intro = sessions.iter().find(|s| s["id"] == 10).unwrap();
        assert_eq!(intro["title"], "Intro");
        assert_eq!(intro["start_time"], "2024-05-01T09:30:00");

        let (status, body) = base::get_json(&app, "/events/2/sessions").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"id": 20, "title": "Keynote", "start_time": null}])
        );

        anyhow::Ok(())
    })
    .await
}

#[tokio::test]
async fn event_without_sessions() -> anyhow::Result<()> {
    base::with_db(async |db| {
        base::insert_event(&db.sql_conn, 1, "DevConf", "Austin").await?;
        let app = base::get_app(db).await;

        let (status, body) = base::get_json(&app, "/events/1/sessions").await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        anyhow::Ok(())
    })
    .await
}
