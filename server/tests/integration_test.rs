use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use std::path::{Path, PathBuf};

use gameshelf_db as db;

fn fs_root_dir() -> PathBuf {
    // Templates and static assets live at the workspace root.
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..")
}

fn config(db_path: &str) -> gameshelf_server::config::Config {
    let server_config = gameshelf_server::config::ServerConfig {
        port: 0,
        site_base_url_path: "".to_owned(),
        fs_root_dir: fs_root_dir(),
    };
    gameshelf_server::config::Config {
        server_config,
        db_path: db_path.to_owned(),
    }
}

struct TestServer {
    base: String,
    db: sea_orm::DatabaseConnection,
    handle: actix_web::dev::ServerHandle,
    join: tokio::task::JoinHandle<()>,
    _dir: tempdir::TempDir,
}

async fn start_server() -> TestServer {
    let _ = env_logger::Builder::from_env(env_logger::Env::default())
        .is_test(true)
        .filter_module("sqlx", log::LevelFilter::Error)
        .try_init();
    let dir = tempdir::TempDir::new("gameshelf-test").expect("Failed to create test dir");
    let db_url = format!("sqlite://{}/db.sqlite?mode=rwc", dir.path().to_str().unwrap());
    let handle = gameshelf_server::server::create(config(&db_url))
        .await
        .expect("Failed to create the server");
    let port = handle.addrs[0].port();
    let server_handle = handle.server.handle();
    let join = tokio::task::spawn(async move {
        let _ = handle.server.await.inspect_err(|e| {
            log::error!("Running the server failed: {e:?}");
        });
    });
    let db = sea_orm::Database::connect(&db_url)
        .await
        .expect("Failed to connect to the database");
    TestServer {
        base: format!("http://[::1]:{port}"),
        db,
        handle: server_handle,
        join,
        _dir: dir,
    }
}

async fn stop_server(srv: TestServer) {
    srv.handle.stop(true).await;
    let _ = srv.join.await;
}

async fn get_text(client: &reqwest::Client, url: &str) -> String {
    let resp = client.get(url).send().await.expect("GET failed");
    assert!(resp.status().is_success(), "GET {url}: {}", resp.status());
    resp.text().await.expect("Failed to read body")
}

#[tokio::test]
async fn crud_scenario() {
    let srv = start_server().await;
    let base = &srv.base;
    let client = reqwest::Client::new();

    let body = get_text(&client, &format!("{base}/")).await;
    assert!(!body.contains("Chrono"));

    // Create a game; the redirect lands back on the list.
    let resp = client
        .post(format!("{base}/games/create"))
        .form(&[("name", "Chrono"), ("genre", "RPG"), ("developer", "Square")])
        .send()
        .await
        .expect("POST /games/create failed");
    assert!(resp.status().is_success());
    let body = resp.text().await.unwrap();
    assert!(body.contains("Chrono"));
    assert!(body.contains("N/A"));

    let game = db::prelude::Games::find()
        .filter(db::games::Column::Name.eq("Chrono"))
        .one(&srv.db)
        .await
        .expect("Failed to fetch game")
        .expect("Created game not in the database");
    assert_eq!(game.genre, "RPG");
    assert_eq!(game.developer, "Square");

    // First rating takes the average to 4.00 on the detail page.
    let resp = client
        .post(format!("{base}/ratings/create/{}", game.id))
        .form(&[("user", "alice"), ("stars", "4"), ("description", "solid")])
        .send()
        .await
        .expect("POST /ratings/create failed");
    assert!(resp.status().is_success());
    let body = resp.text().await.unwrap();
    assert!(body.contains("alice"));
    assert!(body.contains("4.00"));

    // Second rating: 4.50, visible on the detail page and in the list.
    let resp = client
        .post(format!("{base}/ratings/create/{}", game.id))
        .form(&[("user", "bob"), ("stars", "5"), ("description", "")])
        .send()
        .await
        .expect("POST /ratings/create failed");
    assert!(resp.status().is_success());
    assert!(resp.text().await.unwrap().contains("4.50"));
    let body = get_text(&client, &format!("{base}/")).await;
    assert!(body.contains("4.50"));
    assert!(!body.contains("N/A"));

    // Editing the game keeps its id and ratings.
    let resp = client
        .post(format!("{base}/games/edit/{}", game.id))
        .form(&[
            ("name", "Chrono Trigger"),
            ("genre", "RPG"),
            ("developer", "Squaresoft"),
        ])
        .send()
        .await
        .expect("POST /games/edit failed");
    assert!(resp.status().is_success());
    let edited = db::games::Entity::find_by_id(game.id)
        .one(&srv.db)
        .await
        .expect("Failed to fetch game")
        .expect("Edited game disappeared");
    assert_eq!(edited.name, "Chrono Trigger");
    assert_eq!(edited.developer, "Squaresoft");
    let ratings = db::prelude::Ratings::find()
        .filter(db::ratings::Column::GameId.eq(game.id))
        .all(&srv.db)
        .await
        .expect("Failed to fetch ratings");
    assert_eq!(ratings.len(), 2);

    // Editing alice's rating moves the average to 3.50.
    let alice = ratings.iter().find(|r| r.user == "alice").unwrap();
    let resp = client
        .post(format!("{base}/ratings/edit/{}", alice.id))
        .form(&[("user", "alice"), ("stars", "2"), ("description", "replayed it")])
        .send()
        .await
        .expect("POST /ratings/edit failed");
    assert!(resp.status().is_success());
    assert!(resp.text().await.unwrap().contains("3.50"));

    // Deleting bob's rating redirects to the detail page.
    let bob = ratings.iter().find(|r| r.user == "bob").unwrap();
    let resp = client
        .post(format!("{base}/ratings/delete/{}", bob.id))
        .send()
        .await
        .expect("POST /ratings/delete failed");
    assert!(resp.status().is_success());
    let body = resp.text().await.unwrap();
    assert!(!body.contains("bob"));
    assert!(body.contains("2.00"));

    // Deleting the game cascades to the remaining rating.
    let resp = client
        .post(format!("{base}/games/delete/{}", game.id))
        .send()
        .await
        .expect("POST /games/delete failed");
    assert!(resp.status().is_success());
    assert!(!resp.text().await.unwrap().contains("Chrono"));
    let ratings = db::prelude::Ratings::find()
        .filter(db::ratings::Column::GameId.eq(game.id))
        .all(&srv.db)
        .await
        .expect("Failed to fetch ratings");
    assert!(ratings.is_empty());

    stop_server(srv).await;
}

#[tokio::test]
async fn error_paths() {
    let srv = start_server().await;
    let base = &srv.base;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/games/create"))
        .form(&[("name", "Ys"), ("genre", "ARPG"), ("developer", "Falcom")])
        .send()
        .await
        .expect("POST /games/create failed");
    assert!(resp.status().is_success());
    let game = db::prelude::Games::find()
        .one(&srv.db)
        .await
        .expect("Failed to fetch game")
        .expect("Created game not in the database");

    // Missing form fields are rejected before reaching the handler.
    let resp = client
        .post(format!("{base}/games/create"))
        .form(&[("name", "incomplete"), ("genre", "RPG")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    // Non-numeric and out-of-range stars are client errors.
    let resp = client
        .post(format!("{base}/ratings/create/{}", game.id))
        .form(&[("user", "eve"), ("stars", "lots"), ("description", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    for stars in ["0", "6"] {
        let resp = client
            .post(format!("{base}/ratings/create/{}", game.id))
            .form(&[("user", "eve"), ("stars", stars), ("description", "")])
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST, "stars {stars}");
    }

    // Rating a game that does not exist trips the foreign key.
    let resp = client
        .post(format!("{base}/ratings/create/9999"))
        .form(&[("user", "eve"), ("stars", "3"), ("description", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    // Views of missing records are 404s.
    for url in [
        format!("{base}/games/9999"),
        format!("{base}/games/edit/9999"),
        format!("{base}/ratings/edit/9999"),
        format!("{base}/ratings/create/9999"),
    ] {
        let resp = client.get(&url).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND, "GET {url}");
    }
    let resp = client
        .post(format!("{base}/games/edit/9999"))
        .form(&[("name", "x"), ("genre", "y"), ("developer", "z")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let resp = client
        .post(format!("{base}/ratings/edit/9999"))
        .form(&[("user", "eve"), ("stars", "3"), ("description", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    // Deletes of missing records are silent no-ops that redirect.
    let resp = client
        .post(format!("{base}/games/delete/9999"))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let resp = client
        .post(format!("{base}/ratings/delete/9999"))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let games = db::prelude::Games::find()
        .all(&srv.db)
        .await
        .expect("Failed to fetch games");
    assert_eq!(games.len(), 1);

    stop_server(srv).await;
}
