use backend::{api, cors::CORS, repository::VoteRepository, routes::AppState};
use rocket::fs::NamedFile;
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use tracing::info;
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

#[rocket::get("/<path..>")]
async fn spa_handler(path: std::path::PathBuf, temp_dir: &rocket::State<std::path::PathBuf>) -> Option<NamedFile> {
    let file_path = temp_dir.join(&path);
    if file_path.exists() && file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(temp_dir.join("index.html")).await.ok()
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting Goal of the Year server");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(CustomError::new)?;

    info!("📋 Migrations complete");

    let cors = CORS::new(secret_store.get("ALLOWED_ORIGIN"));

    let temp_dir = std::env::temp_dir().join(format!("goal_vote_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir).map_err(CustomError::new)?;
    STATIC_DIR.extract(&temp_dir).map_err(CustomError::new)?;

    let rocket = api(AppState::new(VoteRepository::new(pool)), cors)
        .manage(temp_dir)
        .mount("/", rocket::routes![spa_handler]);

    Ok(rocket.into())
}
