//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, INACTIVITY_HOURS (tournament auto-cleanup, default 12).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use padel_americano_web::{
    calculate_standings, enter_score, finish_matches, reshuffle_tournament, standings_csv,
    start_tournament, MatchId, MaxScore, SchedulePreview, Side, Tournament, TournamentError,
    TournamentId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

impl TournamentEntry {
    fn new(tournament: Tournament) -> Self {
        Self {
            tournament,
            last_activity: Instant::now(),
        }
    }
}

/// In-memory state: many tournaments by ID. Inactive entries are removed periodically.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Server settings read from the environment.
struct ServerConfig {
    host: String,
    port: u16,
    inactivity_timeout: Duration,
}

impl ServerConfig {
    fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let hours: u64 = std::env::var("INACTIVITY_HOURS")
            .ok()
            .and_then(|h| h.parse().ok())
            .unwrap_or(12);
        Self {
            host,
            port,
            inactivity_timeout: Duration::from_secs(hours * 3600),
        }
    }
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct PreviewBody {
    player_count: usize,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    players: Vec<String>,
    #[serde(default)]
    max_score: MaxScore,
}

#[derive(Deserialize)]
struct ScoreBody {
    team: Side,
    score: u32,
}

#[derive(Deserialize)]
struct FinishBody {
    #[serde(default)]
    even_scores: bool,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id (e.g. /api/tournaments/{id}/matches/{match_id})
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

fn bad_request(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

/// Run `f` on the tournament with `id`, refreshing its last activity.
/// 404 if the tournament does not exist, 500 if the lock is poisoned.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.tournament)
        }
        None => not_found(),
    }
}

fn insert_tournament(state: &AppState, tournament: Tournament) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(tournament.id, TournamentEntry::new(tournament));
    response
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-americano-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Match/court/round counts for a player count, before any names are entered.
#[post("/api/tournaments/preview")]
async fn api_preview(body: Json<PreviewBody>) -> HttpResponse {
    HttpResponse::Ok().json(SchedulePreview::for_player_count(body.player_count))
}

/// Create a tournament and generate its schedule (client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    match start_tournament(&body.players, body.max_score) {
        Ok(t) => insert_tournament(&state, t),
        Err(e) => bad_request(e),
    }
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(t))
}

/// Delete a tournament ("New tournament" in the UI).
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => not_found(),
    }
}

/// Enter one side's score; the other side gets max score minus it.
#[put("/api/tournaments/{id}/matches/{match_id}/score")]
async fn api_set_score(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        match enter_score(t, path.match_id, body.team, body.score) {
            Ok(()) => HttpResponse::Ok().json(t),
            Err(e) => bad_request(e),
        }
    })
}

/// Finish the schedule, optionally closing unscored matches as even ties.
#[post("/api/tournaments/{id}/finish")]
async fn api_finish(
    state: AppState,
    path: Path<TournamentPath>,
    body: Option<Json<FinishBody>>,
) -> HttpResponse {
    let fill_even = body.map(|b| b.even_scores).unwrap_or(false);
    with_tournament(&state, path.id, |t| match finish_matches(t, fill_even) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    })
}

/// New schedule for the same players and max score.
#[post("/api/tournaments/{id}/reshuffle")]
async fn api_reshuffle(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match reshuffle_tournament(t) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    })
}

/// Current standings from the scored matches.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        HttpResponse::Ok().json(calculate_standings(&t.players, &t.matches))
    })
}

/// Current standings as a CSV download.
#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        match standings_csv(&calculate_standings(&t.players, &t.matches)) {
            Ok(csv) => HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .body(csv),
            Err(e) => bad_request(e),
        }
    })
}

/// Full tournament as JSON, to be restored later with import.
#[get("/api/tournaments/{id}/export")]
async fn api_export(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.to_json() {
        Ok(json) => HttpResponse::Ok()
            .content_type("application/json")
            .body(json),
        Err(e) => bad_request(e),
    })
}

/// Restore an exported tournament verbatim (same id, matches and scores).
#[post("/api/tournaments/import")]
async fn api_import(state: AppState, body: String) -> HttpResponse {
    match Tournament::from_json(&body) {
        Ok(t) => {
            log::info!("Imported tournament {} ({} matches)", t.id, t.matches.len());
            insert_tournament(&state, t)
        }
        Err(e) => bad_request(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive past the timeout
    let state_cleanup = state.clone();
    let inactivity_timeout = config.inactivity_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_preview)
            .service(api_import)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_set_score)
            .service(api_finish)
            .service(api_reshuffle)
            .service(api_standings_csv)
            .service(api_standings)
            .service(api_export)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
