use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::models::QueryLog;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub user_name: String,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub final_answer: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct ListLogsResponse {
    total: usize,
    logs: Vec<QueryLog>,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/v1/query").route(web::post().to(process_query)))
        .service(web::resource("/api/v1/logs").route(web::get().to(get_logs)));
}

/// Run one query through the orchestrator and persist the outcome.
///
/// A generation failure aborts the request before any log write. An insert
/// failure after a computed answer also fails the request: every answer the
/// API returns must be in the log, so a best-effort return would break the
/// one guarantee the log provides.
async fn process_query(
    state: web::Data<AppState>,
    body: web::Json<QueryRequest>,
) -> impl Responder {
    log::info!("Processing query from user {}", body.user_name);

    let final_answer = match state.orchestrator.answer(&body.prompt).await {
        Ok(answer) => answer,
        Err(e) => {
            log::error!("Generation failed for user {}: {}", body.user_name, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: format!("Error processing query: {}", e),
            });
        }
    };

    match state
        .db
        .insert_query_log(&body.user_name, &body.prompt, Some(&final_answer))
    {
        Ok(entry) => {
            log::info!("Query log saved with id {}", entry.id);
            HttpResponse::Ok().json(QueryResponse { final_answer })
        }
        Err(e) => {
            log::error!("Failed to persist query log: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: format!("Error processing query: {}", e),
            })
        }
    }
}

async fn get_logs(state: web::Data<AppState>) -> impl Responder {
    match state.db.list_query_logs() {
        Ok(logs) => HttpResponse::Ok().json(ListLogsResponse {
            total: logs.len(),
            logs,
        }),
        Err(e) => {
            log::error!("Failed to list query logs: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: format!("Error fetching logs: {}", e),
            })
        }
    }
}
