use actix_web::{web, HttpResponse, Responder};

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(status)));
}

async fn status() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "Orchestrator online",
        "version": VERSION,
        "message": "API running"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_status_probe() {
        let app = test::init_service(App::new().configure(config)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "Orchestrator online");
        assert_eq!(body["version"], VERSION);
    }
}
