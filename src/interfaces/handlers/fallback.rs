use actix_web::{http::Method, HttpRequest, HttpResponse};

/// Catch-all for anything no route claims: OPTIONS gets an empty 200 so
/// preflight-less CORS probes succeed, everything else gets a 404 naming
/// the method and path.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok().finish();
    }

    HttpResponse::NotFound().json(serde_json::json!({
        "message": format!("Route not found: {} {}", req.method(), req.path())
    }))
}
