use actix_web::{get, route, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::server::state::AppState;
use crate::types::InvestorRecord;

const CORS_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

#[derive(Serialize)]
struct HomePayload<'a> {
    status: &'static str,
    total_investors: usize,
    data: &'a [InvestorRecord],
}

#[derive(Serialize)]
struct DataPayload<'a> {
    status: &'static str,
    data: &'a [InvestorRecord],
}

#[derive(Serialize)]
struct ErrorPayload {
    status: &'static str,
    message: String,
}

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.snapshot().await;
    HttpResponse::Ok()
        .insert_header(CORS_ORIGIN)
        .json(HomePayload {
            status: "success",
            total_investors: snapshot.len(),
            data: &snapshot,
        })
}

#[route("/scrape", method = "GET")]
pub async fn scrape(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.snapshot().await;
    let payload = DataPayload {
        status: "success",
        data: &snapshot,
    };
    match serde_json::to_value(&payload) {
        Ok(body) => HttpResponse::Ok().insert_header(CORS_ORIGIN).json(body),
        Err(err) => {
            error!(error = %err, "failed to serialize snapshot");
            HttpResponse::InternalServerError()
                .insert_header(CORS_ORIGIN)
                .json(ErrorPayload {
                    status: "error",
                    message: err.to_string(),
                })
        }
    }
}

#[route("/scrape", method = "OPTIONS")]
pub async fn scrape_preflight() -> impl Responder {
    HttpResponse::NoContent()
        .insert_header(CORS_ORIGIN)
        .insert_header(("Access-Control-Allow-Methods", "GET"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .insert_header(("Access-Control-Max-Age", "3600"))
        .finish()
}

#[cfg(test)]
mod tests {
    use actix_web::http::{Method, StatusCode};
    use actix_web::{test, web, App};

    use super::*;

    fn record(name: &str) -> InvestorRecord {
        InvestorRecord {
            investor: name.to_string(),
            deals: "12+".to_string(),
            median_amount: "$5.2m".to_string(),
            round_type: "Seed".to_string(),
            project_category: "DeFi".to_string(),
            project_name: "Uniswap".to_string(),
            chains: "eth.png".to_string(),
            scrape_date: "2024-01-01".to_string(),
        }
    }

    macro_rules! service {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .service(home)
                    .service(scrape)
                    .service(scrape_preflight),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn home_reports_empty_snapshot() {
        let app = service!(AppState::new());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["total_investors"], 0);
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn home_counts_published_records() {
        let state = AppState::new();
        state.publish(vec![record("a16z"), record("Paradigm")]).await;
        let app = service!(state);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["total_investors"], 2);
        assert_eq!(body["data"][0]["Investor"], "a16z");
        assert_eq!(body["data"][1]["Investor"], "Paradigm");
    }

    #[actix_web::test]
    async fn scrape_serves_full_record_shape() {
        let state = AppState::new();
        state.publish(vec![record("a16z")]).await;
        let app = service!(state);

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/scrape").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
        let row = &body["data"][0];
        assert_eq!(row["Investor"], "a16z");
        assert_eq!(row["Deals"], "12+");
        assert_eq!(row["Median_Amount"], "$5.2m");
        assert_eq!(row["Round_Type"], "Seed");
        assert_eq!(row["Project_Category"], "DeFi");
        assert_eq!(row["Project_Name"], "Uniswap");
        assert_eq!(row["Chains"], "eth.png");
        assert_eq!(row["Scrape_Date"], "2024-01-01");
    }

    #[actix_web::test]
    async fn preflight_advertises_cors_policy() {
        let app = service!(AppState::new());

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/scrape")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let headers = resp.headers();
        assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
        assert_eq!(headers.get("Access-Control-Allow-Methods").unwrap(), "GET");
        assert_eq!(
            headers.get("Access-Control-Allow-Headers").unwrap(),
            "Content-Type"
        );
        assert_eq!(headers.get("Access-Control-Max-Age").unwrap(), "3600");

        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }
}
