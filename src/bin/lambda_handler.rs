//! AWS Lambda handler for investment projections
//!
//! Accepts the six calculator inputs as JSON via a Lambda Function URL and
//! returns the projection. Invalid inputs still return 200, with
//! `displayResults: false` and zeroed figures.

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use investment_calculator::{InvestmentInputs, ProjectionConfig, ProjectionRow, ScenarioRunner};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    #[serde(flatten)]
    pub inputs: InvestmentInputs,

    /// Reject tax rates above 100% (default: true)
    #[serde(default = "default_enforce_ceiling")]
    pub enforce_tax_rate_ceiling: bool,
}

fn default_enforce_ceiling() -> bool { true }

impl CalculationRequest {
    fn config(&self) -> ProjectionConfig {
        if self.enforce_tax_rate_ceiling {
            ProjectionConfig::default()
        } else {
            ProjectionConfig::permissive()
        }
    }
}

/// Response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    #[serde(flatten)]
    pub result: ProjectionRow,
    pub real_rate_of_return: f64,
    pub execution_time_us: u64,
}

fn cors_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type",
    })
}

fn http_response(status: u16, body: Option<String>) -> Value {
    json!({
        "statusCode": status,
        "headers": cors_headers(),
        "body": body,
        "isBase64Encoded": false,
    })
}

fn error_response(status: u16, message: &str) -> Value {
    http_response(status, Some(json!({ "error": message }).to_string()))
}

/// Run one calculation from a raw JSON body
fn calculate_body(body: &str) -> Result<CalculationResponse, serde_json::Error> {
    let start = std::time::Instant::now();

    let request: CalculationRequest = serde_json::from_str(body)?;
    let runner = ScenarioRunner::with_config(request.config());
    let result = runner.run(&request.inputs);

    Ok(CalculationResponse {
        result: ProjectionRow::from_result("request", &result),
        real_rate_of_return: result.real_rate_of_return,
        execution_time_us: start.elapsed().as_micros() as u64,
    })
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<Value, Error> {
    let request = event.payload;
    let method = request.request_context.http.method.as_deref().unwrap_or("POST");

    // CORS preflight
    if method == "OPTIONS" {
        return Ok(http_response(200, None));
    }

    if request.is_base64_encoded {
        return Ok(error_response(400, "Base64-encoded bodies are not supported"));
    }

    let body = request.body.as_deref().unwrap_or("{}");
    match calculate_body(body) {
        Ok(response) => {
            debug!("Calculated in {}us", response.execution_time_us);
            Ok(http_response(200, Some(serde_json::to_string(&response)?)))
        }
        Err(e) => {
            warn!("Rejected request body: {}", e);
            Ok(error_response(400, &format!("Invalid JSON: {}", e)))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
