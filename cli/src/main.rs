use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use products::qr::{QrError, data_url_png_bytes, decode_image};
use products::{ContractError, Product, REGISTER_PATH, RegisterRequest, VerificationCode, VerifyPolicy};
use serde_json::Value;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Contract(#[from] ContractError),
    #[error("qr image: {0}")]
    Qr(#[from] QrError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("product `{0}` not found")]
    NotFound(String),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
}

#[derive(Parser, Debug)]
#[command(name = "agrichain-cli", about = "AgriChain product registry CLI")]
struct Cli {
    #[arg(long, env = "AGRICHAIN_BASE_URL", default_value = "http://localhost:8086")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
}

impl CliContext {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the server's health endpoint.
    Ping,
    /// Register a harvested product and print its verification code.
    Register(RegisterArgs),
    /// Verify a QR payload, given directly or read from a QR image.
    Verify(VerifyArgs),
    /// Fetch a registered product by id.
    Get { product_id: String },
    /// Split a verification code into its parts without contacting the server.
    DecodeCode { code: String },
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    category: String,
    #[arg(long, help = "Harvest date, YYYY-MM-DD")]
    harvest_date: String,
    #[arg(long, help = "Harvest time, HH:MM")]
    harvest_time: String,
    #[arg(long)]
    location: String,
    #[arg(long, help = "premium, excellent, good, standard or poor")]
    quality: String,
    #[arg(long)]
    price: f64,
    #[arg(long)]
    description: String,
    #[arg(long)]
    product_id: Option<String>,
    #[arg(long, help = "Write the QR code PNG to this path")]
    qr_out: Option<PathBuf>,
}

impl RegisterArgs {
    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            product_id: self.product_id.clone().filter(|id| !id.trim().is_empty()),
            name: self.name.clone(),
            category: self.category.clone(),
            harvest_date: self.harvest_date.clone(),
            harvest_time: self.harvest_time.clone(),
            farm_location: self.location.clone(),
            quality_rating: self.quality.clone(),
            price_per_unit: Some(self.price),
            description: self.description.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct VerifyArgs {
    #[arg(required_unless_present = "image", conflicts_with = "image")]
    code: Option<String>,

    #[arg(long, help = "Decode the code from a QR image (PNG/JPEG)")]
    image: Option<PathBuf>,

    #[arg(long, default_value_t = VerifyPolicy::Lenient)]
    policy: VerifyPolicy,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Register(args) => run_register(&ctx, args).await,
        Command::Verify(args) => run_verify(&ctx, args).await,
        Command::Get { product_id } => run_get(&ctx, &product_id).await,
        Command::DecodeCode { code } => run_decode_code(&code),
    }
}

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    let response = reqwest::Client::new().get(ctx.url("/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

async fn run_register(ctx: &CliContext, args: RegisterArgs) -> Result<(), CliError> {
    let response = reqwest::Client::new()
        .post(ctx.url(REGISTER_PATH))
        .json(&args.to_request())
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    let registration = products::classify_registration(status, &body)?;

    println!("product id: {}", registration.product.product_id);
    if let Some(code) = &registration.verification_code {
        println!("verification code: {code}");
    }
    if let Some(path) = &args.qr_out {
        fs::write(path, data_url_png_bytes(&registration.qr_code)?)?;
        println!("qr code written to {}", path.display());
    }
    Ok(())
}

async fn run_verify(ctx: &CliContext, args: VerifyArgs) -> Result<(), CliError> {
    let code = match (&args.code, &args.image) {
        (Some(code), _) => code.trim().to_owned(),
        (None, Some(path)) => decode_image(&fs::read(path)?)?,
        (None, None) => return Err(ContractError::InvalidCode("no code given".to_owned()).into()),
    };

    let response = reqwest::Client::new()
        .get(ctx.url(&products::verify_path(&code)))
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    let product = args.policy.classify(status, &body)?;
    print_product(&product)
}

async fn run_get(ctx: &CliContext, product_id: &str) -> Result<(), CliError> {
    let response = reqwest::Client::new()
        .get(ctx.url(&products::product_path(product_id)))
        .send()
        .await?;
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(CliError::NotFound(product_id.to_owned()));
    }
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: server_message(&body) });
    }
    let product: Product = serde_json::from_str(&body)?;
    print_product(&product)
}

fn run_decode_code(code: &str) -> Result<(), CliError> {
    let decoded = VerificationCode::decode(code)?;
    println!("product id:    {}", decoded.product_id);
    println!("name:          {}", decoded.name);
    println!("farm location: {}", decoded.farm_location);
    println!("issued at ms:  {}", decoded.issued_at_ms);
    Ok(())
}

/// The `error` string of a JSON error body, or the body itself.
fn server_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("error").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned())
}

fn print_product(product: &Product) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(product)?);
    Ok(())
}
