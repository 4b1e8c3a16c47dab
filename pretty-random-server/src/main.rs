use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, put, web};

use serde::Deserialize;

use pretty_random_core::error::PrettyRandomError;
use pretty_random_core::pattern::charset::CharsetConfig;
use pretty_random_core::pattern::generator::PrettyRandom;
use pretty_random_core::pattern::rule::Rule;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	blocksize: usize,
	length: usize,
}

/// Struct representing query parameters for the `/v1/charset` endpoint.
/// Omitted flags keep their default value (digits + uppercase on,
/// lowercase off).
#[derive(Deserialize)]
struct CharsetParams {
	digits: Option<bool>,
	lowercase: Option<bool>,
	uppercase: Option<bool>,
}

impl CharsetParams {
	/// Merges the provided flags over the default configuration.
	fn config(&self) -> CharsetConfig {
		let defaults = CharsetConfig::default();
		CharsetConfig {
			use_digits: self.digits.unwrap_or(defaults.use_digits),
			use_lowercase: self.lowercase.unwrap_or(defaults.use_lowercase),
			use_uppercase: self.uppercase.unwrap_or(defaults.use_uppercase),
		}
	}
}

struct SharedData {
	generator: PrettyRandom,
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one decorative token using the shared generator and its
/// currently active charset. Returns the token as the response body,
/// or 400 with the constraint name when the arguments are invalid.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	match shared_data.generator.generate(query.blocksize, query.length) {
		Ok(token) => HttpResponse::Ok().body(token),
		Err(e @ PrettyRandomError::InvalidArgument(_)) => {
			log::warn!("rejected generate({}, {}): {}", query.blocksize, query.length, e);
			HttpResponse::BadRequest().body(e.to_string())
		}
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/rules`
///
/// Lists the five available block-pattern rules, one per line.
#[get("/v1/rules")]
async fn get_rules() -> impl Responder {
	let names: Vec<&str> = Rule::ALL.iter().map(|r| r.name()).collect();
	HttpResponse::Ok().body(names.join("\n"))
}

/// HTTP GET endpoint `/v1/charset`
///
/// Returns the currently active character pool as a single string.
#[get("/v1/charset")]
async fn get_charset(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	HttpResponse::Ok().body(shared_data.generator.pool().chars().collect::<String>())
}

/// HTTP PUT endpoint `/v1/charset`
///
/// Reconfigures the shared generator's charset from the query flags.
/// Returns 400 when the selection enables no symbol class; the prior
/// charset stays active in that case.
#[put("/v1/charset")]
async fn put_charset(data: web::Data<Mutex<SharedData>>, query: web::Query<CharsetParams>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let config = query.config();
	match shared_data.generator.configure(config) {
		Ok(_) => {
			log::info!(
				"charset reconfigured: digits={} lowercase={} uppercase={}",
				config.use_digits, config.use_lowercase, config.use_uppercase
			);
			HttpResponse::Ok().body("Charset configured successfully")
		}
		Err(e) => {
			log::warn!("rejected charset reconfiguration: {}", e);
			HttpResponse::BadRequest().body(e.to_string())
		}
	}
}

/// Main entry point for the server.
///
/// Wraps a single `PrettyRandom` generator in a `Mutex` for thread
/// safety and starts an Actix-web HTTP server exposing generation and
/// charset endpoints.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Logging is controlled through `RUST_LOG` (defaults to `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

	let shared_data = SharedData {
		generator: PrettyRandom::new(),
	};
	let shared_generator = web::Data::new(Mutex::new(shared_data));

	log::info!("listening on 127.0.0.1:5000");
	HttpServer::new(move || {
		App::new()
			.app_data(shared_generator.clone())
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.service(get_generated)
			.service(get_rules)
			.service(get_charset)
			.service(put_charset)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
