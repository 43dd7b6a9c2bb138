use std::env;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripweaver::config::{GeoapifyConfig, PlannerConfig};
use tripweaver::error::AppError;
use tripweaver::models::{TripPlan, TripRequest, TripResponse};
use tripweaver::report::format_trip_plan;
use tripweaver::services::geoapify::GeoapifyClient;
use tripweaver::services::trip_service::TripService;

fn print_help() {
    eprintln!(
        "\
Usage: plan [OPTIONS]

Options:
  --destination=TEXT    City or region to visit
  --hotel=TEXT          Hotel name, geocoded together with the destination
  --days=N              Trip duration in days
  --preference=TEXT     sightseeing, gastronomy, nature or mix of everything
                        (unknown values plan a mix of everything)
  --json                Output the itinerary as JSON
  --help                Show this help message

Missing values are prompted for on stdin."
    );
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn arg_or_prompt(args: &[String], flag: &str, label: &str) -> io::Result<String> {
    match args.iter().find_map(|a| a.strip_prefix(flag)) {
        Some(value) => Ok(value.to_string()),
        None => prompt(label),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (quiet for console use)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripweaver=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let json_output = args.iter().any(|a| a == "--json");
    // Server settings (HOST, PORT) are not needed here
    let geoapify_config = GeoapifyConfig::from_env().map_err(AppError::Config)?;
    let planner_config = PlannerConfig::from_env().map_err(AppError::Config)?;

    let destination = arg_or_prompt(&args, "--destination=", "Destination")?;
    let hotel = arg_or_prompt(&args, "--hotel=", "Hotel")?;
    let days: u32 = arg_or_prompt(&args, "--days=", "Duration (days)")?
        .parse()
        .map_err(|_| "Duration must be a whole number of days")?;
    let preference = arg_or_prompt(
        &args,
        "--preference=",
        "Preference (e.g. sightseeing, gastronomy, nature, mix of everything)",
    )?;

    let request = TripRequest {
        destination,
        hotel,
        days,
        preference,
    };
    request
        .validate()
        .map_err(|e| format!("Invalid trip: {}", e))?;

    let geoapify = GeoapifyClient::from_config(&geoapify_config);
    if !geoapify.validate_api_key().await {
        eprintln!("WARNING: Geoapify API key validation failed. Lookups may not work correctly.");
    }

    let service = TripService::new(Arc::new(geoapify), planner_config);
    let plan = service.plan_trip(&request).await;

    if matches!(plan, TripPlan::HotelNotFound) {
        eprint!("{}", format_trip_plan(&plan));
        std::process::exit(1);
    }

    if json_output {
        let status = plan.status();
        if let TripPlan::NoCandidates(summary) | TripPlan::Planned(summary) = plan {
            let total_visits = summary.itinerary.total_visits();
            let response = TripResponse {
                status,
                summary,
                total_visits,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    } else {
        println!("\n{}", format_trip_plan(&plan));
    }

    Ok(())
}
