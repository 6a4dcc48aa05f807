//! Theater command-line demo.
//!
//! Prints today's schedule and books a sample reservation through the reducer.

use showtime_core::{environment::Clock, reducer::Reducer};
use theater::{
    aggregates::{Theater, TheaterAction, TheaterEnvironment, TheaterReducer, TheaterState},
    config::Config,
    lineup::{daily_lineup, default_catalog},
    projections::{render_reservation, render_schedule},
    types::Customer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn banner(title: &str) -> String {
    format!("==================== {title} ====================")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let clock = config.clock();
    let today = clock.today();
    info!(%today, output = ?config.schedule_output, "Configuration loaded");

    let catalog = default_catalog()?;
    let mut theater = Theater::new();
    theater.insert_lineup(today, daily_lineup(&catalog, today)?);

    for format in config.schedule_output.formats() {
        println!("{}", banner(&format!("Printing in {format} format")));
        print!("{}", render_schedule(&theater, today, *format)?);
    }

    let reducer = TheaterReducer::new();
    let env = TheaterEnvironment::new(clock);
    let mut state = TheaterState::new(theater);

    let demo = &config.demo;
    reducer.reduce(
        &mut state,
        TheaterAction::Reserve {
            customer: Customer::new(demo.customer_name.clone(), demo.customer_id.clone())?,
            show_date: today,
            sequence: demo.sequence,
            audience_count: demo.tickets,
        },
        &env,
    );

    if let Some(error) = &state.last_error {
        warn!(%error, "Sample booking failed");
        println!("{}", banner("Reservation failed"));
        println!("{error}");
        return Ok(());
    }

    if let Some(reservation) = state.last_reservation() {
        println!("{}", banner("Reservation complete with following details"));
        println!("{}", render_reservation(reservation)?);
        println!(
            "No of seats left after reservation: {}",
            reservation.showing().seats_left()
        );
    }

    Ok(())
}
