use anyhow::anyhow;
use clap::Parser;
use slog::{debug, error};
use std::sync::Arc;
use yr_forecast::{
    get_settings, setup_logger, Cli, ForecastCache, ForecastDocument, ForecastService, XmlFetcher,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    let logger = setup_logger(&cli);
    let settings = get_settings(&cli)?;
    debug!(logger, "settings: {:?}", settings);

    let fetcher = Arc::new(XmlFetcher::new(logger.clone(), &settings)?);
    let service = ForecastService::new(logger.clone(), fetcher, Arc::new(ForecastCache::new()));

    let result = match (&cli.url, &cli.file) {
        (Some(url), _) => service.load_from_url(url).await,
        (None, Some(file)) => service.load_from_path(file).await,
        (None, None) => return Err(anyhow!("either --url or --file is required")),
    };
    let forecast = match result {
        Ok(forecast) => forecast,
        Err(e) => {
            error!(logger, "error loading forecast: {}", e);
            return Err(e.into());
        }
    };

    print_forecast(&cli, &forecast)?;
    Ok(())
}

fn print_forecast(cli: &Cli, forecast: &ForecastDocument) -> Result<(), anyhow::Error> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(forecast)?);
        return Ok(());
    }

    println!("{}", forecast.describe()?);
    if cli.all {
        for interval in &forecast.intervals {
            println!("  {}", interval);
        }
    }
    println!("{}", forecast.credits());
    Ok(())
}
