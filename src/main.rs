use clap::Parser;
use freshscan::{cli, client, config, error, output, scanner};

use cli::{Cli, Commands};
use client::FreshnessClient;
use config::Config;
use error::Result;
use indicatif::ProgressBar;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            path,
            output: output_path,
            endpoint,
            field,
        } => {
            println!("🍏 freshscan - image freshness analysis\n");

            println!("[1/2] Scanning for images...");
            let images = scanner::scan_path(&path)?;
            if images.is_empty() {
                return Err(error::FreshscanError::NoImagesFound(
                    path.display().to_string(),
                ));
            }
            println!("✔ {} image(s) found\n", images.len());

            // flag wins over env var wins over stored config
            let endpoint_url = endpoint.unwrap_or_else(|| config.endpoint());
            let upload_field = field.unwrap_or(config.upload_field);
            let client = FreshnessClient::new(
                endpoint_url,
                upload_field,
                config.timeout_seconds,
                cli.verbose,
            )?;

            println!("[2/2] Analyzing via {}...\n", client.endpoint());
            let mut saved = Vec::new();
            let mut failures = 0usize;

            for image in &images {
                output::print_file_line(image);

                let spinner = ProgressBar::new_spinner();
                spinner.set_message(format!("Uploading {}...", image.file_name));
                spinner.enable_steady_tick(Duration::from_millis(120));
                let result = client.analyze(image).await;
                spinner.finish_and_clear();

                match result {
                    Ok(report) => {
                        output::print_report(&report);
                        saved.push(output::saved_report(image, &report));
                    }
                    Err(err) => {
                        // earlier results stay on screen untouched
                        failures += 1;
                        eprintln!("  ❌ Analysis failed: {}", err);
                    }
                }
            }

            if let Some(out) = output_path {
                output::write_reports(&out, &saved)?;
                println!("\n✔ Reports saved: {}", out.display());
            }

            if failures == images.len() {
                return Err(error::FreshscanError::ApiCall(format!(
                    "all {} upload(s) failed",
                    failures
                )));
            }
            println!("\n✅ Done");
        }

        Commands::Ping { endpoint } => {
            let url = endpoint.unwrap_or_else(|| config.endpoint());
            let client =
                FreshnessClient::new(url, config.upload_field, config.timeout_seconds, cli.verbose)?;

            let status = client.ping().await?;
            println!("✔ Service reachable");
            println!("  status: {}", status.status);
            if !status.message.is_empty() {
                println!("  message: {}", status.message);
            }
            if !status.routes.is_empty() {
                println!("  routes: {}", status.routes.join(", "));
            }
        }

        Commands::Config {
            set_endpoint,
            set_field,
            show,
        } => {
            let mut config = config;

            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
                println!("✔ Endpoint saved");
            }

            if let Some(field) = set_field {
                config.set_field(field)?;
                println!("✔ Upload field saved");
            }

            if show {
                println!("Configuration:");
                println!("  endpoint: {}", config.endpoint());
                println!("  upload field: {}", config.upload_field);
                println!("  timeout: {}s", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
