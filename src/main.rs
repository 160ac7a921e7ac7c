use clap::Parser;
use monitor_selector::{cli, client, config, error, logging, scanner, session, table};
use monitor_selector_common::{parse_candidates, render, Alert, FilterCriteria, FormController};
use cli::{Cli, Commands};
use client::ProcessCvsClient;
use config::Config;
use error::{MonitorSelectorError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Submit { paths, criteria, endpoint, output, json } => {
            let documents = scanner::collect_documents(&paths)?;
            let endpoint = endpoint.unwrap_or_else(|| config.endpoint());
            let client = ProcessCvsClient::new(endpoint, config.timeout())?;

            let mut controller = FormController::with_criteria(FilterCriteria::from(criteria));
            controller.set_files(documents);

            if !json {
                println!("📤 {}件の履歴書を送信中... ({})", controller.files().len(), client.endpoint());
            }

            if let Some(alert) = session::submit(&mut controller, &client).await {
                return Err(match alert {
                    Alert::MissingFiles => {
                        MonitorSelectorError::NoDocumentsFound(alert.message().to_string())
                    }
                    Alert::SubmitFailed => {
                        MonitorSelectorError::SubmitFailed(alert.message().to_string())
                    }
                    Alert::InvalidNumber(_) => {
                        MonitorSelectorError::InvalidCriteria(alert.message().to_string())
                    }
                });
            }

            let results = controller.results().unwrap_or_default();

            if let Some(output) = output {
                std::fs::write(&output, serde_json::to_string_pretty(results)?)?;
                if !json {
                    println!("✔ 結果を保存: {}", output.display());
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(results)?);
            } else {
                println!("\n{}", table::format_view(&controller.view()));
            }
        }

        Commands::Form { endpoint } => {
            let endpoint = endpoint.unwrap_or_else(|| config.endpoint());
            let client = ProcessCvsClient::new(endpoint, config.timeout())?;
            let mut controller = FormController::new();
            session::run_form_session(&mut controller, &client).await?;
        }

        Commands::Show { input, subject } => {
            let content = std::fs::read_to_string(&input)?;
            let candidates = parse_candidates(&content)?;
            println!("{}", table::format_view(&render(Some(&candidates), &subject, false)));
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ 送信先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  送信先: {}", config.endpoint());
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: なし"),
                }
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
