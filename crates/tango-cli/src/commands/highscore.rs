//! The `tango highscore` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use tango_core::HighScoreGateway;
use tango_gateway::config::{load_config_from, GatewayConfig};
use tango_gateway::{create_gateway, HttpGateway};

pub async fn execute(submit: Option<u64>, ping: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    if ping {
        let GatewayConfig::Http {
            base_url,
            timeout_secs,
        } = &config.gateway
        else {
            println!("memory gateway: always up");
            return Ok(());
        };
        let gateway = HttpGateway::new(base_url, *timeout_secs)?;
        let ok = gateway
            .ping()
            .await
            .with_context(|| format!("ping failed: {}", gateway.base_url()))?;
        println!("{}: {}", gateway.base_url(), if ok { "ok" } else { "not ok" });
        return Ok(());
    }

    let gateway = create_gateway(&config.gateway)?;
    match submit {
        Some(score) => {
            let outcome = gateway
                .submit_score(score)
                .await
                .context("failed to submit score")?;
            println!(
                "Submitted {score}. Best: {}{}",
                outcome.best,
                if outcome.updated { " (new record)" } else { "" }
            );
        }
        None => {
            let best = gateway
                .fetch_best()
                .await
                .context("failed to fetch best score")?;
            println!("Best score: {}", best.best);
        }
    }

    Ok(())
}
