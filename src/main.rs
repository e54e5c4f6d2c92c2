mod cleanup;
mod config;
mod error;

use log::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::Config::from_env()?;

    info!("start cleaning resources for {}", config.deployment_name);

    // Credentials come from the ambient environment (in-cluster service
    // account or kubeconfig); nothing else is bootstrapped here.
    let client = match kube::Client::try_default().await {
        Ok(client) => client,
        Err(err) => {
            error!("cannot create cluster client: {err}");
            return Ok(());
        }
    };

    cleanup::run(client, &config).await;

    info!("cleanup finished");
    info!("###################################################");

    Ok(())
}
