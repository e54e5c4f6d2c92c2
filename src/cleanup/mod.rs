use kube::Client;
use log::{info, warn};

use crate::config::Config;

pub mod deployment;
pub mod ingress;
pub mod service;

/// Runs the teardown steps strictly in order: ingress rule patch, ingress
/// TLS patch, deployment delete, service delete. A failed step is logged
/// and never stops the steps after it.
pub async fn run(client: Client, config: &Config) {
    ingress::remove_host(&client, config).await;

    match deployment::delete(&client, &config.namespace, &config.deployment_name).await {
        Ok(()) => info!("deployment {} deleted", config.deployment_name),
        Err(err) => warn!("cannot delete deployment {}: {err}", config.deployment_name),
    }

    match service::delete(&client, &config.namespace, &config.deployment_name).await {
        Ok(()) => info!("service {} deleted", config.deployment_name),
        Err(err) => warn!("cannot delete service {}: {err}", config.deployment_name),
    }
}
