use k8s_openapi::api::apps::v1::Deployment;
use kube::{api::DeleteParams, Api, Client};

use crate::error::Error;

/// Deletes the deployment with foreground cascade: dependent replica sets
/// and pods are garbage-collected before the deployment object disappears.
pub async fn delete(client: &Client, namespace: &str, name: &str) -> Result<(), Error> {
    let api: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    api.delete(name, &DeleteParams::foreground()).await?;
    Ok(())
}
