use k8s_openapi::api::core::v1::Service;
use kube::{api::DeleteParams, Api, Client};

use crate::error::Error;

/// Deletes the service outright. No cascade policy: a service owns no
/// sub-resources.
pub async fn delete(client: &Client, namespace: &str, name: &str) -> Result<(), Error> {
    let api: Api<Service> = Api::namespaced(client.clone(), namespace);
    api.delete(name, &DeleteParams::default()).await?;
    Ok(())
}
