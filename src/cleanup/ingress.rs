use json_patch::{PatchOperation, RemoveOperation};
use k8s_openapi::api::networking::v1::Ingress;
use kube::{
    api::{Patch, PatchParams},
    Api, Client,
};
use log::{info, warn};

use crate::{config::Config, error::Error};

/// Removes the deployment's host from the shared ingress: one positional
/// remove patch against the rules list and one against the TLS list. The
/// two sub-operations are independent; each fetches a fresh snapshot,
/// resolves its index and patches on its own, and a failure in one is
/// logged without touching the other.
///
/// There is no resource-version precondition between fetch and patch, so a
/// concurrent mutation of the ingress can shift indices under us. Accepted
/// for a single-shot cleanup hook.
pub async fn remove_host(client: &Client, config: &Config) {
    let api: Api<Ingress> = Api::namespaced(client.clone(), &config.namespace);
    let host = config.ingress_host();

    match rule_index(&api, &config.ingress_name, &host).await {
        Ok(index) => {
            let patch = remove_patch("/spec/rules", index);
            match api
                .patch(
                    &config.ingress_name,
                    &PatchParams::default(),
                    &Patch::Json::<()>(patch),
                )
                .await
            {
                Ok(_) => info!("rule {host} removed from {} ingress", config.ingress_name),
                Err(err) => warn!("cannot patch ingress rules: {err}"),
            }
        }
        Err(err) => warn!("cannot find rule index: {err}"),
    }

    match tls_index(&api, &config.ingress_name, &host).await {
        Ok(index) => {
            let patch = remove_patch("/spec/tls", index);
            match api
                .patch(
                    &config.ingress_name,
                    &PatchParams::default(),
                    &Patch::Json::<()>(patch),
                )
                .await
            {
                Ok(_) => info!("TLS {host} removed from {} ingress", config.ingress_name),
                Err(err) => warn!("cannot patch ingress TLS: {err}"),
            }
        }
        Err(err) => warn!("cannot find TLS index: {err}"),
    }
}

async fn rule_index(api: &Api<Ingress>, name: &str, host: &str) -> Result<usize, Error> {
    let ingress = api.get(name).await?;
    find_rule_index(&ingress, host).ok_or_else(|| Error::HostNotFound(host.to_owned()))
}

async fn tls_index(api: &Api<Ingress>, name: &str, host: &str) -> Result<usize, Error> {
    let ingress = api.get(name).await?;
    find_tls_index(&ingress, host).ok_or_else(|| Error::HostNotFound(host.to_owned()))
}

/// Position of the first rule whose host equals `host` exactly. No
/// wildcard or suffix matching.
pub fn find_rule_index(ingress: &Ingress, host: &str) -> Option<usize> {
    ingress
        .spec
        .as_ref()?
        .rules
        .as_ref()?
        .iter()
        .position(|rule| rule.host.as_deref() == Some(host))
}

/// Position of the first TLS entry whose first hostname equals `host`.
/// Only hosts[0] is significant; entries with an empty or absent hostname
/// list never match.
pub fn find_tls_index(ingress: &Ingress, host: &str) -> Option<usize> {
    ingress
        .spec
        .as_ref()?
        .tls
        .as_ref()?
        .iter()
        .position(|tls| {
            tls.hosts
                .as_ref()
                .and_then(|hosts| hosts.first())
                .map(String::as_str)
                == Some(host)
        })
}

fn remove_patch(prefix: &str, index: usize) -> json_patch::Patch {
    json_patch::Patch(vec![PatchOperation::Remove(RemoveOperation {
        path: format!("{prefix}/{index}"),
    })])
}
