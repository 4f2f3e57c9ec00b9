//! Object-reference resolution against the fullnode.

use anyhow::{anyhow, bail, Context, Result};
use sui_json_rpc_types::SuiObjectDataOptions;
use sui_sdk::SuiClient;
use sui_types::base_types::{ObjectID, ObjectRef};
use sui_types::object::Owner;
use sui_types::transaction::{ObjectArg, SharedObjectMutability};

/// Resolve a shared object into a PTB argument, fetching its initial shared
/// version from the owner field.
pub(crate) async fn resolve_shared(
    client: &SuiClient,
    id: ObjectID,
    mutable: bool,
) -> Result<ObjectArg> {
    let resp = client
        .read_api()
        .get_object_with_options(id, SuiObjectDataOptions::new().with_owner())
        .await
        .with_context(|| format!("fetch object {id}"))?;
    let Some(data) = resp.data else {
        bail!("object not found: {id}");
    };
    let owner = data.owner.ok_or_else(|| anyhow!("object missing owner: {id}"))?;
    let initial_shared_version = match owner {
        Owner::Shared {
            initial_shared_version,
        } => initial_shared_version,
        _ => bail!("object is not shared: {id}"),
    };
    Ok(ObjectArg::SharedObject {
        id,
        initial_shared_version,
        mutability: if mutable {
            SharedObjectMutability::Mutable
        } else {
            SharedObjectMutability::Immutable
        },
    })
}

/// Resolve an owned (or immutable) object into its full reference.
pub(crate) async fn resolve_owned(client: &SuiClient, id: ObjectID) -> Result<ObjectRef> {
    let resp = client
        .read_api()
        .get_object_with_options(id, SuiObjectDataOptions::new().with_owner())
        .await
        .with_context(|| format!("fetch object {id}"))?;
    let Some(data) = resp.data else {
        bail!("object not found: {id}");
    };
    Ok(data.object_ref())
}
