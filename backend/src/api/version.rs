use common::responses::VersionInfo;

use crate::db_utils::pilosa_utils::pilosa_version;

pub async fn get_version_info() -> anyhow::Result<VersionInfo> {
    Ok(VersionInfo {
        pilosaversion: pilosa_version().await?,
        demoversion: env!("CARGO_PKG_VERSION").to_string(),
    })
}
