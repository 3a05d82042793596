use anyhow::Context;
use derive_new::new;
use std::path::Path;
use std::process::Command;

/// Name of the repository index file, both in the staging area and at the
/// destination root.
pub const INDEX_FILE_NAME: &str = "index.yaml";

/// Remote repository the published archives are served from.
pub const REMOTE_REPOSITORY: &str = "helm-store";

const RAW_CONTENT_HOST: &str = "https://raw.githubusercontent.com";

/// Public prefix under which the published archives are reachable. The
/// index-generation collaborator records this URL for every chart entry it
/// emits.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RawContentUrl {
    owner: String,
    branch: String,
}

impl std::fmt::Display for RawContentUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/helm/",
            RAW_CONTENT_HOST, self.owner, REMOTE_REPOSITORY, self.branch
        )
    }
}

/// Generate or update the index file inside the staging directory by invoking
/// the external `helm repo index` collaborator.
///
/// The merge path is always passed, whether or not the destination index
/// exists yet; its interpretation is the collaborator's contract. The child
/// process inherits this process's stdout and stderr.
pub fn generate(
    staging_dir: &Path,
    merge_path: &Path,
    url: &RawContentUrl,
) -> anyhow::Result<()> {
    let status = index_command(staging_dir, merge_path, url)
        .status()
        .context("Failed to run helm repo index")?;

    if !status.success() {
        anyhow::bail!("helm repo index failed with {}", status);
    }

    Ok(())
}

fn index_command(staging_dir: &Path, merge_path: &Path, url: &RawContentUrl) -> Command {
    let mut command = Command::new("helm");
    command
        .arg("repo")
        .arg("index")
        .arg(staging_dir)
        .arg("--merge")
        .arg(merge_path)
        .arg("--url")
        .arg(url.to_string());

    command
}
