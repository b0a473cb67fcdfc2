use std::path::{Path, PathBuf};

use anyhow::Context;
use lingo_core::seed::SeedData;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeedArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SeededFile {
    file: PathBuf,
    group: String,
    group_id: i64,
    word_ids: Vec<i64>,
}

/// Handle `lingo seed`. Each file is inserted in its own transaction.
pub async fn handle(args: &SeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut seeded = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let seed = load_seed_file(file)?;
        let outcome = ctx
            .service
            .seed_group(&seed)
            .await
            .with_context(|| format!("failed to seed {}", file.display()))?;
        seeded.push(SeededFile {
            file: file.clone(),
            group: seed.group.name,
            group_id: outcome.group_id,
            word_ids: outcome.word_ids,
        });
    }
    output(&seeded, flags.format)
}

fn load_seed_file(path: &Path) -> anyhow::Result<SeedData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid seed file {}", path.display()))
}
