//! Asset placeholder folders next to the submission document.

use crate::error::Result;
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};

/// Asset folders and the README written into each.
pub const ASSET_READMES: &[(&str, &str)] = &[
    (
        "demo",
        "# Demo Assets\n\n데모 영상, 스크린샷, GIF 파일을 저장합니다.\n",
    ),
    (
        "evidence",
        "# Evidence Assets\n\n실행/검증 결과 스크린샷 및 로그 파일을 저장합니다.\n",
    ),
    (
        "team",
        "# Team Assets\n\n팀 소개 이미지, 프로필 이미지, 발표용 팀 자료를 저장합니다.\n",
    ),
];

/// Write every asset README under `asset_root`, overwriting existing ones.
pub fn write_asset_placeholders(asset_root: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ASSET_READMES.len());
    for (folder, content) in ASSET_READMES {
        let path = asset_root.join(folder).join("README.md");
        atomic_write_file(&path, content)?;
        written.push(path);
    }
    Ok(written)
}
